#![warn(missing_docs)]

//! Motion primitives and the differential-drive motion controller.
//!
//! A planner produces an ordered sequence of [`Motion`] values (straight
//! [`Translation`]s and arc [`Rotation`]s); the [`MotionController`]
//! executes each one as a bounded sequence of discrete wheel-displacement
//! commands, drawing from an [`EnergySupplier`] as it goes.

pub mod controller;
pub mod energy;
pub mod error;
pub mod motion;
pub mod wheel;

pub use controller::{MotionConfig, MotionController};
pub use energy::EnergySupplier;
pub use error::MotionError;
pub use motion::{Motion, Rotation, Translation};
pub use wheel::{Odometer, Wheel};
