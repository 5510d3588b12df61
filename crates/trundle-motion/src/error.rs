#![warn(missing_docs)]

//! Error types for motion discretization and execution.

use thiserror::Error;
use trundle_geometry::GeometryError;

/// Errors surfaced while discretizing or executing a motion.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MotionError {
    /// The motion's length yields no discretization steps at the
    /// configured speed and time step.
    #[error(
        "zero step count: length {length} yields no steps at speed {speed} and time step {time_step}"
    )]
    ZeroStepCount {
        /// The length that was being discretized.
        length: f64,
        /// The configured target speed.
        speed: f64,
        /// The configured time step.
        time_step: f64,
    },
    /// A motion kind reached a dispatcher that cannot execute it.
    ///
    /// The [`Motion`](crate::Motion) union is closed, so the controller's
    /// exhaustive match never produces this today; it is the documented
    /// contract for any future motion kind a dispatcher does not handle.
    #[error("unsupported motion kind: {0}")]
    UnsupportedMotion(&'static str),
    /// Geometric failure while deriving a motion.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}
