#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

//! A `no_std` library for the 2D geometry of differential-drive paths.
//!
//! This crate provides the pure math a path executor needs: an immutable
//! 2D vector type, infinite lines with a closed-form intersection, frame
//! rotation and mirror-reflection helpers, and circular arcs derived from
//! two endpoints and their tangent vectors.

#[cfg(feature = "std")]
extern crate std;

pub mod arc;
pub mod error;
pub mod frame;
pub mod line;
pub mod vector;

pub use arc::{Arc, Direction};
pub use error::GeometryError;
pub use line::Line;
pub use vector::Vector2;

/// Absolute tolerance used for approximate comparisons throughout the crate.
pub const EPSILON: f64 = 1e-9;

/// Approximate scalar comparison: relative `EPSILON` with an absolute floor
/// of `EPSILON` for values near zero.
pub(crate) fn is_close(a: f64, b: f64) -> bool {
    let scale = libm::fabs(a).max(libm::fabs(b)).max(1.0);
    libm::fabs(a - b) <= EPSILON * scale
}
