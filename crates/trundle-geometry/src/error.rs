#![warn(missing_docs)]

//! Error types for the geometry library.
//!
//! Every failure here is local and recoverable by the caller; the message
//! payload names the quantity that was zero, parallel, or incoherent.

use core::fmt;

/// Errors that can occur while deriving geometric entities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// A normalization was requested against a zero reference distance.
    /// This includes normalizing the zero vector.
    DivisionByZero(&'static str),
    /// A line intersection was requested on parallel or anti-parallel
    /// directions, for which no unique solution exists.
    ParallelLines(&'static str),
    /// Arc construction detected tangents that do not describe a
    /// consistent turn about the derived center.
    IncoherentTangents(&'static str),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::DivisionByZero(msg) => write!(f, "division by zero: {}", msg),
            GeometryError::ParallelLines(msg) => write!(f, "parallel lines: {}", msg),
            GeometryError::IncoherentTangents(msg) => write!(f, "incoherent tangents: {}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GeometryError {}
