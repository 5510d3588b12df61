//! Infinite 2D lines: an anchor point plus a unit direction.

use core::fmt;

use libm::fabs;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::is_close;
use crate::vector::Vector2;

/// An infinite line through a point, along a unit direction.
///
/// The line owns a normalized copy of the direction it was built from.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    point: Vector2,
    direction: Vector2,
}

impl Line {
    /// Build a line through `point` along `vector`.
    ///
    /// The direction is normalized at construction.
    ///
    /// # Errors
    ///
    /// Returns `Err(GeometryError::DivisionByZero)` when `vector` is the
    /// zero vector.
    pub fn new(point: Vector2, vector: Vector2) -> Result<Line, GeometryError> {
        Ok(Line {
            point,
            direction: vector.normalized()?,
        })
    }

    /// The anchor point.
    pub fn point(&self) -> Vector2 {
        self.point
    }

    /// The unit direction.
    pub fn direction(&self) -> Vector2 {
        self.direction
    }

    /// True when `p` lies on the line.
    pub fn contains(&self, p: Vector2) -> bool {
        (self.point - p).is_collinear(self.direction)
    }

    /// Intersection point of two lines.
    ///
    /// Solves the 2×2 linear system expressing the intersection as a point
    /// on `self`: with `k = dir_other·dir_self` and `Δp` the anchor offset,
    /// the coefficient along `self` is
    /// `(Δp·dir_self − (Δp·dir_other)·k) / (1 − k²)`.
    ///
    /// # Errors
    ///
    /// Returns `Err(GeometryError::ParallelLines)` when `|k|` is within
    /// tolerance of 1 (parallel or anti-parallel directions).
    pub fn intersection(&self, other: &Line) -> Result<Vector2, GeometryError> {
        let k = other.direction.dot(self.direction);
        if is_close(fabs(k), 1.0) {
            return Err(GeometryError::ParallelLines(
                "no unique intersection for parallel directions",
            ));
        }

        let dp = other.point - self.point;
        let coef = (dp.dot(self.direction) - dp.dot(other.direction) * k) / (1.0 - k * k);
        Ok(self.point + self.direction * coef)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line({} + t·{})", self.point, self.direction)
    }
}
