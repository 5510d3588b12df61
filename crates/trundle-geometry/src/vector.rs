//! Immutable 2D point/vector value type.

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use libm::{fabs, sqrt};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::EPSILON;
use crate::error::GeometryError;

/// A 2D point or free vector with `f64` components.
///
/// `Vector2` is a value type with no identity: all operations return new
/// vectors. Equality is tolerance-based, so two vectors compare equal when
/// both components agree within an absolute tolerance of `1e-9`. A plain
/// `(f64, f64)` tuple is accepted on the right-hand side of `==` as an
/// alternate representation for comparisons only.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct Vector2 {
    /// x component.
    pub x: f64,
    /// y component.
    pub y: f64,
}

impl Vector2 {
    /// The zero vector.
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };

    /// Construct a vector from its components.
    pub const fn new(x: f64, y: f64) -> Self {
        Vector2 { x, y }
    }

    /// Euclidean norm.
    pub fn norm(&self) -> f64 {
        sqrt(self.x * self.x + self.y * self.y)
    }

    /// Dot product with `other`.
    pub fn dot(&self, other: Vector2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// 2D scalar cross product `x1·y2 − y1·x2`.
    ///
    /// Positive when `other` lies counter-clockwise of `self`.
    pub fn cross(&self, other: Vector2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Rotate by +90°: `(x, y) → (−y, x)`.
    pub const fn normal(&self) -> Vector2 {
        Vector2::new(-self.y, self.x)
    }

    /// Normalize against the vector's own norm.
    ///
    /// # Errors
    ///
    /// Returns `Err(GeometryError::DivisionByZero)` for the zero vector,
    /// whose direction is undefined.
    pub fn normalized(&self) -> Result<Vector2, GeometryError> {
        self.normalized_by(self.norm())
    }

    /// Normalize against an explicit reference distance.
    ///
    /// Both components are divided by `reference_distance`; the result is a
    /// unit vector only when the reference distance is the vector's norm.
    ///
    /// # Errors
    ///
    /// Returns `Err(GeometryError::DivisionByZero)` when the reference
    /// distance is zero.
    pub fn normalized_by(&self, reference_distance: f64) -> Result<Vector2, GeometryError> {
        if reference_distance == 0.0 {
            return Err(GeometryError::DivisionByZero(
                "zero reference distance in normalization",
            ));
        }
        Ok(Vector2::new(
            self.x / reference_distance,
            self.y / reference_distance,
        ))
    }

    /// Euclidean distance between two points.
    pub fn distance(a: Vector2, b: Vector2) -> f64 {
        let dx = a.x - b.x;
        let dy = a.y - b.y;
        sqrt(dx * dx + dy * dy)
    }

    /// True when the dot product with `other` is within tolerance of zero.
    pub fn is_orthogonal(&self, other: Vector2) -> bool {
        fabs(self.dot(other)) <= EPSILON
    }

    /// True when `self` and `other` span the same line.
    pub fn is_collinear(&self, other: Vector2) -> bool {
        self.is_orthogonal(other.normal())
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;

    fn mul(self, factor: f64) -> Vector2 {
        Vector2::new(self.x * factor, self.y * factor)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}

impl PartialEq for Vector2 {
    fn eq(&self, other: &Self) -> bool {
        fabs(self.x - other.x) <= EPSILON && fabs(self.y - other.y) <= EPSILON
    }
}

impl PartialEq<(f64, f64)> for Vector2 {
    fn eq(&self, other: &(f64, f64)) -> bool {
        *self == Vector2::new(other.0, other.1)
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from(xy: (f64, f64)) -> Vector2 {
        Vector2::new(xy.0, xy.1)
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
