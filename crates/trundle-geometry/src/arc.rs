//! Circular arcs derived from two oriented endpoints.
//!
//! An [`Arc`] is built from its endpoints and the unit tangent vectors
//! giving the direction of travel at each endpoint. Construction derives
//! the center, radius, signed swept angle, and rotation sense; the tangents
//! must describe a consistent turn about the derived center or construction
//! fails.

use core::f64::consts::PI;
use core::fmt;

use libm::{acos, asin};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::EPSILON;
use crate::error::GeometryError;
use crate::frame;
use crate::is_close;
use crate::line::Line;
use crate::vector::Vector2;

/// Rotation sense about the arc center.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Counter-clockwise travel; the swept angle is non-negative.
    Direct,
    /// Clockwise travel; the swept angle is remapped to `angle − 2π`.
    Indirect,
}

/// A circular arc between two oriented endpoints.
///
/// All fields are derived once at construction and never mutated.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    start: Vector2,
    end: Vector2,
    start_tangent: Vector2,
    end_tangent: Vector2,
    center: Vector2,
    radius: f64,
    angle: f64,
    direction: Direction,
    length: f64,
}

impl Arc {
    /// Build an arc from both endpoints and both tangents.
    ///
    /// The tangents are normalized at construction.
    ///
    /// # Errors
    ///
    /// - `DivisionByZero` when either tangent is the zero vector.
    /// - `IncoherentTangents` when the tangents do not turn consistently
    ///   about the derived center, or when that center is not equidistant
    ///   from both endpoints.
    pub fn new(
        start: Vector2,
        end: Vector2,
        start_tangent: Vector2,
        end_tangent: Vector2,
    ) -> Result<Arc, GeometryError> {
        let start_tangent = start_tangent.normalized()?;
        let end_tangent = end_tangent.normalized()?;
        Arc::build(start, end, start_tangent, end_tangent)
    }

    /// Build an arc from its endpoints and the start tangent alone.
    ///
    /// The end tangent is derived by reflecting the start tangent across
    /// the `start − end` axis, which models a smooth tangent-continuous arc
    /// when only one tangent is known.
    ///
    /// # Errors
    ///
    /// As [`Arc::new`]; additionally `DivisionByZero` when `start` and
    /// `end` coincide (the reflection axis vanishes).
    pub fn from_start_tangent(
        start: Vector2,
        end: Vector2,
        start_tangent: Vector2,
    ) -> Result<Arc, GeometryError> {
        let start_tangent = start_tangent.normalized()?;
        let end_tangent = frame::mirror(start_tangent, start - end)?;
        Arc::build(start, end, start_tangent, end_tangent)
    }

    fn build(
        start: Vector2,
        end: Vector2,
        start_tangent: Vector2,
        end_tangent: Vector2,
    ) -> Result<Arc, GeometryError> {
        let center = Arc::derive_center(start, end, start_tangent, end_tangent)?;

        // Structural invariant: the center must be equidistant from both
        // endpoints. A violation means the tangents do not describe one
        // circle through the two points.
        let radius = Vector2::distance(center, start);
        let end_distance = Vector2::distance(center, end);
        if !is_close(radius, end_distance) {
            return Err(GeometryError::IncoherentTangents(
                "center is not equidistant from both endpoints",
            ));
        }

        let start_turn = (start - center).cross(start_tangent);
        let end_turn = (end - center).cross(end_tangent);
        if (start_turn > EPSILON && end_turn < -EPSILON)
            || (start_turn < -EPSILON && end_turn > EPSILON)
        {
            return Err(GeometryError::IncoherentTangents(
                "tangents turn in opposite senses about the center",
            ));
        }

        let mut angle = if radius == 0.0 || start == end {
            // On-the-spot rotation: the swept angle is read off the
            // tangents directly.
            acos(clamp_to_unit(start_tangent.dot(end_tangent)))
        } else {
            // Chord-length/radius relation, non-negative in [0, π].
            let chord = Vector2::distance(start, end);
            2.0 * asin(clamp_to_unit(chord / (2.0 * radius)))
        };

        let direction = if start_turn < -EPSILON {
            Direction::Indirect
        } else {
            Direction::Direct
        };
        if direction == Direction::Indirect {
            angle -= 2.0 * PI;
        }

        let length = libm::fabs(angle) * PI * radius;

        Ok(Arc {
            start,
            end,
            start_tangent,
            end_tangent,
            center,
            radius,
            angle,
            direction,
            length,
        })
    }

    /// Intersect the two radial lines (endpoint, tangent normal).
    ///
    /// Parallel tangents have no unique radial intersection; the chord
    /// midpoint then stands in for the center, which covers the straight
    /// and on-the-spot degenerate segments.
    fn derive_center(
        start: Vector2,
        end: Vector2,
        start_tangent: Vector2,
        end_tangent: Vector2,
    ) -> Result<Vector2, GeometryError> {
        let start_radial = Line::new(start, start_tangent.normal())?;
        let end_radial = Line::new(end, end_tangent.normal())?;
        match start_radial.intersection(&end_radial) {
            Ok(center) => Ok(center),
            Err(GeometryError::ParallelLines(_)) => Ok((start + end) * 0.5),
            Err(other) => Err(other),
        }
    }

    /// Start point.
    pub fn start(&self) -> Vector2 {
        self.start
    }

    /// End point.
    pub fn end(&self) -> Vector2 {
        self.end
    }

    /// Unit direction of travel at the start point.
    pub fn start_tangent(&self) -> Vector2 {
        self.start_tangent
    }

    /// Unit direction of travel at the end point.
    pub fn end_tangent(&self) -> Vector2 {
        self.end_tangent
    }

    /// Center of the supporting circle.
    pub fn center(&self) -> Vector2 {
        self.center
    }

    /// Radius of the supporting circle; zero for on-the-spot rotations.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Signed swept angle in radians. Negative for [`Direction::Indirect`]
    /// arcs, and may exceed ±π.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Rotation sense about the center.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Arc length, computed as `|angle| · π · radius`.
    ///
    /// Note the extra π factor: the motion controller's step counts are
    /// calibrated against this convention, so it must not be "fixed" in
    /// isolation.
    pub fn length(&self) -> f64 {
        self.length
    }
}

impl fmt::Display for Arc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "arc({} -> {}, center {}, r {:.3}, angle {:.3})",
            self.start, self.end, self.center, self.radius, self.angle
        )
    }
}

fn clamp_to_unit(value: f64) -> f64 {
    value.clamp(-1.0, 1.0)
}
