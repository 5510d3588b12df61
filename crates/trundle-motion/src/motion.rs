//! Path segments: straight translations, arc rotations, and their union.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use trundle_geometry::{Arc, GeometryError, Vector2};

/// A straight path segment between two distinct points.
///
/// Length and unit direction are derived once at construction.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Translation {
    start: Vector2,
    end: Vector2,
    length: f64,
    direction: Vector2,
}

impl Translation {
    /// Build a translation from `start` to `end`.
    ///
    /// # Errors
    ///
    /// Returns `Err(GeometryError::DivisionByZero)` when the two points
    /// coincide: a zero-length translation has no direction of travel.
    pub fn new(start: Vector2, end: Vector2) -> Result<Translation, GeometryError> {
        let direction = (end - start).normalized()?;
        Ok(Translation {
            start,
            end,
            length: Vector2::distance(start, end),
            direction,
        })
    }

    /// Start point.
    pub fn start(&self) -> Vector2 {
        self.start
    }

    /// End point.
    pub fn end(&self) -> Vector2 {
        self.end
    }

    /// Travel length.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Unit direction of travel.
    pub fn direction(&self) -> Vector2 {
        self.direction
    }

    /// True when the two translations run along collinear directions
    /// (same or opposite way).
    pub fn is_parallel_with(&self, other: &Translation) -> bool {
        self.direction.is_collinear(other.direction)
    }
}

impl fmt::Display for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "translation({} -> {}, len {:.3})",
            self.start, self.end, self.length
        )
    }
}

/// An arc path segment, a thin wrapper over [`Arc`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Rotation {
    arc: Arc,
}

impl Rotation {
    /// Build a rotation from both endpoints and both tangents.
    ///
    /// # Errors
    ///
    /// Propagates the [`Arc`] construction errors.
    pub fn new(
        start: Vector2,
        end: Vector2,
        start_tangent: Vector2,
        end_tangent: Vector2,
    ) -> Result<Rotation, GeometryError> {
        Ok(Rotation {
            arc: Arc::new(start, end, start_tangent, end_tangent)?,
        })
    }

    /// Connecting rotation between two consecutive translations: it turns
    /// from the previous segment's direction of travel into the next one's.
    ///
    /// # Errors
    ///
    /// Propagates the [`Arc`] construction errors.
    pub fn from_translations(
        previous: &Translation,
        next: &Translation,
    ) -> Result<Rotation, GeometryError> {
        Rotation::new(
            previous.end(),
            next.start(),
            previous.direction(),
            next.direction(),
        )
    }

    /// The underlying arc.
    pub fn arc(&self) -> &Arc {
        &self.arc
    }

    /// Arc length of the rotation.
    pub fn length(&self) -> f64 {
        self.arc.length()
    }

    /// True for a spin in place (radius 0): the robot turns without
    /// translating.
    pub fn is_on_the_spot(&self) -> bool {
        self.arc.radius() == 0.0
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rotation({})", self.arc)
    }
}

/// A planner-produced path segment.
///
/// Deliberately a closed union: adding a motion kind must break every
/// consumer until it handles the new variant.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum Motion {
    /// A straight run.
    Translation(Translation),
    /// An arc or on-the-spot turn.
    Rotation(Rotation),
}

impl Motion {
    /// Path length this motion contributes to the energy projection.
    pub fn length(&self) -> f64 {
        match self {
            Motion::Translation(translation) => translation.length(),
            Motion::Rotation(rotation) => rotation.length(),
        }
    }
}

impl From<Translation> for Motion {
    fn from(translation: Translation) -> Motion {
        Motion::Translation(translation)
    }
}

impl From<Rotation> for Motion {
    fn from(rotation: Rotation) -> Motion {
        Motion::Rotation(rotation)
    }
}
