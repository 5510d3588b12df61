//! Frame-relative rotation and mirror reflection.
//!
//! These helpers express a vector in the frame whose x-axis is an arbitrary
//! reference vector, and build on that to reflect a vector across an axis
//! through the origin. Arc construction uses the reflection to complete a
//! missing end tangent.

use crate::error::GeometryError;
use crate::vector::Vector2;

/// Rotate `vector` into the frame whose x-axis is `reference`.
///
/// Standard 2D change of basis: with `(cosθ, sinθ)` the normalized
/// reference, `x' = x·cosθ + y·sinθ` and `y' = −x·sinθ + y·cosθ`.
///
/// # Errors
///
/// Returns `Err(GeometryError::DivisionByZero)` when `reference` is the
/// zero vector (propagated from normalization).
pub fn rotate_into_frame(vector: Vector2, reference: Vector2) -> Result<Vector2, GeometryError> {
    let r = reference.normalized()?;
    Ok(Vector2::new(
        vector.x * r.x + vector.y * r.y,
        -vector.x * r.y + vector.y * r.x,
    ))
}

/// Reflect `vector` across the line through the origin parallel to `axis`.
///
/// Rotates into the axis frame, negates the y component, then rotates back
/// using the axis's own mirror `(axis.x, −axis.y)` as the inverse-frame
/// reference. The reflection is an involution for a fixed axis.
///
/// # Errors
///
/// Returns `Err(GeometryError::DivisionByZero)` when `axis` is the zero
/// vector.
pub fn mirror(vector: Vector2, axis: Vector2) -> Result<Vector2, GeometryError> {
    let in_frame = rotate_into_frame(vector, axis)?;
    let flipped = Vector2::new(in_frame.x, -in_frame.y);
    rotate_into_frame(flipped, Vector2::new(axis.x, -axis.y))
}

#[cfg(test)]
mod tests {
    use super::*;

    const NORTH: Vector2 = Vector2::new(0.0, 1.0);
    const SOUTH: Vector2 = Vector2::new(0.0, -1.0);
    const WEST: Vector2 = Vector2::new(-1.0, 0.0);
    const EAST: Vector2 = Vector2::new(1.0, 0.0);

    fn north_east() -> Vector2 {
        (NORTH + EAST).normalized().unwrap()
    }

    fn north_west() -> Vector2 {
        (NORTH + WEST).normalized().unwrap()
    }

    fn south_west() -> Vector2 {
        (SOUTH + WEST).normalized().unwrap()
    }

    #[test]
    fn test_rotate_into_frame_cardinal_cases() {
        let cases = [
            (NORTH, EAST, NORTH),
            (NORTH, NORTH, EAST),
            (WEST, NORTH, NORTH),
            (EAST, NORTH, SOUTH),
            (SOUTH, NORTH, WEST),
            (NORTH, SOUTH, WEST),
            (WEST, SOUTH, SOUTH),
            (EAST, SOUTH, NORTH),
            (SOUTH, SOUTH, EAST),
            (NORTH * 2.0, EAST, NORTH * 2.0),
            (NORTH * -5.0, NORTH, EAST * -5.0),
            (NORTH, north_east(), north_east()),
            (NORTH, south_west(), south_west()),
        ];
        for (vector, reference, expected) in cases {
            let rotated = rotate_into_frame(vector, reference).unwrap();
            assert_eq!(rotated, expected, "{vector} in frame {reference}");
            // Rotating back with the mirrored reference is the inverse.
            let back = rotate_into_frame(rotated, Vector2::new(reference.x, -reference.y)).unwrap();
            assert_eq!(back, vector, "round trip of {vector}");
        }
    }

    #[test]
    fn test_rotate_zero_vector_is_fixed() {
        let rotated = rotate_into_frame(Vector2::ZERO, north_west()).unwrap();
        assert_eq!(rotated, Vector2::ZERO);
    }

    #[test]
    fn test_rotate_with_zero_reference_fails() {
        let result = rotate_into_frame(NORTH, Vector2::ZERO);
        assert!(matches!(result, Err(GeometryError::DivisionByZero(_))));
    }

    #[test]
    fn test_mirror_cases() {
        let cases = [
            (NORTH, EAST, SOUTH),
            (NORTH, NORTH, NORTH),
            (NORTH, north_east(), EAST),
            (NORTH, south_west(), EAST),
            (north_east(), NORTH, north_west()),
            (north_east() * 2.3, NORTH, north_west() * 2.3),
        ];
        for (vector, axis, expected) in cases {
            assert_eq!(mirror(vector, axis).unwrap(), expected, "{vector} across {axis}");
        }
    }

    #[test]
    fn test_mirror_is_an_involution() {
        let vector = Vector2::new(0.3, -1.7);
        let axis = Vector2::new(2.0, 1.0);
        let twice = mirror(mirror(vector, axis).unwrap(), axis).unwrap();
        assert_eq!(twice, vector);
    }

    #[test]
    fn test_mirror_with_zero_axis_fails() {
        let result = mirror(NORTH, Vector2::ZERO);
        assert!(matches!(result, Err(GeometryError::DivisionByZero(_))));
    }
}
