use tracing::debug;
use trundle_geometry::{GeometryError, Vector2};
use trundle_motion::{Motion, Rotation, Translation};

/// Arranges raw waypoints into an ordered, executable motion list.
///
/// Consecutive duplicate waypoints are dropped (a zero-length translation
/// has no direction), and collinear legs are joined without a connecting
/// rotation (a zero-angle rotation cannot be discretized into steps).
#[derive(Debug, Clone, Copy, Default)]
pub struct Navigator;

impl Navigator {
    pub fn new() -> Navigator {
        Navigator
    }

    /// Compute the motion list for a waypoint path: one translation per
    /// leg, with an on-the-spot rotation at every turning joint.
    pub fn compute_motions(&self, waypoints: &[Vector2]) -> Result<Vec<Motion>, GeometryError> {
        let mut translations = Vec::new();
        for pair in waypoints.windows(2) {
            if pair[0] == pair[1] {
                continue;
            }
            translations.push(Translation::new(pair[0], pair[1])?);
        }

        let mut motions: Vec<Motion> = Vec::new();
        let mut legs = translations.into_iter();
        let Some(mut previous) = legs.next() else {
            return Ok(motions);
        };
        motions.push(Motion::Translation(previous.clone()));

        for next in legs {
            if !previous.is_parallel_with(&next) {
                motions.push(Motion::Rotation(Rotation::from_translations(
                    &previous, &next,
                )?));
            }
            motions.push(Motion::Translation(next.clone()));
            previous = next;
        }

        debug!(
            waypoints = waypoints.len(),
            motions = motions.len(),
            "arranged motion list"
        );
        Ok(motions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_single_waypoint_paths() {
        let navigator = Navigator::new();
        assert!(navigator.compute_motions(&[]).unwrap().is_empty());
        assert!(
            navigator
                .compute_motions(&[Vector2::ZERO])
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn test_square_path_alternates_legs_and_turns() {
        let navigator = Navigator::new();
        let waypoints = [
            Vector2::new(0.0, 0.0),
            Vector2::new(10.0, 0.0),
            Vector2::new(10.0, 10.0),
            Vector2::new(0.0, 10.0),
            Vector2::new(0.0, 0.0),
        ];
        let motions = navigator.compute_motions(&waypoints).unwrap();

        // 4 legs with 3 turning joints.
        assert_eq!(motions.len(), 7);
        for (i, motion) in motions.iter().enumerate() {
            match motion {
                Motion::Translation(t) => {
                    assert_eq!(i % 2, 0, "legs sit at even indices");
                    assert!((t.length() - 10.0).abs() < 1e-9);
                }
                Motion::Rotation(r) => {
                    assert_eq!(i % 2, 1, "turns sit at odd indices");
                    assert!(r.is_on_the_spot());
                }
            }
        }
    }

    #[test]
    fn test_duplicate_waypoints_are_dropped() {
        let navigator = Navigator::new();
        let waypoints = [
            Vector2::new(0.0, 0.0),
            Vector2::new(0.0, 0.0),
            Vector2::new(5.0, 0.0),
        ];
        let motions = navigator.compute_motions(&waypoints).unwrap();
        assert_eq!(motions.len(), 1);
    }

    #[test]
    fn test_collinear_legs_get_no_connecting_rotation() {
        let navigator = Navigator::new();
        let waypoints = [
            Vector2::new(0.0, 0.0),
            Vector2::new(5.0, 0.0),
            Vector2::new(9.0, 0.0),
        ];
        let motions = navigator.compute_motions(&waypoints).unwrap();
        assert_eq!(motions.len(), 2);
        assert!(
            motions
                .iter()
                .all(|m| matches!(m, Motion::Translation(_)))
        );
    }
}
