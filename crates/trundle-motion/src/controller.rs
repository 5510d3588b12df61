//! Differential-drive execution of planned motions.
//!
//! The controller quantizes each motion into steps sized so the total
//! duration divides evenly by the fixed time step, then drives its two
//! wheels one step at a time while drawing energy from the supplier.

use tracing::debug;

use trundle_geometry::Direction;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::energy::EnergySupplier;
use crate::error::MotionError;
use crate::motion::{Motion, Rotation, Translation};
use crate::wheel::Wheel;

/// Per-controller execution parameters, constructed once and read-only
/// during execution.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionConfig {
    /// Target speed, in length units per second.
    pub speed: f64,
    /// Discretization interval, in seconds.
    pub time_step: f64,
    /// Energy drawn per length unit, per wheel.
    pub consumption_per_length_unit: f64,
    /// Distance between the two wheels.
    pub wheel_axis_length: f64,
}

impl Default for MotionConfig {
    fn default() -> MotionConfig {
        MotionConfig {
            speed: 0.1,
            time_step: 0.1,
            consumption_per_length_unit: 1.0,
            wheel_axis_length: 1.0,
        }
    }
}

/// A quantized motion: `steps` identical intervals of `step_length`.
#[derive(Debug, Clone, Copy)]
struct StepPlan {
    steps: u64,
    step_length: f64,
}

/// Differential-drive executor.
///
/// Owns the two wheel actuators and converts each motion into per-step
/// wheel displacements that respect the configured wheel-axis length,
/// target speed, and time step. Execution is synchronous: each call runs
/// its step loop to completion before returning.
#[derive(Debug)]
pub struct MotionController<W: Wheel> {
    right_wheel: W,
    left_wheel: W,
    config: MotionConfig,
}

impl<W: Wheel> MotionController<W> {
    /// Build a controller around its two wheels.
    pub fn new(right_wheel: W, left_wheel: W, config: MotionConfig) -> MotionController<W> {
        MotionController {
            right_wheel,
            left_wheel,
            config,
        }
    }

    /// The execution parameters.
    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    /// The right wheel actuator.
    pub fn right_wheel(&self) -> &W {
        &self.right_wheel
    }

    /// The left wheel actuator.
    pub fn left_wheel(&self) -> &W {
        &self.left_wheel
    }

    /// Energy required to drive one wheel over `length`.
    pub fn required_energy_for(&self, length: f64) -> f64 {
        self.config.consumption_per_length_unit * length
    }

    /// Execute one motion to completion.
    ///
    /// # Errors
    ///
    /// Returns `Err(MotionError::ZeroStepCount)` when the motion is too
    /// short to fill a single time step at the configured speed.
    pub fn execute(
        &mut self,
        motion: &Motion,
        supplier: &mut EnergySupplier,
    ) -> Result<(), MotionError> {
        match motion {
            Motion::Translation(translation) => self.run_translation(translation, supplier),
            Motion::Rotation(rotation) => self.run_rotation(rotation, supplier),
        }
    }

    /// Quantize `length` into steps: `steps = floor((length/speed)/time_step)`,
    /// each of `length/steps`.
    fn step_plan(&self, length: f64) -> Result<StepPlan, MotionError> {
        let duration = length / self.config.speed;
        let steps = (duration / self.config.time_step).floor();
        if steps < 1.0 {
            return Err(MotionError::ZeroStepCount {
                length,
                speed: self.config.speed,
                time_step: self.config.time_step,
            });
        }
        let steps = steps as u64;
        Ok(StepPlan {
            steps,
            step_length: length / steps as f64,
        })
    }

    fn run_translation(
        &mut self,
        translation: &Translation,
        supplier: &mut EnergySupplier,
    ) -> Result<(), MotionError> {
        let plan = self.step_plan(translation.length())?;
        let consumption_per_step = 2.0 * self.required_energy_for(plan.step_length);
        debug!(
            length = translation.length(),
            steps = plan.steps,
            step_length = plan.step_length,
            "running translation"
        );

        for _ in 0..plan.steps {
            self.right_wheel.run(plan.step_length);
            self.left_wheel.run(plan.step_length);
            supplier.consume(consumption_per_step);
        }
        Ok(())
    }

    fn run_rotation(
        &mut self,
        rotation: &Rotation,
        supplier: &mut EnergySupplier,
    ) -> Result<(), MotionError> {
        if rotation.is_on_the_spot() {
            self.run_rotation_on_spot(rotation, supplier)
        } else {
            self.run_rotation_on_center(rotation, supplier)
        }
    }

    /// Spin in place: both wheels trace the axis circle in opposite
    /// directions.
    fn run_rotation_on_spot(
        &mut self,
        rotation: &Rotation,
        supplier: &mut EnergySupplier,
    ) -> Result<(), MotionError> {
        let angle = rotation.arc().angle();
        let length = angle.abs() * self.config.wheel_axis_length / 2.0;
        let plan = self.step_plan(length)?;
        let spin = if angle >= 0.0 {
            plan.step_length
        } else {
            -plan.step_length
        };
        let consumption_per_step = 2.0 * self.required_energy_for(plan.step_length);
        debug!(angle, steps = plan.steps, "running on-the-spot rotation");

        for _ in 0..plan.steps {
            self.right_wheel.run(spin);
            self.left_wheel.run(-spin);
            supplier.consume(consumption_per_step);
        }
        Ok(())
    }

    /// Arc about a center: the outer wheel sets the step length, the inner
    /// wheel is scaled down by the radius ratio.
    fn run_rotation_on_center(
        &mut self,
        rotation: &Rotation,
        supplier: &mut EnergySupplier,
    ) -> Result<(), MotionError> {
        let arc = rotation.arc();
        let half_axis = self.config.wheel_axis_length / 2.0;
        let outer_radius = arc.radius() + half_axis;
        let inner_radius = arc.radius() - half_axis;

        let outer_length = outer_radius * arc.angle().abs();
        let ratio = inner_radius / outer_radius;
        let plan = self.step_plan(outer_length)?;

        // The outer wheel is the one away from the turn: right on a direct
        // (counter-clockwise) arc, left on an indirect one.
        let (right_step, left_step) = match arc.direction() {
            Direction::Direct => (plan.step_length, ratio * plan.step_length),
            Direction::Indirect => (ratio * plan.step_length, plan.step_length),
        };
        let consumption_per_step = self.required_energy_for(right_step.abs())
            + self.required_energy_for(left_step.abs());
        debug!(
            angle = arc.angle(),
            radius = arc.radius(),
            steps = plan.steps,
            right_step,
            left_step,
            "running center rotation"
        );

        for _ in 0..plan.steps {
            self.right_wheel.run(right_step);
            self.left_wheel.run(left_step);
            supplier.consume(consumption_per_step);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::f64::consts::PI;
    use std::rc::Rc;

    use trundle_geometry::Vector2;

    const EPS: f64 = 1e-9;

    /// Test double recording every displacement it is commanded.
    #[derive(Clone, Default)]
    struct RecordingWheel {
        calls: Rc<RefCell<Vec<f64>>>,
    }

    impl RecordingWheel {
        fn values(&self) -> Vec<f64> {
            self.calls.borrow().clone()
        }
    }

    impl Wheel for RecordingWheel {
        fn run(&mut self, length: f64) {
            self.calls.borrow_mut().push(length);
        }
    }

    fn controller() -> (
        MotionController<RecordingWheel>,
        RecordingWheel,
        RecordingWheel,
    ) {
        let right = RecordingWheel::default();
        let left = RecordingWheel::default();
        let ctrl = MotionController::new(right.clone(), left.clone(), MotionConfig::default());
        (ctrl, right, left)
    }

    fn distinct(values: &[f64]) -> usize {
        let mut seen: Vec<f64> = Vec::new();
        for &v in values {
            if !seen.iter().any(|&s| s == v) {
                seen.push(v);
            }
        }
        seen.len()
    }

    #[test]
    fn test_default_values_are_well_known() {
        let config = MotionConfig::default();
        assert_eq!(config.speed, 0.1);
        assert_eq!(config.time_step, 0.1);
        assert_eq!(config.consumption_per_length_unit, 1.0);
        assert_eq!(config.wheel_axis_length, 1.0);
    }

    #[test]
    fn test_translation_emits_uniform_steps() {
        let (mut ctrl, right, left) = controller();
        let mut supplier = EnergySupplier::default();
        let translation =
            Translation::new(Vector2::ZERO, Vector2::new(10.0, 0.0)).unwrap();
        assert_eq!(translation.length(), 10.0);

        // 10 length units at 0.1/s is 100 s; at 0.1 s per step, 1000 steps
        // of 0.01 each.
        ctrl.execute(&Motion::Translation(translation), &mut supplier)
            .unwrap();

        let right_values = right.values();
        let left_values = left.values();
        assert_eq!(right_values.len(), 1000);
        assert_eq!(left_values.len(), 1000);
        assert_eq!(distinct(&right_values), 1);
        assert_eq!(distinct(&left_values), 1);
        assert!((right_values[0] - 0.01).abs() < EPS);
        assert!((left_values[0] - 0.01).abs() < EPS);

        // 1000 steps, two wheels, 0.01 per wheel per step.
        assert!((supplier.remaining() - 980.0).abs() < 1e-6);
    }

    #[test]
    fn test_translation_too_short_for_one_step() {
        let (mut ctrl, _, _) = controller();
        let mut supplier = EnergySupplier::default();
        let translation =
            Translation::new(Vector2::ZERO, Vector2::new(0.005, 0.0)).unwrap();

        let result = ctrl.execute(&Motion::Translation(translation), &mut supplier);
        assert!(matches!(
            result,
            Err(MotionError::ZeroStepCount { .. })
        ));
        assert_eq!(supplier.remaining(), 1000.0);
    }

    #[test]
    fn test_rotation_on_the_spot() {
        let (mut ctrl, right, left) = controller();
        let mut supplier = EnergySupplier::default();
        let spot = Vector2::new(1.0, 0.0);
        let rotation = Rotation::new(
            spot,
            spot,
            Vector2::new(0.0, 1.0),
            Vector2::new(-1.0, 0.0),
        )
        .unwrap();
        let angle = rotation.arc().angle();
        assert!((angle - PI / 2.0).abs() < EPS);
        assert!(rotation.is_on_the_spot());

        // Stepping length is |angle|·axis/2 = π/4, giving floor(78.5) = 78
        // steps.
        ctrl.execute(&Motion::Rotation(rotation), &mut supplier)
            .unwrap();

        let right_values = right.values();
        let left_values = left.values();
        assert_eq!(right_values.len(), 78);
        assert_eq!(left_values.len(), 78);
        assert_eq!(distinct(&right_values), 1);
        assert_eq!(distinct(&left_values), 1);

        // Pure spin: exact negatives, each of (angle/2)/78.
        assert_eq!(right_values[0], -left_values[0]);
        assert!((right_values[0] - (angle / 2.0) / 78.0).abs() < EPS);
    }

    #[test]
    fn test_rotation_with_center_direct() {
        let (mut ctrl, right, left) = controller();
        let mut supplier = EnergySupplier::default();
        let rotation = Rotation::new(
            Vector2::new(10.0, 0.0),
            Vector2::new(0.0, 10.0),
            Vector2::new(0.0, 1.0),
            Vector2::new(-1.0, 0.0),
        )
        .unwrap();
        let arc = rotation.arc();
        assert_eq!(arc.center(), Vector2::ZERO);
        assert!((arc.radius() - 10.0).abs() < EPS);
        assert!((arc.angle() - PI / 2.0).abs() < EPS);

        // Outer length 10.5·π/2 ≈ 16.493 gives floor(1649.3) = 1649 steps.
        ctrl.execute(&Motion::Rotation(rotation), &mut supplier)
            .unwrap();

        let right_values = right.values();
        let left_values = left.values();
        assert_eq!(right_values.len(), 1649);
        assert_eq!(left_values.len(), 1649);
        assert_eq!(distinct(&right_values), 1);
        assert_eq!(distinct(&left_values), 1);

        // Direct arc: right wheel is the outer one.
        let outer = right_values[0];
        let inner = left_values[0];
        assert!(outer > inner);
        assert!((outer / inner - 10.5 / 9.5).abs() < 1e-9);
        assert!((outer - (PI / 2.0) * 10.5 / 1649.0).abs() < EPS);
    }

    #[test]
    fn test_rotation_with_center_indirect() {
        let (mut ctrl, right, left) = controller();
        let mut supplier = EnergySupplier::default();
        let rotation = Rotation::new(
            Vector2::new(0.0, 5.0),
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, -1.0),
            Vector2::new(-1.0, -1.0),
        )
        .unwrap();
        let arc = rotation.arc();
        let radius = 3.5355339059327373;
        assert_eq!(arc.center(), Vector2::new(-2.5, 2.5));
        assert!((arc.radius() - radius).abs() < EPS);
        assert!((arc.angle() - (-3.0 * PI / 2.0)).abs() < EPS);

        // Outer length (radius + 0.5)·3π/2 ≈ 19.017 gives 1901 steps.
        ctrl.execute(&Motion::Rotation(rotation), &mut supplier)
            .unwrap();

        let right_values = right.values();
        let left_values = left.values();
        assert_eq!(right_values.len(), 1901);
        assert_eq!(left_values.len(), 1901);

        // Indirect arc: left wheel is the outer one.
        let outer = left_values[0];
        let inner = right_values[0];
        assert!(outer > inner);
        let outer_radius = radius + 0.5;
        let inner_radius = radius - 0.5;
        assert!((outer / inner - outer_radius / inner_radius).abs() < 1e-9);
        assert!((outer - (3.0 * PI / 2.0) * outer_radius / 1901.0).abs() < EPS);

        // Energy per step is the sum of the two differing wheel draws.
        let consumed = 1000.0 - supplier.remaining();
        let expected = 1901.0 * (outer + inner);
        assert!((consumed - expected).abs() < 1e-6);
    }

    #[test]
    fn test_required_energy_scales_with_consumption() {
        let right = RecordingWheel::default();
        let left = RecordingWheel::default();
        let config = MotionConfig {
            consumption_per_length_unit: 2.5,
            ..MotionConfig::default()
        };
        let ctrl = MotionController::new(right, left, config);
        assert!((ctrl.required_energy_for(4.0) - 10.0).abs() < EPS);
    }
}
