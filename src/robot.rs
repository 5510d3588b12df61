use thiserror::Error;
use tracing::{debug, info};
use trundle_geometry::{GeometryError, Vector2};
use trundle_motion::{EnergySupplier, Motion, MotionController, MotionError, Wheel};

use crate::navigator::Navigator;

/// Whether the robot is currently executing its motion list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Motionless,
    Moving,
}

/// Robot-level failures, surfaced to the telecom layer.
#[derive(Debug, Error)]
pub enum RobotError {
    /// Projected consumption reaches or exceeds the remaining energy.
    #[error("not enough energy: {required} required, {remaining} remaining")]
    InsufficientEnergy { required: f64, remaining: f64 },
    /// `run` was invoked with no loaded motions.
    #[error("empty motion list")]
    EmptyMotionList,
    #[error(transparent)]
    Motion(#[from] MotionError),
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// The simulated robot: a motion controller, an energy tank, a navigator,
/// and the currently loaded motion list.
///
/// All collaborators are injected at construction; there is no
/// partially-constructed registration phase.
pub struct Robot<W: Wheel> {
    controller: MotionController<W>,
    navigator: Navigator,
    supplier: EnergySupplier,
    motions: Vec<Motion>,
    status: Status,
}

impl<W: Wheel> Robot<W> {
    pub fn new(
        controller: MotionController<W>,
        navigator: Navigator,
        supplier: EnergySupplier,
    ) -> Robot<W> {
        Robot {
            controller,
            navigator,
            supplier,
            motions: Vec::new(),
            status: Status::Motionless,
        }
    }

    /// Plan a motion list for `waypoints` and commit it.
    ///
    /// The list is rejected, keeping the previous one, when the projected
    /// consumption is not strictly below the remaining energy.
    pub fn load_positions(&mut self, waypoints: &[Vector2]) -> Result<(), RobotError> {
        let motions = self.navigator.compute_motions(waypoints)?;
        let total_length: f64 = motions.iter().map(Motion::length).sum();
        let required = self.controller.required_energy_for(total_length);
        if !self.supplier.has_enough(required) {
            return Err(RobotError::InsufficientEnergy {
                required,
                remaining: self.supplier.remaining(),
            });
        }

        debug!(
            motions = motions.len(),
            total_length, required, "motion list loaded"
        );
        self.motions = motions;
        Ok(())
    }

    /// Execute the loaded motion list in path order.
    pub fn run(&mut self) -> Result<(), RobotError> {
        if self.motions.is_empty() {
            return Err(RobotError::EmptyMotionList);
        }

        self.status = Status::Moving;
        info!(motions = self.motions.len(), "run started");
        for motion in &self.motions {
            self.controller.execute(motion, &mut self.supplier)?;
        }
        self.status = Status::Motionless;
        info!(remaining_energy = self.supplier.remaining(), "run complete");
        Ok(())
    }

    pub fn is_moving(&self) -> bool {
        self.status == Status::Moving
    }

    pub fn controller(&self) -> &MotionController<W> {
        &self.controller
    }

    pub fn supplier(&self) -> &EnergySupplier {
        &self.supplier
    }

    #[cfg(test)]
    pub(crate) fn force_status(&mut self, status: Status) {
        self.status = status;
    }
}
