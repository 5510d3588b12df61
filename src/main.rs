//! Simulated differential-drive robot executing a pre-planned path.
//!
//! Wires the configuration, navigator, motion controller, and energy tank
//! together, then drives the robot through a scripted telecom session:
//! handshake, waypoint loading, move.

mod navigator;
mod robot;
mod settings;
mod telecom;

use anyhow::{Context, bail};
use tracing::info;
use tracing_subscriber::EnvFilter;
use trundle_motion::{EnergySupplier, MotionController, Odometer};

use crate::navigator::Navigator;
use crate::robot::Robot;
use crate::telecom::{Command, Telecom, Transmitter};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = settings::load_settings().context("failed to load configuration")?;
    info!(motion = ?settings.motion, energy = settings.energy, "configuration loaded");

    let controller = MotionController::new(Odometer::new(), Odometer::new(), settings.motion);
    let mut robot = Robot::new(
        controller,
        Navigator::new(),
        EnergySupplier::new(settings.energy),
    );
    let transmitter = Transmitter::new();

    let handshake = transmitter.exchange(&mut robot, &Telecom::command(Command::ReadyForLoading));
    info!(reply = ?handshake.command, "handshake");

    let loaded = transmitter.exchange(
        &mut robot,
        &Telecom::with_payload(Command::Loading, settings.waypoints.clone()),
    );
    if loaded.command != Command::LoadedOk {
        bail!("loading rejected: {:?} {:?}", loaded.command, loaded.errors);
    }

    let moved = transmitter.exchange(&mut robot, &Telecom::command(Command::Move));
    if moved.command != Command::Moved {
        bail!("move rejected: {:?} {:?}", moved.command, moved.errors);
    }

    info!(
        right_travelled = robot.controller().right_wheel().travelled(),
        left_travelled = robot.controller().left_wheel().travelled(),
        remaining_energy = robot.supplier().remaining(),
        "mission complete"
    );
    Ok(())
}
