use tracing::debug;
use trundle_geometry::Vector2;
use trundle_motion::Wheel;

use crate::robot::Robot;

/// Protocol command word.
///
/// `ReadyForLoading`, `Loading` and `Move` are inbound requests; the rest
/// are acknowledgements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ReadyForLoading,
    Loading,
    Move,
    Moving,
    LoadedOk,
    LoadedInvalid,
    Moved,
    Invalid,
}

/// One protocol frame: a command with an optional waypoint payload and
/// error messages.
#[derive(Debug, Clone, PartialEq)]
pub struct Telecom {
    pub command: Command,
    pub payload: Vec<Vector2>,
    pub errors: Vec<String>,
}

impl Telecom {
    /// A bare frame carrying only a command word.
    pub fn command(command: Command) -> Telecom {
        Telecom {
            command,
            payload: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// A frame carrying a waypoint payload.
    pub fn with_payload(command: Command, payload: Vec<Vector2>) -> Telecom {
        Telecom {
            command,
            payload,
            errors: Vec::new(),
        }
    }

    fn nack(command: Command, error: String) -> Telecom {
        Telecom {
            command,
            payload: Vec::new(),
            errors: vec![error],
        }
    }
}

/// Command dispatch for the robot: one handler per inbound command word.
///
/// Robot-level failures are translated into negative acknowledgements;
/// they never escape an exchange as errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct Transmitter;

impl Transmitter {
    pub fn new() -> Transmitter {
        Transmitter
    }

    /// Exchange one inbound frame for its acknowledgement.
    pub fn exchange<W: Wheel>(&self, robot: &mut Robot<W>, tc: &Telecom) -> Telecom {
        debug!(command = ?tc.command, "telecom exchange");
        match tc.command {
            Command::ReadyForLoading => self.on_ready_for_loading(robot, tc),
            Command::Loading => self.on_loading(robot, tc),
            Command::Move => self.on_move(robot),
            other => Telecom::nack(
                Command::Invalid,
                format!("unsupported command {:?}", other),
            ),
        }
    }

    fn on_ready_for_loading<W: Wheel>(&self, robot: &Robot<W>, tc: &Telecom) -> Telecom {
        if robot.is_moving() {
            return Telecom::command(Command::Moving);
        }
        Telecom::command(tc.command)
    }

    fn on_loading<W: Wheel>(&self, robot: &mut Robot<W>, tc: &Telecom) -> Telecom {
        if robot.is_moving() {
            return Telecom::command(Command::Moving);
        }
        if tc.payload.is_empty() {
            return Telecom::nack(Command::LoadedInvalid, "no payload".to_string());
        }
        match robot.load_positions(&tc.payload) {
            Ok(()) => Telecom::command(Command::LoadedOk),
            Err(e) => Telecom::nack(Command::LoadedInvalid, e.to_string()),
        }
    }

    fn on_move<W: Wheel>(&self, robot: &mut Robot<W>) -> Telecom {
        match robot.run() {
            Ok(()) => Telecom::command(Command::Moved),
            Err(e) => Telecom::nack(Command::Invalid, e.to_string()),
        }
    }
}
