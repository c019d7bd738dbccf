//! Keyboard state, the command it maps to, and the module that does the
//! mapping.

use corelib::transform::Transform;
use corelib::vec3;

/// How far one movement command shifts an entity along x, in world units.
pub const MOVE_STEP: f32 = 0.2;

/// Pressed-key snapshot sampled once per tick. Only the four movement keys
/// are tracked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl InputState {
    pub fn none() -> Self {
        Self::default()
    }
}

/// A resolved movement command. Commands are values so they can be produced
/// by the input module and applied by whoever owns the transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
}

impl Command {
    /// Apply the movement to a transform. One application, one step.
    pub fn apply(self, transform: &mut Transform) {
        match self {
            Command::MoveLeft => transform.translate(vec3(-MOVE_STEP, 0.0, 0.0)),
            Command::MoveRight => transform.translate(vec3(MOVE_STEP, 0.0, 0.0)),
        }
    }
}

/// Maps a key snapshot to at most one command per tick. Right wins when
/// both horizontal keys are held.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputModule;

impl InputModule {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, state: &InputState) -> Option<Command> {
        if state.right {
            Some(Command::MoveRight)
        } else if state.left {
            Some(Command::MoveLeft)
        } else {
            None
        }
    }
}
