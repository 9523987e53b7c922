//! User intents coming from the page controls. Commands are queued by the
//! bridge and applied by the frame driver at the start of the next tick.

use log::warn;

/// Custom-event kind for a speed slider change: `a` = body index, `b` = speed.
pub const KIND_SET_SPEED: u32 = 1;
/// Custom-event kind for the pause/resume button.
pub const KIND_TOGGLE_PAUSE: u32 = 2;
/// Custom-event kind for the theme button.
pub const KIND_TOGGLE_THEME: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    SetSpeed { body: usize, speed: f32 },
    TogglePause,
    ToggleTheme,
}

impl Command {
    /// Decode a raw custom event. Unknown kinds and malformed payloads are
    /// logged and dropped.
    pub fn from_custom(kind: u32, a: f32, b: f32, _c: f32) -> Option<Self> {
        match kind {
            KIND_SET_SPEED => {
                if !a.is_finite() || a < 0.0 {
                    warn!("set-speed with invalid body index {a}");
                    return None;
                }
                Some(Command::SetSpeed { body: a as usize, speed: b })
            }
            KIND_TOGGLE_PAUSE => Some(Command::TogglePause),
            KIND_TOGGLE_THEME => Some(Command::ToggleTheme),
            _ => {
                warn!("Unknown command kind {kind}");
                None
            }
        }
    }
}

/// FIFO of pending commands.
#[derive(Debug, Default)]
pub struct CommandQueue {
    commands: Vec<Command>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    pub fn drain(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }
}
