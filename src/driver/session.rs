//! Driver-side state: pause flag and the latched keypress

use crate::game_of_life::{Command, GridEngine, RandomSource};

/// Toggles the pause flag
pub const PAUSE_KEY: char = 'p';
/// Advances one generation while paused
pub const STEP_KEY: char = ' ';

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    /// Generations advanced during this tick (0, 1 or 2)
    pub advanced: u8,
    pub command: Option<Command>,
    pub paused: bool,
}

/// Pause state and input latch of an interactive run.
///
/// Only the most recent key survives until the next tick.
#[derive(Debug, Default, Clone)]
pub struct Session {
    paused: bool,
    latched: Option<char>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Key waiting for the next tick
    pub fn latched(&self) -> Option<char> {
        self.latched
    }

    /// Record a keypress, replacing any key not yet handled
    pub fn press(&mut self, key: char) {
        self.latched = Some(key);
    }

    /// Run one tick against the engine.
    ///
    /// The generation advance comes first, then the latched key is consumed:
    /// pause toggles, step advances only while paused, every other key goes
    /// to the engine.
    pub fn tick<S: RandomSource>(&mut self, engine: &mut GridEngine<S>) -> TickReport {
        let mut advanced = 0;
        if !self.paused {
            engine.advance_generation();
            advanced += 1;
        }

        let mut command = None;
        match self.latched.take() {
            Some(PAUSE_KEY) => {
                self.paused = !self.paused;
                log::info!(
                    "simulation {} at generation {}",
                    if self.paused { "paused" } else { "resumed" },
                    engine.generation()
                );
            }
            Some(STEP_KEY) => {
                if self.paused {
                    engine.advance_generation();
                    advanced += 1;
                }
            }
            Some(key) => {
                command = engine.dispatch_key(key);
                if let Some(command) = command {
                    log::info!("command '{}': {command}", command.key());
                }
            }
            None => {}
        }

        TickReport {
            advanced,
            command,
            paused: self.paused,
        }
    }
}
