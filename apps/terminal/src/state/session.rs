//! # Session State
//!
//! One keypad session: the engine plus a count of accepted presses.
//!
//! ## Ownership
//! The terminal drives a single engine from a single thread, one press at a
//! time, so the session owns its `Engine` outright and hands out `&mut`
//! access through [`SessionState::press`].

use abacus_core::counter::Counter;
use abacus_core::{Engine, EngineConfig, Key, ValidationError};

/// A running keypad session.
#[derive(Debug, Clone)]
pub struct SessionState {
    engine: Engine,
    presses: Counter,
}

impl SessionState {
    /// Starts a session with validated engine settings.
    pub fn new(config: EngineConfig) -> Result<Self, ValidationError> {
        Ok(SessionState {
            engine: Engine::with_config(config)?,
            presses: Counter::new(),
        })
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Accepted key presses since the session started.
    pub fn presses(&self) -> i64 {
        self.presses.count()
    }

    /// Forwards one press to the engine.
    pub fn press(&mut self, key: Key) {
        self.engine.press(key);
        self.presses.increment();
    }
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState {
            engine: Engine::new(),
            presses: Counter::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use abacus_core::Operation;

    #[test]
    fn test_press_counts_and_forwards() {
        let mut session = SessionState::default();
        session.press("4".parse().unwrap());
        session.press(Key::Operation(Operation::Multiply));
        session.press("2".parse().unwrap());
        session.press(Key::Equals);

        assert_eq!(session.presses(), 4);
        assert_eq!(session.engine().formatted_display(), "8");
    }

    #[test]
    fn test_new_rejects_bad_config() {
        let config = EngineConfig {
            max_digits: 0,
            ..EngineConfig::default()
        };
        assert!(SessionState::new(config).is_err());
    }
}
