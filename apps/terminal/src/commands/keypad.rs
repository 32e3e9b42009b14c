//! # Keypad Commands
//!
//! Commands that press keys on the session's engine.
//!
//! ## Press Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  token "×"                                                              │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  Key::from_str ──── unknown? ──► CliError UNKNOWN_KEY (token skipped)   │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  SessionState::press ──► Engine::press ──► presses += 1                 │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  DisplayResponse { display, operationSymbol, state, isError, presses }  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use abacus_core::{DisplaySnapshot, Key};
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::CliError;
use crate::state::SessionState;

/// Display response after a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayResponse {
    #[serde(flatten)]
    pub snapshot: DisplaySnapshot,

    /// Accepted presses so far
    pub presses: i64,
}

impl From<&SessionState> for DisplayResponse {
    fn from(session: &SessionState) -> Self {
        DisplayResponse {
            snapshot: session.engine().snapshot(),
            presses: session.presses(),
        }
    }
}

/// Presses a single key given as a token.
///
/// ## Errors
/// `UNKNOWN_KEY` if the token is not a keypad key. The engine is untouched.
pub fn press_key(session: &mut SessionState, token: &str) -> Result<DisplayResponse, CliError> {
    let key: Key = token.parse().map_err(|_| CliError::unknown_key(token))?;
    debug!(%key, "press_key command");

    let was_error = session.engine().is_error();
    session.press(key);
    if !was_error && session.engine().is_error() {
        warn!(%key, "division by zero, engine reset");
    }

    Ok(DisplayResponse::from(&*session))
}

/// Presses every token in order, skipping unknown ones.
///
/// ## Returns
/// The display after the last token, plus one error per skipped token.
pub fn press_tokens<'a, I>(session: &mut SessionState, tokens: I) -> (DisplayResponse, Vec<CliError>)
where
    I: IntoIterator<Item = &'a str>,
{
    let mut rejected = Vec::new();
    for token in tokens {
        if let Err(err) = press_key(session, token) {
            warn!(token, "key rejected");
            rejected.push(err);
        }
    }
    (DisplayResponse::from(&*session), rejected)
}
