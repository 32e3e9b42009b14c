//! # CLI Error Type
//!
//! Unified error type for terminal commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Abacus                                 │
//! │                                                                         │
//! │  stdin token "√"                                                        │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  press_key()                                                     │  │
//! │  │  Result<DisplayResponse, CliError>                               │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Key parse failed? ─── ValidationError ───► CliError UNKNOWN_KEY │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Engine::press (never fails; ÷0 is a display state)              │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Session loop: report the error, skip the token, keep going.           │
//! │  Startup (config, I/O): error is fatal, process exits non-zero.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## JSON Output
//! In `--json` mode a rejected key prints as:
//! ```json
//! { "code": "UNKNOWN_KEY", "message": "Unknown key '√'" }
//! ```

use abacus_core::{CoreError, ValidationError};
use serde::Serialize;
use thiserror::Error;

/// Error reported by the terminal app.
#[derive(Debug, Clone, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("[{code:?}] {message}")]
pub struct CliError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error codes for terminal output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Token is not a keypad key
    UnknownKey,

    /// Configuration rejected at startup
    InvalidConfig,

    /// Reading input or writing output failed
    Io,

    /// Anything else
    Internal,
}

impl CliError {
    /// Creates a new CLI error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        CliError {
            code,
            message: message.into(),
        }
    }

    /// Creates an unknown key error.
    pub fn unknown_key(token: &str) -> Self {
        CliError::new(ErrorCode::UnknownKey, format!("Unknown key '{}'", token))
    }

    /// Creates an invalid config error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        CliError::new(ErrorCode::InvalidConfig, message)
    }
}

/// Converts validation errors to CLI errors.
impl From<ValidationError> for CliError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::NotADigit { input } | ValidationError::UnknownOperation { input } => {
                CliError::unknown_key(&input)
            }
            other => CliError::invalid_config(other.to_string()),
        }
    }
}

/// Converts core errors to CLI errors.
impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(e) => CliError::from(e),
            CoreError::DivisionByZero => {
                CliError::new(ErrorCode::Internal, CoreError::DivisionByZero.to_string())
            }
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        tracing::error!("I/O failed: {}", err);
        CliError::new(ErrorCode::Io, err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON encoding failed: {}", err);
        CliError::new(ErrorCode::Internal, "Could not encode output")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_key_from_validation() {
        let err: CliError = ValidationError::UnknownOperation {
            input: "√".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::UnknownKey);
        assert_eq!(err.message, "Unknown key '√'");
        assert_eq!(err.to_string(), "[UnknownKey] Unknown key '√'");
    }

    #[test]
    fn test_config_errors_map_to_invalid_config() {
        let err: CliError = ValidationError::InvalidSeparator { separator: '.' }.into();
        assert_eq!(err.code, ErrorCode::InvalidConfig);

        let err: CliError = CoreError::Validation(ValidationError::InvalidLimit {
            field: "integer_display_limit".to_string(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::InvalidConfig);
    }

    #[test]
    fn test_serializes_screaming_code() {
        let json = serde_json::to_value(CliError::unknown_key("?")).unwrap();
        assert_eq!(json["code"], "UNKNOWN_KEY");
        assert_eq!(json["message"], "Unknown key '?'");
    }
}
