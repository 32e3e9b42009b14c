//! # Error Types
//!
//! Domain-specific error types for abacus-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  abacus-core errors (this file)                                        │
//! │  ├── CoreError        - Computation failures                           │
//! │  └── ValidationError  - Rejected input or configuration                │
//! │                                                                         │
//! │  Terminal errors (in app)                                              │
//! │  └── CliError         - What the keypad caller sees (serialized)       │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → stderr                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Engine vs. Errors
//! The engine itself never returns these to its caller. Harmless bad input is
//! a silent no-op and division by zero is a state (`EntryState::Error`).
//! `CoreError` is what [`Operation::apply`](crate::Operation::apply) reports
//! and what the engine turns into that state.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core computation errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// The right-hand operand of a division was exactly zero.
    ///
    /// ## User Workflow
    /// ```text
    /// 5 ÷ 0 =
    ///      │
    ///      ▼
    /// Operation::Divide.apply(5.0, 0.0)
    ///      │
    ///      ▼
    /// DivisionByZero
    ///      │
    ///      ▼
    /// Display shows "Error", engine resets
    /// ```
    #[error("Cannot divide by zero")]
    DivisionByZero,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input and configuration validation errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A keypad digit outside `0`-`9`.
    #[error("'{input}' is not a digit")]
    NotADigit { input: String },

    /// A key that names none of the four operations.
    #[error("'{input}' is not an operation")]
    UnknownOperation { input: String },

    /// Numeric setting is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: u64, max: u64 },

    /// Grouping separator would be ambiguous inside a numeral.
    #[error("'{separator}' cannot be used as a grouping separator")]
    InvalidSeparator { separator: char },

    /// Floating-point limit must be finite and positive.
    #[error("{field} must be a finite positive number")]
    InvalidLimit { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(CoreError::DivisionByZero.to_string(), "Cannot divide by zero");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::NotADigit {
            input: "a".to_string(),
        };
        assert_eq!(err.to_string(), "'a' is not a digit");

        let err = ValidationError::OutOfRange {
            field: "max_digits".to_string(),
            min: 1,
            max: 15,
        };
        assert_eq!(err.to_string(), "max_digits must be between 1 and 15");

        let err = ValidationError::InvalidSeparator { separator: '.' };
        assert_eq!(err.to_string(), "'.' cannot be used as a grouping separator");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::NotADigit {
            input: "x".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
