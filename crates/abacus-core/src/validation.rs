//! # Validation Module
//!
//! Input validation for the keypad and the engine configuration.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Caller (terminal / UI)                                       │
//! │  ├── Maps raw keys to typed values                                     │
//! │  └── Reports unknown keys                                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Digit: only 0-9 can reach the engine                              │
//! │  └── EngineConfig: caps and separators checked once at startup         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Engine                                                       │
//! │  └── Silent no-ops (digit cap, second '.', operator on "Error")        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use abacus_core::validation::{validate_config, Digit};
//! use abacus_core::EngineConfig;
//!
//! let seven = Digit::try_from('7').unwrap();
//! assert_eq!(seven.as_char(), '7');
//!
//! validate_config(&EngineConfig::default()).unwrap();
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::EngineConfig;
use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Upper bound for both digit caps. Beyond 15 significant digits an `f64`
/// stops round-tripping what was typed.
pub const MAX_CONFIGURABLE_DIGITS: usize = 15;

// =============================================================================
// Digit
// =============================================================================

/// A single keypad digit, `0` through `9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// Creates a digit from its numeric value.
    ///
    /// ## Example
    /// ```rust
    /// use abacus_core::validation::Digit;
    ///
    /// assert!(Digit::new(9).is_ok());
    /// assert!(Digit::new(10).is_err());
    /// ```
    pub fn new(value: u8) -> ValidationResult<Self> {
        if value > 9 {
            return Err(ValidationError::NotADigit {
                input: value.to_string(),
            });
        }
        Ok(Digit(value))
    }

    /// Numeric value, 0-9.
    #[inline]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// The character this digit appends to the display.
    #[inline]
    pub const fn as_char(&self) -> char {
        (b'0' + self.0) as char
    }
}

impl TryFrom<char> for Digit {
    type Error = ValidationError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_digit(10) {
            Some(value) => Ok(Digit(value as u8)),
            None => Err(ValidationError::NotADigit {
                input: c.to_string(),
            }),
        }
    }
}

impl TryFrom<u8> for Digit {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Digit::new(value)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Config Validators
// =============================================================================

/// Validates an engine configuration.
///
/// ## Rules
/// - `max_digits` between 1 and 15
/// - `max_fraction_digits` between 0 and 15
/// - `grouping_separator` is not a digit, `.`, `-`, `+` or `e`, none of
///   which can be told apart from the numeral itself
/// - `integer_display_limit` is finite and positive
pub fn validate_config(config: &EngineConfig) -> ValidationResult<()> {
    if config.max_digits == 0 || config.max_digits > MAX_CONFIGURABLE_DIGITS {
        return Err(ValidationError::OutOfRange {
            field: "max_digits".to_string(),
            min: 1,
            max: MAX_CONFIGURABLE_DIGITS as u64,
        });
    }

    if config.max_fraction_digits > MAX_CONFIGURABLE_DIGITS {
        return Err(ValidationError::OutOfRange {
            field: "max_fraction_digits".to_string(),
            min: 0,
            max: MAX_CONFIGURABLE_DIGITS as u64,
        });
    }

    let sep = config.grouping_separator;
    if sep.is_ascii_digit() || matches!(sep, '.' | '-' | '+' | 'e' | 'E') {
        return Err(ValidationError::InvalidSeparator { separator: sep });
    }

    let limit = config.integer_display_limit;
    if !limit.is_finite() || limit <= 0.0 {
        return Err(ValidationError::InvalidLimit {
            field: "integer_display_limit".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
