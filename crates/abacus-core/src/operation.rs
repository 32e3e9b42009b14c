//! # Binary Operations
//!
//! The four keypad operations and the arithmetic behind them.
//!
//! ## Arithmetic Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Operation::apply(lhs, rhs)                                             │
//! │                                                                         │
//! │    Add       lhs + rhs          f64                                     │
//! │    Subtract  lhs - rhs          f64                                     │
//! │    Multiply  lhs × rhs          f64                                     │
//! │    Divide    lhs ÷ rhs          f64, rhs == 0 → DivisionByZero          │
//! │                                                                         │
//! │  Binary floating point is used here on purpose: it is what the keypad  │
//! │  has always shown. Only ± and % go through exact decimals.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};

/// A binary operation selectable on the keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Every operation, in keypad order (top to bottom on the right column).
    pub const ALL: [Operation; 4] = [
        Operation::Divide,
        Operation::Multiply,
        Operation::Subtract,
        Operation::Add,
    ];

    /// The glyph shown next to the display while this operation is pending.
    ///
    /// ## Example
    /// ```rust
    /// use abacus_core::Operation;
    ///
    /// assert_eq!(Operation::Subtract.symbol(), "−"); // U+2212, not '-'
    /// assert_eq!(Operation::Divide.symbol(), "÷");
    /// ```
    pub const fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "−",
            Operation::Multiply => "×",
            Operation::Divide => "÷",
        }
    }

    /// Performs the calculation between two operands.
    ///
    /// ## Errors
    /// `CoreError::DivisionByZero` when dividing by exactly zero. Every other
    /// combination succeeds, including results that overflow to infinity.
    ///
    /// ## Example
    /// ```rust
    /// use abacus_core::{CoreError, Operation};
    ///
    /// assert_eq!(Operation::Multiply.apply(5.0, 4.0), Ok(20.0));
    /// assert_eq!(Operation::Divide.apply(5.0, 0.0), Err(CoreError::DivisionByZero));
    /// ```
    pub fn apply(&self, lhs: f64, rhs: f64) -> CoreResult<f64> {
        match self {
            Operation::Add => Ok(lhs + rhs),
            Operation::Subtract => Ok(lhs - rhs),
            Operation::Multiply => Ok(lhs * rhs),
            Operation::Divide if rhs == 0.0 => Err(CoreError::DivisionByZero),
            Operation::Divide => Ok(lhs / rhs),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Parses keypad glyphs and their ASCII stand-ins.
///
/// | Operation | Accepted |
/// |-----------|----------|
/// | Add       | `+` |
/// | Subtract  | `−` `-` |
/// | Multiply  | `×` `*` `x` `X` |
/// | Divide    | `÷` `/` |
impl FromStr for Operation {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Operation::Add),
            "−" | "-" => Ok(Operation::Subtract),
            "×" | "*" | "x" | "X" => Ok(Operation::Multiply),
            "÷" | "/" => Ok(Operation::Divide),
            other => Err(ValidationError::UnknownOperation {
                input: other.to_string(),
            }),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_basic() {
        assert_eq!(Operation::Add.apply(1.0, 1.0), Ok(2.0));
        assert_eq!(Operation::Subtract.apply(1.0, 3.0), Ok(-2.0));
        assert_eq!(Operation::Multiply.apply(2.5, 4.0), Ok(10.0));
        assert_eq!(Operation::Divide.apply(10.0, 4.0), Ok(2.5));
    }

    #[test]
    fn test_divide_by_zero_is_an_error() {
        assert_eq!(Operation::Divide.apply(5.0, 0.0), Err(CoreError::DivisionByZero));
        // Negative zero compares equal to zero
        assert_eq!(Operation::Divide.apply(5.0, -0.0), Err(CoreError::DivisionByZero));
        // Zero on the left is fine
        assert_eq!(Operation::Divide.apply(0.0, 5.0), Ok(0.0));
    }

    #[test]
    fn test_float_noise_is_kept() {
        // Binary arithmetic is the contract for the four operations
        assert_eq!(Operation::Add.apply(0.1, 0.2), Ok(0.30000000000000004));
    }

    #[test]
    fn test_symbols_are_unique() {
        let symbols: std::collections::HashSet<_> =
            Operation::ALL.iter().map(|op| op.symbol()).collect();
        assert_eq!(symbols.len(), 4);
    }

    #[test]
    fn test_parse_glyphs_and_aliases() {
        assert_eq!("+".parse::<Operation>(), Ok(Operation::Add));
        assert_eq!("−".parse::<Operation>(), Ok(Operation::Subtract));
        assert_eq!("-".parse::<Operation>(), Ok(Operation::Subtract));
        assert_eq!("x".parse::<Operation>(), Ok(Operation::Multiply));
        assert_eq!("×".parse::<Operation>(), Ok(Operation::Multiply));
        assert_eq!("/".parse::<Operation>(), Ok(Operation::Divide));

        for op in Operation::ALL {
            assert_eq!(op.symbol().parse::<Operation>(), Ok(op));
        }
    }

    #[test]
    fn test_parse_rejects_other_keys() {
        let err = "%".parse::<Operation>().unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownOperation {
                input: "%".to_string()
            }
        );
    }

    #[test]
    fn test_serializes_lowercase() {
        let json = serde_json::to_string(&Operation::Multiply).unwrap();
        assert_eq!(json, "\"multiply\"");
    }
}
