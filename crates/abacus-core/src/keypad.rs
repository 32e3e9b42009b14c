//! # Keypad
//!
//! One [`Key`] per button. Callers turn a gesture (tap, keystroke, token) into
//! a `Key` and hand it to [`Engine::press`](crate::Engine::press).
//!
//! ## Layout
//! ```text
//! ┌──────┬──────┬──────┬──────┐
//! │  C   │  ±   │  %   │  ÷   │
//! ├──────┼──────┼──────┼──────┤
//! │  7   │  8   │  9   │  ×   │
//! ├──────┼──────┼──────┼──────┤
//! │  4   │  5   │  6   │  −   │
//! ├──────┼──────┼──────┼──────┤
//! │  1   │  2   │  3   │  +   │
//! ├──────┴──────┼──────┼──────┤
//! │      0      │  .   │  =   │
//! └─────────────┴──────┴──────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::operation::Operation;
use crate::validation::Digit;

/// A single keypad button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "key", content = "value")]
pub enum Key {
    Digit(Digit),
    DecimalPoint,
    Clear,
    ToggleSign,
    Percent,
    Operation(Operation),
    Equals,
}

impl Key {
    /// Label printed on the button.
    pub fn label(&self) -> String {
        match self {
            Key::Digit(digit) => digit.to_string(),
            Key::DecimalPoint => ".".to_string(),
            Key::Clear => "C".to_string(),
            Key::ToggleSign => "±".to_string(),
            Key::Percent => "%".to_string(),
            Key::Operation(op) => op.symbol().to_string(),
            Key::Equals => "=".to_string(),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Parses a button label or a typeable alias.
///
/// ## Accepted Tokens
/// | Key | Tokens |
/// |-----|--------|
/// | Digit | `0`-`9` |
/// | DecimalPoint | `.` `,` |
/// | Clear | `C` `AC` `clear` |
/// | ToggleSign | `±` `+/-` `neg` |
/// | Percent | `%` |
/// | Operation | see [`Operation`]'s `FromStr` |
/// | Equals | `=` |
///
/// Words are matched case-insensitively.
///
/// ## Example
/// ```rust
/// use abacus_core::{Key, Operation};
///
/// assert_eq!("×".parse::<Key>().unwrap(), Key::Operation(Operation::Multiply));
/// assert_eq!("ac".parse::<Key>().unwrap(), Key::Clear);
/// assert!("sqrt".parse::<Key>().is_err());
/// ```
impl FromStr for Key {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();

        let mut chars = token.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c.is_ascii_digit() {
                return Digit::try_from(c).map(Key::Digit);
            }
        }

        // Numbers are typed one digit key at a time
        if token.len() > 1 && token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::NotADigit {
                input: token.to_string(),
            });
        }

        match token.to_ascii_lowercase().as_str() {
            "." | "," => return Ok(Key::DecimalPoint),
            "c" | "ac" | "clear" => return Ok(Key::Clear),
            "±" | "+/-" | "neg" => return Ok(Key::ToggleSign),
            "%" => return Ok(Key::Percent),
            "=" => return Ok(Key::Equals),
            _ => {}
        }

        token.parse::<Operation>().map(Key::Operation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_digits() {
        for c in '0'..='9' {
            let key: Key = c.to_string().parse().unwrap();
            assert_eq!(key, Key::Digit(Digit::try_from(c).unwrap()));
        }
    }

    #[test]
    fn test_parse_function_keys() {
        assert_eq!(".".parse::<Key>().unwrap(), Key::DecimalPoint);
        assert_eq!("C".parse::<Key>().unwrap(), Key::Clear);
        assert_eq!("Clear".parse::<Key>().unwrap(), Key::Clear);
        assert_eq!("±".parse::<Key>().unwrap(), Key::ToggleSign);
        assert_eq!("+/-".parse::<Key>().unwrap(), Key::ToggleSign);
        assert_eq!("%".parse::<Key>().unwrap(), Key::Percent);
        assert_eq!("=".parse::<Key>().unwrap(), Key::Equals);
    }

    #[test]
    fn test_parse_operations() {
        assert_eq!("+".parse::<Key>().unwrap(), Key::Operation(Operation::Add));
        assert_eq!("-".parse::<Key>().unwrap(), Key::Operation(Operation::Subtract));
        assert_eq!("X".parse::<Key>().unwrap(), Key::Operation(Operation::Multiply));
        assert_eq!("÷".parse::<Key>().unwrap(), Key::Operation(Operation::Divide));
    }

    #[test]
    fn test_parse_unknown() {
        assert!(matches!(
            "sqrt".parse::<Key>(),
            Err(ValidationError::UnknownOperation { .. })
        ));
        assert!("".parse::<Key>().is_err());
        assert!("sqrt".parse::<Key>().is_err());
    }

    #[test]
    fn test_parse_multi_digit_is_not_a_digit() {
        assert_eq!(
            "12".parse::<Key>(),
            Err(ValidationError::NotADigit {
                input: "12".to_string()
            })
        );
        assert!(matches!(
            " 007 ".parse::<Key>(),
            Err(ValidationError::NotADigit { .. })
        ));
    }

    #[test]
    fn test_label_round_trips_through_parse() {
        let keys = [
            Key::Digit(Digit::new(4).unwrap()),
            Key::DecimalPoint,
            Key::Clear,
            Key::ToggleSign,
            Key::Percent,
            Key::Operation(Operation::Subtract),
            Key::Equals,
        ];
        for key in keys {
            assert_eq!(key.label().parse::<Key>().unwrap(), key);
        }
    }
}
