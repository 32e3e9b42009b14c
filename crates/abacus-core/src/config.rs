//! # Engine Configuration
//!
//! Immutable settings for one [`Engine`](crate::Engine). Built once, validated
//! once, then only read.

use serde::{Deserialize, Serialize};

use crate::validation::{validate_config, ValidationResult};
use crate::{
    DEFAULT_GROUPING_SEPARATOR, DEFAULT_INTEGER_DISPLAY_LIMIT, DEFAULT_MAX_DIGITS,
    DEFAULT_MAX_FRACTION_DIGITS,
};

/// Engine settings.
///
/// ## Fields
/// The defaults reproduce a classic pocket calculator. A caller that wants a
/// wider display can raise the caps; see
/// [`validate_config`](crate::validation::validate_config) for the limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    /// Most digit characters the display will accept while typing.
    pub max_digits: usize,

    /// Most fraction digits shown by the formatted display.
    pub max_fraction_digits: usize,

    /// Separator inserted every three integer digits.
    pub grouping_separator: char,

    /// Integral results below this magnitude render without a fraction.
    pub integer_display_limit: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            max_digits: DEFAULT_MAX_DIGITS,
            max_fraction_digits: DEFAULT_MAX_FRACTION_DIGITS,
            grouping_separator: DEFAULT_GROUPING_SEPARATOR,
            integer_display_limit: DEFAULT_INTEGER_DISPLAY_LIMIT,
        }
    }
}

impl EngineConfig {
    /// Returns this config if every field is within its limits.
    ///
    /// ## Example
    /// ```rust
    /// use abacus_core::EngineConfig;
    ///
    /// let config = EngineConfig { max_digits: 12, ..EngineConfig::default() };
    /// assert!(config.validated().is_ok());
    ///
    /// let bad = EngineConfig { grouping_separator: '.', ..EngineConfig::default() };
    /// assert!(bad.validated().is_err());
    /// ```
    pub fn validated(self) -> ValidationResult<Self> {
        validate_config(&self)?;
        Ok(self)
    }
}
