//! # Configuration State
//!
//! Stores the keypad configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`ABACUS_*`)
//! 2. Defaults (this file, mirroring `abacus_core`)
//!
//! ## Environment Variables
//! | Variable | Field | Example |
//! |----------|-------|---------|
//! | `ABACUS_MAX_DIGITS` | `max_digits` | `12` |
//! | `ABACUS_FRACTION_DIGITS` | `max_fraction_digits` | `4` |
//! | `ABACUS_GROUPING_SEPARATOR` | `grouping_separator` | `_` |
//!
//! Values that do not parse are logged and ignored. Values that parse but are
//! out of range are rejected later by [`ConfigState::engine_config`].

use abacus_core::{EngineConfig, ValidationError};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Terminal configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Most digits accepted while typing
    pub max_digits: usize,

    /// Most fraction digits shown
    pub max_fraction_digits: usize,

    /// Thousands separator
    pub grouping_separator: char,
}

impl Default for ConfigState {
    fn default() -> Self {
        let engine = EngineConfig::default();
        ConfigState {
            max_digits: engine.max_digits,
            max_fraction_digits: engine.max_fraction_digits,
            grouping_separator: engine.grouping_separator,
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any variable source.
    pub(crate) fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(raw) = lookup("ABACUS_MAX_DIGITS") {
            match raw.trim().parse::<usize>() {
                Ok(value) => config.max_digits = value,
                Err(_) => warn!(value = %raw, "ignoring ABACUS_MAX_DIGITS"),
            }
        }

        if let Some(raw) = lookup("ABACUS_FRACTION_DIGITS") {
            match raw.trim().parse::<usize>() {
                Ok(value) => config.max_fraction_digits = value,
                Err(_) => warn!(value = %raw, "ignoring ABACUS_FRACTION_DIGITS"),
            }
        }

        if let Some(raw) = lookup("ABACUS_GROUPING_SEPARATOR") {
            // Not trimmed: a plain space is a valid separator
            let mut chars = raw.chars();
            match (chars.next(), chars.next()) {
                (Some(separator), None) => config.grouping_separator = separator,
                _ => warn!(value = %raw, "ignoring ABACUS_GROUPING_SEPARATOR"),
            }
        }

        config
    }

    /// Validated engine settings for this configuration.
    pub fn engine_config(&self) -> Result<EngineConfig, ValidationError> {
        EngineConfig {
            max_digits: self.max_digits,
            max_fraction_digits: self.max_fraction_digits,
            grouping_separator: self.grouping_separator,
            ..EngineConfig::default()
        }
        .validated()
    }
}
