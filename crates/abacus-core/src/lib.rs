//! # abacus-core: Pure Calculator Logic for Abacus
//!
//! This crate is the **heart** of Abacus. It contains the keypad state
//! machine and everything it needs, as pure code with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Abacus Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Caller (apps/terminal, future UI)               │   │
//! │  │    key token ──► Key ──► Engine::press ──► DisplaySnapshot      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ abacus-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  engine   │  │ operation │  │  format   │  │ validation│  │   │
//! │  │   │  Engine   │  │ + − × ÷   │  │ grouping  │  │   Digit   │  │   │
//! │  │   │EntryState │  │  apply    │  │  results  │  │  config   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO ENV • PURE STATE TRANSITIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`engine`] - The keypad state machine and its display snapshot
//! - [`keypad`] - One `Key` per button, parsed from labels and aliases
//! - [`operation`] - The four binary operations
//! - [`format`] - Result and display rendering
//! - [`config`] - Engine settings
//! - [`validation`] - Digit and config validation
//! - [`counter`] - Tap counter and small arithmetic helpers
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use abacus_core::{Engine, Key};
//!
//! let mut engine = Engine::new();
//! for token in ["5", "±", "%"] {
//!     engine.press(token.parse::<Key>()?);
//! }
//!
//! // Exact decimals: no 0.05000000000000000277 here
//! assert_eq!(engine.formatted_display(), "-0.05");
//! # Ok::<(), abacus_core::ValidationError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod counter;
pub mod engine;
pub mod error;
pub mod format;
pub mod keypad;
pub mod operation;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use config::EngineConfig;
pub use engine::{DisplaySnapshot, Engine, EntryState};
pub use error::{CoreError, CoreResult, ValidationError};
pub use keypad::Key;
pub use operation::Operation;
pub use validation::Digit;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Text shown after a division by zero.
pub const ERROR_MARKER: &str = "Error";

/// Most digits the display accepts while typing.
pub const DEFAULT_MAX_DIGITS: usize = 9;

/// Most fraction digits shown by the formatted display.
pub const DEFAULT_MAX_FRACTION_DIGITS: usize = 9;

pub const DEFAULT_GROUPING_SEPARATOR: char = ',';

/// Integral results below this magnitude render without a fraction.
pub const DEFAULT_INTEGER_DISPLAY_LIMIT: f64 = 1e10;
