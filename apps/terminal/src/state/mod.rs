//! # State Module
//!
//! Application state for the terminal keypad.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────┐        ┌──────────────────────────┐      │
//! │  │      ConfigState         │ ─────► │      SessionState        │      │
//! │  │                          │ engine │                          │      │
//! │  │  max_digits              │ config │  Engine                  │      │
//! │  │  max_fraction_digits     │        │  press Counter           │      │
//! │  │  grouping_separator      │        │                          │      │
//! │  └──────────────────────────┘        └──────────────────────────┘      │
//! │                                                                         │
//! │  ConfigState: read once at startup, then dropped                       │
//! │  SessionState: mutated by every accepted key                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;

pub use config::ConfigState;
pub use session::SessionState;
