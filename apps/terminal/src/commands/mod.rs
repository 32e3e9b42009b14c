//! # Commands Module
//!
//! Everything the session loop can ask of the engine.
//!
//! ## Command Overview
//! | Module | Commands | Purpose |
//! |--------|----------|---------|
//! | `keypad` | `press_key`, `press_tokens` | Press keys given as text tokens |
//! | `display` | `get_display`, `render`, `render_error` | Read and print the display |
//!
//! Commands take the session state they need and return typed results;
//! nothing here touches stdin or stdout directly.

pub mod display;
pub mod keypad;
