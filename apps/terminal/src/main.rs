//! # Abacus Terminal Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Parse arguments
//! 3. Load configuration from the environment
//! 4. Press keys from the command line, or read them from stdin
//!
//! The actual setup is in lib.rs for better testability.

use std::process::ExitCode;

fn main() -> ExitCode {
    match abacus_terminal_lib::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("abacus: {}", err.message);
            ExitCode::FAILURE
        }
    }
}
