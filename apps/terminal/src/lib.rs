//! # Abacus Terminal Library
//!
//! Core library for the Abacus terminal keypad.
//! This is the main entry point that configures and runs a session.
//!
//! ## Module Organization
//! ```text
//! abacus_terminal_lib/
//! ├── lib.rs          ◄─── You are here (setup & session loop)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── session.rs  ◄─── Engine + press counter
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── keypad.rs   ◄─── Key press commands
//! │   └── display.rs  ◄─── Display rendering
//! └── error.rs        ◄─── CLI error type
//! ```
//!
//! ## Usage
//! ```text
//! $ abacus 2 + 3 × 4 =
//! [ ] 20
//!
//! $ printf '5 ±\n%%\n' | abacus --json
//! {"display":"-5","operationSymbol":null,"state":"entering","isError":false,"presses":2}
//! {"display":"-0.05","operationSymbol":null,"state":"entering","isError":false,"presses":3}
//! ```

pub mod commands;
pub mod error;
pub mod state;

use std::io::{BufRead, Write};

use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use commands::display::{get_display, render, render_error, OutputFormat};
use commands::keypad::press_tokens;
use error::CliError;
use state::{ConfigState, SessionState};

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(name = "abacus", version, about = "Pocket calculator keypad for the terminal")]
pub struct Cli {
    /// Print displays and errors as JSON lines
    #[arg(long, env = "ABACUS_OUTPUT_JSON")]
    pub json: bool,

    /// Keys to press, e.g. `2 + 3 x 4 =`. Reads keys from stdin when empty.
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    pub keys: Vec<String>,
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Runs the terminal application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: WARN, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  2. Parse Arguments ──────────────────────────────────────────────────► │
/// │                                                                         │
/// │  3. Load Configuration ───────────────────────────────────────────────► │
/// │     • ABACUS_* environment variables over defaults                      │
/// │     • Validated by abacus-core; invalid config is fatal                 │
/// │                                                                         │
/// │  4. Run ──────────────────────────────────────────────────────────────► │
/// │     • Keys on the command line: press them, print the final display     │
/// │     • Otherwise: one display line per stdin line until EOF or `quit`    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> Result<(), CliError> {
    init_tracing();

    let cli = Cli::parse();
    let config = ConfigState::from_env();
    info!(?config, "Configuration loaded");

    let mut session = SessionState::new(config.engine_config()?)?;
    let format = cli.output_format();
    let stdout = std::io::stdout();

    if cli.keys.is_empty() {
        let stdin = std::io::stdin();
        run_session(&mut session, stdin.lock(), stdout.lock(), format)
    } else {
        run_keys(&mut session, &cli.keys, stdout.lock(), format)
    }
}

/// Presses the given keys and prints the final display.
pub fn run_keys<W: Write>(
    session: &mut SessionState,
    keys: &[String],
    mut output: W,
    format: OutputFormat,
) -> Result<(), CliError> {
    let tokens = keys.iter().flat_map(|arg| arg.split_whitespace());
    let (response, rejected) = press_tokens(session, tokens);
    for err in &rejected {
        writeln!(output, "{}", render_error(err, format)?)?;
    }
    writeln!(output, "{}", render(&response, format)?)?;
    Ok(())
}

/// Reads keys line by line and prints the display after each line.
///
/// Blank lines are skipped. `quit` or `exit` ends the session early.
pub fn run_session<R: BufRead, W: Write>(
    session: &mut SessionState,
    input: R,
    mut output: W,
    format: OutputFormat,
) -> Result<(), CliError> {
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if matches!(line, "quit" | "exit") {
            debug!("session ended by user");
            break;
        }

        let (_, rejected) = press_tokens(session, line.split_whitespace());
        for err in &rejected {
            writeln!(output, "{}", render_error(err, format)?)?;
        }
        writeln!(output, "{}", render(&get_display(session), format)?)?;
        output.flush()?;
    }

    if session.engine().is_error() {
        warn!("session ended on an error display");
    }
    info!(presses = session.presses(), "Session finished");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=abacus_terminal_lib=debug` - Show every key press
/// - Default: WARN level, so logs stay out of the way of the display
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_output(input: &str, format: OutputFormat) -> String {
        let mut session = SessionState::default();
        let mut output = Vec::new();
        run_session(&mut session, input.as_bytes(), &mut output, format).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_session_prints_after_each_line() {
        let output = session_output("2 +\n3 ×\n4 =\n", OutputFormat::Text);
        assert_eq!(output, "[+] 2\n[×] 5\n[ ] 20\n");
    }

    #[test]
    fn test_session_skips_blank_lines_and_stops_at_quit() {
        let output = session_output("\n1 2\n   \nquit\n9\n", OutputFormat::Text);
        assert_eq!(output, "[ ] 12\n");
    }

    #[test]
    fn test_session_reports_unknown_keys() {
        let output = session_output("7 ? +\n", OutputFormat::Text);
        assert_eq!(output, "error: Unknown key '?'\n[+] 7\n");
    }

    #[test]
    fn test_session_json() {
        let output = session_output("5 ±\n%\n", OutputFormat::Json);
        let lines: Vec<serde_json::Value> = output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["display"], "-5");
        assert_eq!(lines[1]["display"], "-0.05");
        assert_eq!(lines[1]["presses"], 3);
    }

    #[test]
    fn test_session_division_by_zero_then_continue() {
        let output = session_output("5 ÷ 0 =\n7\n", OutputFormat::Text);
        assert_eq!(output, "[ ] Error\n[ ] 7\n");
    }

    #[test]
    fn test_run_keys_accepts_split_and_joined_args() {
        let mut session = SessionState::default();
        let keys = vec!["1 +".to_string(), "2".to_string(), "=".to_string()];
        let mut output = Vec::new();
        run_keys(&mut session, &keys, &mut output, OutputFormat::Text).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "[ ] 3\n");
    }

    #[test]
    fn test_cli_parses_operator_keys() {
        let cli = Cli::try_parse_from(["abacus", "--json", "9", "-", "4", "+/-", "="]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.keys, vec!["9", "-", "4", "+/-", "="]);
        assert_eq!(cli.output_format(), OutputFormat::Json);
    }
}
