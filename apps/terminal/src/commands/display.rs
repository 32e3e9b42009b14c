//! # Display Commands
//!
//! Reading and rendering the display.
//!
//! ## Output Formats
//! ```text
//! Text:  [×] 1,234          pending operation glyph, then the display
//!        [ ] 42             nothing pending
//!        error: Unknown key '?'
//!
//! Json:  {"display":"1,234","operationSymbol":"×","state":"awaitingOperand",
//!         "isError":false,"presses":5}
//!        {"code":"UNKNOWN_KEY","message":"Unknown key '?'"}
//! ```

use crate::commands::keypad::DisplayResponse;
use crate::error::CliError;
use crate::state::SessionState;

/// How responses are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Gets the current display without pressing anything.
pub fn get_display(session: &SessionState) -> DisplayResponse {
    DisplayResponse::from(session)
}

/// Renders a display response as one line.
pub fn render(response: &DisplayResponse, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => {
            let symbol = response.snapshot.operation_symbol.as_deref().unwrap_or(" ");
            Ok(format!("[{}] {}", symbol, response.snapshot.display))
        }
        OutputFormat::Json => Ok(serde_json::to_string(response)?),
    }
}

/// Renders a rejected key or other error as one line.
pub fn render_error(err: &CliError, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => Ok(format!("error: {}", err.message)),
        OutputFormat::Json => Ok(serde_json::to_string(err)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::keypad::press_tokens;

    #[test]
    fn test_render_text() {
        let mut session = SessionState::default();
        assert_eq!(render(&get_display(&session), OutputFormat::Text).unwrap(), "[ ] 0");

        press_tokens(&mut session, ["1", "2", "3", "4", "×"]);
        assert_eq!(
            render(&get_display(&session), OutputFormat::Text).unwrap(),
            "[×] 1,234"
        );
    }

    #[test]
    fn test_render_json() {
        let mut session = SessionState::default();
        press_tokens(&mut session, ["8", "−"]);
        let line = render(&get_display(&session), OutputFormat::Json).unwrap();
        let json: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(json["display"], "8");
        assert_eq!(json["operationSymbol"], "−");
        assert_eq!(json["state"], "awaitingOperand");
        assert_eq!(json["isError"], false);
        assert_eq!(json["presses"], 2);
    }

    #[test]
    fn test_render_error() {
        let err = CliError::unknown_key("?");
        assert_eq!(
            render_error(&err, OutputFormat::Text).unwrap(),
            "error: Unknown key '?'"
        );
        assert_eq!(
            render_error(&err, OutputFormat::Json).unwrap(),
            r#"{"code":"UNKNOWN_KEY","message":"Unknown key '?'"}"#
        );
    }
}
