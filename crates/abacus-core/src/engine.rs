//! # Calculator Engine
//!
//! The keypad state machine. One `Engine` per session; every button press is a
//! single `&mut self` call and the display is re-read afterwards.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        EntryState transitions                           │
//! │                                                                         │
//! │            digit / .                     digit / .                      │
//! │   Ready ─────────────────► Entering ◄─────────────── AwaitingOperand    │
//! │     ▲                        │   ▲                      ▲    │          │
//! │     │ C                      │   │ digit / .            │    │ ± / %    │
//! │     │                        │   │                      │    ▼          │
//! │     │                  op/=  └───┼──────────────────────┘  Adjusted     │
//! │     │                            │                      ▲    │          │
//! │     │                            └──── digit / . ───────┼────┘          │
//! │     │                                                   │ op / =        │
//! │   Error ◄──────── ÷ 0 = ─────────────────────────────────               │
//! │  (digit / . behave as from Ready)                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Numeric Split
//! - `+ − × ÷` and `=` use `f64`, matching what the keypad has always shown.
//! - `±` and `%` use `rust_decimal`, so `5 ± %` reads `-0.05` and not
//!   `-0.05000000000000000277`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use ts_rs::TS;

use crate::config::EngineConfig;
use crate::format::{format_display, format_result};
use crate::keypad::Key;
use crate::operation::Operation;
use crate::validation::{Digit, ValidationResult};
use crate::ERROR_MARKER;

// =============================================================================
// Entry State
// =============================================================================

/// Whether the next digit extends the display or starts a new number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum EntryState {
    /// Fresh engine or just cleared. The display reads `0`.
    #[default]
    Ready,

    /// Digits are being typed into the display.
    Entering,

    /// A result or left operand is shown; the next digit starts the right
    /// operand.
    AwaitingOperand,

    /// The shown result or operand was rewritten by `±` or `%`. The next digit
    /// still starts a new number, but the shown value already counts as an
    /// operand, so selecting an operation resolves the pending one.
    Adjusted,

    /// A division by zero was attempted. Entry starts over as from `Ready`.
    Error,
}

impl EntryState {
    /// The next digit replaces the display rather than extending it.
    #[inline]
    pub const fn starts_new_number(&self) -> bool {
        !matches!(self, EntryState::Entering)
    }

    /// An operand was supplied since the last operation was selected.
    #[inline]
    pub const fn has_new_operand(&self) -> bool {
        matches!(self, EntryState::Entering | EntryState::Adjusted)
    }

    const fn adjusted(self) -> Self {
        match self {
            EntryState::Ready | EntryState::Entering => EntryState::Entering,
            EntryState::AwaitingOperand | EntryState::Adjusted => EntryState::Adjusted,
            EntryState::Error => EntryState::Error,
        }
    }
}

// =============================================================================
// Display Snapshot
// =============================================================================

/// Everything a keypad UI needs to redraw after a press.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DisplaySnapshot {
    /// Formatted display text.
    pub display: String,

    /// Glyph of the pending operation, if any.
    pub operation_symbol: Option<String>,

    /// Entry state after the press.
    pub state: EntryState,

    /// The display shows the error marker.
    pub is_error: bool,
}

// =============================================================================
// Engine
// =============================================================================

/// Pocket-calculator state machine.
///
/// ## Example
/// ```rust
/// use abacus_core::{Engine, Operation};
/// use abacus_core::validation::Digit;
///
/// let mut engine = Engine::new();
/// engine.enter_digit(Digit::new(2)?);
/// engine.select_operation(Operation::Add);
/// engine.enter_digit(Digit::new(3)?);
/// engine.select_operation(Operation::Multiply);
/// engine.enter_digit(Digit::new(4)?);
/// engine.equals();
///
/// // Left to right, no precedence: (2 + 3) × 4
/// assert_eq!(engine.formatted_display(), "20");
/// # Ok::<(), abacus_core::ValidationError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Engine {
    display: String,
    pending: Option<Operation>,
    accumulator: f64,
    state: EntryState,
    config: EngineConfig,
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new()
    }
}

impl Engine {
    /// Creates an engine with the default pocket-calculator settings.
    pub fn new() -> Self {
        Engine {
            display: "0".to_string(),
            pending: None,
            accumulator: 0.0,
            state: EntryState::Ready,
            config: EngineConfig::default(),
        }
    }

    /// Creates an engine with custom settings.
    ///
    /// ## Errors
    /// Any [`ValidationError`](crate::ValidationError) from
    /// [`validate_config`](crate::validation::validate_config).
    pub fn with_config(config: EngineConfig) -> ValidationResult<Self> {
        Ok(Engine {
            config: config.validated()?,
            ..Engine::new()
        })
    }

    // -------------------------------------------------------------------------
    // Observables
    // -------------------------------------------------------------------------

    /// Raw display text: a possibly partial numeral, or `"Error"`.
    pub fn display_text(&self) -> &str {
        &self.display
    }

    /// Display text as the user sees it. See [`format_display`].
    pub fn formatted_display(&self) -> String {
        format_display(&self.display, &self.config)
    }

    /// The operation waiting for its right operand.
    pub fn pending_operation(&self) -> Option<Operation> {
        self.pending
    }

    /// Glyph of the pending operation.
    pub fn operation_symbol(&self) -> Option<&'static str> {
        self.pending.map(|op| op.symbol())
    }

    pub fn entry_state(&self) -> EntryState {
        self.state
    }

    /// Left operand carried into the next `=`.
    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn is_error(&self) -> bool {
        self.state == EntryState::Error
    }

    pub fn snapshot(&self) -> DisplaySnapshot {
        DisplaySnapshot {
            display: self.formatted_display(),
            operation_symbol: self.operation_symbol().map(str::to_string),
            state: self.state,
            is_error: self.is_error(),
        }
    }

    // -------------------------------------------------------------------------
    // Actions
    // -------------------------------------------------------------------------

    /// Dispatches one keypad press.
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Digit(digit) => self.enter_digit(digit),
            Key::DecimalPoint => self.enter_decimal_point(),
            Key::Clear => self.clear(),
            Key::ToggleSign => self.toggle_sign(),
            Key::Percent => self.apply_percent(),
            Key::Operation(op) => self.select_operation(op),
            Key::Equals => self.equals(),
        }
    }

    /// Types a digit.
    ///
    /// Starts a new number after an operation, a result, a clear or an error,
    /// and replaces a lone `0`. Otherwise appends, unless the display already
    /// holds `max_digits` digits, in which case the digit is dropped.
    pub fn enter_digit(&mut self, digit: Digit) {
        if self.state.starts_new_number() || self.display == "0" {
            self.display = digit.to_string();
            self.state = EntryState::Entering;
        } else if digit_count(&self.display) < self.config.max_digits {
            self.display.push(digit.as_char());
        }
    }

    /// Types a decimal point. A second point in the same number is ignored.
    pub fn enter_decimal_point(&mut self) {
        match self.state {
            EntryState::AwaitingOperand | EntryState::Adjusted | EntryState::Error => {
                self.display = "0.".to_string();
                self.state = EntryState::Entering;
            }
            EntryState::Ready | EntryState::Entering => {
                if !self.display.contains('.') {
                    self.display.push('.');
                    self.state = EntryState::Entering;
                }
            }
        }
    }

    /// Resets everything except the configuration.
    pub fn clear(&mut self) {
        self.display = "0".to_string();
        self.pending = None;
        self.accumulator = 0.0;
        self.state = EntryState::Ready;
    }

    /// Negates the displayed value using exact decimal arithmetic.
    ///
    /// Values beyond `Decimal`'s range are negated as `f64`, which is exact.
    pub fn toggle_sign(&mut self) {
        let negated = match self.current_decimal() {
            Some(value) => (-value).normalize().to_string(),
            None => match self.current_value() {
                Some(value) => format_result(-value, &self.config),
                None => return,
            },
        };
        self.display = negated;
        self.state = self.state.adjusted();
    }

    /// Divides the displayed value by 100 using exact decimal arithmetic.
    ///
    /// Values beyond `Decimal`'s range fall back to `f64` division.
    pub fn apply_percent(&mut self) {
        let exact = self
            .current_decimal()
            .and_then(|value| value.checked_div(Decimal::from(100)))
            .map(|percent| percent.normalize().to_string());
        let percent = match exact {
            Some(text) => text,
            None => match self.current_value() {
                Some(value) => format_result(value / 100.0, &self.config),
                None => return,
            },
        };
        self.display = percent;
        self.state = self.state.adjusted();
    }

    /// Selects a binary operation.
    ///
    /// ## Chaining
    /// ```text
    /// 2 + 3 ×   →  "+" is pending and 3 was typed: resolve 2 + 3 = 5 first,
    ///              then 5 becomes the left operand of ×
    /// 5 + +     →  nothing typed since "+": just keep 5 and (re)select "+"
    /// ```
    ///
    /// If resolving the pending operation divides by zero, the new operation
    /// is dropped and the engine stays in the error state.
    pub fn select_operation(&mut self, op: Operation) {
        let Some(value) = self.current_value() else {
            return;
        };

        if self.pending.is_some() && self.state.has_new_operand() {
            self.equals();
            if self.is_error() {
                return;
            }
        } else {
            self.accumulator = value;
        }

        self.pending = Some(op);
        self.state = EntryState::AwaitingOperand;
    }

    /// Resolves the pending operation.
    ///
    /// Does nothing without a pending operation, so pressing `=` again is a
    /// no-op. Division by zero clears the engine and shows the error marker.
    pub fn equals(&mut self) {
        let (Some(op), Some(rhs)) = (self.pending, self.current_value()) else {
            return;
        };

        match op.apply(self.accumulator, rhs) {
            Ok(result) => {
                self.display = format_result(result, &self.config);
                self.accumulator = result;
                self.pending = None;
                self.state = EntryState::AwaitingOperand;
            }
            Err(_) => {
                self.clear();
                self.display = ERROR_MARKER.to_string();
                self.state = EntryState::Error;
            }
        }
    }

    // -------------------------------------------------------------------------
    // Helpers
    // -------------------------------------------------------------------------

    fn current_value(&self) -> Option<f64> {
        if self.is_error() {
            return None;
        }
        self.display.parse::<f64>().ok()
    }

    fn current_decimal(&self) -> Option<Decimal> {
        if self.is_error() {
            return None;
        }
        // "12." is mid-entry for 12
        Decimal::from_str(self.display.trim_end_matches('.')).ok()
    }
}

fn digit_count(text: &str) -> usize {
    text.bytes().filter(u8::is_ascii_digit).count()
}

// =============================================================================
// Unit Tests
// =============================================================================
