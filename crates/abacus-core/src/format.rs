//! # Display Formatting
//!
//! Two pure renderers:
//!
//! - [`format_result`] turns an `f64` result into the raw display text the
//!   engine stores.
//! - [`format_display`] turns raw display text into what the user sees:
//!   grouped, rounded, with partial entry preserved.
//!
//! ## Display Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  raw text        parse f64        round + group        preserve entry   │
//! │  ─────────       ─────────        ─────────────        ──────────────   │
//! │  "1234."    ──►  1234.0      ──►  "1,234"         ──►  "1,234."         │
//! │  "3.50"     ──►  3.5         ──►  "3.5"           ──►  "3.50"           │
//! │  "0.1234567891" ► 0.12345…   ──►  "0.123456789"   ──►  "0.123456789"    │
//! │  "Error"    ──►  (fails)     ──────────────────────►  "Error"           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::config::EngineConfig;

/// Renders a computed result as raw display text.
///
/// Integral values below `config.integer_display_limit` print without a
/// fraction; everything else uses the shortest round-tripping decimal form.
///
/// ## Example
/// ```rust
/// use abacus_core::format::format_result;
/// use abacus_core::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(format_result(4.0, &config), "4");
/// assert_eq!(format_result(2.5, &config), "2.5");
/// assert_eq!(format_result(0.1 + 0.2, &config), "0.30000000000000004");
/// ```
pub fn format_result(value: f64, config: &EngineConfig) -> String {
    // -0.0 == 0.0, and "-0" is not something a calculator shows
    if value == 0.0 {
        return "0".to_string();
    }

    if value.fract() == 0.0 && value.abs() < config.integer_display_limit {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

/// Renders raw display text for the user.
///
/// ## Rules
/// 1. Text that is not a finite number (e.g. `"Error"`) is returned as is.
/// 2. Otherwise the value is rounded to `max_fraction_digits`, trailing zeros
///    are dropped and the integer part is grouped in threes.
/// 3. A trailing `.` being typed is kept (`"12."` shows `"12."`).
/// 4. A typed fraction ending in `0` is kept verbatim (`"3.50"` shows
///    `"3.50"`) as long as it fits in `max_fraction_digits`.
///
/// ## Example
/// ```rust
/// use abacus_core::format::format_display;
/// use abacus_core::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(format_display("1234567", &config), "1,234,567");
/// assert_eq!(format_display("1234.", &config), "1,234.");
/// assert_eq!(format_display("3.50", &config), "3.50");
/// assert_eq!(format_display("Error", &config), "Error");
/// ```
pub fn format_display(raw: &str, config: &EngineConfig) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|&c| c != config.grouping_separator)
        .collect();

    let value = match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => return raw.to_string(),
    };

    let formatted = format_grouped(value, config);
    preserve_entry(&cleaned, formatted, config)
}

/// Rounds to `max_fraction_digits`, trims trailing zeros, groups the integer.
fn format_grouped(value: f64, config: &EngineConfig) -> String {
    let fixed = format!("{:.*}", config.max_fraction_digits, value.abs());
    let (int_digits, frac_digits) = match fixed.split_once('.') {
        Some((int_digits, frac)) => (int_digits, frac.trim_end_matches('0')),
        None => (fixed.as_str(), ""),
    };

    let rounds_to_zero = int_digits == "0" && frac_digits.is_empty();
    let mut out = String::with_capacity(fixed.len() + fixed.len() / 3 + 1);
    if value.is_sign_negative() && !rounds_to_zero {
        out.push('-');
    }
    out.push_str(&group_integer(int_digits, config.grouping_separator));
    if !frac_digits.is_empty() {
        out.push('.');
        out.push_str(frac_digits);
    }
    out
}

/// Re-applies what a numeric round trip loses from text still being typed.
fn preserve_entry(raw: &str, formatted: String, config: &EngineConfig) -> String {
    if raw.ends_with('.') && !formatted.contains('.') {
        return formatted + ".";
    }

    if let Some((int_part, fraction)) = raw.split_once('.') {
        if fraction.ends_with('0')
            && fraction.len() <= config.max_fraction_digits
            && fraction.bytes().all(|b| b.is_ascii_digit())
        {
            let (sign, digits) = match int_part.strip_prefix('-') {
                Some(digits) => ("-", digits),
                None => ("", int_part),
            };
            let grouped = group_integer(digits, config.grouping_separator);
            return format!("{}{}.{}", sign, grouped, fraction);
        }
    }

    formatted
}

/// Inserts `separator` every three digits from the right.
fn group_integer(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn display(raw: &str) -> String {
        format_display(raw, &EngineConfig::default())
    }

    fn result(value: f64) -> String {
        format_result(value, &EngineConfig::default())
    }

    #[test]
    fn test_result_integers_drop_fraction() {
        assert_eq!(result(4.0), "4");
        assert_eq!(result(-20.0), "-20");
        assert_eq!(result(9_999_999_999.0), "9999999999");
    }

    #[test]
    fn test_result_negative_zero() {
        assert_eq!(result(-0.0), "0");
        assert_eq!(result(0.0 * -5.0), "0");
    }

    #[test]
    fn test_result_fractions_and_large_values() {
        assert_eq!(result(2.5), "2.5");
        assert_eq!(result(1.0 / 3.0), "0.3333333333333333");
        // At or above the limit the default float form is used
        assert_eq!(result(1e10), "10000000000");
        assert_eq!(result(1e20), "100000000000000000000");
        assert_eq!(result(f64::INFINITY), "inf");
    }

    #[test]
    fn test_result_respects_configured_limit() {
        let config = EngineConfig {
            integer_display_limit: 100.0,
            ..EngineConfig::default()
        };
        assert_eq!(format_result(99.0, &config), "99");
        assert_eq!(format_result(100.0, &config), "100");
    }

    #[test]
    fn test_display_grouping() {
        assert_eq!(display("0"), "0");
        assert_eq!(display("999"), "999");
        assert_eq!(display("1000"), "1,000");
        assert_eq!(display("1234567"), "1,234,567");
        assert_eq!(display("999999999"), "999,999,999");
        assert_eq!(display("-1234.5"), "-1,234.5");
        assert_eq!(display("100000000000000000000"), "100,000,000,000,000,000,000");
    }

    #[test]
    fn test_display_rounds_to_nine_fraction_digits() {
        assert_eq!(display("0.1234567891234"), "0.123456789");
        assert_eq!(display("2.0000000001"), "2");
        assert_eq!(display("0.30000000000000004"), "0.3");
        assert_eq!(display("0.00000000001"), "0");
        assert_eq!(display("-0.00000000001"), "0");
    }

    #[test]
    fn test_display_keeps_trailing_decimal_point() {
        assert_eq!(display("0."), "0.");
        assert_eq!(display("1234."), "1,234.");
        assert_eq!(display("-5."), "-5.");
    }

    #[test]
    fn test_display_keeps_trailing_fraction_zeros() {
        assert_eq!(display("3.0"), "3.0");
        assert_eq!(display("3.50"), "3.50");
        assert_eq!(display("0.00"), "0.00");
        assert_eq!(display("1234.50"), "1,234.50");
        assert_eq!(display("-5.0"), "-5.0");
    }

    #[test]
    fn test_display_plain_fractions() {
        assert_eq!(display("0.05"), "0.05");
        assert_eq!(display("-0.05"), "-0.05");
        assert_eq!(display("3.14"), "3.14");
    }

    #[test]
    fn test_display_passes_through_non_numbers() {
        assert_eq!(display("Error"), "Error");
        assert_eq!(display("inf"), "inf");
        assert_eq!(display("NaN"), "NaN");
    }

    #[test]
    fn test_display_custom_separator_and_fraction_cap() {
        let config = EngineConfig {
            grouping_separator: ' ',
            max_fraction_digits: 2,
            ..EngineConfig::default()
        };
        assert_eq!(format_display("1234567.891", &config), "1 234 567.89");
        assert_eq!(format_display("1234.", &config), "1 234.");
        assert_eq!(format_display("1234.10", &config), "1 234.10");
    }

    #[test]
    fn test_display_trailing_zeros_respect_fraction_cap() {
        let capped = |max_fraction_digits| EngineConfig {
            max_fraction_digits,
            ..EngineConfig::default()
        };
        assert_eq!(format_display("3.50", &capped(2)), "3.50");
        assert_eq!(format_display("3.50", &capped(1)), "3.5");
        assert_eq!(format_display("3.50", &capped(0)), "4");
        assert_eq!(format_display("1234.000", &capped(2)), "1,234");
    }

    #[test]
    fn test_group_integer() {
        assert_eq!(group_integer("1", ','), "1");
        assert_eq!(group_integer("12", ','), "12");
        assert_eq!(group_integer("123", ','), "123");
        assert_eq!(group_integer("1234", ','), "1,234");
        assert_eq!(group_integer("123456", ','), "123,456");
    }
}
