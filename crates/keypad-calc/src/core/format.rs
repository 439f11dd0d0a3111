//! Display text <-> number conversion
//!
//! Display literals are plain decimals: an optional leading `-`, at least one
//! digit and at most one `.`. A trailing `.` is allowed while typing (`"5."`).
//!
//! Formatting uses a fixed number of fraction digits, never more than the
//! 15 significant digits an f64 carries, and trims trailing zeros. So
//! `0.1 + 0.2` shows as `0.3` and integers never carry a `.0`. Values too
//! large for 15 significant digits are rounded and padded with zeros, so
//! exponent notation is never produced.

use crate::core::{CalcError, CalcResult};

/// Default number of fraction digits kept when formatting
pub const DEFAULT_FRACTION_DIGITS: usize = 10;

/// Largest fraction digit count that still means something for an f64
pub const MAX_FRACTION_DIGITS: usize = 15;

/// Significant decimal digits an f64 holds exactly
pub const SIGNIFICANT_DIGITS: usize = 15;

/// Smallest magnitude whose integer part exceeds [`SIGNIFICANT_DIGITS`]
const ROUNDED_INTEGER_LIMIT: f64 = 1e15;

/// Returns true if `text` is a well-formed display literal
#[must_use]
pub fn is_display_literal(text: &str) -> bool {
    let body = text.strip_prefix('-').unwrap_or(text);
    let mut digits = 0usize;
    let mut dots = 0usize;

    for c in body.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => dots += 1,
            _ => return false,
        }
    }

    digits > 0 && dots <= 1
}

/// Parses a display literal into a finite number
pub fn parse_number(text: &str) -> CalcResult<f64> {
    if !is_display_literal(text) {
        return Err(CalcError::InvalidNumber(text.to_string()));
    }

    let value: f64 = text
        .parse()
        .map_err(|_| CalcError::InvalidNumber(text.to_string()))?;

    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::InvalidNumber(text.to_string()))
    }
}

/// Formats a number as a display literal
///
/// Rounds to `fraction_digits` decimals (fewer for large values, so the
/// total stays within [`SIGNIFICANT_DIGITS`]), then drops trailing zeros and
/// a dangling `.`. Negative zero renders as `"0"`. From 1e15 up the integer
/// itself is rounded to [`SIGNIFICANT_DIGITS`] and the tail zero-filled.
pub fn format_number(value: f64, fraction_digits: usize) -> CalcResult<String> {
    if value.is_nan() {
        return Err(CalcError::NotANumber);
    }
    if value.is_infinite() {
        return Err(CalcError::Overflow(value));
    }
    if value.abs() >= ROUNDED_INTEGER_LIMIT {
        return Ok(format_rounded_integer(value));
    }

    let integer_digits = if value.abs() < 1.0 {
        1
    } else {
        value.abs().log10().floor() as usize + 1
    };
    let precision = fraction_digits.min(SIGNIFICANT_DIGITS.saturating_sub(integer_digits));

    let mut text = format!("{value:.precision$}");
    if text.contains('.') {
        let len = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(len);
    }
    if text == "-0" {
        text = "0".to_string();
    }

    Ok(text)
}

/// Expands `value` rounded to [`SIGNIFICANT_DIGITS`] into a plain integer
fn format_rounded_integer(value: f64) -> String {
    let precision = SIGNIFICANT_DIGITS - 1;
    let scientific = format!("{:.precision$e}", value.abs());
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));
    let exponent: usize = exponent.parse().unwrap_or(0);

    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let zeros = (exponent + 1).saturating_sub(digits.len());
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{digits}{}", "0".repeat(zeros))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn fmt(value: f64) -> String {
        format_number(value, DEFAULT_FRACTION_DIGITS).unwrap()
    }

    // ===== is_display_literal =====

    #[test]
    fn test_literal_accepts_display_forms() {
        for text in ["0", "5", "53", "0.", "0.5", "-3", "-0.25", "12.", "100"] {
            assert!(is_display_literal(text), "{text}");
        }
    }

    #[test]
    fn test_literal_rejects_malformed() {
        for text in ["", ".", "-", "-.", "1.2.3", "1e5", "+5", "inf", "NaN", "--1", "1-"] {
            assert!(!is_display_literal(text), "{text}");
        }
    }

    // ===== parse_number =====

    #[test]
    fn test_parse_number_basic() {
        assert_eq!(parse_number("0"), Ok(0.0));
        assert_eq!(parse_number("53"), Ok(53.0));
        assert_eq!(parse_number("-2.5"), Ok(-2.5));
    }

    #[test]
    fn test_parse_number_trailing_decimal() {
        assert_eq!(parse_number("5."), Ok(5.0));
        assert_eq!(parse_number("0."), Ok(0.0));
    }

    #[test]
    fn test_parse_number_rejects_lone_symbols() {
        assert!(matches!(parse_number("."), Err(CalcError::InvalidNumber(_))));
        assert!(matches!(parse_number("-"), Err(CalcError::InvalidNumber(_))));
        assert!(matches!(parse_number(""), Err(CalcError::InvalidNumber(_))));
    }

    #[test]
    fn test_parse_number_rejects_special_values() {
        assert!(parse_number("inf").is_err());
        assert!(parse_number("NaN").is_err());
    }

    // ===== format_number =====

    #[test]
    fn test_format_integers_have_no_decimal_point() {
        assert_eq!(fmt(5.0), "5");
        assert_eq!(fmt(-5.0), "-5");
        assert_eq!(fmt(100.0), "100");
        assert_eq!(fmt(0.0), "0");
    }

    #[test]
    fn test_format_fractions() {
        assert_eq!(fmt(0.5), "0.5");
        assert_eq!(fmt(-2.25), "-2.25");
    }

    #[test]
    fn test_format_hides_float_artifacts() {
        assert_eq!(fmt(0.1 + 0.2), "0.3");
        assert_eq!(fmt(1.0 / 3.0), "0.3333333333");
        assert_eq!(fmt(2.0 / 3.0), "0.6666666667");
    }

    #[test]
    fn test_format_negative_zero() {
        assert_eq!(fmt(-0.0), "0");
        assert_eq!(fmt(-1e-12), "0");
        assert_eq!(format_number(-0.4, 0).unwrap(), "0");
    }

    #[test]
    fn test_format_caps_significant_digits() {
        assert_eq!(fmt(123_456_789.123_456), "123456789.123456");
        assert_eq!(fmt(-98_765.432_1), "-98765.4321");
        assert_eq!(fmt(1e13 + 0.5), "10000000000000.5");
    }

    #[test]
    fn test_format_large_values_stay_decimal() {
        assert_eq!(fmt(1e20), "100000000000000000000");
        assert_eq!(fmt(-1e15), "-1000000000000000");
    }

    #[test]
    fn test_format_large_values_hide_binary_expansion() {
        assert_eq!(fmt(1e30), format!("1{}", "0".repeat(30)));
        assert_eq!(
            fmt(999_999_999_999_999.0 * 999_999_999_999_999.0),
            "999999999999998000000000000000"
        );
        assert_eq!(fmt(123_456_789_012_345_678.0), "123456789012346000");
    }

    #[test]
    fn test_format_zero_fraction_digits_keeps_integer_zeros() {
        assert_eq!(format_number(100.0, 0).unwrap(), "100");
        assert_eq!(format_number(2.4, 0).unwrap(), "2");
    }

    #[test]
    fn test_format_rejects_special_values() {
        assert_eq!(format_number(f64::NAN, 10), Err(CalcError::NotANumber));
        assert!(matches!(
            format_number(f64::NEG_INFINITY, 10),
            Err(CalcError::Overflow(_))
        ));
    }

    proptest! {
        #[test]
        fn prop_format_yields_display_literal(value in -1e15f64..1e15f64) {
            let text = fmt(value);
            prop_assert!(is_display_literal(&text), "{}", text);
            prop_assert!(!text.ends_with('.'));
        }

        #[test]
        fn prop_format_parse_round_trip(value in -1e9f64..1e9f64) {
            let parsed = parse_number(&fmt(value)).unwrap();
            prop_assert!((parsed - value).abs() <= value.abs() * 1e-14 + 1e-10);
        }

        #[test]
        fn prop_large_values_keep_significant_digits(
            mantissa in 1.0f64..10.0,
            exponent in 15i32..90,
        ) {
            let value = mantissa * 10f64.powi(exponent);
            let text = fmt(value);
            prop_assert!(is_display_literal(&text), "{}", text);
            prop_assert!(text.trim_end_matches('0').len() <= SIGNIFICANT_DIGITS, "{}", text);
            let parsed = parse_number(&text).unwrap();
            prop_assert!((parsed - value).abs() <= value.abs() * 1e-14);
        }

        #[test]
        fn prop_integers_format_exactly(n in -1_000_000_000i64..1_000_000_000i64) {
            prop_assert_eq!(fmt(n as f64), n.to_string());
        }
    }
}
