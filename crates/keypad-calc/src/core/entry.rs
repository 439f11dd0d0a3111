//! Operand entry
//!
//! An [`Entry`] is the text of the operand currently being typed. Every key
//! is checked against the accumulated text before it is accepted, so an
//! entry is always a valid display literal.

use crate::core::format::{format_number, is_display_literal, parse_number};
use crate::core::{CalcError, CalcResult};
use thiserror::Error;

/// Why a key was not accepted into an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputRejected {
    /// Key is neither a digit nor a decimal point
    #[error("Key {0:?} is not a digit or decimal point")]
    InvalidKey(char),

    /// Entry already contains a decimal point
    #[error("Entry already has a decimal point")]
    DuplicateDecimal,

    /// Entry already holds the maximum number of digits
    #[error("Entry is limited to {0} digits")]
    DigitLimit(usize),
}

/// Text of the operand being entered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    text: String,
}

impl Default for Entry {
    fn default() -> Self {
        Self::zero()
    }
}

impl Entry {
    /// The initial `"0"` entry
    #[must_use]
    pub fn zero() -> Self {
        Self {
            text: "0".to_string(),
        }
    }

    /// Creates an entry holding a formatted value
    pub fn from_value(value: f64, fraction_digits: usize) -> CalcResult<Self> {
        Ok(Self {
            text: format_number(value, fraction_digits)?,
        })
    }

    /// Creates an entry from existing display text
    pub fn from_literal(text: &str) -> CalcResult<Self> {
        if is_display_literal(text) {
            Ok(Self {
                text: text.to_string(),
            })
        } else {
            Err(CalcError::InvalidNumber(text.to_string()))
        }
    }

    /// Returns the entry text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the numeric value of the entry
    pub fn value(&self) -> CalcResult<f64> {
        parse_number(&self.text)
    }

    /// Number of digits typed so far
    ///
    /// The implicit `0` in front of a leading `.` is not counted.
    #[must_use]
    pub fn digit_count(&self) -> usize {
        let body = self.text.trim_start_matches('-');
        let digits = body.chars().filter(char::is_ascii_digit).count();
        if body.starts_with("0.") {
            digits - 1
        } else {
            digits
        }
    }

    /// Returns true if the entry contains a decimal point
    #[must_use]
    pub fn has_decimal(&self) -> bool {
        self.text.contains('.')
    }

    /// Returns true for the bare `"0"` literal
    #[must_use]
    pub fn is_zero_literal(&self) -> bool {
        self.text == "0"
    }

    /// Appends a key to the entry
    ///
    /// A digit typed over the bare `"0"` replaces it. A decimal point typed
    /// over `"0"` extends it to `"0."`.
    pub fn push(&mut self, key: char, max_digits: usize) -> Result<(), InputRejected> {
        match key {
            '.' => {
                if self.has_decimal() {
                    return Err(InputRejected::DuplicateDecimal);
                }
                self.text.push('.');
            }
            '0'..='9' => {
                if self.is_zero_literal() {
                    self.text.clear();
                } else if self.digit_count() >= max_digits {
                    return Err(InputRejected::DigitLimit(max_digits));
                }
                self.text.push(key);
            }
            other => return Err(InputRejected::InvalidKey(other)),
        }
        Ok(())
    }
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
