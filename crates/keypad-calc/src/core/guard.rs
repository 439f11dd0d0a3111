//! Result validation
//!
//! Stops a computed value from reaching the display when it is NaN,
//! infinite, or larger than the display can sensibly show.

use crate::core::{CalcError, CalcResult};

/// Validates computed results before they become display text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResultGuard {
    /// Maximum allowed result magnitude
    max_magnitude: f64,
}

impl Default for ResultGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultGuard {
    /// Default maximum magnitude
    pub const DEFAULT_MAX_MAGNITUDE: f64 = 1e100;

    /// Creates a guard with the default bound
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_magnitude: Self::DEFAULT_MAX_MAGNITUDE,
        }
    }

    /// Creates a guard with a custom bound
    #[must_use]
    pub const fn with_max_magnitude(max_magnitude: f64) -> Self {
        Self { max_magnitude }
    }

    /// Returns the magnitude bound
    #[must_use]
    pub const fn max_magnitude(&self) -> f64 {
        self.max_magnitude
    }

    /// Returns the value if it may be displayed
    pub fn check(&self, value: f64) -> CalcResult<f64> {
        if value.is_nan() {
            return Err(CalcError::NotANumber);
        }
        if value.is_infinite() || value.abs() > self.max_magnitude {
            return Err(CalcError::Overflow(value));
        }
        Ok(value)
    }
}
