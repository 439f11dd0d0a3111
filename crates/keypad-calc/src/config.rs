//! Engine configuration

use crate::core::format::{DEFAULT_FRACTION_DIGITS, MAX_FRACTION_DIGITS};
use crate::core::ResultGuard;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or validating a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A field holds a value the engine cannot work with
    #[error("Invalid configuration: {message}")]
    Invalid {
        /// Error message
        message: String,
    },

    /// JSON input could not be parsed
    #[error("Configuration parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConfigError {
    /// Create an invalid-value error
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }
}

/// Calculator engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum digits accepted in a typed operand
    pub max_entry_digits: usize,
    /// Fraction digits kept when formatting a computed value
    pub fraction_digits: usize,
    /// Largest result magnitude shown before reporting overflow
    pub max_magnitude: f64,
    /// Text shown while the engine is in its error state
    pub error_text: String,
    /// Number of completed computations kept in history
    pub history_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_entry_digits: Self::DEFAULT_MAX_ENTRY_DIGITS,
            fraction_digits: DEFAULT_FRACTION_DIGITS,
            max_magnitude: ResultGuard::DEFAULT_MAX_MAGNITUDE,
            error_text: "Error".to_string(),
            history_capacity: Self::DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl EngineConfig {
    /// Digits an f64 can hold without losing integer precision
    pub const DEFAULT_MAX_ENTRY_DIGITS: usize = 15;

    /// Default history size
    pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the entry digit limit
    #[must_use]
    pub const fn with_max_entry_digits(mut self, digits: usize) -> Self {
        self.max_entry_digits = digits;
        self
    }

    /// Set the formatting precision
    #[must_use]
    pub const fn with_fraction_digits(mut self, digits: usize) -> Self {
        self.fraction_digits = digits;
        self
    }

    /// Set the result magnitude bound
    #[must_use]
    pub const fn with_max_magnitude(mut self, max_magnitude: f64) -> Self {
        self.max_magnitude = max_magnitude;
        self
    }

    /// Set the error display text
    #[must_use]
    pub fn with_error_text(mut self, text: impl Into<String>) -> Self {
        self.error_text = text.into();
        self
    }

    /// Set the history size
    #[must_use]
    pub const fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Loads a configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every field is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_entry_digits == 0 {
            return Err(ConfigError::invalid("max_entry_digits must be at least 1"));
        }
        if self.fraction_digits > MAX_FRACTION_DIGITS {
            return Err(ConfigError::invalid(format!(
                "fraction_digits must be at most {MAX_FRACTION_DIGITS}, got {}",
                self.fraction_digits
            )));
        }
        if !self.max_magnitude.is_finite() || self.max_magnitude <= 0.0 {
            return Err(ConfigError::invalid(format!(
                "max_magnitude must be a positive finite number, got {}",
                self.max_magnitude
            )));
        }
        if self.error_text.trim().is_empty() {
            return Err(ConfigError::invalid("error_text must not be empty"));
        }
        if self.history_capacity == 0 {
            return Err(ConfigError::invalid("history_capacity must be at least 1"));
        }
        Ok(())
    }

    /// Builds the result guard for this configuration
    #[must_use]
    pub const fn guard(&self) -> ResultGuard {
        ResultGuard::with_max_magnitude(self.max_magnitude)
    }
}
