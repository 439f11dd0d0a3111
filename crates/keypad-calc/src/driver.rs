//! Keypad-level calculator driver
//!
//! Scenario code talks to a [`CalculatorDriver`] in terms of button labels,
//! the way a user sees the keypad, so the same scenario can run against any
//! front end that implements the trait.
//!
//! ```rust
//! use keypad_calc::driver::{CalculatorDriver, KeypadDriver};
//!
//! let mut driver = KeypadDriver::new();
//! driver.enter("2 + 3 × 4 =").unwrap();
//! assert_eq!(driver.display(), "20");
//! ```

use crate::core::{CalcError, CalcResult};
use crate::engine::CalculatorEngine;
use crate::keypad::Keypad;

/// Abstract driver for calculator interactions
pub trait CalculatorDriver {
    /// Presses the button carrying `label`
    fn press(&mut self, label: &str) -> CalcResult<()>;

    /// Gets the current display text
    fn display(&self) -> String;

    /// Presses the clear button
    fn clear(&mut self) -> CalcResult<()> {
        self.press("C")
    }

    /// Presses each whitespace-separated label in order
    ///
    /// Multi-digit tokens such as `"12.5"` are pressed one key at a time.
    fn enter(&mut self, sequence: &str) -> CalcResult<()> {
        for token in sequence.split_whitespace() {
            if token.len() > 1 && token.chars().all(|c| c.is_ascii_digit() || c == '.') {
                for c in token.chars() {
                    self.press(c.encode_utf8(&mut [0; 4]))?;
                }
            } else {
                self.press(token)?;
            }
        }
        Ok(())
    }
}

/// Driver that presses [`Keypad`] buttons on a [`CalculatorEngine`]
#[derive(Debug, Default)]
pub struct KeypadDriver {
    keypad: Keypad,
    engine: CalculatorEngine,
}

impl KeypadDriver {
    /// Creates a driver over a fresh engine
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a driver over an existing engine
    #[must_use]
    pub fn with_engine(engine: CalculatorEngine) -> Self {
        Self {
            keypad: Keypad::new(),
            engine,
        }
    }

    /// Returns the underlying engine
    #[must_use]
    pub const fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    /// Returns the underlying engine mutably
    pub fn engine_mut(&mut self) -> &mut CalculatorEngine {
        &mut self.engine
    }

    /// Clicks a button by element id
    pub fn click(&mut self, element_id: &str) -> CalcResult<()> {
        let action = self
            .keypad
            .handle_click(element_id)
            .ok_or_else(|| CalcError::UnknownButton(element_id.to_string()))?;
        self.engine.press(action);
        Ok(())
    }
}

impl CalculatorDriver for KeypadDriver {
    fn press(&mut self, label: &str) -> CalcResult<()> {
        let action = self
            .keypad
            .find_by_label(label)
            .map(|button| button.action)
            .ok_or_else(|| CalcError::UnknownButton(label.to_string()))?;
        self.engine.press(action);
        Ok(())
    }

    fn display(&self) -> String {
        self.engine.display().to_string()
    }
}
