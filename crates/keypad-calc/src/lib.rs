//! Keypad Calculator
//!
//! A single-pending-operation calculator engine: a display, an optional
//! pending operator with its first operand, and six keypad operations
//! (digit, operator, equals, clear, sign flip, percent). Chained operators
//! evaluate strictly left to right with no precedence.
//!
//! Rendering is left to the caller, which only needs
//! [`CalculatorEngine::display`] and the operations.
//!
//! # Example
//!
//! ```rust
//! use keypad_calc::prelude::*;
//!
//! let mut calc = CalculatorEngine::new();
//! calc.digit_pressed('2');
//! calc.operator_pressed(Operator::Add);
//! calc.digit_pressed('3');
//! calc.operator_pressed(Operator::Mul);
//! calc.digit_pressed('4');
//! assert_eq!(calc.equals_pressed(), "20");
//!
//! // Division by zero is an explicit error state
//! calc.operator_pressed(Operator::Div);
//! assert_eq!(calc.equals_pressed(), "Error");
//! assert_eq!(calc.clear_pressed(), "0");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod driver;
pub mod engine;
pub mod history;
pub mod keypad;
pub mod state;

pub use crate::config::{ConfigError, EngineConfig};
pub use crate::core::{CalcError, CalcResult, Entry, InputRejected, Operator, ResultGuard};
pub use crate::engine::CalculatorEngine;
pub use crate::state::{CalculatorState, Mode};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{ConfigError, EngineConfig};
    pub use crate::core::format::{format_number, parse_number};
    pub use crate::core::{CalcError, CalcResult, Entry, Operator};
    pub use crate::driver::{CalculatorDriver, KeypadDriver};
    pub use crate::engine::CalculatorEngine;
    pub use crate::history::{History, HistoryEntry};
    pub use crate::keypad::{ButtonKind, Keypad, KeypadAction, KeypadButton};
    pub use crate::state::{CalculatorState, Mode};
}
