//! Core arithmetic model
//!
//! Operators, operand entry, number formatting and result validation.
//! Nothing in here knows about keypads or pending operations; the engine
//! composes these pieces into the calculator state machine.

pub mod entry;
pub mod format;
mod guard;
mod operator;

pub use entry::{Entry, InputRejected};
pub use guard::ResultGuard;
pub use operator::Operator;

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
///
/// Any of the arithmetic variants puts the engine into its error state,
/// where only a clear is accepted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// Division by zero attempted
    #[error("Division by zero")]
    DivisionByZero,

    /// Result is infinite or beyond the configured magnitude
    #[error("Overflow: {0} exceeds maximum magnitude")]
    Overflow(f64),

    /// Result is not a number
    #[error("Result is not a number")]
    NotANumber,

    /// Display text could not be read back as a number
    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),

    /// No keypad button carries this label
    #[error("Unknown button: {0:?}")]
    UnknownButton(String),
}

impl CalcError {
    /// Returns true if this error came out of evaluating an operation
    #[must_use]
    pub const fn is_arithmetic(&self) -> bool {
        matches!(
            self,
            Self::DivisionByZero | Self::Overflow(_) | Self::NotANumber
        )
    }
}
