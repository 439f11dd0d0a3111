//! Calculator state
//!
//! Which operands exist depends on the mode, so the mode is the variant:
//! an operator and its first operand only ever exist together.

use crate::core::{CalcError, Entry, Operator};

/// Logical mode of the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// No operator pending; keys edit the first operand
    AwaitingFirstOperand,
    /// An operator is pending; keys edit the second operand
    AwaitingSecondOperand,
    /// An operation failed; only clear is accepted
    ClearRequired,
}

/// Complete calculator state
#[derive(Debug, Clone, PartialEq)]
pub enum CalculatorState {
    /// No pending operation
    Idle {
        /// Operand being typed, or the last result
        entry: Entry,
    },
    /// An operator waits for its second operand
    PendingOperator {
        /// Value captured when the operator was pressed
        first_operand: f64,
        /// The pending operator
        operator: Operator,
        /// `None` until a key touches the second operand
        second_operand: Option<Entry>,
        /// Result of a chained operation, shown until the second operand is touched
        carried: Option<Entry>,
    },
    /// The last operation failed
    Error {
        /// What went wrong
        error: CalcError,
    },
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::initial()
    }
}

impl CalculatorState {
    /// The state after construction or clear
    #[must_use]
    pub fn initial() -> Self {
        Self::Idle {
            entry: Entry::zero(),
        }
    }

    /// Returns the logical mode
    #[must_use]
    pub const fn mode(&self) -> Mode {
        match self {
            Self::Idle { .. } => Mode::AwaitingFirstOperand,
            Self::PendingOperator { .. } => Mode::AwaitingSecondOperand,
            Self::Error { .. } => Mode::ClearRequired,
        }
    }

    /// Returns the pending operator, if any
    #[must_use]
    pub const fn operator(&self) -> Option<Operator> {
        match self {
            Self::PendingOperator { operator, .. } => Some(*operator),
            _ => None,
        }
    }

    /// Returns the captured first operand, if any
    #[must_use]
    pub const fn first_operand(&self) -> Option<f64> {
        match self {
            Self::PendingOperator { first_operand, .. } => Some(*first_operand),
            _ => None,
        }
    }

    /// Returns the entry currently on display, if one has been typed
    #[must_use]
    pub const fn entry(&self) -> Option<&Entry> {
        match self {
            Self::Idle { entry }
            | Self::PendingOperator {
                second_operand: Some(entry),
                ..
            } => Some(entry),
            _ => None,
        }
    }

    /// Returns the error, if the state is failed
    #[must_use]
    pub const fn error(&self) -> Option<&CalcError> {
        match self {
            Self::Error { error } => Some(error),
            _ => None,
        }
    }

    /// Returns true in the error state
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = CalculatorState::initial();
        assert_eq!(state.mode(), Mode::AwaitingFirstOperand);
        assert_eq!(state.operator(), None);
        assert_eq!(state.first_operand(), None);
        assert_eq!(state.entry().map(Entry::as_str), Some("0"));
        assert_eq!(CalculatorState::default(), state);
    }

    #[test]
    fn test_pending_state_accessors() {
        let state = CalculatorState::PendingOperator {
            first_operand: 7.0,
            operator: Operator::Add,
            second_operand: None,
            carried: None,
        };
        assert_eq!(state.mode(), Mode::AwaitingSecondOperand);
        assert_eq!(state.operator(), Some(Operator::Add));
        assert_eq!(state.first_operand(), Some(7.0));
        assert!(state.entry().is_none());
        assert!(!state.is_error());
    }

    #[test]
    fn test_pending_state_with_entry() {
        let state = CalculatorState::PendingOperator {
            first_operand: 7.0,
            operator: Operator::Sub,
            second_operand: Some(Entry::from_literal("3").unwrap()),
            carried: Some(Entry::from_literal("7").unwrap()),
        };
        assert_eq!(state.entry().map(Entry::as_str), Some("3"));
    }

    #[test]
    fn test_error_state() {
        let state = CalculatorState::Error {
            error: CalcError::DivisionByZero,
        };
        assert_eq!(state.mode(), Mode::ClearRequired);
        assert!(state.is_error());
        assert_eq!(state.error(), Some(&CalcError::DivisionByZero));
        assert!(state.operator().is_none());
        assert!(state.entry().is_none());
    }
}
