//! Calculator engine
//!
//! Owns the [`CalculatorState`] and applies one keypad event at a time.
//! Every operation is total: it returns the new display text and never
//! fails. Arithmetic failures move the engine into its error state, where
//! everything except [`CalculatorEngine::clear_pressed`] is ignored.
//!
//! The display text is the source of truth for operands: a computed result
//! is formatted first, and the formatted value is what a following operator
//! picks up. `1 ÷ 3 × 3` therefore behaves the same whether `=` was pressed
//! between the steps or not.

use crate::config::{ConfigError, EngineConfig};
use crate::core::{CalcError, CalcResult, Entry, Operator, ResultGuard};
use crate::history::History;
use crate::keypad::KeypadAction;
use crate::state::{CalculatorState, Mode};
use tracing::{debug, trace, warn};

type DisplayObserver = Box<dyn FnMut(&str)>;

/// Single-pending-operation calculator
pub struct CalculatorEngine {
    state: CalculatorState,
    config: EngineConfig,
    guard: ResultGuard,
    history: History,
    observers: Vec<DisplayObserver>,
}

impl std::fmt::Debug for CalculatorEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CalculatorEngine")
            .field("state", &self.state)
            .field("config", &self.config)
            .field("history_len", &self.history.len())
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn render<'a>(state: &'a CalculatorState, config: &'a EngineConfig) -> &'a str {
    match state {
        CalculatorState::Idle { entry }
        | CalculatorState::PendingOperator {
            second_operand: Some(entry),
            ..
        } => entry.as_str(),
        CalculatorState::PendingOperator {
            second_operand: None,
            carried,
            ..
        } => carried.as_ref().map_or("0", Entry::as_str),
        CalculatorState::Error { .. } => &config.error_text,
    }
}

impl CalculatorEngine {
    /// Creates an engine with the default configuration
    #[must_use]
    pub fn new() -> Self {
        let config = EngineConfig::default();
        Self {
            state: CalculatorState::initial(),
            guard: config.guard(),
            history: History::with_capacity(config.history_capacity),
            config,
            observers: Vec::new(),
        }
    }

    /// Creates an engine with a validated configuration
    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            state: CalculatorState::initial(),
            guard: config.guard(),
            history: History::with_capacity(config.history_capacity),
            config,
            observers: Vec::new(),
        })
    }

    // ===== Read side =====

    /// Current display text
    #[must_use]
    pub fn display(&self) -> &str {
        render(&self.state, &self.config)
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Current mode
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.state.mode()
    }

    /// Pending operator, if any
    #[must_use]
    pub const fn pending_operator(&self) -> Option<Operator> {
        self.state.operator()
    }

    /// Captured first operand, if any
    #[must_use]
    pub const fn first_operand(&self) -> Option<f64> {
        self.state.first_operand()
    }

    /// Returns true while a clear is required
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.state.is_error()
    }

    /// The error that caused the current error state
    #[must_use]
    pub const fn last_error(&self) -> Option<&CalcError> {
        self.state.error()
    }

    /// Completed computations
    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Registers a callback invoked with the display after every operation
    pub fn subscribe(&mut self, observer: impl FnMut(&str) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Drops all recorded computations
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    // ===== Operations =====

    /// Handles a digit or decimal point key
    pub fn digit_pressed(&mut self, key: char) -> &str {
        let max_digits = self.config.max_entry_digits;
        let outcome = match &mut self.state {
            CalculatorState::Idle { entry } => Some(entry.push(key, max_digits)),
            CalculatorState::PendingOperator { second_operand, .. } => {
                let mut entry = second_operand.clone().unwrap_or_default();
                let pushed = entry.push(key, max_digits);
                if pushed.is_ok() {
                    *second_operand = Some(entry);
                }
                Some(pushed)
            }
            CalculatorState::Error { .. } => None,
        };

        match outcome {
            Some(Ok(())) => debug!(%key, display = self.display(), "digit accepted"),
            Some(Err(rejected)) => trace!(%key, %rejected, "digit rejected"),
            None => trace!(%key, "digit ignored until clear"),
        }
        self.finish()
    }

    /// Handles a binary operator key
    ///
    /// With no operator pending the display becomes the first operand. With
    /// one pending and a second operand typed, the pending operation is
    /// resolved first; its result stays on display and becomes the new first
    /// operand. With one pending and nothing typed yet, the operator is
    /// replaced.
    pub fn operator_pressed(&mut self, op: Operator) -> &str {
        let state = std::mem::take(&mut self.state);
        self.state = match state {
            CalculatorState::Idle { entry } => match entry.value() {
                Ok(first_operand) => {
                    debug!(first_operand, operator = %op, "operator pending");
                    CalculatorState::PendingOperator {
                        first_operand,
                        operator: op,
                        second_operand: None,
                        carried: None,
                    }
                }
                Err(error) => Self::fail(error),
            },
            CalculatorState::PendingOperator {
                first_operand,
                operator,
                second_operand: None,
                carried,
            } => {
                debug!(from = %operator, to = %op, "pending operator replaced");
                CalculatorState::PendingOperator {
                    first_operand,
                    operator: op,
                    second_operand: None,
                    carried,
                }
            }
            CalculatorState::PendingOperator {
                first_operand,
                operator,
                second_operand: Some(entry),
                ..
            } => match self
                .resolve(first_operand, operator, &entry)
                .and_then(|result| Ok((result.value()?, result)))
            {
                Ok((first_operand, result)) => {
                    debug!(first_operand, operator = %op, "chained operator pending");
                    CalculatorState::PendingOperator {
                        first_operand,
                        operator: op,
                        second_operand: None,
                        carried: Some(result),
                    }
                }
                Err(error) => Self::fail(error),
            },
            failed @ CalculatorState::Error { .. } => {
                trace!(operator = %op, "operator ignored until clear");
                failed
            }
        };
        self.finish()
    }

    /// Resolves the pending operation; a no-op when none is pending
    ///
    /// An untouched second operand is the displayed value: `0`, or the
    /// carried result after a chained operator.
    pub fn equals_pressed(&mut self) -> &str {
        let state = std::mem::take(&mut self.state);
        self.state = match state {
            CalculatorState::PendingOperator {
                first_operand,
                operator,
                second_operand,
                carried,
            } => {
                let entry = second_operand.or(carried).unwrap_or_default();
                match self.resolve(first_operand, operator, &entry) {
                    Ok(entry) => CalculatorState::Idle { entry },
                    Err(error) => Self::fail(error),
                }
            }
            unchanged => {
                trace!(mode = ?unchanged.mode(), "equals without pending operator");
                unchanged
            }
        };
        self.finish()
    }

    /// Resets to the initial state from any state
    pub fn clear_pressed(&mut self) -> &str {
        debug!(mode = ?self.state.mode(), "cleared");
        self.state = CalculatorState::initial();
        self.finish()
    }

    /// Negates the display
    pub fn sign_flip_pressed(&mut self) -> &str {
        self.transform_display("sign flip", |v| v * -1.0);
        self.finish()
    }

    /// Divides the display by 100
    pub fn percent_pressed(&mut self) -> &str {
        self.transform_display("percent", |v| v / 100.0);
        self.finish()
    }

    /// Dispatches a keypad action to the matching operation
    pub fn press(&mut self, action: KeypadAction) -> &str {
        match action {
            KeypadAction::Digit(_) | KeypadAction::Decimal => match action.key() {
                Some(key) => self.digit_pressed(key),
                None => {
                    trace!(?action, "action has no entry key");
                    self.finish()
                }
            },
            KeypadAction::Operator(op) => self.operator_pressed(op),
            KeypadAction::Equals => self.equals_pressed(),
            KeypadAction::Clear => self.clear_pressed(),
            KeypadAction::SignFlip => self.sign_flip_pressed(),
            KeypadAction::Percent => self.percent_pressed(),
        }
    }

    // ===== Internals =====

    /// Applies `operator`, validates the result and records it
    fn resolve(&mut self, first: f64, operator: Operator, entry: &Entry) -> CalcResult<Entry> {
        let second = entry.value()?;
        let raw = operator.apply(first, second)?;
        let checked = self.guard.check(raw)?;
        let result = Entry::from_value(checked, self.config.fraction_digits)?;

        self.history.record(first, operator, second, result.value()?);
        debug!(first, %operator, second, result = result.as_str(), "operation resolved");
        Ok(result)
    }

    /// Replaces the displayed operand with `f(value)`
    fn transform_display(&mut self, name: &'static str, f: impl Fn(f64) -> f64) {
        let fraction_digits = self.config.fraction_digits;
        let guard = self.guard;
        let apply = |entry: &Entry| -> CalcResult<Entry> {
            let value = guard.check(f(entry.value()?))?;
            Entry::from_value(value, fraction_digits)
        };

        if self.state.is_error() {
            trace!(name, "ignored until clear");
            return;
        }

        let state = std::mem::take(&mut self.state);
        self.state = match state {
            CalculatorState::Idle { entry } => match apply(&entry) {
                Ok(entry) => CalculatorState::Idle { entry },
                Err(error) => Self::fail(error),
            },
            CalculatorState::PendingOperator {
                first_operand,
                operator,
                second_operand,
                carried,
            } => match apply(&second_operand.or(carried).unwrap_or_default()) {
                Ok(entry) => CalculatorState::PendingOperator {
                    first_operand,
                    operator,
                    second_operand: Some(entry),
                    carried: None,
                },
                Err(error) => Self::fail(error),
            },
            failed @ CalculatorState::Error { .. } => failed,
        };
        if !self.state.is_error() {
            debug!(name, display = self.display(), "display transformed");
        }
    }

    fn fail(error: CalcError) -> CalculatorState {
        warn!(%error, "calculator error, clear required");
        CalculatorState::Error { error }
    }

    /// Notifies observers and returns the display
    fn finish(&mut self) -> &str {
        let display = render(&self.state, &self.config);
        for observer in &mut self.observers {
            observer(display);
        }
        display
    }
}
