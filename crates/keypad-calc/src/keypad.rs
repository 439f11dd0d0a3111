//! Keypad layout
//!
//! The button grid as data: which action each button triggers, its label,
//! element id and grid position. Rendering is left to the front end.
//!
//! ```text
//! [ C ] [ ± ] [ % ] [ ÷ ]
//! [ 7 ] [ 8 ] [ 9 ] [ × ]
//! [ 4 ] [ 5 ] [ 6 ] [ - ]
//! [ 1 ] [ 2 ] [ 3 ] [ + ]
//! [ 0 ] [ . ] [ = ]
//! ```

use crate::core::Operator;

/// Actions that keypad buttons can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeypadAction {
    /// Insert a digit (0-9)
    Digit(u8),
    /// Insert a decimal point
    Decimal,
    /// Select a binary operator
    Operator(Operator),
    /// Resolve the pending operation
    Equals,
    /// Reset the calculator
    Clear,
    /// Negate the display
    SignFlip,
    /// Divide the display by 100
    Percent,
}

impl KeypadAction {
    /// Returns the entry key for digit and decimal actions
    #[must_use]
    pub fn key(&self) -> Option<char> {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(*d), 10),
            Self::Decimal => Some('.'),
            _ => None,
        }
    }

    /// Returns the button label for this action
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
            Self::SignFlip => "±".to_string(),
            Self::Percent => "%".to_string(),
        }
    }

    /// Returns the visual group the button belongs to
    #[must_use]
    pub const fn kind(&self) -> ButtonKind {
        match self {
            Self::Digit(_) | Self::Decimal => ButtonKind::Digit,
            Self::Clear | Self::SignFlip | Self::Percent => ButtonKind::Function,
            Self::Operator(_) => ButtonKind::Operator,
            Self::Equals => ButtonKind::Equals,
        }
    }
}

/// Button groups, so a front end can style each group alike
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonKind {
    /// Digits and the decimal point
    Digit,
    /// Clear, sign flip and percent
    Function,
    /// Binary operators
    Operator,
    /// The equals button
    Equals,
}

/// A single keypad button definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The action this button performs
    pub action: KeypadAction,
    /// Element id for this button
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeypadButton {
    /// Creates a new button definition
    #[must_use]
    pub fn new(action: KeypadAction, row: usize, col: usize) -> Self {
        let id = match action {
            KeypadAction::Digit(d) => format!("btn-{d}"),
            KeypadAction::Decimal => "btn-decimal".to_string(),
            KeypadAction::Operator(op) => format!("btn-{}", op_name(op)),
            KeypadAction::Equals => "btn-equals".to_string(),
            KeypadAction::Clear => "btn-clear".to_string(),
            KeypadAction::SignFlip => "btn-sign".to_string(),
            KeypadAction::Percent => "btn-percent".to_string(),
        };
        Self {
            action,
            id,
            row,
            col,
        }
    }

    /// Returns the button label
    #[must_use]
    pub fn label(&self) -> String {
        self.action.label()
    }
}

const fn op_name(op: Operator) -> &'static str {
    match op {
        Operator::Add => "plus",
        Operator::Sub => "minus",
        Operator::Mul => "times",
        Operator::Div => "divide",
    }
}

/// The calculator keypad
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    rows: usize,
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        use KeypadAction::{Clear, Decimal, Digit, Equals, Percent, SignFlip};

        let grid: [&[KeypadAction]; 5] = [
            &[Clear, SignFlip, Percent, KeypadAction::Operator(Operator::Div)],
            &[Digit(7), Digit(8), Digit(9), KeypadAction::Operator(Operator::Mul)],
            &[Digit(4), Digit(5), Digit(6), KeypadAction::Operator(Operator::Sub)],
            &[Digit(1), Digit(2), Digit(3), KeypadAction::Operator(Operator::Add)],
            &[Digit(0), Decimal, Equals],
        ];

        let buttons = grid
            .iter()
            .enumerate()
            .flat_map(|(row, actions)| {
                actions
                    .iter()
                    .enumerate()
                    .map(move |(col, action)| KeypadButton::new(*action, row, col))
            })
            .collect();

        Self {
            buttons,
            rows: grid.len(),
            cols: 4,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets all button definitions in row order
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButton] {
        &self.buttons
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.row == row && b.col == col)
    }

    /// Finds a button by element id
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds a button by its printed label
    ///
    /// ASCII spellings of the operators (`*`, `/`) are accepted too.
    #[must_use]
    pub fn find_by_label(&self, label: &str) -> Option<&KeypadButton> {
        if let Some(button) = self.buttons.iter().find(|b| b.label() == label) {
            return Some(button);
        }

        let mut chars = label.chars();
        let op = match (chars.next(), chars.next()) {
            (Some(c), None) => Operator::from_symbol(c)?,
            _ => return None,
        };
        self.buttons
            .iter()
            .find(|b| b.action == KeypadAction::Operator(op))
    }

    /// Returns the action for a clicked element id
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<KeypadAction> {
        self.find_by_id(element_id).map(|b| b.action)
    }
}
