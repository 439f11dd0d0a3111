//! Completed computations
//!
//! An in-memory, bounded record of every operation the engine resolved.
//! Nothing here is persisted.

use crate::core::format::format_number;
use crate::core::Operator;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// A single resolved computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Operand captured when the operator was pressed
    pub first_operand: f64,
    /// The operator applied
    pub operator: Operator,
    /// Operand entered after the operator
    pub second_operand: f64,
    /// Value shown after resolution
    pub result: f64,
}

impl HistoryEntry {
    /// Creates a new history entry
    #[must_use]
    pub const fn new(first_operand: f64, operator: Operator, second_operand: f64, result: f64) -> Self {
        Self {
            first_operand,
            operator,
            second_operand,
            result,
        }
    }

    /// Returns a formatted line such as `7 + 3 = 10`
    #[must_use]
    pub fn display(&self, fraction_digits: usize) -> String {
        let fmt = |v: f64| format_number(v, fraction_digits).unwrap_or_else(|_| v.to_string());
        format!(
            "{} {} {} = {}",
            fmt(self.first_operand),
            self.operator,
            fmt(self.second_operand),
            fmt(self.result)
        )
    }
}

/// Bounded queue of resolved computations, oldest first
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    max_entries: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Default maximum history size
    pub const DEFAULT_MAX_ENTRIES: usize = 100;

    /// Creates a new history with default capacity
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_MAX_ENTRIES)
    }

    /// Creates a history with custom maximum size
    #[must_use]
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_entries),
            max_entries,
        }
    }

    /// Adds an entry, evicting the oldest when full
    pub fn push(&mut self, entry: HistoryEntry) {
        if self.max_entries == 0 {
            return;
        }
        if self.entries.len() >= self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Records a resolved computation
    pub fn record(&mut self, first_operand: f64, operator: Operator, second_operand: f64, result: f64) {
        self.push(HistoryEntry::new(first_operand, operator, second_operand, result));
    }

    /// Returns the number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the history is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the maximum number of entries
    #[must_use]
    pub const fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Clears all history entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns an iterator over the entries (oldest first)
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Returns an iterator over the entries (newest first)
    pub fn iter_rev(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev()
    }

    /// Returns the most recent entry
    #[must_use]
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    /// Returns the last n entries (newest first)
    #[must_use]
    pub fn last_n(&self, n: usize) -> Vec<&HistoryEntry> {
        self.entries.iter().rev().take(n).collect()
    }
}
