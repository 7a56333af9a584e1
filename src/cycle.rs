//! Copy-cycle state machine: an ordered column subset plus a pointer

use crate::types::Record;

/// Ordered subset of columns to cycle-copy, with the next-field pointer
///
/// The pointer is stored already reduced mod the selection length, and
/// every mutation resets it to 0 — the reset is an invariant of the type,
/// not a courtesy expected from callers. Cursor movement resets are the
/// engine's job, since this type has no view of the dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CopyCycle {
    selection: Vec<String>,
    pointer: usize,
}

impl CopyCycle {
    /// Build a cycle from an initial selection (duplicates collapsed)
    pub fn new(selection: Vec<String>) -> Self {
        let mut cycle = CopyCycle::default();
        cycle.set_selection(selection);
        cycle
    }

    /// The current selection, in cycle order
    pub fn selection(&self) -> &[String] {
        &self.selection
    }

    /// The index of the field the next [`advance`](Self::advance) copies
    pub fn pointer(&self) -> usize {
        self.pointer
    }

    /// True when nothing is selected
    pub fn is_empty(&self) -> bool {
        self.selection.is_empty()
    }

    /// Number of selected columns
    pub fn len(&self) -> usize {
        self.selection.len()
    }

    /// Replace the selection wholesale; resets the pointer
    ///
    /// A name may appear at most once: later duplicates are dropped,
    /// keeping the first occurrence's position.
    pub fn set_selection(&mut self, names: Vec<String>) {
        self.selection.clear();
        for name in names {
            if !self.selection.contains(&name) {
                self.selection.push(name);
            }
        }
        self.pointer = 0;
    }

    /// Remove `name` if selected, otherwise append it; resets the pointer
    pub fn toggle(&mut self, name: &str) {
        if let Some(pos) = self.selection.iter().position(|n| n == name) {
            self.selection.remove(pos);
        } else {
            self.selection.push(name.to_string());
        }
        self.pointer = 0;
    }

    /// Move the entry at `from` to `to`; resets the pointer
    ///
    /// Returns false (and changes nothing) when either index is out of
    /// bounds or the move is a no-op.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        if from == to || from >= self.selection.len() || to >= self.selection.len() {
            return false;
        }
        let entry = self.selection.remove(from);
        self.selection.insert(to, entry);
        self.pointer = 0;
        true
    }

    /// Restart the cycle from the first selected field
    pub fn reset(&mut self) {
        self.pointer = 0;
    }

    /// Value of the next field in the cycle, stepping the pointer
    ///
    /// Returns `None` when the selection is empty. A selected name missing
    /// from the record (stale after a new load) yields an empty string
    /// rather than an error.
    pub fn advance(&mut self, record: &Record) -> Option<String> {
        if self.selection.is_empty() {
            return None;
        }
        let name = &self.selection[self.pointer % self.selection.len()];
        let value = record.get(name).cloned().unwrap_or_default();
        self.pointer = (self.pointer + 1) % self.selection.len();
        Some(value)
    }
}
