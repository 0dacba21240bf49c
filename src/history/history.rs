use super::HistoryEntry;
use crate::edit::Edit;

/// Linear undo log with a pointer.
///
/// Entries before the pointer can be undone, entries at or after it can be
/// redone. Recording a new entry discards everything at or after the
/// pointer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<HistoryEntry>,
    pointer: usize,
    next_sequence: u64,
}

impl History {
    pub fn new() -> Self {
        History::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries currently applied. Always within `0..=len()`.
    pub fn pointer(&self) -> usize {
        self.pointer
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Entries that `undo` can still revert, oldest first.
    pub fn undoable(&self) -> &[HistoryEntry] {
        &self.entries[..self.pointer]
    }

    /// Entries that `redo` can still reapply, next first.
    pub fn redoable(&self) -> &[HistoryEntry] {
        &self.entries[self.pointer..]
    }

    pub fn can_undo(&self) -> bool {
        self.pointer > 0
    }

    pub fn can_redo(&self) -> bool {
        self.pointer < self.entries.len()
    }

    /// Record an applied step, dropping the redo tail.
    pub fn record(&mut self, name: &'static str, forward: Edit, inverse: Edit) -> &HistoryEntry {
        self.entries.truncate(self.pointer);
        self.next_sequence += 1;
        self.entries
            .push(HistoryEntry::new(name, forward, inverse, self.next_sequence));
        self.pointer = self.entries.len();
        &self.entries[self.pointer - 1]
    }

    /// Move the pointer back one step, returning the entry to revert.
    pub fn step_back(&mut self) -> Option<&HistoryEntry> {
        if self.pointer == 0 {
            return None;
        }
        self.pointer -= 1;
        Some(&self.entries[self.pointer])
    }

    /// Move the pointer forward one step, returning the entry to reapply.
    pub fn step_forward(&mut self) -> Option<&mut HistoryEntry> {
        if self.pointer >= self.entries.len() {
            return None;
        }
        self.pointer += 1;
        Some(&mut self.entries[self.pointer - 1])
    }

    /// Forget every entry. Sequence numbers keep counting.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.pointer = 0;
    }
}
