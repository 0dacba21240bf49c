use crate::edit::Edit;

/// One undoable step in a [`History`](super::History).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Name of the operation that produced the step, e.g. `"merge"`.
    pub name: &'static str,
    pub sequence: u64,
    /// Edit that (re)applies the step.
    pub forward: Edit,
    /// Edit that reverts the step.
    pub inverse: Edit,
}

impl HistoryEntry {
    pub fn new(name: &'static str, forward: Edit, inverse: Edit, sequence: u64) -> Self {
        HistoryEntry {
            name,
            sequence,
            forward,
            inverse,
        }
    }
}
