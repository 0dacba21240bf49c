use tracing::{debug, trace};

use crate::command::{Command, CommandError};
use crate::document::Document;
use crate::edit::{Edit, Operation};
use crate::history::History;

/// A document together with the history needed to undo and redo edits.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditLog {
    document: Document,
    history: History,
}

impl EditLog {
    pub fn new() -> Self {
        EditLog::default()
    }

    /// Start from an existing document. Its contents are treated as
    /// committed: nothing before this point can be undone.
    pub fn with_document(document: Document) -> Self {
        EditLog {
            document,
            history: History::new(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Validate and apply one command record.
    ///
    /// Returns whether the document changed.
    pub fn execute(&mut self, command: &Command) -> Result<bool, CommandError> {
        let operation = Operation::try_from(command)?;
        Ok(self.apply_operation(operation))
    }

    /// Validate every command, then apply them in order.
    ///
    /// Nothing is applied if any command is malformed.
    pub fn execute_all(&mut self, commands: &[Command]) -> Result<(), CommandError> {
        let operations = commands
            .iter()
            .map(Operation::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        for operation in operations {
            self.apply_operation(operation);
        }
        Ok(())
    }

    /// Apply a validated operation. Returns whether the document changed.
    pub fn apply_operation(&mut self, operation: Operation) -> bool {
        match operation {
            Operation::Edit(edit) => self.edit(edit),
            Operation::Commit => {
                self.commit();
                false
            }
            Operation::Rollback => self.rollback(),
            Operation::Undo => self.undo(),
            Operation::Redo => self.redo(),
        }
    }

    /// Apply an edit, recording it if it changed the document.
    pub fn edit(&mut self, edit: Edit) -> bool {
        let Some(inverse) = edit.apply(&mut self.document) else {
            trace!(edit = edit.name(), "edit had no effect");
            return false;
        };

        let entry = self.history.record(edit.name(), edit, inverse);
        debug!(
            edit = entry.name,
            sequence = entry.sequence,
            "recorded edit"
        );
        true
    }

    /// Revert the most recent step since the last commit.
    pub fn undo(&mut self) -> bool {
        let Some(entry) = self.history.step_back() else {
            trace!("nothing to undo");
            return false;
        };

        entry.inverse.apply(&mut self.document);
        debug!(edit = entry.name, sequence = entry.sequence, "undone");
        true
    }

    /// Reapply the most recently undone step.
    pub fn redo(&mut self) -> bool {
        let Some(entry) = self.history.step_forward() else {
            trace!("nothing to redo");
            return false;
        };

        if let Some(inverse) = entry.forward.apply(&mut self.document) {
            entry.inverse = inverse;
        }
        debug!(edit = entry.name, sequence = entry.sequence, "redone");
        true
    }

    /// Make every step so far permanent.
    pub fn commit(&mut self) {
        debug!(discarded = self.history.len(), "commit");
        self.history.clear();
    }

    /// Undo every step back to the last commit, recorded as a single step.
    ///
    /// The recorded step reapplies the whole rollback on redo and restores
    /// every rolled back step on undo.
    pub fn rollback(&mut self) -> bool {
        let mut undone = Vec::new();
        let mut redone = Vec::new();

        while let Some(entry) = self.history.step_back() {
            entry.inverse.apply(&mut self.document);
            undone.push(entry.inverse.clone());
            redone.push(entry.forward.clone());
        }

        if undone.is_empty() {
            trace!("nothing to roll back");
            return false;
        }

        redone.reverse();
        let steps = undone.len();
        let entry = self.history.record(
            "rollback",
            Edit::Composite { edits: undone },
            Edit::Composite { edits: redone },
        );
        debug!(steps, sequence = entry.sequence, "rolled back");
        true
    }
}

/// Apply `commands` to `document` and return the result.
///
/// Every command is validated before the first one is applied.
pub fn apply(document: Document, commands: &[Command]) -> Result<Document, CommandError> {
    let mut log = EditLog::with_document(document);
    log.execute_all(commands)?;
    Ok(log.into_document())
}
