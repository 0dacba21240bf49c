use super::edit::Edit;
use crate::command::{Command, CommandError, CommandKind};

/// A validated command, ready to be applied to an [`EditLog`](crate::EditLog).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operation {
    Edit(Edit),
    Commit,
    Rollback,
    Undo,
    Redo,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Edit(edit) => edit.name(),
            Operation::Commit => "commit",
            Operation::Rollback => "rollback",
            Operation::Undo => "undo",
            Operation::Redo => "redo",
        }
    }
}

impl From<Edit> for Operation {
    fn from(edit: Edit) -> Self {
        Operation::Edit(edit)
    }
}

impl TryFrom<&Command> for Operation {
    type Error = CommandError;

    fn try_from(command: &Command) -> Result<Self, Self::Error> {
        let kind = command.command_kind()?;
        command.check_fields(kind)?;

        let operation = match kind {
            CommandKind::Insert => Operation::Edit(Edit::Insert {
                id: command.require_id()?,
                value: command.require_value()?,
            }),
            CommandKind::Update => Operation::Edit(Edit::Update {
                id: command.require_id()?,
                value: command.require_value()?,
            }),
            CommandKind::Upsert => Operation::Edit(Edit::Upsert {
                id: command.require_id()?,
                value: command.require_value()?,
            }),
            CommandKind::Delete => Operation::Edit(Edit::Delete {
                id: command.require_id()?,
            }),
            CommandKind::Merge => Operation::Edit(Edit::Merge {
                id: command.require_id()?,
                other_id: command.require_other_id()?,
            }),
            CommandKind::Split => Operation::Edit(Edit::Split {
                id: command.require_id()?,
                other_id: command.require_other_id()?,
                at: None,
            }),
            CommandKind::Move => Operation::Edit(Edit::Move {
                id: command.require_id()?,
                other_id: command.require_other_id()?,
            }),
            CommandKind::Clear => Operation::Edit(Edit::Clear),
            CommandKind::Commit => Operation::Commit,
            CommandKind::Rollback => Operation::Rollback,
            CommandKind::Undo => Operation::Undo,
            CommandKind::Redo => Operation::Redo,
        };

        Ok(operation)
    }
}

impl TryFrom<Command> for Operation {
    type Error = CommandError;

    fn try_from(command: Command) -> Result<Self, Self::Error> {
        Operation::try_from(&command)
    }
}
