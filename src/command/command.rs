use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::CommandError;
use crate::document::EntryId;

/// The kinds of command an [`EditLog`](crate::EditLog) understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Insert,
    Update,
    Delete,
    Merge,
    Split,
    Move,
    Upsert,
    Clear,
    Commit,
    Rollback,
    Undo,
    Redo,
}

/// An optional field of a [`Command`] record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Id,
    Value,
    OtherId,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Value => "value",
            Field::OtherId => "other_id",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl CommandKind {
    pub const ALL: [CommandKind; 12] = [
        CommandKind::Insert,
        CommandKind::Update,
        CommandKind::Delete,
        CommandKind::Merge,
        CommandKind::Split,
        CommandKind::Move,
        CommandKind::Upsert,
        CommandKind::Clear,
        CommandKind::Commit,
        CommandKind::Rollback,
        CommandKind::Undo,
        CommandKind::Redo,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CommandKind::Insert => "insert",
            CommandKind::Update => "update",
            CommandKind::Delete => "delete",
            CommandKind::Merge => "merge",
            CommandKind::Split => "split",
            CommandKind::Move => "move",
            CommandKind::Upsert => "upsert",
            CommandKind::Clear => "clear",
            CommandKind::Commit => "commit",
            CommandKind::Rollback => "rollback",
            CommandKind::Undo => "undo",
            CommandKind::Redo => "redo",
        }
    }

    /// Fields a command of this kind may carry. Any other field present on
    /// the record makes it malformed.
    pub fn accepted_fields(self) -> &'static [Field] {
        match self {
            CommandKind::Insert | CommandKind::Update | CommandKind::Upsert => {
                &[Field::Id, Field::Value]
            }
            CommandKind::Delete => &[Field::Id],
            CommandKind::Merge | CommandKind::Split | CommandKind::Move => {
                &[Field::Id, Field::OtherId]
            }
            CommandKind::Clear
            | CommandKind::Commit
            | CommandKind::Rollback
            | CommandKind::Undo
            | CommandKind::Redo => &[],
        }
    }

    pub fn accepts(self, field: Field) -> bool {
        self.accepted_fields().contains(&field)
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommandKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CommandKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("Unknown command kind: {}", s))
    }
}

/// A raw command record, as it arrives from the caller.
///
/// The kind is kept as text so that records with an unknown kind can still
/// be represented and reported back.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    #[serde(alias = "command_kind")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntryId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_id: Option<EntryId>,
}

impl Command {
    pub fn new(kind: impl Into<String>) -> Self {
        Command {
            kind: kind.into(),
            id: None,
            value: None,
            other_id: None,
        }
    }

    pub fn with_id(mut self, id: EntryId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_other_id(mut self, other_id: EntryId) -> Self {
        self.other_id = Some(other_id);
        self
    }

    pub fn insert(id: EntryId, value: impl Into<String>) -> Self {
        Command::new("insert").with_id(id).with_value(value)
    }

    pub fn update(id: EntryId, value: impl Into<String>) -> Self {
        Command::new("update").with_id(id).with_value(value)
    }

    pub fn upsert(id: EntryId, value: impl Into<String>) -> Self {
        Command::new("upsert").with_id(id).with_value(value)
    }

    pub fn delete(id: EntryId) -> Self {
        Command::new("delete").with_id(id)
    }

    pub fn merge(id: EntryId, other_id: EntryId) -> Self {
        Command::new("merge").with_id(id).with_other_id(other_id)
    }

    pub fn split(id: EntryId, other_id: EntryId) -> Self {
        Command::new("split").with_id(id).with_other_id(other_id)
    }

    pub fn move_entry(id: EntryId, other_id: EntryId) -> Self {
        Command::new("move").with_id(id).with_other_id(other_id)
    }

    pub fn clear() -> Self {
        Command::new("clear")
    }

    pub fn commit() -> Self {
        Command::new("commit")
    }

    pub fn rollback() -> Self {
        Command::new("rollback")
    }

    pub fn undo() -> Self {
        Command::new("undo")
    }

    pub fn redo() -> Self {
        Command::new("redo")
    }

    /// Resolve the record's kind.
    pub fn command_kind(&self) -> Result<CommandKind, CommandError> {
        self.kind
            .parse()
            .map_err(|_| CommandError::UnknownKind {
                command: self.clone(),
            })
    }

    /// Reject fields the kind does not take.
    pub fn check_fields(&self, kind: CommandKind) -> Result<(), CommandError> {
        let present = [
            (Field::Id, self.id.is_some()),
            (Field::Value, self.value.is_some()),
            (Field::OtherId, self.other_id.is_some()),
        ];
        for (field, is_present) in present {
            if is_present && !kind.accepts(field) {
                return Err(CommandError::UnexpectedField {
                    command: self.clone(),
                    field,
                });
            }
        }
        Ok(())
    }

    pub fn require_id(&self) -> Result<EntryId, CommandError> {
        self.id.ok_or_else(|| self.missing(Field::Id))
    }

    pub fn require_other_id(&self) -> Result<EntryId, CommandError> {
        self.other_id.ok_or_else(|| self.missing(Field::OtherId))
    }

    pub fn require_value(&self) -> Result<String, CommandError> {
        self.value.clone().ok_or_else(|| self.missing(Field::Value))
    }

    fn missing(&self, field: Field) -> CommandError {
        CommandError::MissingField {
            command: self.clone(),
            field,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.kind)?;
        let mut sep = "";
        if let Some(id) = self.id {
            write!(f, "id={}", id)?;
            sep = ", ";
        }
        if let Some(value) = &self.value {
            write!(f, "{}value={:?}", sep, value)?;
            sep = ", ";
        }
        if let Some(other_id) = self.other_id {
            write!(f, "{}other_id={}", sep, other_id)?;
        }
        write!(f, ")")
    }
}
