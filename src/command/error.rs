use std::fmt;

use super::command::{Command, Field};

/// A command record that cannot be turned into an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    UnknownKind { command: Command },
    MissingField { command: Command, field: Field },
    UnexpectedField { command: Command, field: Field },
}

impl CommandError {
    /// The offending command record.
    pub fn command(&self) -> &Command {
        match self {
            CommandError::UnknownKind { command }
            | CommandError::MissingField { command, .. }
            | CommandError::UnexpectedField { command, .. } => command,
        }
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::UnknownKind { command } => {
                write!(f, "invalid command: {}", command)
            }
            CommandError::MissingField { command, field } => {
                write!(f, "{} is missing required field `{}`", command, field)
            }
            CommandError::UnexpectedField { command, field } => {
                write!(f, "{} does not accept field `{}`", command, field)
            }
        }
    }
}

impl std::error::Error for CommandError {}
