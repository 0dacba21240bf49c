mod command;
mod error;

pub use command::{Command, CommandKind, Field};
pub use error::CommandError;
