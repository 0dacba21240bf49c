mod command;
mod document;
mod edit;
mod edit_log;
mod history;
pub mod scenario;

pub use command::{Command, CommandError, CommandKind, Field};
pub use document::{Document, EntryId};
pub use edit::{Edit, Operation};
pub use edit_log::{apply, EditLog};
pub use history::{History, HistoryEntry};
