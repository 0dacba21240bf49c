mod entry;
mod history;

pub use entry::HistoryEntry;
pub use history::History;
