use std::collections::BTreeMap;

/// Id of a document entry.
pub type EntryId = i64;

/// The id-to-value mapping edited by an [`EditLog`](crate::EditLog).
///
/// Ordered so that rendering and serialization are deterministic.
pub type Document = BTreeMap<EntryId, String>;
