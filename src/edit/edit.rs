use crate::document::{Document, EntryId};

/// A reversible change to a [`Document`].
///
/// Applying an edit either changes the document and yields the edit that
/// reverts it, or leaves the document untouched and yields nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Edit {
    Insert {
        id: EntryId,
        value: String,
    },
    Update {
        id: EntryId,
        value: String,
    },
    Delete {
        id: EntryId,
    },
    /// Join `other_id` onto `id` with a single space.
    Merge {
        id: EntryId,
        other_id: EntryId,
    },
    /// Cut `id` at a space, moving the remainder to `other_id`.
    ///
    /// `at` is the byte offset of the separating space. When `None` the
    /// first space in the value is used.
    Split {
        id: EntryId,
        other_id: EntryId,
        at: Option<usize>,
    },
    Move {
        id: EntryId,
        other_id: EntryId,
    },
    Upsert {
        id: EntryId,
        value: String,
    },
    Clear,
    /// Edits applied in order as one step.
    Composite {
        edits: Vec<Edit>,
    },
}

impl Edit {
    pub fn name(&self) -> &'static str {
        match self {
            Edit::Insert { .. } => "insert",
            Edit::Update { .. } => "update",
            Edit::Delete { .. } => "delete",
            Edit::Merge { .. } => "merge",
            Edit::Split { .. } => "split",
            Edit::Move { .. } => "move",
            Edit::Upsert { .. } => "upsert",
            Edit::Clear => "clear",
            Edit::Composite { .. } => "composite",
        }
    }

    /// Apply the edit, returning its inverse if the document changed.
    pub fn apply(&self, document: &mut Document) -> Option<Edit> {
        match self {
            Edit::Insert { id, value } => {
                if document.contains_key(id) {
                    return None;
                }
                document.insert(*id, value.clone());
                Some(Edit::Delete { id: *id })
            }
            Edit::Update { id, value } => {
                let slot = document.get_mut(id)?;
                let previous = std::mem::replace(slot, value.clone());
                Some(Edit::Update {
                    id: *id,
                    value: previous,
                })
            }
            Edit::Delete { id } => {
                let previous = document.remove(id)?;
                Some(Edit::Insert {
                    id: *id,
                    value: previous,
                })
            }
            Edit::Merge { id, other_id } => {
                if id == other_id {
                    return None;
                }
                let (Some(head), Some(tail)) = (document.get(id), document.get(other_id)) else {
                    return None;
                };
                let at = head.len();
                let merged = format!("{} {}", head, tail);
                document.insert(*id, merged);
                document.remove(other_id);
                Some(Edit::Split {
                    id: *id,
                    other_id: *other_id,
                    at: Some(at),
                })
            }
            Edit::Split { id, other_id, at } => {
                if document.contains_key(other_id) {
                    return None;
                }
                let value = document.get(id)?;
                let at = match at {
                    Some(at) => *at,
                    None => value.find(' ')?,
                };
                // An ASCII byte is always on a char boundary.
                if value.as_bytes().get(at) != Some(&b' ') {
                    return None;
                }
                let head = value[..at].to_string();
                let tail = value[at + 1..].to_string();
                document.insert(*id, head);
                document.insert(*other_id, tail);
                Some(Edit::Merge {
                    id: *id,
                    other_id: *other_id,
                })
            }
            Edit::Move { id, other_id } => {
                if document.contains_key(other_id) {
                    return None;
                }
                let value = document.remove(id)?;
                document.insert(*other_id, value);
                Some(Edit::Move {
                    id: *other_id,
                    other_id: *id,
                })
            }
            Edit::Upsert { id, value } => {
                let inverse = match document.insert(*id, value.clone()) {
                    Some(previous) => Edit::Update {
                        id: *id,
                        value: previous,
                    },
                    None => Edit::Delete { id: *id },
                };
                Some(inverse)
            }
            Edit::Clear => {
                if document.is_empty() {
                    return None;
                }
                let removed = std::mem::take(document);
                Some(Edit::Composite {
                    edits: removed
                        .into_iter()
                        .map(|(id, value)| Edit::Insert { id, value })
                        .collect(),
                })
            }
            Edit::Composite { edits } => {
                let mut inverses: Vec<Edit> =
                    edits.iter().filter_map(|edit| edit.apply(document)).collect();
                if inverses.is_empty() {
                    return None;
                }
                inverses.reverse();
                Some(Edit::Composite { edits: inverses })
            }
        }
    }
}
