use derive_more::{Deref, Display};
use serde::{Deserialize, Serialize};

///
/// ColumnId
///
/// Opaque identifier of a displayable field. Compared by identity; the
/// engine never interprets the contents.
///

#[derive(
    Clone, Debug, Deref, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(transparent)]
pub struct ColumnId(String);

impl ColumnId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Return the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ColumnId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ColumnId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

///
/// SortDirection
///
/// Canonical sort direction shared by the editor, the persisted assignment,
/// and the sort sink. Serializes as `"asc"` / `"desc"`.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

///
/// SortEntry
///
/// One secondary sort clause: a field and the direction to sort it in.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SortEntry {
    pub field: ColumnId,
    pub order: SortDirection,
}

impl SortEntry {
    #[must_use]
    pub fn new(field: impl Into<ColumnId>, order: SortDirection) -> Self {
        Self {
            field: field.into(),
            order,
        }
    }
}

///
/// SortAssignment
///
/// Ordered sequence of secondary sort clauses. List order IS priority: the
/// first entry is the highest-priority secondary sort and is applied first.
/// Serializes identically to `Vec<SortEntry>`.
///
/// Invariant: no duplicate `field` values. Entries referencing fields that
/// are no longer valid candidates are ignorable downstream, never fatal.
///
/// Mutation is explicit and positional; `SortAssignment` does not expose
/// `DerefMut` to avoid accidental bypass of the ordering semantics.
///

#[repr(transparent)]
#[derive(Clone, Debug, Default, Deref, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SortAssignment(Vec<SortEntry>);

impl SortAssignment {
    /// Create an empty assignment (secondary sort disabled).
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Build an assignment from an existing vector of entries.
    #[must_use]
    pub const fn from_vec(entries: Vec<SortEntry>) -> Self {
        Self(entries)
    }

    /// Consume the assignment and return the underlying entries.
    #[must_use]
    pub fn into_vec(self) -> Vec<SortEntry> {
        self.0
    }

    /// Append an entry to the end (lowest priority position).
    pub fn push(&mut self, entry: SortEntry) {
        self.0.push(entry);
    }

    /// Returns `true` if any entry references `field`.
    #[must_use]
    pub fn contains_field(&self, field: &ColumnId) -> bool {
        self.0.iter().any(|entry| entry.field == *field)
    }

    /// Iterate over the referenced fields in priority order.
    pub fn fields(&self) -> impl Iterator<Item = &ColumnId> {
        self.0.iter().map(|entry| &entry.field)
    }
}

impl FromIterator<SortEntry> for SortAssignment {
    fn from_iter<I: IntoIterator<Item = SortEntry>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for SortAssignment {
    type Item = SortEntry;
    type IntoIter = std::vec::IntoIter<SortEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
