use crate::{
    host::DisplayConfig,
    model::ColumnId,
};

///
/// CandidateColumn
///
/// One secondary-sort candidate: a field that is both declared on the table
/// and click-sortable, with its display label.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CandidateColumn {
    pub field: ColumnId,
    pub label: String,
}

///
/// ColumnCatalog
///
/// Ordered set of secondary-sort candidates for one display. Iteration
/// order is the host's column declaration order and is the tie-break order
/// for everything downstream.
///
/// A catalog is derived per request from the live display configuration and
/// never cached across structural changes.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ColumnCatalog(Vec<CandidateColumn>);

impl ColumnCatalog {
    /// Create an empty catalog (the "not applicable" state).
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Derive the valid candidates from a display configuration.
    ///
    /// A column qualifies when it is (1) a declared display column of the
    /// table style, (2) resolvable to a field handler, and (3) reported by
    /// that handler as click-sortable. A display without a table style
    /// yields an empty catalog; that is a normal state, not a failure.
    #[must_use]
    pub fn from_display(display: &dyn DisplayConfig) -> Self {
        let Some(columns) = display.table_columns() else {
            return Self::new();
        };

        let mut catalog = Self::new();
        for field in columns {
            // duplicate declarations collapse to the first occurrence
            if catalog.contains(&field) {
                continue;
            }
            let Some(handler) = display.field_handler(&field) else {
                continue;
            };
            if !handler.click_sortable() {
                continue;
            }

            let label = display
                .field_label(&field)
                .unwrap_or_else(|| field.to_string());

            catalog.0.push(CandidateColumn { field, label });
        }

        catalog
    }

    /// Return the number of candidates.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the catalog holds no candidates.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if `field` is a valid candidate.
    #[must_use]
    pub fn contains(&self, field: &ColumnId) -> bool {
        self.0.iter().any(|candidate| candidate.field == *field)
    }

    /// Display label for a candidate field, if present.
    #[must_use]
    pub fn label(&self, field: &ColumnId) -> Option<&str> {
        self.0
            .iter()
            .find(|candidate| candidate.field == *field)
            .map(|candidate| candidate.label.as_str())
    }

    /// Iterate over the candidates in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, CandidateColumn> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a ColumnCatalog {
    type Item = &'a CandidateColumn;
    type IntoIter = std::slice::Iter<'a, CandidateColumn>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<CandidateColumn> for ColumnCatalog {
    fn from_iter<I: IntoIterator<Item = CandidateColumn>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
