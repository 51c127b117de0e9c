//! Edit-session derivation and normalization.
//!
//! The editing surface (form, drag widget, whatever the host renders) only
//! has to produce one `EditRow` per candidate; everything order-related is
//! decided here so the persisted assignment stays canonical.

use crate::{
    catalog::ColumnCatalog,
    host::DisplayConfig,
    model::{ColumnId, SortAssignment, SortDirection, SortEntry},
};
use std::collections::BTreeSet;

///
/// EditState
///
/// Two-region view of the candidates for one edit session: `assigned`
/// mirrors the stored assignment order, `unassigned` holds the remaining
/// candidates in catalog order. Transient; discarded once the session is
/// normalized back into a `SortAssignment`.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct EditState {
    pub assigned: Vec<ColumnId>,
    pub unassigned: Vec<ColumnId>,
}

///
/// EditRow
///
/// One row of user-edited state as produced by the editing surface. The
/// `priority` is a presentation-only ordering key (drag position, explicit
/// numeric weight, anything totally ordered) and is never persisted.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EditRow {
    pub field: ColumnId,
    pub in_sort_group: bool,
    pub priority: i64,
    pub order: SortDirection,
}

impl EditRow {
    #[must_use]
    pub fn new(
        field: impl Into<ColumnId>,
        in_sort_group: bool,
        priority: i64,
        order: SortDirection,
    ) -> Self {
        Self {
            field: field.into(),
            in_sort_group,
            priority,
            order,
        }
    }
}

///
/// EditAvailability
///
/// Whether a display can be edited at all. Both non-`Ready` variants are
/// terminal UI states, not errors.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EditAvailability {
    /// The display does not use a table style; secondary sorts do not apply.
    NotApplicable,
    /// The table declares no click-sortable columns.
    NoSortableColumns,
    /// Editing can proceed over these candidates.
    Ready(ColumnCatalog),
}

/// Classify a display for the editing surface.
#[must_use]
pub fn edit_availability(display: &dyn DisplayConfig) -> EditAvailability {
    if display.table_columns().is_none() {
        return EditAvailability::NotApplicable;
    }

    let catalog = ColumnCatalog::from_display(display);
    if catalog.is_empty() {
        EditAvailability::NoSortableColumns
    } else {
        EditAvailability::Ready(catalog)
    }
}

/// Partition the candidates into the two edit regions.
///
/// Every stored entry whose field is still a candidate lands in `assigned`,
/// in stored order. Stored entries referencing fields no longer in the
/// catalog are dropped silently; they are configuration drift, not errors.
/// Remaining candidates fill `unassigned` in catalog order.
#[must_use]
pub fn derive_edit_state(catalog: &ColumnCatalog, assignment: &SortAssignment) -> EditState {
    let assigned: Vec<ColumnId> = assignment
        .iter()
        .filter(|entry| catalog.contains(&entry.field))
        .map(|entry| entry.field.clone())
        .collect();

    let unassigned: Vec<ColumnId> = catalog
        .iter()
        .filter(|candidate| !assigned.contains(&candidate.field))
        .map(|candidate| candidate.field.clone())
        .collect();

    EditState {
        assigned,
        unassigned,
    }
}

/// Normalize user-edited rows into a canonical assignment.
///
/// Rows outside the sort group are discarded. The rest are stable-sorted by
/// `priority` ascending, so rows whose priorities collide after free-form
/// edits keep their input order. Duplicate fields should not occur (the
/// editing surface emits one row per candidate) but are tolerated: the
/// first occurrence in sorted order wins.
///
/// The result replaces the prior assignment wholesale; `priority` itself is
/// not part of the output.
#[must_use]
pub fn normalize(rows: Vec<EditRow>) -> SortAssignment {
    let mut rows: Vec<EditRow> = rows.into_iter().filter(|row| row.in_sort_group).collect();
    rows.sort_by_key(|row| row.priority);

    let mut seen = BTreeSet::new();
    let mut assignment = SortAssignment::new();
    for row in rows {
        if !seen.insert(row.field.clone()) {
            continue;
        }
        assignment.push(SortEntry {
            field: row.field,
            order: row.order,
        });
    }

    assignment
}
