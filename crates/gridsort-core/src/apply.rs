//! Query-time application of a persisted assignment.

use crate::{
    catalog::ColumnCatalog,
    host::SortSink,
    model::{ColumnId, SortAssignment},
};

/// Walk the assignment in stored priority order and emit one sort directive
/// per surviving entry.
///
/// Skip rules, per entry:
/// 1. Fields no longer in the catalog are skipped; a removed column leaves
///    stale entries behind and those are configuration drift, not errors.
/// 2. The active interactive field is skipped; the host's own primary sort
///    already covers it for this request.
///
/// Everything else reaches `sink.click_sort` in exactly stored order, so
/// the composite tie-break precedence equals the stored priority order.
/// There is no failure path: invalid state is filtered, never raised.
pub fn apply(
    assignment: &SortAssignment,
    catalog: &ColumnCatalog,
    active_interactive: Option<&ColumnId>,
    sink: &mut dyn SortSink,
) {
    for entry in assignment.iter() {
        if !catalog.contains(&entry.field) {
            continue;
        }
        if active_interactive == Some(&entry.field) {
            continue;
        }

        sink.click_sort(&entry.field, entry.order);
    }
}
