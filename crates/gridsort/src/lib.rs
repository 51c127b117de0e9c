//! Secondary sort configuration for table displays.
//!
//! Administrators assign additional sort fields and directions to apply
//! after a table's primary/interactive sort, ordered by an explicit
//! priority. This facade re-exports the engine surface from
//! [`gridsort_core`].
//!
//! ## Crate layout
//! - `core`: the engine — catalog derivation, edit normalization, the
//!   assignment store adapter, and query-time application.
//! - `prelude`: the surface hosts use to wire the extension in.

pub use gridsort_core as core;

///
/// Prelude
///
/// Everything a host needs: the data model, the capability traits it must
/// implement, and the extension entry points.
///

pub mod prelude {
    pub use gridsort_core::{
        apply::apply,
        catalog::{CandidateColumn, ColumnCatalog},
        editor::{
            EditAvailability, EditRow, EditState, derive_edit_state, edit_availability, normalize,
        },
        error::StoreError,
        extension::{
            DisplayExtension, ExtensionEvent, ExtensionProbe, NoopProbe, SecondarySort,
        },
        host::{ConfigStore, DisplayConfig, FieldHandler, SortSink},
        model::{ColumnId, SortAssignment, SortDirection, SortEntry},
        store::AssignmentStore,
    };
}
