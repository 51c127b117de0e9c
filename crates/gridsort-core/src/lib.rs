//! Core engine for secondary table sorts: candidate catalog derivation,
//! priority normalization, persisted assignments, and query-time application
//! against a host-provided sort sink.

// public exports are one module level down
pub mod apply;
pub mod catalog;
pub mod editor;
pub mod error;
pub mod extension;
pub mod host;
pub mod model;
pub mod store;

// test
#[cfg(test)]
pub(crate) mod test_support;

///
/// Prelude
///
/// Prelude contains only domain vocabulary and the host-facing capability
/// traits. No stores, editors, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        catalog::{CandidateColumn, ColumnCatalog},
        host::{ConfigStore, DisplayConfig, FieldHandler, SortSink},
        model::{ColumnId, SortAssignment, SortDirection, SortEntry},
    };
}
