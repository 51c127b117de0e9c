//! Host capability boundary.
//!
//! The engine never renders, persists, or executes sorts itself. Everything
//! it needs from the surrounding display engine arrives through the traits
//! in this module, and hosts implement them however they store and query
//! their tables.

use crate::{
    error::StoreError,
    model::{ColumnId, SortDirection},
};

///
/// DisplayConfig
///
/// Read-only view of one display's table configuration. Recomputed state
/// must be derived from this per request; the engine never caches it across
/// structural changes.
///

pub trait DisplayConfig {
    /// Declared display columns of the table style, in declaration order.
    ///
    /// Returns `None` when the display does not use a table style at all.
    /// That is a normal, non-exceptional state: secondary sorts simply do
    /// not apply to it.
    fn table_columns(&self) -> Option<Vec<ColumnId>>;

    /// Resolve the field handler for a declared column, if one exists.
    fn field_handler(&self, field: &ColumnId) -> Option<&dyn FieldHandler>;

    /// Display label for a declared column.
    fn field_label(&self, field: &ColumnId) -> Option<String>;
}

///
/// FieldHandler
///
/// Per-field capability surface. Only fields whose handler reports
/// click-sort support qualify as secondary sort candidates.
///

pub trait FieldHandler {
    fn click_sortable(&self) -> bool;
}

///
/// ConfigStore
///
/// Durable key-value persistence keyed by a display identifier, holding the
/// serialized assignment payload.
///
/// `replace` must be atomic with respect to concurrent readers of the same
/// display: a reader observes either the fully-old or the fully-new
/// payload, never an interleaved one. The engine only ever writes whole
/// payloads; no partial or merge updates are performed.
///

pub trait ConfigStore {
    /// Load the stored payload for `display`, or `None` if never written.
    fn load(&self, display: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Replace the stored payload for `display` wholesale.
    fn replace(&mut self, display: &str, payload: Vec<u8>) -> Result<(), StoreError>;
}

impl<S: ConfigStore + ?Sized> ConfigStore for &mut S {
    fn load(&self, display: &str) -> Result<Option<Vec<u8>>, StoreError> {
        (**self).load(display)
    }

    fn replace(&mut self, display: &str, payload: Vec<u8>) -> Result<(), StoreError> {
        (**self).replace(display, payload)
    }
}

///
/// SortSink
///
/// Receives sort directives during query construction. The host appends
/// each call as a secondary ordering key, preserving call order as key
/// precedence; comparator and query construction stay on the host side.
///

pub trait SortSink {
    fn click_sort(&mut self, field: &ColumnId, order: SortDirection);
}
