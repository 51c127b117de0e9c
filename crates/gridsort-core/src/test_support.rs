//! Shared fixtures for engine tests: an in-memory configuration backend, a
//! call-recording sort sink, a counting probe, and a scriptable display.

use crate::{
    error::StoreError,
    extension::{ExtensionEvent, ExtensionProbe},
    host::{ConfigStore, DisplayConfig, FieldHandler, SortSink},
    model::{ColumnId, SortDirection},
};
use std::{cell::RefCell, collections::BTreeMap};

///
/// MemoryConfigStore
///

#[derive(Debug, Default)]
pub(crate) struct MemoryConfigStore {
    entries: BTreeMap<String, Vec<u8>>,
}

impl MemoryConfigStore {
    pub(crate) fn put_raw(&mut self, display: &str, payload: Vec<u8>) {
        self.entries.insert(display.to_string(), payload);
    }

    pub(crate) fn raw(&self, display: &str) -> Option<&[u8]> {
        self.entries.get(display).map(Vec::as_slice)
    }
}

impl ConfigStore for MemoryConfigStore {
    fn load(&self, display: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.entries.get(display).cloned())
    }

    fn replace(&mut self, display: &str, payload: Vec<u8>) -> Result<(), StoreError> {
        self.entries.insert(display.to_string(), payload);

        Ok(())
    }
}

///
/// RecordingSink
///

#[derive(Debug, Default)]
pub(crate) struct RecordingSink {
    pub(crate) calls: Vec<(ColumnId, SortDirection)>,
}

impl SortSink for RecordingSink {
    fn click_sort(&mut self, field: &ColumnId, order: SortDirection) {
        self.calls.push((field.clone(), order));
    }
}

///
/// CountingProbe
///

#[derive(Debug, Default)]
pub(crate) struct CountingProbe {
    events: RefCell<Vec<ExtensionEvent>>,
}

impl CountingProbe {
    pub(crate) fn count(&self, event: ExtensionEvent) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|recorded| **recorded == event)
            .count()
    }
}

impl ExtensionProbe for CountingProbe {
    fn record(&self, event: ExtensionEvent) {
        self.events.borrow_mut().push(event);
    }
}

///
/// TableDisplay
///
/// Scriptable display configuration. Lookups resolve against the first
/// matching declared column, so duplicate declarations behave like the
/// host's own first-wins column handling.
///

#[derive(Debug)]
pub(crate) struct TableDisplay {
    is_table: bool,
    columns: Vec<DeclaredColumn>,
}

#[derive(Debug)]
struct DeclaredColumn {
    field: ColumnId,
    label: Option<String>,
    handler: Option<StubHandler>,
}

#[derive(Debug)]
struct StubHandler {
    sortable: bool,
}

impl FieldHandler for StubHandler {
    fn click_sortable(&self) -> bool {
        self.sortable
    }
}

impl TableDisplay {
    pub(crate) fn new() -> Self {
        Self {
            is_table: true,
            columns: Vec::new(),
        }
    }

    pub(crate) fn not_a_table() -> Self {
        Self {
            is_table: false,
            columns: Vec::new(),
        }
    }

    pub(crate) fn with_column(mut self, field: &str, label: &str, sortable: bool) -> Self {
        self.columns.push(DeclaredColumn {
            field: ColumnId::from(field),
            label: Some(label.to_string()),
            handler: Some(StubHandler { sortable }),
        });

        self
    }

    /// Declare a column with no resolvable field handler.
    pub(crate) fn with_declared_only(mut self, field: &str) -> Self {
        self.columns.push(DeclaredColumn {
            field: ColumnId::from(field),
            label: None,
            handler: None,
        });

        self
    }

    pub(crate) fn with_unlabeled_column(mut self, field: &str, sortable: bool) -> Self {
        self.columns.push(DeclaredColumn {
            field: ColumnId::from(field),
            label: None,
            handler: Some(StubHandler { sortable }),
        });

        self
    }

    fn find(&self, field: &ColumnId) -> Option<&DeclaredColumn> {
        self.columns.iter().find(|column| column.field == *field)
    }
}

impl DisplayConfig for TableDisplay {
    fn table_columns(&self) -> Option<Vec<ColumnId>> {
        self.is_table
            .then(|| self.columns.iter().map(|column| column.field.clone()).collect())
    }

    fn field_handler(&self, field: &ColumnId) -> Option<&dyn FieldHandler> {
        self.find(field)?
            .handler
            .as_ref()
            .map(|handler| handler as &dyn FieldHandler)
    }

    fn field_label(&self, field: &ColumnId) -> Option<String> {
        self.find(field)?.label.clone()
    }
}
