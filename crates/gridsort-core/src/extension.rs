//! Display extension capability.
//!
//! The host table composes a list of `DisplayExtension` implementations and
//! invokes each uniformly at edit and query time; there is no base-class
//! inheritance and no per-request mutable state on the extension itself.
//! All instrumentation flows through the injected `ExtensionProbe`.

use crate::{
    apply::apply,
    catalog::ColumnCatalog,
    editor::{EditRow, EditState, derive_edit_state, normalize},
    error::StoreError,
    host::{ConfigStore, DisplayConfig, SortSink},
    model::{ColumnId, SortAssignment},
    store::AssignmentStore,
};

///
/// ExtensionEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExtensionEvent {
    /// The extension contributed to query construction.
    Query,
    /// The pre-execution hook ran.
    PreExecute,
}

///
/// ExtensionProbe
///
/// Observability sink for extension lifecycle events. Hosts and test
/// harnesses install one to count hook invocations; the default probe
/// drops everything.
///

pub trait ExtensionProbe {
    fn record(&self, event: ExtensionEvent);
}

/// Default sink when the host installs no probe.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopProbe;

impl ExtensionProbe for NoopProbe {
    fn record(&self, _event: ExtensionEvent) {}
}

///
/// DisplayExtension
///
/// Capability contract a display extension exposes to the host table. The
/// host invokes `edit_state` when rendering configuration, `apply` while
/// building the query, and `pre_execute` just before execution.
///

pub trait DisplayExtension {
    /// Default options for a freshly attached display.
    fn derive_options(&self) -> SortAssignment;

    /// Two-region edit view over the current candidates.
    fn edit_state(&self, display: &dyn DisplayConfig) -> Result<EditState, StoreError>;

    /// The currently persisted options.
    fn persisted_options(&self) -> Result<SortAssignment, StoreError>;

    /// Query-time hook: contribute sort directives to the sink.
    fn apply(
        &self,
        display: &dyn DisplayConfig,
        active_interactive: Option<&ColumnId>,
        sink: &mut dyn SortSink,
    ) -> Result<(), StoreError>;

    /// Pre-execution hook. Most extensions have nothing to do here.
    fn pre_execute(&self) {}
}

///
/// SecondarySort
///
/// The secondary sort extension: wires the candidate catalog, the
/// assignment store, the editor, and the applier behind the
/// `DisplayExtension` capability.
///

#[derive(Debug)]
pub struct SecondarySort<S, P = NoopProbe> {
    store: AssignmentStore<S>,
    probe: P,
}

impl<S: ConfigStore> SecondarySort<S, NoopProbe> {
    #[must_use]
    pub fn new(store: AssignmentStore<S>) -> Self {
        Self {
            store,
            probe: NoopProbe,
        }
    }
}

impl<S: ConfigStore, P: ExtensionProbe> SecondarySort<S, P> {
    #[must_use]
    pub fn with_probe(store: AssignmentStore<S>, probe: P) -> Self {
        Self { store, probe }
    }

    #[must_use]
    pub fn store(&self) -> &AssignmentStore<S> {
        &self.store
    }

    /// Normalize edited rows and persist the result wholesale.
    ///
    /// Returns the assignment that was written.
    pub fn save(&mut self, rows: Vec<EditRow>) -> Result<SortAssignment, StoreError> {
        let assignment = normalize(rows);
        self.store.set(&assignment)?;

        Ok(assignment)
    }

    /// One-line summary of the configured sorts for the options overview,
    /// or `None` when no secondary sorts are configured.
    pub fn summary(&self) -> Result<Option<String>, StoreError> {
        let assignment = self.store.get()?;
        if assignment.is_empty() {
            return Ok(None);
        }

        let fields: Vec<&str> = assignment.fields().map(ColumnId::as_str).collect();

        Ok(Some(fields.join(", ")))
    }
}

impl<S: ConfigStore, P: ExtensionProbe> DisplayExtension for SecondarySort<S, P> {
    fn derive_options(&self) -> SortAssignment {
        SortAssignment::new()
    }

    fn edit_state(&self, display: &dyn DisplayConfig) -> Result<EditState, StoreError> {
        let catalog = ColumnCatalog::from_display(display);
        let assignment = self.store.get()?;

        Ok(derive_edit_state(&catalog, &assignment))
    }

    fn persisted_options(&self) -> Result<SortAssignment, StoreError> {
        self.store.get()
    }

    fn apply(
        &self,
        display: &dyn DisplayConfig,
        active_interactive: Option<&ColumnId>,
        sink: &mut dyn SortSink,
    ) -> Result<(), StoreError> {
        self.probe.record(ExtensionEvent::Query);

        let catalog = ColumnCatalog::from_display(display);
        let assignment = self.store.get()?;
        apply(&assignment, &catalog, active_interactive, sink);

        Ok(())
    }

    fn pre_execute(&self) {
        self.probe.record(ExtensionEvent::PreExecute);
    }
}
