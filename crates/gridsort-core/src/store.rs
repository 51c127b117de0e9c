use crate::{
    error::StoreError,
    host::ConfigStore,
    model::SortAssignment,
};

///
/// AssignmentStore
///
/// Thin adapter binding one display's secondary sort assignment to the host
/// configuration store. The payload is a JSON list of `{field, order}`
/// objects in priority order.
///
/// Writes are replace-wholesale: `set` serializes the whole assignment and
/// hands it to the backend in one `replace` call, so no partially-written
/// assignment is ever observable and no merge update can corrupt ordering.
///

#[derive(Debug)]
pub struct AssignmentStore<S> {
    store: S,
    display: String,
}

impl<S: ConfigStore> AssignmentStore<S> {
    #[must_use]
    pub fn new(store: S, display: impl Into<String>) -> Self {
        Self {
            store,
            display: display.into(),
        }
    }

    /// Identifier of the display this adapter is bound to.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Read the persisted assignment.
    ///
    /// A display that has never been written reads as the empty assignment.
    pub fn get(&self) -> Result<SortAssignment, StoreError> {
        match self.store.load(&self.display)? {
            Some(payload) => serde_json::from_slice(&payload).map_err(StoreError::Decode),
            None => Ok(SortAssignment::new()),
        }
    }

    /// Replace the persisted assignment wholesale.
    pub fn set(&mut self, assignment: &SortAssignment) -> Result<(), StoreError> {
        let payload = serde_json::to_vec(assignment).map_err(StoreError::Encode)?;

        self.store.replace(&self.display, payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        model::{SortDirection, SortEntry},
        test_support::MemoryConfigStore,
    };

    #[test]
    fn get_before_any_set_is_empty() {
        let store = AssignmentStore::new(MemoryConfigStore::default(), "page_1");

        let assignment = store.get().expect("store read");
        assert!(assignment.is_empty());
    }

    #[test]
    fn set_then_get_round_trips() {
        let mut store = AssignmentStore::new(MemoryConfigStore::default(), "page_1");
        let assignment = SortAssignment::from_vec(vec![
            SortEntry::new("date", SortDirection::Desc),
            SortEntry::new("name", SortDirection::Asc),
        ]);

        store.set(&assignment).expect("store write");

        assert_eq!(store.get().expect("store read"), assignment);
    }

    #[test]
    fn set_replaces_prior_content_wholesale() {
        let mut store = AssignmentStore::new(MemoryConfigStore::default(), "page_1");
        let first = SortAssignment::from_vec(vec![
            SortEntry::new("a", SortDirection::Asc),
            SortEntry::new("b", SortDirection::Asc),
        ]);
        let second = SortAssignment::from_vec(vec![SortEntry::new("c", SortDirection::Desc)]);

        store.set(&first).expect("store write");
        store.set(&second).expect("store write");

        assert_eq!(store.get().expect("store read"), second);
    }

    #[test]
    fn displays_are_keyed_independently() {
        let mut backend = MemoryConfigStore::default();
        let assignment = SortAssignment::from_vec(vec![SortEntry::new("a", SortDirection::Asc)]);

        {
            let mut store = AssignmentStore::new(&mut backend, "page_1");
            store.set(&assignment).expect("store write");
        }

        let other = AssignmentStore::new(&mut backend, "page_2");
        assert!(other.get().expect("store read").is_empty());
    }

    #[test]
    fn corrupt_payload_surfaces_a_decode_error() {
        let mut backend = MemoryConfigStore::default();
        backend.put_raw("page_1", b"not json".to_vec());

        let store = AssignmentStore::new(backend, "page_1");

        assert!(matches!(store.get(), Err(StoreError::Decode(_))));
    }

    #[test]
    fn payload_shape_matches_the_stored_option_format() {
        let mut backend = MemoryConfigStore::default();
        {
            let mut store = AssignmentStore::new(&mut backend, "page_1");
            store
                .set(&SortAssignment::from_vec(vec![SortEntry::new(
                    "date",
                    SortDirection::Desc,
                )]))
                .expect("store write");
        }

        let raw = backend.raw("page_1").expect("payload present");
        let value: serde_json::Value = serde_json::from_slice(raw).expect("payload is json");
        assert_eq!(
            value,
            serde_json::json!([{ "field": "date", "order": "desc" }])
        );
    }
}
