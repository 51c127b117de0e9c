use thiserror::Error as ThisError;

///
/// StoreError
///
/// Failure surface of the persistence adapter. The pure engine is total and
/// non-failing; only reading or writing the host configuration store can
/// fail. Stale or unknown fields are configuration drift, not errors, and
/// are filtered where they are read.
///

#[derive(Debug, ThisError)]
pub enum StoreError {
    #[error("assignment payload could not be decoded: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("assignment payload could not be encoded: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("configuration backend failure: {message}")]
    Backend { message: String },
}

impl StoreError {
    /// Construct a backend failure from a host-provided message.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }
}
