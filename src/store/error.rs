use thiserror::Error;

use super::backend::BackendError;

/// Failure of a store mutation. The in-memory list is left as it was
/// before the call.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to persist items to slot '{key}': {source}")]
    Write {
        key: String,
        #[source]
        source: BackendError,
    },

    #[error("Failed to serialize items: {0}")]
    Serialize(#[from] serde_json::Error),
}
