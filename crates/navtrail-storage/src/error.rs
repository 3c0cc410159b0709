use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("travel log not found: {id}")]
    LogNotFound { id: Uuid },

    #[error("entry {entry_id} not found in log {log_id}")]
    EntryNotFound { log_id: Uuid, entry_id: Uuid },

    #[error("photo {photo_id} not found in entry {entry_id}")]
    PhotoNotFound { entry_id: Uuid, photo_id: Uuid },

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
