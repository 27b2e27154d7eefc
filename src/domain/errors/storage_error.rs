//! Habit persistence error types.

use thiserror::Error;

/// Errors from loading or saving the persisted habit list.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The platform data directory could not be determined.
    #[error("failed to determine data directory")]
    DataDirNotFound,

    /// Filesystem failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization failure while writing the snapshot.
    ///
    /// Deserialization failures never surface here: an unreadable file
    /// degrades to an empty list at load time.
    #[error("json serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
