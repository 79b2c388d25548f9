//! Storage error types.

use thiserror::Error;

/// Errors raised by the storage backends.
///
/// The public stores never surface these to callers: a failed read is
/// treated as "nothing stored" and a failed write is logged and dropped.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The browser API is missing (no window, storage disabled, native build).
    #[error("storage unavailable: {0}")]
    Unavailable(&'static str),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// The backend rejected the operation (quota exceeded, security error).
    #[error("storage backend error: {0}")]
    Backend(String),
}
