// crates/worldmark-core/src/error.rs
use thiserror::Error;

/// Crate-wide error type.
///
/// Only the dataset load can fail in a way the caller must handle; the
/// visited-set store swallows its own failures by contract (persistence is
/// best-effort, see [`crate::visited`]).
#[derive(Debug, Error)]
pub enum WorldmarkError {
    #[cfg(feature = "fetch")]
    #[error("dataset request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("dataset endpoint returned HTTP {0}")]
    Status(u16),

    #[error("malformed dataset payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("dataset not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, WorldmarkError>;
