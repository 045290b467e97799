//! Error types shared across the Lull crates

use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for Lull
#[derive(Error, Debug)]
pub enum CoreError {
    /// Storage-related errors (volume store backends)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Catalog contains the same sound id twice
    #[error("Duplicate sound id in catalog: {0}")]
    DuplicateSound(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl CoreError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}
