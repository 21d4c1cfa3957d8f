//! Media storage abstraction.

mod local;

pub use local::LocalMediaStore;

use async_trait::async_trait;
use meet_core::error::DomainError;

/// Errors from the storage backend
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Underlying filesystem failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File name would escape the storage root
    #[error("Invalid file name: {0}")]
    InvalidName(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

impl From<StorageError> for DomainError {
    fn from(e: StorageError) -> Self {
        DomainError::StorageError(e.to_string())
    }
}

/// Storage backend for uploaded media files
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Write a file, replacing any existing one with the same name,
    /// and return the public URL it will be served at
    async fn store(&self, name: &str, bytes: &[u8]) -> StorageResult<String>;

    /// Remove a file; missing files are not an error
    async fn remove(&self, name: &str) -> StorageResult<()>;
}
