//! FileStorage port - PDF bytes keyed by relative path.

use async_trait::async_trait;
use thiserror::Error;

/// Filesystem failure in a storage adapter.
#[derive(Debug, Clone, Error)]
#[error("storage error at '{path}': {message}")]
pub struct StorageError {
    pub path: String,
    pub message: String,
}

impl StorageError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Port for file byte storage under the configured upload directory.
///
/// Paths are always relative to the upload root; adapters own the
/// mapping to absolute locations.
#[async_trait]
pub trait FileStorage: Send + Sync {
    /// Writes bytes, creating parent directories as needed.
    async fn write(&self, relative_path: &str, content: &[u8]) -> Result<(), StorageError>;

    /// Reads bytes back. A missing file is an error; callers that can
    /// degrade (e.g. notification attachments) decide what to do with it.
    async fn read(&self, relative_path: &str) -> Result<Vec<u8>, StorageError>;

    /// Deletes the file. Deleting a missing file is not an error.
    async fn delete(&self, relative_path: &str) -> Result<(), StorageError>;
}
