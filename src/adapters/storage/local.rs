//! Local filesystem implementation of the file storage port.
//!
//! Paths handed in are relative to the upload directory and validated
//! against traversal before any IO. Writes go to a temp file first and
//! are renamed into place, so a crash mid-write never leaves a partial
//! file at the final path.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::ports::{FileStorage, StorageError};

/// Stores file bytes under a base directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalFileStorage {
    base_path: PathBuf,
}

impl LocalFileStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Resolves a relative path under the base directory.
    ///
    /// Rejects absolute paths and any `..` component so a stored path
    /// can never escape the upload directory.
    fn resolve(&self, relative_path: &str) -> Result<PathBuf, StorageError> {
        let relative = Path::new(relative_path);
        let traversal = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)));
        if relative_path.is_empty() || traversal {
            return Err(StorageError::new(
                relative_path,
                "path escapes the upload directory",
            ));
        }
        Ok(self.base_path.join(relative))
    }
}

#[async_trait]
impl FileStorage for LocalFileStorage {
    async fn write(&self, relative_path: &str, content: &[u8]) -> Result<(), StorageError> {
        let final_path = self.resolve(relative_path)?;

        if let Some(parent) = final_path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                StorageError::new(relative_path, format!("could not create directory: {e}"))
            })?;
        }

        let temp_path = final_path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path)
            .await
            .map_err(|e| StorageError::new(relative_path, format!("create failed: {e}")))?;
        file.write_all(content)
            .await
            .map_err(|e| StorageError::new(relative_path, format!("write failed: {e}")))?;
        file.sync_all()
            .await
            .map_err(|e| StorageError::new(relative_path, format!("sync failed: {e}")))?;

        fs::rename(&temp_path, &final_path)
            .await
            .map_err(|e| StorageError::new(relative_path, format!("rename failed: {e}")))?;

        Ok(())
    }

    async fn read(&self, relative_path: &str) -> Result<Vec<u8>, StorageError> {
        let path = self.resolve(relative_path)?;
        fs::read(&path)
            .await
            .map_err(|e| StorageError::new(relative_path, format!("read failed: {e}")))
    }

    async fn delete(&self, relative_path: &str) -> Result<(), StorageError> {
        let path = self.resolve(relative_path)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            // Already gone counts as deleted.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::new(
                relative_path,
                format!("delete failed: {e}"),
            )),
        }
    }
}
