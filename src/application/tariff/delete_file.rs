//! DeleteFileHandler - removes one file record and its bytes.

use std::sync::Arc;

use crate::domain::foundation::FileId;
use crate::domain::tariff::TariffError;
use crate::ports::{FileStorage, TariffFileRepository};

pub struct DeleteFileHandler {
    tariff_files: Arc<dyn TariffFileRepository>,
    storage: Arc<dyn FileStorage>,
}

impl DeleteFileHandler {
    pub fn new(tariff_files: Arc<dyn TariffFileRepository>, storage: Arc<dyn FileStorage>) -> Self {
        Self {
            tariff_files,
            storage,
        }
    }

    pub async fn handle(&self, file_id: FileId) -> Result<(), TariffError> {
        let file = self
            .tariff_files
            .find_by_id(&file_id)
            .await?
            .ok_or(TariffError::FileNotFound(file_id))?;

        self.tariff_files.delete(&file_id).await?;

        if let Err(e) = self.storage.delete(&file.file_path).await {
            tracing::warn!(file_id = %file_id, error = %e, "could not delete file bytes");
        }

        Ok(())
    }
}
