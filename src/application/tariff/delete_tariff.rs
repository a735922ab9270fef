//! DeleteTariffHandler - removes a tariff, its file records, and the bytes.

use std::sync::Arc;

use crate::domain::foundation::TariffId;
use crate::domain::tariff::TariffError;
use crate::ports::{FileStorage, TariffFileRepository, TariffRepository};

pub struct DeleteTariffHandler {
    tariffs: Arc<dyn TariffRepository>,
    tariff_files: Arc<dyn TariffFileRepository>,
    storage: Arc<dyn FileStorage>,
}

impl DeleteTariffHandler {
    pub fn new(
        tariffs: Arc<dyn TariffRepository>,
        tariff_files: Arc<dyn TariffFileRepository>,
        storage: Arc<dyn FileStorage>,
    ) -> Self {
        Self {
            tariffs,
            tariff_files,
            storage,
        }
    }

    pub async fn handle(&self, tariff_id: TariffId) -> Result<(), TariffError> {
        if self.tariffs.find_by_id(&tariff_id).await?.is_none() {
            return Err(TariffError::NotFound(tariff_id));
        }

        let files = self.tariff_files.list_by_tariff(&tariff_id).await?;

        // File records go with the tariff row; bytes on disk are removed
        // best-effort afterwards so a disk error cannot strand the row.
        self.tariffs.delete(&tariff_id).await?;

        for file in files {
            if let Err(e) = self.storage.delete(&file.file_path).await {
                tracing::warn!(file_id = %file.id, error = %e, "could not delete file bytes");
            }
        }

        tracing::info!(tariff_id = %tariff_id, "tariff deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::tariff::test_support::{
        MockStorage, MockTariffFileRepository, MockTariffRepository,
    };
    use crate::domain::tariff::{Tariff, TariffFile};

    #[tokio::test]
    async fn deletes_tariff_and_file_bytes() {
        let tariff = Tariff::create("Balance", 2990, None, None, vec![]);
        let tariff_id = tariff.id;
        let file = TariffFile::create(tariff_id, "week-1.pdf", "tariffs/a/1.pdf", 4);
        let tariffs = Arc::new(MockTariffRepository::with(tariff));
        let files = Arc::new(MockTariffFileRepository::with(vec![file]));
        let storage = Arc::new(MockStorage::with("tariffs/a/1.pdf", vec![1, 2, 3]));
        let handler = DeleteTariffHandler::new(tariffs.clone(), files, storage.clone());

        handler.handle(tariff_id).await.unwrap();

        assert!(tariffs.stored().is_empty());
        assert!(storage.paths().is_empty());
    }

    #[tokio::test]
    async fn unknown_tariff_is_not_found() {
        let handler = DeleteTariffHandler::new(
            Arc::new(MockTariffRepository::empty()),
            Arc::new(MockTariffFileRepository::empty()),
            Arc::new(MockStorage::empty()),
        );

        let result = handler.handle(TariffId::new()).await;

        assert!(matches!(result, Err(TariffError::NotFound(_))));
    }
}
