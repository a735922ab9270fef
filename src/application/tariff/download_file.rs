//! DownloadFileHandler - streams a stored PDF back out.

use std::sync::Arc;

use crate::domain::foundation::FileId;
use crate::domain::tariff::TariffError;
use crate::ports::{FileStorage, TariffFileRepository};

#[derive(Debug, Clone)]
pub struct DownloadedFile {
    pub filename: String,
    pub content: Vec<u8>,
}

pub struct DownloadFileHandler {
    tariff_files: Arc<dyn TariffFileRepository>,
    storage: Arc<dyn FileStorage>,
}

impl DownloadFileHandler {
    pub fn new(tariff_files: Arc<dyn TariffFileRepository>, storage: Arc<dyn FileStorage>) -> Self {
        Self {
            tariff_files,
            storage,
        }
    }

    pub async fn handle(&self, file_id: FileId) -> Result<DownloadedFile, TariffError> {
        let file = self
            .tariff_files
            .find_by_id(&file_id)
            .await?
            .ok_or(TariffError::FileNotFound(file_id))?;

        let content = self
            .storage
            .read(&file.file_path)
            .await
            .map_err(|e| TariffError::Storage(e.to_string()))?;

        Ok(DownloadedFile {
            filename: file.filename,
            content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::tariff::test_support::{MockStorage, MockTariffFileRepository};
    use crate::domain::foundation::TariffId;
    use crate::domain::tariff::TariffFile;

    #[tokio::test]
    async fn returns_bytes_with_original_filename() {
        let file = TariffFile::create(TariffId::new(), "week-1.pdf", "tariffs/x/a.pdf", 3);
        let file_id = file.id;
        let handler = DownloadFileHandler::new(
            Arc::new(MockTariffFileRepository::with(vec![file])),
            Arc::new(MockStorage::with("tariffs/x/a.pdf", vec![1, 2, 3])),
        );

        let downloaded = handler.handle(file_id).await.unwrap();

        assert_eq!(downloaded.filename, "week-1.pdf");
        assert_eq!(downloaded.content, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn unknown_file_is_not_found() {
        let handler = DownloadFileHandler::new(
            Arc::new(MockTariffFileRepository::empty()),
            Arc::new(MockStorage::empty()),
        );

        let result = handler.handle(FileId::new()).await;

        assert!(matches!(result, Err(TariffError::FileNotFound(_))));
    }
}
