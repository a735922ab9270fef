//! UploadFileHandler - attaches a PDF to a tariff.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::foundation::TariffId;
use crate::domain::tariff::{TariffError, TariffFile};
use crate::ports::{FileStorage, TariffFileRepository, TariffRepository};

const PDF_CONTENT_TYPE: &str = "application/pdf";

#[derive(Debug, Clone)]
pub struct UploadFileCommand {
    pub tariff_id: TariffId,
    pub filename: String,
    pub content_type: String,
    pub content: Vec<u8>,
}

pub struct UploadFileHandler {
    tariffs: Arc<dyn TariffRepository>,
    tariff_files: Arc<dyn TariffFileRepository>,
    storage: Arc<dyn FileStorage>,
    max_file_size: u64,
}

impl UploadFileHandler {
    pub fn new(
        tariffs: Arc<dyn TariffRepository>,
        tariff_files: Arc<dyn TariffFileRepository>,
        storage: Arc<dyn FileStorage>,
        max_file_size: u64,
    ) -> Self {
        Self {
            tariffs,
            tariff_files,
            storage,
            max_file_size,
        }
    }

    pub async fn handle(&self, cmd: UploadFileCommand) -> Result<TariffFile, TariffError> {
        if cmd.content_type != PDF_CONTENT_TYPE {
            return Err(TariffError::invalid_file_type(cmd.content_type));
        }
        let size = cmd.content.len() as u64;
        if size > self.max_file_size {
            return Err(TariffError::FileSizeExceeded {
                size,
                limit: self.max_file_size,
            });
        }

        if self.tariffs.find_by_id(&cmd.tariff_id).await?.is_none() {
            return Err(TariffError::NotFound(cmd.tariff_id));
        }

        let relative_path = format!("tariffs/{}/{}.pdf", cmd.tariff_id, Uuid::new_v4());
        self.storage
            .write(&relative_path, &cmd.content)
            .await
            .map_err(|e| TariffError::Storage(e.to_string()))?;

        let file = TariffFile::create(cmd.tariff_id, cmd.filename, relative_path, size as i64);
        self.tariff_files.insert(&file).await?;

        tracing::info!(
            file_id = %file.id,
            tariff_id = %file.tariff_id,
            size = file.file_size,
            "tariff file uploaded"
        );
        Ok(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::tariff::test_support::{
        MockStorage, MockTariffFileRepository, MockTariffRepository,
    };
    use crate::domain::tariff::Tariff;

    const MAX_SIZE: u64 = 1024;

    struct Fixture {
        tariff_id: TariffId,
        files: Arc<MockTariffFileRepository>,
        storage: Arc<MockStorage>,
        handler: UploadFileHandler,
    }

    fn fixture() -> Fixture {
        let tariff = Tariff::create("Balance", 2990, None, None, vec![]);
        let tariff_id = tariff.id;
        let files = Arc::new(MockTariffFileRepository::empty());
        let storage = Arc::new(MockStorage::empty());
        let handler = UploadFileHandler::new(
            Arc::new(MockTariffRepository::with(tariff)),
            files.clone(),
            storage.clone(),
            MAX_SIZE,
        );
        Fixture {
            tariff_id,
            files,
            storage,
            handler,
        }
    }

    fn command(tariff_id: TariffId, content_type: &str, content: Vec<u8>) -> UploadFileCommand {
        UploadFileCommand {
            tariff_id,
            filename: "week-1.pdf".to_string(),
            content_type: content_type.to_string(),
            content,
        }
    }

    #[tokio::test]
    async fn stores_bytes_and_record() {
        let fx = fixture();

        let file = fx
            .handler
            .handle(command(fx.tariff_id, "application/pdf", vec![1, 2, 3]))
            .await
            .unwrap();

        assert_eq!(file.file_size, 3);
        assert!(file.file_path.starts_with(&format!("tariffs/{}/", fx.tariff_id)));
        assert_eq!(fx.files.stored().len(), 1);
        assert_eq!(fx.storage.paths().len(), 1);
    }

    #[tokio::test]
    async fn non_pdf_is_rejected() {
        let fx = fixture();

        let result = fx
            .handler
            .handle(command(fx.tariff_id, "image/png", vec![1]))
            .await;

        assert!(matches!(result, Err(TariffError::InvalidFileType { .. })));
        assert!(fx.storage.paths().is_empty());
    }

    #[tokio::test]
    async fn oversized_file_is_rejected() {
        let fx = fixture();

        let result = fx
            .handler
            .handle(command(
                fx.tariff_id,
                "application/pdf",
                vec![0; (MAX_SIZE + 1) as usize],
            ))
            .await;

        assert!(matches!(result, Err(TariffError::FileSizeExceeded { .. })));
        assert!(fx.files.stored().is_empty());
    }

    #[tokio::test]
    async fn unknown_tariff_is_not_found() {
        let fx = fixture();

        let result = fx
            .handler
            .handle(command(TariffId::new(), "application/pdf", vec![1]))
            .await;

        assert!(matches!(result, Err(TariffError::NotFound(_))));
    }
}
