//! ListFilesHandler - file records attached to one tariff.

use std::sync::Arc;

use crate::domain::foundation::TariffId;
use crate::domain::tariff::{TariffError, TariffFile};
use crate::ports::{TariffFileRepository, TariffRepository};

pub struct ListFilesHandler {
    tariffs: Arc<dyn TariffRepository>,
    tariff_files: Arc<dyn TariffFileRepository>,
}

impl ListFilesHandler {
    pub fn new(
        tariffs: Arc<dyn TariffRepository>,
        tariff_files: Arc<dyn TariffFileRepository>,
    ) -> Self {
        Self {
            tariffs,
            tariff_files,
        }
    }

    pub async fn handle(&self, tariff_id: TariffId) -> Result<Vec<TariffFile>, TariffError> {
        if self.tariffs.find_by_id(&tariff_id).await?.is_none() {
            return Err(TariffError::NotFound(tariff_id));
        }
        Ok(self.tariff_files.list_by_tariff(&tariff_id).await?)
    }
}
