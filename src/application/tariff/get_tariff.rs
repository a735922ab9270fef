//! GetTariffHandler.

use std::sync::Arc;

use crate::domain::foundation::TariffId;
use crate::domain::tariff::{Tariff, TariffError};
use crate::ports::TariffRepository;

pub struct GetTariffHandler {
    tariffs: Arc<dyn TariffRepository>,
}

impl GetTariffHandler {
    pub fn new(tariffs: Arc<dyn TariffRepository>) -> Self {
        Self { tariffs }
    }

    pub async fn handle(&self, tariff_id: TariffId) -> Result<Tariff, TariffError> {
        self.tariffs
            .find_by_id(&tariff_id)
            .await?
            .ok_or(TariffError::NotFound(tariff_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::tariff::test_support::MockTariffRepository;

    #[tokio::test]
    async fn returns_tariff_or_not_found() {
        let tariff = Tariff::create("Balance", 2990, None, None, vec![]);
        let tariff_id = tariff.id;
        let handler = GetTariffHandler::new(Arc::new(MockTariffRepository::with(tariff)));

        assert_eq!(handler.handle(tariff_id).await.unwrap().name, "Balance");
        assert!(matches!(
            handler.handle(TariffId::new()).await,
            Err(TariffError::NotFound(_))
        ));
    }
}
