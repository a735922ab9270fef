//! ListTariffsHandler - newest first.

use std::sync::Arc;

use crate::domain::tariff::{Tariff, TariffError};
use crate::ports::TariffRepository;

pub struct ListTariffsHandler {
    tariffs: Arc<dyn TariffRepository>,
}

impl ListTariffsHandler {
    pub fn new(tariffs: Arc<dyn TariffRepository>) -> Self {
        Self { tariffs }
    }

    pub async fn handle(&self) -> Result<Vec<Tariff>, TariffError> {
        Ok(self.tariffs.list().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::tariff::test_support::MockTariffRepository;

    #[tokio::test]
    async fn lists_newest_first() {
        let repo = Arc::new(MockTariffRepository::empty());
        let older = Tariff::create("Slim", 1990, None, None, vec![]);
        let mut newer = Tariff::create("Balance", 2990, None, None, vec![]);
        newer.created_at = older.created_at.add_seconds(10);
        repo.insert(&older).await.unwrap();
        repo.insert(&newer).await.unwrap();
        let handler = ListTariffsHandler::new(repo);

        let tariffs = handler.handle().await.unwrap();

        assert_eq!(tariffs[0].name, "Balance");
        assert_eq!(tariffs[1].name, "Slim");
    }
}
