//! UpdateTariffHandler - partial update with name-uniqueness re-check.

use std::sync::Arc;

use crate::domain::foundation::{TariffId, Timestamp};
use crate::domain::tariff::{Tariff, TariffError, TariffUpdate};
use crate::ports::TariffRepository;

#[derive(Debug, Clone)]
pub struct UpdateTariffCommand {
    pub tariff_id: TariffId,
    pub update: TariffUpdate,
}

pub struct UpdateTariffHandler {
    tariffs: Arc<dyn TariffRepository>,
}

impl UpdateTariffHandler {
    pub fn new(tariffs: Arc<dyn TariffRepository>) -> Self {
        Self { tariffs }
    }

    pub async fn handle(&self, cmd: UpdateTariffCommand) -> Result<Tariff, TariffError> {
        let mut tariff = self
            .tariffs
            .find_by_id(&cmd.tariff_id)
            .await?
            .ok_or(TariffError::NotFound(cmd.tariff_id))?;

        if let Some(name) = cmd.update.name {
            if name != tariff.name {
                if let Some(other) = self.tariffs.find_by_name(&name).await? {
                    if other.id != tariff.id {
                        return Err(TariffError::already_exists(name));
                    }
                }
                tariff.name = name;
            }
        }
        if let Some(description) = cmd.update.description {
            tariff.description = Some(description);
        }
        if let Some(calories) = cmd.update.calories {
            tariff.calories = Some(calories);
        }
        if let Some(features) = cmd.update.features {
            tariff.features = features;
        }
        if let Some(base_price) = cmd.update.base_price {
            tariff.base_price = base_price;
        }
        tariff.updated_at = Timestamp::now();

        self.tariffs.update(&tariff).await?;
        Ok(tariff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::tariff::test_support::MockTariffRepository;

    #[tokio::test]
    async fn updates_only_provided_fields() {
        let tariff = Tariff::create("Balance", 2990, None, Some(2000), vec![]);
        let tariff_id = tariff.id;
        let repo = Arc::new(MockTariffRepository::with(tariff));
        let handler = UpdateTariffHandler::new(repo.clone());

        let updated = handler
            .handle(UpdateTariffCommand {
                tariff_id,
                update: TariffUpdate {
                    base_price: Some(3490),
                    ..Default::default()
                },
            })
            .await
            .unwrap();

        assert_eq!(updated.base_price, 3490);
        assert_eq!(updated.name, "Balance");
        assert_eq!(updated.calories, Some(2000));
    }

    #[tokio::test]
    async fn rename_onto_taken_name_is_rejected() {
        let first = Tariff::create("Balance", 2990, None, None, vec![]);
        let second = Tariff::create("Slim", 1990, None, None, vec![]);
        let second_id = second.id;
        let repo = Arc::new(MockTariffRepository::empty());
        repo.insert(&first).await.unwrap();
        repo.insert(&second).await.unwrap();
        let handler = UpdateTariffHandler::new(repo);

        let result = handler
            .handle(UpdateTariffCommand {
                tariff_id: second_id,
                update: TariffUpdate {
                    name: Some("Balance".to_string()),
                    ..Default::default()
                },
            })
            .await;

        assert!(matches!(result, Err(TariffError::AlreadyExists { .. })));
    }

    #[tokio::test]
    async fn unknown_tariff_is_not_found() {
        let handler = UpdateTariffHandler::new(Arc::new(MockTariffRepository::empty()));

        let result = handler
            .handle(UpdateTariffCommand {
                tariff_id: TariffId::new(),
                update: TariffUpdate::default(),
            })
            .await;

        assert!(matches!(result, Err(TariffError::NotFound(_))));
    }
}
