//! CreateTariffHandler.

use std::sync::Arc;

use crate::domain::tariff::{Tariff, TariffError};
use crate::ports::{SaveResult, TariffRepository};

#[derive(Debug, Clone)]
pub struct CreateTariffCommand {
    pub name: String,
    pub base_price: i64,
    pub description: Option<String>,
    pub calories: Option<i32>,
    pub features: Vec<String>,
}

pub struct CreateTariffHandler {
    tariffs: Arc<dyn TariffRepository>,
}

impl CreateTariffHandler {
    pub fn new(tariffs: Arc<dyn TariffRepository>) -> Self {
        Self { tariffs }
    }

    pub async fn handle(&self, cmd: CreateTariffCommand) -> Result<Tariff, TariffError> {
        let tariff = Tariff::create(
            cmd.name,
            cmd.base_price,
            cmd.description,
            cmd.calories,
            cmd.features,
        );

        // Name uniqueness is enforced by the store; the insert result
        // settles concurrent creates with the same name.
        match self.tariffs.insert(&tariff).await? {
            SaveResult::Inserted => {
                tracing::info!(tariff_id = %tariff.id, name = %tariff.name, "tariff created");
                Ok(tariff)
            }
            SaveResult::AlreadyExists => Err(TariffError::already_exists(tariff.name)),
        }
    }
}
