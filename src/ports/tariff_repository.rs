//! Tariff and tariff-file repository ports.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, FileId, TariffId};
use crate::domain::tariff::{Tariff, TariffFile};

use super::SaveResult;

/// Port for tariff persistence. Name is unique.
#[async_trait]
pub trait TariffRepository: Send + Sync {
    /// Inserts a tariff, returning `AlreadyExists` on a name conflict.
    async fn insert(&self, tariff: &Tariff) -> Result<SaveResult, DomainError>;

    async fn find_by_id(&self, id: &TariffId) -> Result<Option<Tariff>, DomainError>;

    async fn find_by_name(&self, name: &str) -> Result<Option<Tariff>, DomainError>;

    /// All tariffs, newest first.
    async fn list(&self) -> Result<Vec<Tariff>, DomainError>;

    /// Tariffs with calorie data, for calculator recommendations.
    async fn list_with_calories(&self) -> Result<Vec<Tariff>, DomainError>;

    async fn update(&self, tariff: &Tariff) -> Result<(), DomainError>;

    /// Deletes the tariff row; file records cascade at the storage level.
    async fn delete(&self, id: &TariffId) -> Result<(), DomainError>;
}

/// Port for records of PDF files attached to tariffs.
#[async_trait]
pub trait TariffFileRepository: Send + Sync {
    async fn insert(&self, file: &TariffFile) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &FileId) -> Result<Option<TariffFile>, DomainError>;

    /// All files for a tariff, newest first.
    async fn list_by_tariff(&self, tariff_id: &TariffId) -> Result<Vec<TariffFile>, DomainError>;

    async fn delete(&self, id: &FileId) -> Result<(), DomainError>;
}
