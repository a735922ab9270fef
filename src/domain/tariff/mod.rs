//! Tariff domain - purchasable plans and their attached PDF files.

mod errors;

pub use errors::TariffError;

use crate::domain::foundation::{FileId, TariffId, Timestamp};

/// A purchasable nutrition plan.
#[derive(Debug, Clone)]
pub struct Tariff {
    pub id: TariffId,
    /// Unique across all tariffs.
    pub name: String,
    pub description: Option<String>,
    /// Daily calorie target this plan is built around, if any.
    pub calories: Option<i32>,
    pub features: Vec<String>,
    /// Price in minor currency units.
    pub base_price: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Tariff {
    pub fn create(
        name: impl Into<String>,
        base_price: i64,
        description: Option<String>,
        calories: Option<i32>,
        features: Vec<String>,
    ) -> Self {
        let now = Timestamp::now();
        Self {
            id: TariffId::new(),
            name: name.into(),
            description,
            calories,
            features,
            base_price,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update of a tariff; `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct TariffUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub calories: Option<i32>,
    pub features: Option<Vec<String>>,
    pub base_price: Option<i64>,
}

/// A PDF file attached to a tariff.
///
/// The record and the bytes on disk are deleted together when the owning
/// tariff is deleted.
#[derive(Debug, Clone)]
pub struct TariffFile {
    pub id: FileId,
    pub tariff_id: TariffId,
    /// Original filename as uploaded.
    pub filename: String,
    /// Path relative to the upload directory.
    pub file_path: String,
    pub file_size: i64,
    pub created_at: Timestamp,
}

impl TariffFile {
    pub fn create(
        tariff_id: TariffId,
        filename: impl Into<String>,
        file_path: impl Into<String>,
        file_size: i64,
    ) -> Self {
        Self {
            id: FileId::new(),
            tariff_id,
            filename: filename.into(),
            file_path: file_path.into(),
            file_size,
            created_at: Timestamp::now(),
        }
    }
}
