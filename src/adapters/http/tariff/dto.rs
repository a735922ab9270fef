//! JSON shapes for tariff and file endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::tariff::{Tariff, TariffFile, TariffUpdate};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTariffRequest {
    pub name: String,
    /// Price in minor currency units.
    pub base_price: i64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub calories: Option<i32>,
    #[serde(default)]
    pub features: Vec<String>,
}

/// Partial update; absent fields keep their current value.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTariffRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub base_price: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub calories: Option<i32>,
    #[serde(default)]
    pub features: Option<Vec<String>>,
}

impl From<UpdateTariffRequest> for TariffUpdate {
    fn from(request: UpdateTariffRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            calories: request.calories,
            features: request.features,
            base_price: request.base_price,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TariffResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub calories: Option<i32>,
    pub features: Vec<String>,
    pub base_price: i64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Tariff> for TariffResponse {
    fn from(tariff: Tariff) -> Self {
        Self {
            id: tariff.id.to_string(),
            name: tariff.name,
            description: tariff.description,
            calories: tariff.calories,
            features: tariff.features,
            base_price: tariff.base_price,
            created_at: tariff.created_at.as_datetime().to_rfc3339(),
            updated_at: tariff.updated_at.as_datetime().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TariffListResponse {
    pub tariffs: Vec<TariffResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TariffFileResponse {
    pub id: String,
    pub tariff_id: String,
    pub filename: String,
    pub file_size: i64,
    pub created_at: String,
}

impl From<TariffFile> for TariffFileResponse {
    fn from(file: TariffFile) -> Self {
        Self {
            id: file.id.to_string(),
            tariff_id: file.tariff_id.to_string(),
            filename: file.filename,
            file_size: file.file_size,
            created_at: file.created_at.as_datetime().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TariffFileListResponse {
    pub files: Vec<TariffFileResponse>,
}
