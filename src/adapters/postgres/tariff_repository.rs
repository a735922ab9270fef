//! PostgreSQL implementations of TariffRepository and TariffFileRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, FileId, TariffId, Timestamp};
use crate::domain::tariff::{Tariff, TariffFile};
use crate::ports::{SaveResult, TariffFileRepository, TariffRepository};

pub struct PostgresTariffRepository {
    pool: PgPool,
}

impl PostgresTariffRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct TariffRow {
    id: Uuid,
    name: String,
    description: Option<String>,
    calories: Option<i32>,
    features: Vec<String>,
    base_price: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<TariffRow> for Tariff {
    fn from(row: TariffRow) -> Self {
        Tariff {
            id: TariffId::from_uuid(row.id),
            name: row.name,
            description: row.description,
            calories: row.calories,
            features: row.features,
            base_price: row.base_price,
            created_at: Timestamp::from_datetime(row.created_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
        }
    }
}

const TARIFF_COLUMNS: &str =
    "id, name, description, calories, features, base_price, created_at, updated_at";

#[async_trait]
impl TariffRepository for PostgresTariffRepository {
    async fn insert(&self, tariff: &Tariff) -> Result<SaveResult, DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO tariffs (id, name, description, calories, features, base_price, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (name) DO NOTHING
            "#,
        )
        .bind(tariff.id.as_uuid())
        .bind(&tariff.name)
        .bind(&tariff.description)
        .bind(tariff.calories)
        .bind(&tariff.features)
        .bind(tariff.base_price)
        .bind(tariff.created_at.as_datetime())
        .bind(tariff.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert tariff: {}", e)))?;

        if result.rows_affected() == 0 {
            Ok(SaveResult::AlreadyExists)
        } else {
            Ok(SaveResult::Inserted)
        }
    }

    async fn find_by_id(&self, id: &TariffId) -> Result<Option<Tariff>, DomainError> {
        let row: Option<TariffRow> = sqlx::query_as(&format!(
            "SELECT {} FROM tariffs WHERE id = $1",
            TARIFF_COLUMNS
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to find tariff: {}", e)))?;

        Ok(row.map(Tariff::from))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Tariff>, DomainError> {
        let row: Option<TariffRow> = sqlx::query_as(&format!(
            "SELECT {} FROM tariffs WHERE name = $1",
            TARIFF_COLUMNS
        ))
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to find tariff by name: {}", e)))?;

        Ok(row.map(Tariff::from))
    }

    async fn list(&self) -> Result<Vec<Tariff>, DomainError> {
        let rows: Vec<TariffRow> = sqlx::query_as(&format!(
            "SELECT {} FROM tariffs ORDER BY created_at DESC",
            TARIFF_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to list tariffs: {}", e)))?;

        Ok(rows.into_iter().map(Tariff::from).collect())
    }

    async fn list_with_calories(&self) -> Result<Vec<Tariff>, DomainError> {
        let rows: Vec<TariffRow> = sqlx::query_as(&format!(
            "SELECT {} FROM tariffs WHERE calories IS NOT NULL ORDER BY created_at",
            TARIFF_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to list tariffs: {}", e)))?;

        Ok(rows.into_iter().map(Tariff::from).collect())
    }

    async fn update(&self, tariff: &Tariff) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            UPDATE tariffs SET
                name = $2, description = $3, calories = $4,
                features = $5, base_price = $6, updated_at = $7
            WHERE id = $1
            "#,
        )
        .bind(tariff.id.as_uuid())
        .bind(&tariff.name)
        .bind(&tariff.description)
        .bind(tariff.calories)
        .bind(&tariff.features)
        .bind(tariff.base_price)
        .bind(tariff.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to update tariff: {}", e)))?;

        Ok(())
    }

    async fn delete(&self, id: &TariffId) -> Result<(), DomainError> {
        // tariff_files rows cascade via the foreign key.
        sqlx::query("DELETE FROM tariffs WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to delete tariff: {}", e)))?;

        Ok(())
    }
}

pub struct PostgresTariffFileRepository {
    pool: PgPool,
}

impl PostgresTariffFileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct TariffFileRow {
    id: Uuid,
    tariff_id: Uuid,
    filename: String,
    file_path: String,
    file_size: i64,
    created_at: DateTime<Utc>,
}

impl From<TariffFileRow> for TariffFile {
    fn from(row: TariffFileRow) -> Self {
        TariffFile {
            id: FileId::from_uuid(row.id),
            tariff_id: TariffId::from_uuid(row.tariff_id),
            filename: row.filename,
            file_path: row.file_path,
            file_size: row.file_size,
            created_at: Timestamp::from_datetime(row.created_at),
        }
    }
}

const FILE_COLUMNS: &str = "id, tariff_id, filename, file_path, file_size, created_at";

#[async_trait]
impl TariffFileRepository for PostgresTariffFileRepository {
    async fn insert(&self, file: &TariffFile) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO tariff_files (id, tariff_id, filename, file_path, file_size, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(file.id.as_uuid())
        .bind(file.tariff_id.as_uuid())
        .bind(&file.filename)
        .bind(&file.file_path)
        .bind(file.file_size)
        .bind(file.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert tariff file: {}", e)))?;

        Ok(())
    }

    async fn find_by_id(&self, id: &FileId) -> Result<Option<TariffFile>, DomainError> {
        let row: Option<TariffFileRow> = sqlx::query_as(&format!(
            "SELECT {} FROM tariff_files WHERE id = $1",
            FILE_COLUMNS
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to find tariff file: {}", e)))?;

        Ok(row.map(TariffFile::from))
    }

    async fn list_by_tariff(&self, tariff_id: &TariffId) -> Result<Vec<TariffFile>, DomainError> {
        let rows: Vec<TariffFileRow> = sqlx::query_as(&format!(
            "SELECT {} FROM tariff_files WHERE tariff_id = $1 ORDER BY created_at",
            FILE_COLUMNS
        ))
        .bind(tariff_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to list tariff files: {}", e)))?;

        Ok(rows.into_iter().map(TariffFile::from).collect())
    }

    async fn delete(&self, id: &FileId) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM tariff_files WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to delete tariff file: {}", e)))?;

        Ok(())
    }
}
