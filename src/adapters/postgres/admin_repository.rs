//! PostgreSQL implementation of AdminRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::admin::Admin;
use crate::domain::foundation::{AdminId, DomainError, Timestamp};
use crate::ports::{AdminRepository, SaveResult};

pub struct PostgresAdminRepository {
    pool: PgPool,
}

impl PostgresAdminRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct AdminRow {
    id: Uuid,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<AdminRow> for Admin {
    fn from(row: AdminRow) -> Self {
        Admin {
            id: AdminId::from_uuid(row.id),
            email: row.email,
            password_hash: row.password_hash,
            created_at: Timestamp::from_datetime(row.created_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
        }
    }
}

#[async_trait]
impl AdminRepository for PostgresAdminRepository {
    async fn insert(&self, admin: &Admin) -> Result<SaveResult, DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO admins (id, email, password_hash, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (email) DO NOTHING
            "#,
        )
        .bind(admin.id.as_uuid())
        .bind(&admin.email)
        .bind(&admin.password_hash)
        .bind(admin.created_at.as_datetime())
        .bind(admin.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert admin: {}", e)))?;

        if result.rows_affected() == 0 {
            Ok(SaveResult::AlreadyExists)
        } else {
            Ok(SaveResult::Inserted)
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Admin>, DomainError> {
        let row: Option<AdminRow> = sqlx::query_as(
            "SELECT id, email, password_hash, created_at, updated_at FROM admins WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to find admin by email: {}", e)))?;

        Ok(row.map(Admin::from))
    }
}
