//! PostgreSQL implementation of VerificationRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, Timestamp, VerificationId};
use crate::domain::verification::VerificationRecord;
use crate::ports::VerificationRepository;

pub struct PostgresVerificationRepository {
    pool: PgPool,
}

impl PostgresVerificationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct VerificationRow {
    id: Uuid,
    email: String,
    name: String,
    surname: String,
    code: String,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
    verified_at: Option<DateTime<Utc>>,
    attempts: i32,
}

impl From<VerificationRow> for VerificationRecord {
    fn from(row: VerificationRow) -> Self {
        VerificationRecord {
            id: VerificationId::from_uuid(row.id),
            email: row.email,
            name: row.name,
            surname: row.surname,
            code: row.code,
            created_at: Timestamp::from_datetime(row.created_at),
            expires_at: Timestamp::from_datetime(row.expires_at),
            verified_at: row.verified_at.map(Timestamp::from_datetime),
            attempts: row.attempts.max(0) as u32,
        }
    }
}

const VERIFICATION_COLUMNS: &str =
    "id, email, name, surname, code, created_at, expires_at, verified_at, attempts";

#[async_trait]
impl VerificationRepository for PostgresVerificationRepository {
    async fn insert(&self, record: &VerificationRecord) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO email_verifications (
                id, email, name, surname, code, created_at, expires_at, verified_at, attempts
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(record.id.as_uuid())
        .bind(&record.email)
        .bind(&record.name)
        .bind(&record.surname)
        .bind(&record.code)
        .bind(record.created_at.as_datetime())
        .bind(record.expires_at.as_datetime())
        .bind(record.verified_at.map(|t| *t.as_datetime()))
        .bind(record.attempts as i32)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert verification: {}", e)))?;

        Ok(())
    }

    async fn find_latest_by_email(
        &self,
        email: &str,
    ) -> Result<Option<VerificationRecord>, DomainError> {
        let row: Option<VerificationRow> = sqlx::query_as(&format!(
            "SELECT {} FROM email_verifications WHERE email = $1 \
             ORDER BY created_at DESC LIMIT 1",
            VERIFICATION_COLUMNS
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to find verification: {}", e)))?;

        Ok(row.map(VerificationRecord::from))
    }

    async fn find_latest_unverified_by_email(
        &self,
        email: &str,
    ) -> Result<Option<VerificationRecord>, DomainError> {
        let row: Option<VerificationRow> = sqlx::query_as(&format!(
            "SELECT {} FROM email_verifications WHERE email = $1 AND verified_at IS NULL \
             ORDER BY created_at DESC LIMIT 1",
            VERIFICATION_COLUMNS
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to find verification: {}", e)))?;

        Ok(row.map(VerificationRecord::from))
    }

    async fn update(&self, record: &VerificationRecord) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            UPDATE email_verifications SET verified_at = $2, attempts = $3
            WHERE id = $1
            "#,
        )
        .bind(record.id.as_uuid())
        .bind(record.verified_at.map(|t| *t.as_datetime()))
        .bind(record.attempts as i32)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to update verification: {}", e)))?;

        Ok(())
    }

    async fn delete_expired_before(&self, cutoff: Timestamp) -> Result<u64, DomainError> {
        let result = sqlx::query(
            "DELETE FROM email_verifications WHERE verified_at IS NULL AND expires_at < $1",
        )
        .bind(cutoff.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to prune verifications: {}", e)))?;

        Ok(result.rows_affected())
    }
}
