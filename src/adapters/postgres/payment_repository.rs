//! PostgreSQL implementation of PaymentRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, PaymentId, TariffId, Timestamp, UserId};
use crate::domain::payment::{PaymentMetadata, PaymentRecord, PaymentStatus};
use crate::ports::PaymentRepository;

pub struct PostgresPaymentRepository {
    pool: PgPool,
}

impl PostgresPaymentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct PaymentRow {
    id: Uuid,
    stripe_payment_intent_id: String,
    user_id: Uuid,
    tariff_id: Option<Uuid>,
    amount: i64,
    currency: String,
    status: String,
    metadata: serde_json::Value,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PaymentRow> for PaymentRecord {
    type Error = DomainError;

    fn try_from(row: PaymentRow) -> Result<Self, Self::Error> {
        let status = PaymentStatus::parse(&row.status)
            .ok_or_else(|| DomainError::database(format!("Invalid status value: {}", row.status)))?;
        let metadata: PaymentMetadata = serde_json::from_value(row.metadata)
            .map_err(|e| DomainError::database(format!("Invalid payment metadata: {}", e)))?;

        Ok(PaymentRecord {
            id: PaymentId::from_uuid(row.id),
            stripe_payment_intent_id: row.stripe_payment_intent_id,
            user_id: UserId::from_uuid(row.user_id),
            tariff_id: row.tariff_id.map(TariffId::from_uuid),
            amount: row.amount,
            currency: row.currency,
            status,
            metadata,
            created_at: Timestamp::from_datetime(row.created_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
        })
    }
}

const PAYMENT_COLUMNS: &str = "id, stripe_payment_intent_id, user_id, tariff_id, amount, \
     currency, status, metadata, created_at, updated_at";

#[async_trait]
impl PaymentRepository for PostgresPaymentRepository {
    async fn insert(&self, payment: &PaymentRecord) -> Result<(), DomainError> {
        let metadata = serde_json::to_value(&payment.metadata)
            .map_err(|e| DomainError::database(format!("Failed to encode metadata: {}", e)))?;

        sqlx::query(
            r#"
            INSERT INTO payments (
                id, stripe_payment_intent_id, user_id, tariff_id, amount,
                currency, status, metadata, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(payment.id.as_uuid())
        .bind(&payment.stripe_payment_intent_id)
        .bind(payment.user_id.as_uuid())
        .bind(payment.tariff_id.map(|t| *t.as_uuid()))
        .bind(payment.amount)
        .bind(&payment.currency)
        .bind(payment.status.as_str())
        .bind(metadata)
        .bind(payment.created_at.as_datetime())
        .bind(payment.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert payment: {}", e)))?;

        Ok(())
    }

    async fn find_by_id(&self, id: &PaymentId) -> Result<Option<PaymentRecord>, DomainError> {
        let row: Option<PaymentRow> = sqlx::query_as(&format!(
            "SELECT {} FROM payments WHERE id = $1",
            PAYMENT_COLUMNS
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to find payment: {}", e)))?;

        row.map(PaymentRecord::try_from).transpose()
    }

    async fn find_by_intent_id(
        &self,
        intent_id: &str,
    ) -> Result<Option<PaymentRecord>, DomainError> {
        let row: Option<PaymentRow> = sqlx::query_as(&format!(
            "SELECT {} FROM payments WHERE stripe_payment_intent_id = $1",
            PAYMENT_COLUMNS
        ))
        .bind(intent_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to find payment by intent: {}", e)))?;

        row.map(PaymentRecord::try_from).transpose()
    }

    async fn update(&self, payment: &PaymentRecord) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            UPDATE payments SET status = $2, updated_at = $3
            WHERE id = $1
            "#,
        )
        .bind(payment.id.as_uuid())
        .bind(payment.status.as_str())
        .bind(payment.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to update payment: {}", e)))?;

        Ok(())
    }
}
