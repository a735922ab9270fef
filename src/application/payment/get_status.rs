//! GetStatusHandler - the polling read the client races against the webhook.

use std::sync::Arc;

use crate::domain::foundation::{PaymentId, Timestamp};
use crate::domain::payment::{PaymentError, PaymentStatus};
use crate::ports::PaymentRepository;

#[derive(Debug, Clone)]
pub struct GetStatusQuery {
    pub payment_id: PaymentId,
}

#[derive(Debug, Clone)]
pub struct GetStatusResult {
    pub payment_id: PaymentId,
    pub status: PaymentStatus,
    pub amount: i64,
    pub currency: String,
    pub created_at: Timestamp,
}

/// Pure read; whatever status the last webhook wrote is what the client sees.
pub struct GetStatusHandler {
    payments: Arc<dyn PaymentRepository>,
}

impl GetStatusHandler {
    pub fn new(payments: Arc<dyn PaymentRepository>) -> Self {
        Self { payments }
    }

    pub async fn handle(&self, query: GetStatusQuery) -> Result<GetStatusResult, PaymentError> {
        let payment = self
            .payments
            .find_by_id(&query.payment_id)
            .await?
            .ok_or(PaymentError::NotFound(query.payment_id))?;

        Ok(GetStatusResult {
            payment_id: payment.id,
            status: payment.status,
            amount: payment.amount,
            currency: payment.currency,
            created_at: payment.created_at,
        })
    }
}
