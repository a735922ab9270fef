//! PaymentRecord aggregate - one row per payment attempt.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{PaymentId, TariffId, Timestamp, UserId};
use crate::domain::payment::PaymentStatus;

/// Snapshot of purchase context captured at intent-creation time.
///
/// Frozen so that downstream notification does not depend on the tariff or
/// user still existing unchanged when the webhook arrives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMetadata {
    pub email: String,
    pub tariff_id: String,
    pub tariff_name: String,
    pub user_name: String,
}

/// A single payment attempt against the external gateway.
///
/// Created once at intent-creation time in `RequiresPaymentMethod`, then
/// mutated only by webhook-driven transitions.
#[derive(Debug, Clone)]
pub struct PaymentRecord {
    pub id: PaymentId,
    /// Stripe PaymentIntent id (`pi_...`), unique.
    pub stripe_payment_intent_id: String,
    pub user_id: UserId,
    /// Nullable: the tariff may be deleted after purchase.
    pub tariff_id: Option<TariffId>,
    /// Amount in minor currency units.
    pub amount: i64,
    /// ISO 4217 currency code, lowercase.
    pub currency: String,
    pub status: PaymentStatus,
    pub metadata: PaymentMetadata,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl PaymentRecord {
    /// Creates a new record in the initial status.
    pub fn create(
        stripe_payment_intent_id: impl Into<String>,
        user_id: UserId,
        tariff_id: TariffId,
        amount: i64,
        currency: impl Into<String>,
        metadata: PaymentMetadata,
    ) -> Self {
        let now = Timestamp::now();
        Self {
            id: PaymentId::new(),
            stripe_payment_intent_id: stripe_payment_intent_id.into(),
            user_id,
            tariff_id: Some(tariff_id),
            amount,
            currency: currency.into(),
            status: PaymentStatus::RequiresPaymentMethod,
            metadata,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies a webhook-reported status, last-writer-wins.
    ///
    /// No legality check against the current status: the gateway is the
    /// source of truth, and rejecting an out-of-order webhook risks
    /// permanently desynchronizing status. Returns the previous status.
    pub fn apply_status(&mut self, status: PaymentStatus) -> PaymentStatus {
        let previous = self.status;
        self.status = status;
        self.updated_at = Timestamp::now();
        previous
    }
}
