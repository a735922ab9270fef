//! PaymentRepository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, PaymentId};
use crate::domain::payment::PaymentRecord;

/// Port for payment persistence.
///
/// One row per payment attempt. Rows are inserted once at intent-creation
/// time and mutated only by webhook-driven transitions.
#[async_trait]
pub trait PaymentRepository: Send + Sync {
    async fn insert(&self, payment: &PaymentRecord) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &PaymentId) -> Result<Option<PaymentRecord>, DomainError>;

    /// Looks up by the Stripe PaymentIntent id carried in webhook events.
    async fn find_by_intent_id(
        &self,
        stripe_payment_intent_id: &str,
    ) -> Result<Option<PaymentRecord>, DomainError>;

    /// Persists the current status and `updated_at` of the record.
    async fn update(&self, payment: &PaymentRecord) -> Result<(), DomainError>;
}
