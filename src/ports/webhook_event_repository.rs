//! WebhookEventRepository port - idempotency log for Stripe webhooks.
//!
//! Stripe may deliver the same webhook multiple times: network timeouts,
//! a 5xx from our endpoint, or a success ack that never reached Stripe.
//! The existence of a row for an event id is the sole idempotency guard,
//! and the insert-if-absent on the unique event id is the concurrency
//! gate - the service may run multiple instances, so an in-process lock
//! would not be enough.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, Timestamp};

/// Record of a processed webhook event. Write-once.
#[derive(Debug, Clone)]
pub struct WebhookEventRecord {
    /// Stripe event id (`evt_...`), unique.
    pub event_id: String,
    /// Event type, kept for operator auditing.
    pub event_type: String,
    pub processed_at: Timestamp,
}

impl WebhookEventRecord {
    pub fn new(event_id: impl Into<String>, event_type: impl Into<String>) -> Self {
        Self {
            event_id: event_id.into(),
            event_type: event_type.into(),
            processed_at: Timestamp::now(),
        }
    }
}

/// Result of attempting to record a webhook event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveResult {
    /// First time seeing this event; the caller owns processing it.
    Inserted,
    /// Duplicate delivery; another call already recorded it.
    AlreadyExists,
}

/// Port for the webhook event log.
///
/// Implementations must enforce uniqueness of `event_id` at the storage
/// level (`ON CONFLICT DO NOTHING` semantics) so that two simultaneous
/// deliveries of the same event resolve to exactly one `Inserted`.
#[async_trait]
pub trait WebhookEventRepository: Send + Sync {
    /// Records the event if its id has not been seen before.
    async fn insert_if_absent(&self, record: WebhookEventRecord)
        -> Result<SaveResult, DomainError>;

    /// Deletes records processed before the given timestamp.
    ///
    /// Retention is 30 days; pruning sooner is safe as long as it stays
    /// behind the gateway's own retry window.
    async fn delete_before(&self, cutoff: Timestamp) -> Result<u64, DomainError>;
}
