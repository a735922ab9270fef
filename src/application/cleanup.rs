//! Periodic cleanup of expired verification codes and aged webhook events.
//!
//! The only background work in the service. Each pass is idempotent and
//! safe to run concurrently with live traffic; a failed pass logs and
//! waits for the next tick.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::foundation::Timestamp;
use crate::ports::{VerificationRepository, WebhookEventRepository};

/// How long processed webhook event ids are retained before pruning.
const WEBHOOK_EVENT_RETENTION_DAYS: i64 = 30;

pub struct CleanupTask {
    verifications: Arc<dyn VerificationRepository>,
    webhook_events: Arc<dyn WebhookEventRepository>,
    interval: Duration,
}

impl CleanupTask {
    pub fn new(
        verifications: Arc<dyn VerificationRepository>,
        webhook_events: Arc<dyn WebhookEventRepository>,
        interval: Duration,
    ) -> Self {
        Self {
            verifications,
            webhook_events,
            interval,
        }
    }

    /// Runs forever on the configured interval; spawn onto the runtime.
    pub async fn run(self) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        loop {
            ticker.tick().await;
            self.run_once().await;
        }
    }

    /// One cleanup pass.
    pub async fn run_once(&self) {
        let now = Timestamp::now();

        match self.verifications.delete_expired_before(now).await {
            Ok(0) => {}
            Ok(deleted) => tracing::info!(deleted, "pruned expired verification codes"),
            Err(e) => tracing::error!(error = %e, "verification cleanup failed"),
        }

        let cutoff = now.minus_days(WEBHOOK_EVENT_RETENTION_DAYS);
        match self.webhook_events.delete_before(cutoff).await {
            Ok(0) => {}
            Ok(deleted) => tracing::info!(deleted, "pruned aged webhook events"),
            Err(e) => tracing::error!(error = %e, "webhook event cleanup failed"),
        }
    }
}
