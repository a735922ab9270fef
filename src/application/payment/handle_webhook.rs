//! HandleWebhookHandler - signed Stripe event ingestion.
//!
//! Ordering is load-bearing: verify, then durably record the event id,
//! then apply the transition. The insert-if-absent on the event id is the
//! only idempotency and concurrency gate; a duplicate delivery (or the
//! loser of a concurrent race) acks without touching the payment.

use std::sync::Arc;

use crate::domain::payment::{
    PaymentRecord, PaymentStatus, StripeWebhookVerifier, WebhookError,
};
use crate::ports::{
    EmailAttachment, FileStorage, Mailer, PaymentRepository, SaveResult, TariffFileRepository,
    WebhookEventRecord, WebhookEventRepository,
};

/// Raw webhook delivery as received over HTTP.
#[derive(Debug, Clone)]
pub struct HandleWebhookCommand {
    pub payload: Vec<u8>,
    pub signature_header: String,
}

/// Outcome of processing one delivery. All variants ack 200 upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandleWebhookResult {
    /// A status transition was applied.
    Processed {
        payment_intent_id: String,
        status: PaymentStatus,
    },
    /// The event id was already recorded; nothing was done.
    Duplicate,
    /// Recorded but not actionable (unknown type or unknown intent).
    Ignored,
}

pub struct HandleWebhookHandler {
    verifier: StripeWebhookVerifier,
    events: Arc<dyn WebhookEventRepository>,
    payments: Arc<dyn PaymentRepository>,
    tariff_files: Arc<dyn TariffFileRepository>,
    storage: Arc<dyn FileStorage>,
    mailer: Arc<dyn Mailer>,
}

impl HandleWebhookHandler {
    pub fn new(
        verifier: StripeWebhookVerifier,
        events: Arc<dyn WebhookEventRepository>,
        payments: Arc<dyn PaymentRepository>,
        tariff_files: Arc<dyn TariffFileRepository>,
        storage: Arc<dyn FileStorage>,
        mailer: Arc<dyn Mailer>,
    ) -> Self {
        Self {
            verifier,
            events,
            payments,
            tariff_files,
            storage,
            mailer,
        }
    }

    pub async fn handle(
        &self,
        cmd: HandleWebhookCommand,
    ) -> Result<HandleWebhookResult, WebhookError> {
        // Invalid signatures leave no trace: nothing recorded, nothing mutated.
        let event = self
            .verifier
            .verify_and_parse(&cmd.payload, &cmd.signature_header)?;

        match self
            .events
            .insert_if_absent(WebhookEventRecord::new(&event.id, &event.event_type))
            .await?
        {
            SaveResult::Inserted => {}
            SaveResult::AlreadyExists => {
                // This also swallows Stripe's redelivery after a 500 from
                // a failed `payments.update` below: the event id is already
                // durable, so the lost transition needs manual
                // reconciliation against the gateway.
                tracing::debug!(event_id = %event.id, "duplicate webhook event, acking");
                return Ok(HandleWebhookResult::Duplicate);
            }
        }

        let Some(status) = PaymentStatus::from_event_type(&event.event_type) else {
            tracing::debug!(
                event_id = %event.id,
                event_type = %event.event_type,
                "unhandled event type, acking"
            );
            return Ok(HandleWebhookResult::Ignored);
        };

        let Some(intent_id) = event.payment_intent_id() else {
            tracing::warn!(event_id = %event.id, "payment event without an intent id");
            return Ok(HandleWebhookResult::Ignored);
        };

        let Some(mut payment) = self.payments.find_by_intent_id(intent_id).await? else {
            // Intent created elsewhere (or the local insert after the
            // gateway call failed); nothing to update.
            tracing::warn!(event_id = %event.id, intent_id, "no payment record for intent");
            return Ok(HandleWebhookResult::Ignored);
        };

        // Last-writer-wins: the gateway owns the status, so out-of-order
        // deliveries overwrite even terminal states.
        let previous = payment.apply_status(status);
        self.payments.update(&payment).await?;

        tracing::info!(
            event_id = %event.id,
            payment_id = %payment.id,
            from = %previous,
            to = %status,
            "payment status transition"
        );

        if status.is_terminal() {
            // Uniqueness of the event id above guarantees at most one
            // notification per event; failures here never reach Stripe.
            if let Err(e) = self.notify(&payment, status).await {
                tracing::error!(
                    payment_id = %payment.id,
                    error = %e,
                    "payment notification failed"
                );
            }
        }

        Ok(HandleWebhookResult::Processed {
            payment_intent_id: intent_id.to_string(),
            status,
        })
    }

    async fn notify(&self, payment: &PaymentRecord, status: PaymentStatus) -> Result<(), String> {
        let meta = &payment.metadata;
        match status {
            PaymentStatus::Succeeded => {
                let attachments = self.load_attachments(payment).await;
                self.mailer
                    .send_payment_success(
                        &meta.email,
                        &meta.user_name,
                        &meta.tariff_name,
                        payment.amount,
                        &payment.currency,
                        attachments,
                    )
                    .await
                    .map_err(|e| e.to_string())
            }
            PaymentStatus::Canceled | PaymentStatus::Failed => self
                .mailer
                .send_payment_failure(
                    &meta.email,
                    &meta.user_name,
                    &meta.tariff_name,
                    status.as_str(),
                )
                .await
                .map_err(|e| e.to_string()),
            _ => Ok(()),
        }
    }

    /// Loads every PDF attached to the purchased tariff. A file missing on
    /// disk is logged and skipped; the notification still goes out.
    async fn load_attachments(&self, payment: &PaymentRecord) -> Vec<EmailAttachment> {
        let Some(tariff_id) = payment.tariff_id else {
            return Vec::new();
        };

        let files = match self.tariff_files.list_by_tariff(&tariff_id).await {
            Ok(files) => files,
            Err(e) => {
                tracing::warn!(tariff_id = %tariff_id, error = %e, "could not list tariff files");
                return Vec::new();
            }
        };

        let mut attachments = Vec::with_capacity(files.len());
        for file in files {
            match self.storage.read(&file.file_path).await {
                Ok(content) => attachments.push(EmailAttachment {
                    filename: file.filename,
                    content,
                }),
                Err(e) => {
                    tracing::warn!(file_id = %file.id, error = %e, "skipping unreadable attachment");
                }
            }
        }
        attachments
    }
}
