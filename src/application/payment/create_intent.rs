//! CreateIntentHandler - creates a Stripe PaymentIntent for a tariff purchase.

use std::sync::Arc;

use crate::domain::foundation::{PaymentId, TariffId};
use crate::domain::payment::{PaymentError, PaymentMetadata, PaymentRecord};
use crate::ports::{
    CreateIntentRequest, PaymentGateway, PaymentRepository, TariffRepository, UserRepository,
};

/// Command to start a payment for a tariff.
#[derive(Debug, Clone)]
pub struct CreateIntentCommand {
    pub email: String,
    pub tariff_id: TariffId,
}

/// Result handed back to the client for confirmation on its side.
#[derive(Debug, Clone)]
pub struct CreateIntentResult {
    pub payment_id: PaymentId,
    pub client_secret: String,
    pub amount: i64,
    pub currency: String,
}

/// Handler for creating payment intents.
///
/// No transaction spans the gateway call and the local write: a gateway
/// success followed by a local insert failure leaves an intent without a
/// record, which the webhook path then ignores.
pub struct CreateIntentHandler {
    users: Arc<dyn UserRepository>,
    tariffs: Arc<dyn TariffRepository>,
    payments: Arc<dyn PaymentRepository>,
    gateway: Arc<dyn PaymentGateway>,
    currency: String,
}

impl CreateIntentHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        tariffs: Arc<dyn TariffRepository>,
        payments: Arc<dyn PaymentRepository>,
        gateway: Arc<dyn PaymentGateway>,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            users,
            tariffs,
            payments,
            gateway,
            currency: currency.into(),
        }
    }

    pub async fn handle(
        &self,
        cmd: CreateIntentCommand,
    ) -> Result<CreateIntentResult, PaymentError> {
        let user = self
            .users
            .find_by_email(&cmd.email)
            .await?
            .filter(|u| u.is_verified)
            .ok_or_else(|| PaymentError::not_verified(&cmd.email))?;

        let tariff = self
            .tariffs
            .find_by_id(&cmd.tariff_id)
            .await?
            .ok_or(PaymentError::TariffNotFound(cmd.tariff_id))?;

        // Snapshot frozen at creation time; the webhook path never re-reads
        // the user or tariff for notification content.
        let metadata = PaymentMetadata {
            email: user.email.clone(),
            tariff_id: tariff.id.to_string(),
            tariff_name: tariff.name.clone(),
            user_name: user.name.clone(),
        };

        let intent = self
            .gateway
            .create_payment_intent(CreateIntentRequest {
                amount: tariff.base_price,
                currency: self.currency.clone(),
                metadata: metadata.clone(),
            })
            .await
            .map_err(|e| PaymentError::gateway(e.to_string()))?;

        let record = PaymentRecord::create(
            intent.id,
            user.id,
            tariff.id,
            tariff.base_price,
            self.currency.clone(),
            metadata,
        );
        self.payments.insert(&record).await?;

        tracing::info!(
            payment_id = %record.id,
            intent_id = %record.stripe_payment_intent_id,
            amount = record.amount,
            "payment intent created"
        );

        Ok(CreateIntentResult {
            payment_id: record.id,
            client_secret: intent.client_secret,
            amount: record.amount,
            currency: record.currency,
        })
    }
}
