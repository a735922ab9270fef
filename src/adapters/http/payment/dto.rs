//! JSON shapes for payment endpoints.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::payment::{CreateIntentResult, GetStatusResult};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateIntentRequest {
    pub email: String,
    pub tariff_id: Uuid,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateIntentResponse {
    pub payment_id: String,
    /// Handed to the Stripe client SDK for confirmation in the browser.
    pub client_secret: String,
    pub amount: i64,
    pub currency: String,
}

impl From<CreateIntentResult> for CreateIntentResponse {
    fn from(result: CreateIntentResult) -> Self {
        Self {
            payment_id: result.payment_id.to_string(),
            client_secret: result.client_secret,
            amount: result.amount,
            currency: result.currency,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PaymentStatusResponse {
    pub payment_id: String,
    pub status: String,
    pub amount: i64,
    pub currency: String,
    pub created_at: String,
}

impl From<GetStatusResult> for PaymentStatusResponse {
    fn from(result: GetStatusResult) -> Self {
        Self {
            payment_id: result.payment_id.to_string(),
            status: result.status.as_str().to_string(),
            amount: result.amount,
            currency: result.currency,
            created_at: result.created_at.as_datetime().to_rfc3339(),
        }
    }
}

/// Acknowledgement body returned to Stripe for every accepted delivery.
#[derive(Debug, Clone, Serialize)]
pub struct WebhookAck {
    pub received: bool,
}
