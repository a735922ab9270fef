//! PaymentGateway port - the external gateway's PaymentIntent surface.
//!
//! The gateway's own intent lifecycle is an opaque external state machine
//! reported back via webhook; this port only covers creating intents.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::payment::PaymentMetadata;

/// Request to create a payment intent.
#[derive(Debug, Clone)]
pub struct CreateIntentRequest {
    /// Amount in minor currency units.
    pub amount: i64,
    /// ISO 4217 currency code, lowercase.
    pub currency: String,
    /// Purchase context attached to the intent so downstream notification
    /// does not depend on tariffs/users still existing unchanged.
    pub metadata: PaymentMetadata,
}

/// The gateway's view of a freshly created intent.
#[derive(Debug, Clone)]
pub struct PaymentIntent {
    /// Gateway intent id (`pi_...`).
    pub id: String,
    /// Client-side confirmation secret handed to the browser.
    pub client_secret: String,
}

/// Transport or API error from the gateway. Not retried locally.
#[derive(Debug, Clone, Error)]
#[error("gateway error: {message}")]
pub struct GatewayError {
    pub message: String,
}

impl GatewayError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Port for the external payment gateway.
///
/// Implementations are constructed once at startup and shared by
/// reference across requests.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn create_payment_intent(
        &self,
        request: CreateIntentRequest,
    ) -> Result<PaymentIntent, GatewayError>;
}
