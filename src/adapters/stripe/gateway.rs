//! Stripe payment gateway adapter.
//!
//! Creates PaymentIntents over the form-encoded Stripe REST API. Webhook
//! signature verification lives in the domain layer, not here; this
//! adapter only makes outbound calls.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::ports::{CreateIntentRequest, GatewayError, PaymentGateway, PaymentIntent};

/// Stripe API configuration.
#[derive(Clone)]
pub struct StripeConfig {
    /// Stripe secret API key (sk_live_... or sk_test_...).
    api_key: SecretString,

    /// Base URL for the Stripe API.
    api_base_url: String,
}

impl StripeConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into()),
            api_base_url: "https://api.stripe.com".to_string(),
        }
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}

/// Stripe's view of a PaymentIntent, reduced to the fields we read.
#[derive(Debug, Deserialize)]
struct StripePaymentIntent {
    id: String,
    client_secret: String,
}

/// Stripe implementation of the payment gateway port.
pub struct StripeGateway {
    config: StripeConfig,
    http_client: reqwest::Client,
}

impl StripeGateway {
    pub fn new(config: StripeConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    /// Builds the form-encoded parameters for a PaymentIntent creation.
    ///
    /// The metadata snapshot rides along so the webhook payload carries
    /// enough context to notify the buyer without local lookups.
    fn intent_params(request: &CreateIntentRequest) -> Vec<(&'static str, String)> {
        vec![
            ("amount", request.amount.to_string()),
            ("currency", request.currency.clone()),
            ("automatic_payment_methods[enabled]", "true".to_string()),
            ("metadata[email]", request.metadata.email.clone()),
            ("metadata[tariff_id]", request.metadata.tariff_id.clone()),
            (
                "metadata[tariff_name]",
                request.metadata.tariff_name.clone(),
            ),
            ("metadata[user_name]", request.metadata.user_name.clone()),
        ]
    }
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    async fn create_payment_intent(
        &self,
        request: CreateIntentRequest,
    ) -> Result<PaymentIntent, GatewayError> {
        let url = format!("{}/v1/payment_intents", self.config.api_base_url);
        let params = Self::intent_params(&request);

        let response = self
            .http_client
            .post(&url)
            .basic_auth(self.config.api_key.expose_secret(), Option::<&str>::None)
            .form(&params)
            .send()
            .await
            .map_err(|e| GatewayError::new(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!(%status, error = %error_text, "stripe payment_intents call failed");
            return Err(GatewayError::new(format!(
                "stripe returned {status}: {error_text}"
            )));
        }

        let intent: StripePaymentIntent = response
            .json()
            .await
            .map_err(|e| GatewayError::new(format!("unparseable stripe response: {e}")))?;

        tracing::info!(intent_id = %intent.id, amount = request.amount, "created payment intent");

        Ok(PaymentIntent {
            id: intent.id,
            client_secret: intent.client_secret,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payment::PaymentMetadata;

    fn request() -> CreateIntentRequest {
        CreateIntentRequest {
            amount: 2990,
            currency: "usd".to_string(),
            metadata: PaymentMetadata {
                email: "buyer@example.com".to_string(),
                tariff_id: "11111111-2222-3333-4444-555555555555".to_string(),
                tariff_name: "Balance".to_string(),
                user_name: "Dana".to_string(),
            },
        }
    }

    #[test]
    fn intent_params_carry_amount_and_metadata() {
        let params = StripeGateway::intent_params(&request());

        assert!(params.contains(&("amount", "2990".to_string())));
        assert!(params.contains(&("currency", "usd".to_string())));
        assert!(params.contains(&("metadata[email]", "buyer@example.com".to_string())));
        assert!(params.contains(&("metadata[tariff_name]", "Balance".to_string())));
    }

    #[test]
    fn config_base_url_is_overridable() {
        let config = StripeConfig::new("sk_test_abc").with_base_url("http://localhost:12111");
        assert_eq!(config.api_base_url, "http://localhost:12111");
    }

    #[test]
    fn payment_intent_response_parses() {
        let json = r#"{
            "id": "pi_3ABC",
            "object": "payment_intent",
            "client_secret": "pi_3ABC_secret_xyz",
            "status": "requires_payment_method"
        }"#;
        let intent: StripePaymentIntent = serde_json::from_str(json).unwrap();
        assert_eq!(intent.id, "pi_3ABC");
        assert_eq!(intent.client_secret, "pi_3ABC_secret_xyz");
    }
}
