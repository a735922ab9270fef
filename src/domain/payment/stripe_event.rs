//! Parsed Stripe webhook event envelope.

use serde::{Deserialize, Serialize};

/// Envelope of a Stripe webhook event.
///
/// Only the fields the orchestrator needs are modeled; the event payload
/// itself stays as raw JSON under `data.object`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StripeEvent {
    /// Stripe event id (`evt_...`), unique per logical event.
    pub id: String,
    /// Event type, e.g. `payment_intent.succeeded`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Unix timestamp when Stripe created the event.
    pub created: i64,
    pub data: StripeEventData,
    #[serde(default)]
    pub livemode: bool,
}

/// The `data` section of a Stripe event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StripeEventData {
    /// The API object the event describes (a PaymentIntent for the events
    /// this service handles).
    pub object: serde_json::Value,
}

impl StripeEvent {
    /// The id of the PaymentIntent this event describes, if present.
    pub fn payment_intent_id(&self) -> Option<&str> {
        self.data.object.get("id").and_then(|v| v.as_str())
    }

    /// True if the event belongs to the PaymentIntent lifecycle.
    pub fn is_payment_intent_event(&self) -> bool {
        self.event_type.starts_with("payment_intent.")
    }
}
