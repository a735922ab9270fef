//! Payment status lifecycle.
//!
//! Mirrors the Stripe PaymentIntent status machine. Transitions are driven
//! only by webhook event types; no other writer is permitted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a payment attempt.
///
/// `Succeeded`, `Canceled`, and `Failed` are terminal: no further
/// transition is expected, though an out-of-order webhook may still
/// overwrite them (last-writer-wins, a deliberate trade-off).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Awaiting client confirmation. Initial state.
    RequiresPaymentMethod,
    /// Needs an additional client step such as strong authentication.
    RequiresAction,
    /// Gateway is processing an asynchronous payment method.
    Processing,
    /// Authorized, awaiting capture.
    RequiresCapture,
    /// Payment complete.
    Succeeded,
    /// Payment canceled.
    Canceled,
    /// Payment failed.
    Failed,
}

impl PaymentStatus {
    /// Maps a Stripe webhook event type to the status it reports.
    ///
    /// Returns `None` for event types outside the PaymentIntent lifecycle;
    /// those are acknowledged and ignored (forward-compatible with gateway
    /// additions).
    pub fn from_event_type(event_type: &str) -> Option<Self> {
        match event_type {
            "payment_intent.created" => Some(Self::RequiresPaymentMethod),
            "payment_intent.requires_action" => Some(Self::RequiresAction),
            "payment_intent.processing" => Some(Self::Processing),
            "payment_intent.amount_capturable_updated" => Some(Self::RequiresCapture),
            "payment_intent.succeeded" => Some(Self::Succeeded),
            "payment_intent.canceled" => Some(Self::Canceled),
            "payment_intent.payment_failed" => Some(Self::Failed),
            _ => None,
        }
    }

    /// Parses a stored status string.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "requires_payment_method" => Some(Self::RequiresPaymentMethod),
            "requires_action" => Some(Self::RequiresAction),
            "processing" => Some(Self::Processing),
            "requires_capture" => Some(Self::RequiresCapture),
            "succeeded" => Some(Self::Succeeded),
            "canceled" => Some(Self::Canceled),
            "failed" => Some(Self::Failed),
            _ => None,
        }
    }

    /// Wire/database representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RequiresPaymentMethod => "requires_payment_method",
            Self::RequiresAction => "requires_action",
            Self::Processing => "processing",
            Self::RequiresCapture => "requires_capture",
            Self::Succeeded => "succeeded",
            Self::Canceled => "canceled",
            Self::Failed => "failed",
        }
    }

    /// True for states from which no further transition is expected.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Canceled | Self::Failed)
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_types_map_to_statuses() {
        assert_eq!(
            PaymentStatus::from_event_type("payment_intent.succeeded"),
            Some(PaymentStatus::Succeeded)
        );
        assert_eq!(
            PaymentStatus::from_event_type("payment_intent.payment_failed"),
            Some(PaymentStatus::Failed)
        );
        assert_eq!(
            PaymentStatus::from_event_type("payment_intent.amount_capturable_updated"),
            Some(PaymentStatus::RequiresCapture)
        );
    }

    #[test]
    fn unknown_event_type_maps_to_none() {
        assert_eq!(PaymentStatus::from_event_type("charge.refunded"), None);
        assert_eq!(PaymentStatus::from_event_type(""), None);
    }

    #[test]
    fn terminal_states() {
        assert!(PaymentStatus::Succeeded.is_terminal());
        assert!(PaymentStatus::Canceled.is_terminal());
        assert!(PaymentStatus::Failed.is_terminal());
        assert!(!PaymentStatus::Processing.is_terminal());
        assert!(!PaymentStatus::RequiresPaymentMethod.is_terminal());
    }

    #[test]
    fn as_str_round_trips_through_parse() {
        for status in [
            PaymentStatus::RequiresPaymentMethod,
            PaymentStatus::RequiresAction,
            PaymentStatus::Processing,
            PaymentStatus::RequiresCapture,
            PaymentStatus::Succeeded,
            PaymentStatus::Canceled,
            PaymentStatus::Failed,
        ] {
            assert_eq!(PaymentStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&PaymentStatus::RequiresPaymentMethod).unwrap();
        assert_eq!(json, "\"requires_payment_method\"");
    }
}
