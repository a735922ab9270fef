//! Router for payment endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{create_payment_intent, get_payment_status, handle_webhook};
use crate::adapters::http::state::AppState;

/// Routes mounted at `/api/payment`.
pub fn payment_routes() -> Router<AppState> {
    Router::new()
        .route("/stripe/payment-intent", post(create_payment_intent))
        .route("/stripe/webhook", post(handle_webhook))
        .route("/stripe/payment/:id/status", get(get_payment_status))
}
