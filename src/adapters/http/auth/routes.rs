//! Router for the registration endpoints.

use axum::routing::post;
use axum::Router;

use super::handlers::{send_verification_code, verify_code};
use crate::adapters::http::state::AppState;

/// Routes mounted at `/api/auth`.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/send-verification-code", post(send_verification_code))
        .route("/verify-code", post(verify_code))
}
