//! Router for admin authentication.

use axum::routing::post;
use axum::Router;

use super::handlers::login;
use crate::adapters::http::state::AppState;

/// Routes mounted at `/api/admin`.
pub fn admin_routes() -> Router<AppState> {
    Router::new().route("/login", post(login))
}
