//! Router for the calculator endpoint.

use axum::routing::post;
use axum::Router;

use super::handlers::calculate;
use crate::adapters::http::state::AppState;

/// Routes mounted at `/api/calculator`.
pub fn calculator_routes() -> Router<AppState> {
    Router::new().route("/calculate", post(calculate))
}
