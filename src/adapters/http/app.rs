//! Top-level router assembly.

use std::time::Duration;

use axum::http::{HeaderValue, Method};
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::admin::admin_routes;
use super::auth::auth_routes;
use super::calculator::calculator_routes;
use super::payment::payment_routes;
use super::state::AppState;
use super::tariff::{file_routes, tariff_routes};
use super::user::user_routes;

/// GET /health
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers(Any);

    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| o.parse::<HeaderValue>().ok())
        .collect();
    layer.allow_origin(parsed)
}

/// Builds the full application router with middleware layers applied.
pub fn app_router(state: AppState) -> Router {
    let origins = state.config.server.cors_origins_list();
    let timeout = Duration::from_secs(state.config.server.request_timeout_secs);

    Router::new()
        .route("/health", get(health))
        .nest("/api/auth", auth_routes())
        .nest("/api/admin", admin_routes())
        .nest("/api/users", user_routes())
        .nest("/api/tariffs", tariff_routes())
        .nest("/api/files", file_routes())
        .nest("/api/payment", payment_routes())
        .nest("/api/calculator", calculator_routes())
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(timeout))
        .layer(cors_layer(&origins))
        .with_state(state)
}
