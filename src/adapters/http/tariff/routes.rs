//! Routers for tariff and file endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{
    create_tariff, delete_file, delete_tariff, download_file, get_tariff, list_files,
    list_tariffs, update_tariff, upload_file,
};
use crate::adapters::http::state::AppState;

/// Routes mounted at `/api/tariffs`.
pub fn tariff_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_tariffs).post(create_tariff))
        .route(
            "/:id",
            get(get_tariff).put(update_tariff).delete(delete_tariff),
        )
        .route("/:id/files", get(list_files).post(upload_file))
}

/// Routes mounted at `/api/files`.
pub fn file_routes() -> Router<AppState> {
    Router::new().route("/:id", get(download_file).delete(delete_file))
}
