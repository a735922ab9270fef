//! Router for user management endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{delete_user, get_user, get_user_by_email, list_users, update_user};
use crate::adapters::http::state::AppState;

/// Routes mounted at `/api/users`.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users))
        .route("/:id", get(get_user).patch(update_user).delete(delete_user))
        .route("/email/:email", get(get_user_by_email))
}
