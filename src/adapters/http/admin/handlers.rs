//! Handlers for admin authentication.

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::dto::{LoginRequest, LoginResponse};
use crate::adapters::http::response::ErrorResponse;
use crate::adapters::http::state::AppState;
use crate::application::admin::LoginCommand;
use crate::domain::admin::AdminError;

/// POST /api/admin/login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, AdminApiError> {
    let handler = state.login_handler();
    let result = handler
        .handle(LoginCommand {
            email: request.email,
            password: request.password,
        })
        .await?;

    Ok(Json(LoginResponse::from(result)))
}

/// Maps admin errors onto HTTP responses.
pub struct AdminApiError(AdminError);

impl From<AdminError> for AdminApiError {
    fn from(err: AdminError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AdminApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self.0 {
            AdminError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "INVALID_CREDENTIALS"),
            AdminError::InvalidToken => (StatusCode::UNAUTHORIZED, "INVALID_TOKEN"),
            AdminError::AlreadyExists { .. } => (StatusCode::CONFLICT, "ADMIN_EXISTS"),
            AdminError::Infrastructure(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = ErrorResponse::new(code, self.0.to_string());
        (status, Json(body)).into_response()
    }
}
