//! Handlers for user management endpoints.
//!
//! Every route requires the [`AdminAuth`] extractor; users never manage
//! their own accounts over this surface.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use uuid::Uuid;

use super::dto::{UpdateUserRequest, UserListResponse, UserResponse};
use crate::adapters::http::middleware::AdminAuth;
use crate::adapters::http::response::ErrorResponse;
use crate::adapters::http::state::AppState;
use crate::application::user::UpdateUserCommand;
use crate::domain::foundation::UserId;
use crate::domain::user::UserError;

/// GET /api/users (admin)
pub async fn list_users(
    State(state): State<AppState>,
    _admin: AdminAuth,
) -> Result<impl IntoResponse, UserApiError> {
    let users = state.list_users_handler().handle().await?;
    Ok(Json(UserListResponse {
        users: users.into_iter().map(UserResponse::from).collect(),
    }))
}

/// GET /api/users/:id (admin)
pub async fn get_user(
    State(state): State<AppState>,
    _admin: AdminAuth,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, UserApiError> {
    let user = state
        .get_user_handler()
        .by_id(UserId::from_uuid(id))
        .await?;
    Ok(Json(UserResponse::from(user)))
}

/// GET /api/users/email/:email (admin)
pub async fn get_user_by_email(
    State(state): State<AppState>,
    _admin: AdminAuth,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, UserApiError> {
    let user = state.get_user_handler().by_email(&email).await?;
    Ok(Json(UserResponse::from(user)))
}

/// PATCH /api/users/:id (admin)
pub async fn update_user(
    State(state): State<AppState>,
    _admin: AdminAuth,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<impl IntoResponse, UserApiError> {
    let user = state
        .update_user_handler()
        .handle(UpdateUserCommand {
            user_id: UserId::from_uuid(id),
            update: request.into(),
        })
        .await?;
    Ok(Json(UserResponse::from(user)))
}

/// DELETE /api/users/:id (admin)
pub async fn delete_user(
    State(state): State<AppState>,
    _admin: AdminAuth,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, UserApiError> {
    state
        .delete_user_handler()
        .handle(UserId::from_uuid(id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Maps user management errors onto HTTP responses.
pub struct UserApiError(UserError);

impl From<UserError> for UserApiError {
    fn from(err: UserError) -> Self {
        Self(err)
    }
}

impl IntoResponse for UserApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self.0 {
            UserError::NotFound(_) | UserError::EmailNotFound { .. } => {
                (StatusCode::NOT_FOUND, "USER_NOT_FOUND")
            }
            UserError::EmailTaken { .. } => (StatusCode::CONFLICT, "EMAIL_TAKEN"),
            UserError::Infrastructure(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = ErrorResponse::new(code, self.0.to_string());
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_user_maps_to_404() {
        let response = UserApiError(UserError::NotFound(UserId::new())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn missing_email_maps_to_404() {
        let response = UserApiError(UserError::EmailNotFound {
            email: "nobody@example.com".to_string(),
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn taken_email_maps_to_409() {
        let response = UserApiError(UserError::email_taken("anna@example.com")).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
