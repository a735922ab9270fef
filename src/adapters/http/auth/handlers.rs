//! Handlers for the registration endpoints.

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::dto::{SendCodeRequest, SendCodeResponse, VerifyCodeRequest, VerifyCodeResponse};
use crate::adapters::http::response::ErrorResponse;
use crate::adapters::http::state::AppState;
use crate::application::verification::{SendCodeCommand, VerifyCodeCommand};
use crate::domain::verification::VerificationError;

/// POST /api/auth/send-verification-code
pub async fn send_verification_code(
    State(state): State<AppState>,
    Json(request): Json<SendCodeRequest>,
) -> Result<impl IntoResponse, AuthApiError> {
    let handler = state.send_code_handler();
    let result = handler
        .handle(SendCodeCommand {
            name: request.name,
            surname: request.surname,
            email: request.email,
        })
        .await?;

    Ok(Json(SendCodeResponse::from(result)))
}

/// POST /api/auth/verify-code
pub async fn verify_code(
    State(state): State<AppState>,
    Json(request): Json<VerifyCodeRequest>,
) -> Result<impl IntoResponse, AuthApiError> {
    let handler = state.verify_code_handler();
    let result = handler
        .handle(VerifyCodeCommand {
            email: request.email,
            code: request.code,
        })
        .await?;

    Ok(Json(VerifyCodeResponse::from(result)))
}

/// Maps verification errors onto HTTP responses.
pub struct AuthApiError(VerificationError);

impl From<VerificationError> for AuthApiError {
    fn from(err: VerificationError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AuthApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self.0 {
            VerificationError::RateLimited { .. } => (StatusCode::TOO_MANY_REQUESTS, "RATE_LIMITED"),
            VerificationError::InvalidCode => (StatusCode::BAD_REQUEST, "INVALID_CODE"),
            VerificationError::CodeExpired => (StatusCode::BAD_REQUEST, "CODE_EXPIRED"),
            VerificationError::MaxAttemptsExceeded => {
                (StatusCode::BAD_REQUEST, "MAX_ATTEMPTS_EXCEEDED")
            }
            VerificationError::EmailAlreadyVerified { .. } => {
                (StatusCode::CONFLICT, "EMAIL_ALREADY_VERIFIED")
            }
            VerificationError::EmailAlreadyRegistered { .. } => {
                (StatusCode::CONFLICT, "EMAIL_ALREADY_REGISTERED")
            }
            VerificationError::EmailDelivery(_) => (StatusCode::BAD_GATEWAY, "EMAIL_DELIVERY_FAILED"),
            VerificationError::Infrastructure(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        let mut body = ErrorResponse::new(code, self.0.to_string());
        if let VerificationError::RateLimited { retry_after_secs } = &self.0 {
            body = body.with_retry_after(*retry_after_secs);
        }

        (status, Json(body)).into_response()
    }
}
