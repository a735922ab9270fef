//! Admin bearer-token authentication.
//!
//! Mutating tariff endpoints require a JWT issued by the admin login
//! endpoint. The extractor rejects with a 401 JSON body; it never
//! distinguishes a missing header from a bad token.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Response};

use super::super::response::ErrorResponse;
use super::super::state::AppState;
use crate::domain::admin::decode_token;
use crate::domain::foundation::AdminId;

/// Authenticated admin identity extracted from the Authorization header.
#[derive(Debug, Clone)]
pub struct AdminAuth {
    pub admin_id: AdminId,
}

/// Rejection for failed admin authentication.
#[derive(Debug)]
pub struct AuthRejection;

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let body = ErrorResponse::new("UNAUTHORIZED", "valid admin token required");
        (StatusCode::UNAUTHORIZED, Json(body)).into_response()
    }
}

/// Validates the bearer token and returns the admin id it names.
fn authenticate(headers: &HeaderMap, jwt_secret: &str) -> Result<AdminId, AuthRejection> {
    let token = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or(AuthRejection)?;

    let claims = decode_token(token, jwt_secret).map_err(|_| AuthRejection)?;

    claims
        .sub
        .parse::<AdminId>()
        .map_err(|_| AuthRejection)
}

#[axum::async_trait]
impl FromRequestParts<AppState> for AdminAuth {
    type Rejection = AuthRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let admin_id = authenticate(&parts.headers, &state.config.auth.jwt_secret)?;
        Ok(AdminAuth { admin_id })
    }
}
