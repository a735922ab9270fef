//! Admin access tokens - HS256 JWTs with the admin id as subject.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::domain::admin::AdminError;
use crate::domain::foundation::AdminId;

/// Claims carried in an admin access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminClaims {
    /// Admin id.
    pub sub: String,
    /// Issued-at, unix seconds.
    pub iat: i64,
    /// Expiry, unix seconds.
    pub exp: i64,
}

/// Issues a signed token for the given admin, valid for `expiry_secs`.
pub fn issue_token(
    admin_id: AdminId,
    secret: &str,
    expiry_secs: i64,
) -> Result<String, AdminError> {
    let now = chrono::Utc::now().timestamp();
    let claims = AdminClaims {
        sub: admin_id.to_string(),
        iat: now,
        exp: now + expiry_secs,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AdminError::Infrastructure(e.to_string()))
}

/// Decodes and validates a token, including its expiry.
pub fn decode_token(token: &str, secret: &str) -> Result<AdminClaims, AdminError> {
    decode::<AdminClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AdminError::InvalidToken)
}
