//! JSON shapes for admin authentication.

use serde::{Deserialize, Serialize};

use crate::application::admin::LoginResult;

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub expires_in_secs: i64,
}

impl From<LoginResult> for LoginResponse {
    fn from(result: LoginResult) -> Self {
        Self {
            access_token: result.access_token,
            token_type: "Bearer",
            expires_in_secs: result.expires_in_secs,
        }
    }
}
