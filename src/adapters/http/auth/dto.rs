//! JSON request/response shapes for the registration endpoints.

use serde::{Deserialize, Serialize};

use crate::application::verification::{SendCodeResult, VerifyCodeResult};

#[derive(Debug, Clone, Deserialize)]
pub struct SendCodeRequest {
    pub name: String,
    pub surname: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SendCodeResponse {
    pub email: String,
    /// Seconds until the issued code expires.
    pub expires_in_secs: u64,
}

impl From<SendCodeResult> for SendCodeResponse {
    fn from(result: SendCodeResult) -> Self {
        Self {
            email: result.email,
            expires_in_secs: result.expires_in_secs,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct VerifyCodeRequest {
    pub email: String,
    pub code: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct VerifyCodeResponse {
    pub user_id: String,
    pub name: String,
    pub surname: String,
    pub email: String,
}

impl From<VerifyCodeResult> for VerifyCodeResponse {
    fn from(result: VerifyCodeResult) -> Self {
        Self {
            user_id: result.user_id.to_string(),
            name: result.name,
            surname: result.surname,
            email: result.email,
        }
    }
}
