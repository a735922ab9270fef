//! Admin authentication configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Admin authentication configuration (JWT)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthConfig {
    /// HS256 signing secret for admin tokens
    pub jwt_secret: String,

    /// Token lifetime in seconds
    #[serde(default = "default_token_expiry")]
    pub token_expiry_secs: i64,

    /// Optional admin account seeded at startup if absent
    pub seed_admin_email: Option<String>,

    /// Password for the seeded admin account
    pub seed_admin_password: Option<String>,
}

impl AuthConfig {
    /// Validate auth configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.jwt_secret.is_empty() {
            return Err(ValidationError::MissingRequired("JWT_SECRET"));
        }
        if self.jwt_secret.len() < 32 {
            return Err(ValidationError::JwtSecretTooShort);
        }
        Ok(())
    }
}

fn default_token_expiry() -> i64 {
    3600
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_secret_is_rejected() {
        let config = AuthConfig {
            jwt_secret: "short".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::JwtSecretTooShort)
        ));
    }

    #[test]
    fn test_valid_secret_passes() {
        let config = AuthConfig {
            jwt_secret: "0123456789abcdef0123456789abcdef".to_string(),
            token_expiry_secs: default_token_expiry(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
