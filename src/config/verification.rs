//! Verification flow configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Email verification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct VerificationConfig {
    /// Digits in the emailed code
    #[serde(default = "default_code_length")]
    pub code_length: usize,

    /// Minutes a code stays valid
    #[serde(default = "default_ttl_minutes")]
    pub ttl_minutes: i64,

    /// Minimum seconds between codes for the same email
    #[serde(default = "default_resend_interval")]
    pub resend_interval_secs: i64,

    /// Wrong attempts before a code is invalidated
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

impl VerificationConfig {
    /// Validate verification configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(4..=10).contains(&self.code_length) {
            return Err(ValidationError::InvalidCodeLength);
        }
        if self.ttl_minutes <= 0 {
            return Err(ValidationError::InvalidVerificationTtl);
        }
        Ok(())
    }
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            code_length: default_code_length(),
            ttl_minutes: default_ttl_minutes(),
            resend_interval_secs: default_resend_interval(),
            max_attempts: default_max_attempts(),
        }
    }
}

fn default_code_length() -> usize {
    6
}

fn default_ttl_minutes() -> i64 {
    10
}

fn default_resend_interval() -> i64 {
    60
}

fn default_max_attempts() -> u32 {
    5
}
