//! Email configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Email configuration (Resend)
#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    /// Resend API key
    pub resend_api_key: String,

    /// From email address
    #[serde(default = "default_from_email")]
    pub from_email: String,

    /// From name
    #[serde(default = "default_from_name")]
    pub from_name: String,

    /// Subject line for verification-code emails
    #[serde(default = "default_verification_subject")]
    pub verification_subject: String,

    /// Subject line for payment-success emails
    #[serde(default = "default_payment_success_subject")]
    pub payment_success_subject: String,

    /// Subject line for payment-failure emails
    #[serde(default = "default_payment_failure_subject")]
    pub payment_failure_subject: String,
}

impl EmailConfig {
    /// Get formatted "From" header value
    pub fn from_header(&self) -> String {
        format!("{} <{}>", self.from_name, self.from_email)
    }

    /// Validate email configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.resend_api_key.is_empty() {
            return Err(ValidationError::MissingRequired("RESEND_API_KEY"));
        }
        if !self.resend_api_key.starts_with("re_") {
            return Err(ValidationError::InvalidResendKey);
        }
        if !self.from_email.contains('@') {
            return Err(ValidationError::InvalidFromEmail);
        }
        Ok(())
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            resend_api_key: String::new(),
            from_email: default_from_email(),
            from_name: default_from_name(),
            verification_subject: default_verification_subject(),
            payment_success_subject: default_payment_success_subject(),
            payment_failure_subject: default_payment_failure_subject(),
        }
    }
}

fn default_from_email() -> String {
    "noreply@harmoni.app".to_string()
}

fn default_from_name() -> String {
    "Harmoni".to_string()
}

fn default_verification_subject() -> String {
    "Your Harmoni verification code".to_string()
}

fn default_payment_success_subject() -> String {
    "Your Harmoni plan is ready".to_string()
}

fn default_payment_failure_subject() -> String {
    "There was a problem with your payment".to_string()
}
