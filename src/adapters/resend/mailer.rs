//! Resend implementation of the mailer port.
//!
//! Sends through the Resend JSON API. Attachments are base64-encoded
//! inline, which is what Resend expects for payloads under its size cap.

use async_trait::async_trait;
use base64::Engine;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::config::EmailConfig;
use crate::ports::{EmailAttachment, Mailer, MailerError};

const RESEND_API_BASE_URL: &str = "https://api.resend.com";

#[derive(Debug, Serialize)]
struct SendEmailRequest {
    from: String,
    to: Vec<String>,
    subject: String,
    html: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    attachments: Vec<ResendAttachment>,
}

#[derive(Debug, Serialize)]
struct ResendAttachment {
    filename: String,
    /// Base64-encoded file bytes.
    content: String,
}

impl From<EmailAttachment> for ResendAttachment {
    fn from(attachment: EmailAttachment) -> Self {
        Self {
            filename: attachment.filename,
            content: base64::engine::general_purpose::STANDARD.encode(attachment.content),
        }
    }
}

/// Mailer backed by the Resend API.
pub struct ResendMailer {
    api_key: SecretString,
    config: EmailConfig,
    api_base_url: String,
    http_client: reqwest::Client,
}

impl ResendMailer {
    pub fn new(config: EmailConfig) -> Self {
        Self {
            api_key: SecretString::new(config.resend_api_key.clone()),
            config,
            api_base_url: RESEND_API_BASE_URL.to_string(),
            http_client: reqwest::Client::new(),
        }
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    async fn send(&self, request: SendEmailRequest) -> Result<(), MailerError> {
        let url = format!("{}/emails", self.api_base_url);

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|e| MailerError::new(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!(%status, error = %error_text, "resend send failed");
            return Err(MailerError::new(format!(
                "resend returned {status}: {error_text}"
            )));
        }

        Ok(())
    }

    fn verification_body(name: &str, code: &str) -> String {
        format!(
            "<p>Hi {name},</p>\
             <p>Your verification code is:</p>\
             <p style=\"font-size:24px;font-weight:bold;letter-spacing:4px\">{code}</p>\
             <p>The code expires shortly. If you did not request it, ignore this email.</p>"
        )
    }

    fn payment_success_body(name: &str, tariff_name: &str, amount: i64, currency: &str) -> String {
        let units = amount / 100;
        let cents = amount % 100;
        let currency = currency.to_uppercase();
        format!(
            "<p>Hi {name},</p>\
             <p>Your payment of {units}.{cents:02} {currency} for the \
             <strong>{tariff_name}</strong> plan was successful.</p>\
             <p>Your plan materials are attached.</p>"
        )
    }

    fn payment_failure_body(name: &str, tariff_name: &str, reason: &str) -> String {
        format!(
            "<p>Hi {name},</p>\
             <p>Your payment for the <strong>{tariff_name}</strong> plan \
             did not go through ({reason}).</p>\
             <p>No charge was made. You can retry the purchase at any time.</p>"
        )
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send_verification_code(
        &self,
        to_email: &str,
        name: &str,
        code: &str,
    ) -> Result<(), MailerError> {
        self.send(SendEmailRequest {
            from: self.config.from_header(),
            to: vec![to_email.to_string()],
            subject: self.config.verification_subject.clone(),
            html: Self::verification_body(name, code),
            attachments: Vec::new(),
        })
        .await
    }

    async fn send_payment_success(
        &self,
        to_email: &str,
        name: &str,
        tariff_name: &str,
        amount: i64,
        currency: &str,
        attachments: Vec<EmailAttachment>,
    ) -> Result<(), MailerError> {
        self.send(SendEmailRequest {
            from: self.config.from_header(),
            to: vec![to_email.to_string()],
            subject: self.config.payment_success_subject.clone(),
            html: Self::payment_success_body(name, tariff_name, amount, currency),
            attachments: attachments.into_iter().map(Into::into).collect(),
        })
        .await
    }

    async fn send_payment_failure(
        &self,
        to_email: &str,
        name: &str,
        tariff_name: &str,
        reason: &str,
    ) -> Result<(), MailerError> {
        self.send(SendEmailRequest {
            from: self.config.from_header(),
            to: vec![to_email.to_string()],
            subject: self.config.payment_failure_subject.clone(),
            html: Self::payment_failure_body(name, tariff_name, reason),
            attachments: Vec::new(),
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verification_body_contains_code() {
        let body = ResendMailer::verification_body("Dana", "482913");
        assert!(body.contains("Hi Dana"));
        assert!(body.contains("482913"));
    }

    #[test]
    fn success_body_formats_minor_units() {
        let body = ResendMailer::payment_success_body("Dana", "Balance", 2990, "usd");
        assert!(body.contains("29.90 USD"));
        assert!(body.contains("Balance"));
    }

    #[test]
    fn failure_body_carries_reason() {
        let body = ResendMailer::payment_failure_body("Dana", "Balance", "payment_failed");
        assert!(body.contains("payment_failed"));
        assert!(body.contains("No charge was made"));
    }

    #[test]
    fn attachment_is_base64_encoded() {
        let attachment = EmailAttachment {
            filename: "plan.pdf".to_string(),
            content: b"%PDF-1.7 fake".to_vec(),
        };
        let encoded = ResendAttachment::from(attachment);
        assert_eq!(encoded.filename, "plan.pdf");
        assert_eq!(
            base64::engine::general_purpose::STANDARD
                .decode(&encoded.content)
                .unwrap(),
            b"%PDF-1.7 fake"
        );
    }

    #[test]
    fn request_without_attachments_omits_field() {
        let request = SendEmailRequest {
            from: "Harmoni <noreply@harmoni.app>".to_string(),
            to: vec!["buyer@example.com".to_string()],
            subject: "Test".to_string(),
            html: "<p>hello</p>".to_string(),
            attachments: Vec::new(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("attachments").is_none());
    }
}
