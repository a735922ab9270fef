//! Handlers for payment endpoints.
//!
//! The webhook endpoint acks 200 for every delivery whose event id was
//! recorded, including duplicates and unactionable events, so Stripe
//! stops redelivering. Signature failures get 400 and leave no trace.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use uuid::Uuid;

use super::dto::{CreateIntentRequest, CreateIntentResponse, PaymentStatusResponse, WebhookAck};
use crate::adapters::http::response::ErrorResponse;
use crate::adapters::http::state::AppState;
use crate::application::payment::{CreateIntentCommand, GetStatusQuery, HandleWebhookCommand};
use crate::domain::foundation::{PaymentId, TariffId};
use crate::domain::payment::{PaymentError, WebhookError};

/// POST /api/payment/stripe/payment-intent
pub async fn create_payment_intent(
    State(state): State<AppState>,
    Json(request): Json<CreateIntentRequest>,
) -> Result<impl IntoResponse, PaymentApiError> {
    let handler = state.create_intent_handler();
    let result = handler
        .handle(CreateIntentCommand {
            email: request.email,
            tariff_id: TariffId::from_uuid(request.tariff_id),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(CreateIntentResponse::from(result))))
}

/// GET /api/payment/stripe/payment/:id/status
pub async fn get_payment_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, PaymentApiError> {
    let handler = state.get_status_handler();
    let result = handler
        .handle(GetStatusQuery {
            payment_id: PaymentId::from_uuid(id),
        })
        .await?;

    Ok(Json(PaymentStatusResponse::from(result)))
}

/// POST /api/payment/stripe/webhook
pub async fn handle_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, WebhookApiError> {
    let signature_header = headers
        .get("Stripe-Signature")
        .and_then(|v| v.to_str().ok())
        .ok_or(WebhookApiError(WebhookError::ParseError(
            "missing Stripe-Signature header".to_string(),
        )))?;

    let handler = state.webhook_handler();
    handler
        .handle(HandleWebhookCommand {
            payload: body.to_vec(),
            signature_header: signature_header.to_string(),
        })
        .await?;

    Ok(Json(WebhookAck { received: true }))
}

/// Maps payment errors onto HTTP responses.
pub struct PaymentApiError(PaymentError);

impl From<PaymentError> for PaymentApiError {
    fn from(err: PaymentError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PaymentApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self.0 {
            PaymentError::NotVerified { .. } => (StatusCode::FORBIDDEN, "EMAIL_NOT_VERIFIED"),
            PaymentError::TariffNotFound(_) => (StatusCode::NOT_FOUND, "TARIFF_NOT_FOUND"),
            PaymentError::NotFound(_) => (StatusCode::NOT_FOUND, "PAYMENT_NOT_FOUND"),
            PaymentError::Gateway { .. } => (StatusCode::BAD_GATEWAY, "GATEWAY_ERROR"),
            PaymentError::Infrastructure(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        let body = ErrorResponse::new(code, self.0.to_string());
        (status, Json(body)).into_response()
    }
}

/// Maps webhook errors onto HTTP responses.
///
/// Anything short of a persistence failure is the sender's fault and
/// gets a 400; persistence failures get a 500 so Stripe redelivers.
pub struct WebhookApiError(WebhookError);

impl From<WebhookError> for WebhookApiError {
    fn from(err: WebhookError) -> Self {
        Self(err)
    }
}

impl IntoResponse for WebhookApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self.0 {
            WebhookError::InvalidSignature => (StatusCode::BAD_REQUEST, "INVALID_SIGNATURE"),
            WebhookError::TimestampOutOfRange | WebhookError::InvalidTimestamp => {
                (StatusCode::BAD_REQUEST, "INVALID_TIMESTAMP")
            }
            WebhookError::ParseError(_) => (StatusCode::BAD_REQUEST, "MALFORMED_WEBHOOK"),
            WebhookError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = ErrorResponse::new(code, self.0.to_string());
        (status, Json(body)).into_response()
    }
}
