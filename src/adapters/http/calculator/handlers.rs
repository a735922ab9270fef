//! Handler for the calculator endpoint.

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::dto::{CalculateRequest, CalculateResponse};
use crate::adapters::http::response::ErrorResponse;
use crate::adapters::http::state::AppState;
use crate::application::calculator::CalculateQuery;
use crate::domain::foundation::DomainError;

/// POST /api/calculator/calculate
pub async fn calculate(
    State(state): State<AppState>,
    Json(request): Json<CalculateRequest>,
) -> Result<impl IntoResponse, CalculatorApiError> {
    let handler = state.calculate_handler();
    let result = handler
        .handle(CalculateQuery {
            gender: request.gender,
            age: request.age,
            weight_kg: request.weight_kg,
            height_cm: request.height_cm,
            activity_level: request.activity_level,
            goal: request.goal,
        })
        .await?;

    Ok(Json(CalculateResponse::from(result)))
}

/// The only failure mode here is the tariff read for the recommendation.
pub struct CalculatorApiError(DomainError);

impl From<DomainError> for CalculatorApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for CalculatorApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse::new("INTERNAL_ERROR", self.0.to_string());
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
