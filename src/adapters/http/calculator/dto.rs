//! JSON shapes for the calculator endpoint.

use serde::{Deserialize, Serialize};

use crate::adapters::http::tariff::dto::TariffResponse;
use crate::application::calculator::CalculateResult;
use crate::domain::calculator::{ActivityLevel, Gender, Goal};

#[derive(Debug, Clone, Deserialize)]
pub struct CalculateRequest {
    pub gender: Gender,
    pub age: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
}

#[derive(Debug, Clone, Serialize)]
pub struct CalculateResponse {
    pub bmr: i32,
    pub tdee: i32,
    pub recommended_calories: i32,
    /// Closest-matching tariff by calorie target, if any carries one.
    pub recommended_tariff: Option<TariffResponse>,
}

impl From<CalculateResult> for CalculateResponse {
    fn from(result: CalculateResult) -> Self {
        Self {
            bmr: result.bmr,
            tdee: result.tdee,
            recommended_calories: result.recommended_calories,
            recommended_tariff: result.recommended_tariff.map(TariffResponse::from),
        }
    }
}
