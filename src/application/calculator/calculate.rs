//! CalculateHandler - daily calorie recommendation plus tariff match.

use std::sync::Arc;

use crate::domain::calculator::{
    apply_goal_adjustment, calculate_bmr, calculate_tdee, find_recommended_tariff, ActivityLevel,
    Gender, Goal, GoalAdjustment,
};
use crate::domain::foundation::DomainError;
use crate::domain::tariff::Tariff;
use crate::ports::TariffRepository;

#[derive(Debug, Clone)]
pub struct CalculateQuery {
    pub gender: Gender,
    pub age: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
}

#[derive(Debug, Clone)]
pub struct CalculateResult {
    pub bmr: i32,
    pub tdee: i32,
    pub recommended_calories: i32,
    pub recommended_tariff: Option<Tariff>,
}

/// Stateless computation; the only IO is reading tariffs for the match.
pub struct CalculateHandler {
    tariffs: Arc<dyn TariffRepository>,
    adjustment: GoalAdjustment,
}

impl CalculateHandler {
    pub fn new(tariffs: Arc<dyn TariffRepository>, adjustment: GoalAdjustment) -> Self {
        Self {
            tariffs,
            adjustment,
        }
    }

    pub async fn handle(&self, query: CalculateQuery) -> Result<CalculateResult, DomainError> {
        let bmr = calculate_bmr(query.gender, query.age, query.weight_kg, query.height_cm);
        let tdee = calculate_tdee(bmr, query.activity_level);
        let recommended_calories = apply_goal_adjustment(tdee, query.goal, self.adjustment);

        let candidates = self.tariffs.list_with_calories().await?;
        let recommended_tariff =
            find_recommended_tariff(&candidates, recommended_calories).cloned();

        Ok(CalculateResult {
            bmr: bmr.round() as i32,
            tdee: tdee.round() as i32,
            recommended_calories,
            recommended_tariff,
        })
    }
}
