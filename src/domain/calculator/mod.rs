//! Calorie calculator - pure functions, no state.
//!
//! BMR via Mifflin-St Jeor (1990), TDEE via standard activity multipliers,
//! then a goal adjustment. Tariff matching picks the smallest absolute
//! calorie difference.

use serde::{Deserialize, Serialize};

use crate::domain::tariff::Tariff;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    /// Standard TDEE multiplier for this activity level.
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    WeightLoss,
    Maintenance,
    MuscleGain,
}

/// Calorie adjustments applied on top of TDEE, from configuration.
#[derive(Debug, Clone, Copy)]
pub struct GoalAdjustment {
    /// Subtracted for weight loss.
    pub deficit: i32,
    /// Added for muscle gain.
    pub surplus: i32,
}

impl Default for GoalAdjustment {
    fn default() -> Self {
        Self {
            deficit: 500,
            surplus: 300,
        }
    }
}

/// Basal Metabolic Rate, Mifflin-St Jeor:
/// `10*kg + 6.25*cm - 5*age`, plus 5 for men or minus 161 for women.
pub fn calculate_bmr(gender: Gender, age: u32, weight_kg: f64, height_cm: f64) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age);
    match gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

/// Total Daily Energy Expenditure.
pub fn calculate_tdee(bmr: f64, activity_level: ActivityLevel) -> f64 {
    bmr * activity_level.multiplier()
}

/// Recommended daily intake after the goal adjustment, rounded.
pub fn apply_goal_adjustment(tdee: f64, goal: Goal, adjustment: GoalAdjustment) -> i32 {
    let adjusted = match goal {
        Goal::WeightLoss => tdee - f64::from(adjustment.deficit),
        Goal::MuscleGain => tdee + f64::from(adjustment.surplus),
        Goal::Maintenance => tdee,
    };
    adjusted.round() as i32
}

/// Picks the tariff whose calorie target is closest to `target_calories`.
///
/// Tariffs without calorie data are skipped. Ties on the absolute
/// difference go to the first candidate seen (strict `<` comparison), so
/// the result is deterministic for a given input order.
pub fn find_recommended_tariff(tariffs: &[Tariff], target_calories: i32) -> Option<&Tariff> {
    let mut best: Option<(&Tariff, i32)> = None;
    for tariff in tariffs {
        let Some(calories) = tariff.calories else {
            continue;
        };
        let diff = (calories - target_calories).abs();
        match best {
            Some((_, best_diff)) if diff >= best_diff => {}
            _ => best = Some((tariff, diff)),
        }
    }
    best.map(|(tariff, _)| tariff)
}
