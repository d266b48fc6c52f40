use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::models::session::SessionIntensity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayContext {
    pub intensity: SessionIntensity,
    pub label: String,
    pub duration_min: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingAdvice {
    pub window: String,
    pub advice: String,
}

impl TimingAdvice {
    pub fn new(window: &str, advice: &str) -> Self {
        Self {
            window: window.to_string(),
            advice: advice.to_string(),
        }
    }
}

/// Fueling target for one day, derived from a profile and one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionTarget {
    pub day_context: DayContext,
    pub calories: i64,
    pub protein_g: i64,
    pub carbs_g: i64,
    pub fat_g: i64,
    pub hydration_liters: f64,
    pub timing: Vec<TimingAdvice>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyNutrition {
    pub day: Weekday,
    pub target: NutritionTarget,
}
