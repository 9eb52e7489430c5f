//! Input value types for the domain calculations
//!
//! Transient values constructed per calculation call and immediately
//! consumed. Nothing here is persisted or mutated.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::calories::{calories_burned_kcal, Activity};
use crate::metrics::{calculate_bmr_mifflin, Gender};
use crate::plans::{plan_for, FitnessLevel, Goal};

/// Metrics describing a person, consumed by one BMR calculation
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PersonMetrics {
    /// Weight in kilograms
    #[validate(range(min = 1.0, max = 500.0))]
    pub weight_kg: f64,
    /// Height in centimeters
    #[validate(range(min = 1.0, max = 300.0))]
    pub height_cm: f64,
    /// Age in years
    #[validate(range(min = 1, max = 150))]
    pub age_years: i32,
    pub gender: Gender,
}

impl PersonMetrics {
    /// Estimated basal metabolic rate in kcal per day
    pub fn bmr_kcal_per_day(&self) -> f64 {
        calculate_bmr_mifflin(self.weight_kg, self.height_cm, self.age_years, self.gender)
    }
}

/// One activity session, consumed by one calorie estimate
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ActivitySession {
    pub activity: Activity,
    /// Session length in minutes
    #[validate(range(min = 1.0, max = 1440.0))]
    pub duration_minutes: f64,
    /// Weight in kilograms
    #[validate(range(min = 1.0, max = 500.0))]
    pub weight_kg: f64,
}

impl ActivitySession {
    /// Estimated calories burned over this session
    pub fn calories_burned_kcal(&self) -> f64 {
        calories_burned_kcal(self.activity, self.duration_minutes, self.weight_kg)
    }
}

/// Query for a workout plan recommendation
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WorkoutQuery {
    pub fitness_level: FitnessLevel,
    pub goal: Goal,
}

impl WorkoutQuery {
    /// Recommended plan for this query
    pub fn plan(&self) -> &'static str {
        plan_for(self.fitness_level, self.goal)
    }
}
