//! Workout plan recommendation
//!
//! A static two-level table keyed by fitness level and goal. Lookup is total:
//! any unmatched (level, goal) pair falls back to [`NO_PLAN_AVAILABLE`]
//! instead of failing.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Fallback returned when no plan matches the query
pub const NO_PLAN_AVAILABLE: &str = "No plan available";

/// Fitness level keying the plan table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl FitnessLevel {
    /// All supported fitness levels, in display order
    pub const ALL: [FitnessLevel; 3] = [
        FitnessLevel::Beginner,
        FitnessLevel::Intermediate,
        FitnessLevel::Advanced,
    ];

    /// Canonical lowercase token, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            FitnessLevel::Beginner => "beginner",
            FitnessLevel::Intermediate => "intermediate",
            FitnessLevel::Advanced => "advanced",
        }
    }

    /// Human-readable label for selectors
    pub fn description(&self) -> &'static str {
        match self {
            FitnessLevel::Beginner => "Beginner",
            FitnessLevel::Intermediate => "Intermediate",
            FitnessLevel::Advanced => "Advanced",
        }
    }

    /// Case-insensitive parse. An unrecognized level is not an error: plan
    /// lookup substitutes the fallback string for it.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "beginner" => Some(FitnessLevel::Beginner),
            "intermediate" => Some(FitnessLevel::Intermediate),
            "advanced" => Some(FitnessLevel::Advanced),
            _ => None,
        }
    }
}

impl fmt::Display for FitnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Training goal keying the plan table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    WeightLoss,
    MuscleGain,
    GeneralFitness,
}

impl Goal {
    /// All supported goals, in display order
    pub const ALL: [Goal; 3] = [Goal::WeightLoss, Goal::MuscleGain, Goal::GeneralFitness];

    /// Canonical snake_case token, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::WeightLoss => "weight_loss",
            Goal::MuscleGain => "muscle_gain",
            Goal::GeneralFitness => "general_fitness",
        }
    }

    /// Human-readable label for selectors
    pub fn description(&self) -> &'static str {
        match self {
            Goal::WeightLoss => "Weight Loss",
            Goal::MuscleGain => "Muscle Gain",
            Goal::GeneralFitness => "General Fitness",
        }
    }

    /// Case-insensitive parse accepting both spaced and snake_case forms.
    /// An unrecognized goal is not an error: plan lookup substitutes the
    /// fallback string for it.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "weight loss" | "weight_loss" => Some(Goal::WeightLoss),
            "muscle gain" | "muscle_gain" => Some(Goal::MuscleGain),
            "general fitness" | "general_fitness" => Some(Goal::GeneralFitness),
            _ => None,
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Recommended plan for a typed (level, goal) query
pub fn plan_for(level: FitnessLevel, goal: Goal) -> &'static str {
    match (level, goal) {
        (FitnessLevel::Beginner, Goal::WeightLoss) => {
            "30 min cardio, 3x per week + light strength training"
        }
        (FitnessLevel::Beginner, Goal::MuscleGain) => "Full body strength training 3x per week",
        (FitnessLevel::Beginner, Goal::GeneralFitness) => "Mix of cardio and strength, 4x per week",
        (FitnessLevel::Intermediate, Goal::WeightLoss) => {
            "45 min HIIT, 4x per week + moderate strength training"
        }
        (FitnessLevel::Intermediate, Goal::MuscleGain) => {
            "Upper-lower split strength training, 4x per week"
        }
        (FitnessLevel::Intermediate, Goal::GeneralFitness) => {
            "Balanced cardio and weights, 5x per week"
        }
        (FitnessLevel::Advanced, Goal::WeightLoss) => "1-hour HIIT and strength, 5x per week",
        (FitnessLevel::Advanced, Goal::MuscleGain) => {
            "Body part split strength training, 5-6x per week"
        }
        (FitnessLevel::Advanced, Goal::GeneralFitness) => {
            "Intense cardio and strength mix, 5x per week"
        }
    }
}

/// Recommend a workout plan from raw level and goal strings
///
/// Total over all inputs: both lookups are case-insensitive, and a level or
/// goal missing from the table yields [`NO_PLAN_AVAILABLE`].
pub fn recommend_workout_plan(fitness_level: &str, goal: &str) -> &'static str {
    match (FitnessLevel::parse(fitness_level), Goal::parse(goal)) {
        (Some(level), Some(goal)) => plan_for(level, goal),
        _ => {
            debug!(fitness_level, goal, "no plan for query, using fallback");
            NO_PLAN_AVAILABLE
        }
    }
}
