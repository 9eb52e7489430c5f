//! Calorie expenditure estimation
//!
//! Estimates calories burned for an activity session using the standard
//! MET-to-kcal conversion. The MET table is an exhaustive match on
//! [`Activity`], so after parsing, a missing entry is unrepresentable and a
//! legitimately zero MET would remain distinct from "activity not found".

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::DomainError;

/// Activity supported by the calorie estimator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Activity {
    Running,
    Cycling,
    Walking,
    Swimming,
    JumpRope,
}

impl Activity {
    /// All supported activities, in display order
    pub const ALL: [Activity; 5] = [
        Activity::Running,
        Activity::Cycling,
        Activity::Walking,
        Activity::Swimming,
        Activity::JumpRope,
    ];

    /// Metabolic equivalent (MET) constant for this activity
    pub fn met(&self) -> f64 {
        match self {
            Activity::Running => 9.8,
            Activity::Cycling => 7.5,
            Activity::Walking => 3.8,
            Activity::Swimming => 8.0,
            Activity::JumpRope => 12.0,
        }
    }

    /// Canonical snake_case token, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            Activity::Running => "running",
            Activity::Cycling => "cycling",
            Activity::Walking => "walking",
            Activity::Swimming => "swimming",
            Activity::JumpRope => "jump_rope",
        }
    }

    /// Human-readable label for selectors
    pub fn description(&self) -> &'static str {
        match self {
            Activity::Running => "Running",
            Activity::Cycling => "Cycling",
            Activity::Walking => "Walking",
            Activity::Swimming => "Swimming",
            Activity::JumpRope => "Jump Rope",
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Activity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // The two-word activity accepts both the spaced and snake_case forms.
        match s.to_lowercase().as_str() {
            "running" => Ok(Activity::Running),
            "cycling" => Ok(Activity::Cycling),
            "walking" => Ok(Activity::Walking),
            "swimming" => Ok(Activity::Swimming),
            "jump rope" | "jump_rope" => Ok(Activity::JumpRope),
            _ => Err(DomainError::UnknownActivity(s.to_string())),
        }
    }
}

/// Calories burned for a typed activity session
///
/// Formula: MET × 3.5 × weight(kg) / 200 × duration(min)
pub fn calories_burned_kcal(activity: Activity, duration_minutes: f64, weight_kg: f64) -> f64 {
    activity.met() * 3.5 * weight_kg / 200.0 * duration_minutes
}

/// Estimate calories burned from a raw activity string
///
/// The activity match is case-insensitive. An unrecognized activity yields
/// [`DomainError::UnknownActivity`]; the caller decides how to surface it.
pub fn estimate_calories_burned(
    activity: &str,
    duration_minutes: f64,
    weight_kg: f64,
) -> Result<f64, DomainError> {
    let activity: Activity = activity.parse().map_err(|err: DomainError| {
        debug!(%err, "calorie estimate rejected input");
        err
    })?;
    Ok(calories_burned_kcal(activity, duration_minutes, weight_kg))
}
