//! Basal metabolic rate calculations
//!
//! Estimates BMR from user metrics. All calculations are pure functions over
//! plain values; gender parsing happens once at the string boundary and the
//! typed core never fails.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::DomainError;

/// Gender used for BMR estimation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// All supported genders, in display order
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// Canonical lowercase token, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    /// Human-readable label for selectors
    pub fn description(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Gender {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(DomainError::InvalidGender(s.to_string())),
        }
    }
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor variant
///
/// Men: BMR = 88.36 + 13.4 × weight(kg) + 4.8 × height(cm) - 5.7 × age(y)
/// Women: BMR = 447.6 + 9.2 × weight(kg) + 3.1 × height(cm) - 4.3 × age(y)
pub fn calculate_bmr_mifflin(
    weight_kg: f64,
    height_cm: f64,
    age_years: i32,
    gender: Gender,
) -> f64 {
    match gender {
        Gender::Male => 88.36 + 13.4 * weight_kg + 4.8 * height_cm - 5.7 * age_years as f64,
        Gender::Female => 447.6 + 9.2 * weight_kg + 3.1 * height_cm - 4.3 * age_years as f64,
    }
}

/// Calculate BMR from a raw gender string
///
/// The gender match is case-insensitive. An unrecognized gender yields
/// [`DomainError::InvalidGender`]; the caller decides how to surface it.
pub fn calculate_bmr(
    weight_kg: f64,
    height_cm: f64,
    age_years: i32,
    gender: &str,
) -> Result<f64, DomainError> {
    let gender: Gender = gender.parse().map_err(|err: DomainError| {
        debug!(%err, "BMR calculation rejected input");
        err
    })?;
    Ok(calculate_bmr_mifflin(weight_kg, height_cm, age_years, gender))
}
