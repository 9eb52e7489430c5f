//! Input validation functions
//!
//! Validation utilities for user input arriving as raw values, used before
//! the values reach the pure calculations. The structured types in
//! [`crate::models`] carry `validator` derive attributes for the same ranges;
//! the free functions here cover field-at-a-time checks at the boundary.

use crate::calories::Activity;
use crate::metrics::Gender;
use crate::plans::{FitnessLevel, Goal};

/// Validate weight value (in kg)
pub fn validate_weight_kg(weight_kg: f64) -> Result<(), String> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err("Weight must be a valid number".to_string());
    }
    if weight_kg < 1.0 {
        return Err("Weight must be at least 1 kg".to_string());
    }
    if weight_kg > 500.0 {
        return Err("Weight must be at most 500 kg".to_string());
    }
    Ok(())
}

/// Validate height value (in cm)
pub fn validate_height_cm(height_cm: f64) -> Result<(), String> {
    if height_cm.is_nan() || height_cm.is_infinite() {
        return Err("Height must be a valid number".to_string());
    }
    if height_cm < 1.0 {
        return Err("Height must be at least 1 cm".to_string());
    }
    if height_cm > 300.0 {
        return Err("Height must be at most 300 cm".to_string());
    }
    Ok(())
}

/// Validate age in years
pub fn validate_age_years(age_years: i32) -> Result<(), String> {
    if age_years < 1 {
        return Err("Age must be at least 1 year".to_string());
    }
    if age_years > 150 {
        return Err("Age cannot exceed 150 years".to_string());
    }
    Ok(())
}

/// Validate session duration in minutes
pub fn validate_duration_minutes(minutes: f64) -> Result<(), String> {
    if minutes.is_nan() || minutes.is_infinite() {
        return Err("Duration must be a valid number".to_string());
    }
    if minutes < 1.0 {
        return Err("Duration must be at least 1 minute".to_string());
    }
    if minutes > 1440.0 {
        // 24 hours
        return Err("Duration cannot exceed 24 hours".to_string());
    }
    Ok(())
}

/// Valid gender tokens
pub const VALID_GENDERS: &[&str] = &["male", "female"];

/// Validate a gender string
pub fn validate_gender(gender: &str) -> Result<(), String> {
    gender.parse::<Gender>().map(|_| ()).map_err(|_| {
        format!(
            "Invalid gender. Must be one of: {}",
            VALID_GENDERS.join(", ")
        )
    })
}

/// Valid activity tokens
pub const VALID_ACTIVITIES: &[&str] = &["running", "cycling", "walking", "swimming", "jump_rope"];

/// Validate an activity string
pub fn validate_activity(activity: &str) -> Result<(), String> {
    activity.parse::<Activity>().map(|_| ()).map_err(|_| {
        format!(
            "Invalid activity. Must be one of: {}",
            VALID_ACTIVITIES.join(", ")
        )
    })
}

/// Valid fitness level tokens
pub const VALID_FITNESS_LEVELS: &[&str] = &["beginner", "intermediate", "advanced"];

/// Validate a fitness level string
pub fn validate_fitness_level(level: &str) -> Result<(), String> {
    if FitnessLevel::parse(level).is_some() {
        Ok(())
    } else {
        Err(format!(
            "Invalid fitness level. Must be one of: {}",
            VALID_FITNESS_LEVELS.join(", ")
        ))
    }
}

/// Valid goal tokens
pub const VALID_GOALS: &[&str] = &["weight_loss", "muscle_gain", "general_fitness"];

/// Validate a goal string
pub fn validate_goal(goal: &str) -> Result<(), String> {
    if Goal::parse(goal).is_some() {
        Ok(())
    } else {
        Err(format!(
            "Invalid goal. Must be one of: {}",
            VALID_GOALS.join(", ")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_validate_weight() {
        assert!(validate_weight_kg(70.0).is_ok());
        assert!(validate_weight_kg(1.0).is_ok());
        assert!(validate_weight_kg(500.0).is_ok());
        assert!(validate_weight_kg(0.5).is_err());
        assert!(validate_weight_kg(600.0).is_err());
        assert!(validate_weight_kg(f64::NAN).is_err());
        assert!(validate_weight_kg(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_height() {
        assert!(validate_height_cm(175.0).is_ok());
        assert!(validate_height_cm(1.0).is_ok());
        assert!(validate_height_cm(300.0).is_ok());
        assert!(validate_height_cm(0.0).is_err());
        assert!(validate_height_cm(301.0).is_err());
        assert!(validate_height_cm(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_age() {
        assert!(validate_age_years(25).is_ok());
        assert!(validate_age_years(1).is_ok());
        assert!(validate_age_years(150).is_ok());
        assert!(validate_age_years(0).is_err());
        assert!(validate_age_years(-5).is_err());
        assert!(validate_age_years(151).is_err());
    }

    #[test]
    fn test_validate_duration() {
        assert!(validate_duration_minutes(30.0).is_ok());
        assert!(validate_duration_minutes(1.0).is_ok());
        assert!(validate_duration_minutes(1440.0).is_ok());
        assert!(validate_duration_minutes(0.0).is_err());
        assert!(validate_duration_minutes(1441.0).is_err());
        assert!(validate_duration_minutes(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_string_keys() {
        assert!(validate_gender("male").is_ok());
        assert!(validate_gender("FEMALE").is_ok());
        assert!(validate_gender("other").is_err());

        assert!(validate_activity("running").is_ok());
        assert!(validate_activity("jump rope").is_ok());
        assert!(validate_activity("rowing").is_err());

        assert!(validate_fitness_level("Beginner").is_ok());
        assert!(validate_fitness_level("elite").is_err());

        assert!(validate_goal("weight loss").is_ok());
        assert!(validate_goal("endurance").is_err());
    }

    #[test]
    fn test_valid_token_lists_match_enums() {
        let genders: Vec<&str> = Gender::ALL.iter().map(|g| g.as_str()).collect();
        assert_eq!(genders, VALID_GENDERS);

        let activities: Vec<&str> = Activity::ALL.iter().map(|a| a.as_str()).collect();
        assert_eq!(activities, VALID_ACTIVITIES);

        let levels: Vec<&str> = FitnessLevel::ALL.iter().map(|l| l.as_str()).collect();
        assert_eq!(levels, VALID_FITNESS_LEVELS);

        let goals: Vec<&str> = Goal::ALL.iter().map(|g| g.as_str()).collect();
        assert_eq!(goals, VALID_GOALS);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_valid_weight_range(weight in 1.0f64..=500.0) {
            prop_assert!(validate_weight_kg(weight).is_ok());
        }

        #[test]
        fn prop_invalid_weight_below_min(weight in 0.0f64..1.0) {
            prop_assert!(validate_weight_kg(weight).is_err());
        }

        #[test]
        fn prop_valid_height_range(height in 1.0f64..=300.0) {
            prop_assert!(validate_height_cm(height).is_ok());
        }

        #[test]
        fn prop_valid_duration_range(minutes in 1.0f64..=1440.0) {
            prop_assert!(validate_duration_minutes(minutes).is_ok());
        }

        #[test]
        fn prop_valid_age_range(age in 1i32..=150) {
            prop_assert!(validate_age_years(age).is_ok());
        }
    }
}
