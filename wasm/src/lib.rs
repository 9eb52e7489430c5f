//! Workout Tracker WASM Module
//!
//! WebAssembly bindings exposing the three domain calculations to the
//! browser form. No logic lives here: each binding parses nothing itself and
//! delegates to `workout-tracker-domain`, mapping failures to
//! `undefined`/the fallback string so the page can show its own error
//! message.

use wasm_bindgen::prelude::*;

/// Calculate BMR in kcal/day, or `undefined` for an unrecognized gender
#[wasm_bindgen]
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age_years: i32, gender: &str) -> Option<f64> {
    workout_tracker_domain::calculate_bmr(weight_kg, height_cm, age_years, gender).ok()
}

/// Estimate calories burned, or `undefined` for an unrecognized activity
#[wasm_bindgen]
pub fn estimate_calories_burned(
    activity: &str,
    duration_minutes: f64,
    weight_kg: f64,
) -> Option<f64> {
    workout_tracker_domain::estimate_calories_burned(activity, duration_minutes, weight_kg).ok()
}

/// Recommend a workout plan; unmatched queries get the fallback string
#[wasm_bindgen]
pub fn recommend_workout_plan(fitness_level: &str, goal: &str) -> String {
    workout_tracker_domain::recommend_workout_plan(fitness_level, goal).to_string()
}
