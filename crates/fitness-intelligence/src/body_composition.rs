// ABOUTME: Body mass index and hydration formulas over raw height and weight
// ABOUTME: Usable standalone, without a stored profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::{is_positive, HydrationConfig};
use fitness_core::errors::{AppError, AppResult};
use fitness_core::models::BmiCategory;
use tracing::debug;

/// Calculate Body Mass Index
///
/// Formula: BMI = `weight_kg` / (`height_cm` / 100)²
///
/// # Errors
///
/// Returns `InvalidInput` if height or weight is not a positive finite number
pub fn calculate_bmi(height_cm: f64, weight_kg: f64) -> AppResult<f64> {
    if !is_positive(height_cm) || !is_positive(weight_kg) {
        return Err(AppError::invalid_input(
            "Height and weight must be positive values",
        ));
    }

    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    debug!(height_cm, weight_kg, bmi, "BMI calculated");
    Ok(bmi)
}

/// WHO category for a BMI value
#[must_use]
pub fn bmi_category(bmi: f64) -> BmiCategory {
    BmiCategory::from_bmi(bmi)
}

/// Calculate recommended daily water intake in millilitres
///
/// Formula: water (ml) = `weight_kg` x `water_ml_per_kg` (35 by default)
///
/// # Errors
///
/// Returns `InvalidInput` if weight is not a positive finite number
pub fn calculate_water_intake_ml(weight_kg: f64, config: &HydrationConfig) -> AppResult<f64> {
    if !is_positive(weight_kg) {
        return Err(AppError::invalid_input("Weight must be positive"));
    }
    Ok(weight_kg * config.water_ml_per_kg)
}
