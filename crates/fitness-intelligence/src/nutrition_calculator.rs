// ABOUTME: Energy expenditure and macronutrient formulas
// ABOUTME: Mifflin-St Jeor BMR, activity-scaled daily needs, goal targets, and macro gram splits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Calculator Module
//!
//! Every function is pure: the same inputs and configuration always give the same
//! output. Composite results are assembled by the recommendation engine.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology.

use crate::config::{
    is_positive, ActivityFactorsConfig, BmrConfig, GoalAdjustmentsConfig, MacroRatiosConfig,
};
use fitness_core::constants::energy::{
    KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
};
use fitness_core::errors::{AppError, AppResult};
use fitness_core::models::{ActivityLevel, FitnessGoal, Gender};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Daily macronutrient targets in grams
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroSplit {
    /// Protein (g)
    pub protein: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Fat (g)
    pub fat: f64,
}

impl MacroSplit {
    /// Energy content of the split (kcal)
    #[must_use]
    pub fn total_calories(&self) -> f64 {
        self.fat.mul_add(
            KCAL_PER_GRAM_FAT,
            self.protein
                .mul_add(KCAL_PER_GRAM_PROTEIN, self.carbs * KCAL_PER_GRAM_CARBS),
        )
    }
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_constant`
/// - Male: +5
/// - Female: -161
/// - Other: mean of the male and female results
///
/// # Errors
///
/// Returns `InvalidInput` if weight or height is not a positive finite number
pub fn calculate_bmr(
    gender: Gender,
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    config: &BmrConfig,
) -> AppResult<f64> {
    if !is_positive(weight_kg) {
        return Err(AppError::invalid_input("Weight must be positive"));
    }
    if !is_positive(height_cm) {
        return Err(AppError::invalid_input("Height must be positive"));
    }

    let base = config.msj_age_coef.mul_add(
        f64::from(age),
        config
            .msj_weight_coef
            .mul_add(weight_kg, config.msj_height_coef * height_cm),
    );

    let gender_constant = match gender {
        Gender::Male => config.msj_male_constant,
        Gender::Female => config.msj_female_constant,
        Gender::Other => (config.msj_male_constant + config.msj_female_constant) / 2.0,
    };

    let bmr = base + gender_constant;
    debug!(%gender, weight_kg, height_cm, age, bmr, "BMR calculated");
    Ok(bmr)
}

/// Calculate daily calorie needs (TDEE)
///
/// Formula: needs = BMR x activity multiplier
///
/// # Errors
///
/// Returns `InvalidInput` if BMR is not positive
pub fn calculate_daily_calorie_needs(
    bmr: f64,
    activity_level: ActivityLevel,
    config: &ActivityFactorsConfig,
) -> AppResult<f64> {
    if !is_positive(bmr) {
        return Err(AppError::invalid_input("BMR must be positive"));
    }
    Ok(bmr * config.multiplier(activity_level))
}

/// Calculate target calories for a goal
///
/// Formula: target = daily needs + goal delta
///
/// # Errors
///
/// Returns `InvalidInput` if daily calorie needs are not positive
pub fn calculate_target_calories(
    daily_calorie_needs: f64,
    fitness_goal: FitnessGoal,
    config: &GoalAdjustmentsConfig,
) -> AppResult<f64> {
    if !is_positive(daily_calorie_needs) {
        return Err(AppError::invalid_input(
            "Daily calorie needs must be positive",
        ));
    }
    Ok(daily_calorie_needs + config.delta(fitness_goal))
}

/// Split a calorie budget into macronutrient grams
///
/// Each goal's ratio assigns a share of calories to protein, carbohydrate, and fat;
/// shares convert to grams at 4, 4, and 9 kcal/g.
///
/// # Errors
///
/// Returns `InvalidInput` if the calorie budget is not positive or the goal's ratio
/// does not sum to 1.0
pub fn calculate_macro_split(
    total_calories: f64,
    fitness_goal: FitnessGoal,
    config: &MacroRatiosConfig,
) -> AppResult<MacroSplit> {
    if !is_positive(total_calories) {
        return Err(AppError::invalid_input("Total calories must be positive"));
    }

    let ratio = config.ratio(fitness_goal);
    ratio.validate()?;

    Ok(MacroSplit {
        protein: total_calories * ratio.protein / KCAL_PER_GRAM_PROTEIN,
        carbs: total_calories * ratio.carbs / KCAL_PER_GRAM_CARBS,
        fat: total_calories * ratio.fat / KCAL_PER_GRAM_FAT,
    })
}
