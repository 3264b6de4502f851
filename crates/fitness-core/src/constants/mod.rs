// ABOUTME: Physiological constants shared by the fitness metric formulas
// ABOUTME: Energy density per macronutrient, hydration factor, and WHO BMI cut-offs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Physiological constants based on nutrition guidelines
//!
//! Values here are fixed by physiology or by published classification tables and are
//! not meant to be tuned. Tunable coefficients live in the calculator configuration.

/// Atwater energy factors (kcal per gram)
pub mod energy {
    /// Protein: 4 kcal/g
    pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;

    /// Carbohydrate: 4 kcal/g
    pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;

    /// Fat: 9 kcal/g
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
}

/// Daily fluid intake guidance
pub mod hydration {
    /// Recommended daily water intake per kilogram of body weight (ml)
    pub const WATER_ML_PER_KG: f64 = 35.0;
}

/// WHO adult BMI classification (kg/m²). Each value is the exclusive upper bound of
/// the category below it.
pub mod bmi {
    /// Below this value a person is underweight
    pub const UNDERWEIGHT_UPPER: f64 = 18.5;

    /// Below this value (and at or above underweight) weight is normal
    pub const NORMAL_UPPER: f64 = 25.0;

    /// Below this value (and at or above normal) a person is overweight
    pub const OVERWEIGHT_UPPER: f64 = 30.0;
}

/// Mifflin-St Jeor resting energy expenditure coefficients
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy
/// expenditure. *American Journal of Clinical Nutrition*, 51(2), 241-247.
pub mod mifflin_st_jeor {
    /// kcal per kg body weight
    pub const WEIGHT_COEF: f64 = 10.0;

    /// kcal per cm height
    pub const HEIGHT_COEF: f64 = 6.25;

    /// kcal per year of age
    pub const AGE_COEF: f64 = -5.0;

    /// Constant term for men
    pub const MALE_CONSTANT: f64 = 5.0;

    /// Constant term for women
    pub const FEMALE_CONSTANT: f64 = -161.0;
}

/// Tolerances used when validating derived values
pub mod tolerance {
    /// Allowed deviation when checking that macro ratios sum to 1.0
    pub const MACRO_RATIO_SUM: f64 = 1e-9;

    /// Relative band around daily needs inside which intake needs no adjustment
    pub const CALORIE_ADJUSTMENT_FRACTION: f64 = 0.05;
}
