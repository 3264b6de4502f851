// ABOUTME: Composes the formula modules into per-profile fitness recommendations
// ABOUTME: Holds the calculator configuration and evaluates single profiles or parallel batches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Fitness recommendation engine
//!
//! [`FitnessCalculator`] owns an immutable [`CalculatorConfig`] and is shared by
//! reference across threads. A profile is checked for completeness before any
//! formula runs, so an incomplete profile never yields a partial result.

use crate::body_composition::{bmi_category, calculate_bmi, calculate_water_intake_ml};
use crate::config::{is_positive, CalculatorConfig};
use crate::nutrition_calculator::{
    calculate_bmr, calculate_daily_calorie_needs, calculate_macro_split,
    calculate_target_calories, MacroSplit,
};
use fitness_core::constants::tolerance::CALORIE_ADJUSTMENT_FRACTION;
use fitness_core::errors::{AppError, AppResult};
use fitness_core::models::{
    ActivityLevel, BmiCategory, CompleteProfile, FitnessGoal, Gender, Profile,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Complete set of metrics and guidance for one profile
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FitnessRecommendation {
    /// Basal metabolic rate (kcal/day)
    #[serde(rename = "basalMetabolicRate")]
    bmr: f64,
    /// Maintenance calories (kcal/day)
    daily_calorie_needs: f64,
    /// Maintenance calories adjusted for the goal (kcal/day)
    target_calories: f64,
    /// Body mass index
    #[serde(rename = "bodyMassIndex")]
    bmi: f64,
    bmi_category: BmiCategory,
    /// Recommended water intake (ml/day)
    #[serde(rename = "dailyWaterIntake")]
    daily_water_intake_ml: f64,
    macro_split: MacroSplit,
    workout_recommendations: Vec<String>,
}

impl FitnessRecommendation {
    fn new(
        bmr: f64,
        daily_calorie_needs: f64,
        target_calories: f64,
        bmi: f64,
        daily_water_intake_ml: f64,
        macro_split: MacroSplit,
        workout_recommendations: Vec<String>,
    ) -> AppResult<Self> {
        if !is_positive(bmr) {
            return Err(AppError::invalid_input("BMR must be positive"));
        }
        if !is_positive(daily_calorie_needs) {
            return Err(AppError::invalid_input(
                "Daily calorie needs must be positive",
            ));
        }
        if !is_positive(bmi) {
            return Err(AppError::invalid_input("BMI must be positive"));
        }
        if !is_positive(daily_water_intake_ml) {
            return Err(AppError::invalid_input("Water intake must be positive"));
        }

        Ok(Self {
            bmr,
            daily_calorie_needs,
            target_calories,
            bmi,
            bmi_category: bmi_category(bmi),
            daily_water_intake_ml,
            macro_split,
            workout_recommendations,
        })
    }

    /// Basal metabolic rate (kcal/day)
    #[must_use]
    pub const fn bmr(&self) -> f64 {
        self.bmr
    }

    /// Maintenance calories (kcal/day)
    #[must_use]
    pub const fn daily_calorie_needs(&self) -> f64 {
        self.daily_calorie_needs
    }

    /// Goal-adjusted calories (kcal/day)
    #[must_use]
    pub const fn target_calories(&self) -> f64 {
        self.target_calories
    }

    /// Body mass index
    #[must_use]
    pub const fn bmi(&self) -> f64 {
        self.bmi
    }

    /// WHO category of the BMI
    #[must_use]
    pub const fn bmi_category(&self) -> BmiCategory {
        self.bmi_category
    }

    /// Recommended water intake (ml/day)
    #[must_use]
    pub const fn daily_water_intake_ml(&self) -> f64 {
        self.daily_water_intake_ml
    }

    /// Macronutrient grams derived from the target calories
    #[must_use]
    pub const fn macro_split(&self) -> &MacroSplit {
        &self.macro_split
    }

    /// Workouts suited to the activity level
    #[must_use]
    pub fn workout_recommendations(&self) -> &[String] {
        &self.workout_recommendations
    }

    /// Whether the current intake is more than 5% away from maintenance calories
    #[must_use]
    pub fn needs_calorie_adjustment(&self, current_intake: f64) -> bool {
        let tolerance = self.daily_calorie_needs * CALORIE_ADJUSTMENT_FRACTION;
        (current_intake - self.daily_calorie_needs).abs() > tolerance
    }

    /// Plain-language guidance for the BMI category
    #[must_use]
    pub const fn health_status(&self) -> &'static str {
        self.bmi_category.health_status()
    }

    /// Headline guidance, most important first
    ///
    /// The calorie line quotes the goal-adjusted target rather than maintenance
    /// calories, so it agrees with the macro split.
    #[must_use]
    pub fn priority_recommendations(&self) -> Vec<String> {
        vec![
            format!("Aim for {:.0} calories daily", self.target_calories),
            format!(
                "Drink at least {:.0} ml of water daily",
                self.daily_water_intake_ml
            ),
            format!("Your BMI is {:.1} ({})", self.bmi, self.bmi_category),
            "Follow the personalized workout plan".to_owned(),
        ]
    }

    /// Protein target (g)
    #[must_use]
    pub const fn protein_grams(&self) -> f64 {
        self.macro_split.protein
    }

    /// Carbohydrate target (g)
    #[must_use]
    pub const fn carb_grams(&self) -> f64 {
        self.macro_split.carbs
    }

    /// Fat target (g)
    #[must_use]
    pub const fn fat_grams(&self) -> f64 {
        self.macro_split.fat
    }
}

/// Energy and body composition summary without macros or workouts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FitnessMetrics {
    /// Basal metabolic rate (kcal/day)
    pub bmr: f64,
    /// Maintenance calories (kcal/day)
    pub daily_calories: f64,
    /// Goal-adjusted calories (kcal/day)
    pub target_calories: f64,
    /// Body mass index
    pub bmi: f64,
}

/// Standalone BMI lookup result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    /// Body mass index
    pub bmi: f64,
    /// WHO category
    pub category: BmiCategory,
}

/// Standalone water intake result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaterIntakeResult {
    /// Recommended water intake (ml/day)
    #[serde(rename = "dailyIntakeML")]
    pub daily_intake_ml: f64,
}

/// Calculator bound to one configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FitnessCalculator {
    config: CalculatorConfig,
}

impl FitnessCalculator {
    /// Create a calculator with an explicit configuration
    #[must_use]
    pub const fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    /// Create a calculator from the process-wide configuration
    #[must_use]
    pub fn from_global() -> Self {
        Self::new(CalculatorConfig::global().clone())
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Body mass index for raw measurements
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if height or weight is not positive
    #[allow(clippy::unused_self)] // BMI has no configurable terms
    pub fn calculate_bmi(&self, height_cm: f64, weight_kg: f64) -> AppResult<f64> {
        calculate_bmi(height_cm, weight_kg)
    }

    /// WHO category for a BMI value
    #[must_use]
    #[allow(clippy::unused_self)] // BMI has no configurable terms
    pub fn bmi_category(&self, bmi: f64) -> BmiCategory {
        bmi_category(bmi)
    }

    /// Daily water intake in millilitres
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if weight is not positive
    pub fn calculate_water_intake_ml(&self, weight_kg: f64) -> AppResult<f64> {
        calculate_water_intake_ml(weight_kg, &self.config.hydration)
    }

    /// Basal metabolic rate (Mifflin-St Jeor)
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if weight or height is not positive
    pub fn calculate_bmr(
        &self,
        gender: Gender,
        weight_kg: f64,
        height_cm: f64,
        age: u32,
    ) -> AppResult<f64> {
        calculate_bmr(gender, weight_kg, height_cm, age, &self.config.bmr)
    }

    /// Maintenance calories for an activity level
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if BMR is not positive
    pub fn calculate_daily_calorie_needs(
        &self,
        bmr: f64,
        activity_level: ActivityLevel,
    ) -> AppResult<f64> {
        calculate_daily_calorie_needs(bmr, activity_level, &self.config.activity_factors)
    }

    /// Goal-adjusted calories
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if daily calorie needs are not positive
    pub fn calculate_target_calories(
        &self,
        daily_calorie_needs: f64,
        fitness_goal: FitnessGoal,
    ) -> AppResult<f64> {
        calculate_target_calories(
            daily_calorie_needs,
            fitness_goal,
            &self.config.goal_adjustments,
        )
    }

    /// Macronutrient grams for a calorie budget
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the budget is not positive or the goal's ratio is invalid
    pub fn calculate_macro_split(
        &self,
        total_calories: f64,
        fitness_goal: FitnessGoal,
    ) -> AppResult<MacroSplit> {
        calculate_macro_split(total_calories, fitness_goal, &self.config.macro_ratios)
    }

    /// Full recommendation for a profile
    ///
    /// # Errors
    ///
    /// Returns `IncompleteProfile` listing the absent fields before any computation,
    /// `InvalidInput` if a measurement is out of range, or `ValueOutOfRange` if the
    /// goal's calorie deficit consumes the whole daily budget (very small profiles)
    pub fn generate_recommendation(&self, profile: &Profile) -> AppResult<FitnessRecommendation> {
        let complete = profile.complete()?;
        let (bmr, daily_calorie_needs, target_calories) = self.energy(&complete)?;

        if !is_positive(target_calories) {
            let goal = complete.fitness_goal;
            return Err(AppError::value_out_of_range(format!(
                "{goal} adjustment exceeds daily needs of {daily_calorie_needs:.0} kcal \
                 (target {target_calories:.0} kcal)"
            ))
            .with_resource_id("target_calories"));
        }

        let bmi = calculate_bmi(complete.height_cm, complete.weight_kg)?;
        let water = calculate_water_intake_ml(complete.weight_kg, &self.config.hydration)?;
        let macro_split = self.calculate_macro_split(target_calories, complete.fitness_goal)?;
        let workouts = complete
            .activity_level
            .workout_recommendations()
            .iter()
            .map(|line| (*line).to_owned())
            .collect();

        let recommendation = FitnessRecommendation::new(
            bmr,
            daily_calorie_needs,
            target_calories,
            bmi,
            water,
            macro_split,
            workouts,
        )?;

        info!(
            user_id = ?complete.user_id,
            goal = %complete.fitness_goal,
            target_calories,
            bmi_category = %recommendation.bmi_category,
            "Generated fitness recommendation"
        );
        Ok(recommendation)
    }

    /// Energy and BMI summary for a profile
    ///
    /// # Errors
    ///
    /// Returns `IncompleteProfile` listing the absent fields before any computation,
    /// or `InvalidInput` if a measurement is out of range
    pub fn calculate_metrics(&self, profile: &Profile) -> AppResult<FitnessMetrics> {
        let complete = profile.complete()?;
        let (bmr, daily_calories, target_calories) = self.energy(&complete)?;
        let bmi = calculate_bmi(complete.height_cm, complete.weight_kg)?;

        Ok(FitnessMetrics {
            bmr,
            daily_calories,
            target_calories,
            bmi,
        })
    }

    /// BMI and its category
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if height or weight is not positive
    #[allow(clippy::unused_self)] // BMI has no configurable terms
    pub fn bmi_result(&self, height_cm: f64, weight_kg: f64) -> AppResult<BmiResult> {
        let bmi = calculate_bmi(height_cm, weight_kg)?;
        Ok(BmiResult {
            bmi,
            category: bmi_category(bmi),
        })
    }

    /// Water intake payload
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if weight is not positive
    pub fn water_intake_result(&self, weight_kg: f64) -> AppResult<WaterIntakeResult> {
        Ok(WaterIntakeResult {
            daily_intake_ml: self.calculate_water_intake_ml(weight_kg)?,
        })
    }

    /// Evaluate many profiles in parallel. Output order matches input order.
    #[must_use]
    pub fn generate_recommendations_batch(
        &self,
        profiles: &[Profile],
    ) -> Vec<AppResult<FitnessRecommendation>> {
        debug!(count = profiles.len(), "Evaluating recommendation batch");
        profiles
            .par_iter()
            .map(|profile| self.generate_recommendation(profile))
            .collect()
    }

    fn energy(&self, profile: &CompleteProfile) -> AppResult<(f64, f64, f64)> {
        let bmr = self.calculate_bmr(
            profile.gender,
            profile.weight_kg,
            profile.height_cm,
            profile.age,
        )?;
        let daily = self.calculate_daily_calorie_needs(bmr, profile.activity_level)?;
        let target = self.calculate_target_calories(daily, profile.fitness_goal)?;
        Ok((bmr, daily, target))
    }
}
