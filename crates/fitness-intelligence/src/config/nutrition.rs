// ABOUTME: Coefficient tables for energy, hydration, and macronutrient calculations
// ABOUTME: Mifflin-St Jeor terms, activity multipliers, goal calorie deltas, and macro ratios
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Calculation Configuration
//!
//! Default values form the canonical tables of the calculator. BMR always uses the
//! Mifflin-St Jeor equation; only its coefficients are configurable.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010). Exercise Physiology

use super::error::ConfigError;
use fitness_core::constants::{hydration, mifflin_st_jeor, tolerance};
use fitness_core::errors::{AppError, AppResult};
use fitness_core::models::{ActivityLevel, FitnessGoal};
use serde::{Deserialize, Serialize};

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: mifflin_st_jeor::WEIGHT_COEF,
            msj_height_coef: mifflin_st_jeor::HEIGHT_COEF,
            msj_age_coef: mifflin_st_jeor::AGE_COEF,
            msj_male_constant: mifflin_st_jeor::MALE_CONSTANT,
            msj_female_constant: mifflin_st_jeor::FEMALE_CONSTANT,
        }
    }
}

/// Activity factor multipliers applied to BMR
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub lightly_active: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderately_active: f64,
    /// Very active (6-7 days/week): 1.725
    pub very_active: f64,
    /// Extremely active (physical job or twice-daily training): 1.9
    pub extremely_active: f64,
}

impl ActivityFactorsConfig {
    /// Multiplier for a level
    #[must_use]
    pub const fn multiplier(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::LightlyActive => self.lightly_active,
            ActivityLevel::ModeratelyActive => self.moderately_active,
            ActivityLevel::VeryActive => self.very_active,
            ActivityLevel::ExtremelyActive => self.extremely_active,
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            lightly_active: 1.375,
            moderately_active: 1.55,
            very_active: 1.725,
            extremely_active: 1.9,
        }
    }
}

/// Daily calorie delta (kcal) added to maintenance calories per goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalAdjustmentsConfig {
    /// Lose weight: -500
    pub lose_weight: f64,
    /// Gain weight: +500
    pub gain_weight: f64,
    /// Maintain weight: 0
    pub maintain_weight: f64,
    /// Build muscle: +300
    pub build_muscle: f64,
    /// Improve endurance: -200
    pub improve_endurance: f64,
    /// General fitness: -100
    pub general_fitness: f64,
}

impl GoalAdjustmentsConfig {
    /// Calorie delta for a goal
    #[must_use]
    pub const fn delta(&self, goal: FitnessGoal) -> f64 {
        match goal {
            FitnessGoal::LoseWeight => self.lose_weight,
            FitnessGoal::GainWeight => self.gain_weight,
            FitnessGoal::MaintainWeight => self.maintain_weight,
            FitnessGoal::BuildMuscle => self.build_muscle,
            FitnessGoal::ImproveEndurance => self.improve_endurance,
            FitnessGoal::GeneralFitness => self.general_fitness,
        }
    }

    /// Whether the goal adds calories on top of maintenance
    #[must_use]
    pub fn requires_calorie_surplus(&self, goal: FitnessGoal) -> bool {
        self.delta(goal) > 0.0
    }

    /// Whether the goal removes calories from maintenance
    #[must_use]
    pub fn requires_calorie_deficit(&self, goal: FitnessGoal) -> bool {
        self.delta(goal) < 0.0
    }
}

impl Default for GoalAdjustmentsConfig {
    fn default() -> Self {
        Self {
            lose_weight: -500.0,
            gain_weight: 500.0,
            maintain_weight: 0.0,
            build_muscle: 300.0,
            improve_endurance: -200.0,
            general_fitness: -100.0,
        }
    }
}

/// Share of calories assigned to each macronutrient. Parts are fractions of 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroRatio {
    /// Protein share
    pub protein: f64,
    /// Carbohydrate share
    pub carbs: f64,
    /// Fat share
    pub fat: f64,
}

impl MacroRatio {
    /// Build a ratio, rejecting negative parts and sums other than 1.0
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if a part is negative or the parts do not sum to 1.0
    pub fn new(protein: f64, carbs: f64, fat: f64) -> AppResult<Self> {
        let ratio = Self {
            protein,
            carbs,
            fat,
        };
        ratio.validate()?;
        Ok(ratio)
    }

    /// Check the ratio invariants
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if a part is negative or the parts do not sum to 1.0
    pub fn validate(&self) -> AppResult<()> {
        if [self.protein, self.carbs, self.fat]
            .iter()
            .any(|part| !part.is_finite() || *part < 0.0)
        {
            return Err(AppError::invalid_input(
                "Macro percentages must be non-negative",
            ));
        }
        let sum = self.protein + self.carbs + self.fat;
        if (sum - 1.0).abs() > tolerance::MACRO_RATIO_SUM {
            return Err(AppError::invalid_input(format!(
                "Macro percentages must sum to 1.0, got {sum}"
            )));
        }
        Ok(())
    }
}

/// Macro ratio per fitness goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroRatiosConfig {
    /// Lose weight: higher protein for satiety (35/35/30)
    pub lose_weight: MacroRatio,
    /// Gain weight: higher carbs for energy (25/50/25)
    pub gain_weight: MacroRatio,
    /// Maintain weight: balanced (25/45/30)
    pub maintain_weight: MacroRatio,
    /// Build muscle: balanced with adequate protein (30/40/30)
    pub build_muscle: MacroRatio,
    /// Improve endurance: higher carbs (20/60/20)
    pub improve_endurance: MacroRatio,
    /// General fitness: balanced (25/45/30)
    pub general_fitness: MacroRatio,
}

impl MacroRatiosConfig {
    /// Ratio for a goal
    #[must_use]
    pub const fn ratio(&self, goal: FitnessGoal) -> MacroRatio {
        match goal {
            FitnessGoal::LoseWeight => self.lose_weight,
            FitnessGoal::GainWeight => self.gain_weight,
            FitnessGoal::MaintainWeight => self.maintain_weight,
            FitnessGoal::BuildMuscle => self.build_muscle,
            FitnessGoal::ImproveEndurance => self.improve_endurance,
            FitnessGoal::GeneralFitness => self.general_fitness,
        }
    }

    /// Validate that every goal's ratio sums to 1.0
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidWeights` naming the first goal whose ratio is invalid
    pub fn validate(&self) -> Result<(), ConfigError> {
        for goal in FitnessGoal::ALL {
            self.ratio(goal)
                .validate()
                .map_err(|e| ConfigError::InvalidWeights(format!("{goal}: {}", e.message)))?;
        }
        Ok(())
    }
}

impl Default for MacroRatiosConfig {
    fn default() -> Self {
        let balanced = MacroRatio {
            protein: 0.25,
            carbs: 0.45,
            fat: 0.30,
        };
        Self {
            lose_weight: MacroRatio {
                protein: 0.35,
                carbs: 0.35,
                fat: 0.30,
            },
            gain_weight: MacroRatio {
                protein: 0.25,
                carbs: 0.50,
                fat: 0.25,
            },
            maintain_weight: balanced,
            build_muscle: MacroRatio {
                protein: 0.30,
                carbs: 0.40,
                fat: 0.30,
            },
            improve_endurance: MacroRatio {
                protein: 0.20,
                carbs: 0.60,
                fat: 0.20,
            },
            general_fitness: balanced,
        }
    }
}

/// Daily water intake configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HydrationConfig {
    /// Millilitres per kilogram of body weight: 35
    pub water_ml_per_kg: f64,
}

impl Default for HydrationConfig {
    fn default() -> Self {
        Self {
            water_ml_per_kg: hydration::WATER_ML_PER_KG,
        }
    }
}
