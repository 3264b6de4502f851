// ABOUTME: Calculator configuration container with env overrides, validation, and a global instance
// ABOUTME: Loads canonical defaults, applies FITNESS_* environment variables, and validates the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Calculator Configuration Module
//!
//! Provides type-safe configuration for every formula in the calculator. Defaults are
//! the canonical constant tables; deployments may override individual coefficients
//! through environment variables.
//!
//! | Variable | Field |
//! |---|---|
//! | `FITNESS_BMR_WEIGHT_COEF` | `bmr.msj_weight_coef` |
//! | `FITNESS_BMR_HEIGHT_COEF` | `bmr.msj_height_coef` |
//! | `FITNESS_BMR_AGE_COEF` | `bmr.msj_age_coef` |
//! | `FITNESS_BMR_MALE_CONSTANT` | `bmr.msj_male_constant` |
//! | `FITNESS_BMR_FEMALE_CONSTANT` | `bmr.msj_female_constant` |
//! | `FITNESS_ACTIVITY_<LEVEL>` | `activity_factors.<level>` |
//! | `FITNESS_GOAL_<GOAL>_KCAL` | `goal_adjustments.<goal>` |
//! | `FITNESS_WATER_ML_PER_KG` | `hydration.water_ml_per_kg` |

pub mod error;
pub mod nutrition;

pub use error::ConfigError;
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, GoalAdjustmentsConfig, HydrationConfig, MacroRatio,
    MacroRatiosConfig,
};

use fitness_core::models::FitnessGoal;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Largest accepted absolute goal calorie delta (kcal/day)
const MAX_GOAL_DELTA_KCAL: f64 = 1000.0;

/// Finite and strictly greater than zero
pub(crate) fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Global configuration singleton
static CALCULATOR_CONFIG: OnceLock<CalculatorConfig> = OnceLock::new();

/// Main calculator configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Mifflin-St Jeor coefficients
    pub bmr: BmrConfig,
    /// BMR multipliers per activity level
    pub activity_factors: ActivityFactorsConfig,
    /// Daily calorie delta per fitness goal
    pub goal_adjustments: GoalAdjustmentsConfig,
    /// Macronutrient ratio per fitness goal
    pub macro_ratios: MacroRatiosConfig,
    /// Water intake factor
    pub hydration: HydrationConfig,
}

impl CalculatorConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        CALCULATOR_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load calculator config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        debug!(config = ?config, "Calculator configuration loaded");
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_finite()?;
        self.validate_bmr()?;
        self.validate_activity_factors()?;
        self.validate_goal_adjustments()?;
        self.macro_ratios.validate()?;

        if !is_positive(self.hydration.water_ml_per_kg) {
            return Err(ConfigError::ValueOutOfRange(
                "Water intake per kg must be positive",
            ));
        }

        Ok(())
    }

    /// Range checks below compare with `<`/`>`, which never fire for NaN
    fn validate_finite(&self) -> Result<(), ConfigError> {
        let bmr = &self.bmr;
        let factors = &self.activity_factors;
        let coefficients = [
            bmr.msj_weight_coef,
            bmr.msj_height_coef,
            bmr.msj_age_coef,
            bmr.msj_male_constant,
            bmr.msj_female_constant,
            factors.sedentary,
            factors.lightly_active,
            factors.moderately_active,
            factors.very_active,
            factors.extremely_active,
            self.hydration.water_ml_per_kg,
        ];
        let deltas = FitnessGoal::ALL.map(|goal| self.goal_adjustments.delta(goal));

        if coefficients.iter().chain(&deltas).all(|value| value.is_finite()) {
            Ok(())
        } else {
            Err(ConfigError::ValueOutOfRange(
                "Configuration values must be finite numbers",
            ))
        }
    }

    fn validate_bmr(&self) -> Result<(), ConfigError> {
        if !is_positive(self.bmr.msj_weight_coef) || !is_positive(self.bmr.msj_height_coef) {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }
        if self.bmr.msj_age_coef > 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR age coefficient must not be positive",
            ));
        }
        if self.bmr.msj_female_constant >= self.bmr.msj_male_constant {
            return Err(ConfigError::InvalidRange(
                "BMR female constant must be < male constant",
            ));
        }
        Ok(())
    }

    fn validate_activity_factors(&self) -> Result<(), ConfigError> {
        let factors = &self.activity_factors;
        if factors.sedentary < 1.0 || factors.extremely_active > 2.5 {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be between 1.0 and 2.5",
            ));
        }
        if factors.sedentary >= factors.lightly_active
            || factors.lightly_active >= factors.moderately_active
            || factors.moderately_active >= factors.very_active
            || factors.very_active >= factors.extremely_active
        {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order",
            ));
        }
        Ok(())
    }

    fn validate_goal_adjustments(&self) -> Result<(), ConfigError> {
        let adjustments = &self.goal_adjustments;
        let within_bounds = FitnessGoal::ALL
            .iter()
            .all(|goal| adjustments.delta(*goal).abs() <= MAX_GOAL_DELTA_KCAL);
        if !within_bounds {
            return Err(ConfigError::ValueOutOfRange(
                "Goal calorie adjustments must be within ±1000 kcal",
            ));
        }
        if adjustments.lose_weight >= 0.0 || adjustments.gain_weight <= 0.0 {
            return Err(ConfigError::InvalidRange(
                "lose_weight must be a deficit and gain_weight a surplus",
            ));
        }
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: '{val}'")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Mifflin-St Jeor coefficients
        Self::apply_env_var("FITNESS_BMR_WEIGHT_COEF", &mut self.bmr.msj_weight_coef)?;
        Self::apply_env_var("FITNESS_BMR_HEIGHT_COEF", &mut self.bmr.msj_height_coef)?;
        Self::apply_env_var("FITNESS_BMR_AGE_COEF", &mut self.bmr.msj_age_coef)?;
        Self::apply_env_var("FITNESS_BMR_MALE_CONSTANT", &mut self.bmr.msj_male_constant)?;
        Self::apply_env_var(
            "FITNESS_BMR_FEMALE_CONSTANT",
            &mut self.bmr.msj_female_constant,
        )?;

        // Activity multipliers
        let factors = &mut self.activity_factors;
        Self::apply_env_var("FITNESS_ACTIVITY_SEDENTARY", &mut factors.sedentary)?;
        Self::apply_env_var("FITNESS_ACTIVITY_LIGHTLY_ACTIVE", &mut factors.lightly_active)?;
        Self::apply_env_var(
            "FITNESS_ACTIVITY_MODERATELY_ACTIVE",
            &mut factors.moderately_active,
        )?;
        Self::apply_env_var("FITNESS_ACTIVITY_VERY_ACTIVE", &mut factors.very_active)?;
        Self::apply_env_var(
            "FITNESS_ACTIVITY_EXTREMELY_ACTIVE",
            &mut factors.extremely_active,
        )?;

        // Goal calorie deltas
        let goals = &mut self.goal_adjustments;
        Self::apply_env_var("FITNESS_GOAL_LOSE_WEIGHT_KCAL", &mut goals.lose_weight)?;
        Self::apply_env_var("FITNESS_GOAL_GAIN_WEIGHT_KCAL", &mut goals.gain_weight)?;
        Self::apply_env_var("FITNESS_GOAL_MAINTAIN_WEIGHT_KCAL", &mut goals.maintain_weight)?;
        Self::apply_env_var("FITNESS_GOAL_BUILD_MUSCLE_KCAL", &mut goals.build_muscle)?;
        Self::apply_env_var(
            "FITNESS_GOAL_IMPROVE_ENDURANCE_KCAL",
            &mut goals.improve_endurance,
        )?;
        Self::apply_env_var("FITNESS_GOAL_GENERAL_FITNESS_KCAL", &mut goals.general_fitness)?;

        // Hydration
        Self::apply_env_var(
            "FITNESS_WATER_ML_PER_KG",
            &mut self.hydration.water_ml_per_kg,
        )?;

        Ok(self)
    }
}
