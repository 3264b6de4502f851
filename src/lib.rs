// ABOUTME: Main library entry point for the fitness metrics calculator
// ABOUTME: Re-exports the core and engine crates and adds logging and output formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitness Metrics
//!
//! A pure calculator for body composition and energy metrics: BMI, basal
//! metabolic rate (Mifflin-St Jeor), daily calorie needs, goal calorie targets,
//! macronutrient splits, water intake, and activity-based workout suggestions.
//!
//! ## Example
//!
//! ```rust,no_run
//! use fitness_metrics::models::{ActivityLevel, FitnessGoal, Gender, Profile};
//! use fitness_metrics::FitnessCalculator;
//!
//! let profile = Profile::new()
//!     .with_height_cm(180.0)
//!     .with_weight_kg(80.0)
//!     .with_age(30)
//!     .with_gender(Gender::Male)
//!     .with_activity_level(ActivityLevel::ModeratelyActive)
//!     .with_fitness_goal(FitnessGoal::LoseWeight);
//!
//! let calculator = FitnessCalculator::from_global();
//! if let Ok(recommendation) = calculator.generate_recommendation(&profile) {
//!     println!("Target: {:.0} kcal", recommendation.target_calories());
//! }
//! ```

/// Output formats for calculator results
pub mod formatters;

/// Structured logging setup
pub mod logging;

pub use fitness_core::{constants, errors, models};
pub use fitness_intelligence::{
    body_composition, config, nutrition_calculator, recommendation_engine, BmiResult,
    CalculatorConfig, ConfigError, FitnessCalculator, FitnessMetrics, FitnessRecommendation,
    MacroRatio, MacroSplit, WaterIntakeResult,
};
