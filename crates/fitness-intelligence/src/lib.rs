// ABOUTME: Fitness calculation engine: configuration, formula modules, and recommendation composition
// ABOUTME: Pure computation over fitness-core models with no I/O or persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitness Intelligence
//!
//! Body composition, energy expenditure, and macronutrient formulas, plus the
//! [`FitnessCalculator`] that composes them into a [`FitnessRecommendation`].

/// Calculator configuration with environment overrides and validation
pub mod config;

/// BMI and hydration formulas
pub mod body_composition;

/// BMR, daily calorie needs, goal targets, and macro splits
pub mod nutrition_calculator;

/// Per-profile composition and parallel batch evaluation
pub mod recommendation_engine;

pub use config::{CalculatorConfig, ConfigError, MacroRatio};
pub use nutrition_calculator::MacroSplit;
pub use recommendation_engine::{
    BmiResult, FitnessCalculator, FitnessMetrics, FitnessRecommendation, WaterIntakeResult,
};
