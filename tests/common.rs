// ABOUTME: Shared fixtures for integration tests
// ABOUTME: Provides complete and partial biometric profiles and a default calculator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(dead_code)]

use fitness_metrics::models::{ActivityLevel, FitnessGoal, Gender, Profile};
use fitness_metrics::{CalculatorConfig, FitnessCalculator};

/// Floating point tolerance for exact formula checks
pub const EPSILON: f64 = 1e-6;

/// Calculator on the canonical tables, independent of the process environment
pub fn calculator() -> FitnessCalculator {
    FitnessCalculator::new(CalculatorConfig::default())
}

/// 30-year-old moderately active male, 80 kg, 180 cm, losing weight
pub fn male_profile() -> Profile {
    Profile::new()
        .with_height_cm(180.0)
        .with_weight_kg(80.0)
        .with_age(30)
        .with_gender(Gender::Male)
        .with_activity_level(ActivityLevel::ModeratelyActive)
        .with_fitness_goal(FitnessGoal::LoseWeight)
}

/// 25-year-old lightly active female, 60 kg, 165 cm, building muscle
pub fn female_profile() -> Profile {
    Profile::new()
        .with_height_cm(165.0)
        .with_weight_kg(60.0)
        .with_age(25)
        .with_gender(Gender::Female)
        .with_activity_level(ActivityLevel::LightlyActive)
        .with_fitness_goal(FitnessGoal::BuildMuscle)
}

pub fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "{what}: expected {expected}, got {actual}"
    );
}
