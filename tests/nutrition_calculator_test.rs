// ABOUTME: Integration tests for BMR, daily calorie needs, goal targets, and macro splits
// ABOUTME: Verifies the Mifflin-St Jeor equation, activity multipliers, goal deltas, and ratio validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Nutrition calculator tests
//!
//! - Mifflin-St Jeor BMR for every gender
//! - Daily calorie needs for all 5 activity levels
//! - Target calories for all 6 goals
//! - Macro splits and ratio validation
//! - Input validation

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitness_metrics::config::{
    ActivityFactorsConfig, BmrConfig, GoalAdjustmentsConfig, MacroRatiosConfig,
};
use fitness_metrics::errors::ErrorCode;
use fitness_metrics::models::{ActivityLevel, FitnessGoal, Gender};
use fitness_metrics::nutrition_calculator::{
    calculate_bmr, calculate_daily_calorie_needs, calculate_macro_split,
    calculate_target_calories,
};
use fitness_metrics::MacroRatio;

mod common;

use common::assert_close;

// ============================================================================
// BMR CALCULATION TESTS - Mifflin-St Jeor Formula
// ============================================================================

#[test]
fn test_bmr_male() {
    // 10 * 80 + 6.25 * 180 - 5 * 30 + 5 = 800 + 1125 - 150 + 5 = 1780
    let bmr = calculate_bmr(Gender::Male, 80.0, 180.0, 30, &BmrConfig::default()).unwrap();
    assert_close(bmr, 1780.0, "male BMR");
}

#[test]
fn test_bmr_female() {
    // 10 * 60 + 6.25 * 165 - 5 * 25 - 161 = 600 + 1031.25 - 125 - 161 = 1345.25
    let bmr = calculate_bmr(Gender::Female, 60.0, 165.0, 25, &BmrConfig::default()).unwrap();
    assert_close(bmr, 1345.25, "female BMR");
}

#[test]
fn test_bmr_other_is_mean_of_male_and_female() {
    // 800 + 1125 - 150 + (5 - 161) / 2 = 1697
    let bmr = calculate_bmr(Gender::Other, 80.0, 180.0, 30, &BmrConfig::default()).unwrap();
    assert_close(bmr, 1697.0, "other BMR");
}

#[test]
fn test_bmr_decreases_with_age() {
    let config = BmrConfig::default();
    let young = calculate_bmr(Gender::Male, 70.0, 175.0, 20, &config).unwrap();
    let older = calculate_bmr(Gender::Male, 70.0, 175.0, 60, &config).unwrap();
    assert_close(young - older, 200.0, "age term");
}

#[test]
fn test_bmr_has_no_floor() {
    // Tiny but valid measurements produce a small value rather than a clamped one
    let bmr = calculate_bmr(Gender::Female, 30.0, 120.0, 80, &BmrConfig::default()).unwrap();
    assert_close(bmr, 300.0 + 750.0 - 400.0 - 161.0, "unclamped BMR");
}

#[test]
fn test_bmr_rejects_invalid_measurements() {
    let config = BmrConfig::default();
    assert_eq!(
        calculate_bmr(Gender::Male, 0.0, 180.0, 30, &config)
            .unwrap_err()
            .code,
        ErrorCode::InvalidInput
    );
    assert_eq!(
        calculate_bmr(Gender::Male, 80.0, -180.0, 30, &config)
            .unwrap_err()
            .code,
        ErrorCode::InvalidInput
    );
}

// ============================================================================
// DAILY CALORIE NEEDS
// ============================================================================

#[test]
fn test_daily_needs_moderately_active() {
    let needs = calculate_daily_calorie_needs(
        1152.5,
        ActivityLevel::ModeratelyActive,
        &ActivityFactorsConfig::default(),
    )
    .unwrap();
    assert_close(needs, 1786.375, "daily needs");
}

#[test]
fn test_daily_needs_all_activity_levels() {
    let config = ActivityFactorsConfig::default();
    let expected = [
        (ActivityLevel::Sedentary, 1.2),
        (ActivityLevel::LightlyActive, 1.375),
        (ActivityLevel::ModeratelyActive, 1.55),
        (ActivityLevel::VeryActive, 1.725),
        (ActivityLevel::ExtremelyActive, 1.9),
    ];
    for (level, multiplier) in expected {
        let needs = calculate_daily_calorie_needs(1000.0, level, &config).unwrap();
        assert_close(needs, 1000.0 * multiplier, level.as_str());
    }
}

#[test]
fn test_daily_needs_rejects_non_positive_bmr() {
    let error = calculate_daily_calorie_needs(
        0.0,
        ActivityLevel::Sedentary,
        &ActivityFactorsConfig::default(),
    )
    .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

// ============================================================================
// TARGET CALORIES
// ============================================================================

#[test]
fn test_target_calories_all_goals() {
    let config = GoalAdjustmentsConfig::default();
    let expected = [
        (FitnessGoal::LoseWeight, 1500.0),
        (FitnessGoal::GainWeight, 2500.0),
        (FitnessGoal::MaintainWeight, 2000.0),
        (FitnessGoal::BuildMuscle, 2300.0),
        (FitnessGoal::ImproveEndurance, 1800.0),
        (FitnessGoal::GeneralFitness, 1900.0),
    ];
    for (goal, target) in expected {
        let actual = calculate_target_calories(2000.0, goal, &config).unwrap();
        assert_close(actual, target, goal.as_str());
    }
}

#[test]
fn test_goal_surplus_and_deficit() {
    let config = GoalAdjustmentsConfig::default();
    assert!(config.requires_calorie_deficit(FitnessGoal::LoseWeight));
    assert!(config.requires_calorie_surplus(FitnessGoal::BuildMuscle));
    assert!(!config.requires_calorie_surplus(FitnessGoal::MaintainWeight));
    assert!(!config.requires_calorie_deficit(FitnessGoal::MaintainWeight));
}

// ============================================================================
// MACRO SPLIT
// ============================================================================

#[test]
fn test_macro_split_balanced() {
    let split = calculate_macro_split(
        2000.0,
        FitnessGoal::MaintainWeight,
        &MacroRatiosConfig::default(),
    )
    .unwrap();
    assert_close(split.protein, 125.0, "protein");
    assert_close(split.carbs, 225.0, "carbs");
    assert_close(split.fat, 600.0 / 9.0, "fat");
}

#[test]
fn test_macro_split_converts_back_to_total() {
    let config = MacroRatiosConfig::default();
    for goal in FitnessGoal::ALL {
        let split = calculate_macro_split(2345.0, goal, &config).unwrap();
        assert_close(split.total_calories(), 2345.0, goal.as_str());
    }
}

#[test]
fn test_default_ratios_sum_to_one() {
    let config = MacroRatiosConfig::default();
    for goal in FitnessGoal::ALL {
        let ratio = config.ratio(goal);
        assert_close(ratio.protein + ratio.carbs + ratio.fat, 1.0, goal.as_str());
    }
}

#[test]
fn test_macro_split_rejects_non_positive_calories() {
    let error = calculate_macro_split(
        0.0,
        FitnessGoal::LoseWeight,
        &MacroRatiosConfig::default(),
    )
    .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

#[test]
fn test_macro_split_rejects_invalid_ratio() {
    let mut config = MacroRatiosConfig::default();
    config.gain_weight = MacroRatio {
        protein: 0.5,
        carbs: 0.5,
        fat: 0.5,
    };
    let error = calculate_macro_split(2000.0, FitnessGoal::GainWeight, &config).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert!(error.message.contains("sum to 1.0"), "{}", error.message);
}

#[test]
fn test_macro_ratio_constructor_validation() {
    assert!(MacroRatio::new(0.3, 0.4, 0.3).is_ok());
    assert!(MacroRatio::new(0.3, 0.4, 0.31).is_err());
    let negative = MacroRatio::new(-0.1, 0.8, 0.3).unwrap_err();
    assert!(negative.message.contains("non-negative"));
}
