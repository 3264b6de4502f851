// ABOUTME: Integration tests for BMI, BMI categories, and water intake
// ABOUTME: Covers category boundaries, monotonicity, and rejection of non-positive measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitness_metrics::body_composition::{bmi_category, calculate_bmi, calculate_water_intake_ml};
use fitness_metrics::config::HydrationConfig;
use fitness_metrics::errors::ErrorCode;
use fitness_metrics::models::BmiCategory;

mod common;

use common::assert_close;

// ============================================================================
// BMI CALCULATION
// ============================================================================

#[test]
fn test_bmi_typical_adult() {
    // 75 / 1.8^2
    let bmi = calculate_bmi(180.0, 75.0).unwrap();
    assert_close(bmi, 75.0 / 3.24, "BMI");
}

#[test]
fn test_bmi_increases_with_weight() {
    let mut previous = 0.0;
    for weight in [45.0, 60.0, 75.0, 90.0, 120.0] {
        let bmi = calculate_bmi(175.0, weight).unwrap();
        assert!(bmi > previous, "BMI should grow with weight ({weight} kg)");
        previous = bmi;
    }
}

#[test]
fn test_bmi_decreases_with_height() {
    let mut previous = f64::MAX;
    for height in [150.0, 165.0, 180.0, 195.0] {
        let bmi = calculate_bmi(height, 70.0).unwrap();
        assert!(bmi < previous, "BMI should shrink with height ({height} cm)");
        previous = bmi;
    }
}

#[test]
fn test_bmi_rejects_non_positive_measurements() {
    for (height, weight) in [(0.0, 70.0), (175.0, 0.0), (-1.0, 70.0), (175.0, -5.0)] {
        let error = calculate_bmi(height, weight).unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidInput);
        assert_eq!(error.http_status(), 400);
    }
}

// ============================================================================
// BMI CATEGORIES
// ============================================================================

#[test]
fn test_bmi_category_boundaries() {
    let cases = [
        (18.49, BmiCategory::Underweight),
        (18.5, BmiCategory::Normal),
        (24.99, BmiCategory::Normal),
        (25.0, BmiCategory::Overweight),
        (29.99, BmiCategory::Overweight),
        (30.0, BmiCategory::Obese),
        (45.0, BmiCategory::Obese),
    ];
    for (bmi, expected) in cases {
        assert_eq!(bmi_category(bmi), expected, "BMI {bmi}");
    }
}

#[test]
fn test_bmi_category_serializes_as_label() {
    assert_eq!(
        serde_json::to_string(&BmiCategory::Overweight).unwrap(),
        "\"Overweight\""
    );
}

// ============================================================================
// WATER INTAKE
// ============================================================================

#[test]
fn test_water_intake_35_ml_per_kg() {
    let config = HydrationConfig::default();
    assert_close(calculate_water_intake_ml(70.0, &config).unwrap(), 2450.0, "water");
    assert_close(calculate_water_intake_ml(80.0, &config).unwrap(), 2800.0, "water");
}

#[test]
fn test_water_intake_uses_configured_factor() {
    let config = HydrationConfig {
        water_ml_per_kg: 40.0,
    };
    assert_close(calculate_water_intake_ml(50.0, &config).unwrap(), 2000.0, "water");
}

#[test]
fn test_water_intake_rejects_zero_weight() {
    let error = calculate_water_intake_ml(0.0, &HydrationConfig::default()).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}
