// ABOUTME: Integration tests for profile models, enum parsing, and age derivation
// ABOUTME: Covers stored-profile JSON, per-field requirements, and birth date handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use fitness_metrics::errors::ErrorCode;
use fitness_metrics::models::{age_on, ActivityLevel, FitnessGoal, Gender, Profile};

mod common;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn test_stored_profile_json_with_screaming_enums() {
    let profile: Profile = serde_json::from_str(
        r#"{
            "height": 172.5,
            "weight": 68.0,
            "age": 41,
            "gender": "FEMALE",
            "activityLevel": "VERY_ACTIVE",
            "fitnessGoal": "WEIGHT_LOSS"
        }"#,
    )
    .unwrap();

    assert!(profile.is_complete());
    let complete = profile.complete().unwrap();
    assert_eq!(complete.gender, Gender::Female);
    assert_eq!(complete.activity_level, ActivityLevel::VeryActive);
    assert_eq!(complete.fitness_goal, FitnessGoal::LoseWeight);

    let rec = common::calculator().generate_recommendation(&profile).unwrap();
    assert!(rec.target_calories() < rec.daily_calorie_needs());
}

#[test]
fn test_partial_profile_json() {
    let profile: Profile = serde_json::from_str(r#"{"heightCm": 180.0}"#).unwrap();
    assert_eq!(profile.height_cm, Some(180.0));
    assert_eq!(
        profile.missing_fields(),
        ["weight_kg", "age", "gender", "activity_level", "fitness_goal"]
    );
}

#[test]
fn test_require_single_field() {
    let profile = Profile::new().with_height_cm(180.0);
    assert!(profile.require_height_cm().is_ok());

    let error = profile.require_gender().unwrap_err();
    assert_eq!(error.code, ErrorCode::MissingRequiredField);
    assert_eq!(error.context.resource_id.as_deref(), Some("gender"));
}

#[test]
fn test_enum_parsing_from_cli_spellings() {
    assert_eq!("Male".parse::<Gender>().unwrap(), Gender::Male);
    assert_eq!(
        "lightly-active".parse::<ActivityLevel>().unwrap(),
        ActivityLevel::LightlyActive
    );
    assert_eq!(
        "improve endurance".parse::<FitnessGoal>().unwrap(),
        FitnessGoal::ImproveEndurance
    );

    let error = "couch".parse::<ActivityLevel>().unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidFormat);
}

#[test]
fn test_age_from_birth_date() {
    assert_eq!(age_on(date(1990, 6, 15), date(2025, 6, 14)).unwrap(), 34);
    assert_eq!(age_on(date(1990, 6, 15), date(2025, 6, 15)).unwrap(), 35);

    let profile = Profile::new()
        .with_birth_date(date(2000, 2, 29), date(2025, 2, 28))
        .unwrap();
    assert_eq!(profile.age, Some(24));
}

#[test]
fn test_future_birth_date_rejected() {
    let error = age_on(date(2030, 1, 1), date(2025, 1, 1)).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}
