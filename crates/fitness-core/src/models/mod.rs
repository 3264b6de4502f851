// ABOUTME: Domain models consumed by the fitness metric formulas
// ABOUTME: Biometric profile plus the categorical inputs (gender, activity, goal, BMI class)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

mod activity;
mod bmi;
mod goal;
mod profile;

pub use activity::ActivityLevel;
pub use bmi::BmiCategory;
pub use goal::FitnessGoal;
pub use profile::{age_on, CompleteProfile, Gender, Profile};

/// Normalize user-supplied enum text: `"Lightly Active"`, `"lightly-active"` and
/// `"LIGHTLY_ACTIVE"` all become `"lightly_active"`.
pub(crate) fn normalize_token(input: &str) -> String {
    input
        .trim()
        .chars()
        .map(|c| match c {
            '-' | ' ' => '_',
            other => other.to_ascii_lowercase(),
        })
        .collect()
}
