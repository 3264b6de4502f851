// ABOUTME: Fitness goal categories with their descriptive lookup tables
// ABOUTME: Display names, category tags, and recommended training focus per goal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::normalize_token;
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What the user is training for
///
/// Calorie deltas and macro ratios are configuration (`GoalAdjustmentsConfig`,
/// `MacroRatiosConfig` in the intelligence crate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    /// Caloric deficit
    #[serde(alias = "LOSE_WEIGHT", alias = "WEIGHT_LOSS")]
    LoseWeight,
    /// Caloric surplus
    #[serde(alias = "GAIN_WEIGHT", alias = "WEIGHT_GAIN")]
    GainWeight,
    /// Caloric balance
    #[serde(alias = "MAINTAIN_WEIGHT")]
    MaintainWeight,
    /// Moderate surplus with high protein
    #[serde(alias = "BUILD_MUSCLE")]
    BuildMuscle,
    /// Slight deficit with high carbohydrate
    #[serde(alias = "IMPROVE_ENDURANCE")]
    ImproveEndurance,
    /// Balanced, slight deficit
    #[serde(alias = "GENERAL_FITNESS")]
    GeneralFitness,
}

impl FitnessGoal {
    /// Every goal
    pub const ALL: [Self; 6] = [
        Self::LoseWeight,
        Self::GainWeight,
        Self::MaintainWeight,
        Self::BuildMuscle,
        Self::ImproveEndurance,
        Self::GeneralFitness,
    ];

    /// Human-readable name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::LoseWeight => "Lose Weight",
            Self::GainWeight => "Gain Weight",
            Self::MaintainWeight => "Maintain Weight",
            Self::BuildMuscle => "Build Muscle",
            Self::ImproveEndurance => "Improve Endurance",
            Self::GeneralFitness => "General Fitness",
        }
    }

    /// Coarse category tag used for grouping goals
    #[must_use]
    pub const fn category(self) -> &'static str {
        match self {
            Self::LoseWeight => "weight_loss",
            Self::GainWeight => "weight_gain",
            Self::MaintainWeight => "maintenance",
            Self::BuildMuscle => "muscle_gain",
            Self::ImproveEndurance => "endurance",
            Self::GeneralFitness => "general",
        }
    }

    /// Training emphasis that supports the goal
    #[must_use]
    pub const fn recommended_focus(self) -> &'static [&'static str] {
        match self {
            Self::LoseWeight => &["cardio", "strength"],
            Self::GainWeight => &["strength", "protein"],
            Self::MaintainWeight => &["balanced", "consistency"],
            Self::BuildMuscle => &["strength", "protein", "progressive_overload"],
            Self::ImproveEndurance => &["cardio", "interval_training"],
            Self::GeneralFitness => &["balanced", "variety", "consistency"],
        }
    }

    /// Canonical `snake_case` identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LoseWeight => "lose_weight",
            Self::GainWeight => "gain_weight",
            Self::MaintainWeight => "maintain_weight",
            Self::BuildMuscle => "build_muscle",
            Self::ImproveEndurance => "improve_endurance",
            Self::GeneralFitness => "general_fitness",
        }
    }
}

impl fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FitnessGoal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "lose_weight" | "weight_loss" => Ok(Self::LoseWeight),
            "gain_weight" | "weight_gain" => Ok(Self::GainWeight),
            "maintain_weight" | "maintenance" => Ok(Self::MaintainWeight),
            "build_muscle" | "muscle_gain" => Ok(Self::BuildMuscle),
            "improve_endurance" | "endurance" => Ok(Self::ImproveEndurance),
            "general_fitness" | "general" => Ok(Self::GeneralFitness),
            _ => Err(AppError::invalid_format(format!(
                "Unknown fitness goal '{s}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_canonical_names() {
        for goal in FitnessGoal::ALL {
            assert_eq!(goal.as_str().parse::<FitnessGoal>().unwrap(), goal);
        }
    }

    #[test]
    fn test_serde_accepts_legacy_names() {
        let goal: FitnessGoal = serde_json::from_str("\"WEIGHT_LOSS\"").unwrap();
        assert_eq!(goal, FitnessGoal::LoseWeight);
        assert_eq!(
            serde_json::to_string(&FitnessGoal::ImproveEndurance).unwrap(),
            "\"improve_endurance\""
        );
    }
}
