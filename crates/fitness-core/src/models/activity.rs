// ABOUTME: Activity level categories with their descriptive lookup tables
// ABOUTME: Display names, weekly workout frequency, and static workout guidance per level
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::normalize_token;
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Habitual activity level used to scale BMR into daily calorie needs
///
/// The numeric multiplier for each level is configuration
/// (`ActivityFactorsConfig` in the intelligence crate); this type only carries the
/// fixed descriptive tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    #[serde(alias = "SEDENTARY")]
    Sedentary,
    /// Light exercise 1-3 days/week
    #[serde(alias = "LIGHTLY_ACTIVE")]
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    #[serde(alias = "MODERATELY_ACTIVE")]
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    #[serde(alias = "VERY_ACTIVE")]
    VeryActive,
    /// Very hard exercise or a physical job
    #[serde(alias = "EXTREMELY_ACTIVE")]
    ExtremelyActive,
}

impl ActivityLevel {
    /// Every level, least to most active
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::LightlyActive,
        Self::ModeratelyActive,
        Self::VeryActive,
        Self::ExtremelyActive,
    ];

    /// Human-readable name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Sedentary => "Sedentary",
            Self::LightlyActive => "Lightly Active",
            Self::ModeratelyActive => "Moderately Active",
            Self::VeryActive => "Very Active",
            Self::ExtremelyActive => "Extremely Active",
        }
    }

    /// Short description of what the level means
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Sedentary => "Little or no exercise",
            Self::LightlyActive => "Light exercise 1-3 days/week",
            Self::ModeratelyActive => "Moderate exercise 3-5 days/week",
            Self::VeryActive => "Hard exercise 6-7 days/week",
            Self::ExtremelyActive => "Very hard exercise, physical job",
        }
    }

    /// Recommended number of workouts per week
    #[must_use]
    pub const fn recommended_workout_frequency(self) -> u8 {
        match self {
            Self::Sedentary => 2,
            Self::LightlyActive => 3,
            Self::ModeratelyActive => 4,
            Self::VeryActive => 5,
            Self::ExtremelyActive => 6,
        }
    }

    /// Static workout guidance for this level, in priority order
    #[must_use]
    pub const fn workout_recommendations(self) -> &'static [&'static str] {
        match self {
            Self::Sedentary => &[
                "Start with 10-15 minutes of light walking daily",
                "Add basic bodyweight exercises 2-3 times per week",
                "Focus on building consistency before intensity",
            ],
            Self::LightlyActive => &[
                "Increase to 30 minutes of moderate exercise most days",
                "Add strength training 2 times per week",
                "Try activities like swimming, cycling, or dancing",
            ],
            Self::ModeratelyActive => &[
                "Maintain current activity levels",
                "Add variety with different types of workouts",
                "Consider increasing intensity gradually",
            ],
            Self::VeryActive => &[
                "Focus on specific fitness goals",
                "Incorporate both cardio and strength training",
                "Monitor for overtraining and ensure adequate recovery",
            ],
            Self::ExtremelyActive => &[
                "Periodize training to prevent burnout",
                "Focus on recovery and nutrition optimization",
                "Consider working with a trainer for advanced programming",
            ],
        }
    }

    /// Canonical `snake_case` identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::LightlyActive => "lightly_active",
            Self::ModeratelyActive => "moderately_active",
            Self::VeryActive => "very_active",
            Self::ExtremelyActive => "extremely_active",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "sedentary" => Ok(Self::Sedentary),
            "lightly_active" | "light" => Ok(Self::LightlyActive),
            "moderately_active" | "moderate" => Ok(Self::ModeratelyActive),
            "very_active" => Ok(Self::VeryActive),
            "extremely_active" | "extra_active" => Ok(Self::ExtremelyActive),
            _ => Err(AppError::invalid_format(format!(
                "Unknown activity level '{s}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_common_spellings() {
        assert_eq!(
            "MODERATELY_ACTIVE".parse::<ActivityLevel>().unwrap(),
            ActivityLevel::ModeratelyActive
        );
        assert_eq!(
            "Lightly Active".parse::<ActivityLevel>().unwrap(),
            ActivityLevel::LightlyActive
        );
        assert_eq!(
            "extremely-active".parse::<ActivityLevel>().unwrap(),
            ActivityLevel::ExtremelyActive
        );
        assert!("couch".parse::<ActivityLevel>().is_err());
    }

    #[test]
    fn test_every_level_has_three_recommendations() {
        for level in ActivityLevel::ALL {
            assert_eq!(level.workout_recommendations().len(), 3, "{level}");
        }
    }

    #[test]
    fn test_workout_frequency_increases_with_activity() {
        let frequencies: Vec<u8> = ActivityLevel::ALL
            .iter()
            .map(|level| level.recommended_workout_frequency())
            .collect();
        assert!(frequencies.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
