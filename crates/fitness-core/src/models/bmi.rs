// ABOUTME: WHO body mass index classification
// ABOUTME: Maps a BMI value to its category and a plain-language health status
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::bmi::{NORMAL_UPPER, OVERWEIGHT_UPPER, UNDERWEIGHT_UPPER};
use serde::{Deserialize, Serialize};
use std::fmt;

/// WHO adult BMI category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI in [18.5, 25)
    Normal,
    /// BMI in [25, 30)
    Overweight,
    /// BMI of 30 or more
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value. Each bound is exclusive on the upper side, so 18.5 is
    /// `Normal` and 30.0 is `Obese`.
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < UNDERWEIGHT_UPPER {
            Self::Underweight
        } else if bmi < NORMAL_UPPER {
            Self::Normal
        } else if bmi < OVERWEIGHT_UPPER {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// Category label as shown to users
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }

    /// Plain-language guidance for the category
    #[must_use]
    pub const fn health_status(self) -> &'static str {
        match self {
            Self::Underweight => {
                "Consider consulting a healthcare provider about healthy weight gain"
            }
            Self::Normal => "Maintain current healthy weight range",
            Self::Overweight => "Consider moderate calorie reduction and increased activity",
            Self::Obese => "Consult healthcare provider for comprehensive weight management plan",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
