// ABOUTME: Biometric profile read from the user-profile store and its completeness rules
// ABOUTME: Optional fields, typed accessors, and the validated CompleteProfile view
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{normalize_token, ActivityLevel, FitnessGoal};
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Gender used to select the BMR constant term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male
    #[serde(alias = "MALE")]
    Male,
    /// Female
    #[serde(alias = "FEMALE")]
    Female,
    /// Other or unspecified; formulas use the mean of the male and female variants
    #[serde(alias = "OTHER", alias = "PREFER_NOT_TO_SAY")]
    Other,
}

impl Gender {
    /// Canonical `snake_case` identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_token(s).as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            "other" | "prefer_not_to_say" => Ok(Self::Other),
            _ => Err(AppError::invalid_format(format!("Unknown gender '{s}'"))),
        }
    }
}

/// Full years elapsed between `birth_date` and `as_of`
///
/// # Errors
///
/// Returns `InvalidInput` if the birth date lies after `as_of`
pub fn age_on(birth_date: NaiveDate, as_of: NaiveDate) -> AppResult<u32> {
    as_of.years_since(birth_date).ok_or_else(|| {
        AppError::invalid_input(format!(
            "Birth date {birth_date} is after reference date {as_of}"
        ))
        .with_resource_id("age")
    })
}

/// Biometric profile as stored for a user
///
/// Every field is optional because users fill in their profile incrementally. A
/// profile is complete once all six biometric fields are present; composite
/// calculations require a complete profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Owner of the profile, used only for log and error context
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    /// Height in centimeters
    #[serde(default, alias = "height")]
    pub height_cm: Option<f64>,
    /// Weight in kilograms
    #[serde(default, alias = "weight")]
    pub weight_kg: Option<f64>,
    /// Age in full years
    #[serde(default)]
    pub age: Option<u32>,
    /// Gender
    #[serde(default)]
    pub gender: Option<Gender>,
    /// Habitual activity level
    #[serde(default)]
    pub activity_level: Option<ActivityLevel>,
    /// Training goal
    #[serde(default)]
    pub fitness_goal: Option<FitnessGoal>,
}

// Field names as reported by missing_fields and missing_field errors
const FIELD_HEIGHT: &str = "height_cm";
const FIELD_WEIGHT: &str = "weight_kg";
const FIELD_AGE: &str = "age";
const FIELD_GENDER: &str = "gender";
const FIELD_ACTIVITY: &str = "activity_level";
const FIELD_GOAL: &str = "fitness_goal";

impl Profile {
    /// Empty profile
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the owning user
    #[must_use]
    pub fn with_user_id(mut self, user_id: Uuid) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Set height in centimeters
    #[must_use]
    pub fn with_height_cm(mut self, height_cm: f64) -> Self {
        self.height_cm = Some(height_cm);
        self
    }

    /// Set weight in kilograms
    #[must_use]
    pub fn with_weight_kg(mut self, weight_kg: f64) -> Self {
        self.weight_kg = Some(weight_kg);
        self
    }

    /// Set age in years
    #[must_use]
    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    /// Derive age from a birth date relative to `as_of`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the birth date lies after `as_of`
    pub fn with_birth_date(mut self, birth_date: NaiveDate, as_of: NaiveDate) -> AppResult<Self> {
        self.age = Some(age_on(birth_date, as_of)?);
        Ok(self)
    }

    /// Set gender
    #[must_use]
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    /// Set activity level
    #[must_use]
    pub fn with_activity_level(mut self, activity_level: ActivityLevel) -> Self {
        self.activity_level = Some(activity_level);
        self
    }

    /// Set fitness goal
    #[must_use]
    pub fn with_fitness_goal(mut self, fitness_goal: FitnessGoal) -> Self {
        self.fitness_goal = Some(fitness_goal);
        self
    }

    /// Names of the biometric fields that are not set, in declaration order
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            (FIELD_HEIGHT, self.height_cm.is_none()),
            (FIELD_WEIGHT, self.weight_kg.is_none()),
            (FIELD_AGE, self.age.is_none()),
            (FIELD_GENDER, self.gender.is_none()),
            (FIELD_ACTIVITY, self.activity_level.is_none()),
            (FIELD_GOAL, self.fitness_goal.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, missing)| missing.then_some(name))
        .collect()
    }

    /// Whether every biometric field is set
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Height, or `MissingRequiredField`
    ///
    /// # Errors
    ///
    /// Returns an error if height is not set
    pub fn require_height_cm(&self) -> AppResult<f64> {
        self.require(self.height_cm, FIELD_HEIGHT)
    }

    /// Weight, or `MissingRequiredField`
    ///
    /// # Errors
    ///
    /// Returns an error if weight is not set
    pub fn require_weight_kg(&self) -> AppResult<f64> {
        self.require(self.weight_kg, FIELD_WEIGHT)
    }

    /// Age, or `MissingRequiredField`
    ///
    /// # Errors
    ///
    /// Returns an error if age is not set
    pub fn require_age(&self) -> AppResult<u32> {
        self.require(self.age, FIELD_AGE)
    }

    /// Gender, or `MissingRequiredField`
    ///
    /// # Errors
    ///
    /// Returns an error if gender is not set
    pub fn require_gender(&self) -> AppResult<Gender> {
        self.require(self.gender, FIELD_GENDER)
    }

    /// Activity level, or `MissingRequiredField`
    ///
    /// # Errors
    ///
    /// Returns an error if activity level is not set
    pub fn require_activity_level(&self) -> AppResult<ActivityLevel> {
        self.require(self.activity_level, FIELD_ACTIVITY)
    }

    /// Fitness goal, or `MissingRequiredField`
    ///
    /// # Errors
    ///
    /// Returns an error if fitness goal is not set
    pub fn require_fitness_goal(&self) -> AppResult<FitnessGoal> {
        self.require(self.fitness_goal, FIELD_GOAL)
    }

    /// Validated view with every field present
    ///
    /// # Errors
    ///
    /// Returns `IncompleteProfile` listing every absent field
    pub fn complete(&self) -> AppResult<CompleteProfile> {
        match (
            self.height_cm,
            self.weight_kg,
            self.age,
            self.gender,
            self.activity_level,
            self.fitness_goal,
        ) {
            (
                Some(height_cm),
                Some(weight_kg),
                Some(age),
                Some(gender),
                Some(activity_level),
                Some(fitness_goal),
            ) => Ok(CompleteProfile {
                user_id: self.user_id,
                height_cm,
                weight_kg,
                age,
                gender,
                activity_level,
                fitness_goal,
            }),
            _ => Err(self.attach_user(AppError::incomplete_profile(&self.missing_fields()))),
        }
    }

    fn require<T>(&self, value: Option<T>, field: &'static str) -> AppResult<T> {
        value.ok_or_else(|| self.attach_user(AppError::missing_field(field)))
    }

    fn attach_user(&self, error: AppError) -> AppError {
        match self.user_id {
            Some(user_id) => error.with_user_id(user_id),
            None => error,
        }
    }
}

/// A profile with every biometric field present
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompleteProfile {
    /// Owner of the profile
    pub user_id: Option<Uuid>,
    /// Height in centimeters
    pub height_cm: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Age in full years
    pub age: u32,
    /// Gender
    pub gender: Gender,
    /// Habitual activity level
    pub activity_level: ActivityLevel,
    /// Training goal
    pub fitness_goal: FitnessGoal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_missing_fields_in_declaration_order() {
        let profile = Profile::new().with_height_cm(180.0).with_age(30);
        assert_eq!(
            profile.missing_fields(),
            vec!["weight_kg", "gender", "activity_level", "fitness_goal"]
        );
        assert!(!profile.is_complete());
    }

    #[test]
    fn test_complete_reports_every_missing_field() {
        let error = Profile::new().with_weight_kg(70.0).complete().unwrap_err();
        assert_eq!(error.code, ErrorCode::IncompleteProfile);
        assert_eq!(
            error.context.details["missing_fields"].as_array().unwrap().len(),
            5
        );
    }

    #[test]
    fn test_require_returns_missing_field() {
        let error = Profile::new().require_gender().unwrap_err();
        assert_eq!(error.code, ErrorCode::MissingRequiredField);
        assert_eq!(error.context.resource_id.as_deref(), Some("gender"));
    }

    #[test]
    fn test_age_is_birthday_aware() {
        let birth = date(1990, 6, 15);
        assert_eq!(age_on(birth, date(2020, 6, 14)).unwrap(), 29);
        assert_eq!(age_on(birth, date(2020, 6, 15)).unwrap(), 30);
        assert!(age_on(birth, date(1989, 1, 1)).is_err());
    }

    #[test]
    fn test_profile_deserializes_store_field_names() {
        let profile: Profile = serde_json::from_str(
            r#"{"height":180.0,"weight":80.0,"age":30,"gender":"MALE",
                "activityLevel":"MODERATELY_ACTIVE","fitnessGoal":"BUILD_MUSCLE"}"#,
        )
        .unwrap();
        assert!(profile.is_complete());
        assert_eq!(profile.gender, Some(Gender::Male));
    }
}
