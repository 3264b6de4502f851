// ABOUTME: Output format abstraction for rendering calculator results
// ABOUTME: Supports compact JSON (default), pretty-printed JSON, and plain text summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! ## Supported Formats
//!
//! - **JSON**: Default format, one line of `camelCase` JSON
//! - **Pretty**: Indented JSON for reading in a terminal
//! - **Text**: Human-readable `label: value` lines
//!
//! ## Usage
//!
//! ```rust,no_run
//! use fitness_metrics::formatters::{format_output, OutputFormat};
//! use fitness_metrics::FitnessCalculator;
//!
//! let calculator = FitnessCalculator::default();
//! if let Ok(result) = calculator.bmi_result(180.0, 75.0) {
//!     if let Ok(output) = format_output(&result, OutputFormat::Text) {
//!         println!("{}", output.data);
//!     }
//! }
//! ```

use fitness_core::errors::{AppError, ErrorCode};
use fitness_intelligence::{
    BmiResult, FitnessMetrics, FitnessRecommendation, MacroSplit, WaterIntakeResult,
};
use serde::Serialize;
use std::fmt::{self, Write};
use std::str::FromStr;
use thiserror::Error;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Compact JSON (default)
    #[default]
    Json,
    /// Indented JSON
    Pretty,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Pretty => "pretty",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            "text" => Ok(Self::Text),
            other => Err(AppError::invalid_format(format!(
                "Unknown output format '{other}', expected json, pretty or text"
            ))),
        }
    }
}

/// Formatted output containing the rendered data and the format used
#[derive(Debug, Clone)]
pub struct FormattedOutput {
    /// The rendered data
    pub data: String,
    /// The format used for rendering
    pub format: OutputFormat,
}

/// Error type for formatting operations
#[derive(Debug, Error)]
#[error("Format error ({format}): {message}")]
pub struct FormatError {
    /// Error message describing what went wrong
    pub message: String,
    /// The format that was being used when the error occurred
    pub format: OutputFormat,
}

impl From<FormatError> for AppError {
    fn from(error: FormatError) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

/// Types with a plain text rendering
pub trait TextRender {
    /// Render as `label: value` lines without a trailing newline
    fn render_text(&self) -> String;
}

/// Render data in the requested format
///
/// # Errors
///
/// Returns `FormatError` if JSON serialization fails
pub fn format_output<T: Serialize + TextRender>(
    data: &T,
    format: OutputFormat,
) -> Result<FormattedOutput, FormatError> {
    let to_error = |e: serde_json::Error| FormatError {
        message: e.to_string(),
        format,
    };

    let data = match format {
        OutputFormat::Json => serde_json::to_string(data).map_err(to_error)?,
        OutputFormat::Pretty => serde_json::to_string_pretty(data).map_err(to_error)?,
        OutputFormat::Text => data.render_text(),
    };

    Ok(FormattedOutput { data, format })
}

impl TextRender for BmiResult {
    fn render_text(&self) -> String {
        format!("BMI: {:.1}\nCategory: {}", self.bmi, self.category)
    }
}

impl TextRender for WaterIntakeResult {
    fn render_text(&self) -> String {
        format!("Daily water intake: {:.0} ml", self.daily_intake_ml)
    }
}

impl TextRender for FitnessMetrics {
    fn render_text(&self) -> String {
        format!(
            "BMR: {:.0} kcal\nDaily calories: {:.0} kcal\nTarget calories: {:.0} kcal\nBMI: {:.1}",
            self.bmr, self.daily_calories, self.target_calories, self.bmi
        )
    }
}

impl TextRender for MacroSplit {
    fn render_text(&self) -> String {
        format!(
            "Protein: {:.0} g\nCarbs: {:.0} g\nFat: {:.0} g",
            self.protein, self.carbs, self.fat
        )
    }
}

impl TextRender for FitnessRecommendation {
    fn render_text(&self) -> String {
        let mut out = format!(
            "BMR: {:.0} kcal\nDaily calorie needs: {:.0} kcal\nTarget calories: {:.0} kcal\n\
             BMI: {:.1} ({})\nHealth status: {}\nDaily water intake: {:.0} ml\n{}\nWorkouts:",
            self.bmr(),
            self.daily_calorie_needs(),
            self.target_calories(),
            self.bmi(),
            self.bmi_category(),
            self.health_status(),
            self.daily_water_intake_ml(),
            self.macro_split().render_text(),
        );
        for workout in self.workout_recommendations() {
            // Writing to a String cannot fail
            let _ = write!(out, "\n  - {workout}");
        }
        out
    }
}

/// Plain number rendering, used for single-value commands such as BMR
impl TextRender for f64 {
    fn render_text(&self) -> String {
        format!("{self:.2}")
    }
}
