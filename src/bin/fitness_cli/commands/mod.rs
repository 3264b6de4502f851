// ABOUTME: Command handlers for fitness-cli
// ABOUTME: Builds profiles from flags, invokes the calculator, and renders the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{Command, ProfileArgs};
use chrono::Local;
use fitness_metrics::errors::AppResult;
use fitness_metrics::formatters::{format_output, OutputFormat, TextRender};
use fitness_metrics::models::Profile;
use fitness_metrics::FitnessCalculator;
use serde::Serialize;
use tracing::debug;

/// Execute one command and return the rendered output
pub fn run(command: &Command, format: OutputFormat) -> AppResult<String> {
    let calculator = FitnessCalculator::from_global();

    match *command {
        Command::Bmi { height, weight } => render(&calculator.bmi_result(height, weight)?, format),
        Command::WaterIntake { weight } => {
            render(&calculator.water_intake_result(weight)?, format)
        }
        Command::Bmr {
            gender,
            weight,
            height,
            age,
        } => render(&calculator.calculate_bmr(gender, weight, height, age)?, format),
        Command::Metrics(ref args) => {
            let profile = build_profile(args)?;
            render(&calculator.calculate_metrics(&profile)?, format)
        }
        Command::Recommend(ref args) => {
            let profile = build_profile(args)?;
            render(&calculator.generate_recommendation(&profile)?, format)
        }
    }
}

fn render<T: Serialize + TextRender>(data: &T, format: OutputFormat) -> AppResult<String> {
    Ok(format_output(data, format)?.data)
}

/// Assemble a profile; absent flags stay absent so the calculator can report them together
fn build_profile(args: &ProfileArgs) -> AppResult<Profile> {
    let mut profile = Profile {
        user_id: None,
        height_cm: args.height,
        weight_kg: args.weight,
        age: args.age,
        gender: args.gender,
        activity_level: args.activity_level,
        fitness_goal: args.fitness_goal,
    };

    if let Some(birth_date) = args.birth_date {
        let today = Local::now().date_naive();
        profile = profile.with_birth_date(birth_date, today)?;
        debug!(%birth_date, age = ?profile.age, "Derived age from birth date");
    }

    Ok(profile)
}
