// ABOUTME: fitness-cli - command-line front end for the fitness metrics calculator
// ABOUTME: Parses profile flags, runs one calculation, and prints the result in the chosen format
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Body mass index and WHO category
//! fitness-cli bmi --height 180 --weight 75
//!
//! # Daily water intake
//! fitness-cli water-intake --weight 70 --format text
//!
//! # Basal metabolic rate (Mifflin-St Jeor)
//! fitness-cli bmr --gender female --weight 60 --height 165 --age 28
//!
//! # BMR, daily calories, target calories, and BMI for a full profile
//! fitness-cli metrics --height 180 --weight 80 --age 30 --gender male \
//!     --activity-level moderately_active --fitness-goal lose_weight
//!
//! # Full recommendation, age derived from a birth date
//! fitness-cli recommend --height 165 --weight 60 --birth-date 1994-05-17 --gender female \
//!     --activity-level lightly_active --fitness-goal build_muscle --format pretty
//! ```

mod commands;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use fitness_metrics::errors::ErrorResponse;
use fitness_metrics::formatters::OutputFormat;
use fitness_metrics::logging::LoggingConfig;
use fitness_metrics::models::{ActivityLevel, FitnessGoal, Gender};
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "fitness-cli",
    version,
    about = "Fitness metrics calculator",
    long_about = "Computes BMI, BMR, daily calorie needs, goal calorie targets, macro splits, and water intake from a biometric profile."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format (json, pretty, text)
    #[arg(long, global = true, default_value = "json")]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Body mass index and its WHO category
    Bmi {
        /// Height in centimeters
        #[arg(long)]
        height: f64,

        /// Weight in kilograms
        #[arg(long)]
        weight: f64,
    },

    /// Recommended daily water intake in millilitres
    WaterIntake {
        /// Weight in kilograms
        #[arg(long)]
        weight: f64,
    },

    /// Basal metabolic rate (kcal/day)
    Bmr {
        /// Gender (male, female, other)
        #[arg(long)]
        gender: Gender,

        /// Weight in kilograms
        #[arg(long)]
        weight: f64,

        /// Height in centimeters
        #[arg(long)]
        height: f64,

        /// Age in years
        #[arg(long)]
        age: u32,
    },

    /// BMR, daily calories, target calories, and BMI
    Metrics(ProfileArgs),

    /// Full fitness recommendation
    Recommend(ProfileArgs),
}

/// Biometric profile flags shared by the composite commands
#[derive(Args)]
struct ProfileArgs {
    /// Height in centimeters
    #[arg(long)]
    height: Option<f64>,

    /// Weight in kilograms
    #[arg(long)]
    weight: Option<f64>,

    /// Age in years
    #[arg(long, conflicts_with = "birth_date")]
    age: Option<u32>,

    /// Birth date (YYYY-MM-DD); age is computed against today's date
    #[arg(long)]
    birth_date: Option<NaiveDate>,

    /// Gender (male, female, other)
    #[arg(long)]
    gender: Option<Gender>,

    /// Activity level (sedentary, lightly-active, moderately-active, very-active, extremely-active)
    #[arg(long)]
    activity_level: Option<ActivityLevel>,

    /// Fitness goal (lose-weight, gain-weight, maintain-weight, build-muscle, improve-endurance, general-fitness)
    #[arg(long)]
    fitness_goal: Option<FitnessGoal>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = LoggingConfig::from_env().with_verbose(cli.verbose).init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    match commands::run(&cli.command, cli.format) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            let exit = if error.code.is_client_error() { 2 } else { 1 };
            let response = ErrorResponse::from(error);
            match serde_json::to_string(&response) {
                Ok(body) => eprintln!("{body}"),
                Err(_) => eprintln!("{}", response.error.message),
            }
            ExitCode::from(exit)
        }
    }
}
