// ABOUTME: Core types and constants for the fitness metrics calculator
// ABOUTME: Foundation crate with error handling, domain models, and physiological constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fitness Core
//!
//! Foundation crate providing shared types and constants for the fitness metrics
//! workspace. This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Physiological constants (energy density, hydration, BMI cut-offs)
//! - **models**: Biometric profile and the categorical inputs of every formula

/// Unified error handling system with standard error codes and HTTP statuses
pub mod errors;

/// Physiological constants organized by domain
pub mod constants;

/// Domain models (Profile, Gender, `ActivityLevel`, `FitnessGoal`, `BmiCategory`)
pub mod models;
