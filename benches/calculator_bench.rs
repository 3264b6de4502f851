// ABOUTME: Criterion benchmarks for the fitness metrics calculator
// ABOUTME: Measures single formulas, full recommendations, and parallel batch evaluation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the fitness metrics calculator.
//!
//! Compares sequential and rayon-backed batch evaluation across profile counts.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fitness_metrics::models::{ActivityLevel, FitnessGoal, Gender, Profile};
use fitness_metrics::{CalculatorConfig, FitnessCalculator};

/// Deterministic spread of complete profiles
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn generate_profiles(count: usize) -> Vec<Profile> {
    (0..count)
        .map(|index| {
            let gender = match index % 3 {
                0 => Gender::Male,
                1 => Gender::Female,
                _ => Gender::Other,
            };
            Profile::new()
                .with_height_cm(150.0 + ((index * 7) % 50) as f64)
                .with_weight_kg(50.0 + ((index * 13) % 70) as f64)
                .with_age(18 + ((index * 3) % 60) as u32)
                .with_gender(gender)
                .with_activity_level(ActivityLevel::ALL[index % ActivityLevel::ALL.len()])
                .with_fitness_goal(FitnessGoal::ALL[index % FitnessGoal::ALL.len()])
        })
        .collect()
}

fn bench_single_formulas(c: &mut Criterion) {
    let mut group = c.benchmark_group("formulas");
    let calculator = FitnessCalculator::new(CalculatorConfig::default());

    group.bench_function("bmi", |b| {
        b.iter(|| calculator.calculate_bmi(black_box(180.0), black_box(75.0)));
    });
    group.bench_function("bmr", |b| {
        b.iter(|| {
            calculator.calculate_bmr(
                black_box(Gender::Female),
                black_box(62.0),
                black_box(168.0),
                black_box(34),
            )
        });
    });
    group.bench_function("macro_split", |b| {
        b.iter(|| calculator.calculate_macro_split(black_box(2250.0), black_box(FitnessGoal::BuildMuscle)));
    });

    group.finish();
}

fn bench_recommendation(c: &mut Criterion) {
    let calculator = FitnessCalculator::new(CalculatorConfig::default());
    let profile = generate_profiles(1).remove(0);

    c.bench_function("generate_recommendation", |b| {
        b.iter(|| calculator.generate_recommendation(black_box(&profile)));
    });
}

/// Sequential versus parallel evaluation of profile batches
#[allow(clippy::cast_possible_truncation)]
fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let calculator = FitnessCalculator::new(CalculatorConfig::default());

    for count in [10, 1_000, 10_000] {
        let profiles = generate_profiles(count);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("sequential", count), &profiles, |b, profiles| {
            b.iter(|| {
                profiles
                    .iter()
                    .map(|profile| calculator.generate_recommendation(profile))
                    .collect::<Vec<_>>()
            });
        });
        group.bench_with_input(BenchmarkId::new("parallel", count), &profiles, |b, profiles| {
            b.iter(|| calculator.generate_recommendations_batch(black_box(profiles)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_formulas, bench_recommendation, bench_batch);
criterion_main!(benches);
