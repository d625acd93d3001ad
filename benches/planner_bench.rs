// ABOUTME: Criterion benchmarks for the plan pipeline
// ABOUTME: Measures nutrition target math, exercise sampling, and full plan generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for plan generation.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::path::Path;
use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use khaleek_qawi::config::PlannerConfig;
use khaleek_qawi::intelligence::diet::recommend_diet;
use khaleek_qawi::intelligence::energy::estimate_energy;
use khaleek_qawi::intelligence::goal::target_calories;
use khaleek_qawi::intelligence::plan_assembler::{exercise_pool, sample_session};
use khaleek_qawi::models::{ActivityLevel, ClientProfile, Gender, Goal};
use khaleek_qawi::plan_service::PlanService;
use khaleek_qawi::reference_data::ReferenceTables;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn bundled_tables() -> ReferenceTables {
    ReferenceTables::load_dir(&Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
        .expect("bundled reference tables")
}

fn bench_profile(goal: Goal, activity_level: ActivityLevel) -> ClientProfile {
    ClientProfile {
        name: None,
        age: 34,
        height_cm: 170,
        weight_kg: 72.5,
        gender: Gender::Female,
        goal,
        activity_level,
        dietary_preferences: vec!["low_carb".to_owned(), "mediterranean".to_owned()],
    }
}

fn bench_nutrition_targets(c: &mut Criterion) {
    let config = PlannerConfig::default();
    let profile = bench_profile(Goal::Lose, ActivityLevel::Active);

    c.bench_function("nutrition_targets", |b| {
        b.iter(|| {
            let energy = estimate_energy(
                black_box(&profile),
                &config.bmr,
                &config.activity_factors,
            );
            let calories = target_calories(energy.tdee, profile.goal, &config.goal_adjustment);
            recommend_diet(black_box(&profile.dietary_preferences), calories)
        });
    });
}

fn bench_exercise_sampling(c: &mut Criterion) {
    let tables = bundled_tables();
    let mut group = c.benchmark_group("exercise_sampling");

    for goal in [Goal::Lose, Goal::Maintain, Goal::Gain] {
        let pool = exercise_pool(tables.exercises(), goal);
        group.throughput(Throughput::Elements(pool.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(goal), &pool, |b, pool| {
            let mut rng = ChaCha8Rng::seed_from_u64(11);
            b.iter(|| sample_session(black_box(pool), &mut rng));
        });
    }

    group.finish();
}

fn bench_plan_generation(c: &mut Criterion) {
    let service = PlanService::new(Arc::new(bundled_tables()), PlannerConfig::default());
    let mut group = c.benchmark_group("plan_generation");

    for level in [ActivityLevel::Sedentary, ActivityLevel::Moderate, ActivityLevel::Very] {
        let profile = bench_profile(Goal::Gain, level);
        group.bench_with_input(BenchmarkId::from_parameter(level), &profile, |b, profile| {
            b.iter(|| service.generate(black_box(profile), Some(42)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_nutrition_targets,
    bench_exercise_sampling,
    bench_plan_generation
);
criterion_main!(benches);
