// ABOUTME: Plan assembly combining calorie targets, diet, meals, and weekly workouts
// ABOUTME: Goal-filtered exercise pools and bounded sampling from borrowed reference tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Plan Assembler
//!
//! Runs the energy, goal, and diet stages, then samples meals and exercises
//! to build a [`GeneratedPlan`]. The random source and the generation time
//! are supplied by the caller so that a fixed seed and clock reproduce the
//! same plan.
//!
//! Draw order is fixed: the main meals, then the snack, then each training
//! day's exercises in day order.

use chrono::{DateTime, Utc};
use qawi_core::constants::plan::{ADVISORY_NOTE, MAX_EXERCISES_PER_SESSION, MEALS_PER_PLAN};
use qawi_core::errors::{AppError, AppResult};
use qawi_core::models::{
    ActivityLevel, ClientProfile, ExerciseType, GeneratedPlan, Goal, PlanSummary,
    ReferenceExercise, ReferenceMeal, WorkoutDay,
};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::config::{PlannerConfig, ScheduleConfig};
use crate::diet::recommend_diet;
use crate::energy::estimate_energy;
use crate::goal::target_calories;

/// Borrowed inputs for one plan
#[derive(Debug, Clone, Copy)]
pub struct PlanInputs<'a> {
    /// Client biometrics and preferences
    pub profile: &'a ClientProfile,
    /// Meal table
    pub meals: &'a [ReferenceMeal],
    /// Exercise table
    pub exercises: &'a [ReferenceExercise],
}

/// Whether an exercise category belongs in the pool for a goal
#[must_use]
pub const fn goal_allows(goal: Goal, exercise_type: &ExerciseType) -> bool {
    match goal {
        Goal::Lose => matches!(
            exercise_type,
            ExerciseType::Cardio | ExerciseType::Hiit | ExerciseType::FullBody
        ),
        Goal::Gain => matches!(
            exercise_type,
            ExerciseType::Strength | ExerciseType::Hypertrophy | ExerciseType::Compound
        ),
        Goal::Maintain => true,
    }
}

/// Exercises eligible for a goal, in table order
#[must_use]
pub fn exercise_pool(exercises: &[ReferenceExercise], goal: Goal) -> Vec<&ReferenceExercise> {
    exercises
        .iter()
        .filter(|exercise| goal_allows(goal, &exercise.exercise_type))
        .collect()
}

/// Training sessions per week for an activity level
///
/// Unrecognized levels get the high-activity count.
#[must_use]
pub const fn days_per_week(level: ActivityLevel, config: &ScheduleConfig) -> u8 {
    match level {
        ActivityLevel::Sedentary | ActivityLevel::Light => config.low_activity_days,
        ActivityLevel::Moderate => config.moderate_activity_days,
        ActivityLevel::Active | ActivityLevel::Very | ActivityLevel::Unrecognized => {
            config.high_activity_days
        }
    }
}

/// Session length in minutes for a goal
#[must_use]
pub const fn session_minutes(goal: Goal, config: &ScheduleConfig) -> u32 {
    match goal {
        Goal::Lose => config.lose_session_minutes,
        Goal::Maintain | Goal::Gain => config.default_session_minutes,
    }
}

/// Draw `count` meals uniformly with replacement
///
/// Returns `None` when the table is empty.
pub fn sample_meals<R: Rng + ?Sized>(
    meals: &[ReferenceMeal],
    count: usize,
    rng: &mut R,
) -> Option<Vec<ReferenceMeal>> {
    let mut picked = Vec::with_capacity(count);
    for _ in 0..count {
        picked.push(meals.choose(&mut *rng)?.clone());
    }
    Some(picked)
}

/// Draw up to [`MAX_EXERCISES_PER_SESSION`] distinct exercises from a pool
///
/// Never requests more than the pool holds. An empty pool yields an empty
/// session.
pub fn sample_session<R: Rng + ?Sized>(
    pool: &[&ReferenceExercise],
    rng: &mut R,
) -> Vec<ReferenceExercise> {
    let amount = MAX_EXERCISES_PER_SESSION.min(pool.len());
    pool.choose_multiple(rng, amount)
        .map(|exercise| (*exercise).clone())
        .collect()
}

/// Build a complete plan for one client
///
/// # Errors
///
/// Returns `ErrorCode::ResourceUnavailable` if the meal table is empty
pub fn assemble_plan<R: Rng + ?Sized>(
    inputs: &PlanInputs<'_>,
    config: &PlannerConfig,
    rng: &mut R,
    generated_at: DateTime<Utc>,
) -> AppResult<GeneratedPlan> {
    let profile = inputs.profile;

    let energy = estimate_energy(profile, &config.bmr, &config.activity_factors);
    let calories = target_calories(energy.tdee, profile.goal, &config.goal_adjustment);
    let diet = recommend_diet(&profile.dietary_preferences, calories);
    debug!(
        bmr = energy.bmr,
        tdee = energy.tdee,
        calories,
        implied_kcal = diet.grams.implied_kcal(),
        diet = diet.diet.as_str(),
        "Computed nutrition targets"
    );

    let meals = sample_meals(inputs.meals, MEALS_PER_PLAN, rng)
        .ok_or_else(|| AppError::resource_unavailable("Meal table is empty"))?;
    let snack = sample_meals(inputs.meals, 1, rng)
        .and_then(|mut drawn| drawn.pop())
        .ok_or_else(|| AppError::resource_unavailable("Meal table is empty"))?;

    let pool = exercise_pool(inputs.exercises, profile.goal);
    let days = days_per_week(profile.activity_level, &config.schedule);
    let duration_min = session_minutes(profile.goal, &config.schedule);
    debug!(
        pool_size = pool.len(),
        days,
        duration_min,
        goal = profile.goal.as_str(),
        "Scheduling workouts"
    );

    let workouts = (1..=days)
        .map(|day| WorkoutDay {
            day,
            duration_min,
            exercises: sample_session(&pool, &mut *rng),
        })
        .collect();

    Ok(GeneratedPlan {
        generated_at,
        summary: PlanSummary {
            calories,
            macros: diet.grams,
            diet: diet.diet,
            days_per_week: days,
            goal: profile.goal,
        },
        meals,
        snack,
        workouts,
        notes: ADVISORY_NOTE.to_owned(),
    })
}
