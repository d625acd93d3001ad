// ABOUTME: Core data models for the plan generator
// ABOUTME: Client profile, reference rows, diet keys, and generated plan definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Client biometrics, goal, activity level, and preferences
pub mod profile;

/// Rows of the read-only meal and exercise tables
pub mod reference;

/// Diet keys, priority order, and macro splits
pub mod diet;

/// The generated plan returned to callers
pub mod plan;

pub use diet::{DietKey, MacroSplit, DIET_PRIORITY};
pub use plan::{GeneratedPlan, MacroGrams, PlanSummary, WorkoutDay};
pub use profile::{ActivityLevel, ClientProfile, Gender, Goal};
pub use reference::{ExerciseType, ReferenceExercise, ReferenceMeal};
