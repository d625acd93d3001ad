// ABOUTME: Shared fixtures and setup for plan pipeline integration tests
// ABOUTME: Provides quiet test logging, client profiles, and small reference tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `qawi_intelligence`

use std::env;
use std::sync::Once;

use qawi_core::models::{
    ActivityLevel, ClientProfile, ExerciseType, Gender, Goal, ReferenceExercise, ReferenceMeal,
};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Form-default client: 30 year old male, 175 cm, 80 kg
pub fn profile(goal: Goal, activity_level: ActivityLevel) -> ClientProfile {
    ClientProfile {
        name: Some("Test Client".to_owned()),
        age: 30,
        height_cm: 175,
        weight_kg: 80.0,
        gender: Gender::Male,
        goal,
        activity_level,
        dietary_preferences: Vec::new(),
    }
}

pub fn meal(title: &str) -> ReferenceMeal {
    ReferenceMeal {
        title: title.to_owned(),
        description: format!("{title} prepared fresh"),
    }
}

pub fn exercise(name: &str, exercise_type: &str) -> ReferenceExercise {
    ReferenceExercise {
        name: name.to_owned(),
        instructions: format!("Perform {name} with control"),
        exercise_type: ExerciseType::from_str_lossy(exercise_type),
    }
}

pub fn meal_table() -> Vec<ReferenceMeal> {
    vec![
        meal("Oatmeal with Berries"),
        meal("Grilled Chicken Salad"),
        meal("Lentil Soup"),
        meal("Salmon with Quinoa"),
        meal("Greek Yogurt Parfait"),
    ]
}

/// Two exercises per recognised category plus one uncategorised entry
pub fn exercise_table() -> Vec<ReferenceExercise> {
    vec![
        exercise("Jogging", "cardio"),
        exercise("Cycling", "cardio"),
        exercise("Sprint Intervals", "hiit"),
        exercise("Burpees", "hiit"),
        exercise("Kettlebell Complex", "full_body"),
        exercise("Bear Crawl", "full_body"),
        exercise("Back Squat", "strength"),
        exercise("Overhead Press", "strength"),
        exercise("Bicep Curl", "hypertrophy"),
        exercise("Leg Extension", "hypertrophy"),
        exercise("Deadlift", "compound"),
        exercise("Pull-up", "compound"),
        exercise("Hip Mobility Flow", "mobility"),
    ]
}
