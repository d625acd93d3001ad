// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, CSV table fixtures, and client profiles
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `khaleek_qawi`

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Once};

use khaleek_qawi::config::PlannerConfig;
use khaleek_qawi::models::{ActivityLevel, ClientProfile, Gender, Goal};
use khaleek_qawi::plan_service::PlanService;
use khaleek_qawi::reference_data::ReferenceTables;
use tempfile::TempDir;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

pub const MEALS_CSV: &str = "\
title,description
Overnight Oats,Oats soaked in milk with berries
Chicken Salad,\"Chicken, greens and olive oil\"
Lentil Soup,Red lentils with cumin
";

pub const EXERCISES_CSV: &str = "\
name,instructions,type
Brisk Walking,Walk briskly for 30 minutes,cardio
Burpees,10 reps per round,hiit
Thrusters,Front squat into press,full_body
Back Squat,5 sets of 5,strength
Bicep Curl,3 sets of 12,hypertrophy
Deadlift,3 sets of 5,compound
Pull-Up,4 sets,compound
";

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

/// Temporary directory holding a meal and an exercise table
pub struct TableFixture {
    pub dir: TempDir,
    pub meals_path: PathBuf,
    pub exercises_path: PathBuf,
}

impl TableFixture {
    pub fn new(meals_csv: &str, exercises_csv: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let meals_path = dir.path().join("meals.csv");
        let exercises_path = dir.path().join("exercises.csv");
        fs::write(&meals_path, meals_csv).unwrap();
        fs::write(&exercises_path, exercises_csv).unwrap();
        Self {
            dir,
            meals_path,
            exercises_path,
        }
    }

    pub fn standard() -> Self {
        Self::new(MEALS_CSV, EXERCISES_CSV)
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn load(&self) -> ReferenceTables {
        ReferenceTables::load(&self.meals_path, &self.exercises_path).unwrap()
    }
}

/// Service over the standard fixture tables with default planner settings
pub fn standard_service() -> PlanService {
    init_test_logging();
    let tables = TableFixture::standard().load();
    PlanService::new(Arc::new(tables), PlannerConfig::default())
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

/// Directory containing the bundled reference tables
pub fn bundled_data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}
