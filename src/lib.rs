// ABOUTME: Main library entry point for the Khaleek Qawi plan generator
// ABOUTME: Wires reference data, configuration, logging, and output formats around the plan pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Khaleek Qawi
//!
//! Demo personalization tool producing a daily calorie target, a diet with
//! macro targets, and a sampled week of meals and workouts for one client.
//!
//! ## Architecture
//!
//! - **`qawi-core`**: errors, constants, and data models
//! - **`qawi-intelligence`**: the energy, goal, diet, and assembly stages
//! - this crate: CSV reference tables, environment configuration, logging,
//!   output formatting, and the [`plan_service::PlanService`] used by the CLI
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! use khaleek_qawi::errors::AppResult;
//! use khaleek_qawi::models::{ActivityLevel, ClientProfile, Gender, Goal};
//! use khaleek_qawi::plan_service::PlanService;
//! use khaleek_qawi::reference_data::ReferenceTables;
//!
//! fn main() -> AppResult<()> {
//!     let tables = Arc::new(ReferenceTables::load_dir(Path::new("data"))?);
//!     let service = PlanService::with_global_config(tables);
//!     let profile = ClientProfile {
//!         name: None,
//!         age: 30,
//!         height_cm: 175,
//!         weight_kg: 80.0,
//!         gender: Gender::Male,
//!         goal: Goal::Maintain,
//!         activity_level: ActivityLevel::Moderate,
//!         dietary_preferences: vec!["mediterranean".to_owned()],
//!     };
//!     let plan = service.generate(&profile, Some(7))?;
//!     println!("{} kcal, {} days", plan.summary.calories, plan.summary.days_per_week);
//!     Ok(())
//! }
//! ```

/// Process configuration and planner parameters
pub mod config;

/// Plan output formats (JSON, text)
pub mod formatters;

/// Structured logging setup
pub mod logging;

/// Plan generation service
pub mod plan_service;

/// Meal and exercise table loading
pub mod reference_data;

pub use qawi_core::{constants, errors, models};
pub use qawi_intelligence as intelligence;
