// ABOUTME: Plan generation engine: energy, goal, diet, and plan assembly algorithms
// ABOUTME: Extracted from the main crate so the pipeline stays free of I/O concerns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Qawi Intelligence
//!
//! The plan pipeline as four composable stages:
//!
//! 1. [`energy`]: BMR (Mifflin-St Jeor) and TDEE
//! 2. [`goal`]: calorie target for lose/maintain/gain
//! 3. [`diet`]: diet selection by fixed priority and macro grams
//! 4. [`plan_assembler`]: meal and exercise sampling, weekly schedule
//!
//! Every stage is a pure function of its inputs. Randomness is injected by
//! the caller and reference tables are only borrowed.

/// Typed configuration for the pipeline stages
pub mod config;

/// Basal metabolic rate and total daily energy expenditure
pub mod energy;

/// Calorie target from goal and TDEE
pub mod goal;

/// Diet selection and macro conversion
pub mod diet;

/// Meal and exercise sampling and final plan assembly
pub mod plan_assembler;

pub use config::{ConfigError, PlannerConfig};
pub use plan_assembler::{assemble_plan, PlanInputs};
