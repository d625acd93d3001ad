// ABOUTME: Configuration management module for process and planner settings
// ABOUTME: Re-exports environment config and the planner's tunable parameters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for Khaleek Qawi
//!
//! - **Environment**: data locations, seed, output format, and log level
//! - **Planner**: BMR coefficients, activity factors, goal adjustments, and
//!   schedule shape (lives in `qawi-intelligence`)

/// Environment and process configuration
pub mod environment;

pub use environment::{AppConfig, DataConfig, Environment, LogLevel, DEFAULT_DATA_DIR};
pub use qawi_intelligence::config::{
    ActivityFactorsConfig, BmrConfig, ConfigError, GoalAdjustmentConfig, PlannerConfig,
    ScheduleConfig,
};
