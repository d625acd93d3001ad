// ABOUTME: Planner configuration container with validation and environment overrides
// ABOUTME: Orchestrates nutrition and schedule configs and provides a global instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Planner Configuration Module
//!
//! Defaults reproduce the reference formulas exactly. A small set of
//! coaching parameters can be overridden through environment variables:
//!
//! | Variable | Field |
//! |---|---|
//! | `QAWI_LOSE_DEFICIT_KCAL` | `goal_adjustment.lose_deficit_kcal` |
//! | `QAWI_GAIN_SURPLUS_KCAL` | `goal_adjustment.gain_surplus_kcal` |
//! | `QAWI_CALORIE_FLOOR_KCAL` | `goal_adjustment.calorie_floor_kcal` (>= 1000) |
//! | `QAWI_LOSE_SESSION_MINUTES` | `schedule.lose_session_minutes` |
//! | `QAWI_DEFAULT_SESSION_MINUTES` | `schedule.default_session_minutes` |

/// Configuration error types
pub mod error;
/// BMR, activity factor, and goal adjustment settings
pub mod nutrition;
/// Weekly schedule settings
pub mod schedule;

pub use error::ConfigError;
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, GoalAdjustmentConfig, MIN_SAFE_CALORIE_FLOOR_KCAL,
};
pub use schedule::ScheduleConfig;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static PLANNER_CONFIG: OnceLock<PlannerConfig> = OnceLock::new();

/// Main planner configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlannerConfig {
    /// Mifflin-St Jeor coefficients
    pub bmr: BmrConfig,
    /// TDEE multipliers per activity level
    pub activity_factors: ActivityFactorsConfig,
    /// Calorie adjustments per goal
    pub goal_adjustment: GoalAdjustmentConfig,
    /// Weekly schedule shape
    pub schedule: ScheduleConfig,
}

impl PlannerConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        PLANNER_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load planner config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` found in any section
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bmr.msj_weight_coef <= 0.0 || self.bmr.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }
        self.activity_factors.validate()?;
        self.goal_adjustment.validate()?;
        self.schedule.validate()?;
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: {val}")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            "QAWI_LOSE_DEFICIT_KCAL",
            &mut self.goal_adjustment.lose_deficit_kcal,
        )?;
        Self::apply_env_var(
            "QAWI_GAIN_SURPLUS_KCAL",
            &mut self.goal_adjustment.gain_surplus_kcal,
        )?;
        Self::apply_env_var(
            "QAWI_CALORIE_FLOOR_KCAL",
            &mut self.goal_adjustment.calorie_floor_kcal,
        )?;
        Self::apply_env_var(
            "QAWI_LOSE_SESSION_MINUTES",
            &mut self.schedule.lose_session_minutes,
        )?;
        Self::apply_env_var(
            "QAWI_DEFAULT_SESSION_MINUTES",
            &mut self.schedule.default_session_minutes,
        )?;
        Ok(self)
    }
}
