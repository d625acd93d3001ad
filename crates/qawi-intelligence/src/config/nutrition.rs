// ABOUTME: Nutrition configuration for energy estimation and calorie targets
// ABOUTME: Configures BMR coefficients, activity multipliers, and goal adjustments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Configuration
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010), Exercise Physiology

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Lowest calorie floor the planner will accept for weight loss
pub const MIN_SAFE_CALORIE_FLOOR_KCAL: u32 = 1000;

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub light: f64,
    /// Moderately active (3-5 days/week): 1.55, also used for unrecognized levels
    pub moderate: f64,
    /// Active (6-7 days/week): 1.725
    pub active: f64,
    /// Very active (hard training 2x/day): 1.9
    pub very: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            active: 1.725,
            very: 1.9,
        }
    }
}

impl ActivityFactorsConfig {
    /// Validate factors are within 1.0-2.5 and strictly ascending
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a factor is out of range or out of order
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sedentary < 1.0 || self.very > 2.5 {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be between 1.0 and 2.5",
            ));
        }
        if self.sedentary >= self.light
            || self.light >= self.moderate
            || self.moderate >= self.active
            || self.active >= self.very
        {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order",
            ));
        }
        Ok(())
    }
}

/// Calorie adjustments applied on top of TDEE per goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GoalAdjustmentConfig {
    /// Deficit subtracted for weight loss (kcal)
    pub lose_deficit_kcal: u32,
    /// Surplus added for weight gain (kcal)
    pub gain_surplus_kcal: u32,
    /// Lowest target ever produced for weight loss (kcal)
    pub calorie_floor_kcal: u32,
}

impl Default for GoalAdjustmentConfig {
    fn default() -> Self {
        Self {
            lose_deficit_kcal: 500,
            gain_surplus_kcal: 400,
            calorie_floor_kcal: MIN_SAFE_CALORIE_FLOOR_KCAL,
        }
    }
}

impl GoalAdjustmentConfig {
    /// Validate adjustments keep weight-loss targets safe
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if the floor drops below
    /// 1000 kcal or an adjustment exceeds 1500 kcal
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.calorie_floor_kcal < MIN_SAFE_CALORIE_FLOOR_KCAL {
            return Err(ConfigError::ValueOutOfRange(
                "Calorie floor must be at least 1000 kcal",
            ));
        }
        if self.lose_deficit_kcal > 1500 || self.gain_surplus_kcal > 1500 {
            return Err(ConfigError::ValueOutOfRange(
                "Goal adjustments must not exceed 1500 kcal",
            ));
        }
        Ok(())
    }
}
