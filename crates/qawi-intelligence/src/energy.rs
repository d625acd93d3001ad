// ABOUTME: Energy estimation using the Mifflin-St Jeor equation and activity multipliers
// ABOUTME: BMR and TDEE calculations for the plan pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Energy Estimator
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! These functions trust their inputs. Range validation is the caller's
//! responsibility (see `ClientProfile::validate_ranges`).

use qawi_core::models::{ActivityLevel, ClientProfile, Gender};
use serde::{Deserialize, Serialize};

use crate::config::{ActivityFactorsConfig, BmrConfig};

/// BMR and TDEE for one client
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct EnergyEstimate {
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: f64,
    /// Multiplier applied for the activity level
    pub activity_multiplier: f64,
    /// Total Daily Energy Expenditure (kcal/day, floored)
    pub tdee: u32,
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_offset`
/// - Men: +5
/// - Women: -161
#[must_use]
pub fn mifflin_st_jeor_bmr(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    config: &BmrConfig,
) -> f64 {
    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * f64::from(age);

    let gender_constant = match gender {
        Gender::Male => config.msj_male_constant,
        Gender::Female => config.msj_female_constant,
    };

    weight_component + height_component + age_component + gender_constant
}

/// Activity multiplier for a level
///
/// Unrecognized levels use the moderate factor.
#[must_use]
pub const fn activity_multiplier(level: ActivityLevel, config: &ActivityFactorsConfig) -> f64 {
    match level {
        ActivityLevel::Sedentary => config.sedentary,
        ActivityLevel::Light => config.light,
        ActivityLevel::Moderate | ActivityLevel::Unrecognized => config.moderate,
        ActivityLevel::Active => config.active,
        ActivityLevel::Very => config.very,
    }
}

/// Calculate Total Daily Energy Expenditure
///
/// Formula: TDEE = floor(BMR x Activity Factor). Negative products saturate to 0.
#[must_use]
pub fn total_daily_energy_expenditure(
    bmr: f64,
    level: ActivityLevel,
    config: &ActivityFactorsConfig,
) -> u32 {
    (bmr * activity_multiplier(level, config)).floor() as u32
}

/// Run the full energy estimate for a profile
#[must_use]
pub fn estimate_energy(
    profile: &ClientProfile,
    bmr_config: &BmrConfig,
    activity_config: &ActivityFactorsConfig,
) -> EnergyEstimate {
    let bmr = mifflin_st_jeor_bmr(
        profile.weight_kg,
        f64::from(profile.height_cm),
        profile.age,
        profile.gender,
        bmr_config,
    );
    EnergyEstimate {
        bmr,
        activity_multiplier: activity_multiplier(profile.activity_level, activity_config),
        tdee: total_daily_energy_expenditure(bmr, profile.activity_level, activity_config),
    }
}
