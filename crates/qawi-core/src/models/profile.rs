// ABOUTME: Client profile model with biometric data, goal, and activity level
// ABOUTME: Gender, Goal, ActivityLevel enums with lossy parsing for free-form input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::limits::{
    MAX_AGE, MAX_HEIGHT_CM, MAX_WEIGHT_KG, MIN_AGE, MIN_HEIGHT_CM, MIN_WEIGHT_KG,
};
use crate::errors::{AppError, AppResult};

/// Gender used to pick the BMR offset constant
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Gender {
    /// Male offset (+5 kcal)
    #[default]
    Male,
    /// Female offset (-161 kcal)
    Female,
}

impl Gender {
    /// Parse gender from string
    ///
    /// Only `female` (any case) maps to `Female`; every other value,
    /// including the empty string, maps to `Male`.
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("female") {
            Self::Female
        } else {
            Self::Male
        }
    }
}

impl From<String> for Gender {
    fn from(value: String) -> Self {
        Self::from_str_lossy(&value)
    }
}

/// Client goal driving the calorie adjustment and exercise pool
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Goal {
    /// Caloric deficit, cardio-leaning sessions
    Lose,
    /// Caloric balance, unrestricted sessions
    #[default]
    Maintain,
    /// Caloric surplus, strength-leaning sessions
    Gain,
}

impl Goal {
    /// Parse goal from string, falling back to `Maintain`
    ///
    /// Tokens are matched exactly after trimming, so `"LOSE"` is not `Lose`.
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim() {
            "lose" => Self::Lose,
            "gain" => Self::Gain,
            _ => Self::Maintain,
        }
    }

    /// Lowercase label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lose => "lose",
            Self::Maintain => "maintain",
            Self::Gain => "gain",
        }
    }
}

impl From<String> for Goal {
    fn from(value: String) -> Self {
        Self::from_str_lossy(&value)
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Self-reported activity level
///
/// `Unrecognized` stands in for any token outside the five known levels so
/// downstream lookups can apply their documented fallbacks instead of
/// rejecting the profile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    #[default]
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard exercise or physical job
    Very,
    /// Any value outside the recognized levels
    Unrecognized,
}

impl ActivityLevel {
    /// The five recognized levels in ascending order
    pub const RECOGNIZED: [Self; 5] = [
        Self::Sedentary,
        Self::Light,
        Self::Moderate,
        Self::Active,
        Self::Very,
    ];

    /// Parse activity level from string
    ///
    /// Only the exact lowercase labels of [`Self::RECOGNIZED`] match;
    /// `"Very"` or `"ACTIVE"` become `Unrecognized`.
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        let token = s.trim();
        Self::RECOGNIZED
            .into_iter()
            .find(|level| level.as_str() == token)
            .unwrap_or(Self::Unrecognized)
    }

    /// Lowercase label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::Very => "very",
            Self::Unrecognized => "unrecognized",
        }
    }
}

impl From<String> for ActivityLevel {
    fn from(value: String) -> Self {
        Self::from_str_lossy(&value)
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Client data consumed by the plan pipeline
///
/// The pipeline trusts these values. Range checks are the caller's job;
/// [`ClientProfile::validate_ranges`] is provided for callers that want the
/// standard form limits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientProfile {
    /// Display name (not used in any computation)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Age in years
    pub age: u32,
    /// Height in centimeters
    pub height_cm: u32,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Gender for the BMR offset
    pub gender: Gender,
    /// Calorie and training goal
    pub goal: Goal,
    /// Activity level for TDEE and weekly session count
    pub activity_level: ActivityLevel,
    /// Free-text diet tokens in the order the client listed them
    #[serde(default)]
    pub dietary_preferences: Vec<String>,
}

impl ClientProfile {
    /// Check biometrics against the standard form limits
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ValueOutOfRange` naming the first field outside
    /// its range.
    pub fn validate_ranges(&self) -> AppResult<()> {
        if !(MIN_AGE..=MAX_AGE).contains(&self.age) {
            return Err(AppError::value_out_of_range(
                "age", self.age, MIN_AGE, MAX_AGE,
            ));
        }
        if !(MIN_HEIGHT_CM..=MAX_HEIGHT_CM).contains(&self.height_cm) {
            return Err(AppError::value_out_of_range(
                "height_cm",
                self.height_cm,
                MIN_HEIGHT_CM,
                MAX_HEIGHT_CM,
            ));
        }
        if !(MIN_WEIGHT_KG..=MAX_WEIGHT_KG).contains(&self.weight_kg) {
            return Err(AppError::value_out_of_range(
                "weight_kg",
                self.weight_kg,
                MIN_WEIGHT_KG,
                MAX_WEIGHT_KG,
            ));
        }
        Ok(())
    }
}
