// ABOUTME: Generated plan models returned by the plan pipeline
// ABOUTME: GeneratedPlan, PlanSummary, MacroGrams, and WorkoutDay definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

use super::diet::DietKey;
use super::profile::Goal;
use super::reference::{ReferenceExercise, ReferenceMeal};
use crate::constants::energy::{KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN};

/// Daily macro targets in grams
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct MacroGrams {
    /// Protein (grams)
    pub protein_g: u32,
    /// Carbohydrates (grams)
    pub carbs_g: u32,
    /// Fats (grams)
    pub fats_g: u32,
}

impl MacroGrams {
    /// Calories implied by the gram targets
    ///
    /// Differs from the calorie target by at most the rounding slack of the
    /// three independently rounded macros.
    #[must_use]
    pub fn implied_kcal(&self) -> f64 {
        f64::from(self.fats_g).mul_add(
            KCAL_PER_GRAM_FAT,
            f64::from(self.protein_g).mul_add(
                KCAL_PER_GRAM_PROTEIN,
                f64::from(self.carbs_g) * KCAL_PER_GRAM_CARBS,
            ),
        )
    }
}

/// Headline numbers of a plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanSummary {
    /// Target daily calories
    pub calories: u32,
    /// Daily macro targets
    pub macros: MacroGrams,
    /// Selected diet
    pub diet: DietKey,
    /// Training sessions per week
    pub days_per_week: u8,
    /// Client goal
    pub goal: Goal,
}

/// One training session in the weekly schedule
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkoutDay {
    /// 1-based day index within the week
    pub day: u8,
    /// Session length in minutes
    pub duration_min: u32,
    /// Exercises for the session (no repeats within a day)
    pub exercises: Vec<ReferenceExercise>,
}

/// Complete plan produced by one generate action
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratedPlan {
    /// Generation time (UTC)
    #[serde(rename = "generatedAt", serialize_with = "serialize_micros_utc")]
    pub generated_at: DateTime<Utc>,
    /// Calorie, macro, and schedule summary
    pub summary: PlanSummary,
    /// Main meals (may repeat)
    pub meals: Vec<ReferenceMeal>,
    /// Snack (may coincide with a meal)
    pub snack: ReferenceMeal,
    /// Weekly training schedule
    pub workouts: Vec<WorkoutDay>,
    /// Fixed advisory note
    pub notes: String,
}

/// RFC 3339 with exactly six fractional digits and a `Z` suffix
fn serialize_micros_utc<S>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&at.to_rfc3339_opts(SecondsFormat::Micros, true))
}
