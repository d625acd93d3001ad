// ABOUTME: Reference table row models for meals and exercises
// ABOUTME: ReferenceMeal, ReferenceExercise, and ExerciseType definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// A row of the meal table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ReferenceMeal {
    /// Meal title
    pub title: String,
    /// Short description or recipe outline
    pub description: String,
}

/// Exercise category used to filter the workout pool
///
/// Unknown categories are kept verbatim in `Other` so they round-trip to
/// output unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum ExerciseType {
    /// Steady-state cardio
    Cardio,
    /// High-intensity interval training
    Hiit,
    /// Full-body conditioning
    FullBody,
    /// Maximal strength work
    Strength,
    /// Muscle-building volume work
    Hypertrophy,
    /// Multi-joint lifts
    Compound,
    /// Any other category label
    Other(String),
}

impl ExerciseType {
    /// Parse a category label (case-insensitive)
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "cardio" => Self::Cardio,
            "hiit" => Self::Hiit,
            "full_body" => Self::FullBody,
            "strength" => Self::Strength,
            "hypertrophy" => Self::Hypertrophy,
            "compound" => Self::Compound,
            _ => Self::Other(s.to_owned()),
        }
    }

    /// Category label as stored in the table
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Cardio => "cardio",
            Self::Hiit => "hiit",
            Self::FullBody => "full_body",
            Self::Strength => "strength",
            Self::Hypertrophy => "hypertrophy",
            Self::Compound => "compound",
            Self::Other(label) => label,
        }
    }
}

impl From<String> for ExerciseType {
    fn from(value: String) -> Self {
        Self::from_str_lossy(&value)
    }
}

impl From<ExerciseType> for String {
    fn from(value: ExerciseType) -> Self {
        match value {
            ExerciseType::Other(label) => label,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A row of the exercise table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ReferenceExercise {
    /// Exercise name
    pub name: String,
    /// How to perform it
    pub instructions: String,
    /// Category used for goal-based filtering
    #[serde(rename = "type")]
    pub exercise_type: ExerciseType,
}
