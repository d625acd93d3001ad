// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Energy densities, input limits, plan shape, and fixed advisory text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! flat namespace.

/// Energy density of macronutrients (Atwater general factors)
pub mod energy {
    /// Kilocalories per gram of protein
    pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
    /// Kilocalories per gram of carbohydrate
    pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
    /// Kilocalories per gram of fat
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
}

/// Input ranges enforced by callers before the pipeline runs
pub mod limits {
    /// Youngest supported client (years)
    pub const MIN_AGE: u32 = 12;
    /// Oldest supported client (years)
    pub const MAX_AGE: u32 = 100;
    /// Shortest supported client (cm)
    pub const MIN_HEIGHT_CM: u32 = 100;
    /// Tallest supported client (cm)
    pub const MAX_HEIGHT_CM: u32 = 230;
    /// Lightest supported client (kg)
    pub const MIN_WEIGHT_KG: f64 = 30.0;
    /// Heaviest supported client (kg)
    pub const MAX_WEIGHT_KG: f64 = 250.0;
}

/// Shape of a generated plan
pub mod plan {
    /// Main meals sampled per plan
    pub const MEALS_PER_PLAN: usize = 3;
    /// Upper bound on exercises in a single session
    pub const MAX_EXERCISES_PER_SESSION: usize = 4;
    /// Advisory note attached to every plan
    pub const ADVISORY_NOTE: &str =
        "This plan is demo-generated. For medical or special nutrition needs consult a professional.";
}

/// Service identity used in structured logs
pub mod service_names {
    /// Service name for the plan generator
    pub const KHALEEK_QAWI: &str = "khaleek-qawi";
}
