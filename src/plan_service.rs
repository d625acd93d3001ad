// ABOUTME: Plan generation service binding reference tables, planner config, and randomness
// ABOUTME: Stamps each plan with the current UTC time and logs a generation summary
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use std::sync::Arc;

use chrono::{DateTime, Utc};
use qawi_core::errors::AppResult;
use qawi_core::models::{ClientProfile, GeneratedPlan};
use qawi_intelligence::{assemble_plan, PlanInputs, PlannerConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, info_span};

use crate::reference_data::ReferenceTables;

/// Generates plans from shared reference tables
///
/// Cloning is cheap; clones share the same tables.
#[derive(Debug, Clone)]
pub struct PlanService {
    tables: Arc<ReferenceTables>,
    config: PlannerConfig,
}

impl PlanService {
    /// Create a service with an explicit planner configuration
    #[must_use]
    pub const fn new(tables: Arc<ReferenceTables>, config: PlannerConfig) -> Self {
        Self { tables, config }
    }

    /// Create a service using the process-wide planner configuration
    #[must_use]
    pub fn with_global_config(tables: Arc<ReferenceTables>) -> Self {
        Self::new(tables, PlannerConfig::global().clone())
    }

    /// Generate a plan stamped with the current time
    ///
    /// A `seed` makes the meal and exercise draws reproducible; `None` seeds
    /// from OS entropy.
    ///
    /// # Errors
    ///
    /// Returns an error if the meal table is empty
    pub fn generate(&self, profile: &ClientProfile, seed: Option<u64>) -> AppResult<GeneratedPlan> {
        self.generate_at(profile, seed, Utc::now())
    }

    /// Generate a plan with a caller-supplied timestamp
    ///
    /// # Errors
    ///
    /// Returns an error if the meal table is empty
    pub fn generate_at(
        &self,
        profile: &ClientProfile,
        seed: Option<u64>,
        generated_at: DateTime<Utc>,
    ) -> AppResult<GeneratedPlan> {
        let span = info_span!(
            "generate_plan",
            goal = %profile.goal,
            activity = %profile.activity_level,
            seeded = seed.is_some()
        );
        let _guard = span.enter();

        let mut rng = seed.map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64);
        let inputs = PlanInputs {
            profile,
            meals: self.tables.meals(),
            exercises: self.tables.exercises(),
        };
        let plan = assemble_plan(&inputs, &self.config, &mut rng, generated_at)?;

        info!(
            calories = plan.summary.calories,
            diet = %plan.summary.diet,
            days_per_week = plan.summary.days_per_week,
            "Generated plan"
        );
        Ok(plan)
    }
}
