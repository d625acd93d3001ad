// ABOUTME: Diet selection by fixed priority and conversion of macro splits to grams
// ABOUTME: Preference parsing, diet choice, macro lookup, and gram targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Diet Selector
//!
//! Picks one diet from the client's free-text tokens using the fixed
//! [`DIET_PRIORITY`] order, then converts its percentage split into daily
//! gram targets with 4/4/9 kcal per gram.

use std::collections::HashSet;

use qawi_core::constants::energy::{KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN};
use qawi_core::models::{DietKey, MacroGrams, MacroSplit, DIET_PRIORITY};
use serde::{Deserialize, Serialize};

/// Selected diet with its split and gram targets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DietRecommendation {
    /// Selected diet
    pub diet: DietKey,
    /// Percentage split of the diet
    pub split: MacroSplit,
    /// Gram targets for the calorie target
    pub grams: MacroGrams,
}

/// Split a comma-separated preference string into trimmed, non-empty tokens
#[must_use]
pub fn parse_preferences(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Choose the highest-priority diet present in the preferences
///
/// Tokens are matched case-insensitively. Token order does not matter and
/// no match yields `Balanced`.
#[must_use]
pub fn choose_diet<S: AsRef<str>>(preferences: &[S]) -> DietKey {
    let tokens: HashSet<String> = preferences
        .iter()
        .map(|token| token.as_ref().trim().to_lowercase())
        .collect();

    DIET_PRIORITY
        .into_iter()
        .find(|diet| tokens.contains(diet.as_str()))
        .unwrap_or_default()
}

/// Macro split for a diet key, falling back to the balanced split
#[must_use]
pub fn macros_for_diet(key: &str) -> MacroSplit {
    DietKey::from_key(key).unwrap_or_default().macro_split()
}

/// Convert a percentage split into gram targets
///
/// Each macro is rounded half-to-even on its own, so the implied calories can
/// differ slightly from `calories`.
#[must_use]
pub fn macro_grams(calories: u32, split: MacroSplit) -> MacroGrams {
    MacroGrams {
        protein_g: grams_for(calories, split.protein_pct, KCAL_PER_GRAM_PROTEIN),
        carbs_g: grams_for(calories, split.carbs_pct, KCAL_PER_GRAM_CARBS),
        fats_g: grams_for(calories, split.fat_pct, KCAL_PER_GRAM_FAT),
    }
}

fn grams_for(calories: u32, pct: u8, kcal_per_gram: f64) -> u32 {
    (f64::from(calories) * f64::from(pct) / 100.0 / kcal_per_gram).round_ties_even() as u32
}

/// Choose a diet and compute its gram targets
#[must_use]
pub fn recommend_diet<S: AsRef<str>>(preferences: &[S], calories: u32) -> DietRecommendation {
    let diet = choose_diet(preferences);
    let split = diet.macro_split();
    DietRecommendation {
        diet,
        split,
        grams: macro_grams(calories, split),
    }
}
