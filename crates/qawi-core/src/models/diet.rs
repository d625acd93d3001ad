// ABOUTME: Diet key enumeration, selection priority, and fixed macro splits
// ABOUTME: Compile-time constant tables for the eight supported diet profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro distribution as percentages of daily calories
///
/// All percentages must sum to 100.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroSplit {
    /// Carbohydrate percentage (0-100)
    pub carbs_pct: u8,
    /// Protein percentage (0-100)
    pub protein_pct: u8,
    /// Fat percentage (0-100)
    pub fat_pct: u8,
}

impl MacroSplit {
    /// Create a new macro split
    ///
    /// # Panics
    ///
    /// Panics in debug mode if percentages don't sum to 100
    #[must_use]
    pub const fn new(carbs_pct: u8, protein_pct: u8, fat_pct: u8) -> Self {
        let split = Self {
            carbs_pct,
            protein_pct,
            fat_pct,
        };
        debug_assert!(split.total_pct() == 100, "Macro percentages must sum to 100");
        split
    }

    /// Sum of the three percentages
    #[must_use]
    pub const fn total_pct(&self) -> u16 {
        self.carbs_pct as u16 + self.protein_pct as u16 + self.fat_pct as u16
    }
}

/// Supported diet profiles
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum DietKey {
    /// Very low carb, high fat
    Keto,
    /// Olive oil, fish, vegetables
    Mediterranean,
    /// Plant-based only
    Vegan,
    /// Whole foods, no grains or dairy
    Paleo,
    /// Time-restricted eating
    IntermittentFasting,
    /// Reduced carbohydrate
    LowCarb,
    /// Reduced fat
    LowFat,
    /// Default mixed diet
    #[default]
    Balanced,
}

/// Selection order when a client lists several diets
///
/// The first key present in the client's preferences wins, regardless of the
/// order the client typed them in.
pub const DIET_PRIORITY: [DietKey; 8] = [
    DietKey::Keto,
    DietKey::Mediterranean,
    DietKey::Vegan,
    DietKey::Paleo,
    DietKey::IntermittentFasting,
    DietKey::LowCarb,
    DietKey::LowFat,
    DietKey::Balanced,
];

impl DietKey {
    /// Look up a diet by its key (case-insensitive)
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim().to_lowercase();
        DIET_PRIORITY.into_iter().find(|diet| diet.as_str() == key)
    }

    /// Snake-case key
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Keto => "keto",
            Self::Mediterranean => "mediterranean",
            Self::Vegan => "vegan",
            Self::Paleo => "paleo",
            Self::IntermittentFasting => "intermittent_fasting",
            Self::LowCarb => "low_carb",
            Self::LowFat => "low_fat",
            Self::Balanced => "balanced",
        }
    }

    /// Fixed macro split for this diet
    #[must_use]
    pub const fn macro_split(&self) -> MacroSplit {
        match self {
            Self::Keto => MacroSplit::new(5, 25, 70),
            Self::Mediterranean => MacroSplit::new(40, 20, 40),
            Self::Vegan => MacroSplit::new(55, 18, 27),
            Self::Paleo => MacroSplit::new(35, 30, 35),
            Self::IntermittentFasting => MacroSplit::new(40, 25, 35),
            Self::LowCarb => MacroSplit::new(30, 30, 40),
            Self::LowFat => MacroSplit::new(55, 20, 25),
            Self::Balanced => MacroSplit::new(50, 20, 30),
        }
    }
}

impl fmt::Display for DietKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
