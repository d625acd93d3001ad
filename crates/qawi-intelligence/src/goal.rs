// ABOUTME: Goal adjustment mapping TDEE to a daily calorie target
// ABOUTME: Deficit for weight loss with a hard floor, surplus for gain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use qawi_core::models::Goal;

use crate::config::GoalAdjustmentConfig;

/// Target daily calories for a goal
///
/// - Lose: `max(floor, tdee - deficit)`; the floor holds however low TDEE is
/// - Gain: `tdee + surplus`
/// - Maintain: `tdee`
#[must_use]
pub fn target_calories(tdee: u32, goal: Goal, config: &GoalAdjustmentConfig) -> u32 {
    match goal {
        Goal::Lose => tdee
            .saturating_sub(config.lose_deficit_kcal)
            .max(config.calorie_floor_kcal),
        Goal::Gain => tdee.saturating_add(config.gain_surplus_kcal),
        Goal::Maintain => tdee,
    }
}
