// ABOUTME: Weekly training schedule configuration
// ABOUTME: Session counts per activity band and session durations per goal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Weekly schedule shape
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleConfig {
    /// Sessions per week for sedentary and light clients
    pub low_activity_days: u8,
    /// Sessions per week for moderate clients
    pub moderate_activity_days: u8,
    /// Sessions per week for active, very active, and unrecognized levels
    pub high_activity_days: u8,
    /// Session length for weight loss (minutes)
    pub lose_session_minutes: u32,
    /// Session length for every other goal (minutes)
    pub default_session_minutes: u32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            low_activity_days: 4,
            moderate_activity_days: 5,
            high_activity_days: 6,
            lose_session_minutes: 40,
            default_session_minutes: 60,
        }
    }
}

impl ScheduleConfig {
    /// Validate day counts fit in a week and durations are sane
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if day counts leave 1-7 or decrease with activity,
    /// or a session length leaves 10-240 minutes
    pub fn validate(&self) -> Result<(), ConfigError> {
        let days = [
            self.low_activity_days,
            self.moderate_activity_days,
            self.high_activity_days,
        ];
        if days.iter().any(|d| !(1..=7).contains(d)) {
            return Err(ConfigError::ValueOutOfRange(
                "Training days per week must be between 1 and 7",
            ));
        }
        if self.low_activity_days > self.moderate_activity_days
            || self.moderate_activity_days > self.high_activity_days
        {
            return Err(ConfigError::InvalidRange(
                "Training days must not decrease as activity rises",
            ));
        }
        for minutes in [self.lose_session_minutes, self.default_session_minutes] {
            if !(10..=240).contains(&minutes) {
                return Err(ConfigError::ValueOutOfRange(
                    "Session length must be between 10 and 240 minutes",
                ));
            }
        }
        Ok(())
    }
}
