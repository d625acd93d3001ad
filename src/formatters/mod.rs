// ABOUTME: Output format abstraction for rendering generated plans
// ABOUTME: Supports JSON (default) and a plain-text outline for terminals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! ## Supported Formats
//!
//! - **JSON**: Default format, the plan record as-is (`generatedAt`, `summary`,
//!   `meals`, `snack`, `workouts`, `notes`)
//! - **Text**: Human-readable outline of the same record
//!
//! ## Usage
//!
//! ```rust,ignore
//! use khaleek_qawi::formatters::{format_plan, OutputFormat};
//!
//! let output = format_plan(&plan, OutputFormat::Text)?;
//! println!("{}", output.data);
//! ```

use std::error::Error;
use std::fmt;

use chrono::SecondsFormat;
use qawi_core::models::{GeneratedPlan, ReferenceMeal};

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// JSON format (default), pretty-printed
    #[default]
    Json,
    /// Plain-text outline
    Text,
}

impl OutputFormat {
    /// Parse format from string parameter (case-insensitive)
    /// Returns `Json` for unrecognized values
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Self::Text,
            _ => Self::Json,
        }
    }

    /// Get the MIME content type for this format
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Text => "text/plain",
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Formatted output containing the serialized data and metadata
#[derive(Debug, Clone)]
pub struct FormattedOutput {
    /// The serialized data as a string
    pub data: String,
    /// The format used for serialization
    pub format: OutputFormat,
    /// The MIME content type
    pub content_type: &'static str,
}

/// Error type for formatting operations
#[derive(Debug, Clone)]
pub struct FormatError {
    /// Error message describing what went wrong
    pub message: String,
    /// The format that was being used when the error occurred
    pub format: OutputFormat,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Format error ({}): {}", self.format, self.message)
    }
}

impl Error for FormatError {}

/// Render a plan in the requested format
///
/// # Errors
///
/// Returns `FormatError` if JSON serialization fails
pub fn format_plan(
    plan: &GeneratedPlan,
    format: OutputFormat,
) -> Result<FormattedOutput, FormatError> {
    let data = match format {
        OutputFormat::Json => serde_json::to_string_pretty(plan).map_err(|e| FormatError {
            message: e.to_string(),
            format,
        })?,
        OutputFormat::Text => TextOutline(plan).to_string(),
    };

    Ok(FormattedOutput {
        data,
        format,
        content_type: format.content_type(),
    })
}

struct TextOutline<'a>(&'a GeneratedPlan);

impl TextOutline<'_> {
    fn write_meal(f: &mut fmt::Formatter<'_>, meal: &ReferenceMeal) -> fmt::Result {
        if meal.description.is_empty() {
            writeln!(f, "  - {}", meal.title)
        } else {
            writeln!(f, "  - {}: {}", meal.title, meal.description)
        }
    }
}

impl fmt::Display for TextOutline<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = self.0;
        let summary = &plan.summary;

        writeln!(
            f,
            "Plan generated at {}",
            plan.generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
        )?;
        writeln!(f)?;
        writeln!(f, "Daily calories: {} kcal", summary.calories)?;
        writeln!(f, "Diet: {}", summary.diet)?;
        writeln!(
            f,
            "Macros: protein {} g, carbs {} g, fats {} g",
            summary.macros.protein_g, summary.macros.carbs_g, summary.macros.fats_g
        )?;
        writeln!(
            f,
            "Training: {} days per week (goal: {})",
            summary.days_per_week, summary.goal
        )?;

        writeln!(f)?;
        writeln!(f, "Meals")?;
        for meal in &plan.meals {
            Self::write_meal(f, meal)?;
        }
        writeln!(f, "Snack")?;
        Self::write_meal(f, &plan.snack)?;

        writeln!(f)?;
        writeln!(f, "Workouts")?;
        for workout in &plan.workouts {
            writeln!(f, "  Day {} ({} min)", workout.day, workout.duration_min)?;
            if workout.exercises.is_empty() {
                writeln!(f, "    - no matching exercises")?;
            }
            for exercise in &workout.exercises {
                writeln!(
                    f,
                    "    - {} [{}]: {}",
                    exercise.name, exercise.exercise_type, exercise.instructions
                )?;
            }
        }

        writeln!(f)?;
        write!(f, "Notes: {}", plan.notes)
    }
}
