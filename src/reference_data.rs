// ABOUTME: Loads the meal and exercise reference tables from CSV files
// ABOUTME: Tables are read once and shared read-only across plan generations
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Reference table loading
//!
//! Expected columns:
//!
//! - meals: `title,description`
//! - exercises: `name,instructions,type`
//!
//! Extra columns are ignored. A row missing a column fails the whole load.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use qawi_core::errors::{AppResult, ReferenceDataError};
use qawi_core::models::{ReferenceExercise, ReferenceMeal};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

const MEALS_TABLE: &str = "meals";
const EXERCISES_TABLE: &str = "exercises";

/// Default meal table file name inside the data directory
pub const MEALS_FILE: &str = "meals.csv";
/// Default exercise table file name inside the data directory
pub const EXERCISES_FILE: &str = "exercises.csv";

/// Immutable meal and exercise tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceTables {
    meals: Vec<ReferenceMeal>,
    exercises: Vec<ReferenceExercise>,
}

impl ReferenceTables {
    /// Build tables from already-parsed rows
    ///
    /// # Errors
    ///
    /// Returns `ReferenceDataError::EmptyTable` if `meals` is empty. An empty
    /// exercise table is accepted and produces workout days without exercises.
    pub fn new(
        meals: Vec<ReferenceMeal>,
        exercises: Vec<ReferenceExercise>,
    ) -> Result<Self, ReferenceDataError> {
        if meals.is_empty() {
            return Err(ReferenceDataError::EmptyTable { table: MEALS_TABLE });
        }
        Ok(Self { meals, exercises })
    }

    /// Read both tables from CSV files
    ///
    /// # Errors
    ///
    /// Returns an error if either file cannot be read, a row is malformed, or
    /// the meal table is empty
    pub fn load(meals_path: &Path, exercises_path: &Path) -> AppResult<Self> {
        let meals: Vec<ReferenceMeal> = read_table(MEALS_TABLE, meals_path)?;
        let exercises: Vec<ReferenceExercise> = read_table(EXERCISES_TABLE, exercises_path)?;

        info!(
            meals = meals.len(),
            exercises = exercises.len(),
            meals_path = %meals_path.display(),
            exercises_path = %exercises_path.display(),
            "Loaded reference tables"
        );

        Ok(Self::new(meals, exercises)?)
    }

    /// Read both tables from `meals.csv` and `exercises.csv` in a directory
    ///
    /// # Errors
    ///
    /// See [`ReferenceTables::load`]
    pub fn load_dir(data_dir: &Path) -> AppResult<Self> {
        Self::load(&data_dir.join(MEALS_FILE), &data_dir.join(EXERCISES_FILE))
    }

    /// Meal rows in file order
    #[must_use]
    pub fn meals(&self) -> &[ReferenceMeal] {
        &self.meals
    }

    /// Exercise rows in file order
    #[must_use]
    pub fn exercises(&self) -> &[ReferenceExercise] {
        &self.exercises
    }
}

fn read_table<T: DeserializeOwned>(
    table: &'static str,
    path: &Path,
) -> Result<Vec<T>, ReferenceDataError> {
    let file = File::open(path).map_err(|source| ReferenceDataError::Io {
        table,
        path: path.to_path_buf(),
        source,
    })?;
    let rows = parse_rows(table, path.to_path_buf(), file)?;
    debug!(table, rows = rows.len(), "Parsed reference table");
    Ok(rows)
}

fn parse_rows<T: DeserializeOwned, R: Read>(
    table: &'static str,
    path: PathBuf,
    source: R,
) -> Result<Vec<T>, ReferenceDataError> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(source);
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let row = record.map_err(|e| ReferenceDataError::Malformed {
            table,
            path: path.clone(),
            message: e.to_string(),
        })?;
        rows.push(row);
    }
    Ok(rows)
}
