// ABOUTME: Environment configuration for data locations, sampling seed, and output format
// ABOUTME: Handles environment variables, deployment modes, and runtime configuration parsing
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Environment-based configuration

use std::env;
use std::fmt;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::formatters::OutputFormat;
use crate::reference_data::{EXERCISES_FILE, MEALS_FILE};

/// Default directory holding the reference tables
pub const DEFAULT_DATA_DIR: &str = "data";

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    #[default]
    Warn,
    /// Informational events
    Info,
    /// Pipeline internals
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "error" => Self::Error,
            "info" => Self::Info,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Warn,
        }
    }

    /// Level implied by a count of `-v` flags, starting from `self`
    #[must_use]
    pub const fn raised_by(self, verbosity: u8) -> Self {
        let rank: u8 = match self {
            Self::Error => 0,
            Self::Warn => 1,
            Self::Info => 2,
            Self::Debug => 3,
            Self::Trace => 4,
        };
        match rank.saturating_add(verbosity) {
            0 => Self::Error,
            1 => Self::Warn,
            2 => Self::Info,
            3 => Self::Debug,
            _ => Self::Trace,
        }
    }

    /// Lowercase name as used in filter directives
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production use
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Locations of the reference tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataConfig {
    /// Meal table CSV
    pub meals_path: PathBuf,
    /// Exercise table CSV
    pub exercises_path: PathBuf,
}

impl DataConfig {
    /// Standard file names inside a data directory
    #[must_use]
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            meals_path: dir.join(MEALS_FILE),
            exercises_path: dir.join(EXERCISES_FILE),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self::in_dir(DEFAULT_DATA_DIR)
    }
}

/// Process-level configuration for the plan generator
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Base log level
    pub log_level: LogLevel,
    /// Reference table locations
    pub data: DataConfig,
    /// Fixed sampling seed; `None` draws from OS entropy
    pub seed: Option<u64>,
    /// Default output format
    pub output_format: OutputFormat,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `QAWI_DATA_DIR` | `data` |
    /// | `QAWI_MEALS_PATH` | `$QAWI_DATA_DIR/meals.csv` |
    /// | `QAWI_EXERCISES_PATH` | `$QAWI_DATA_DIR/exercises.csv` |
    /// | `QAWI_SEED` | unset |
    /// | `QAWI_OUTPUT_FORMAT` | `json` |
    /// | `ENVIRONMENT` | `development` |
    /// | `RUST_LOG` | `warn` |
    ///
    /// # Errors
    ///
    /// Returns an error if `QAWI_SEED` is not an unsigned integer
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let data_dir = env_var_or("QAWI_DATA_DIR", DEFAULT_DATA_DIR);
        let mut data = DataConfig::in_dir(data_dir);
        if let Ok(path) = env::var("QAWI_MEALS_PATH") {
            data.meals_path = PathBuf::from(path);
        }
        if let Ok(path) = env::var("QAWI_EXERCISES_PATH") {
            data.exercises_path = PathBuf::from(path);
        }

        let seed = env::var("QAWI_SEED")
            .ok()
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .with_context(|| format!("Invalid QAWI_SEED value: {raw}"))
            })
            .transpose()?;

        Ok(Self {
            environment: Environment::from_str_or_default(&env_var_or("ENVIRONMENT", "")),
            log_level: LogLevel::from_str_or_default(&env_var_or("RUST_LOG", "warn")),
            data,
            seed,
            output_format: OutputFormat::from_str_param(&env_var_or("QAWI_OUTPUT_FORMAT", "json")),
        })
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a table path is empty or both tables point at the same file
    pub fn validate(&self) -> Result<()> {
        if self.data.meals_path.as_os_str().is_empty()
            || self.data.exercises_path.as_os_str().is_empty()
        {
            bail!("Reference table paths must not be empty");
        }
        if self.data.meals_path == self.data.exercises_path {
            bail!(
                "Meal and exercise tables cannot share a file: {}",
                self.data.meals_path.display()
            );
        }
        if self.environment.is_production() && self.seed.is_some() {
            warn!("QAWI_SEED is set in production; every plan will repeat the same draws");
        }
        Ok(())
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Khaleek Qawi Configuration:\n\
             - Environment: {}\n\
             - Log Level: {}\n\
             - Meals Table: {}\n\
             - Exercises Table: {}\n\
             - Seed: {}\n\
             - Output Format: {}",
            self.environment,
            self.log_level,
            self.data.meals_path.display(),
            self.data.exercises_path.display(),
            self.seed
                .map_or_else(|| "random".to_owned(), |seed| seed.to_string()),
            self.output_format,
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
