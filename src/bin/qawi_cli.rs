// ABOUTME: Qawi CLI - generate a personalized demo diet and workout plan from the command line
// ABOUTME: Collects client metrics, validates ranges, and prints the plan as JSON or text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Form defaults (Test Client, 30, male, 175 cm, 80 kg, maintain, sedentary)
//! qawi-cli
//!
//! # Weight loss plan for a moderately active client, as a text outline
//! qawi-cli --age 42 --gender female --height-cm 163 --weight-kg 71.5 \
//!     --goal lose --activity moderate --preferences "vegan, low_fat" --format text
//!
//! # Reproducible draws and custom tables
//! qawi-cli --seed 7 --meals ./my_meals.csv --exercises ./my_exercises.csv
//! ```

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use clap::{ArgAction, Parser};
use khaleek_qawi::config::{AppConfig, LogLevel};
use khaleek_qawi::errors::AppError;
use khaleek_qawi::formatters::{format_plan, OutputFormat};
use khaleek_qawi::intelligence::diet::parse_preferences;
use khaleek_qawi::logging::LoggingConfig;
use khaleek_qawi::models::{ActivityLevel, ClientProfile, Gender, Goal};
use khaleek_qawi::plan_service::PlanService;
use khaleek_qawi::reference_data::ReferenceTables;
use tracing::{debug, info, warn};

#[derive(Parser)]
#[command(
    name = "qawi-cli",
    version,
    about = "Khaleek Qawi demo plan generator",
    long_about = "Estimates daily energy needs, picks a diet and macro targets, and samples a week of meals and workouts from the reference tables."
)]
struct Cli {
    /// Client display name
    #[arg(long, default_value = "Test Client")]
    name: String,

    /// Age in years (12-100)
    #[arg(long, default_value_t = 30)]
    age: u32,

    /// Gender for the BMR offset (male, female)
    #[arg(long, default_value = "male")]
    gender: String,

    /// Height in centimeters (100-230)
    #[arg(long, default_value_t = 175)]
    height_cm: u32,

    /// Weight in kilograms (30-250)
    #[arg(long, default_value_t = 80.0)]
    weight_kg: f64,

    /// Goal (lose, maintain, gain)
    #[arg(long, default_value = "maintain")]
    goal: String,

    /// Activity level (sedentary, light, moderate, active, very)
    #[arg(long, default_value = "sedentary")]
    activity: String,

    /// Comma-separated dietary preferences, e.g. "vegan, keto"
    #[arg(long, default_value = "balanced")]
    preferences: String,

    /// Seed for reproducible sampling (overrides `QAWI_SEED`)
    #[arg(long)]
    seed: Option<u64>,

    /// Output format: json or text (overrides `QAWI_OUTPUT_FORMAT`)
    #[arg(long)]
    format: Option<String>,

    /// Meal table CSV (overrides `QAWI_MEALS_PATH`)
    #[arg(long)]
    meals: Option<PathBuf>,

    /// Exercise table CSV (overrides `QAWI_EXERCISES_PATH`)
    #[arg(long)]
    exercises: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn profile(&self) -> ClientProfile {
        let goal = Goal::from_str_lossy(&self.goal);
        let activity_level = ActivityLevel::from_str_lossy(&self.activity);
        if goal.as_str() != self.goal.trim() {
            warn!(goal = %self.goal, "Unrecognized goal, using maintain");
        }
        if activity_level == ActivityLevel::Unrecognized {
            warn!(activity = %self.activity, "Unrecognized activity level");
        }

        ClientProfile {
            name: Some(self.name.clone()).filter(|name| !name.trim().is_empty()),
            age: self.age,
            height_cm: self.height_cm,
            weight_kg: self.weight_kg,
            gender: Gender::from_str_lossy(&self.gender),
            goal,
            activity_level,
            dietary_preferences: parse_preferences(&self.preferences),
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = AppConfig::from_env()?;
    if let Some(path) = &cli.meals {
        config.data.meals_path.clone_from(path);
    }
    if let Some(path) = &cli.exercises {
        config.data.exercises_path.clone_from(path);
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if let Some(format) = &cli.format {
        config.output_format = OutputFormat::from_str_param(format);
    }
    config.validate()?;
    debug!("{}", config.summary());

    let profile = cli.profile();
    profile.validate_ranges()?;

    let tables = Arc::new(ReferenceTables::load(
        &config.data.meals_path,
        &config.data.exercises_path,
    )?);
    let service = PlanService::with_global_config(tables);
    let plan = service.generate(&profile, config.seed)?;

    let output = format_plan(&plan, config.output_format)?;
    info!(format = %output.format, "Writing plan");
    println!("{}", output.data);
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose > 0 {
        logging = logging.with_level(LogLevel::default().raised_by(cli.verbose).as_str());
    }
    if let Err(e) = logging.init() {
        eprintln!("{e}");
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            let code = e
                .downcast_ref::<AppError>()
                .map_or(1, |app_error| app_error.code.exit_code());
            ExitCode::from(code)
        }
    }
}
