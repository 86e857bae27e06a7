// ABOUTME: Pierre Strength CLI - analyze training logs, estimate maxes, and classify lifts
// ABOUTME: Thin clap front end over the strength-intelligence pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Full analysis of a session log
//! pierre-strength analyze --input sessions.json --bodyweight 82.5 --format text
//!
//! # Estimated one-rep max of a single set
//! pierre-strength e1rm --weight 100 --reps 5
//!
//! # Strength tier of a lift
//! pierre-strength classify --exercise "bench press" --e1rm 120 --bodyweight 80
//!
//! # Exercises known to the catalog
//! pierre-strength catalog --group chest
//! ```

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use pierre_strength::errors::AppError;
use pierre_strength::formatters::{format_error, FormattedOutput, OutputFormat};
use pierre_strength::logging::LoggingConfig;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "pierre-strength",
    about = "Pierre Strength training load analytics",
    long_about = "Turns strength training logs into e1RM trends, effective weekly volume, regression and fatigue signals, deload suggestions, and strength milestones."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format: json or text
    #[arg(long, global = true, default_value = "json")]
    format: String,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Analyze a JSON session log
    Analyze {
        /// Path to the analysis request JSON (`-` for stdin)
        #[arg(long, short = 'i')]
        input: PathBuf,

        /// Reference date (defaults to the request's date, then the latest session)
        #[arg(long)]
        as_of: Option<NaiveDate>,

        /// Bodyweight in kg, overriding the request
        #[arg(long)]
        bodyweight: Option<f64>,

        /// Nutrition compliance ratio in [0, 1], overriding the request
        #[arg(long)]
        nutrition_compliance: Option<f64>,

        /// Intelligence configuration JSON
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,
    },

    /// Estimate one-rep max from a single set
    E1rm {
        /// Load in kg
        #[arg(long)]
        weight: f64,

        /// Repetitions performed
        #[arg(long, allow_hyphen_values = true)]
        reps: i32,
    },

    /// Classify a lift against bodyweight strength standards
    Classify {
        /// Exercise name or alias
        #[arg(long)]
        exercise: String,

        /// Estimated one-rep max in kg
        #[arg(long)]
        e1rm: f64,

        /// Bodyweight in kg
        #[arg(long)]
        bodyweight: f64,
    },

    /// List exercises known to the catalog
    Catalog {
        /// Restrict to one muscle group
        #[arg(long)]
        group: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::from_env().verbose(cli.verbose).init()?;

    let format = OutputFormat::from_str_param(&cli.format);
    debug!(%format, "Pierre Strength CLI");

    match run(cli.command, format) {
        Ok(output) => {
            println!("{}", output.data.trim_end());
            Ok(())
        }
        Err(e) => {
            // JSON consumers get the error envelope on stdout; the chain still goes to stderr
            if format == OutputFormat::Json {
                if let Some(envelope) = e.downcast_ref::<AppError>().map(format_error) {
                    println!("{}", envelope?.data);
                }
            }
            Err(e)
        }
    }
}

fn run(command: Command, format: OutputFormat) -> Result<FormattedOutput> {
    let output = match command {
        Command::Analyze {
            input,
            as_of,
            bodyweight,
            nutrition_compliance,
            config,
        } => commands::analyze::run(
            &commands::analyze::AnalyzeArgs {
                input,
                as_of,
                bodyweight,
                nutrition_compliance,
                config,
            },
            format,
        )?,
        Command::E1rm { weight, reps } => commands::lookup::e1rm(weight, reps, format)?,
        Command::Classify {
            exercise,
            e1rm,
            bodyweight,
        } => commands::lookup::classify(&exercise, e1rm, bodyweight, format)?,
        Command::Catalog { group } => commands::lookup::catalog(group.as_deref(), format)?,
    };
    Ok(output)
}
