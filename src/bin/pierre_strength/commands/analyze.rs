// ABOUTME: Analyze command: reads a session log, runs the pipeline, renders the report
// ABOUTME: CLI flags override the corresponding request fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use pierre_strength::errors::AppError;
use pierre_strength::formatters::{format_output, FormattedOutput, OutputFormat};
use pierre_strength::intelligence::analyzer::{AnalysisRequest, TrainingAnalyzer};
use pierre_strength::intelligence::config::IntelligenceConfig;
use pierre_strength::logging::AppLogger;
use tracing::info;

/// Arguments of the analyze command
pub struct AnalyzeArgs {
    /// Request JSON path, or `-` for stdin
    pub input: PathBuf,
    /// Reference date override
    pub as_of: Option<NaiveDate>,
    /// Bodyweight override
    pub bodyweight: Option<f64>,
    /// Nutrition compliance override
    pub nutrition_compliance: Option<f64>,
    /// Configuration JSON path
    pub config: Option<PathBuf>,
}

fn read_source(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read analysis request from stdin")?;
        return Ok(buffer);
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn load_config(path: Option<&Path>) -> Result<IntelligenceConfig> {
    let config = match path {
        Some(path) => IntelligenceConfig::from_file(path)
            .map_err(AppError::from)
            .with_context(|| format!("Invalid configuration in {}", path.display()))?,
        None => IntelligenceConfig::load()
            .map_err(AppError::from)
            .context("Invalid STRENGTH_* environment configuration")?,
    };
    info!(
        fatigue_threshold = config.deload.fatigue_threshold,
        min_consecutive = config.regression.min_consecutive,
        "Intelligence configuration loaded"
    );
    Ok(config)
}

/// Run the analysis and render the report
pub fn run(args: &AnalyzeArgs, format: OutputFormat) -> Result<FormattedOutput> {
    let started = Instant::now();
    let config = load_config(args.config.as_deref())?;

    let raw = read_source(&args.input)?;
    let mut request: AnalysisRequest = serde_json::from_str(&raw)
        .with_context(|| format!("Malformed analysis request in {}", args.input.display()))?;
    if args.as_of.is_some() {
        request.as_of = args.as_of;
    }
    if args.bodyweight.is_some() {
        request.bodyweight_kg = args.bodyweight;
    }
    if args.nutrition_compliance.is_some() {
        request.nutrition_compliance = args.nutrition_compliance;
    }
    let rows = request.sessions.len();

    let report =
        TrainingAnalyzer::new(config).analyze_request(request, Local::now().date_naive());

    AppLogger::log_analysis_run(
        &args.input.display().to_string(),
        rows,
        report.skipped.len(),
        report.deload_suggestions.len(),
        started.elapsed().as_millis(),
    );

    Ok(format_output(&report, format)?)
}
