// ABOUTME: Output format abstraction for rendering analysis results as JSON or plain text
// ABOUTME: JSON for machines (pretty-printed), text tables for people reading a terminal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! Every CLI result implements both `Serialize` and [`RenderText`], so one
//! [`format_output`] call covers both formats.

use std::fmt::{self, Write as _};

use serde::Serialize;
use strength_core::errors::{AppError, ErrorResponse};
use strength_core::models::MuscleGroup;
use strength_intelligence::analyzer::AnalysisReport;
use strength_intelligence::e1rm_calculator::E1rmEstimate;
use strength_intelligence::strength_standards::StrengthClassification;
use thiserror::Error;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Pretty-printed JSON (default)
    #[default]
    Json,
    /// Human-readable text
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
    /// The rendered data
    pub data: String,
    /// The format used
    pub format: OutputFormat,
    /// The MIME content type
    pub content_type: &'static str,
}

/// Error type for formatting operations
#[derive(Debug, Clone, Error)]
#[error("Format error ({format}): {message}")]
pub struct FormatError {
    /// Error message describing what went wrong
    pub message: String,
    /// The format that was being used when the error occurred
    pub format: OutputFormat,
}

/// Plain-text rendering for terminal output
pub trait RenderText {
    /// Render as human-readable text
    fn render_text(&self) -> String;
}

/// Render data in the requested format
///
/// # Errors
///
/// Returns `FormatError` if JSON serialization fails
pub fn format_output<T: Serialize + RenderText>(
    data: &T,
    format: OutputFormat,
) -> Result<FormattedOutput, FormatError> {
    let data = match format {
        OutputFormat::Json => serde_json::to_string_pretty(data).map_err(|e| FormatError {
            message: e.to_string(),
            format,
        })?,
        OutputFormat::Text => data.render_text(),
    };
    Ok(FormattedOutput {
        data,
        format,
        content_type: format.content_type(),
    })
}

/// Render an engine error as the JSON error envelope
///
/// # Errors
///
/// Returns `FormatError` if JSON serialization fails
pub fn format_error(error: &AppError) -> Result<FormattedOutput, FormatError> {
    let format = OutputFormat::Json;
    let data =
        serde_json::to_string_pretty(&ErrorResponse::from(error)).map_err(|e| FormatError {
            message: e.to_string(),
            format,
        })?;
    Ok(FormattedOutput {
        data,
        format,
        content_type: format.content_type(),
    })
}

fn heading(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n{title}\n{}", "-".repeat(title.len()));
}

impl RenderText for AnalysisReport {
    fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Training analysis as of {} (week {}..{}, history {}..{})",
            self.as_of, self.week.start, self.week.end, self.lookback.start, self.lookback.end
        );

        heading(&mut out, "Weekly volume");
        for group in self.volume.iter().filter(|g| g.working_sets > 0) {
            let _ = writeln!(
                out,
                "{:<11} {:>5.1} effective sets ({} working, {}x/week)  {}  [MEV {} / MAV {} / MRV {}]",
                group.muscle_group.as_str(),
                group.effective_sets,
                group.working_sets,
                group.weekly_frequency,
                group.status,
                group.landmark.mev,
                group.landmark.mav,
                group.landmark.mrv
            );
        }

        heading(&mut out, "Regressions");
        if self.regressions.is_empty() {
            out.push_str("none\n");
        }
        for signal in &self.regressions {
            let _ = writeln!(
                out,
                "{} ({}): {:.1} -> {:.1} kg e1RM, -{:.1}% over {} sessions",
                signal.exercise_name,
                signal.muscle_group,
                signal.peak_e1rm,
                signal.current_e1rm,
                signal.decline_pct,
                signal.consecutive_declines
            );
        }

        heading(&mut out, "Fatigue");
        for score in self.fatigue.iter().filter(|s| s.score > 0.0) {
            let _ = writeln!(
                out,
                "{:<11} {:>5.1}  (regression {:.2}, volume {:.2}, frequency {:.2}, nutrition {:.2})",
                score.muscle_group.as_str(),
                score.score,
                score.regression_component,
                score.volume_component,
                score.frequency_component,
                score.nutrition_component
            );
        }

        heading(&mut out, "Deload suggestions");
        if self.deload_suggestions.is_empty() {
            out.push_str("none\n");
        }
        for suggestion in &self.deload_suggestions {
            let _ = writeln!(out, "{}", suggestion.message);
        }

        heading(&mut out, "Strength");
        if self.strength.is_empty() {
            out.push_str("no supported lifts in history\n");
        }
        for assessment in &self.strength {
            out.push_str(&assessment.classification.render_text());
        }
        for milestone in &self.milestones {
            let _ = writeln!(out, "  * {}", milestone.message);
        }

        if !self.skipped.is_empty() {
            heading(&mut out, "Skipped rows");
            for record in &self.skipped {
                let _ = writeln!(
                    out,
                    "{} {}: {}",
                    record.session_date, record.exercise_name, record.reason
                );
            }
        }
        out
    }
}

impl RenderText for StrengthClassification {
    fn render_text(&self) -> String {
        let next = match (self.next_level, self.next_level_threshold_kg) {
            (Some(level), Some(kg)) => format!(", next {level} at {kg:.1} kg"),
            _ => String::new(),
        };
        format!(
            "{}: {:.1} kg e1RM, {:.2}x bodyweight, {}{}\n",
            self.exercise_name, self.e1rm_kg, self.ratio, self.level, next
        )
    }
}

impl RenderText for E1rmEstimate {
    fn render_text(&self) -> String {
        format!(
            "e1RM {:.1} kg (Epley {:.1}, Brzycki {:.1}, Lombardi {:.1})\n",
            self.primary, self.epley, self.brzycki, self.lombardi
        )
    }
}

/// Exercises known to the catalog, grouped by muscle group
#[derive(Debug, Clone, Serialize)]
pub struct CatalogListing {
    /// Groups in canonical order with their exercises
    pub groups: Vec<CatalogGroup>,
}

/// Exercises attributed to one muscle group
#[derive(Debug, Clone, Serialize)]
pub struct CatalogGroup {
    /// Muscle group
    pub muscle_group: MuscleGroup,
    /// Normalized exercise names, sorted
    pub exercises: Vec<&'static str>,
}

impl RenderText for CatalogListing {
    fn render_text(&self) -> String {
        let mut out = String::new();
        for group in &self.groups {
            let _ = writeln!(out, "{}: {}", group.muscle_group, group.exercises.join(", "));
        }
        out
    }
}
