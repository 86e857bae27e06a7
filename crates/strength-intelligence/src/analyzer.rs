// ABOUTME: End-to-end training analysis pipeline from raw session rows to a serializable report
// ABOUTME: Validates rows at the boundary, then runs volume, regression, fatigue, strength stages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Training Analyzer
//!
//! The analyzer owns a validated [`IntelligenceConfig`] and turns one user's
//! history into an [`AnalysisReport`]:
//!
//! 1. raw rows are validated; invalid rows are skipped and reported, never fatal
//! 2. rows inside the lookback window produce one e1RM point each
//! 3. regressions are detected per exercise
//! 4. weekly volume is aggregated over the week ending on the reference date
//! 5. each tracked muscle group is scored for fatigue (in parallel)
//! 6. deload suggestions, strength assessments, and milestones follow
//!
//! Missing bodyweight, nutrition, or history degrade to `Unknown`, `None`, or
//! empty collections.

use chrono::NaiveDate;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use strength_core::models::{ExerciseE1rm, SessionExercise, SessionRecord};
use tracing::{debug, info, warn};

use crate::config::IntelligenceConfig;
use crate::e1rm_calculator::session_e1rm_points;
use crate::fatigue::{compute_fatigue_score, FatigueScoreResult};
use crate::milestones::{generate_milestones, milestone_for, Milestone};
use crate::progression::{e1rm_history, strength_progression, ExerciseHistory, ExerciseProgression};
use crate::recommendation_engine::{generate_suggestions, DeloadSuggestion};
use crate::regression_detection::{detect_regressions, RegressionSignal};
use crate::strength_standards::{
    classify_strength, standard_for, StrengthClassification, STRENGTH_STANDARDS,
};
use crate::volume::{
    weekly_volume_report, LandmarkTable, MuscleGroupVolume, VolumeLandmark, WeekWindow,
};

/// Raw analysis request as read from JSON
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Session rows, unvalidated
    #[serde(default)]
    pub sessions: Vec<SessionRecord>,
    /// Reference date; defaults to the latest session date
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
    /// Latest bodyweight
    #[serde(default)]
    pub bodyweight_kg: Option<f64>,
    /// Fraction of nutrition targets met, if known
    #[serde(default)]
    pub nutrition_compliance: Option<f64>,
    /// Per-user landmark overrides
    #[serde(default)]
    pub landmark_overrides: Vec<VolumeLandmark>,
}

/// A session row dropped during validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRecord {
    /// Date of the dropped row
    pub session_date: NaiveDate,
    /// Exercise of the dropped row
    pub exercise_name: String,
    /// Validation failure
    pub reason: String,
}

/// Validated analysis input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisInput {
    /// Validated session rows
    pub sessions: Vec<SessionExercise>,
    /// Reference date closing both analysis windows
    pub as_of: NaiveDate,
    /// Latest bodyweight
    pub bodyweight_kg: Option<f64>,
    /// Fraction of nutrition targets met, if known
    pub nutrition_compliance: Option<f64>,
    /// Per-user landmark overrides
    pub landmark_overrides: Vec<VolumeLandmark>,
}

impl AnalysisRequest {
    /// Validate every row, splitting valid input from skipped records
    ///
    /// The reference date is `as_of` if set, else the latest valid session date,
    /// else `fallback_date`.
    #[must_use]
    pub fn into_input(self, fallback_date: NaiveDate) -> (AnalysisInput, Vec<SkippedRecord>) {
        let mut sessions = Vec::with_capacity(self.sessions.len());
        let mut skipped = Vec::new();

        for record in self.sessions {
            let session_date = record.session_date;
            let exercise_name = record.exercise_name.clone();
            match SessionExercise::from_record(record) {
                Ok(row) => sessions.push(row),
                Err(e) => {
                    warn!(
                        exercise = %exercise_name,
                        date = %session_date,
                        error = %e,
                        "Skipping invalid session row"
                    );
                    skipped.push(SkippedRecord {
                        session_date,
                        exercise_name,
                        reason: e.message,
                    });
                }
            }
        }

        let as_of = self
            .as_of
            .or_else(|| sessions.iter().map(|row| row.session_date).max())
            .unwrap_or(fallback_date);

        let input = AnalysisInput {
            sessions,
            as_of,
            bodyweight_kg: self.bodyweight_kg,
            nutrition_compliance: self.nutrition_compliance,
            landmark_overrides: self.landmark_overrides,
        };
        (input, skipped)
    }
}

/// Strength tier of one lift plus the milestone toward the next tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthAssessment {
    /// Classification of the lift's best e1RM in the lookback window
    pub classification: StrengthClassification,
    /// Next-tier milestone; absent when the level is unknown
    pub milestone: Option<Milestone>,
}

/// Everything the analyzer derives for one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Reference date
    pub as_of: NaiveDate,
    /// Volume and frequency window
    pub week: WeekWindow,
    /// History window for regressions and strength
    pub lookback: WeekWindow,
    /// Weekly volume per tracked muscle group
    pub volume: Vec<MuscleGroupVolume>,
    /// Regressing lifts
    pub regressions: Vec<RegressionSignal>,
    /// Fatigue per tracked muscle group
    pub fatigue: Vec<FatigueScoreResult>,
    /// Deload suggestions, most fatigued first
    pub deload_suggestions: Vec<DeloadSuggestion>,
    /// Strength classification per trained supported lift
    pub strength: Vec<StrengthAssessment>,
    /// Milestones, smallest deficit first
    pub milestones: Vec<Milestone>,
    /// Row-level progression per exercise
    pub progressions: Vec<ExerciseProgression>,
    /// Daily e1RM history per exercise
    pub e1rm_history: Vec<ExerciseHistory>,
    /// Rows dropped during validation
    pub skipped: Vec<SkippedRecord>,
}

/// Runs the full analysis pipeline
#[derive(Debug, Clone, Default)]
pub struct TrainingAnalyzer {
    config: IntelligenceConfig,
}

impl TrainingAnalyzer {
    /// Create an analyzer with an explicit configuration
    #[must_use]
    pub const fn new(config: IntelligenceConfig) -> Self {
        Self { config }
    }

    /// Create an analyzer from the global configuration
    #[must_use]
    pub fn from_global() -> Self {
        Self::new(IntelligenceConfig::global().clone())
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &IntelligenceConfig {
        &self.config
    }

    /// Validate and analyze a raw request
    #[must_use]
    pub fn analyze_request(
        &self,
        request: AnalysisRequest,
        fallback_date: NaiveDate,
    ) -> AnalysisReport {
        let (input, skipped) = request.into_input(fallback_date);
        let mut report = self.analyze(&input);
        report.skipped = skipped;
        report
    }

    /// Analyze several users independently
    #[must_use]
    pub fn analyze_batch(&self, inputs: &[AnalysisInput]) -> Vec<AnalysisReport> {
        inputs.par_iter().map(|input| self.analyze(input)).collect()
    }

    /// Analyze validated input
    #[must_use]
    pub fn analyze(&self, input: &AnalysisInput) -> AnalysisReport {
        let analysis = &self.config.analysis;
        let week = WeekWindow::ending_on(input.as_of, analysis.week_days);
        let lookback = WeekWindow::ending_on(input.as_of, analysis.lookback_days);

        let history: Vec<SessionExercise> = input
            .sessions
            .iter()
            .filter(|row| lookback.contains(row.session_date))
            .cloned()
            .collect();
        debug!(
            rows = input.sessions.len(),
            in_window = history.len(),
            as_of = %input.as_of,
            "Selected session history"
        );

        let points = session_e1rm_points(&history);
        let regressions = detect_regressions(&points, self.config.regression.min_consecutive);
        debug!(points = points.len(), regressions = regressions.len(), "Scanned e1RM series");

        let landmarks =
            LandmarkTable::with_overrides(&self.config.volume.landmarks, &input.landmark_overrides);
        let volume = weekly_volume_report(&history, week, &landmarks);

        let fatigue: Vec<FatigueScoreResult> = volume
            .par_iter()
            .map(|group| {
                compute_fatigue_score(
                    group.muscle_group,
                    &regressions,
                    group.effective_sets,
                    f64::from(group.landmark.mrv),
                    f64::from(group.weekly_frequency),
                    input.nutrition_compliance,
                    &self.config.fatigue,
                )
            })
            .collect();

        let deload_suggestions = generate_suggestions(&fatigue, &regressions, &self.config.deload);
        let strength = assess_strength(&points, input.bodyweight_kg.unwrap_or(0.0));
        let classifications: Vec<StrengthClassification> = strength
            .iter()
            .map(|assessment| assessment.classification.clone())
            .collect();
        let milestones = generate_milestones(&classifications);

        info!(
            as_of = %input.as_of,
            regressions = regressions.len(),
            deloads = deload_suggestions.len(),
            lifts = strength.len(),
            "Training analysis complete"
        );

        AnalysisReport {
            as_of: input.as_of,
            week,
            lookback,
            volume,
            regressions,
            fatigue,
            deload_suggestions,
            strength,
            milestones,
            progressions: strength_progression(&points),
            e1rm_history: e1rm_history(&points),
            skipped: Vec::new(),
        }
    }
}

/// Classify the best e1RM of every supported lift present in the points
fn assess_strength(points: &[ExerciseE1rm], bodyweight_kg: f64) -> Vec<StrengthAssessment> {
    STRENGTH_STANDARDS
        .iter()
        .filter_map(|standard| {
            let best = points
                .iter()
                .filter(|point| {
                    standard_for(&point.exercise_name)
                        .is_some_and(|found| found.lift == standard.lift)
                })
                .map(|point| point.best_e1rm)
                .fold(None, |best: Option<f64>, e1rm| match best {
                    Some(current) if e1rm <= current => Some(current),
                    _ => Some(e1rm),
                })?;
            match classify_strength(standard.lift, best, bodyweight_kg) {
                Ok(classification) => Some(StrengthAssessment {
                    milestone: milestone_for(&classification),
                    classification,
                }),
                Err(e) => {
                    warn!(lift = standard.lift, error = %e, "Strength classification failed");
                    None
                }
            }
        })
        .collect()
}
