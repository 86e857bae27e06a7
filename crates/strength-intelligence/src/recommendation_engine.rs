// ABOUTME: Deload suggestion engine turning fatigue scores and regressions into prescriptions
// ABOUTME: One suggestion per muscle group above the fatigue threshold, naming its worst regression
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use strength_core::constants::deload::{GENERAL_DECLINE_SESSIONS, GENERAL_EXERCISE};
use strength_core::models::MuscleGroup;
use tracing::debug;

use crate::config::DeloadConfig;
use crate::fatigue::FatigueScoreResult;
use crate::regression_detection::RegressionSignal;

/// Recommended deload for a fatigued muscle group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeloadSuggestion {
    /// Fatigued muscle group
    pub muscle_group: MuscleGroup,
    /// Fatigue score that triggered the suggestion
    pub fatigue_score: f64,
    /// Worst regressing exercise, or `"general"` without one
    pub exercise_name: String,
    /// Decline of that exercise in percent
    pub decline_pct: f64,
    /// Consecutive declining sessions of that exercise
    pub decline_sessions: usize,
    /// Recommended cut in weekly sets, in percent
    pub volume_reduction_pct: f64,
    /// Recommended deload length
    pub duration_days: u32,
    /// Human-readable summary
    pub message: String,
}

impl DeloadSuggestion {
    /// Whether the suggestion is backed by a specific regressing lift
    #[must_use]
    pub fn is_general(&self) -> bool {
        self.exercise_name == GENERAL_EXERCISE
    }
}

/// Regression with the largest decline for a group; the first wins ties
fn worst_regression<'a>(
    regressions: &'a [RegressionSignal],
    muscle_group: MuscleGroup,
) -> Option<&'a RegressionSignal> {
    regressions
        .iter()
        .filter(|signal| signal.muscle_group == muscle_group)
        .fold(None, |worst: Option<&RegressionSignal>, signal| match worst {
            Some(current) if signal.decline_pct <= current.decline_pct => Some(current),
            _ => Some(signal),
        })
}

fn build_suggestion(
    score: &FatigueScoreResult,
    regressions: &[RegressionSignal],
    config: &DeloadConfig,
) -> DeloadSuggestion {
    let (exercise_name, decline_pct, decline_sessions) =
        worst_regression(regressions, score.muscle_group).map_or_else(
            || (GENERAL_EXERCISE.to_owned(), 0.0, GENERAL_DECLINE_SESSIONS),
            |signal| {
                (
                    signal.exercise_name.clone(),
                    signal.decline_pct,
                    signal.consecutive_declines,
                )
            },
        );

    let message = if exercise_name == GENERAL_EXERCISE {
        format!(
            "{} fatigue is {:.0}/100. Reduce weekly {} volume by {:.0}% for {} days.",
            score.muscle_group,
            score.score,
            score.muscle_group,
            config.volume_reduction_pct,
            config.duration_days
        )
    } else {
        format!(
            "{} fatigue is {:.0}/100 and {} has dropped {:.1}% over {} sessions. \
             Reduce weekly {} volume by {:.0}% for {} days.",
            score.muscle_group,
            score.score,
            exercise_name,
            decline_pct,
            decline_sessions,
            score.muscle_group,
            config.volume_reduction_pct,
            config.duration_days
        )
    };

    DeloadSuggestion {
        muscle_group: score.muscle_group,
        fatigue_score: score.score,
        exercise_name,
        decline_pct,
        decline_sessions,
        volume_reduction_pct: config.volume_reduction_pct,
        duration_days: config.duration_days,
        message,
    }
}

/// Generate deload suggestions for groups scoring above the threshold
///
/// Output is ordered by fatigue score, highest first; equal scores fall back
/// to muscle group order.
#[must_use]
pub fn generate_suggestions(
    scores: &[FatigueScoreResult],
    regressions: &[RegressionSignal],
    config: &DeloadConfig,
) -> Vec<DeloadSuggestion> {
    let mut suggestions: Vec<DeloadSuggestion> = scores
        .iter()
        .filter(|score| score.score > config.fatigue_threshold)
        .map(|score| build_suggestion(score, regressions, config))
        .collect();

    suggestions.sort_by(|a, b| {
        b.fatigue_score
            .partial_cmp(&a.fatigue_score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.muscle_group.cmp(&b.muscle_group))
    });

    debug!(
        threshold = config.fatigue_threshold,
        count = suggestions.len(),
        "Generated deload suggestions"
    );
    suggestions
}
