// ABOUTME: Detects strength regressions from per-exercise e1RM time series
// ABOUTME: Pure fold tracking the trailing streak of consecutive session-over-session declines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Regression Detector
//!
//! Each exercise's e1RM points are scanned oldest to newest. A point strictly
//! below its predecessor extends the current decline streak; any other point
//! ends the streak and becomes the new anchor. Only the streak still running at
//! the newest point is reported, and its decline is measured against the
//! anchor it started from rather than the all-time best.

use serde::{Deserialize, Serialize};
use strength_core::models::{ExerciseE1rm, MuscleGroup};
use tracing::debug;

use crate::e1rm_calculator::series_by_exercise;
use crate::exercise_catalog::muscle_group_for;

/// A lift whose e1RM has dropped for several sessions in a row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionSignal {
    /// Exercise name as logged on the most recent point
    pub exercise_name: String,
    /// Muscle group the exercise is attributed to
    pub muscle_group: MuscleGroup,
    /// Length of the trailing decline streak
    pub consecutive_declines: usize,
    /// e1RM at the start of the streak
    pub peak_e1rm: f64,
    /// Most recent e1RM
    pub current_e1rm: f64,
    /// Drop from `peak_e1rm` to `current_e1rm`, in percent
    pub decline_pct: f64,
}

/// Trailing decline streak of a value series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeclineStreak {
    /// Value the streak started from
    pub anchor: f64,
    /// Latest value
    pub current: f64,
    /// Consecutive strict declines ending at `current`
    pub declines: usize,
}

impl DeclineStreak {
    fn start(value: f64) -> Self {
        Self {
            anchor: value,
            current: value,
            declines: 0,
        }
    }

    fn step(self, value: f64) -> Self {
        if value < self.current {
            Self {
                current: value,
                declines: self.declines + 1,
                ..self
            }
        } else {
            Self::start(value)
        }
    }

    /// Percent drop from the anchor; zero for a non-positive anchor
    #[must_use]
    pub fn decline_pct(&self) -> f64 {
        if self.anchor > 0.0 {
            (self.anchor - self.current) / self.anchor * 100.0
        } else {
            0.0
        }
    }
}

/// Fold a chronologically ordered series into its trailing decline streak
///
/// Returns `None` for an empty series.
pub fn trailing_decline<I>(values: I) -> Option<DeclineStreak>
where
    I: IntoIterator<Item = f64>,
{
    values.into_iter().fold(None, |streak, value| {
        Some(streak.map_or_else(|| DeclineStreak::start(value), |s| s.step(value)))
    })
}

/// Detect regressing exercises
///
/// Points are grouped by normalized exercise name and ordered by date (stable,
/// so same-date rows keep their input order). Every point counts; collapse
/// same-day rows beforehand if one point per date is wanted. Exercises with
/// fewer than two points are skipped and `min_consecutive == 0` yields nothing.
#[must_use]
pub fn detect_regressions(
    points: &[ExerciseE1rm],
    min_consecutive: usize,
) -> Vec<RegressionSignal> {
    if min_consecutive < 1 {
        return Vec::new();
    }

    series_by_exercise(points)
        .into_iter()
        .filter(|(_, series)| series.len() >= 2)
        .filter_map(|(key, series)| {
            let streak = trailing_decline(series.iter().map(|point| point.best_e1rm))?;
            if streak.declines < min_consecutive {
                return None;
            }
            let latest = series.last()?;
            debug!(
                exercise = %key,
                declines = streak.declines,
                decline_pct = streak.decline_pct(),
                "Regression detected"
            );
            Some(RegressionSignal {
                exercise_name: latest.exercise_name.clone(),
                muscle_group: muscle_group_for(&key),
                consecutive_declines: streak.declines,
                peak_e1rm: streak.anchor,
                current_e1rm: streak.current,
                decline_pct: streak.decline_pct(),
            })
        })
        .collect()
}

/// Regression signals attributed to one muscle group
#[must_use]
pub fn regressions_for_group(
    signals: &[RegressionSignal],
    muscle_group: MuscleGroup,
) -> Vec<&RegressionSignal> {
    signals
        .iter()
        .filter(|signal| signal.muscle_group == muscle_group)
        .collect()
}
