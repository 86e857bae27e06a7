// ABOUTME: Per-exercise e1RM history and strength progression summaries
// ABOUTME: History keeps one point per calendar date; progression keeps one point per session row
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Strength Progression
//!
//! The two views deliberately differ in granularity:
//! - [`e1rm_history`] collapses same-day rows to the day's best e1RM
//! - [`strength_progression`] keeps every row, so two sessions on one day are
//!   two points

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strength_core::models::ExerciseE1rm;

use crate::e1rm_calculator::series_by_exercise;

/// Best e1RM on one calendar date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct E1rmHistoryPoint {
    /// Calendar date
    pub date: NaiveDate,
    /// Day's best e1RM
    pub e1rm: f64,
    /// Load of the set behind it
    pub weight_kg: f64,
    /// Reps of the set behind it
    pub reps: u32,
}

/// Daily e1RM history of one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseHistory {
    /// Normalized exercise name
    pub exercise_name: String,
    /// One point per date, oldest first
    pub points: Vec<E1rmHistoryPoint>,
}

/// Daily e1RM history per exercise
///
/// Same-day rows collapse to their maximum; the earliest row wins ties.
#[must_use]
pub fn e1rm_history(points: &[ExerciseE1rm]) -> Vec<ExerciseHistory> {
    series_by_exercise(points)
        .into_iter()
        .map(|(exercise_name, series)| {
            let mut daily: Vec<E1rmHistoryPoint> = Vec::new();
            for point in series {
                match daily.last_mut() {
                    Some(last) if last.date == point.session_date => {
                        if point.best_e1rm > last.e1rm {
                            last.e1rm = point.best_e1rm;
                            last.weight_kg = point.best_weight_kg;
                            last.reps = point.best_reps;
                        }
                    }
                    _ => daily.push(E1rmHistoryPoint {
                        date: point.session_date,
                        e1rm: point.best_e1rm,
                        weight_kg: point.best_weight_kg,
                        reps: point.best_reps,
                    }),
                }
            }
            ExerciseHistory {
                exercise_name,
                points: daily,
            }
        })
        .collect()
}

/// Row-level strength trend of one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseProgression {
    /// Normalized exercise name
    pub exercise_name: String,
    /// Number of session rows
    pub sessions: usize,
    /// Oldest e1RM
    pub first_e1rm: f64,
    /// Most recent e1RM
    pub latest_e1rm: f64,
    /// Highest e1RM
    pub best_e1rm: f64,
    /// Change from first to latest, in percent
    pub change_pct: f64,
    /// Every row as (date, e1RM), oldest first
    pub series: Vec<(NaiveDate, f64)>,
}

/// Strength progression per exercise with one point per session row
#[must_use]
pub fn strength_progression(points: &[ExerciseE1rm]) -> Vec<ExerciseProgression> {
    series_by_exercise(points)
        .into_iter()
        .filter_map(|(exercise_name, series)| {
            let first = series.first()?.best_e1rm;
            let latest = series.last()?.best_e1rm;
            let best = series
                .iter()
                .map(|point| point.best_e1rm)
                .fold(f64::MIN, f64::max);
            let change_pct = if first > 0.0 {
                (latest - first) / first * 100.0
            } else {
                0.0
            };
            Some(ExerciseProgression {
                exercise_name,
                sessions: series.len(),
                first_e1rm: first,
                latest_e1rm: latest,
                best_e1rm: best,
                change_pct,
                series: series
                    .iter()
                    .map(|point| (point.session_date, point.best_e1rm))
                    .collect(),
            })
        })
        .collect()
}
