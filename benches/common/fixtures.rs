// ABOUTME: Benchmark fixtures for generating realistic strength training logs
// ABOUTME: Provides deterministic data generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for generating realistic strength training logs.
//!
//! Data is deterministic: loads cycle with the row index so two runs see the
//! same regressions and the same volume distribution.

use chrono::{Duration, NaiveDate};
use pierre_strength::models::{SessionExercise, TrainingSet};

/// Predefined log sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum LogSize {
    /// Four weeks of training, about 100 rows
    Month,
    /// Six months of training, about 600 rows
    HalfYear,
}

impl LogSize {
    #[must_use]
    pub const fn days(self) -> i64 {
        match self {
            Self::Month => 28,
            Self::HalfYear => 168,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Month => "month",
            Self::HalfYear => "half_year",
        }
    }
}

const SPLIT: [&[&str]; 4] = [
    &["barbell bench press", "incline dumbbell press", "triceps pushdown", "lateral raise"],
    &["barbell back squat", "romanian deadlift", "leg press", "standing calf raise"],
    &["overhead press", "barbell row", "lat pulldown", "barbell curl"],
    &["conventional deadlift", "leg curl", "hip thrust", "cable crunch"],
];

/// Last day covered by generated logs
#[must_use]
pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 30).unwrap_or_default()
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn generate_row(day_index: i64, slot: usize, exercise: &str) -> SessionExercise {
    let date = reference_date() - Duration::days(day_index);
    let base = 40.0 + (slot as f64) * 15.0;
    let wave = ((day_index * 7 + slot as i64 * 3) % 11) as f64;
    let rpe = 6.5 + ((day_index + slot as i64) % 4) as f64;

    let mut sets = Vec::with_capacity(4);
    if let Ok(warmup) = TrainingSet::warmup(8, base * 0.5) {
        sets.push(warmup);
    }
    for offset in 0..3_u32 {
        if let Ok(set) = TrainingSet::working(5 + offset, base + wave, Some(rpe)) {
            sets.push(set);
        }
    }
    SessionExercise::new(date, exercise, sets)
}

/// Generate a training log with one session every other day on a four-day split
#[must_use]
pub fn generate_log(size: LogSize) -> Vec<SessionExercise> {
    (0..size.days())
        .rev()
        .step_by(2)
        .flat_map(|day_index| {
            let day_exercises = SPLIT[(day_index / 2) as usize % SPLIT.len()];
            day_exercises
                .iter()
                .enumerate()
                .map(move |(slot, exercise)| generate_row(day_index, slot, exercise))
        })
        .collect()
}
