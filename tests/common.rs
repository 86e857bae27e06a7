// ABOUTME: Shared test utilities and fixture builders for integration tests
// ABOUTME: Provides dates, sets, session rows, e1RM points, and the end-to-end training week
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `pierre_strength`

use std::sync::Once;

use chrono::NaiveDate;
use pierre_strength::intelligence::regression_detection::RegressionSignal;
use pierre_strength::models::{ExerciseE1rm, MuscleGroup, SessionExercise, TrainingSet};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("warn")
            .with_test_writer()
            .try_init();
    });
}

/// A date in March 2025
pub fn day(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
}

/// Working set
pub fn working(reps: u32, weight_kg: f64, rpe: Option<f64>) -> TrainingSet {
    TrainingSet::working(reps, weight_kg, rpe).unwrap()
}

/// Warm-up set
pub fn warmup(reps: u32, weight_kg: f64) -> TrainingSet {
    TrainingSet::warmup(reps, weight_kg).unwrap()
}

/// Session row
pub fn row(date: NaiveDate, exercise: &str, sets: Vec<TrainingSet>) -> SessionExercise {
    SessionExercise::new(date, exercise, sets)
}

/// e1RM point as produced by the best-set selector
pub fn point(date: NaiveDate, exercise: &str, e1rm: f64) -> ExerciseE1rm {
    ExerciseE1rm {
        session_date: date,
        exercise_name: exercise.to_owned(),
        best_e1rm: e1rm,
        best_weight_kg: e1rm,
        best_reps: 1,
    }
}

/// Points for one exercise on consecutive days starting March 1st
pub fn series(exercise: &str, values: &[f64]) -> Vec<ExerciseE1rm> {
    values
        .iter()
        .zip(1..)
        .map(|(value, offset)| point(day(offset), exercise, *value))
        .collect()
}

/// Regression signal with the given decline
pub fn signal(exercise: &str, muscle_group: MuscleGroup, decline_pct: f64) -> RegressionSignal {
    RegressionSignal {
        exercise_name: exercise.to_owned(),
        muscle_group,
        consecutive_declines: 2,
        peak_e1rm: 100.0,
        current_e1rm: 100.0 - decline_pct,
        decline_pct,
    }
}

/// Five chest sessions on March 3rd through 7th
///
/// Bench press singles go 100, 105, 110, 105, 100 kg and incline singles go
/// 90, 90, 90, 88, 86 kg. Each day has three bench and two incline unrated
/// working sets plus a bench warm-up, so chest gets 25 effective sets across
/// five distinct days.
pub fn declining_chest_week() -> Vec<SessionExercise> {
    let bench = [100.0, 105.0, 110.0, 105.0, 100.0];
    let incline = [90.0, 90.0, 90.0, 88.0, 86.0];
    bench
        .iter()
        .zip(incline)
        .zip(3..)
        .flat_map(|((bench_kg, incline_kg), date)| {
            [
                row(
                    day(date),
                    "Barbell Bench Press",
                    vec![
                        warmup(8, 60.0),
                        working(1, *bench_kg, None),
                        working(1, *bench_kg, None),
                        working(1, *bench_kg, None),
                    ],
                ),
                row(
                    day(date),
                    "Incline Bench Press",
                    vec![working(1, incline_kg, None), working(1, incline_kg, None)],
                ),
            ]
        })
        .collect()
}

/// Assert two floats are within `1e-6`
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}
