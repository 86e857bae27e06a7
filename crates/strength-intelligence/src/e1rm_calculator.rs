// ABOUTME: Estimated one-rep max calculator and deterministic best-set selection
// ABOUTME: Turns validated session rows into per-row e1RM points for downstream analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! E1RM Calculator
//!
//! `compute_e1rm` reports all three formulas for a single set with Epley as the
//! primary estimate. Rep counts above 30 are rejected rather than extrapolated:
//! the formulas stop tracking real maxima well before that point.
//!
//! `best_e1rm_for_exercise` selects the set with the highest Epley estimate.
//! Ties keep the first set encountered.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strength_core::constants::e1rm::MAX_REPS;
use strength_core::errors::{AppError, AppResult};
use strength_core::models::{normalize_exercise_name, ExerciseE1rm, SessionExercise, TrainingSet};

use crate::algorithms::E1rmFormula;

/// All formula estimates for one set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct E1rmEstimate {
    /// Epley estimate
    pub epley: f64,
    /// Brzycki estimate
    pub brzycki: f64,
    /// Lombardi estimate
    pub lombardi: f64,
    /// Estimate used downstream (Epley)
    pub primary: f64,
}

impl E1rmEstimate {
    /// Estimate for a specific formula
    #[must_use]
    pub const fn for_formula(&self, formula: E1rmFormula) -> f64 {
        match formula {
            E1rmFormula::Epley => self.epley,
            E1rmFormula::Brzycki => self.brzycki,
            E1rmFormula::Lombardi => self.lombardi,
        }
    }
}

/// Compute estimated one-rep max for a single set
///
/// # Errors
///
/// Returns `AppError::invalid_input` when `weight_kg` is negative or not finite,
/// when `reps` is negative, or when `reps` exceeds 30
pub fn compute_e1rm(weight_kg: f64, reps: i32) -> AppResult<E1rmEstimate> {
    if !weight_kg.is_finite() || weight_kg < 0.0 {
        return Err(AppError::invalid_input(format!(
            "weight_kg must be a finite, non-negative number (got {weight_kg})"
        )));
    }
    let reps = u32::try_from(reps)
        .map_err(|_| AppError::invalid_input(format!("reps must be >= 0 (got {reps})")))?;
    if reps > MAX_REPS {
        return Err(AppError::invalid_input(format!(
            "reps must be <= {MAX_REPS} for e1RM estimation (got {reps})"
        )));
    }
    Ok(estimate_validated(weight_kg, reps))
}

fn estimate_validated(weight_kg: f64, reps: u32) -> E1rmEstimate {
    let epley = E1rmFormula::Epley.estimate(weight_kg, reps);
    E1rmEstimate {
        epley,
        brzycki: E1rmFormula::Brzycki.estimate(weight_kg, reps),
        lombardi: E1rmFormula::Lombardi.estimate(weight_kg, reps),
        primary: epley,
    }
}

/// The winning set of a best-set selection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BestSet {
    /// Position of the set within the input slice
    pub index: usize,
    /// Load of the set
    pub weight_kg: f64,
    /// Reps of the set
    pub reps: u32,
    /// Epley estimate of the set
    pub e1rm: f64,
}

/// Whether a set can produce a meaningful estimate
#[must_use]
pub fn is_estimable(set: &TrainingSet) -> bool {
    set.weight_kg() > 0.0 && (1..=MAX_REPS).contains(&set.reps())
}

/// Select the set with the highest Epley e1RM
///
/// Only sets with positive weight and 1..=30 reps qualify. Returns `None` when
/// no set qualifies. Ties resolve to the earliest set.
#[must_use]
pub fn best_e1rm_for_exercise(sets: &[TrainingSet]) -> Option<BestSet> {
    sets.iter()
        .enumerate()
        .filter(|(_, set)| is_estimable(set))
        .map(|(index, set)| BestSet {
            index,
            weight_kg: set.weight_kg(),
            reps: set.reps(),
            e1rm: E1rmFormula::Epley.estimate(set.weight_kg(), set.reps()),
        })
        .fold(None, |best: Option<BestSet>, candidate| match best {
            Some(current) if candidate.e1rm <= current.e1rm => Some(current),
            _ => Some(candidate),
        })
}

/// Best e1RM point for one session row, if any set qualifies
#[must_use]
pub fn session_e1rm(row: &SessionExercise) -> Option<ExerciseE1rm> {
    best_e1rm_for_exercise(&row.sets).map(|best| ExerciseE1rm {
        session_date: row.session_date,
        exercise_name: row.exercise_name.clone(),
        best_e1rm: best.e1rm,
        best_weight_kg: best.weight_kg,
        best_reps: best.reps,
    })
}

/// One e1RM point per session row, in input order
///
/// Rows without a qualifying set produce no point.
#[must_use]
pub fn session_e1rm_points(rows: &[SessionExercise]) -> Vec<ExerciseE1rm> {
    rows.iter().filter_map(session_e1rm).collect()
}

/// Group points by normalized exercise name, each series sorted by date
///
/// The sort is stable, so same-date rows keep their input order. Keys are the
/// normalized names; each point keeps the name as logged.
#[must_use]
pub fn series_by_exercise(points: &[ExerciseE1rm]) -> BTreeMap<String, Vec<&ExerciseE1rm>> {
    let mut series: BTreeMap<String, Vec<&ExerciseE1rm>> = BTreeMap::new();
    for point in points {
        series
            .entry(normalize_exercise_name(&point.exercise_name))
            .or_default()
            .push(point);
    }
    for points in series.values_mut() {
        points.sort_by_key(|point| point.session_date);
    }
    series
}
