// ABOUTME: Validated value objects for RPE and individual training sets
// ABOUTME: Consolidates NaN, negative, and out-of-range coercion at one boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Set Value Objects
//!
//! `SetRecord` is the raw shape read from a session store or JSON file.
//! `TrainingSet` is the validated form every algorithm consumes:
//! - weight is finite and non-negative
//! - reps are non-negative
//! - RPE, when present, lies in `[1, 10]`

use serde::{Deserialize, Serialize};

use crate::constants::effort::{RPE_MAX, RPE_MIN};
use crate::errors::{AppError, AppResult};

/// Rate of perceived exertion, clamped to `[1, 10]`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Rpe(f64);

impl Rpe {
    /// Build an RPE from a raw rating
    ///
    /// Returns `None` for NaN (treated as "not rated"). Finite and infinite
    /// values are clamped into `[1, 10]`.
    #[must_use]
    pub fn new(value: f64) -> Option<Self> {
        if value.is_nan() {
            return None;
        }
        Some(Self(value.clamp(RPE_MIN, RPE_MAX)))
    }

    /// Convert an optional raw rating, dropping NaN
    #[must_use]
    pub fn from_optional(value: Option<f64>) -> Option<Self> {
        value.and_then(Self::new)
    }

    /// The clamped rating
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Rpe {
    type Error = AppError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| AppError::invalid_input("RPE must be a number"))
    }
}

impl From<Rpe> for f64 {
    fn from(rpe: Rpe) -> Self {
        rpe.0
    }
}

/// Whether a set counts toward training volume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetKind {
    /// Counted working set
    #[default]
    Working,
    /// Warm-up set, excluded from volume
    Warmup,
}

/// Raw set as supplied by a session store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetRecord {
    /// Repetitions performed; negative values are rejected during validation
    pub reps: i64,
    /// Load in kilograms
    pub weight_kg: f64,
    /// Optional effort rating
    #[serde(default)]
    pub rpe: Option<f64>,
    /// Working or warm-up
    #[serde(default, alias = "set_type")]
    pub kind: SetKind,
}

/// A validated training set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SetRecord", into = "SetRecord")]
pub struct TrainingSet {
    reps: u32,
    weight_kg: f64,
    rpe: Option<Rpe>,
    kind: SetKind,
}

impl TrainingSet {
    /// Create a validated set
    ///
    /// # Errors
    ///
    /// Returns `AppError::invalid_input` if `weight_kg` is negative, NaN, or infinite
    pub fn new(reps: u32, weight_kg: f64, rpe: Option<f64>, kind: SetKind) -> AppResult<Self> {
        if !weight_kg.is_finite() || weight_kg < 0.0 {
            return Err(AppError::invalid_input(format!(
                "weight_kg must be a finite, non-negative number (got {weight_kg})"
            )));
        }
        Ok(Self {
            reps,
            weight_kg,
            rpe: Rpe::from_optional(rpe),
            kind,
        })
    }

    /// Shorthand for a working set
    ///
    /// # Errors
    ///
    /// Same conditions as [`TrainingSet::new`]
    pub fn working(reps: u32, weight_kg: f64, rpe: Option<f64>) -> AppResult<Self> {
        Self::new(reps, weight_kg, rpe, SetKind::Working)
    }

    /// Shorthand for a warm-up set
    ///
    /// # Errors
    ///
    /// Same conditions as [`TrainingSet::new`]
    pub fn warmup(reps: u32, weight_kg: f64) -> AppResult<Self> {
        Self::new(reps, weight_kg, None, SetKind::Warmup)
    }

    /// Repetitions performed
    #[must_use]
    pub const fn reps(&self) -> u32 {
        self.reps
    }

    /// Load in kilograms
    #[must_use]
    pub const fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Effort rating, if recorded
    #[must_use]
    pub const fn rpe(&self) -> Option<Rpe> {
        self.rpe
    }

    /// Working or warm-up
    #[must_use]
    pub const fn kind(&self) -> SetKind {
        self.kind
    }

    /// Whether this set counts toward volume
    #[must_use]
    pub const fn is_working(&self) -> bool {
        matches!(self.kind, SetKind::Working)
    }
}

impl TryFrom<SetRecord> for TrainingSet {
    type Error = AppError;

    fn try_from(record: SetRecord) -> Result<Self, Self::Error> {
        let reps = u32::try_from(record.reps).map_err(|_| {
            AppError::invalid_input(format!(
                "reps must be a non-negative integer (got {})",
                record.reps
            ))
        })?;
        Self::new(reps, record.weight_kg, record.rpe, record.kind)
    }
}

impl From<TrainingSet> for SetRecord {
    fn from(set: TrainingSet) -> Self {
        Self {
            reps: i64::from(set.reps),
            weight_kg: set.weight_kg,
            rpe: set.rpe.map(Rpe::value),
            kind: set.kind,
        }
    }
}
