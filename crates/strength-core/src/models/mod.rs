// ABOUTME: Core data models for strength training logs
// ABOUTME: Re-exports validated sets, session rows, muscle groups, and strength levels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Raw input records are deserialized into `*Record` types and converted into
//! validated values (`TrainingSet`, `SessionExercise`) at a single boundary.
//! Everything downstream of that boundary can assume well-formed input.

/// Exercise name normalization
pub mod exercise;
/// Canonical muscle groups
pub mod muscle;
/// Session rows and per-session e1RM points
pub mod session;
/// Validated RPE and set value objects
pub mod set;
/// Strength tiers
pub mod strength;

pub use exercise::normalize_exercise_name;
pub use muscle::MuscleGroup;
pub use session::{ExerciseE1rm, SessionExercise, SessionRecord};
pub use set::{Rpe, SetKind, SetRecord, TrainingSet};
pub use strength::StrengthLevel;
