// ABOUTME: Core types and constants for the Pierre strength analytics engine
// ABOUTME: Foundation crate with error handling, validated training models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Strength Core
//!
//! Foundation crate providing shared types and constants for the Pierre strength
//! analytics engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Physiological and domain constants (rep caps, effort multipliers, landmarks)
//! - **models**: Validated training data (`Rpe`, `TrainingSet`, `SessionExercise`, `MuscleGroup`)

/// Unified error handling system with standard error codes
pub mod errors;

/// Domain constants organized by concern
pub mod constants;

/// Core data models for strength training logs and derived results
pub mod models;
