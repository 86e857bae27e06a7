// ABOUTME: Main library entry point for the Pierre strength training analytics engine
// ABOUTME: Re-exports the core and intelligence crates and adds logging and output formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Strength
//!
//! Training load analytics and fatigue detection for strength training logs.
//! Session rows go in; estimated maxes, effort-weighted weekly volume,
//! regression signals, fatigue scores, deload suggestions, strength tiers, and
//! milestones come out.
//!
//! ## Architecture
//!
//! - **`strength-core`**: errors, constants, validated training models
//! - **`strength-intelligence`**: the pure analytics pipeline and its configuration
//! - **this crate**: logging setup, output formatting, and the `pierre-strength` CLI
//!
//! ## Example Usage
//!
//! ```rust
//! use pierre_strength::intelligence::e1rm_calculator::compute_e1rm;
//! use pierre_strength::intelligence::strength_standards::classify_strength;
//! use pierre_strength::models::StrengthLevel;
//!
//! let estimate = compute_e1rm(70.0, 5)?;
//! let classification = classify_strength("bench press", estimate.primary, 80.0)?;
//! assert_eq!(classification.level, StrengthLevel::Intermediate);
//! # Ok::<(), pierre_strength::errors::AppError>(())
//! ```

/// Output formats for CLI results
pub mod formatters;

/// Logging configuration and structured logging
pub mod logging;

pub use strength_core::{constants, errors, models};

/// Analytics pipeline, re-exported from `strength-intelligence`
pub use strength_intelligence as intelligence;
