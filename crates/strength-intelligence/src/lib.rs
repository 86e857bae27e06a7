// ABOUTME: Training load analytics and fatigue detection engine for strength training logs
// ABOUTME: Pure, synchronous algorithms from e1RM estimation through deload suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Strength Intelligence
//!
//! Deterministic pipeline turning validated session rows into derived metrics and
//! recommendations. Nothing here performs I/O or holds mutable shared state, so
//! every function is safe to call from any number of threads.
//!
//! ## Modules
//!
//! - **algorithms**: enum-dispatched e1RM formulas
//! - **e1rm_calculator**: per-set estimates and best-set selection
//! - **exercise_catalog**: exercise name to muscle group lookup
//! - **volume**: effort-weighted weekly sets and landmark classification
//! - **regression_detection**: trailing e1RM decline streaks
//! - **strength_standards**: bodyweight-relative strength tiers
//! - **fatigue**: composite fatigue score per muscle group
//! - **recommendation_engine**: deload suggestions
//! - **milestones**: next-tier strength targets
//! - **progression**: e1RM history and per-exercise trends
//! - **analyzer**: the end-to-end pipeline

/// One-rep max estimation formulas
pub mod algorithms;

/// Analysis pipeline and report types
pub mod analyzer;

/// Engine configuration with environment overrides
pub mod config;

/// e1RM estimates and best-set selection
pub mod e1rm_calculator;

/// Static exercise catalog
pub mod exercise_catalog;

/// Composite fatigue scoring
pub mod fatigue;

/// Strength milestones
pub mod milestones;

/// e1RM history and strength progression
pub mod progression;

/// Deload suggestions
pub mod recommendation_engine;

/// Regression detection over e1RM series
pub mod regression_detection;

/// Strength standards and classification
pub mod strength_standards;

/// Effective-set volume aggregation
pub mod volume;

pub use analyzer::{AnalysisInput, AnalysisReport, AnalysisRequest, TrainingAnalyzer};
pub use config::IntelligenceConfig;
