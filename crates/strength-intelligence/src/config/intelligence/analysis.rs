// ABOUTME: Analysis window and regression detection configuration
// ABOUTME: Configures lookback, weekly window length, and the decline streak minimum
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use strength_core::constants::{analysis, regression};

/// Regression detector configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegressionConfig {
    /// Trailing consecutive declines required to flag a lift
    pub min_consecutive: usize,
}

impl Default for RegressionConfig {
    fn default() -> Self {
        Self {
            min_consecutive: regression::MIN_CONSECUTIVE_DECLINES,
        }
    }
}

/// Time windows used by the analysis pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Length of the volume/frequency window ending on the reference date
    pub week_days: u32,
    /// Days of history considered for regressions, strength, and progression
    pub lookback_days: u32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            week_days: analysis::WEEK_DAYS,
            lookback_days: analysis::LOOKBACK_DAYS,
        }
    }
}
