// ABOUTME: Deload recommendation configuration for fatigued muscle groups
// ABOUTME: Configures the trigger threshold and the prescribed volume cut and duration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use strength_core::constants::{deload, fatigue};

/// Deload suggestion configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeloadConfig {
    /// Fatigue score a group must exceed to receive a suggestion
    pub fatigue_threshold: f64,
    /// Recommended reduction of weekly sets, in percent
    pub volume_reduction_pct: f64,
    /// Recommended deload length in days
    pub duration_days: u32,
}

impl Default for DeloadConfig {
    fn default() -> Self {
        Self {
            fatigue_threshold: fatigue::DELOAD_THRESHOLD,
            volume_reduction_pct: deload::VOLUME_REDUCTION_PCT,
            duration_days: deload::DURATION_DAYS,
        }
    }
}
