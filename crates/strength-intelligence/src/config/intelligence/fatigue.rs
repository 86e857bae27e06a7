// ABOUTME: Fatigue scoring configuration for the composite muscle-group score
// ABOUTME: Configures component weights, saturation points, and nutrition compliance cutoff
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Fatigue Scoring Configuration
//!
//! The composite score is `100 * Σ weight_i * component_i`, clamped to `[0, 100]`.
//! Each component saturates at 1.0 once its driver reaches the configured point.

use serde::{Deserialize, Serialize};
use strength_core::constants::fatigue;

/// Fatigue scorer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FatigueConfig {
    /// Component weights
    pub weights: FatigueWeights,
    /// Component saturation points
    pub saturation: FatigueSaturation,
    /// Compliance ratio at or above which nutrition adds no fatigue
    pub nutrition_compliant_ratio: f64,
}

/// Relative weight of each fatigue component; must sum to 1.0
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FatigueWeights {
    /// Weight for e1RM regressions
    pub regression: f64,
    /// Weight for weekly volume relative to MRV
    pub volume: f64,
    /// Weight for weekly training frequency
    pub frequency: f64,
    /// Weight for nutrition non-compliance
    pub nutrition: f64,
}

/// Driver values at which each component reaches 1.0
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FatigueSaturation {
    /// Regressing lifts per muscle group
    pub regressions: f64,
    /// Sessions per week hitting the muscle group
    pub weekly_frequency: f64,
}

impl FatigueWeights {
    /// Sum of all weights
    #[must_use]
    pub fn total(&self) -> f64 {
        self.regression + self.volume + self.frequency + self.nutrition
    }
}

impl Default for FatigueWeights {
    fn default() -> Self {
        Self {
            regression: fatigue::REGRESSION_WEIGHT,
            volume: fatigue::VOLUME_WEIGHT,
            frequency: fatigue::FREQUENCY_WEIGHT,
            nutrition: fatigue::NUTRITION_WEIGHT,
        }
    }
}

impl Default for FatigueSaturation {
    fn default() -> Self {
        Self {
            regressions: fatigue::REGRESSION_SATURATION,
            weekly_frequency: fatigue::FREQUENCY_SATURATION,
        }
    }
}

impl Default for FatigueConfig {
    fn default() -> Self {
        Self {
            weights: FatigueWeights::default(),
            saturation: FatigueSaturation::default(),
            nutrition_compliant_ratio: fatigue::NUTRITION_COMPLIANT_RATIO,
        }
    }
}
