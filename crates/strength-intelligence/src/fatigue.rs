// ABOUTME: Composite 0-100 fatigue score per muscle group from four weighted components
// ABOUTME: Regression, volume-vs-MRV, frequency, and nutrition signals, each saturating at 1
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Fatigue Scorer
//!
//! ```text
//! score = 100 * (w_r * regression + w_v * volume + w_f * frequency + w_n * nutrition)
//! ```
//!
//! Each component lies in `[0, 1]` and the score is clamped to `[0, 100]`.
//! Scoring never fails: NaN and negative inputs count as zero, and unknown
//! nutrition compliance counts as compliant so missing data cannot raise fatigue.

use serde::{Deserialize, Serialize};
use strength_core::constants::fatigue::MAX_SCORE;
use strength_core::models::MuscleGroup;

use crate::config::FatigueConfig;
use crate::regression_detection::RegressionSignal;

/// Composite fatigue for one muscle group with its component breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FatigueScoreResult {
    /// Muscle group scored
    pub muscle_group: MuscleGroup,
    /// Weighted composite in `[0, 100]`
    pub score: f64,
    /// Regressing lifts relative to saturation, in `[0, 1]`
    pub regression_component: f64,
    /// Weekly effective sets relative to MRV, in `[0, 1]`
    pub volume_component: f64,
    /// Weekly sessions relative to saturation, in `[0, 1]`
    pub frequency_component: f64,
    /// Nutrition shortfall, in `[0, 1]`
    pub nutrition_component: f64,
}

/// NaN and negatives become zero
fn non_negative(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.max(0.0)
    }
}

fn saturating_ratio(value: f64, saturation: f64) -> f64 {
    let saturation = non_negative(saturation);
    if saturation > 0.0 {
        (non_negative(value) / saturation).min(1.0)
    } else {
        0.0
    }
}

/// Regressing lifts over the saturation count, capped at 1
#[must_use]
pub fn regression_component(regressions: f64, saturation: f64) -> f64 {
    saturating_ratio(regressions, saturation)
}

/// Weekly effective sets over MRV, capped at 1; zero when MRV is zero
#[must_use]
pub fn volume_component(weekly_sets: f64, mrv_sets: f64) -> f64 {
    saturating_ratio(weekly_sets, mrv_sets)
}

/// Weekly sessions over the saturation count, capped at 1
#[must_use]
pub fn frequency_component(weekly_frequency: f64, saturation: f64) -> f64 {
    saturating_ratio(weekly_frequency, saturation)
}

/// Nutrition shortfall below the compliant ratio
///
/// Unknown (or NaN) compliance contributes nothing.
#[must_use]
pub fn nutrition_component(compliance: Option<f64>, compliant_ratio: f64) -> f64 {
    match compliance.filter(|c| !c.is_nan()) {
        Some(c) if c < compliant_ratio => (1.0 - non_negative(c)).min(1.0),
        _ => 0.0,
    }
}

/// Compute the composite fatigue score for one muscle group
///
/// Only regressions attributed to `muscle_group` count toward its regression
/// component.
#[must_use]
pub fn compute_fatigue_score(
    muscle_group: MuscleGroup,
    regressions: &[RegressionSignal],
    weekly_sets: f64,
    mrv_sets: f64,
    weekly_frequency: f64,
    nutrition_compliance: Option<f64>,
    config: &FatigueConfig,
) -> FatigueScoreResult {
    let group_regressions = regressions
        .iter()
        .filter(|signal| signal.muscle_group == muscle_group)
        .count();

    let regression = regression_component(
        group_regressions as f64,
        config.saturation.regressions,
    );
    let volume = volume_component(weekly_sets, mrv_sets);
    let frequency = frequency_component(weekly_frequency, config.saturation.weekly_frequency);
    let nutrition = nutrition_component(nutrition_compliance, config.nutrition_compliant_ratio);

    let weights = &config.weights;
    let weighted = nutrition.mul_add(
        weights.nutrition,
        frequency.mul_add(
            weights.frequency,
            volume.mul_add(weights.volume, regression * weights.regression),
        ),
    );
    let score = weighted * MAX_SCORE;
    let score = if score.is_finite() {
        score.clamp(0.0, MAX_SCORE)
    } else {
        0.0
    };

    FatigueScoreResult {
        muscle_group,
        score,
        regression_component: regression,
        volume_component: volume,
        frequency_component: frequency,
        nutrition_component: nutrition,
    }
}
