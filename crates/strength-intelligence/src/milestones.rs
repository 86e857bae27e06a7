// ABOUTME: Motivational strength milestones derived from strength classifications
// ABOUTME: Reports the load still needed for the next tier, closest targets first
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use strength_core::models::StrengthLevel;

use crate::strength_standards::StrengthClassification;

/// Distance from a lift's current tier to the next one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    /// Canonical lift name
    pub exercise_name: String,
    /// Tier reached
    pub current_level: StrengthLevel,
    /// Tier being worked toward; absent at elite
    pub next_level: Option<StrengthLevel>,
    /// Current e1RM
    pub current_e1rm_kg: f64,
    /// e1RM needed for `next_level`
    pub target_e1rm_kg: Option<f64>,
    /// Load still missing, never negative
    pub deficit_kg: f64,
    /// Human-readable summary
    pub message: String,
}

/// Milestone for one classification; `None` for `Unknown`
#[must_use]
pub fn milestone_for(classification: &StrengthClassification) -> Option<Milestone> {
    let level = classification.level;
    if level == StrengthLevel::Unknown {
        return None;
    }

    let next_tier = (
        classification.next_level,
        classification.next_level_threshold_kg,
    );
    let (deficit_kg, message) = match next_tier {
        (Some(next), Some(target)) => {
            let deficit = (target - classification.e1rm_kg).max(0.0);
            (
                deficit,
                format!(
                    "{:.1} kg away from {next} on {} ({:.1} kg e1RM target)",
                    deficit, classification.exercise_name, target
                ),
            )
        }
        _ => (
            0.0,
            format!(
                "Elite {}! {:.1} kg e1RM puts you at the top tier",
                classification.exercise_name, classification.e1rm_kg
            ),
        ),
    };

    Some(Milestone {
        exercise_name: classification.exercise_name.clone(),
        current_level: level,
        next_level: classification.next_level,
        current_e1rm_kg: classification.e1rm_kg,
        target_e1rm_kg: classification.next_level_threshold_kg,
        deficit_kg,
        message,
    })
}

/// Milestones for every classified lift, smallest deficit first
///
/// Unknown levels are omitted. The sort is stable.
#[must_use]
pub fn generate_milestones(classifications: &[StrengthClassification]) -> Vec<Milestone> {
    let mut milestones: Vec<Milestone> = classifications.iter().filter_map(milestone_for).collect();
    milestones.sort_by(|a, b| a.deficit_kg.total_cmp(&b.deficit_kg));
    milestones
}
