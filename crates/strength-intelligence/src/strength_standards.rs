// ABOUTME: Bodyweight-relative strength standards for the five canonical barbell lifts
// ABOUTME: Classifies an e1RM into beginner..elite tiers and reports the next tier's target load
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Strength Classifier
//!
//! Each supported lift carries four strictly ascending bodyweight multipliers
//! (beginner, intermediate, advanced, elite). A tier's target load is its
//! multiplier times bodyweight, and the level is the highest tier whose target
//! the e1RM meets. The same product is published as the next tier's target, so
//! lifting exactly that load always promotes. An e1RM below the beginner target,
//! or a missing bodyweight, classifies as `Unknown`.
//!
//! Common aliases resolve to the canonical lift, so "Bench Press" and
//! "barbell  bench press" classify identically.

use serde::{Deserialize, Serialize};
use strength_core::errors::{AppError, AppResult};
use strength_core::models::{normalize_exercise_name, StrengthLevel};

/// Multipliers for one canonical lift
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StrengthStandard {
    /// Canonical lift name
    pub lift: &'static str,
    /// Alternative names resolving to this lift (normalized)
    pub aliases: &'static [&'static str],
    /// Beginner, intermediate, advanced, elite multipliers of bodyweight
    pub multipliers: [f64; 4],
}

impl StrengthStandard {
    /// Multiplier for a ranked level; `None` for `Unknown`
    #[must_use]
    pub fn multiplier(&self, level: StrengthLevel) -> Option<f64> {
        StrengthLevel::RANKED
            .iter()
            .position(|ranked| *ranked == level)
            .map(|index| self.multipliers[index])
    }

    /// Target load for a ranked level at a bodyweight; `None` for `Unknown`
    #[must_use]
    pub fn threshold_kg(&self, level: StrengthLevel, bodyweight_kg: f64) -> Option<f64> {
        self.multiplier(level).map(|multiplier| multiplier * bodyweight_kg)
    }

    /// Highest level whose target load the e1RM meets
    ///
    /// A non-positive or non-finite bodyweight or e1RM yields `Unknown`.
    #[must_use]
    pub fn level_for_load(&self, e1rm_kg: f64, bodyweight_kg: f64) -> StrengthLevel {
        let usable = bodyweight_kg.is_finite()
            && bodyweight_kg > 0.0
            && e1rm_kg.is_finite()
            && e1rm_kg > 0.0;
        if !usable {
            return StrengthLevel::Unknown;
        }
        StrengthLevel::RANKED
            .into_iter()
            .take_while(|level| {
                self.threshold_kg(*level, bodyweight_kg)
                    .is_some_and(|target| e1rm_kg >= target)
            })
            .last()
            .unwrap_or(StrengthLevel::Unknown)
    }

    fn matches(&self, normalized: &str) -> bool {
        self.lift == normalized || self.aliases.iter().any(|alias| *alias == normalized)
    }
}

/// Supported lifts and their standards
pub static STRENGTH_STANDARDS: [StrengthStandard; 5] = [
    StrengthStandard {
        lift: "barbell bench press",
        aliases: &["bench press", "bench", "flat bench press"],
        multipliers: [0.5, 1.0, 1.5, 2.0],
    },
    StrengthStandard {
        lift: "barbell back squat",
        aliases: &["back squat", "squat", "barbell squat"],
        multipliers: [0.75, 1.25, 1.75, 2.5],
    },
    StrengthStandard {
        lift: "conventional deadlift",
        aliases: &["deadlift", "barbell deadlift"],
        multipliers: [1.0, 1.5, 2.0, 3.0],
    },
    StrengthStandard {
        lift: "overhead press",
        aliases: &["ohp", "military press", "barbell overhead press"],
        multipliers: [0.35, 0.55, 0.8, 1.1],
    },
    StrengthStandard {
        lift: "barbell row",
        aliases: &["bent over row", "barbell bent over row", "pendlay row"],
        multipliers: [0.5, 0.75, 1.0, 1.5],
    },
];

/// Standard for an exercise name or alias
#[must_use]
pub fn standard_for(exercise: &str) -> Option<&'static StrengthStandard> {
    let normalized = normalize_exercise_name(exercise);
    STRENGTH_STANDARDS
        .iter()
        .find(|standard| standard.matches(&normalized))
}

/// Whether an exercise can be classified
#[must_use]
pub fn is_supported(exercise: &str) -> bool {
    standard_for(exercise).is_some()
}

/// Canonical names of all supported lifts
#[must_use]
pub fn supported_lifts() -> Vec<&'static str> {
    STRENGTH_STANDARDS.iter().map(|standard| standard.lift).collect()
}

/// Strength tier of one lift relative to bodyweight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthClassification {
    /// Canonical lift name
    pub exercise_name: String,
    /// Estimated one-rep max
    pub e1rm_kg: f64,
    /// Bodyweight used for the ratio
    pub bodyweight_kg: f64,
    /// e1RM divided by bodyweight; 0 without a usable bodyweight
    pub ratio: f64,
    /// Highest tier met
    pub level: StrengthLevel,
    /// Tier above `level`; absent at elite
    pub next_level: Option<StrengthLevel>,
    /// Load needed to reach `next_level`
    pub next_level_threshold_kg: Option<f64>,
}

/// Classify a lift's e1RM against bodyweight standards
///
/// # Errors
///
/// Returns `AppError::unsupported_exercise` if the exercise is not one of the
/// supported lifts or their aliases
pub fn classify_strength(
    exercise: &str,
    e1rm_kg: f64,
    bodyweight_kg: f64,
) -> AppResult<StrengthClassification> {
    let standard =
        standard_for(exercise).ok_or_else(|| AppError::unsupported_exercise(exercise))?;

    let ratio = if bodyweight_kg > 0.0 && e1rm_kg.is_finite() && e1rm_kg > 0.0 {
        e1rm_kg / bodyweight_kg
    } else {
        0.0
    };
    let level = standard.level_for_load(e1rm_kg, bodyweight_kg);
    let next_level = level.next();
    let usable_bodyweight = if bodyweight_kg.is_finite() {
        bodyweight_kg.max(0.0)
    } else {
        0.0
    };
    let next_level_threshold_kg =
        next_level.and_then(|next| standard.threshold_kg(next, usable_bodyweight));

    Ok(StrengthClassification {
        exercise_name: standard.lift.to_owned(),
        e1rm_kg,
        bodyweight_kg,
        ratio,
        level,
        next_level,
        next_level_threshold_kg,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multipliers_strictly_ascending() {
        for standard in &STRENGTH_STANDARDS {
            assert!(
                standard.multipliers.windows(2).all(|w| w[0] < w[1]),
                "{} thresholds not ascending",
                standard.lift
            );
        }
    }

    #[test]
    fn test_aliases_do_not_collide() {
        let mut seen = std::collections::HashSet::new();
        for standard in &STRENGTH_STANDARDS {
            assert!(seen.insert(standard.lift));
            for alias in standard.aliases {
                assert_eq!(normalize_exercise_name(alias), *alias);
                assert!(seen.insert(*alias), "alias {alias} reused");
            }
        }
    }

    #[test]
    fn test_level_for_load_boundaries() {
        let bench = &STRENGTH_STANDARDS[0];
        assert_eq!(bench.level_for_load(39.0, 80.0), StrengthLevel::Unknown);
        assert_eq!(bench.level_for_load(40.0, 80.0), StrengthLevel::Beginner);
        assert_eq!(bench.level_for_load(159.0, 80.0), StrengthLevel::Advanced);
        assert_eq!(bench.level_for_load(160.0, 80.0), StrengthLevel::Elite);
        assert_eq!(bench.level_for_load(160.0, 0.0), StrengthLevel::Unknown);
        assert_eq!(bench.level_for_load(f64::NAN, 80.0), StrengthLevel::Unknown);
    }

    #[test]
    fn test_published_target_promotes_at_awkward_bodyweight() {
        let bench = &STRENGTH_STANDARDS[0];
        let target = bench.threshold_kg(StrengthLevel::Advanced, 42.8).unwrap();
        assert_eq!(bench.level_for_load(target, 42.8), StrengthLevel::Advanced);
    }
}
