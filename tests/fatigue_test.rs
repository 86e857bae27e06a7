// ABOUTME: Integration tests for composite fatigue scoring
// ABOUTME: Covers component saturation, bounds under hostile input, and group attribution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{assert_close, signal};
use pierre_strength::intelligence::config::FatigueConfig;
use pierre_strength::intelligence::fatigue::{compute_fatigue_score, volume_component};
use pierre_strength::models::MuscleGroup;

#[test]
fn test_volume_component_never_fails_and_zero_without_mrv() {
    let values = [0.0, 0.5, 10.0, 22.0, 1e9, -5.0, f64::NAN, f64::INFINITY];
    for weekly_sets in values {
        assert_close(volume_component(weekly_sets, 0.0), 0.0);
        for mrv in values {
            let component = volume_component(weekly_sets, mrv);
            assert!((0.0..=1.0).contains(&component), "{weekly_sets}/{mrv}");
        }
    }
    assert_close(volume_component(11.0, 22.0), 0.5);
    assert_close(volume_component(25.0, 22.0), 1.0);
}

#[test]
fn test_score_bounded_for_any_input() {
    let config = FatigueConfig::default();
    let regressions = vec![
        signal("bench press", MuscleGroup::Chest, 8.0),
        signal("incline bench press", MuscleGroup::Chest, 4.0),
        signal("dips", MuscleGroup::Chest, 2.0),
        signal("cable fly", MuscleGroup::Chest, 1.0),
    ];
    let numbers = [-100.0, -1.0, 0.0, 0.3, 3.0, 22.0, 1e12, f64::NAN, f64::NEG_INFINITY];
    let compliance = [
        None,
        Some(-3.0),
        Some(0.0),
        Some(0.79),
        Some(0.8),
        Some(4.0),
        Some(f64::NAN),
    ];

    for weekly_sets in numbers {
        for mrv in numbers {
            for frequency in numbers {
                for nutrition in compliance {
                    let result = compute_fatigue_score(
                        MuscleGroup::Chest,
                        &regressions,
                        weekly_sets,
                        mrv,
                        frequency,
                        nutrition,
                        &config,
                    );
                    assert!((0.0..=100.0).contains(&result.score));
                    for component in [
                        result.regression_component,
                        result.volume_component,
                        result.frequency_component,
                        result.nutrition_component,
                    ] {
                        assert!((0.0..=1.0).contains(&component));
                    }
                }
            }
        }
    }
}

#[test]
fn test_weighted_sum_matches_components() {
    let config = FatigueConfig::default();
    let regressions = vec![signal("bench press", MuscleGroup::Chest, 9.0)];
    let result = compute_fatigue_score(
        MuscleGroup::Chest,
        &regressions,
        11.0,
        22.0,
        2.0,
        Some(0.5),
        &config,
    );

    assert_close(result.regression_component, 1.0 / 3.0);
    assert_close(result.volume_component, 0.5);
    assert_close(result.frequency_component, 0.4);
    assert_close(result.nutrition_component, 0.5);
    let expected = 100.0 * (0.35 / 3.0 + 0.30 * 0.5 + 0.20 * 0.4 + 0.15 * 0.5);
    assert_close(result.score, expected);
}

#[test]
fn test_unknown_nutrition_counts_as_compliant() {
    let config = FatigueConfig::default();
    let unknown = compute_fatigue_score(MuscleGroup::Back, &[], 10.0, 25.0, 3.0, None, &config);
    let compliant =
        compute_fatigue_score(MuscleGroup::Back, &[], 10.0, 25.0, 3.0, Some(0.95), &config);
    assert_close(unknown.nutrition_component, 0.0);
    assert_close(unknown.score, compliant.score);
}

#[test]
fn test_only_same_group_regressions_count() {
    let config = FatigueConfig::default();
    let regressions = vec![
        signal("squat", MuscleGroup::Quads, 5.0),
        signal("leg press", MuscleGroup::Quads, 3.0),
    ];
    let chest =
        compute_fatigue_score(MuscleGroup::Chest, &regressions, 0.0, 22.0, 0.0, None, &config);
    assert_close(chest.regression_component, 0.0);
    assert_close(chest.score, 0.0);

    let quads =
        compute_fatigue_score(MuscleGroup::Quads, &regressions, 0.0, 20.0, 0.0, None, &config);
    assert_close(quads.regression_component, 2.0 / 3.0);
}

#[test]
fn test_saturated_inputs_reach_maximum() {
    let config = FatigueConfig::default();
    let regressions = vec![
        signal("squat", MuscleGroup::Quads, 5.0),
        signal("leg press", MuscleGroup::Quads, 3.0),
        signal("hack squat", MuscleGroup::Quads, 2.0),
    ];
    let result = compute_fatigue_score(
        MuscleGroup::Quads,
        &regressions,
        40.0,
        20.0,
        6.0,
        Some(0.0),
        &config,
    );
    assert_close(result.score, 100.0);
}
