// ABOUTME: Integration tests for deload suggestions and strength milestones
// ABOUTME: Covers threshold strictness, worst-regression naming, general fallback, and ordering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{assert_close, signal};
use pierre_strength::intelligence::config::DeloadConfig;
use pierre_strength::intelligence::fatigue::FatigueScoreResult;
use pierre_strength::intelligence::milestones::generate_milestones;
use pierre_strength::intelligence::recommendation_engine::generate_suggestions;
use pierre_strength::intelligence::strength_standards::{classify_strength, StrengthClassification};
use pierre_strength::models::{MuscleGroup, StrengthLevel};

fn score(muscle_group: MuscleGroup, score: f64) -> FatigueScoreResult {
    FatigueScoreResult {
        muscle_group,
        score,
        regression_component: 0.0,
        volume_component: 0.0,
        frequency_component: 0.0,
        nutrition_component: 0.0,
    }
}

#[test]
fn test_threshold_is_strict() {
    let config = DeloadConfig::default();
    let scores = vec![
        score(MuscleGroup::Chest, 70.0),
        score(MuscleGroup::Back, 70.01),
        score(MuscleGroup::Quads, 12.0),
    ];
    let suggestions = generate_suggestions(&scores, &[], &config);
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].muscle_group, MuscleGroup::Back);
}

#[test]
fn test_names_largest_decline_for_group() {
    let config = DeloadConfig::default();
    let regressions = vec![
        signal("incline bench press", MuscleGroup::Chest, 4.0),
        signal("barbell bench press", MuscleGroup::Chest, 9.1),
        signal("squat", MuscleGroup::Quads, 20.0),
    ];
    let suggestions =
        generate_suggestions(&[score(MuscleGroup::Chest, 80.0)], &regressions, &config);

    assert_eq!(suggestions.len(), 1);
    let suggestion = &suggestions[0];
    assert_eq!(suggestion.exercise_name, "barbell bench press");
    assert_close(suggestion.decline_pct, 9.1);
    assert_eq!(suggestion.decline_sessions, 2);
    assert!(!suggestion.is_general());
    assert!(suggestion.message.contains("barbell bench press"));
}

#[test]
fn test_general_fallback_without_regressions() {
    let config = DeloadConfig::default();
    let suggestions = generate_suggestions(&[score(MuscleGroup::Back, 85.0)], &[], &config);

    let suggestion = &suggestions[0];
    assert!(suggestion.is_general());
    assert_eq!(suggestion.exercise_name, "general");
    assert_close(suggestion.decline_pct, 0.0);
    assert_eq!(suggestion.decline_sessions, 2);
    assert_close(suggestion.volume_reduction_pct, 40.0);
    assert_eq!(suggestion.duration_days, 7);
}

#[test]
fn test_suggestions_ordered_by_score() {
    let config = DeloadConfig {
        fatigue_threshold: 50.0,
        ..DeloadConfig::default()
    };
    let scores = vec![
        score(MuscleGroup::Quads, 60.0),
        score(MuscleGroup::Chest, 90.0),
        score(MuscleGroup::Back, 60.0),
    ];
    let groups: Vec<MuscleGroup> = generate_suggestions(&scores, &[], &config)
        .iter()
        .map(|s| s.muscle_group)
        .collect();
    assert_eq!(
        groups,
        vec![MuscleGroup::Chest, MuscleGroup::Back, MuscleGroup::Quads]
    );
}

fn classifications() -> Vec<StrengthClassification> {
    vec![
        classify_strength("bench press", 80.0, 80.0).unwrap(),
        classify_strength("squat", 30.0, 80.0).unwrap(),
        classify_strength("deadlift", 250.0, 80.0).unwrap(),
        classify_strength("ohp", 50.0, 80.0).unwrap(),
        classify_strength("barbell row", 79.0, 80.0).unwrap(),
    ]
}

#[test]
fn test_milestones_sorted_by_deficit() {
    let milestones = generate_milestones(&classifications());
    assert!(milestones
        .windows(2)
        .all(|pair| pair[0].deficit_kg <= pair[1].deficit_kg));

    let reversed: Vec<StrengthClassification> = classifications().into_iter().rev().collect();
    let milestones = generate_milestones(&reversed);
    assert!(milestones
        .windows(2)
        .all(|pair| pair[0].deficit_kg <= pair[1].deficit_kg));
}

#[test]
fn test_unknown_levels_omitted_and_elite_congratulated() {
    let milestones = generate_milestones(&classifications());
    // squat at 30 kg for 80 kg bodyweight is below beginner
    assert_eq!(milestones.len(), 4);
    assert!(milestones
        .iter()
        .all(|m| m.current_level != StrengthLevel::Unknown));

    let elite = milestones
        .iter()
        .find(|m| m.current_level == StrengthLevel::Elite)
        .unwrap();
    assert_eq!(elite.exercise_name, "conventional deadlift");
    assert_close(elite.deficit_kg, 0.0);
    assert!(elite.next_level.is_none());
    assert!(elite.message.starts_with("Elite"));
}

#[test]
fn test_deficit_is_distance_to_next_threshold() {
    let milestones = generate_milestones(&classifications());
    let bench = milestones
        .iter()
        .find(|m| m.exercise_name == "barbell bench press")
        .unwrap();
    assert_close(bench.deficit_kg, 40.0);
    assert_eq!(bench.next_level, Some(StrengthLevel::Advanced));
    assert!(bench.message.contains("40.0 kg away"));
}
