// ABOUTME: Integration tests for e1RM estimation and best-set selection
// ABOUTME: Covers formula identities, the 30-rep cap, degenerate inputs, and tie handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{assert_close, day, row, warmup, working};
use pierre_strength::errors::ErrorCode;
use pierre_strength::intelligence::algorithms::E1rmFormula;
use pierre_strength::intelligence::e1rm_calculator::{
    best_e1rm_for_exercise, compute_e1rm, session_e1rm_points,
};

#[test]
fn test_epley_primary_across_valid_range() {
    for weight_tenths in [5_u32, 10, 200, 625, 1000, 2505] {
        let weight = f64::from(weight_tenths) / 10.0;
        for reps in 1..=30 {
            let estimate = compute_e1rm(weight, reps).unwrap();
            let expected = if reps == 1 {
                weight
            } else {
                weight * (1.0 + f64::from(reps) / 30.0)
            };
            assert_close(estimate.primary, expected);
            assert_close(estimate.epley, estimate.primary);
            if reps >= 2 {
                assert!(estimate.brzycki.is_finite() && estimate.brzycki > 0.0);
                assert!(estimate.lombardi.is_finite() && estimate.lombardi > 0.0);
            }
        }
    }
}

#[test]
fn test_formulas_agree_at_one_rep() {
    let estimate = compute_e1rm(142.5, 1).unwrap();
    assert_close(estimate.epley, 142.5);
    assert_close(estimate.brzycki, 142.5);
    assert_close(estimate.lombardi, 142.5);
}

#[test]
fn test_known_values_at_five_reps() {
    let estimate = compute_e1rm(100.0, 5).unwrap();
    assert_close(estimate.epley, 100.0 * (1.0 + 5.0 / 30.0));
    assert_close(estimate.brzycki, 100.0 * 36.0 / 32.0);
    assert_close(estimate.lombardi, 100.0 * 5.0_f64.powf(0.10));
    assert_close(estimate.for_formula(E1rmFormula::Brzycki), estimate.brzycki);
}

#[test]
fn test_more_than_thirty_reps_rejected() {
    for weight in [0.0, 0.5, 60.0, 500.0] {
        for reps in [31, 37, 100, i32::MAX] {
            let error = compute_e1rm(weight, reps).unwrap_err();
            assert_eq!(error.code, ErrorCode::InvalidInput);
        }
    }
}

#[test]
fn test_negative_inputs_rejected() {
    assert_eq!(
        compute_e1rm(-1.0, 5).unwrap_err().code,
        ErrorCode::InvalidInput
    );
    assert_eq!(
        compute_e1rm(100.0, -1).unwrap_err().code,
        ErrorCode::InvalidInput
    );
    assert!(compute_e1rm(f64::NAN, 5).is_err());
}

#[test]
fn test_zero_reps_or_weight_gives_zero() {
    let zero_reps = compute_e1rm(100.0, 0).unwrap();
    assert_close(zero_reps.primary, 0.0);
    assert_close(zero_reps.brzycki, 0.0);
    assert_close(zero_reps.lombardi, 0.0);

    let zero_weight = compute_e1rm(0.0, 8).unwrap();
    assert_close(zero_weight.primary, 0.0);
    assert_close(zero_weight.brzycki, 0.0);
}

#[test]
fn test_best_set_is_maximal_epley() {
    let sets = vec![
        working(10, 80.0, Some(7.0)),
        working(5, 100.0, Some(8.0)),
        working(3, 105.0, Some(9.0)),
        working(1, 110.0, Some(10.0)),
    ];
    let best = best_e1rm_for_exercise(&sets).unwrap();
    // 80x10 = 106.67, 100x5 = 116.67, 105x3 = 115.5, 110x1 = 110
    assert_eq!(best.index, 1);
    assert_eq!(best.reps, 5);
    assert_close(best.e1rm, 100.0 * (1.0 + 5.0 / 30.0));

    let maximal = sets
        .iter()
        .map(|set| E1rmFormula::Epley.estimate(set.weight_kg(), set.reps()))
        .fold(f64::MIN, f64::max);
    assert_close(best.e1rm, maximal);
}

#[test]
fn test_best_set_ties_keep_first() {
    let sets = vec![
        working(3, 80.0, None),
        working(5, 100.0, Some(7.0)),
        working(5, 100.0, Some(9.0)),
    ];
    let best = best_e1rm_for_exercise(&sets).unwrap();
    assert_eq!(best.index, 1);
}

#[test]
fn test_best_set_ignores_invalid_sets() {
    let sets = vec![
        working(0, 200.0, None),
        working(40, 100.0, None),
        working(5, 0.0, None),
        working(2, 60.0, None),
    ];
    let best = best_e1rm_for_exercise(&sets).unwrap();
    assert_eq!(best.index, 3);

    let nothing_valid = vec![working(0, 100.0, None), working(35, 50.0, None)];
    assert!(best_e1rm_for_exercise(&nothing_valid).is_none());
    assert!(best_e1rm_for_exercise(&[]).is_none());
}

#[test]
fn test_warmups_are_eligible_for_best_set() {
    let sets = vec![warmup(3, 120.0), working(5, 90.0, None)];
    let best = best_e1rm_for_exercise(&sets).unwrap();
    assert_eq!(best.index, 0);
}

#[test]
fn test_session_points_skip_rows_without_valid_sets() {
    let rows = vec![
        row(day(3), "Squat", vec![working(5, 140.0, None)]),
        row(day(4), "Plank", vec![working(0, 0.0, None)]),
        row(day(5), "Squat", vec![working(3, 150.0, None)]),
    ];
    let points = session_e1rm_points(&rows);
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].session_date, day(3));
    assert_eq!(points[1].best_reps, 3);
    assert_close(points[1].best_weight_kg, 150.0);
}
