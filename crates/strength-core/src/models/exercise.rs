// ABOUTME: Exercise name normalization shared by the catalog and strength standards
// ABOUTME: Lowercases, trims, and collapses internal whitespace into a lookup key
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Normalize a free-text exercise name into a lookup key
///
/// `"  Barbell   Bench Press "` and `"barbell bench press"` map to the same key.
#[must_use]
pub fn normalize_exercise_name(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}
