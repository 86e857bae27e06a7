// ABOUTME: Static exercise catalog mapping normalized exercise names to muscle groups
// ABOUTME: Built once on first use; unknown names resolve to MuscleGroup::Other
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Exercise Catalog
//!
//! Each exercise is attributed to a single primary muscle group. Lookups are
//! case-insensitive and whitespace-insensitive: the input is normalized with
//! [`normalize_exercise_name`] before hitting an immutable map of interned keys.

use std::collections::HashMap;
use std::sync::OnceLock;

use strength_core::models::{normalize_exercise_name, MuscleGroup};

/// Global catalog singleton
static EXERCISE_CATALOG: OnceLock<ExerciseCatalog> = OnceLock::new();

/// Catalog entries; keys must already be normalized
const CATALOG_ENTRIES: &[(&str, MuscleGroup)] = &[
    // Chest
    ("barbell bench press", MuscleGroup::Chest),
    ("bench press", MuscleGroup::Chest),
    ("bench", MuscleGroup::Chest),
    ("flat bench press", MuscleGroup::Chest),
    ("incline bench press", MuscleGroup::Chest),
    ("incline barbell bench press", MuscleGroup::Chest),
    ("decline bench press", MuscleGroup::Chest),
    ("dumbbell bench press", MuscleGroup::Chest),
    ("incline dumbbell press", MuscleGroup::Chest),
    ("close grip bench press", MuscleGroup::Chest),
    ("dumbbell fly", MuscleGroup::Chest),
    ("cable fly", MuscleGroup::Chest),
    ("cable crossover", MuscleGroup::Chest),
    ("pec deck", MuscleGroup::Chest),
    ("chest press", MuscleGroup::Chest),
    ("push up", MuscleGroup::Chest),
    ("dips", MuscleGroup::Chest),
    // Back
    ("barbell row", MuscleGroup::Back),
    ("bent over row", MuscleGroup::Back),
    ("pendlay row", MuscleGroup::Back),
    ("barbell bent over row", MuscleGroup::Back),
    ("dumbbell row", MuscleGroup::Back),
    ("seated cable row", MuscleGroup::Back),
    ("t-bar row", MuscleGroup::Back),
    ("chest supported row", MuscleGroup::Back),
    ("lat pulldown", MuscleGroup::Back),
    ("pull up", MuscleGroup::Back),
    ("chin up", MuscleGroup::Back),
    ("straight arm pulldown", MuscleGroup::Back),
    // Shoulders
    ("overhead press", MuscleGroup::Shoulders),
    ("military press", MuscleGroup::Shoulders),
    ("ohp", MuscleGroup::Shoulders),
    ("barbell overhead press", MuscleGroup::Shoulders),
    ("seated dumbbell press", MuscleGroup::Shoulders),
    ("arnold press", MuscleGroup::Shoulders),
    ("lateral raise", MuscleGroup::Shoulders),
    ("cable lateral raise", MuscleGroup::Shoulders),
    ("front raise", MuscleGroup::Shoulders),
    ("rear delt fly", MuscleGroup::Shoulders),
    ("face pull", MuscleGroup::Shoulders),
    // Biceps
    ("barbell curl", MuscleGroup::Biceps),
    ("dumbbell curl", MuscleGroup::Biceps),
    ("hammer curl", MuscleGroup::Biceps),
    ("preacher curl", MuscleGroup::Biceps),
    ("incline dumbbell curl", MuscleGroup::Biceps),
    ("cable curl", MuscleGroup::Biceps),
    ("ez bar curl", MuscleGroup::Biceps),
    // Triceps
    ("tricep pushdown", MuscleGroup::Triceps),
    ("triceps pushdown", MuscleGroup::Triceps),
    ("skull crusher", MuscleGroup::Triceps),
    ("overhead tricep extension", MuscleGroup::Triceps),
    ("tricep dip", MuscleGroup::Triceps),
    ("jm press", MuscleGroup::Triceps),
    // Forearms
    ("wrist curl", MuscleGroup::Forearms),
    ("reverse curl", MuscleGroup::Forearms),
    ("farmer carry", MuscleGroup::Forearms),
    // Traps
    ("barbell shrug", MuscleGroup::Traps),
    ("dumbbell shrug", MuscleGroup::Traps),
    ("upright row", MuscleGroup::Traps),
    ("rack pull", MuscleGroup::Traps),
    // Quads
    ("barbell back squat", MuscleGroup::Quads),
    ("back squat", MuscleGroup::Quads),
    ("squat", MuscleGroup::Quads),
    ("barbell squat", MuscleGroup::Quads),
    ("front squat", MuscleGroup::Quads),
    ("hack squat", MuscleGroup::Quads),
    ("leg press", MuscleGroup::Quads),
    ("leg extension", MuscleGroup::Quads),
    ("bulgarian split squat", MuscleGroup::Quads),
    ("goblet squat", MuscleGroup::Quads),
    ("walking lunge", MuscleGroup::Quads),
    // Hamstrings
    ("conventional deadlift", MuscleGroup::Hamstrings),
    ("deadlift", MuscleGroup::Hamstrings),
    ("barbell deadlift", MuscleGroup::Hamstrings),
    ("romanian deadlift", MuscleGroup::Hamstrings),
    ("stiff leg deadlift", MuscleGroup::Hamstrings),
    ("lying leg curl", MuscleGroup::Hamstrings),
    ("seated leg curl", MuscleGroup::Hamstrings),
    ("good morning", MuscleGroup::Hamstrings),
    ("nordic curl", MuscleGroup::Hamstrings),
    // Glutes
    ("hip thrust", MuscleGroup::Glutes),
    ("barbell hip thrust", MuscleGroup::Glutes),
    ("glute bridge", MuscleGroup::Glutes),
    ("sumo deadlift", MuscleGroup::Glutes),
    ("cable kickback", MuscleGroup::Glutes),
    // Calves
    ("standing calf raise", MuscleGroup::Calves),
    ("seated calf raise", MuscleGroup::Calves),
    ("calf raise", MuscleGroup::Calves),
    // Abs
    ("hanging leg raise", MuscleGroup::Abs),
    ("cable crunch", MuscleGroup::Abs),
    ("crunch", MuscleGroup::Abs),
    ("ab wheel rollout", MuscleGroup::Abs),
    ("plank", MuscleGroup::Abs),
];

/// Immutable map from normalized exercise name to muscle group
#[derive(Debug, Clone)]
pub struct ExerciseCatalog {
    entries: HashMap<&'static str, MuscleGroup>,
}

impl ExerciseCatalog {
    /// Get the global catalog instance
    pub fn global() -> &'static Self {
        EXERCISE_CATALOG.get_or_init(Self::build)
    }

    fn build() -> Self {
        Self {
            entries: CATALOG_ENTRIES.iter().copied().collect(),
        }
    }

    /// Resolve a free-text exercise name to its muscle group
    #[must_use]
    pub fn lookup(&self, exercise_name: &str) -> MuscleGroup {
        let key = normalize_exercise_name(exercise_name);
        self.entries
            .get(key.as_str())
            .copied()
            .unwrap_or(MuscleGroup::Other)
    }

    /// Exercises attributed to a muscle group, sorted by name
    #[must_use]
    pub fn exercises_for(&self, group: MuscleGroup) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self
            .entries
            .iter()
            .filter(|(_, g)| **g == group)
            .map(|(name, _)| *name)
            .collect();
        names.sort_unstable();
        names
    }

    /// Number of known exercises
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolve an exercise name against the global catalog
#[must_use]
pub fn muscle_group_for(exercise_name: &str) -> MuscleGroup {
    ExerciseCatalog::global().lookup(exercise_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strength_standards::STRENGTH_STANDARDS;

    #[test]
    fn test_catalog_keys_are_normalized_and_unique() {
        let mut seen = std::collections::HashSet::new();
        for (name, group) in CATALOG_ENTRIES {
            assert_eq!(normalize_exercise_name(name), *name);
            assert!(seen.insert(*name), "duplicate catalog key {name}");
            assert!(group.is_tracked());
        }
    }

    #[test]
    fn test_every_tracked_group_has_exercises() {
        let catalog = ExerciseCatalog::global();
        for group in MuscleGroup::TRACKED {
            assert!(!catalog.exercises_for(group).is_empty(), "{group} empty");
        }
    }

    #[test]
    fn test_strength_standard_names_resolve_to_tracked_groups() {
        let catalog = ExerciseCatalog::global();
        for standard in &STRENGTH_STANDARDS {
            let lift_group = catalog.lookup(standard.lift);
            assert!(lift_group.is_tracked(), "{} not in catalog", standard.lift);
            for alias in standard.aliases {
                assert_eq!(catalog.lookup(alias), lift_group, "alias {alias}");
            }
        }
    }
}
