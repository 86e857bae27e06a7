// ABOUTME: Single-value commands: e1RM estimate, strength classification, catalog listing
// ABOUTME: Input errors surface as CLI errors carrying the engine's error code
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{bail, Result};
use pierre_strength::formatters::{
    format_output, CatalogGroup, CatalogListing, FormattedOutput, OutputFormat,
};
use pierre_strength::intelligence::e1rm_calculator::compute_e1rm;
use pierre_strength::intelligence::exercise_catalog::ExerciseCatalog;
use pierre_strength::intelligence::strength_standards::classify_strength;
use pierre_strength::models::MuscleGroup;

pub fn e1rm(weight: f64, reps: i32, format: OutputFormat) -> Result<FormattedOutput> {
    let estimate = compute_e1rm(weight, reps)?;
    Ok(format_output(&estimate, format)?)
}

pub fn classify(
    exercise: &str,
    e1rm: f64,
    bodyweight: f64,
    format: OutputFormat,
) -> Result<FormattedOutput> {
    let classification = classify_strength(exercise, e1rm, bodyweight)?;
    Ok(format_output(&classification, format)?)
}

pub fn catalog(group: Option<&str>, format: OutputFormat) -> Result<FormattedOutput> {
    let groups: Vec<MuscleGroup> = match group {
        Some(name) => {
            let parsed: MuscleGroup = name.parse()?;
            if !parsed.is_tracked() {
                bail!("'{name}' has no catalog exercises");
            }
            vec![parsed]
        }
        None => MuscleGroup::TRACKED.to_vec(),
    };

    let catalog = ExerciseCatalog::global();
    let listing = CatalogListing {
        groups: groups
            .into_iter()
            .map(|muscle_group| CatalogGroup {
                muscle_group,
                exercises: catalog.exercises_for(muscle_group),
            })
            .collect(),
    };
    Ok(format_output(&listing, format)?)
}
