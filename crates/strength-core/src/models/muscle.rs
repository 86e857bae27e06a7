// ABOUTME: Canonical muscle group enumeration for volume and fatigue attribution
// ABOUTME: Provides parsing, display, and iteration over the trackable groups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Muscle group an exercise is attributed to
///
/// `Other` is the explicit bucket for exercises the catalog does not know. It is
/// never scored and never receives volume landmarks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    /// Pectorals
    Chest,
    /// Lats, rhomboids, and mid back
    Back,
    /// Deltoids
    Shoulders,
    /// Elbow flexors
    Biceps,
    /// Elbow extensors
    Triceps,
    /// Grip and wrist
    Forearms,
    /// Upper trapezius
    Traps,
    /// Knee extensors
    Quads,
    /// Knee flexors and hip extensors
    Hamstrings,
    /// Gluteals
    Glutes,
    /// Gastrocnemius and soleus
    Calves,
    /// Abdominals and trunk
    Abs,
    /// Exercise not present in the catalog
    Other,
}

impl MuscleGroup {
    /// Every trackable group, excluding `Other`
    pub const TRACKED: [Self; 12] = [
        Self::Chest,
        Self::Back,
        Self::Shoulders,
        Self::Biceps,
        Self::Triceps,
        Self::Forearms,
        Self::Traps,
        Self::Quads,
        Self::Hamstrings,
        Self::Glutes,
        Self::Calves,
        Self::Abs,
    ];

    /// Snake-case identifier used in serialized output
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Chest => "chest",
            Self::Back => "back",
            Self::Shoulders => "shoulders",
            Self::Biceps => "biceps",
            Self::Triceps => "triceps",
            Self::Forearms => "forearms",
            Self::Traps => "traps",
            Self::Quads => "quads",
            Self::Hamstrings => "hamstrings",
            Self::Glutes => "glutes",
            Self::Calves => "calves",
            Self::Abs => "abs",
            Self::Other => "other",
        }
    }

    /// Whether this group takes part in volume and fatigue analysis
    #[must_use]
    pub const fn is_tracked(self) -> bool {
        !matches!(self, Self::Other)
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MuscleGroup {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Self::TRACKED
            .into_iter()
            .chain([Self::Other])
            .find(|group| group.as_str() == key)
            .ok_or_else(|| AppError::invalid_input(format!("Unknown muscle group: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_display() {
        for group in MuscleGroup::TRACKED {
            assert_eq!(group.to_string().parse::<MuscleGroup>().unwrap(), group);
        }
        assert_eq!(" Other ".parse::<MuscleGroup>().unwrap(), MuscleGroup::Other);
    }

    #[test]
    fn test_unknown_group_rejected() {
        assert!("neck".parse::<MuscleGroup>().is_err());
    }

    #[test]
    fn test_other_is_not_tracked() {
        assert!(!MuscleGroup::Other.is_tracked());
        assert!(MuscleGroup::TRACKED.iter().all(|g| g.is_tracked()));
    }
}
