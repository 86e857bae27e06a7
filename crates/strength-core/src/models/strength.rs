// ABOUTME: Strength tier enumeration ordered from unknown to elite
// ABOUTME: Provides next-tier navigation used by the classifier and milestones
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};

/// Strength tier relative to bodyweight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthLevel {
    /// Below the beginner threshold, or no usable bodyweight
    Unknown,
    /// Beginner tier
    Beginner,
    /// Intermediate tier
    Intermediate,
    /// Advanced tier
    Advanced,
    /// Elite tier
    Elite,
}

impl StrengthLevel {
    /// Ranked tiers, each backed by a bodyweight-multiplier threshold
    pub const RANKED: [Self; 4] = [
        Self::Beginner,
        Self::Intermediate,
        Self::Advanced,
        Self::Elite,
    ];

    /// The tier above this one; `None` for elite
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Unknown => Some(Self::Beginner),
            Self::Beginner => Some(Self::Intermediate),
            Self::Intermediate => Some(Self::Advanced),
            Self::Advanced => Some(Self::Elite),
            Self::Elite => None,
        }
    }

    /// Lowercase label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Elite => "elite",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
