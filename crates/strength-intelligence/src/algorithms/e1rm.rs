// ABOUTME: One-rep max estimation formulas (Epley, Brzycki, Lombardi)
// ABOUTME: Enum dispatch over formulas that agree exactly at a single repetition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};
use strength_core::constants::e1rm::{
    BRZYCKI_NUMERATOR, BRZYCKI_OFFSET, EPLEY_DIVISOR, LOMBARDI_EXPONENT, MAX_REPS,
};

/// One-rep max estimation formula
///
/// # Scientific References
///
/// - Epley, B. (1985). "Poundage Chart." *Boyd Epley Workout*.
/// - Brzycki, M. (1993). "Strength testing: Predicting a one-rep max from reps-to-fatigue."
///   *Journal of Physical Education, Recreation & Dance*, 64(1), 88-90.
/// - Lombardi, V.P. (1989). *Beginning Weight Training*. W.C. Brown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum E1rmFormula {
    /// `w * (1 + r / 30)`; the primary estimate
    #[default]
    Epley,
    /// `w * 36 / (37 - r)`
    Brzycki,
    /// `w * r^0.10`
    Lombardi,
}

impl E1rmFormula {
    /// All built-in formulas
    pub const ALL: [Self; 3] = [Self::Epley, Self::Brzycki, Self::Lombardi];

    /// Estimate a one-rep max
    ///
    /// Inputs are assumed validated: `weight_kg >= 0` and `reps <= 30`. A zero
    /// weight or zero reps yields 0; a single rep yields the weight itself.
    #[must_use]
    pub fn estimate(self, weight_kg: f64, reps: u32) -> f64 {
        debug_assert!(reps <= MAX_REPS);
        if reps == 0 || weight_kg <= 0.0 {
            return 0.0;
        }
        if reps == 1 {
            return weight_kg;
        }
        let r = f64::from(reps);
        match self {
            Self::Epley => weight_kg * (1.0 + r / EPLEY_DIVISOR),
            // Denominator stays >= 7 under the rep cap
            Self::Brzycki => weight_kg * BRZYCKI_NUMERATOR / (BRZYCKI_OFFSET - r),
            Self::Lombardi => weight_kg * r.powf(LOMBARDI_EXPONENT),
        }
    }

    /// Formula name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Epley => "epley",
            Self::Brzycki => "brzycki",
            Self::Lombardi => "lombardi",
        }
    }
}

impl fmt::Display for E1rmFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
