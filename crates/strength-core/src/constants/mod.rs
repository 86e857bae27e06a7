// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for e1RM estimation, effort weighting, fatigue, and deloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain. Configuration defaults in the intelligence
//! crate read from here so that a single value governs both code paths.

/// Service identity used in structured logs
pub mod service_names {
    /// Name of the analytics engine
    pub const PIERRE_STRENGTH: &str = "pierre-strength";
}

/// Estimated one-rep max formulas
pub mod e1rm {
    /// Highest rep count the estimation formulas accept
    pub const MAX_REPS: u32 = 30;
    /// Epley divisor: `w * (1 + r / 30)`
    pub const EPLEY_DIVISOR: f64 = 30.0;
    /// Brzycki numerator: `w * 36 / (37 - r)`
    pub const BRZYCKI_NUMERATOR: f64 = 36.0;
    /// Brzycki denominator offset
    pub const BRZYCKI_OFFSET: f64 = 37.0;
    /// Lombardi exponent: `w * r^0.10`
    pub const LOMBARDI_EXPONENT: f64 = 0.10;
}

/// RPE bounds and effort multipliers for effective sets
pub mod effort {
    /// Lowest valid RPE
    pub const RPE_MIN: f64 = 1.0;
    /// Highest valid RPE
    pub const RPE_MAX: f64 = 10.0;
    /// RPE at or above which a set counts fully
    pub const HARD_RPE: f64 = 8.0;
    /// RPE at or above which a set counts as moderate
    pub const MODERATE_RPE: f64 = 6.0;
    /// Multiplier for hard or unrated sets
    pub const HARD_MULTIPLIER: f64 = 1.0;
    /// Multiplier for moderate sets
    pub const MODERATE_MULTIPLIER: f64 = 0.75;
    /// Multiplier for easy sets
    pub const EASY_MULTIPLIER: f64 = 0.5;
}

/// Regression detection defaults
pub mod regression {
    /// Trailing declines needed before a lift is flagged
    pub const MIN_CONSECUTIVE_DECLINES: usize = 2;
}

/// Fatigue scoring defaults
pub mod fatigue {
    /// Weight of the regression component
    pub const REGRESSION_WEIGHT: f64 = 0.35;
    /// Weight of the volume component
    pub const VOLUME_WEIGHT: f64 = 0.30;
    /// Weight of the frequency component
    pub const FREQUENCY_WEIGHT: f64 = 0.20;
    /// Weight of the nutrition component
    pub const NUTRITION_WEIGHT: f64 = 0.15;
    /// Regressions per muscle group that saturate the regression component
    pub const REGRESSION_SATURATION: f64 = 3.0;
    /// Weekly sessions per muscle group that saturate the frequency component
    pub const FREQUENCY_SATURATION: f64 = 5.0;
    /// Compliance ratio at or above which nutrition contributes nothing
    pub const NUTRITION_COMPLIANT_RATIO: f64 = 0.8;
    /// Score above which a deload is suggested
    pub const DELOAD_THRESHOLD: f64 = 70.0;
    /// Upper bound of the composite score
    pub const MAX_SCORE: f64 = 100.0;
}

/// Deload prescription defaults
pub mod deload {
    /// Exercise label used when a fatigued group has no regressing lift
    pub const GENERAL_EXERCISE: &str = "general";
    /// Decline sessions reported for a general deload
    pub const GENERAL_DECLINE_SESSIONS: usize = 2;
    /// Recommended volume cut in percent
    pub const VOLUME_REDUCTION_PCT: f64 = 40.0;
    /// Recommended deload length in days
    pub const DURATION_DAYS: u32 = 7;
}

/// Analysis windows
pub mod analysis {
    /// Days in the volume/frequency window
    pub const WEEK_DAYS: u32 = 7;
    /// Days of history considered for regressions and strength
    pub const LOOKBACK_DAYS: u32 = 56;
}
