// ABOUTME: Effort-weighted weekly volume aggregation per muscle group
// ABOUTME: Classifies effective sets against MEV/MAV/MRV volume landmarks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Volume/Effort Aggregator
//!
//! A working set contributes an RPE-derived effort multiplier instead of a flat
//! count: 1.0 at RPE 8+ (or when unrated), 0.75 at RPE 6-8, 0.5 below RPE 6.
//! Unrated sets are assumed hard, biasing attribution toward more fatigue.
//!
//! # References
//!
//! - Israetel, M., Hoffmann, J., Smith, C.W. (2017). *Scientific Principles of
//!   Strength Training*. Renaissance Periodization.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use strength_core::constants::effort;
use strength_core::errors::{AppError, AppResult};
use strength_core::models::{MuscleGroup, Rpe, SessionExercise};

use crate::exercise_catalog::ExerciseCatalog;

/// Effort multiplier for a set's RPE
///
/// Absent RPE counts as maximal effort.
#[must_use]
pub fn compute_effort(rpe: Option<Rpe>) -> f64 {
    match rpe.map(Rpe::value) {
        None => effort::HARD_MULTIPLIER,
        Some(value) if value >= effort::HARD_RPE => effort::HARD_MULTIPLIER,
        Some(value) if value >= effort::MODERATE_RPE => effort::MODERATE_MULTIPLIER,
        Some(_) => effort::EASY_MULTIPLIER,
    }
}

/// Effort multiplier for an unvalidated RPE reading
///
/// The reading is clamped to `[1, 10]` first; NaN counts as unrated.
#[must_use]
pub fn compute_effort_raw(rpe: Option<f64>) -> f64 {
    compute_effort(Rpe::from_optional(rpe))
}

/// Weekly volume status relative to landmarks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeStatus {
    /// Below minimum effective volume
    BelowMev,
    /// Between MEV and MAV inclusive
    Optimal,
    /// Above MAV, at or below MRV
    ApproachingMrv,
    /// Above maximum recoverable volume
    AboveMrv,
}

impl VolumeStatus {
    /// Snake-case label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BelowMev => "below_mev",
            Self::Optimal => "optimal",
            Self::ApproachingMrv => "approaching_mrv",
            Self::AboveMrv => "above_mrv",
        }
    }
}

impl fmt::Display for VolumeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify weekly effective sets against landmarks
///
/// With degenerate all-zero landmarks, zero sets are optimal and anything
/// positive is above MRV. NaN and negative inputs count as zero sets.
#[must_use]
pub fn classify_status(effective_sets: f64, mev: u32, mav: u32, mrv: u32) -> VolumeStatus {
    let sets = if effective_sets.is_nan() {
        0.0
    } else {
        effective_sets.max(0.0)
    };
    if sets < f64::from(mev) {
        VolumeStatus::BelowMev
    } else if sets <= f64::from(mav) {
        VolumeStatus::Optimal
    } else if sets <= f64::from(mrv) {
        VolumeStatus::ApproachingMrv
    } else {
        VolumeStatus::AboveMrv
    }
}

/// Weekly set landmarks for one muscle group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeLandmark {
    /// Muscle group the landmarks apply to
    pub muscle_group: MuscleGroup,
    /// Minimum effective volume
    pub mev: u32,
    /// Maximum adaptive volume
    pub mav: u32,
    /// Maximum recoverable volume
    pub mrv: u32,
}

impl VolumeLandmark {
    /// Create validated landmarks
    ///
    /// # Errors
    ///
    /// Returns `AppError::invalid_input` if the group is `Other` or the values
    /// are neither strictly ascending nor all zero
    pub fn new(muscle_group: MuscleGroup, mev: u32, mav: u32, mrv: u32) -> AppResult<Self> {
        let landmark = Self {
            muscle_group,
            mev,
            mav,
            mrv,
        };
        if !muscle_group.is_tracked() {
            return Err(AppError::invalid_input(
                "volume landmarks require a tracked muscle group",
            ));
        }
        if !landmark.is_well_formed() {
            return Err(AppError::invalid_input(format!(
                "landmarks must satisfy mev < mav < mrv (got {mev}/{mav}/{mrv})"
            ))
            .with_resource_id(muscle_group.as_str()));
        }
        Ok(landmark)
    }

    /// All three landmarks are zero
    #[must_use]
    pub const fn is_degenerate(&self) -> bool {
        self.mev == 0 && self.mav == 0 && self.mrv == 0
    }

    /// Strictly ascending, or degenerate
    #[must_use]
    pub const fn is_well_formed(&self) -> bool {
        self.is_degenerate() || (self.mev < self.mav && self.mav < self.mrv)
    }

    /// Classify weekly effective sets against these landmarks
    #[must_use]
    pub fn classify(&self, effective_sets: f64) -> VolumeStatus {
        classify_status(effective_sets, self.mev, self.mav, self.mrv)
    }

    /// Built-in landmarks for a tracked group; `None` for `Other`
    #[must_use]
    pub const fn default_for(muscle_group: MuscleGroup) -> Option<Self> {
        let (mev, mav, mrv) = match muscle_group {
            MuscleGroup::Chest => (8, 18, 22),
            MuscleGroup::Back => (10, 20, 25),
            MuscleGroup::Shoulders => (8, 19, 26),
            MuscleGroup::Biceps => (8, 17, 26),
            MuscleGroup::Triceps => (6, 12, 18),
            MuscleGroup::Forearms => (2, 10, 20),
            MuscleGroup::Traps => (4, 12, 26),
            MuscleGroup::Quads => (8, 15, 20),
            MuscleGroup::Hamstrings => (6, 13, 20),
            MuscleGroup::Glutes => (2, 8, 16),
            MuscleGroup::Calves => (8, 14, 20),
            MuscleGroup::Abs => (4, 18, 25),
            MuscleGroup::Other => return None,
        };
        Some(Self {
            muscle_group,
            mev,
            mav,
            mrv,
        })
    }

    /// Built-in landmarks for every tracked group
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        MuscleGroup::TRACKED
            .into_iter()
            .filter_map(Self::default_for)
            .collect()
    }
}

/// Landmarks keyed by muscle group, with per-user overrides applied
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LandmarkTable {
    entries: BTreeMap<MuscleGroup, VolumeLandmark>,
}

impl LandmarkTable {
    /// Table of built-in defaults
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::with_overrides(&VolumeLandmark::defaults(), &[])
    }

    /// Base landmarks with overrides replacing matching groups
    ///
    /// Malformed overrides and overrides for `Other` are ignored.
    #[must_use]
    pub fn with_overrides(base: &[VolumeLandmark], overrides: &[VolumeLandmark]) -> Self {
        let mut entries = BTreeMap::new();
        for landmark in base.iter().chain(overrides) {
            if landmark.muscle_group.is_tracked() && landmark.is_well_formed() {
                entries.insert(landmark.muscle_group, *landmark);
            } else {
                tracing::warn!(
                    muscle_group = %landmark.muscle_group,
                    mev = landmark.mev,
                    mav = landmark.mav,
                    mrv = landmark.mrv,
                    "Ignoring malformed volume landmark"
                );
            }
        }
        Self { entries }
    }

    /// Landmarks for a group, falling back to the built-in defaults
    #[must_use]
    pub fn get(&self, muscle_group: MuscleGroup) -> Option<VolumeLandmark> {
        self.entries
            .get(&muscle_group)
            .copied()
            .or_else(|| VolumeLandmark::default_for(muscle_group))
    }
}

/// Inclusive date window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekWindow {
    /// First day in the window
    pub start: NaiveDate,
    /// Last day in the window
    pub end: NaiveDate,
}

impl WeekWindow {
    /// Window of `days` days ending on `end` (inclusive)
    #[must_use]
    pub fn ending_on(end: NaiveDate, days: u32) -> Self {
        let span = u64::from(days.max(1) - 1);
        let start = end.checked_sub_days(Days::new(span)).unwrap_or(NaiveDate::MIN);
        Self { start, end }
    }

    /// Whether a date falls inside the window
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        (self.start..=self.end).contains(&date)
    }
}

/// Effective sets per muscle group within a window
///
/// Warm-up sets and exercises outside the catalog contribute nothing.
#[must_use]
pub fn weekly_effective_sets(
    sessions: &[SessionExercise],
    window: WeekWindow,
) -> BTreeMap<MuscleGroup, f64> {
    let catalog = ExerciseCatalog::global();
    let mut totals = BTreeMap::new();
    for row in sessions.iter().filter(|row| window.contains(row.session_date)) {
        let group = catalog.lookup(&row.exercise_name);
        if !group.is_tracked() {
            continue;
        }
        let effort: f64 = row.working_sets().map(|set| compute_effort(set.rpe())).sum();
        *totals.entry(group).or_insert(0.0) += effort;
    }
    totals
}

/// Weekly volume summary for one muscle group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MuscleGroupVolume {
    /// Muscle group
    pub muscle_group: MuscleGroup,
    /// Effort-weighted set count
    pub effective_sets: f64,
    /// Raw working set count
    pub working_sets: u32,
    /// Distinct session dates in the window that trained the group
    pub weekly_frequency: u32,
    /// Landmarks the status was classified against
    pub landmark: VolumeLandmark,
    /// Classification against the landmarks
    pub status: VolumeStatus,
}

#[derive(Default)]
struct GroupTally {
    effective_sets: f64,
    working_sets: u32,
    dates: BTreeSet<NaiveDate>,
}

/// Weekly volume report for every tracked muscle group
///
/// Groups without training in the window are reported with zero sets.
#[must_use]
pub fn weekly_volume_report(
    sessions: &[SessionExercise],
    window: WeekWindow,
    landmarks: &LandmarkTable,
) -> Vec<MuscleGroupVolume> {
    let catalog = ExerciseCatalog::global();
    let mut tallies: BTreeMap<MuscleGroup, GroupTally> = BTreeMap::new();

    for row in sessions.iter().filter(|row| window.contains(row.session_date)) {
        let group = catalog.lookup(&row.exercise_name);
        if !group.is_tracked() {
            continue;
        }
        let tally = tallies.entry(group).or_default();
        for set in row.working_sets() {
            tally.effective_sets += compute_effort(set.rpe());
            tally.working_sets += 1;
            tally.dates.insert(row.session_date);
        }
    }

    MuscleGroup::TRACKED
        .into_iter()
        .filter_map(|group| {
            let landmark = landmarks.get(group)?;
            let tally = tallies.remove(&group).unwrap_or_default();
            Some(MuscleGroupVolume {
                muscle_group: group,
                effective_sets: tally.effective_sets,
                working_sets: tally.working_sets,
                weekly_frequency: u32::try_from(tally.dates.len()).unwrap_or(u32::MAX),
                status: landmark.classify(tally.effective_sets),
                landmark,
            })
        })
        .collect()
}
