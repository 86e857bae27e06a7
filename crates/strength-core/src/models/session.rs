// ABOUTME: Session row models: raw store records, validated rows, and e1RM points
// ABOUTME: One row is one exercise performed in one session on one date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::set::{SetRecord, TrainingSet};
use crate::errors::{AppError, AppResult};

/// Raw session row as delivered by a session store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Calendar date of the session
    pub session_date: NaiveDate,
    /// Free-text exercise name
    pub exercise_name: String,
    /// Sets in the order performed
    #[serde(default)]
    pub sets: Vec<SetRecord>,
}

/// A validated session row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionExercise {
    /// Calendar date of the session
    pub session_date: NaiveDate,
    /// Free-text exercise name, as logged
    pub exercise_name: String,
    /// Validated sets in the order performed
    pub sets: Vec<TrainingSet>,
}

impl SessionExercise {
    /// Create a session row from already-validated sets
    #[must_use]
    pub fn new(
        session_date: NaiveDate,
        exercise_name: impl Into<String>,
        sets: Vec<TrainingSet>,
    ) -> Self {
        Self {
            session_date,
            exercise_name: exercise_name.into(),
            sets,
        }
    }

    /// Validate a raw record
    ///
    /// # Errors
    ///
    /// Returns `AppError::missing_field` if the exercise name is blank and
    /// `AppError::invalid_input` if any set fails validation. The error names
    /// the offending exercise and date.
    pub fn from_record(record: SessionRecord) -> AppResult<Self> {
        let resource = format!("{} @ {}", record.exercise_name, record.session_date);
        if record.exercise_name.trim().is_empty() {
            return Err(AppError::missing_field("exercise_name").with_resource_id(resource));
        }
        let sets = record
            .sets
            .into_iter()
            .map(TrainingSet::try_from)
            .collect::<AppResult<Vec<_>>>()
            .map_err(|e| e.with_resource_id(resource))?;
        Ok(Self {
            session_date: record.session_date,
            exercise_name: record.exercise_name,
            sets,
        })
    }

    /// Working sets only
    pub fn working_sets(&self) -> impl Iterator<Item = &TrainingSet> {
        self.sets.iter().filter(|set| set.is_working())
    }
}

impl TryFrom<SessionRecord> for SessionExercise {
    type Error = AppError;

    fn try_from(record: SessionRecord) -> Result<Self, Self::Error> {
        Self::from_record(record)
    }
}

/// Best e1RM of one session row, produced by the best-set selector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseE1rm {
    /// Date of the session row
    pub session_date: NaiveDate,
    /// Exercise name, as logged
    pub exercise_name: String,
    /// Highest Epley estimate across the row's sets
    pub best_e1rm: f64,
    /// Load of the winning set
    pub best_weight_kg: f64,
    /// Reps of the winning set
    pub best_reps: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;
    use crate::models::set::SetKind;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
    }

    #[test]
    fn test_from_record_validates_every_set() {
        let record = SessionRecord {
            session_date: date(3),
            exercise_name: "Squat".to_owned(),
            sets: vec![
                SetRecord {
                    reps: 5,
                    weight_kg: 100.0,
                    rpe: Some(8.0),
                    kind: SetKind::Working,
                },
                SetRecord {
                    reps: 5,
                    weight_kg: -100.0,
                    rpe: None,
                    kind: SetKind::Working,
                },
            ],
        };
        let error = SessionExercise::from_record(record).unwrap_err();
        assert_eq!(error.context.resource_id.as_deref(), Some("Squat @ 2025-03-03"));
    }

    #[test]
    fn test_blank_exercise_rejected() {
        let record = SessionRecord {
            session_date: date(3),
            exercise_name: "   ".to_owned(),
            sets: Vec::new(),
        };
        let error = SessionExercise::from_record(record).unwrap_err();
        assert_eq!(error.code, ErrorCode::MissingRequiredField);
    }

    #[test]
    fn test_working_sets_skip_warmups() {
        let row = SessionExercise::new(
            date(4),
            "Deadlift",
            vec![
                TrainingSet::warmup(5, 60.0).unwrap(),
                TrainingSet::working(5, 140.0, None).unwrap(),
            ],
        );
        assert_eq!(row.working_sets().count(), 1);
    }
}
