// ABOUTME: Intelligence configuration root combining all analytics sub-configurations
// ABOUTME: Loads defaults, optional JSON, and STRENGTH_* environment overrides, then validates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intelligence Configuration
//!
//! Every value has a default taken from `strength_core::constants`. Values can be
//! replaced by a JSON document (partial documents are fine) and then by environment
//! variables with the `STRENGTH_` prefix. The result is validated before use.

mod analysis;
mod error;
mod fatigue;
mod recommendation;
mod volume;

use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::warn;

pub use analysis::{AnalysisConfig, RegressionConfig};
pub use error::ConfigError;
pub use fatigue::{FatigueConfig, FatigueSaturation, FatigueWeights};
pub use recommendation::DeloadConfig;
pub use volume::VolumeConfig;

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Tolerance when checking that fatigue weights sum to one
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Root configuration for the analytics engine
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntelligenceConfig {
    /// Volume landmarks
    pub volume: VolumeConfig,
    /// Regression detection
    pub regression: RegressionConfig,
    /// Fatigue scoring
    pub fatigue: FatigueConfig,
    /// Deload suggestions
    pub deload: DeloadConfig,
    /// Analysis windows
    pub analysis: AnalysisConfig,
}

impl IntelligenceConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        Self::default().apply_env_overrides()?.validated()
    }

    /// Load configuration from a JSON document, then apply environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, an environment variable is
    /// invalid, or validation fails
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let base: Self = serde_json::from_str(json)
            .map_err(|e| ConfigError::Parse(format!("Invalid intelligence config JSON: {e}")))?;
        base.apply_env_overrides()?.validated()
    }

    /// Load configuration from a JSON file, then apply environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or [`Self::from_json_str`] fails
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    fn validated(self) -> Result<Self, ConfigError> {
        self.validate()?;
        Ok(self)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if configuration values are invalid
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_fatigue()?;
        self.validate_deload()?;
        self.validate_windows()?;
        self.validate_landmarks()
    }

    fn validate_fatigue(&self) -> Result<(), ConfigError> {
        let weights = &self.fatigue.weights;
        let all_weights = [
            weights.regression,
            weights.volume,
            weights.frequency,
            weights.nutrition,
        ];
        if all_weights
            .iter()
            .any(|w| !w.is_finite() || !(0.0..=1.0).contains(w))
        {
            return Err(ConfigError::InvalidWeights(
                "each fatigue weight must be within [0, 1]",
            ));
        }
        if (weights.total() - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::InvalidWeights("fatigue weights must sum to 1.0"));
        }

        let saturation = &self.fatigue.saturation;
        if !(saturation.regressions.is_finite() && saturation.regressions > 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "regression saturation must be > 0",
            ));
        }
        if !(saturation.weekly_frequency.is_finite() && saturation.weekly_frequency > 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "weekly frequency saturation must be > 0",
            ));
        }
        if !(0.0..=1.0).contains(&self.fatigue.nutrition_compliant_ratio) {
            return Err(ConfigError::InvalidRange(
                "nutrition_compliant_ratio must be within [0, 1]",
            ));
        }
        Ok(())
    }

    fn validate_deload(&self) -> Result<(), ConfigError> {
        if !(0.0..=100.0).contains(&self.deload.fatigue_threshold) {
            return Err(ConfigError::InvalidRange(
                "fatigue_threshold must be within [0, 100]",
            ));
        }
        if !(0.0..=100.0).contains(&self.deload.volume_reduction_pct) {
            return Err(ConfigError::InvalidRange(
                "volume_reduction_pct must be within [0, 100]",
            ));
        }
        if self.deload.duration_days == 0 {
            return Err(ConfigError::ValueOutOfRange("deload duration_days must be > 0"));
        }
        Ok(())
    }

    fn validate_windows(&self) -> Result<(), ConfigError> {
        if self.regression.min_consecutive == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "regression min_consecutive must be >= 1",
            ));
        }
        if self.analysis.week_days == 0 {
            return Err(ConfigError::ValueOutOfRange("analysis week_days must be > 0"));
        }
        if self.analysis.lookback_days < self.analysis.week_days {
            return Err(ConfigError::InvalidRange(
                "analysis lookback_days must cover at least week_days",
            ));
        }
        Ok(())
    }

    fn validate_landmarks(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for landmark in &self.volume.landmarks {
            if !landmark.muscle_group.is_tracked() {
                return Err(ConfigError::InvalidLandmark(format!(
                    "{} cannot carry volume landmarks",
                    landmark.muscle_group
                )));
            }
            if !landmark.is_well_formed() {
                return Err(ConfigError::InvalidLandmark(format!(
                    "{}: expected mev < mav < mrv (got {}/{}/{})",
                    landmark.muscle_group, landmark.mev, landmark.mav, landmark.mrv
                )));
            }
            if !seen.insert(landmark.muscle_group) {
                return Err(ConfigError::InvalidLandmark(format!(
                    "{} listed more than once",
                    landmark.muscle_group
                )));
            }
        }
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        let val = match env::var(env_var_name) {
            Ok(val) => val,
            Err(env::VarError::NotPresent) => return Ok(()),
            Err(e) => return Err(ConfigError::EnvVar(e)),
        };
        *target = val
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Fatigue weights and cutoffs
        Self::apply_env_var(
            "STRENGTH_WEIGHT_REGRESSION",
            &mut self.fatigue.weights.regression,
        )?;
        Self::apply_env_var("STRENGTH_WEIGHT_VOLUME", &mut self.fatigue.weights.volume)?;
        Self::apply_env_var(
            "STRENGTH_WEIGHT_FREQUENCY",
            &mut self.fatigue.weights.frequency,
        )?;
        Self::apply_env_var(
            "STRENGTH_WEIGHT_NUTRITION",
            &mut self.fatigue.weights.nutrition,
        )?;
        Self::apply_env_var(
            "STRENGTH_NUTRITION_COMPLIANT_RATIO",
            &mut self.fatigue.nutrition_compliant_ratio,
        )?;

        // Deloads
        Self::apply_env_var(
            "STRENGTH_FATIGUE_THRESHOLD",
            &mut self.deload.fatigue_threshold,
        )?;
        Self::apply_env_var(
            "STRENGTH_DELOAD_VOLUME_REDUCTION_PCT",
            &mut self.deload.volume_reduction_pct,
        )?;
        Self::apply_env_var(
            "STRENGTH_DELOAD_DURATION_DAYS",
            &mut self.deload.duration_days,
        )?;

        // Regression detection and windows
        Self::apply_env_var(
            "STRENGTH_REGRESSION_MIN_CONSECUTIVE",
            &mut self.regression.min_consecutive,
        )?;
        Self::apply_env_var("STRENGTH_ANALYSIS_WEEK_DAYS", &mut self.analysis.week_days)?;
        Self::apply_env_var(
            "STRENGTH_ANALYSIS_LOOKBACK_DAYS",
            &mut self.analysis.lookback_days,
        )?;

        Ok(self)
    }
}
