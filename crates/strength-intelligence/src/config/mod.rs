// ABOUTME: Configuration module for strength-intelligence crate
// ABOUTME: Re-exports intelligence configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Intelligence module configuration (fatigue, deloads, volume, analysis windows)
pub mod intelligence;

pub use intelligence::{
    AnalysisConfig, ConfigError, DeloadConfig, FatigueConfig, FatigueSaturation, FatigueWeights,
    IntelligenceConfig, RegressionConfig, VolumeConfig,
};
