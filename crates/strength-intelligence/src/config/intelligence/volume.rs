// ABOUTME: Volume landmark configuration (MEV/MAV/MRV per muscle group)
// ABOUTME: Holds the default landmark table that per-user overrides are merged into
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::volume::VolumeLandmark;

/// Volume configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeConfig {
    /// Landmarks for every tracked muscle group
    pub landmarks: Vec<VolumeLandmark>,
}

impl Default for VolumeConfig {
    fn default() -> Self {
        Self {
            landmarks: VolumeLandmark::defaults(),
        }
    }
}
