// ABOUTME: Command modules for the pierre-strength CLI
// ABOUTME: Analysis over a session log plus single-value lookups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod analyze;
pub mod lookup;
