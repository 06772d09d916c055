// ABOUTME: Core modeling algorithms: velocity profiling, prediction, fatigue
// ABOUTME: Pure functions over per-call inputs; no state survives an invocation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SwimLab

/// Velocity profiling and style classification
pub mod velocity_profile;

/// Time-vs-distance curve fitting and the base repeat-100 interval
pub mod base_time;

/// Per-repeat fatigue progression within a set
pub mod fatigue;

pub use base_time::BaseTimePredictor;
pub use fatigue::FatigueProgressionGenerator;
pub use velocity_profile::{StyleClassifier, VelocityProfile};
