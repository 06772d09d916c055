// ABOUTME: Swim performance modeling and training-interval generation engine
// ABOUTME: Pure, stateless analysis crate with no I/O, persistence, or web surface
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SwimLab

#![deny(unsafe_code)]

//! # SwimLab Intelligence
//!
//! Swim performance modeling and training-interval generation for the SwimLab
//! platform. Given an athlete's known race times over the reference distances
//! (50/100/200/500), the engine derives a velocity profile, classifies the
//! athlete's performance curve, predicts times at arbitrary distances,
//! computes goal times for a target improvement, and emits a full table of
//! training intervals with per-repeat fatigue curves.
//!
//! Every operation is a pure function of its arguments: no shared state, no
//! caches, no I/O. The crate is safe to call from any number of concurrent
//! request handlers.
//!
//! ## Modules
//!
//! - **errors**: `AppError`/`AppResult` for structurally invalid requests
//! - **models**: race-time records and the request/response contract types
//! - **time_utils**: parsing and formatting of human race-time strings
//! - **physiological_constants**: classification thresholds, rest margins,
//!   fatigue rates, and decay exponents with documented units
//! - **analysis_config**: runtime engine configuration with env overrides
//! - **algorithms**: velocity profiling, style classification, time
//!   prediction, and fatigue progression
//! - **interval_engine**: the orchestrator producing the full response

/// Error handling for structurally invalid engine requests
pub mod errors;

/// Race-time records, style classification, and contract types
pub mod models;

/// Parsing and formatting of race-time strings
pub mod time_utils;

/// Sports-science constants with documented units
pub mod physiological_constants;

/// Engine configuration with environment overrides
pub mod analysis_config;

/// Velocity profiling, prediction, and fatigue algorithms
pub mod algorithms;

/// Top-level interval table generation
pub mod interval_engine;

pub use algorithms::{
    BaseTimePredictor, FatigueProgressionGenerator, StyleClassifier, VelocityProfile,
};
pub use analysis_config::EngineConfig;
pub use errors::{AppError, AppResult};
pub use interval_engine::{
    adjust_time_for_practice, calculate_goal_times, round_interval_to_clock, IntervalEngine,
};
pub use models::{
    GoalTimeSet, IntervalEntry, IntervalRequest, IntervalResponse, RaceTimes, StyleClassification,
    SwimmerProfile, SwimmerStyle,
};
