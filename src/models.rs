// ABOUTME: Data model for the interval engine: race times, styles, and wire contracts
// ABOUTME: Known times are explicit Options; the zero sentinel exists only at the parse boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SwimLab

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The reference race distances the engine accepts known times for,
/// in ascending order (yards or meters, homogeneous per call)
pub const REFERENCE_DISTANCES: [u32; 4] = [50, 100, 200, 500];

/// An athlete's known race times over the reference distances
///
/// `None` means "not provided"; a stored value is always finite and positive.
/// The web layer's `0` sentinel is translated at construction and never
/// travels further into the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RaceTimes {
    /// 50 time in seconds, if known
    pub t50: Option<f64>,
    /// 100 time in seconds, if known
    pub t100: Option<f64>,
    /// 200 time in seconds, if known
    pub t200: Option<f64>,
    /// 500 time in seconds, if known
    pub t500: Option<f64>,
}

impl RaceTimes {
    /// Build from raw parsed seconds, mapping the `<= 0` sentinel (and any
    /// non-finite garbage) to "unknown"
    #[must_use]
    pub fn from_seconds(t50: f64, t100: f64, t200: f64, t500: f64) -> Self {
        Self {
            t50: known(t50),
            t100: known(t100),
            t200: known(t200),
            t500: known(t500),
        }
    }

    /// Known time for a reference distance, if any
    #[must_use]
    pub fn get(&self, distance: u32) -> Option<f64> {
        match distance {
            50 => self.t50,
            100 => self.t100,
            200 => self.t200,
            500 => self.t500,
            _ => None,
        }
    }

    /// All known `(distance, seconds)` pairs in ascending distance order
    #[must_use]
    pub fn known_times(&self) -> Vec<(u32, f64)> {
        REFERENCE_DISTANCES
            .iter()
            .filter_map(|&d| self.get(d).map(|t| (d, t)))
            .collect()
    }

    /// True when no race time is known at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.t50.is_none() && self.t100.is_none() && self.t200.is_none() && self.t500.is_none()
    }
}

/// Goal times over the reference distances, seconds
///
/// Produced by the goal calculator and merged with caller-supplied values;
/// caller-supplied entries are authoritative and never overwritten.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GoalTimeSet {
    /// Goal 50 time in seconds, if determined
    pub g50: Option<f64>,
    /// Goal 100 time in seconds, if determined
    pub g100: Option<f64>,
    /// Goal 200 time in seconds, if determined
    pub g200: Option<f64>,
    /// Goal 500 time in seconds, if determined
    pub g500: Option<f64>,
}

impl GoalTimeSet {
    /// Build from raw parsed seconds, mapping the `<= 0` sentinel to "unset"
    #[must_use]
    pub fn from_seconds(g50: f64, g100: f64, g200: f64, g500: f64) -> Self {
        Self {
            g50: known(g50),
            g100: known(g100),
            g200: known(g200),
            g500: known(g500),
        }
    }

    /// Goal time for a reference distance, if set
    #[must_use]
    pub fn get(&self, distance: u32) -> Option<f64> {
        match distance {
            50 => self.g50,
            100 => self.g100,
            200 => self.g200,
            500 => self.g500,
            _ => None,
        }
    }

    /// Fill unset entries from `computed`, keeping existing entries verbatim
    pub fn fill_missing(&mut self, computed: &Self) {
        self.g50 = self.g50.or(computed.g50);
        self.g100 = self.g100.or(computed.g100);
        self.g200 = self.g200.or(computed.g200);
        self.g500 = self.g500.or(computed.g500);
    }
}

fn known(seconds: f64) -> Option<f64> {
    (seconds.is_finite() && seconds > 0.0).then_some(seconds)
}

/// Discrete athlete style derived from the velocity dropoff scalar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwimmerStyle {
    /// Holds velocity as distance grows; high anaerobic cost per repeat
    Sprinter,
    /// Balanced velocity decline
    MiddleDistance,
    /// Flat velocity curve across distances; recovers quickly
    Distance,
}

impl fmt::Display for SwimmerStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Sprinter => "Sprinter",
            Self::MiddleDistance => "Middle Distance",
            Self::Distance => "Distance",
        };
        f.write_str(label)
    }
}

/// Style bucket plus the continuous dropoff scalar it was derived from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StyleClassification {
    /// Discrete style bucket
    pub style: SwimmerStyle,
    /// Cumulative fractional velocity decline across the known reference
    /// distances (dimensionless)
    pub dropoff: f64,
}

/// One row of the generated interval table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalEntry {
    /// Repeat distance (ladder units)
    pub distance: u32,
    /// Number of repeats in the set
    pub rep_count: u32,
    /// Clock-rounded send-off interval, seconds
    pub send_off_seconds: f64,
    /// Send-off formatted for display (`M:SS.s`)
    pub send_off_display: Option<String>,
}

/// Summary of the modeled athlete returned with every response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwimmerProfile {
    /// Discrete style bucket
    pub style: SwimmerStyle,
    /// Continuous dropoff scalar behind the bucket (dimensionless)
    pub dropoff: f64,
    /// Baseline repeat-100 send-off, formatted; `null` when no 100 time
    /// was supplied
    pub base_interval_100: Option<String>,
}

/// Human-readable restatement of the goal scaling applied
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalModel {
    /// Display string for the goal computation
    pub formula: String,
    /// Improvement percentage applied (percent of time, not velocity)
    pub percentage: f64,
}

/// Human-readable description of the fitted velocity model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VelocityModel {
    /// Display string for the fitted curve
    pub formula: String,
}

/// Interval generation request, mirroring the JSON the web layer posts
///
/// Time fields are raw strings; parsing happens inside the engine so that
/// absent and malformed values degrade uniformly to "unknown".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntervalRequest {
    /// Known 50 time as entered (`"MM:SS.ss"`, `"SS.ss"`, or empty)
    #[serde(default)]
    pub t50: String,
    /// Known 100 time as entered
    #[serde(default)]
    pub t100: String,
    /// Known 200 time as entered
    #[serde(default)]
    pub t200: String,
    /// Known 500 time as entered
    #[serde(default)]
    pub t500: String,
    /// Caller-supplied goal 50 time; empty or `0` lets the engine compute it
    #[serde(default)]
    pub g50: String,
    /// Caller-supplied goal 100 time
    #[serde(default)]
    pub g100: String,
    /// Caller-supplied goal 200 time
    #[serde(default)]
    pub g200: String,
    /// Caller-supplied goal 500 time
    #[serde(default)]
    pub g500: String,
    /// Target improvement as percent of time (2.0 ⇒ 2% faster)
    #[serde(default = "default_goal_percentage")]
    pub goal_percentage: f64,
    /// Repeats per set
    #[serde(default = "default_num_reps")]
    pub num_reps: u32,
}

impl Default for IntervalRequest {
    fn default() -> Self {
        Self {
            t50: String::new(),
            t100: String::new(),
            t200: String::new(),
            t500: String::new(),
            g50: String::new(),
            g100: String::new(),
            g200: String::new(),
            g500: String::new(),
            goal_percentage: default_goal_percentage(),
            num_reps: default_num_reps(),
        }
    }
}

fn default_goal_percentage() -> f64 {
    2.0
}

fn default_num_reps() -> u32 {
    3
}

/// Full interval generation response consumed by the web layer
///
/// Prediction maps carry an entry for every ladder distance; the value is
/// `null` when nothing could be predicted there, so the caller can still
/// render a goal-only page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalResponse {
    /// Interval table keyed by ladder distance
    pub intervals: BTreeMap<u32, IntervalEntry>,
    /// Per-repeat expected seconds keyed by ladder distance
    pub fatigue_progressions: BTreeMap<u32, Vec<f64>>,
    /// Supplied race times, formatted, keyed `"<distance> yards"`
    pub actual_times: BTreeMap<String, Option<String>>,
    /// Race-pace predictions over the ladder, formatted
    pub model_predictions: BTreeMap<String, Option<String>>,
    /// Practice-adjusted predictions over the ladder, formatted
    pub practice_predictions: BTreeMap<String, Option<String>>,
    /// Goal scaling restated for display
    pub goal_model: GoalModel,
    /// Goal-pace predictions over the ladder, formatted
    pub goal_predictions: BTreeMap<String, Option<String>>,
    /// Fitted velocity model restated for display
    pub velocity_model: VelocityModel,
    /// Modeled athlete summary
    pub swimmer_profile: SwimmerProfile,
}

impl IntervalResponse {
    /// Serialize to the JSON body the web layer hands back to the client
    ///
    /// # Errors
    ///
    /// Returns `AppError::Internal` if serialization fails, which would mean
    /// a bug in the contract types themselves.
    pub fn to_json(&self) -> AppResult<String> {
        serde_json::to_string(self).map_err(|err| AppError::internal(err.to_string()))
    }
}
