// ABOUTME: Orchestrator composing profiling, prediction, goals, and fatigue into the response
// ABOUTME: Stateless sweep over the 25..=500 training ladder per request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SwimLab

use std::collections::BTreeMap;

use tracing::debug;

use crate::algorithms::base_time::{rest_margin, BaseTimePredictor};
use crate::algorithms::{FatigueProgressionGenerator, StyleClassifier, VelocityProfile};
use crate::analysis_config::EngineConfig;
use crate::errors::{AppError, AppResult};
use crate::models::{
    GoalModel, GoalTimeSet, IntervalEntry, IntervalRequest, IntervalResponse, RaceTimes,
    SwimmerProfile, VelocityModel, REFERENCE_DISTANCES,
};
use crate::time_utils::{format_time, parse_time_input};

/// Training ladder increment (yards or meters, homogeneous per call)
const LADDER_STEP: u32 = 25;

/// Longest ladder distance
const LADDER_MAX: u32 = 500;

/// The interval table generator
///
/// Holds only configuration; every call to [`IntervalEngine::generate`] is a
/// pure function of the request, safe under arbitrary concurrency.
#[derive(Debug, Clone, Default)]
pub struct IntervalEngine {
    config: EngineConfig,
}

impl IntervalEngine {
    /// Create an engine with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with a custom configuration
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Generate the full interval table and prediction maps for a request
    ///
    /// Malformed time strings degrade to "unknown" and produce `null`
    /// predictions rather than errors; with no known time at all the
    /// response still carries the ladder keys so the caller can render a
    /// goal-only page.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` when `num_reps` is zero, when
    /// `goal_percentage` is not a finite value in `[0, 100)`, or when the
    /// engine configuration itself is inconsistent.
    pub fn generate(&self, request: &IntervalRequest) -> AppResult<IntervalResponse> {
        self.config.validate()?;

        if request.num_reps == 0 {
            return Err(AppError::invalid_input("num_reps must be at least 1"));
        }
        let percentage = request.goal_percentage;
        if !percentage.is_finite() || !(0.0..100.0).contains(&percentage) {
            return Err(AppError::invalid_input(format!(
                "goal_percentage {percentage} must be a finite value in [0, 100)"
            )));
        }

        let times = RaceTimes::from_seconds(
            parse_time_input(&request.t50),
            parse_time_input(&request.t100),
            parse_time_input(&request.t200),
            parse_time_input(&request.t500),
        );
        let mut goal_times = GoalTimeSet::from_seconds(
            parse_time_input(&request.g50),
            parse_time_input(&request.g100),
            parse_time_input(&request.g200),
            parse_time_input(&request.g500),
        );
        goal_times.fill_missing(&calculate_goal_times(&times, percentage));

        let profile = VelocityProfile::from_times(&times);
        let classification = StyleClassifier::classify(&profile, &self.config);
        let style = classification.style;

        debug!(
            %style,
            dropoff = classification.dropoff,
            num_reps = request.num_reps,
            known_times = profile.len(),
            "generating interval table"
        );

        let base_interval_100 =
            BaseTimePredictor::calculate_base_interval(times.t100, style, &self.config);

        let goal_scale = 1.0 - percentage / 100.0;
        let mut intervals = BTreeMap::new();
        let mut fatigue_progressions = BTreeMap::new();
        let mut model_predictions = BTreeMap::new();
        let mut practice_predictions = BTreeMap::new();
        let mut goal_predictions = BTreeMap::new();

        for distance in ladder() {
            let label = distance_label(distance);

            let Some(base) = BaseTimePredictor::predict(distance, &profile, style) else {
                model_predictions.insert(label.clone(), None);
                practice_predictions.insert(label.clone(), None);
                goal_predictions.insert(label, None);
                continue;
            };

            let practice =
                adjust_time_for_practice(base, distance, self.config.practice_slowdown_fraction);
            let progression =
                FatigueProgressionGenerator::progression(practice, request.num_reps, style);
            let slowest_rep = progression.last().copied().unwrap_or(practice);
            let rest = rest_margin(style) * f64::from(distance) / 100.0;
            let send_off = round_interval_to_clock(
                slowest_rep + rest,
                self.config.send_off_increment_seconds,
            );

            intervals.insert(
                distance,
                IntervalEntry {
                    distance,
                    rep_count: request.num_reps,
                    send_off_seconds: send_off,
                    send_off_display: format_time(send_off),
                },
            );
            fatigue_progressions.insert(distance, progression);

            // Caller-supplied or computed goals are authoritative at the
            // reference distances; elsewhere the goal scales the prediction.
            let goal = goal_times.get(distance).unwrap_or(base * goal_scale);
            model_predictions.insert(label.clone(), format_time(base));
            practice_predictions.insert(label.clone(), format_time(practice));
            goal_predictions.insert(label, format_time(goal));
        }

        let actual_times = REFERENCE_DISTANCES
            .iter()
            .map(|&d| (distance_label(d), times.get(d).and_then(format_time)))
            .collect();

        Ok(IntervalResponse {
            intervals,
            fatigue_progressions,
            actual_times,
            model_predictions,
            practice_predictions,
            goal_model: GoalModel {
                formula: format!("Goal times based on {percentage}% improvement"),
                percentage,
            },
            goal_predictions,
            velocity_model: VelocityModel {
                formula: format!("Power-law model based on {style} profile"),
            },
            swimmer_profile: SwimmerProfile {
                style,
                dropoff: classification.dropoff,
                base_interval_100: base_interval_100.and_then(format_time),
            },
        })
    }
}

/// Goal times for the reference distances at a percent-of-time improvement
///
/// `percentage` reduces the *time* (2.0 ⇒ 2% faster), never the velocity.
/// Distances with no known actual stay unset.
#[must_use]
pub fn calculate_goal_times(times: &RaceTimes, percentage: f64) -> GoalTimeSet {
    let scale = 1.0 - percentage / 100.0;
    GoalTimeSet {
        g50: times.t50.map(|t| t * scale),
        g100: times.t100.map(|t| t * scale),
        g200: times.t200.map(|t| t * scale),
        g500: times.t500.map(|t| t * scale),
    }
}

/// Round a send-off up to the pace-clock increment
///
/// Never reduces the interval below the raw computed value; swimmers are
/// never given less rest than the model requires. Idempotent on values
/// already on the clock.
#[must_use]
pub fn round_interval_to_clock(seconds: f64, increment_seconds: f64) -> f64 {
    if increment_seconds <= 0.0 || !seconds.is_finite() {
        return seconds;
    }
    (seconds / increment_seconds).ceil() * increment_seconds
}

/// Expected practice time for a race-pace prediction
///
/// Practice repeats are slower than a tapered race swim. The relative factor
/// shrinks as the repeat gets longer while the absolute adjustment grows: a
/// 25 carries the full turn-and-push cost per unit distance, a 500 amortizes
/// it.
#[must_use]
pub fn adjust_time_for_practice(base_time: f64, distance: u32, slowdown_fraction: f64) -> f64 {
    let distance_factor = 1.0 + f64::from(LADDER_STEP) / f64::from(distance);
    base_time * slowdown_fraction.mul_add(distance_factor, 1.0)
}

fn ladder() -> impl Iterator<Item = u32> {
    (1..=LADDER_MAX / LADDER_STEP).map(|step| step * LADDER_STEP)
}

fn distance_label(distance: u32) -> String {
    format!("{distance} yards")
}
