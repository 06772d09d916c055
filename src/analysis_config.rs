// ABOUTME: Runtime engine configuration backed by the physiological constants
// ABOUTME: Environment variables override individual values for tuning without rebuilds

use crate::errors::{AppError, AppResult};
use crate::physiological_constants::{clock, practice, style_classification};
use serde::{Deserialize, Serialize};
use std::env;

/// Tunable parameters of the interval engine
///
/// Defaults come from [`crate::physiological_constants`]; each field can be
/// overridden through the environment for tuning against a team's real data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Cumulative dropoff below which an athlete profiles as a sprinter
    pub sprinter_max_dropoff: f64,
    /// Cumulative dropoff below which an athlete profiles as middle distance
    pub middle_distance_max_dropoff: f64,
    /// Dropoff assumed when fewer than two reference times are known
    pub neutral_dropoff: f64,
    /// Pace-clock rounding increment for send-off intervals (seconds)
    pub send_off_increment_seconds: f64,
    /// Baseline practice slowdown fraction (dimensionless)
    pub practice_slowdown_fraction: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sprinter_max_dropoff: style_classification::SPRINTER_MAX_DROPOFF,
            middle_distance_max_dropoff: style_classification::MIDDLE_DISTANCE_MAX_DROPOFF,
            neutral_dropoff: style_classification::NEUTRAL_DROPOFF,
            send_off_increment_seconds: clock::SEND_OFF_INCREMENT_SECONDS,
            practice_slowdown_fraction: practice::PRACTICE_SLOWDOWN_FRACTION,
        }
    }
}

impl EngineConfig {
    /// Load configuration from the environment, falling back to the defaults
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            sprinter_max_dropoff: env_f64(
                "SWIMLAB_SPRINTER_MAX_DROPOFF",
                style_classification::SPRINTER_MAX_DROPOFF,
            ),
            middle_distance_max_dropoff: env_f64(
                "SWIMLAB_MIDDLE_DISTANCE_MAX_DROPOFF",
                style_classification::MIDDLE_DISTANCE_MAX_DROPOFF,
            ),
            neutral_dropoff: env_f64(
                "SWIMLAB_NEUTRAL_DROPOFF",
                style_classification::NEUTRAL_DROPOFF,
            ),
            send_off_increment_seconds: env_f64(
                "SWIMLAB_SEND_OFF_INCREMENT_SECONDS",
                clock::SEND_OFF_INCREMENT_SECONDS,
            ),
            practice_slowdown_fraction: env_f64(
                "SWIMLAB_PRACTICE_SLOWDOWN_FRACTION",
                practice::PRACTICE_SLOWDOWN_FRACTION,
            ),
        }
    }

    /// Validate internal consistency of the configuration
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` when the classification thresholds are
    /// out of order, the neutral dropoff falls outside the middle-distance
    /// band, or the clock increment is not positive.
    pub fn validate(&self) -> AppResult<()> {
        if self.sprinter_max_dropoff >= self.middle_distance_max_dropoff {
            return Err(AppError::invalid_input(format!(
                "Sprinter threshold {} must be below middle-distance threshold {}",
                self.sprinter_max_dropoff, self.middle_distance_max_dropoff
            )));
        }
        if !(self.sprinter_max_dropoff..self.middle_distance_max_dropoff)
            .contains(&self.neutral_dropoff)
        {
            return Err(AppError::invalid_input(format!(
                "Neutral dropoff {} must fall in the middle-distance band",
                self.neutral_dropoff
            )));
        }
        if self.send_off_increment_seconds <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "Send-off increment {} must be positive",
                self.send_off_increment_seconds
            )));
        }
        if !(0.0..1.0).contains(&self.practice_slowdown_fraction) {
            return Err(AppError::invalid_input(format!(
                "Practice slowdown {} must be a fraction below 1",
                self.practice_slowdown_fraction
            )));
        }
        Ok(())
    }
}

fn env_f64(key: &str, fallback: f64) -> f64 {
    env::var(key)
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(fallback)
}
