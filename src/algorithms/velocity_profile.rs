// ABOUTME: Velocity profile construction and swimmer style classification
// ABOUTME: Dropoff is the cumulative fractional velocity decline across known distances
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SwimLab

use crate::analysis_config::EngineConfig;
use crate::models::{RaceTimes, StyleClassification, SwimmerStyle};
use tracing::debug;

/// Velocities (distance units per second) at the known reference distances
///
/// Entries exist only where a race time is known; an unknown time is omitted
/// entirely rather than recorded as zero velocity, which would corrupt the
/// downstream curve fit.
#[derive(Debug, Clone, PartialEq)]
pub struct VelocityProfile {
    entries: Vec<(u32, f64)>,
}

impl VelocityProfile {
    /// Build the profile from the known race times
    ///
    /// Durations that are zero or negative never reach this point
    /// ([`RaceTimes`] stores them as unknown), so every division here is by a
    /// positive number.
    #[must_use]
    pub fn from_times(times: &RaceTimes) -> Self {
        let entries = times
            .known_times()
            .into_iter()
            .map(|(distance, seconds)| (distance, f64::from(distance) / seconds))
            .collect();
        Self { entries }
    }

    /// Velocity at a reference distance, if known
    #[must_use]
    pub fn velocity_at(&self, distance: u32) -> Option<f64> {
        self.entries
            .iter()
            .find(|(d, _)| *d == distance)
            .map(|(_, v)| *v)
    }

    /// All `(distance, velocity)` entries in ascending distance order
    #[must_use]
    pub fn entries(&self) -> &[(u32, f64)] {
        &self.entries
    }

    /// Number of known velocities
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no velocity is known
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Buckets an athlete into a discrete style from the velocity profile
pub struct StyleClassifier;

impl StyleClassifier {
    /// Classify the athlete's performance curve
    ///
    /// Dropoff accumulates the fractional velocity decline over each pair of
    /// consecutive known reference distances (50→100, 100→200, 200→500);
    /// pairs with an unknown side contribute nothing. With fewer than two
    /// known distances there is no pair to measure, and the documented
    /// neutral constant applies: a lone time always classifies as middle
    /// distance.
    ///
    /// Classification is a monotone step function of dropoff with the two
    /// thresholds carried in [`EngineConfig`].
    #[must_use]
    pub fn classify(profile: &VelocityProfile, config: &EngineConfig) -> StyleClassification {
        let mut dropoff = 0.0;
        let mut pairs = 0_u32;

        for pair in profile.entries().windows(2) {
            let (_, v_short) = pair[0];
            let (_, v_long) = pair[1];
            dropoff += (v_short - v_long) / v_short;
            pairs += 1;
        }

        if pairs == 0 {
            dropoff = config.neutral_dropoff;
        }

        let style = if dropoff < config.sprinter_max_dropoff {
            SwimmerStyle::Sprinter
        } else if dropoff < config.middle_distance_max_dropoff {
            SwimmerStyle::MiddleDistance
        } else {
            SwimmerStyle::Distance
        };

        debug!(?style, dropoff, pairs, "classified swimmer profile");

        StyleClassification { style, dropoff }
    }
}
