// ABOUTME: Time-vs-distance curve fit and base repeat-100 interval derivation
// ABOUTME: Piecewise power law through known anchors, style-modulated beyond them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SwimLab

use crate::analysis_config::EngineConfig;
use crate::interval_engine::round_interval_to_clock;
use crate::models::SwimmerStyle;
use crate::physiological_constants::{decay, rest};
use tracing::trace;

use super::velocity_profile::VelocityProfile;

/// Fits a smooth, monotone time-vs-distance curve and evaluates it
///
/// The curve is a piecewise power law between `log(distance)` and
/// `log(time)`: exact at every known anchor, and Riegel-style
/// (`t2 = t1 x (d2/d1)^b`) beyond the known range, where the exponent blends
/// the terminal anchor segment with a style-dependent decay; sprinters fall
/// off fastest at long distances, distance swimmers slowest.
pub struct BaseTimePredictor;

impl BaseTimePredictor {
    /// Predict the race-pace time for `distance`, seconds
    ///
    /// Returns `None` when no race time is known: there is nothing to fit,
    /// and callers skip the distance entirely.
    #[must_use]
    pub fn predict(
        distance: u32,
        profile: &VelocityProfile,
        style: SwimmerStyle,
    ) -> Option<f64> {
        // Known distances are returned exactly, not through the fit.
        if let Some(velocity) = profile.velocity_at(distance) {
            return Some(f64::from(distance) / velocity);
        }

        let anchors: Vec<(f64, f64)> = profile
            .entries()
            .iter()
            .map(|&(d, v)| (f64::from(d), f64::from(d) / v))
            .collect();
        let first = *anchors.first()?;
        let last = *anchors.last()?;

        let d = f64::from(distance);
        let predicted = if d < first.0 {
            let edge = anchors.get(1).map(|&next| segment_exponent(first, next));
            let exponent = extrapolation_exponent(edge, style);
            first.1 * (d / first.0).powf(exponent)
        } else if d > last.0 {
            let edge = (anchors.len() >= 2)
                .then(|| segment_exponent(anchors[anchors.len() - 2], last));
            let exponent = extrapolation_exponent(edge, style);
            last.1 * (d / last.0).powf(exponent)
        } else {
            interpolate(&anchors, d)?
        };

        trace!(distance, predicted, "evaluated time curve");
        Some(predicted)
    }

    /// Derive the baseline repeat-100 send-off from the athlete's 100 time
    ///
    /// The swim time is rounded up to the pace-clock increment, then the
    /// style rest margin is added on top; sprint repeats carry a higher
    /// anaerobic cost and earn more rest. `None` when no 100 time was
    /// supplied.
    #[must_use]
    pub fn calculate_base_interval(
        t100: Option<f64>,
        style: SwimmerStyle,
        config: &EngineConfig,
    ) -> Option<f64> {
        let swim = round_interval_to_clock(t100?, config.send_off_increment_seconds);
        Some(swim + rest_margin(style))
    }
}

/// Rest margin in seconds per 100 for the given style
#[must_use]
pub fn rest_margin(style: SwimmerStyle) -> f64 {
    match style {
        SwimmerStyle::Sprinter => rest::SPRINTER_REST_MARGIN,
        SwimmerStyle::MiddleDistance => rest::MIDDLE_DISTANCE_REST_MARGIN,
        SwimmerStyle::Distance => rest::DISTANCE_REST_MARGIN,
    }
}

fn style_exponent(style: SwimmerStyle) -> f64 {
    match style {
        SwimmerStyle::Sprinter => decay::SPRINTER_EXPONENT,
        SwimmerStyle::MiddleDistance => decay::MIDDLE_DISTANCE_EXPONENT,
        SwimmerStyle::Distance => decay::DISTANCE_EXPONENT,
    }
}

/// Power-law exponent implied by two anchors in log-log space
fn segment_exponent(a: (f64, f64), b: (f64, f64)) -> f64 {
    (b.1 / a.1).ln() / (b.0 / a.0).ln()
}

/// Exponent used beyond the known range
///
/// Tempers the jump between the terminal anchor segment and the pure style
/// decay by averaging the two; the floor keeps predicted time strictly
/// increasing even for degenerate anchor data.
fn extrapolation_exponent(edge: Option<f64>, style: SwimmerStyle) -> f64 {
    let target = style_exponent(style);
    let blended = edge.map_or(target, |segment| 0.5 * (segment + target));
    blended.max(decay::MIN_EXTRAPOLATION_EXPONENT)
}

fn interpolate(anchors: &[(f64, f64)], d: f64) -> Option<f64> {
    for pair in anchors.windows(2) {
        let (d1, t1) = pair[0];
        let (d2, t2) = pair[1];
        if d >= d1 && d <= d2 {
            let exponent = segment_exponent((d1, t1), (d2, t2));
            return Some(t1 * (d / d1).powf(exponent));
        }
    }
    None
}
