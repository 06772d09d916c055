// ABOUTME: Swimming-specific physiological constants used by the interval engine
// ABOUTME: Classification thresholds, rest margins, fatigue rates, and decay exponents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SwimLab

//! Physiological constants for swim performance modeling
//!
//! Every tunable the engine uses lives here with its units documented, so the
//! values are independently testable and adjustable without touching call
//! sites. Runtime overrides are applied through
//! [`crate::analysis_config::EngineConfig`].

/// Style classification thresholds on the velocity dropoff scalar
///
/// Dropoff is the cumulative fractional velocity decline accumulated across
/// the consecutive known reference distances (50→100, 100→200, 200→500).
/// A pure sprinter holds velocity as distance grows; a distance swimmer
/// sheds a large fraction of 50 velocity by the 500.
pub mod style_classification {
    /// Below this cumulative dropoff the athlete profiles as a sprinter
    /// (dimensionless fraction of velocity lost)
    pub const SPRINTER_MAX_DROPOFF: f64 = 0.06;

    /// Below this cumulative dropoff the athlete profiles as middle distance;
    /// at or above it, distance (dimensionless fraction of velocity lost)
    pub const MIDDLE_DISTANCE_MAX_DROPOFF: f64 = 0.12;

    /// Neutral dropoff assumed when fewer than two reference times are known.
    /// Centered in the middle-distance band so a single known time classifies
    /// as middle distance.
    pub const NEUTRAL_DROPOFF: f64 = 0.09;
}

/// Power-law decay exponents for time-vs-distance extrapolation
///
/// Predicted time follows `t2 = t1 * (d2 / d1)^b` outside the known range.
/// Riegel's endurance model uses b = 1.06 for trained athletes; sprinters
/// decay faster at long distances, distance swimmers more slowly.
///
/// Reference: Riegel, P.S. (1981). "Athletic records and human endurance."
/// *American Scientist*, 69(3), 285-290.
pub mod decay {
    /// Extrapolation exponent for sprinters (dimensionless)
    pub const SPRINTER_EXPONENT: f64 = 1.10;

    /// Extrapolation exponent for middle-distance swimmers (dimensionless);
    /// Riegel's classic value
    pub const MIDDLE_DISTANCE_EXPONENT: f64 = 1.06;

    /// Extrapolation exponent for distance swimmers (dimensionless)
    pub const DISTANCE_EXPONENT: f64 = 1.03;

    /// Floor applied to extrapolation exponents so predicted time stays
    /// strictly increasing in distance (dimensionless)
    pub const MIN_EXTRAPOLATION_EXPONENT: f64 = 1.01;
}

/// Rest margins added to the rounded repeat-100 swim time
///
/// Sprint work carries a higher anaerobic cost per repeat, so sprinters get
/// the most rest; distance swimmers recover on the least.
pub mod rest {
    /// Rest added per 100 for sprinters (seconds)
    pub const SPRINTER_REST_MARGIN: f64 = 15.0;

    /// Rest added per 100 for middle-distance swimmers (seconds)
    pub const MIDDLE_DISTANCE_REST_MARGIN: f64 = 10.0;

    /// Rest added per 100 for distance swimmers (seconds)
    pub const DISTANCE_REST_MARGIN: f64 = 5.0;
}

/// Per-repeat fatigue accumulation rates within a set
///
/// Each repeat after the first slows by this fraction of the base time.
/// Sprinters fade fastest at race-pace repeats; distance swimmers hold a
/// flatter curve.
pub mod fatigue {
    /// Added fraction of base time per additional repeat for sprinters
    /// (dimensionless per repeat)
    pub const SPRINTER_FATIGUE_RATE: f64 = 0.040;

    /// Added fraction of base time per additional repeat for middle-distance
    /// swimmers (dimensionless per repeat)
    pub const MIDDLE_DISTANCE_FATIGUE_RATE: f64 = 0.025;

    /// Added fraction of base time per additional repeat for distance
    /// swimmers (dimensionless per repeat)
    pub const DISTANCE_FATIGUE_RATE: f64 = 0.015;
}

/// Practice-versus-race adjustment
pub mod practice {
    /// Baseline relative slowdown applied to a race-pace prediction to get an
    /// expected practice time (dimensionless fraction). The effective factor
    /// shrinks with repeat distance while the absolute adjustment grows; see
    /// [`crate::interval_engine::adjust_time_for_practice`].
    pub const PRACTICE_SLOWDOWN_FRACTION: f64 = 0.05;
}

/// Pace-clock geometry
pub mod clock {
    /// Send-off intervals are rounded up to this increment (seconds) so the
    /// value is directly usable against a physical pace clock
    pub const SEND_OFF_INCREMENT_SECONDS: f64 = 5.0;
}
