// ABOUTME: Per-repeat fatigue progression within a training set
// ABOUTME: Linear growth on the base time at a style-dependent rate

use crate::models::SwimmerStyle;
use crate::physiological_constants::fatigue;

/// Produces the expected per-repeat times within one set
pub struct FatigueProgressionGenerator;

impl FatigueProgressionGenerator {
    /// Expected absolute time for each repeat of a set, seconds
    ///
    /// The first repeat pays no fatigue penalty; each later repeat adds a
    /// style-dependent fraction of the base time. The result is
    /// non-decreasing; fatigue never heals across a set.
    #[must_use]
    pub fn progression(
        base_time: f64,
        rep_count: u32,
        style: SwimmerStyle,
    ) -> Vec<f64> {
        let rate = fatigue_rate(style);
        (0..rep_count)
            .map(|rep| base_time * rate.mul_add(f64::from(rep), 1.0))
            .collect()
    }
}

/// Added fraction of base time per additional repeat for the given style
#[must_use]
pub fn fatigue_rate(style: SwimmerStyle) -> f64 {
    match style {
        SwimmerStyle::Sprinter => fatigue::SPRINTER_FATIGUE_RATE,
        SwimmerStyle::MiddleDistance => fatigue::MIDDLE_DISTANCE_FATIGUE_RATE,
        SwimmerStyle::Distance => fatigue::DISTANCE_FATIGUE_RATE,
    }
}
