use serde::{Serialize, Deserialize};
use crate::features::strategy::FeatureStrategy;

/// Fixed severity cut-offs, all on the normalized [0, 1] scale.
///
/// - `brightness_severe`   — brightness below this is Severe
/// - `brightness_moderate` — brightness below this (and not Severe) is Moderate
/// - `second_stat_floor`   — a second statistic below this is Severe
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub brightness_severe: f64,
    pub brightness_moderate: f64,
    pub second_stat_floor: f64,
}

impl Thresholds {
    pub const MEAN_VARIANCE: Thresholds = Thresholds {
        brightness_severe:   0.35,
        brightness_moderate: 0.55,
        second_stat_floor:   0.02,
    };

    /// Value-channel cut-offs of 80 and 120 on the 0..=255 scale, rescaled.
    pub const HSV_VALUE_SATURATION: Thresholds = Thresholds {
        brightness_severe:   80.0 / 255.0,
        brightness_moderate: 120.0 / 255.0,
        second_stat_floor:   0.10,
    };

    pub fn for_strategy(strategy: FeatureStrategy) -> Thresholds {
        match strategy {
            FeatureStrategy::MeanVariance       => Thresholds::MEAN_VARIANCE,
            FeatureStrategy::HsvValueSaturation => Thresholds::HSV_VALUE_SATURATION,
        }
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds::MEAN_VARIANCE
    }
}
