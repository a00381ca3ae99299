use serde::{Serialize, Deserialize};

/// Selects which pair of statistics `extract` computes.
///
/// - `MeanVariance`       — brightness is the mean over every pixel and
///   channel; the second statistic is the population variance of those
///   values (a stress proxy: flat, washed-out leaves have little spread).
/// - `HsvValueSaturation` — brightness is the mean HSV value channel; the
///   second statistic is the mean saturation (a color-richness proxy).
///
/// The two are mutually exclusive. Thresholds are tuned per strategy, see
/// `Thresholds::for_strategy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureStrategy {
    #[default]
    MeanVariance,
    HsvValueSaturation,
}

impl FeatureStrategy {
    /// Label for the second statistic in reports and pages.
    pub fn second_stat_name(self) -> &'static str {
        match self {
            FeatureStrategy::MeanVariance       => "color variance",
            FeatureStrategy::HsvValueSaturation => "mean saturation",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FeatureStrategy::MeanVariance       => "mean / variance",
            FeatureStrategy::HsvValueSaturation => "HSV value / saturation",
        }
    }
}
