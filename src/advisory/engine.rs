use serde::{Serialize, Deserialize};

use crate::advisory::diagnosis;
use crate::advisory::plan::{self, AdvisoryPlan};
use crate::advisory::severity::{Assessment, Severity};
use crate::advisory::thresholds::Thresholds;
use crate::features::feature_vector::FeatureVector;
use crate::features::strategy::FeatureStrategy;

/// Deterministic threshold rules: features → severity → diagnosis → plan.
///
/// Holds only its immutable thresholds, so one engine can be shared freely
/// between threads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RuleEngine {
    pub thresholds: Thresholds,
}

impl RuleEngine {
    pub fn new(thresholds: Thresholds) -> RuleEngine {
        RuleEngine { thresholds }
    }

    /// Engine with the default cut-offs for `strategy`.
    pub fn for_strategy(strategy: FeatureStrategy) -> RuleEngine {
        RuleEngine::new(Thresholds::for_strategy(strategy))
    }

    /// Severe is checked first and short-circuits; Moderate only looks at
    /// brightness.
    pub fn assess(&self, features: &FeatureVector) -> Assessment {
        let t = &self.thresholds;
        let status = if features.brightness < t.brightness_severe
            || features.second_stat < t.second_stat_floor
        {
            Severity::Severe
        } else if features.brightness < t.brightness_moderate {
            Severity::Moderate
        } else {
            Severity::Healthy
        };
        Assessment::new(status)
    }

    pub fn diagnose(&self, severity: Severity) -> &'static str {
        diagnosis::diagnose(severity)
    }

    pub fn plan(&self, severity: Severity, wind_speed: f64) -> AdvisoryPlan {
        plan::plan(severity, wind_speed)
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        RuleEngine::new(Thresholds::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fv(brightness: f64, second_stat: f64) -> FeatureVector {
        FeatureVector { brightness, second_stat, strategy: FeatureStrategy::MeanVariance }
    }

    fn level(b: f64, v: f64) -> u8 {
        RuleEngine::default().assess(&fv(b, v)).severity_level
    }

    #[test]
    fn dark_images_are_severe() {
        assert_eq!(level(0.0, 0.5), 3);
        assert_eq!(level(0.349, 0.5), 3);
    }

    #[test]
    fn flat_images_are_severe_even_when_bright() {
        assert_eq!(level(0.9, 0.0), 3);
        assert_eq!(level(0.9, 0.0199), 3);
    }

    #[test]
    fn moderate_band_is_half_open() {
        assert_eq!(level(0.35, 0.02), 2);
        assert_eq!(level(0.5499, 0.3), 2);
    }

    #[test]
    fn bright_varied_images_are_healthy() {
        assert_eq!(level(0.55, 0.02), 1);
        assert_eq!(level(1.0, 0.25), 1);
    }

    #[test]
    fn status_matches_level() {
        let a = RuleEngine::default().assess(&fv(0.4, 0.1));
        assert_eq!(a.status, Severity::Moderate);
        assert_eq!(a.status.status_label(), "Moderate Crop Stress");
    }

    #[test]
    fn hsv_thresholds_use_rescaled_value_cutoffs() {
        let engine = RuleEngine::for_strategy(FeatureStrategy::HsvValueSaturation);
        let hsv = |b, s| FeatureVector { brightness: b, second_stat: s, strategy: FeatureStrategy::HsvValueSaturation };
        assert_eq!(engine.assess(&hsv(79.0 / 255.0, 0.5)).status, Severity::Severe);
        assert_eq!(engine.assess(&hsv(80.0 / 255.0, 0.5)).status, Severity::Moderate);
        assert_eq!(engine.assess(&hsv(120.0 / 255.0, 0.5)).status, Severity::Healthy);
        assert_eq!(engine.assess(&hsv(0.9, 0.05)).status, Severity::Severe);
    }
}
