use serde::{Serialize, Deserialize};
use crate::features::strategy::FeatureStrategy;

/// The two scalar image statistics used as stress proxies, both on [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub brightness: f64,
    /// Variance or mean saturation, depending on `strategy`.
    pub second_stat: f64,
    pub strategy: FeatureStrategy,
}
