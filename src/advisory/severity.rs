use serde::{Serialize, Deserialize};

/// Crop stress ranking. The discriminant is the displayed severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Healthy  = 1,
    Moderate = 2,
    Severe   = 3,
}

impl Severity {
    pub fn level(self) -> u8 {
        self as u8
    }

    /// Health status shown to the user.
    pub fn status_label(self) -> &'static str {
        match self {
            Severity::Healthy  => "Healthy Crop",
            Severity::Moderate => "Moderate Crop Stress",
            Severity::Severe   => "Severe Crop Stress",
        }
    }
}

/// Result of `RuleEngine::assess`. Derived only from a `FeatureVector`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    pub status: Severity,
    pub severity_level: u8,
}

impl Assessment {
    pub fn new(status: Severity) -> Assessment {
        Assessment { status, severity_level: status.level() }
    }
}
