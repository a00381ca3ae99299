use std::path::{Path, PathBuf};
use serde::{Serialize, Deserialize};

use crate::advisory::engine::RuleEngine;
use crate::advisory::thresholds::Thresholds;
use crate::error::ConfigError;
use crate::features::strategy::FeatureStrategy;

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "agriguard.toml";

/// Everything read from `agriguard.toml`. Every section is optional.
///
/// ```toml
/// [server]
/// addr = "127.0.0.1:7878"
///
/// [analysis]
/// strategy = "hsv_value_saturation"
///
/// [analysis.thresholds]
/// brightness_severe = 0.30
/// brightness_moderate = 0.50
/// second_stat_floor = 0.08
///
/// [logging]
/// filter = "agriguard=debug"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub analysis: AnalysisSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub addr: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        ServerSettings { addr: "127.0.0.1:7878".to_owned() }
    }
}

/// Feature strategy plus optional threshold overrides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    pub strategy: FeatureStrategy,
    /// When absent the strategy's own cut-offs apply.
    pub thresholds: Option<Thresholds>,
}

impl AnalysisSettings {
    pub fn new(strategy: FeatureStrategy) -> Self {
        AnalysisSettings { strategy, thresholds: None }
    }

    pub fn engine(&self) -> RuleEngine {
        RuleEngine::new(
            self.thresholds
                .unwrap_or_else(|| Thresholds::for_strategy(self.strategy)),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `EnvFilter` directive; `RUST_LOG` wins when set.
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings { filter: "agriguard=info,studio=info".to_owned() }
    }
}

impl Settings {
    /// Loads settings from `path`, or from `agriguard.toml` in the working
    /// directory when `path` is `None`.
    ///
    /// An explicit path must exist; the implicit default file may be missing,
    /// in which case built-in defaults are returned.
    pub fn load(path: Option<&Path>) -> Result<Settings, ConfigError> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None    => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };
        if !required && !path.exists() {
            return Ok(Settings::default());
        }
        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Settings::from_toml_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_toml_str(contents: &str) -> Result<Settings, toml::de::Error> {
        toml::from_str(contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let s = Settings::from_toml_str("").unwrap();
        assert_eq!(s, Settings::default());
        assert_eq!(s.server.addr, "127.0.0.1:7878");
        assert_eq!(s.analysis.strategy, FeatureStrategy::MeanVariance);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let s = Settings::from_toml_str("[analysis]\nstrategy = \"hsv_value_saturation\"\n").unwrap();
        assert_eq!(s.analysis.strategy, FeatureStrategy::HsvValueSaturation);
        assert_eq!(s.analysis.thresholds, None);
        assert_eq!(s.logging, LoggingSettings::default());
        assert_eq!(s.analysis.engine().thresholds, Thresholds::HSV_VALUE_SATURATION);
    }

    #[test]
    fn threshold_override_replaces_strategy_defaults() {
        let toml = r#"
[analysis.thresholds]
brightness_severe = 0.3
brightness_moderate = 0.5
second_stat_floor = 0.01
"#;
        let s = Settings::from_toml_str(toml).unwrap();
        let t = s.analysis.engine().thresholds;
        assert_eq!(t.brightness_severe, 0.3);
        assert_eq!(t.second_stat_floor, 0.01);
    }

    #[test]
    fn unknown_strategy_is_rejected() {
        assert!(Settings::from_toml_str("[analysis]\nstrategy = \"neural\"\n").is_err());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = Settings::load(Some(Path::new("/nonexistent/agriguard.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
