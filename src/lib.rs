pub mod advisory;
pub mod config;
pub mod error;
pub mod features;
pub mod pipeline;
pub mod telemetry;
pub mod weather;

// Convenience re-exports
pub use advisory::{AdvisoryPlan, Assessment, DemoEngine, Recommendation, RuleEngine, Severity, Thresholds};
pub use config::{AnalysisSettings, Settings};
pub use error::{ConfigError, DecodeError};
pub use features::{extract, CropImage, FeatureStrategy, FeatureVector};
pub use pipeline::{analyze, analyze_image, Report};
pub use weather::WeatherInput;
