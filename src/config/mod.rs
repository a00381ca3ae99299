pub mod settings;

pub use settings::{AnalysisSettings, LoggingSettings, ServerSettings, Settings, DEFAULT_CONFIG_FILE};
