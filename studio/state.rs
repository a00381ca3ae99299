use std::sync::Arc;
use agriguard::{AnalysisSettings, Settings};

/// Read-only data shared by every request thread.
///
/// Nothing here changes after startup; each request builds its own engine
/// and report, so no lock is needed.
pub struct StudioState {
    pub settings: Settings,
}

impl StudioState {
    pub fn new(settings: Settings) -> Self {
        StudioState { settings }
    }

    pub fn analysis(&self) -> &AnalysisSettings {
        &self.settings.analysis
    }

    pub fn strategy_label(&self) -> &'static str {
        self.settings.analysis.strategy.label()
    }
}

pub type SharedState = Arc<StudioState>;
