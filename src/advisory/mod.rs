pub mod demo;
pub mod diagnosis;
pub mod engine;
pub mod plan;
pub mod severity;
pub mod thresholds;

pub use demo::{DemoEngine, DEMO_DIAGNOSES};
pub use engine::RuleEngine;
pub use plan::{AdvisoryPlan, Recommendation, MAX_SPRAY_WIND_KMH};
pub use severity::{Assessment, Severity};
pub use thresholds::Thresholds;
