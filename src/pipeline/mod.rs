pub mod analyze;
pub mod report;

pub use analyze::{analyze, analyze_image};
pub use report::Report;
