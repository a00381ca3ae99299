use serde::Serialize;

use crate::advisory::plan::AdvisoryPlan;
use crate::advisory::severity::Assessment;
use crate::features::feature_vector::FeatureVector;
use crate::weather::weather_input::WeatherInput;

/// Everything one analysis produces, ready for display or JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub features: FeatureVector,
    pub assessment: Assessment,
    pub health_status: &'static str,
    pub diagnosis: &'static str,
    pub plan: AdvisoryPlan,
    pub weather: WeatherInput,
}

impl Report {
    /// Plain-text rendering used by the CLI.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str("Crop Health Assessment\n");
        out.push_str(&format!("  Health Status:  {}\n", self.health_status));
        out.push_str(&format!("  Severity Level: {} / 3\n", self.assessment.severity_level));
        out.push_str(&format!(
            "  Features:       brightness {:.4}, {} {:.4} ({})\n",
            self.features.brightness,
            self.features.strategy.second_stat_name(),
            self.features.second_stat,
            self.features.strategy.label(),
        ));
        out.push_str("\nPest / Disease Diagnosis\n");
        out.push_str(&format!("  {}\n", self.diagnosis));
        out.push_str("\nIntegrated Pest Management (IPM) Plan\n");
        for step in self.plan.texts() {
            out.push_str(&format!("  - {}\n", step));
        }
        out.push_str(&format!(
            "\nWeather: {:.0} °C, {:.0} % humidity, wind {:.0} km/h\n",
            self.weather.temperature, self.weather.humidity, self.weather.wind_speed,
        ));
        out
    }
}
