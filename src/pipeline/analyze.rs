use tracing::{debug, info, warn};

use crate::config::settings::AnalysisSettings;
use crate::error::DecodeError;
use crate::features::crop_image::CropImage;
use crate::features::extract::extract;
use crate::pipeline::report::Report;
use crate::weather::weather_input::WeatherInput;

/// Decodes `bytes` and runs the full analysis.
///
/// Decoding is the only fallible step; on failure nothing is assessed.
pub fn analyze(
    bytes: &[u8],
    weather: WeatherInput,
    settings: &AnalysisSettings,
) -> Result<Report, DecodeError> {
    let image = CropImage::decode(bytes).map_err(|e| {
        warn!(error = %e, len = bytes.len(), "image decode failed");
        e
    })?;
    Ok(analyze_image(&image, weather, settings))
}

/// Runs extract → assess → diagnose → plan on an already decoded image.
pub fn analyze_image(image: &CropImage, weather: WeatherInput, settings: &AnalysisSettings) -> Report {
    let engine = settings.engine();
    let features = extract(image, settings.strategy);
    debug!(
        width = image.width(),
        height = image.height(),
        strategy = ?features.strategy,
        brightness = features.brightness,
        second_stat = features.second_stat,
        "features extracted"
    );

    let assessment = engine.assess(&features);
    let plan = engine.plan(assessment.status, weather.wind_speed);
    info!(
        severity = assessment.severity_level,
        wind_speed = weather.wind_speed,
        steps = plan.len(),
        "crop assessed"
    );

    Report {
        features,
        assessment,
        health_status: assessment.status.status_label(),
        diagnosis: engine.diagnose(assessment.status),
        plan,
        weather,
    }
}
