use std::io::Cursor;
use tiny_http::{Request, Response};
use tracing::{debug, warn};

use agriguard::{analyze, Report, Severity, WeatherInput};

use crate::render::{error_html, html_escape, render_page, Page};
use crate::routes::{html_response, json_response};
use crate::state::SharedState;
use crate::util::body::{read_body, BodyError};
use crate::util::multipart::{extract_boundary, MultipartForm};

/// Uploads larger than this are rejected before parsing.
const MAX_UPLOAD_BYTES: u64 = 20 * 1024 * 1024;

// ---------------------------------------------------------------------------
// GET /
// ---------------------------------------------------------------------------

pub fn handle_get(state: SharedState) -> Response<Cursor<Vec<u8>>> {
    let page = render_page(Page::Analyze, &WeatherInput::default(), state.strategy_label(), |t| t);
    html_response(page)
}

// ---------------------------------------------------------------------------
// POST /analyze
// ---------------------------------------------------------------------------

pub fn handle_post(request: &mut Request, state: SharedState) -> Response<Cursor<Vec<u8>>> {
    let (weather, outcome) = read_and_analyze(request, &state);
    let result_html = match outcome {
        Ok(report) => report_html(&report),
        Err(msg)   => error_html(&msg),
    };
    let page = render_page(Page::Analyze, &weather, state.strategy_label(), |tmpl| {
        tmpl.replace("{{RESULT_SECTION}}", &result_html)
    });
    html_response(page)
}

// ---------------------------------------------------------------------------
// POST /api/analyze
// ---------------------------------------------------------------------------

pub fn handle_api(request: &mut Request, state: SharedState) -> Response<Cursor<Vec<u8>>> {
    match read_and_analyze(request, &state).1 {
        Ok(report) => match serde_json::to_string_pretty(&report) {
            Ok(body) => json_response(200, body),
            Err(e)   => json_response(500, error_json(&e.to_string())),
        },
        Err(msg) => json_response(422, error_json(&msg)),
    }
}

fn error_json(msg: &str) -> String {
    serde_json::json!({ "error": msg }).to_string()
}

// ---------------------------------------------------------------------------
// Shared request handling
// ---------------------------------------------------------------------------

/// Parses the multipart upload and runs the pipeline.
///
/// Always returns the weather that was (or would have been) used so the
/// sliders keep their positions on an error page.
fn read_and_analyze(request: &mut Request, state: &SharedState) -> (WeatherInput, Result<Report, String>) {
    let content_type = request.headers().iter()
        .find(|h| h.field.equiv("Content-Type"))
        .map(|h| h.value.as_str().to_owned())
        .unwrap_or_default();

    let boundary = match extract_boundary(&content_type) {
        Some(b) => b,
        None    => return (WeatherInput::default(), Err("Invalid multipart request.".to_owned())),
    };

    let body = match read_body(request.as_reader(), MAX_UPLOAD_BYTES) {
        Ok(b) => b,
        Err(e @ BodyError::TooLarge { .. }) => {
            warn!(limit = MAX_UPLOAD_BYTES, "upload too large");
            return (WeatherInput::default(), Err(format!("Image is too large: {}.", e)));
        }
        Err(e) => {
            warn!(error = %e, "failed to read request body");
            return (WeatherInput::default(), Err("Could not read the upload.".to_owned()));
        }
    };
    let form = MultipartForm::parse(&body, &boundary);
    let weather = weather_from_form(&form);
    debug!(bytes = body.len(), ?weather, "analysis request");

    let outcome = match form.file("image_file") {
        Some(bytes) if !bytes.is_empty() => {
            analyze(bytes, weather, state.analysis()).map_err(|e| e.to_string())
        }
        _ => Err("No image file was uploaded.".to_owned()),
    };
    (weather, outcome)
}

/// Reads the three sliders, falling back to defaults, then clamps.
pub fn weather_from_form(form: &MultipartForm) -> WeatherInput {
    let d = WeatherInput::default();
    let num = |name: &str, fallback: f64| {
        form.text(name)
            .and_then(|v| v.trim().parse::<f64>().ok())
            .unwrap_or(fallback)
    };
    WeatherInput {
        temperature: num("temperature", d.temperature),
        humidity:    num("humidity", d.humidity),
        wind_speed:  num("wind_speed", d.wind_speed),
    }
    .clamped()
}

// ---------------------------------------------------------------------------
// Result rendering
// ---------------------------------------------------------------------------

fn report_html(report: &Report) -> String {
    let level = report.assessment.severity_level;
    let steps: String = report.plan.texts().iter()
        .map(|s| format!("<li>{}</li>", html_escape(s)))
        .collect();
    let sev_class = match report.assessment.status {
        Severity::Healthy  => "sev-1",
        Severity::Moderate => "sev-2",
        Severity::Severe   => "sev-3",
    };
    format!(
        r#"<div class="result-card">
  <h2>Crop Health Assessment</h2>
  <p><strong>Health Status:</strong> <span class="{class}">{status}</span></p>
  <p><strong>Severity Level:</strong> {level} / 3</p>
  <p class="hint">Brightness {brightness:.4} &middot; {second_name} {second:.4}</p>
  <h2>Pest / Disease Diagnosis</h2>
  <p>{diagnosis}</p>
  <h2>Integrated Pest Management (IPM) Plan</h2>
  <ul>{steps}</ul>
  <p class="hint">Conditions: {temp} °C, {hum} % humidity, wind {wind} km/h.</p>
</div>"#,
        class       = sev_class,
        status      = html_escape(report.health_status),
        level       = level,
        brightness  = report.features.brightness,
        second_name = report.features.strategy.second_stat_name(),
        second      = report.features.second_stat,
        diagnosis   = html_escape(report.diagnosis),
        steps       = steps,
        temp        = report.weather.temperature,
        hum         = report.weather.humidity,
        wind        = report.weather.wind_speed,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(fields: &[(&str, &str)]) -> MultipartForm {
        let mut body = Vec::new();
        for (name, value) in fields {
            body.extend_from_slice(
                format!("--B\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n", name, value).as_bytes(),
            );
        }
        body.extend_from_slice(b"--B--\r\n");
        MultipartForm::parse(&body, "B")
    }

    #[test]
    fn missing_sliders_use_defaults() {
        assert_eq!(weather_from_form(&form(&[])), WeatherInput::default());
    }

    #[test]
    fn sliders_are_parsed_and_clamped() {
        let w = weather_from_form(&form(&[("temperature", "50"), ("humidity", "40"), ("wind_speed", " 12 ")]));
        assert_eq!((w.temperature, w.humidity, w.wind_speed), (45.0, 40.0, 12.0));
    }

    #[test]
    fn unparsable_slider_falls_back() {
        let w = weather_from_form(&form(&[("wind_speed", "gusty")]));
        assert_eq!(w.wind_speed, 6.0);
    }
}
