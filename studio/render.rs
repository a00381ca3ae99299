/// Template renderer for the AgriGuard studio.
///
/// The studio uses a single HTML template (`studio/assets/studio.html`) with
/// placeholder tokens like `{{TOKEN}}`. The template is embedded at compile
/// time; `render_page` resolves the global tokens and hands the rest to a
/// closure supplied by the handler.

use agriguard::weather::{HUMIDITY_RANGE_PCT, TEMPERATURE_RANGE_C, WIND_RANGE_KMH};
use agriguard::WeatherInput;

const TEMPLATE: &str = include_str!("assets/studio.html");

/// Which panel is active — controls the active CSS class and the JS
/// `ACTIVE_TAB` variable.
#[derive(Clone, Copy)]
pub enum Page {
    Analyze = 0,
    Demo    = 1,
}

/// Renders the full studio page.
///
/// - `page`     — active panel
/// - `weather`  — slider positions to show
/// - `strategy` — label of the configured feature strategy
/// - `fill`     — closure that fills panel-specific placeholders
pub fn render_page<F>(page: Page, weather: &WeatherInput, strategy: &str, fill: F) -> String
where
    F: FnOnce(String) -> String,
{
    let mut html = TEMPLATE.to_owned();

    html = html.replace("{{ACTIVE_TAB}}", &(page as u8).to_string());
    html = html.replace("{{STRATEGY_LABEL}}", &html_escape(strategy));

    html = html.replace("{{TEMPERATURE}}", &format!("{}", weather.temperature));
    html = html.replace("{{HUMIDITY}}",    &format!("{}", weather.humidity));
    html = html.replace("{{WIND}}",        &format!("{}", weather.wind_speed));
    html = html.replace("{{TEMP_MIN}}",  &format!("{}", TEMPERATURE_RANGE_C.0));
    html = html.replace("{{TEMP_MAX}}",  &format!("{}", TEMPERATURE_RANGE_C.1));
    html = html.replace("{{HUM_MIN}}",   &format!("{}", HUMIDITY_RANGE_PCT.0));
    html = html.replace("{{HUM_MAX}}",   &format!("{}", HUMIDITY_RANGE_PCT.1));
    html = html.replace("{{WIND_MIN}}",  &format!("{}", WIND_RANGE_KMH.0));
    html = html.replace("{{WIND_MAX}}",  &format!("{}", WIND_RANGE_KMH.1));

    html = fill(html);

    blank_remaining(html)
}

/// Replaces any `{{TOKEN}}` the handler left untouched with an empty string,
/// so panels without output render cleanly.
fn blank_remaining(mut html: String) -> String {
    while let Some(start) = html.find("{{") {
        if let Some(end) = html[start..].find("}}") {
            let abs_end = start + end + 2;
            html.replace_range(start..abs_end, "");
        } else {
            break;
        }
    }
    html
}

/// Escapes markup and template braces, so user text can never form a
/// `{{TOKEN}}` that `blank_remaining` would cut out of the page.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
     .replace('<', "&lt;")
     .replace('>', "&gt;")
     .replace('"', "&quot;")
     .replace('{', "&#123;")
     .replace('}', "&#125;")
}

pub fn error_html(msg: &str) -> String {
    format!(
        r#"<div class="result-card"><h2>Analysis failed</h2><div class="error-box">{}</div></div>"#,
        html_escape(msg)
    )
}
