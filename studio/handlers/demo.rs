use std::io::Cursor;
use tiny_http::Response;

use agriguard::{DemoEngine, WeatherInput};

use crate::render::{html_escape, render_page, Page};
use crate::routes::html_response;
use crate::state::SharedState;
use crate::util::form::{form_get, parse_form};

// ---------------------------------------------------------------------------
// GET /demo  and  GET /demo?seed=N
// ---------------------------------------------------------------------------

pub fn handle_get(query: String, state: SharedState) -> Response<Cursor<Vec<u8>>> {
    let pairs = parse_form(&query);
    let seed = form_get(&pairs, "seed").and_then(|s| s.trim().parse::<u64>().ok());

    let mut engine = match seed {
        Some(seed) => DemoEngine::seeded(seed),
        None       => DemoEngine::from_entropy(),
    };
    let diagnosis = engine.diagnose();

    let seed_note = match seed {
        Some(s) => format!("seed {}", s),
        None    => "unseeded".to_owned(),
    };
    let section = format!(
        r#"<div class="result-card"><p><span class="demo-badge">random demo</span> <span class="hint">{}</span></p><p><strong>{}</strong></p></div>"#,
        seed_note,
        html_escape(diagnosis)
    );

    let page = render_page(Page::Demo, &WeatherInput::default(), state.strategy_label(), |tmpl| {
        tmpl.replace("{{DEMO_SECTION}}", &section)
    });
    html_response(page)
}
