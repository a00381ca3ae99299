use std::io::Cursor;
use tiny_http::{Request, Response};
use tracing::warn;

use agriguard::WeatherInput;

use crate::render::{html_escape, render_page, Page};
use crate::routes::html_response;
use crate::state::SharedState;
use crate::util::body::read_body;
use crate::util::form::{form_get, parse_form};

const MAX_ASK_BYTES: u64 = 64 * 1024;

/// The only answer the ask box ever gives. No query is interpreted.
pub const FIXED_ADVICE: &str = "Based on the current crop condition and environmental parameters, \
early intervention and sustainable IPM practices are recommended.";

// ---------------------------------------------------------------------------
// POST /ask
// ---------------------------------------------------------------------------

pub fn handle_post(request: &mut Request, state: SharedState) -> Response<Cursor<Vec<u8>>> {
    let body = read_body(request.as_reader(), MAX_ASK_BYTES).unwrap_or_else(|e| {
        warn!(error = %e, "failed to read ask body");
        Vec::new()
    });
    html_response(ask_page(&query_from_body(&body), state.strategy_label()))
}

/// Pulls `query` out of an urlencoded body. Bytes that are not UTF-8 are
/// replaced rather than discarding the whole query.
pub fn query_from_body(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    let pairs = parse_form(&text);
    form_get(&pairs, "query").unwrap_or("").to_owned()
}

fn ask_page(query: &str, strategy_label: &str) -> String {
    let answer = answer_html(query);
    render_page(Page::Analyze, &WeatherInput::default(), strategy_label, |tmpl| {
        tmpl.replace("{{ASK_SECTION}}", &answer)
    })
}

/// Empty queries get no answer; anything else gets `FIXED_ADVICE`.
pub fn answer_html(query: &str) -> String {
    if query.is_empty() {
        return String::new();
    }
    format!(
        r#"<div class="result-card"><p class="hint">You asked: {}</p><p>{}</p></div>"#,
        html_escape(query),
        FIXED_ADVICE
    )
}
