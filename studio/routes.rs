use std::io::Cursor;
use tiny_http::{Header, Method, Request, Response, StatusCode};
use tracing::info;

use crate::state::SharedState;
use crate::handlers;

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

fn content_type(value: &'static str) -> Header {
    // Static ASCII header; construction cannot fail.
    Header::from_bytes(&b"Content-Type"[..], value.as_bytes())
        .expect("static header is valid")
}

fn bytes_response(status: u16, mime: &'static str, bytes: Vec<u8>) -> Response<Cursor<Vec<u8>>> {
    let len = bytes.len();
    Response::new(
        StatusCode(status),
        vec![content_type(mime)],
        Cursor::new(bytes),
        Some(len),
        None,
    )
}

pub fn html_response(body: String) -> Response<Cursor<Vec<u8>>> {
    bytes_response(200, "text/html; charset=utf-8", body.into_bytes())
}

pub fn json_response(status: u16, body: String) -> Response<Cursor<Vec<u8>>> {
    bytes_response(status, "application/json", body.into_bytes())
}

pub fn not_found() -> Response<Cursor<Vec<u8>>> {
    bytes_response(404, "text/plain", b"404 Not Found".to_vec())
}

// ---------------------------------------------------------------------------
// Request dispatcher
// ---------------------------------------------------------------------------

/// Dispatches incoming requests to the appropriate handler.
///
/// Handlers receive a `&mut Request` so that the dispatcher retains
/// ownership and responds at the end.
pub fn dispatch(mut request: Request, state: SharedState) {
    let method = request.method().clone();
    let url    = request.url().to_owned();

    let (path, query) = match url.split_once('?') {
        Some((p, q)) => (p.to_owned(), q.to_owned()),
        None         => (url.clone(), String::new()),
    };

    let response = match (&method, path.as_str()) {
        (Method::Get,  "/")            => handlers::analyze::handle_get(state),
        (Method::Post, "/analyze")     => handlers::analyze::handle_post(&mut request, state),
        (Method::Post, "/api/analyze") => handlers::analyze::handle_api(&mut request, state),
        (Method::Post, "/ask")         => handlers::ask::handle_post(&mut request, state),
        (Method::Get,  "/demo")        => handlers::demo::handle_get(query, state),
        _ => not_found(),
    };

    info!(%method, path = %path, status = response.status_code().0, "request");
    let _ = request.respond(response);
}
