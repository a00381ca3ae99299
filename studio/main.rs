/// AgriGuard Studio
///
/// A browser page for uploading a crop/leaf image, setting field conditions,
/// and reading the resulting assessment and IPM plan. Served by a synchronous
/// tiny_http server; no JavaScript frameworks required.
///
/// Run with:
///   cargo run --bin studio --release
/// Then open http://127.0.0.1:7878 (or the `[server] addr` from agriguard.toml,
/// or `--addr`).
///
/// Routes:
///   GET  /             — upload form and weather sliders
///   POST /analyze      — analysis result page
///   POST /api/analyze  — analysis result as JSON
///   POST /ask          — fixed advisory answer
///   GET  /demo         — random demo diagnosis

mod state;
mod render;
mod routes;
mod handlers;
mod util;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use clap::Parser;
use tiny_http::Server;
use tracing::info;

use agriguard::Settings;
use state::StudioState;

#[derive(Parser, Debug)]
#[command(name = "studio")]
#[command(version)]
#[command(about = "AgriGuard Studio: browser front end for crop analysis", long_about = None)]
struct Args {
    /// Configuration file (defaults to ./agriguard.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address; overrides `[server] addr`
    #[arg(long)]
    addr: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut settings = Settings::load(args.config.as_deref())?;
    if let Some(addr) = args.addr {
        settings.server.addr = addr;
    }
    agriguard::telemetry::init(&settings.logging.filter);

    let addr = settings.server.addr.clone();
    let server = Server::http(&addr)
        .map_err(|e| anyhow!("failed to bind HTTP server on {}: {}", addr, e))?;

    info!(addr = %addr, strategy = ?settings.analysis.strategy, "AgriGuard Studio listening");
    println!("AgriGuard Studio: open http://{} in your browser", addr);

    let shared_state = Arc::new(StudioState::new(settings));

    // One thread per request; handlers share only immutable state.
    for request in server.incoming_requests() {
        let state_clone = shared_state.clone();
        std::thread::spawn(move || {
            routes::dispatch(request, state_clone);
        });
    }
    Ok(())
}
