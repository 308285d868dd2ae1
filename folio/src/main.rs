//! # folio - Main Entry Point
//!
//! Supports two operational modes:
//! - **TUI** (default): interactive viewer. The UI runs on its own thread;
//!   API requests run on the tokio runtime.
//! - **Headless** (`--headless`): drive the same state machine to completion
//!   and print one panel as plain text.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use folio::api::ApiClient;
use folio::cli::Args;
use folio::config::{ApiConfig, API_URL_ENV};
use folio::controller::{Controller, HeadlessRun};
use folio::state::ViewState;
use folio::tui::{self, App};

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_ERROR: i32 = 1;
const EXIT_USAGE: i32 = 2;

fn main() {
    env_logger::init();
    std::process::exit(match run() {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            let code = exit_code_for(&e);
            eprintln!("error: {e}");
            code
        }
    });
}

fn exit_code_for(err: &anyhow::Error) -> i32 {
    let msg = err.to_string().to_lowercase();
    if msg.contains("invalid api base url") {
        EXIT_USAGE
    } else {
        EXIT_ERROR
    }
}

#[tokio::main]
async fn run() -> Result<()> {
    let args = Args::parse();

    let config = ApiConfig::new(&args.api_url)?.with_timeout(args.timeout.map(Duration::from_secs));
    info!("using profile API at {} (override with --api-url or {API_URL_ENV})", config.base_url);

    let api_url = config.base_url.clone();
    let client = ApiClient::new(config).context("Failed to create HTTP client")?;
    let controller = Arc::new(Controller::new(Arc::new(client)));

    if args.headless {
        return run_headless(&args, &controller).await;
    }

    if !args.quiet {
        println!("folio v{}", env!("CARGO_PKG_VERSION"));
        println!("api: {api_url}");
    }

    let (request_tx, request_rx) = tokio::sync::mpsc::unbounded_channel();
    let (response_tx, response_rx) = crossbeam_channel::unbounded();

    // Spawn TUI thread; dropping the app closes the request channel and ends `serve`
    let app = App::new(ViewState::default(), request_tx, response_rx, api_url);
    let tui_handle = std::thread::spawn(move || app.run());

    Arc::clone(&controller).serve(request_rx, response_tx).await;

    match tui_handle.join() {
        Ok(result) => result,
        Err(_) => anyhow::bail!("TUI thread panicked"),
    }
}

/// Load, apply the requested filter and search in order, print the chosen panel.
async fn run_headless(args: &Args, controller: &Controller) -> Result<()> {
    let run = HeadlessRun { skill: args.skill.clone(), search: args.search.clone(), tab: args.tab };
    let state = controller.run_headless(&run).await;

    if state.profile.is_none() {
        let reason = state.error.unwrap_or_else(|| "profile did not load".to_string());
        anyhow::bail!(reason);
    }

    info!("rendering {} panel", state.active_tab);
    print!("{}", tui::render_plain(&state));
    Ok(())
}
