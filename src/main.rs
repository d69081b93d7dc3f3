//! CLI entry point for todolist.

mod cli;

use clap::Parser;
use std::io;
use todolist::config::load_config_with_source;
use todolist::session::Session;
use todolist::store::TodoStore;
use todolist::tui::Renderer;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Env var holding a `tracing` filter directive, e.g. `todolist=debug`.
const LOG_ENV: &str = "TODOLIST_LOG";

fn main() {
    let args = cli::Args::parse();
    init_tracing(args.verbose);

    // Load config.
    let loaded = match load_config_with_source(args.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    debug!(source = %loaded.source, "configuration loaded");
    let mut config = loaded.config;

    // Apply CLI overrides.
    if let Some(path) = args.file {
        config.storage.path = path;
    }
    if args.no_color {
        config.display.color = false;
    }

    let store = TodoStore::new(config.storage.path);
    let renderer = Renderer::new(config.display.color);
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();

    let result = Session::open(store, renderer, stdin, stdout).and_then(|mut s| s.run());
    if let Err(e) = result {
        eprintln!("error: terminal i/o failed: {e}");
        std::process::exit(1);
    }
}

/// Install the stderr `tracing` subscriber.
fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "todolist=debug"
    } else {
        "todolist=warn"
    };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
