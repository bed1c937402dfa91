//! `whiteboard`: replay a gesture script through the canvas engine and print
//! the resulting scene and view summary.

mod config;
mod replay;
mod script;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use config::{Config, DEFAULT_LOG_FILTER};

fn main() -> ExitCode {
    let config = Config::parse();

    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let steps = match replay::load(&config.script) {
        Ok(steps) => steps,
        Err(e) => {
            tracing::error!(error = %e, "replay failed");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(script = %config.script.display(), steps = steps.len(), "replaying");

    let report = replay::run(&config, &steps);
    print!("{report}");
    ExitCode::SUCCESS
}
