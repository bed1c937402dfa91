//! Replay configuration parsed from the command line and environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_WIDTH: f64 = 1280.0;
pub const DEFAULT_HEIGHT: f64 = 720.0;
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "whiteboard", about = "Replay a gesture script through the whiteboard canvas engine")]
pub struct Config {
    /// JSON-lines gesture script, one step per line.
    pub script: PathBuf,

    /// Canvas width in CSS pixels.
    #[arg(long, env = "WHITEBOARD_WIDTH", default_value_t = DEFAULT_WIDTH)]
    pub width: f64,

    /// Canvas height in CSS pixels.
    #[arg(long, env = "WHITEBOARD_HEIGHT", default_value_t = DEFAULT_HEIGHT)]
    pub height: f64,

    /// Device pixel ratio.
    #[arg(long, env = "WHITEBOARD_DPR", default_value_t = 1.0)]
    pub dpr: f64,

    /// Screen-space x of the canvas's top-left corner.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub origin_x: f64,

    /// Screen-space y of the canvas's top-left corner.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub origin_y: f64,

    /// `tracing` filter directive, e.g. `debug` or `canvas=debug,info`.
    #[arg(long = "log", env = "WHITEBOARD_LOG", default_value = DEFAULT_LOG_FILTER)]
    pub log_filter: String,
}
