#![allow(clippy::float_cmp)]

use std::path::Path;

use clap::Parser;

use super::*;

#[test]
fn defaults_apply_with_only_script() {
    let cfg = Config::try_parse_from(["whiteboard", "gestures.jsonl"]).unwrap();
    assert_eq!(cfg.script, Path::new("gestures.jsonl"));
    assert_eq!(cfg.width, DEFAULT_WIDTH);
    assert_eq!(cfg.height, DEFAULT_HEIGHT);
    assert_eq!(cfg.dpr, 1.0);
    assert_eq!(cfg.origin_x, 0.0);
    assert_eq!(cfg.origin_y, 0.0);
    assert_eq!(cfg.log_filter, DEFAULT_LOG_FILTER);
}

#[test]
fn flags_override_defaults() {
    let cfg = Config::try_parse_from([
        "whiteboard",
        "s.jsonl",
        "--width",
        "640",
        "--height",
        "480",
        "--dpr",
        "2",
        "--origin-x",
        "-12.5",
        "--origin-y",
        "40",
        "--log",
        "canvas=debug",
    ])
    .unwrap();
    assert_eq!(cfg.width, 640.0);
    assert_eq!(cfg.height, 480.0);
    assert_eq!(cfg.dpr, 2.0);
    assert_eq!(cfg.origin_x, -12.5);
    assert_eq!(cfg.origin_y, 40.0);
    assert_eq!(cfg.log_filter, "canvas=debug");
}

#[test]
fn script_is_required() {
    assert!(Config::try_parse_from(["whiteboard"]).is_err());
}

#[test]
fn non_numeric_width_is_rejected() {
    assert!(Config::try_parse_from(["whiteboard", "s.jsonl", "--width", "wide"]).is_err());
}
