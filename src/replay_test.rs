#![allow(clippy::float_cmp)]

use clap::Parser;

use super::*;

fn config() -> Config {
    Config::parse_from(["whiteboard", "unused.jsonl", "--width", "800", "--height", "600"])
}

fn steps(text: &str) -> Vec<Step> {
    script::parse(text).unwrap()
}

#[test]
fn rectangle_gesture_commits_one_element() {
    let report = run(
        &config(),
        &steps(
            r#"
{"op":"tool","tool":"rectangle"}
{"op":"down","at":{"x":10,"y":10}}
{"op":"move","at":{"x":50,"y":50}}
{"op":"up","at":{"x":50,"y":50}}
"#,
        ),
    );
    assert_eq!(report.steps, 4);
    assert_eq!(report.elements, vec![(ElementKind::Rectangle, 1)]);
    assert_eq!(report.strokes_last_frame, 1);
    assert_eq!(report.gesture, "idle");
    assert_eq!(report.cursor.as_deref(), Some("crosshair"));
    assert_eq!(report.readout.as_deref(), Some("X: 50, Y: 50 | Scale: 1.00"));
}

#[test]
fn initial_resize_paints_one_empty_frame() {
    let report = run(&config(), &[]);
    assert_eq!(report.frames, 1);
    assert_eq!(report.strokes_last_frame, 0);
    assert_eq!(report.element_count(), 0);
    assert_eq!(report.camera, Camera::default());
}

#[test]
fn pinch_doubles_scale_around_midpoint() {
    let report = run(
        &config(),
        &steps(
            r#"
{"op":"down","touches":[{"x":250,"y":300},{"x":350,"y":300}]}
{"op":"move","touches":[{"x":200,"y":300},{"x":400,"y":300}]}
"#,
        ),
    );
    assert!((report.camera.scale - 2.0).abs() < 1e-9);
    assert!((report.camera.pan_x + 150.0).abs() < 1e-9);
    assert!((report.camera.pan_y + 150.0).abs() < 1e-9);
    assert_eq!(report.gesture, "pinching");
    assert_eq!(report.element_count(), 0);
}

#[test]
fn degenerate_shape_is_not_counted() {
    let report = run(
        &config(),
        &steps(
            r#"
{"op":"tool","tool":"circle"}
{"op":"down","at":{"x":10,"y":10}}
{"op":"up","at":{"x":10,"y":10}}
{"op":"tool","tool":"freehand"}
{"op":"down","at":{"x":10,"y":10}}
{"op":"move","at":{"x":20,"y":10}}
{"op":"leave"}
"#,
        ),
    );
    assert_eq!(report.elements, vec![(ElementKind::Freehand, 1)]);
}

#[test]
fn controls_show_up_in_report() {
    let report = run(
        &config(),
        &steps(
            r#"
{"op":"theme","theme":"retro"}
{"op":"fullscreen"}
{"op":"zoom_in"}
"#,
        ),
    );
    assert_eq!(report.theme, Theme::Retro);
    assert!(report.fullscreen);
    assert!((report.camera.scale - 1.2).abs() < 1e-9);

    let text = report.to_string();
    assert!(text.contains("theme:    retro-theme (fullscreen)"), "{text}");
    assert!(text.contains("scale 1.20"), "{text}");
}

#[test]
fn clear_then_reset_view() {
    let report = run(
        &config(),
        &steps(
            r#"
{"op":"tool","tool":"line"}
{"op":"down","at":{"x":0,"y":0}}
{"op":"move","at":{"x":100,"y":0}}
{"op":"up","at":{"x":100,"y":0}}
{"op":"wheel","at":{"x":100,"y":100},"dy":-1}
{"op":"clear"}
{"op":"reset_view"}
"#,
        ),
    );
    assert_eq!(report.element_count(), 0);
    assert_eq!(report.strokes_last_frame, 0);
    assert_eq!(report.camera, Camera::default());
}

#[test]
fn load_reports_missing_file() {
    let path = std::env::temp_dir().join("whiteboard-replay-test-does-not-exist.jsonl");
    let err = load(&path).unwrap_err();
    assert!(matches!(err, ReplayError::Io { .. }));
    assert!(err.to_string().starts_with("failed to read "));
}

#[test]
fn load_reports_bad_script_with_line() {
    let path = std::env::temp_dir().join(format!("whiteboard-replay-test-{}.jsonl", std::process::id()));
    std::fs::write(&path, "{\"op\":\"clear\"}\nnot json\n").unwrap();
    let err = load(&path).unwrap_err();
    std::fs::remove_file(&path).unwrap();
    assert!(matches!(err, ReplayError::Script { source: ScriptError::Parse { line: 2, .. }, .. }));
}
