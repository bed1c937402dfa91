//! Gesture scripts: one JSON object per line describing a host event or control.
//!
//! ```text
//! {"op":"tool","tool":"rectangle"}
//! {"op":"down","at":{"x":10,"y":10}}
//! {"op":"move","at":{"x":50,"y":50}}
//! {"op":"up","at":{"x":50,"y":50}}
//! {"op":"down","touches":[{"x":250,"y":300},{"x":350,"y":300}]}
//! ```
//!
//! Blank lines and lines starting with `#` are skipped.

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;

use canvas::camera::Point;
use canvas::input::{Pointer, Theme, Tool, WheelDelta};
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("line {line}: pointer step needs `at` or `touches`")]
    MissingPointer { line: usize },
}

/// One replayable step.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Down(Pointer),
    Move(Pointer),
    Up(Pointer),
    Leave,
    Wheel { at: Point, delta: WheelDelta },
    Resize { width: f64, height: f64, dpr: f64 },
    Origin(Point),
    Tool(Tool),
    Color(String),
    Brush(f64),
    Theme(Theme),
    Fullscreen,
    Clear,
    ResetView,
    ZoomIn,
    ZoomOut,
}

#[derive(Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
enum RawStep {
    Down {
        at: Option<Point>,
        touches: Option<Vec<Point>>,
    },
    Move {
        at: Option<Point>,
        touches: Option<Vec<Point>>,
    },
    Up {
        at: Option<Point>,
        touches: Option<Vec<Point>>,
    },
    Leave,
    Wheel {
        at: Point,
        #[serde(default)]
        dx: f64,
        dy: f64,
    },
    Resize {
        width: f64,
        height: f64,
        #[serde(default = "default_dpr")]
        dpr: f64,
    },
    Origin {
        at: Point,
    },
    Tool {
        tool: Tool,
    },
    Color {
        color: String,
    },
    Brush {
        size: f64,
    },
    Theme {
        theme: Theme,
    },
    Fullscreen,
    Clear,
    ResetView,
    ZoomIn,
    ZoomOut,
}

fn default_dpr() -> f64 {
    1.0
}

/// Touches win over `at` when both are given.
fn pointer(at: Option<Point>, touches: Option<Vec<Point>>) -> Option<Pointer> {
    match (at, touches) {
        (_, Some(touches)) => Some(Pointer::Touch(touches)),
        (Some(at), None) => Some(Pointer::Mouse(at)),
        (None, None) => None,
    }
}

impl RawStep {
    fn into_step(self) -> Option<Step> {
        let step = match self {
            Self::Down { at, touches } => Step::Down(pointer(at, touches)?),
            Self::Move { at, touches } => Step::Move(pointer(at, touches)?),
            Self::Up { at, touches } => Step::Up(pointer(at, touches)?),
            Self::Leave => Step::Leave,
            Self::Wheel { at, dx, dy } => Step::Wheel { at, delta: WheelDelta { dx, dy } },
            Self::Resize { width, height, dpr } => Step::Resize { width, height, dpr },
            Self::Origin { at } => Step::Origin(at),
            Self::Tool { tool } => Step::Tool(tool),
            Self::Color { color } => Step::Color(color),
            Self::Brush { size } => Step::Brush(size),
            Self::Theme { theme } => Step::Theme(theme),
            Self::Fullscreen => Step::Fullscreen,
            Self::Clear => Step::Clear,
            Self::ResetView => Step::ResetView,
            Self::ZoomIn => Step::ZoomIn,
            Self::ZoomOut => Step::ZoomOut,
        };
        Some(step)
    }
}

/// Parse a whole script. Line numbers in errors are 1-based.
///
/// # Errors
///
/// Fails on the first line that is not a valid step.
pub fn parse(text: &str) -> Result<Vec<Step>, ScriptError> {
    let mut steps = Vec::new();
    for (idx, raw_line) in text.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw_line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let raw: RawStep = serde_json::from_str(trimmed).map_err(|source| ScriptError::Parse { line, source })?;
        let step = raw.into_step().ok_or(ScriptError::MissingPointer { line })?;
        steps.push(step);
    }
    Ok(steps)
}
