//! Shared numeric constants for the canvas crate.

// ── Zoom ────────────────────────────────────────────────────────

/// Smallest allowed view scale.
pub const MIN_SCALE: f64 = 0.1;

/// Largest allowed view scale.
pub const MAX_SCALE: f64 = 20.0;

/// Wheel multiplier when scrolling down (zoom out).
pub const WHEEL_ZOOM_OUT: f64 = 0.9;

/// Wheel multiplier when scrolling up (zoom in).
pub const WHEEL_ZOOM_IN: f64 = 1.1;

/// Multiplier for the discrete zoom-in control.
pub const BUTTON_ZOOM_IN: f64 = 1.2;

/// Multiplier for the discrete zoom-out control.
pub const BUTTON_ZOOM_OUT: f64 = 0.8;

/// Pinch baselines shorter than this (screen pixels) produce no zoom.
pub const PINCH_EPSILON_PX: f64 = 1e-6;

// ── Shapes ──────────────────────────────────────────────────────

/// Fraction of the bounding width the trapezium's top edge is inset on each side.
pub const TRAPEZIUM_INSET: f64 = 0.2;

// ── Defaults ────────────────────────────────────────────────────

/// Stroke color for new elements before the user picks one.
pub const DEFAULT_COLOR: &str = "#ffffff";

/// Stroke width for new elements before the user picks one.
pub const DEFAULT_BRUSH_SIZE: f64 = 5.0;
