//! Screen/world geometry and the pan/zoom view transform.
//!
//! Screen space is raw client pixels as reported by the host. The canvas sits
//! at `origin` inside that space. World space is where elements live and is
//! invariant under pan and zoom. The single mapping between the two is
//!
//! ```text
//! world = (screen - origin - pan * scale) / scale
//! ```
//!
//! so `pan` is accumulated in world units and the renderer's transform is
//! `translate(pan * scale)` followed by `scale(scale)`.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_SCALE, MIN_SCALE};

/// A point in either screen or world space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Euclidean distance between two screen points. Only used for pinch ratios.
#[must_use]
pub fn distance(a: Point, b: Point) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Arithmetic mean of two screen points; the pinch zoom anchor.
#[must_use]
pub fn midpoint(a: Point, b: Point) -> Point {
    Point { x: (a.x + b.x) / 2.0, y: (a.y + b.y) / 2.0 }
}

/// View state for pan/zoom.
///
/// `pan_x` / `pan_y` are in world units.
/// `scale` is a zoom factor kept within [`MIN_SCALE`, `MAX_SCALE`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub scale: f64,
    pub pan_x: f64,
    pub pan_y: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { scale: 1.0, pan_x: 0.0, pan_y: 0.0 }
    }
}

impl Camera {
    /// Convert a screen-space point to world coordinates.
    ///
    /// `origin` is the canvas's top-left corner in screen space.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point, origin: Point) -> Point {
        Point {
            x: (screen.x - origin.x - self.pan_x * self.scale) / self.scale,
            y: (screen.y - origin.y - self.pan_y * self.scale) / self.scale,
        }
    }

    /// Convert a world-space point to screen coordinates.
    #[must_use]
    pub fn world_to_screen(&self, world: Point, origin: Point) -> Point {
        Point {
            x: (world.x + self.pan_x) * self.scale + origin.x,
            y: (world.y + self.pan_y) * self.scale + origin.y,
        }
    }

    /// Multiply the scale by `multiplier`, keeping the world point under
    /// `anchor` fixed on screen.
    ///
    /// The resulting scale is clamped to [`MIN_SCALE`, `MAX_SCALE`], so zero
    /// and infinite multipliers land on the limits. Returns `false` without
    /// touching the view when `multiplier` is NaN or negative.
    pub fn apply_zoom(&mut self, anchor: Point, origin: Point, multiplier: f64) -> bool {
        if multiplier.is_nan() || multiplier < 0.0 {
            return false;
        }
        let world = self.screen_to_world(anchor, origin);
        self.scale = (self.scale * multiplier).clamp(MIN_SCALE, MAX_SCALE);
        self.pan_x = (anchor.x - origin.x) / self.scale - world.x;
        self.pan_y = (anchor.y - origin.y) / self.scale - world.y;
        true
    }

    /// Pan by a screen-space delta. The delta is accumulated in world units so
    /// panning never changes the apparent scale.
    pub fn pan(&mut self, delta: Point) {
        self.pan_x += delta.x / self.scale;
        self.pan_y += delta.y / self.scale;
    }

    /// Back to identity: scale 1, no pan.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
