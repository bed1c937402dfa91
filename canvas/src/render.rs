//! Rendering: repaints the full scene through a [`Surface`].
//!
//! The renderer receives read-only views of the scene, the in-progress element
//! and the camera, and produces paint calls. It does not mutate any engine
//! state. Shape geometry is resolved here into a [`Path`] so every backend
//! strokes exactly the same outlines.
//!
//! All fallible surface calls propagate errors via `Result<(), S::Error>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::camera::{Camera, Point, distance};
use crate::consts::TRAPEZIUM_INSET;
use crate::doc::{Element, ElementKind, Scene};

/// Uniform scale followed by a translation, in device pixels.
///
/// Maps world `p` to device `p * scale + (translate_x, translate_y)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl Transform {
    /// World→device transform for `camera` on a surface with pixel ratio `dpr`.
    #[must_use]
    pub fn for_view(camera: &Camera, dpr: f64) -> Self {
        Self {
            scale: dpr * camera.scale,
            translate_x: dpr * camera.pan_x * camera.scale,
            translate_y: dpr * camera.pan_y * camera.scale,
        }
    }
}

/// Stroke settings recorded on an element. Caps and joins are always round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle<'a> {
    pub color: &'a str,
    pub width: f64,
}

/// A stroked outline in world coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Path {
    /// Connected segments; `closed` joins the last point back to the first.
    Polyline { points: Vec<Point>, closed: bool },
    /// Rectangle from `corner` spanning a signed `width` and `height`.
    Rect { corner: Point, width: f64, height: f64 },
    /// Full circle.
    Circle { center: Point, radius: f64 },
}

/// A 2D paint target.
///
/// Implemented by the browser context in [`crate::web`] and by any host that
/// wants to drive the engine headless.
pub trait Surface {
    type Error;

    /// Clear `width_px` × `height_px` device pixels regardless of the current transform.
    ///
    /// # Errors
    ///
    /// Backend-specific failure.
    fn clear(&mut self, width_px: f64, height_px: f64) -> Result<(), Self::Error>;

    /// Replace the current transform.
    ///
    /// # Errors
    ///
    /// Backend-specific failure.
    fn set_transform(&mut self, transform: Transform) -> Result<(), Self::Error>;

    /// Stroke `path` with `style` under the current transform.
    ///
    /// # Errors
    ///
    /// Backend-specific failure.
    fn stroke(&mut self, path: &Path, style: StrokeStyle<'_>) -> Result<(), Self::Error>;
}

/// Draw the full scene, then the in-progress element on top.
///
/// `viewport_w` and `viewport_h` are in CSS pixels. `dpr` is the device pixel ratio.
///
/// # Errors
///
/// Returns the first error reported by `surface`.
pub fn draw<S: Surface>(
    surface: &mut S,
    scene: &Scene,
    in_progress: Option<&Element>,
    camera: &Camera,
    viewport_w: f64,
    viewport_h: f64,
    dpr: f64,
) -> Result<(), S::Error> {
    // Layer 1: clear in device pixels, then world transform.
    surface.clear(viewport_w * dpr, viewport_h * dpr)?;
    surface.set_transform(Transform::for_view(camera, dpr))?;

    // Layer 2: committed elements in paint order.
    for element in scene.all() {
        draw_element(surface, element)?;
    }

    // Layer 3: the gesture being drawn right now.
    if let Some(element) = in_progress {
        draw_element(surface, element)?;
    }

    Ok(())
}

fn draw_element<S: Surface>(surface: &mut S, element: &Element) -> Result<(), S::Error> {
    let Some(path) = element_path(element) else {
        return Ok(());
    };
    surface.stroke(&path, StrokeStyle { color: &element.color, width: element.width })
}

// =============================================================
// Shape geometry
// =============================================================

/// Resolve an element's points into the outline to stroke.
///
/// Returns `None` when there is nothing to draw (fewer than two points).
#[must_use]
pub fn element_path(element: &Element) -> Option<Path> {
    if element.kind == ElementKind::Freehand {
        return (element.points.len() >= 2).then(|| Path::Polyline { points: element.points.clone(), closed: false });
    }

    let (&a, &b) = match element.points.as_slice() {
        [a, b, ..] => (a, b),
        _ => return None,
    };

    let path = match element.kind {
        ElementKind::Rectangle => Path::Rect { corner: a, width: b.x - a.x, height: b.y - a.y },
        ElementKind::Circle => Path::Circle { center: a, radius: distance(a, b) },
        ElementKind::Line => Path::Polyline { points: vec![a, b], closed: false },
        ElementKind::Triangle => Path::Polyline {
            points: vec![Point::new((a.x + b.x) / 2.0, a.y), Point::new(a.x, b.y), Point::new(b.x, b.y)],
            closed: true,
        },
        ElementKind::Trapezium => {
            // Inset follows the drag direction, so a leftward drag still narrows the top.
            let inset = (b.x - a.x) * TRAPEZIUM_INSET;
            Path::Polyline {
                points: vec![
                    Point::new(a.x + inset, a.y),
                    Point::new(b.x - inset, a.y),
                    Point::new(b.x, b.y),
                    Point::new(a.x, b.y),
                ],
                closed: true,
            }
        }
        ElementKind::Freehand => Path::Polyline { points: element.points.clone(), closed: false },
    };
    Some(path)
}
