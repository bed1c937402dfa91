//! Scene model: drawable elements and the ordered scene that owns them.
//!
//! An [`Element`] is built up during a gesture by the input engine and then
//! either committed to the [`Scene`] or discarded. Once appended it is never
//! mutated. The renderer reads the scene via [`Scene::all`], whose order is the
//! paint order (later elements draw over earlier ones).

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};

use crate::camera::Point;

/// The kind of a drawable element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Polyline through every sampled point.
    Freehand,
    /// Straight segment between anchor and endpoint.
    Line,
    /// Axis-aligned rectangle with anchor and endpoint as opposite corners.
    Rectangle,
    /// Circle centered on the anchor, passing through the endpoint.
    Circle,
    /// Isosceles triangle with its apex on the anchor's row.
    Triangle,
    /// Trapezium with a narrower top edge on the anchor's row.
    Trapezium,
}

impl ElementKind {
    /// Whether points accumulate (freehand) rather than anchor + live endpoint.
    #[must_use]
    pub fn is_freehand(self) -> bool {
        matches!(self, Self::Freehand)
    }
}

/// A drawable element with the stroke style it was created with.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// What geometry the points describe.
    pub kind: ElementKind,
    /// CSS stroke color.
    pub color: String,
    /// Stroke width in world units.
    pub width: f64,
    /// Freehand: every sample in temporal order. Shapes: `[anchor, endpoint]`.
    pub points: Vec<Point>,
}

impl Element {
    /// Start a new element at `start`.
    ///
    /// Shapes get a second point equal to the first so the live endpoint
    /// always exists.
    #[must_use]
    pub fn begin(kind: ElementKind, color: impl Into<String>, width: f64, start: Point) -> Self {
        let points = if kind.is_freehand() { vec![start] } else { vec![start, start] };
        Self { kind, color: color.into(), width, points }
    }

    /// Feed the next pointer sample: freehand appends, shapes move the endpoint.
    pub fn extend(&mut self, point: Point) {
        if self.kind.is_freehand() {
            self.points.push(point);
        } else if let Some(end) = self.points.get_mut(1) {
            *end = point;
        }
    }

    /// Whether the element is worth keeping at gesture end.
    ///
    /// Needs at least two points; shapes additionally need the endpoint to
    /// differ from the anchor in at least one coordinate.
    #[must_use]
    pub fn is_committable(&self) -> bool {
        match self.points.as_slice() {
            [] | [_] => false,
            _ if self.kind.is_freehand() => true,
            [a, b, ..] => a != b,
        }
    }
}

/// Reasons an element can be refused by the scene.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SceneError {
    #[error("element has {0} point(s); at least 2 are required")]
    TooFewPoints(usize),
}

/// Ordered, append-only collection of committed elements.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    elements: Vec<Element>,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self { elements: Vec::new() }
    }

    /// Append an element on top of everything else.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::TooFewPoints`] if the element has fewer than two points.
    pub fn append(&mut self, element: Element) -> Result<(), SceneError> {
        if element.points.len() < 2 {
            return Err(SceneError::TooFewPoints(element.points.len()));
        }
        self.elements.push(element);
        Ok(())
    }

    /// Remove every element.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// All elements in paint order.
    #[must_use]
    pub fn all(&self) -> &[Element] {
        &self.elements
    }

    /// Number of committed elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if nothing has been committed since the last clear.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
