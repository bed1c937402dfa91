//! Input model: tools, themes, pointer events, and the gesture state machine.
//!
//! `Tool` and the rest of `UiState` capture the user's choices at the time a
//! gesture starts. `Pointer` is the host-independent shape of a mouse or touch
//! event. `InputState` is the one active gesture between gesture start and
//! gesture end, carrying exactly the context that gesture needs.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::camera::Point;
use crate::consts::{DEFAULT_BRUSH_SIZE, DEFAULT_COLOR};
use crate::doc::{Element, ElementKind};

/// Which tool is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Drag the view around.
    Pan,
    /// Freehand pen (default).
    #[default]
    Freehand,
    /// Draw a straight line.
    Line,
    /// Draw a rectangle.
    Rectangle,
    /// Draw a circle from its center.
    Circle,
    /// Draw an isosceles triangle.
    Triangle,
    /// Draw a trapezium.
    Trapezium,
}

impl Tool {
    /// The element this tool draws, or `None` for [`Tool::Pan`].
    #[must_use]
    pub fn element_kind(self) -> Option<ElementKind> {
        match self {
            Self::Pan => None,
            Self::Freehand => Some(ElementKind::Freehand),
            Self::Line => Some(ElementKind::Line),
            Self::Rectangle => Some(ElementKind::Rectangle),
            Self::Circle => Some(ElementKind::Circle),
            Self::Triangle => Some(ElementKind::Triangle),
            Self::Trapezium => Some(ElementKind::Trapezium),
        }
    }

    /// CSS cursor shown over the canvas while this tool is idle.
    #[must_use]
    pub fn cursor(self) -> &'static str {
        match self {
            Self::Pan => "grab",
            _ => "crosshair",
        }
    }
}

/// Color scheme of the surrounding UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
    Cosmic,
    Retro,
    Maximalist,
}

impl Theme {
    /// Class the host puts on the document body for this theme.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Dark => "dark-theme",
            Self::Light => "light-theme",
            Self::Cosmic => "cosmic-theme",
            Self::Retro => "retro-theme",
            Self::Maximalist => "maximalist-theme",
        }
    }
}

/// A pointer event as delivered by the host, in screen coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Pointer {
    /// Mouse (or pen) at a single position.
    Mouse(Point),
    /// Touch contacts currently on the surface. On gesture end this is the
    /// set that remains, possibly empty.
    Touch(Vec<Point>),
}

impl Pointer {
    /// The position used for single-pointer gestures: the mouse, or the first touch.
    #[must_use]
    pub fn primary(&self) -> Option<Point> {
        match self {
            Self::Mouse(p) => Some(*p),
            Self::Touch(touches) => touches.first().copied(),
        }
    }

    /// The first two touches, if at least two contacts are down.
    #[must_use]
    pub fn pinch_pair(&self) -> Option<(Point, Point)> {
        match self {
            Self::Touch(touches) => match touches.as_slice() {
                [a, b, ..] => Some((*a, *b)),
                _ => None,
            },
            Self::Mouse(_) => None,
        }
    }

    /// Number of contacts: 1 for a mouse, the list length for touch.
    #[must_use]
    pub fn contact_count(&self) -> usize {
        match self {
            Self::Mouse(_) => 1,
            Self::Touch(touches) => touches.len(),
        }
    }
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// Tool and styling choices. Only read when the next gesture starts.
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    /// Currently active tool.
    pub tool: Tool,
    /// CSS stroke color for the next element.
    pub color: String,
    /// Stroke width for the next element.
    pub brush_size: f64,
    /// Active UI theme.
    pub theme: Theme,
    /// Whether the host is showing the board fullscreen.
    pub fullscreen: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            tool: Tool::default(),
            color: DEFAULT_COLOR.to_owned(),
            brush_size: DEFAULT_BRUSH_SIZE,
            theme: Theme::default(),
            fullscreen: false,
        }
    }
}

/// Internal state for the gesture state machine.
///
/// Exactly one variant is active; each carries only the context its gesture needs.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum InputState {
    /// No gesture in progress; waiting for the next gesture start.
    #[default]
    Idle,
    /// A drawing tool is laying down a new element.
    Drawing {
        /// The uncommitted element; it joins the scene only on gesture end.
        element: Element,
    },
    /// The user is dragging the view with the pan tool.
    Panning {
        /// Screen-space position of the previous pointer event, used to compute pan delta.
        last_screen: Point,
    },
    /// Two fingers are zooming the view.
    Pinching {
        /// Inter-touch distance at the previous pinch event, in screen pixels.
        last_distance: f64,
    },
}

impl InputState {
    /// The in-progress element, present only while drawing.
    #[must_use]
    pub fn current_element(&self) -> Option<&Element> {
        match self {
            Self::Drawing { element } => Some(element),
            _ => None,
        }
    }

    /// Short name for logging.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Drawing { .. } => "drawing",
            Self::Panning { .. } => "panning",
            Self::Pinching { .. } => "pinching",
        }
    }
}
