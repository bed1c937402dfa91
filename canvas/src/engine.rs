use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::{Camera, Point, distance, midpoint};
use crate::consts::{BUTTON_ZOOM_IN, BUTTON_ZOOM_OUT, PINCH_EPSILON_PX, WHEEL_ZOOM_IN, WHEEL_ZOOM_OUT};
use crate::doc::{Element, Scene};
use crate::input::{InputState, Pointer, Theme, Tool, UiState, WheelDelta};
use crate::render;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Scene, view or in-progress element changed; repaint.
    RenderNeeded,
    /// Change the CSS cursor over the canvas.
    SetCursor(String),
    /// New text for the coordinate readout.
    Readout(String),
    /// Switch the body theme class.
    ThemeChanged(Theme),
    /// Enter (`true`) or leave fullscreen.
    FullscreenChanged(bool),
}

/// Core engine state: all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    pub scene: Scene,
    pub camera: Camera,
    pub ui: UiState,
    pub input: InputState,
    /// Top-left corner of the canvas in screen space.
    pub origin: Point,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub dpr: f64,
    /// Last screen position seen by any pointer handler.
    pub last_pointer: Option<Point>,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self {
            scene: Scene::new(),
            camera: Camera::default(),
            ui: UiState::default(),
            input: InputState::default(),
            origin: Point::default(),
            viewport_width: 0.0,
            viewport_height: 0.0,
            dpr: 1.0,
            last_pointer: None,
        }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Tool / styling ---

    /// Set the active tool. Never touches a gesture already in flight.
    pub fn set_tool(&mut self, tool: Tool) -> Vec<Action> {
        self.ui.tool = tool;
        vec![Action::SetCursor(tool.cursor().to_owned())]
    }

    /// Set the stroke color for the next element.
    pub fn set_color(&mut self, color: impl Into<String>) {
        self.ui.color = color.into();
    }

    /// Set the stroke width for the next element. Non-positive or non-finite sizes are ignored.
    pub fn set_brush_size(&mut self, size: f64) {
        if !size.is_finite() || size <= 0.0 {
            tracing::debug!(size, kept = self.ui.brush_size, "ignoring invalid brush size");
            return;
        }
        self.ui.brush_size = size;
    }

    /// Switch the UI theme.
    pub fn set_theme(&mut self, theme: Theme) -> Vec<Action> {
        self.ui.theme = theme;
        vec![Action::ThemeChanged(theme)]
    }

    /// Flip fullscreen on or off.
    pub fn toggle_fullscreen(&mut self) -> Vec<Action> {
        self.ui.fullscreen = !self.ui.fullscreen;
        vec![Action::FullscreenChanged(self.ui.fullscreen)]
    }

    // --- Scene / view controls ---

    /// Remove every committed element. An in-progress element survives.
    pub fn clear_scene(&mut self) -> Vec<Action> {
        tracing::debug!(removed = self.scene.len(), "scene cleared");
        self.scene.clear();
        vec![Action::RenderNeeded]
    }

    /// Back to scale 1 with no pan.
    pub fn reset_view(&mut self) -> Vec<Action> {
        self.camera.reset();
        let mut actions = vec![Action::RenderNeeded];
        if let Some(p) = self.last_pointer {
            actions.push(Action::Readout(self.readout_at(p)));
        }
        actions
    }

    /// One discrete zoom-in step around the canvas center.
    pub fn zoom_in(&mut self) -> Vec<Action> {
        self.zoom_at(self.viewport_center(), BUTTON_ZOOM_IN)
    }

    /// One discrete zoom-out step around the canvas center.
    pub fn zoom_out(&mut self) -> Vec<Action> {
        self.zoom_at(self.viewport_center(), BUTTON_ZOOM_OUT)
    }

    // --- Viewport ---

    /// Record the canvas's top-left corner in screen space.
    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    /// Update viewport dimensions and device pixel ratio. Always asks for a repaint.
    pub fn on_resize(&mut self, width_css: f64, height_css: f64, dpr: f64) -> Vec<Action> {
        self.viewport_width = width_css;
        self.viewport_height = height_css;
        if dpr.is_finite() && dpr > 0.0 {
            self.dpr = dpr;
        }
        vec![Action::RenderNeeded]
    }

    // --- Input events ---

    /// Gesture start.
    pub fn on_pointer_down(&mut self, pointer: &Pointer) -> Vec<Action> {
        // Two fingers always win over whatever else is going on.
        if let Some((a, b)) = pointer.pinch_pair() {
            let mut actions = Vec::new();
            match &self.input {
                InputState::Idle | InputState::Pinching { .. } => {}
                InputState::Drawing { .. } => actions.push(Action::RenderNeeded),
                InputState::Panning { .. } => actions.push(Action::SetCursor(self.ui.tool.cursor().to_owned())),
            }
            if !matches!(self.input, InputState::Idle) {
                tracing::debug!(from = self.input.name(), "gesture abandoned for pinch");
            }
            self.input = InputState::Pinching { last_distance: distance(a, b) };
            tracing::debug!(contacts = pointer.contact_count(), "pinch started");
            return actions;
        }

        let Some(screen) = pointer.primary() else {
            return Vec::new();
        };
        self.last_pointer = Some(screen);

        if !matches!(self.input, InputState::Idle) {
            tracing::debug!(from = self.input.name(), "gesture abandoned for new gesture");
        }

        let Some(kind) = self.ui.tool.element_kind() else {
            self.input = InputState::Panning { last_screen: screen };
            return vec![Action::SetCursor("grabbing".to_owned())];
        };

        let start = self.camera.screen_to_world(screen, self.origin);
        let element = Element::begin(kind, self.ui.color.clone(), self.ui.brush_size, start);
        tracing::debug!(?kind, x = start.x, y = start.y, "drawing started");
        self.input = InputState::Drawing { element };
        vec![Action::RenderNeeded]
    }

    /// Pointer or touch movement.
    ///
    /// A pinch that drops to one contact stays `Pinching` until the next
    /// gesture end; the lone contact only updates the readout.
    pub fn on_pointer_move(&mut self, pointer: &Pointer) -> Vec<Action> {
        if let InputState::Pinching { last_distance } = self.input {
            if let Some((a, b)) = pointer.pinch_pair() {
                return self.pinch_move(last_distance, a, b);
            }
        }

        let Some(screen) = pointer.primary() else {
            return Vec::new();
        };
        self.last_pointer = Some(screen);

        let mut actions = Vec::new();
        match &mut self.input {
            InputState::Panning { last_screen } => {
                let delta = Point::new(screen.x - last_screen.x, screen.y - last_screen.y);
                *last_screen = screen;
                self.camera.pan(delta);
                actions.push(Action::RenderNeeded);
            }
            InputState::Drawing { element } => {
                element.extend(self.camera.screen_to_world(screen, self.origin));
                actions.push(Action::RenderNeeded);
            }
            InputState::Idle | InputState::Pinching { .. } => {}
        }
        actions.push(Action::Readout(self.readout_at(screen)));
        actions
    }

    /// Gesture end. For touch, `pointer` lists the contacts still down.
    pub fn on_pointer_up(&mut self, pointer: &Pointer) -> Vec<Action> {
        if let Pointer::Mouse(p) = pointer {
            self.last_pointer = Some(*p);
        }

        match std::mem::take(&mut self.input) {
            InputState::Idle => Vec::new(),
            InputState::Drawing { element } => self.finish_drawing(element),
            InputState::Panning { .. } => vec![Action::SetCursor(self.ui.tool.cursor().to_owned())],
            InputState::Pinching { last_distance } => {
                if pointer.contact_count() >= 2 {
                    self.input = InputState::Pinching { last_distance };
                } else {
                    tracing::debug!("pinch ended");
                }
                Vec::new()
            }
        }
    }

    /// Pointer left the canvas or the touch was cancelled; same as gesture end.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.on_pointer_up(&Pointer::Touch(Vec::new()))
    }

    /// Wheel zoom around the cursor. Leaves any gesture untouched.
    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta) -> Vec<Action> {
        self.last_pointer = Some(screen_pt);
        let multiplier = if delta.dy > 0.0 { WHEEL_ZOOM_OUT } else { WHEEL_ZOOM_IN };
        self.zoom_at(screen_pt, multiplier)
    }

    // --- Queries ---

    /// The uncommitted element of the current drawing gesture, if any.
    #[must_use]
    pub fn current_element(&self) -> Option<&Element> {
        self.input.current_element()
    }

    /// The current camera state.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    /// Readout text for the world point under `screen`:
    /// `X: <int>, Y: <int> | Scale: <2 decimals>`.
    #[must_use]
    pub fn readout_at(&self, screen: Point) -> String {
        let world = self.camera.screen_to_world(screen, self.origin);
        format!(
            "X: {:.0}, Y: {:.0} | Scale: {:.2}",
            round_half_up(world.x),
            round_half_up(world.y),
            self.camera.scale
        )
    }

    /// Paint the scene and any in-progress element onto `surface`.
    ///
    /// # Errors
    ///
    /// Propagates the first surface failure.
    pub fn render<S: render::Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        render::draw(
            surface,
            &self.scene,
            self.current_element(),
            &self.camera,
            self.viewport_width,
            self.viewport_height,
            self.dpr,
        )
    }

    // --- Internals ---

    fn viewport_center(&self) -> Point {
        Point::new(
            self.origin.x + self.viewport_width * 0.5,
            self.origin.y + self.viewport_height * 0.5,
        )
    }

    fn zoom_at(&mut self, anchor: Point, multiplier: f64) -> Vec<Action> {
        if !self.camera.apply_zoom(anchor, self.origin, multiplier) {
            return Vec::new();
        }
        vec![Action::RenderNeeded, Action::Readout(self.readout_at(anchor))]
    }

    fn pinch_move(&mut self, last_distance: f64, a: Point, b: Point) -> Vec<Action> {
        let new_distance = distance(a, b);
        // Each step is relative to the previous one.
        self.input = InputState::Pinching { last_distance: new_distance };
        if last_distance < PINCH_EPSILON_PX {
            tracing::debug!(last_distance, "degenerate pinch baseline; skipping zoom");
            return Vec::new();
        }
        self.zoom_at(midpoint(a, b), new_distance / last_distance)
    }

    fn finish_drawing(&mut self, element: Element) -> Vec<Action> {
        if !element.is_committable() {
            tracing::debug!(kind = ?element.kind, points = element.points.len(), "discarding degenerate element");
            return vec![Action::RenderNeeded];
        }
        let kind = element.kind;
        match self.scene.append(element) {
            Ok(()) => tracing::debug!(?kind, total = self.scene.len(), "element committed"),
            Err(e) => tracing::debug!(?kind, error = %e, "element rejected by scene"),
        }
        vec![Action::RenderNeeded]
    }
}

/// Round to the nearest integer with halves going up, normalising `-0`.
fn round_half_up(v: f64) -> f64 {
    let f = v.floor();
    (if v - f >= 0.5 { f + 1.0 } else { f }) + 0.0
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas element.
///
/// Every handler repaints synchronously before returning when the scene or
/// view changed, then hands the remaining actions to the host.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas, core: EngineCore::new() }
    }

    // --- Delegated controls ---

    pub fn set_tool(&mut self, tool: Tool) -> Vec<Action> {
        self.core.set_tool(tool)
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.core.set_color(color);
    }

    pub fn set_brush_size(&mut self, size: f64) {
        self.core.set_brush_size(size);
    }

    pub fn set_theme(&mut self, theme: Theme) -> Vec<Action> {
        self.core.set_theme(theme)
    }

    pub fn toggle_fullscreen(&mut self) -> Vec<Action> {
        self.core.toggle_fullscreen()
    }

    pub fn clear_scene(&mut self) -> Vec<Action> {
        let actions = self.core.clear_scene();
        self.after(actions)
    }

    pub fn reset_view(&mut self) -> Vec<Action> {
        let actions = self.core.reset_view();
        self.after(actions)
    }

    pub fn zoom_in(&mut self) -> Vec<Action> {
        let actions = self.core.zoom_in();
        self.after(actions)
    }

    pub fn zoom_out(&mut self) -> Vec<Action> {
        let actions = self.core.zoom_out();
        self.after(actions)
    }

    // --- Viewport ---

    pub fn set_origin(&mut self, origin: Point) {
        self.core.set_origin(origin);
    }

    /// Resize the backing store to match the CSS size at `dpr`, then repaint.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn on_resize(&mut self, width_css: f64, height_css: f64, dpr: f64) -> Vec<Action> {
        let actions = self.core.on_resize(width_css, height_css, dpr);
        self.canvas.set_width((width_css * self.core.dpr).round().max(0.0) as u32);
        self.canvas.set_height((height_css * self.core.dpr).round().max(0.0) as u32);
        self.after(actions)
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, pointer: &Pointer) -> Vec<Action> {
        let actions = self.core.on_pointer_down(pointer);
        self.after(actions)
    }

    pub fn on_pointer_move(&mut self, pointer: &Pointer) -> Vec<Action> {
        let actions = self.core.on_pointer_move(pointer);
        self.after(actions)
    }

    pub fn on_pointer_up(&mut self, pointer: &Pointer) -> Vec<Action> {
        let actions = self.core.on_pointer_up(pointer);
        self.after(actions)
    }

    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        let actions = self.core.on_pointer_leave();
        self.after(actions)
    }

    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta) -> Vec<Action> {
        let actions = self.core.on_wheel(screen_pt, delta);
        self.after(actions)
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or any `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let mut ctx = self.context()?;
        self.core.render(&mut ctx)
    }

    fn context(&self) -> Result<CanvasRenderingContext2d, JsValue> {
        self.canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)
    }

    /// Repaint now if any action asked for it; render failures are logged, never raised.
    fn after(&self, actions: Vec<Action>) -> Vec<Action> {
        if actions.contains(&Action::RenderNeeded) {
            if let Err(e) = self.render() {
                tracing::warn!(error = ?e, "canvas render failed");
            }
        }
        actions
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.core.camera()
    }

    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.core.scene
    }
}
