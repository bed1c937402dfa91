//! Headless replay: feed script steps through [`EngineCore`] and repaint into a
//! counting surface after every step that asks for it.

#[cfg(test)]
#[path = "replay_test.rs"]
mod replay_test;

use std::convert::Infallible;
use std::fmt;
use std::path::{Path, PathBuf};

use canvas::camera::{Camera, Point};
use canvas::doc::ElementKind;
use canvas::engine::{Action, EngineCore};
use canvas::input::Theme;
use canvas::render::{self, Surface, Transform};

use crate::config::Config;
use crate::script::{self, ScriptError, Step};

#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid script {}: {source}", path.display())]
    Script {
        path: PathBuf,
        #[source]
        source: ScriptError,
    },
}

/// Read and parse a script file.
///
/// # Errors
///
/// I/O failures and the first malformed line.
pub fn load(path: &Path) -> Result<Vec<Step>, ReplayError> {
    let text = std::fs::read_to_string(path).map_err(|source| ReplayError::Io { path: path.to_owned(), source })?;
    script::parse(&text).map_err(|source| ReplayError::Script { path: path.to_owned(), source })
}

/// Counts paint calls instead of producing pixels.
#[derive(Debug, Default)]
pub struct FrameCounter {
    pub frames: usize,
    pub strokes_last_frame: usize,
}

impl Surface for FrameCounter {
    type Error = Infallible;

    fn clear(&mut self, _width_px: f64, _height_px: f64) -> Result<(), Infallible> {
        self.frames += 1;
        self.strokes_last_frame = 0;
        Ok(())
    }

    fn set_transform(&mut self, _transform: Transform) -> Result<(), Infallible> {
        Ok(())
    }

    fn stroke(&mut self, _path: &render::Path, _style: render::StrokeStyle<'_>) -> Result<(), Infallible> {
        self.strokes_last_frame += 1;
        Ok(())
    }
}

/// What the engine looked like after the last step.
#[derive(Debug)]
pub struct Report {
    pub steps: usize,
    pub frames: usize,
    pub strokes_last_frame: usize,
    pub elements: Vec<(ElementKind, usize)>,
    pub camera: Camera,
    pub gesture: &'static str,
    pub theme: Theme,
    pub fullscreen: bool,
    pub cursor: Option<String>,
    pub readout: Option<String>,
}

impl Report {
    /// Total committed elements across kinds.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.iter().map(|(_, n)| n).sum()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "steps:    {}", self.steps)?;
        writeln!(f, "frames:   {} ({} strokes in last frame)", self.frames, self.strokes_last_frame)?;
        writeln!(f, "elements: {}", self.element_count())?;
        for (kind, n) in &self.elements {
            writeln!(f, "  {kind:?}: {n}")?;
        }
        writeln!(
            f,
            "view:     scale {:.2}, pan ({:.2}, {:.2})",
            self.camera.scale, self.camera.pan_x, self.camera.pan_y
        )?;
        writeln!(f, "gesture:  {}", self.gesture)?;
        writeln!(f, "theme:    {}{}", self.theme.css_class(), if self.fullscreen { " (fullscreen)" } else { "" })?;
        if let Some(cursor) = &self.cursor {
            writeln!(f, "cursor:   {cursor}")?;
        }
        if let Some(readout) = &self.readout {
            writeln!(f, "readout:  {readout}")?;
        }
        Ok(())
    }
}

const ALL_KINDS: [ElementKind; 6] = [
    ElementKind::Freehand,
    ElementKind::Line,
    ElementKind::Rectangle,
    ElementKind::Circle,
    ElementKind::Triangle,
    ElementKind::Trapezium,
];

/// Run every step against a fresh engine sized from `config`.
#[must_use]
pub fn run(config: &Config, steps: &[Step]) -> Report {
    let mut core = EngineCore::new();
    let mut surface = FrameCounter::default();
    let mut cursor = None;
    let mut readout = None;

    core.set_origin(Point::new(config.origin_x, config.origin_y));
    let initial = core.on_resize(config.width, config.height, config.dpr);
    absorb(&core, &mut surface, initial, &mut cursor, &mut readout);

    for (idx, step) in steps.iter().enumerate() {
        let actions = apply(&mut core, step);
        tracing::trace!(step = idx + 1, ?step, gesture = core.input.name(), actions = actions.len(), "step applied");
        absorb(&core, &mut surface, actions, &mut cursor, &mut readout);
    }

    let elements = ALL_KINDS
        .iter()
        .map(|&kind| (kind, core.scene.all().iter().filter(|e| e.kind == kind).count()))
        .filter(|(_, n)| *n > 0)
        .collect();

    Report {
        steps: steps.len(),
        frames: surface.frames,
        strokes_last_frame: surface.strokes_last_frame,
        elements,
        camera: core.camera(),
        gesture: core.input.name(),
        theme: core.ui.theme,
        fullscreen: core.ui.fullscreen,
        cursor,
        readout,
    }
}

fn apply(core: &mut EngineCore, step: &Step) -> Vec<Action> {
    match step {
        Step::Down(p) => core.on_pointer_down(p),
        Step::Move(p) => core.on_pointer_move(p),
        Step::Up(p) => core.on_pointer_up(p),
        Step::Leave => core.on_pointer_leave(),
        Step::Wheel { at, delta } => core.on_wheel(*at, *delta),
        Step::Resize { width, height, dpr } => core.on_resize(*width, *height, *dpr),
        Step::Origin(at) => {
            core.set_origin(*at);
            Vec::new()
        }
        Step::Tool(tool) => core.set_tool(*tool),
        Step::Color(color) => {
            core.set_color(color.clone());
            Vec::new()
        }
        Step::Brush(size) => {
            core.set_brush_size(*size);
            Vec::new()
        }
        Step::Theme(theme) => core.set_theme(*theme),
        Step::Fullscreen => core.toggle_fullscreen(),
        Step::Clear => core.clear_scene(),
        Step::ResetView => core.reset_view(),
        Step::ZoomIn => core.zoom_in(),
        Step::ZoomOut => core.zoom_out(),
    }
}

/// Play host: repaint synchronously and remember the latest cursor/readout.
fn absorb(
    core: &EngineCore,
    surface: &mut FrameCounter,
    actions: Vec<Action>,
    cursor: &mut Option<String>,
    readout: &mut Option<String>,
) {
    for action in actions {
        match action {
            Action::RenderNeeded => {
                let Ok(()) = core.render(surface);
            }
            Action::SetCursor(c) => *cursor = Some(c),
            Action::Readout(r) => {
                tracing::debug!(readout = %r, "coordinates");
                *readout = Some(r);
            }
            Action::ThemeChanged(theme) => tracing::info!(class = theme.css_class(), "theme changed"),
            Action::FullscreenChanged(on) => tracing::info!(fullscreen = on, "fullscreen toggled"),
        }
    }
}
