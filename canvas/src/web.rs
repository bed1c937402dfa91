//! Browser backend: [`Surface`] over a `CanvasRenderingContext2d`.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::render::{Path, StrokeStyle, Surface, Transform};

impl Surface for CanvasRenderingContext2d {
    type Error = JsValue;

    fn clear(&mut self, width_px: f64, height_px: f64) -> Result<(), JsValue> {
        self.reset_transform()?;
        self.clear_rect(0.0, 0.0, width_px, height_px);
        Ok(())
    }

    fn set_transform(&mut self, transform: Transform) -> Result<(), JsValue> {
        CanvasRenderingContext2d::set_transform(
            self,
            transform.scale,
            0.0,
            0.0,
            transform.scale,
            transform.translate_x,
            transform.translate_y,
        )
    }

    fn stroke(&mut self, path: &Path, style: StrokeStyle<'_>) -> Result<(), JsValue> {
        self.set_stroke_style_str(style.color);
        self.set_line_width(style.width);
        self.set_line_cap("round");
        self.set_line_join("round");

        match path {
            Path::Rect { corner, width, height } => {
                self.stroke_rect(corner.x, corner.y, *width, *height);
            }
            Path::Circle { center, radius } => {
                self.begin_path();
                self.arc(center.x, center.y, *radius, 0.0, 2.0 * PI)?;
                CanvasRenderingContext2d::stroke(self);
            }
            Path::Polyline { points, closed } => {
                let Some((first, rest)) = points.split_first() else {
                    return Ok(());
                };
                self.begin_path();
                self.move_to(first.x, first.y);
                for p in rest {
                    self.line_to(p.x, p.y);
                }
                if *closed {
                    self.close_path();
                }
                CanvasRenderingContext2d::stroke(self);
            }
        }
        Ok(())
    }
}
