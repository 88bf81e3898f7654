//! Freehand brush painting into the image.

use crate::color::Rgb;
use crate::config::EditorConfig;
use crate::geometry::Point;
use crate::raster::RasterImage;
use crate::viewport::{to_image_space, ViewportState};

/// Draw tool: paints round-capped strokes directly into the image.
#[derive(Debug, Clone)]
pub struct FreehandStroke {
    /// Brush diameter in image px.
    width: f64,
    color: Rgb,
    /// Last painted image-space point while a stroke is in progress.
    last: Option<Point>,
}

impl FreehandStroke {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            width: config.stroke_width,
            color: config.stroke_color,
            last: None,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    /// Set the brush diameter. Non-positive (or NaN) widths are ignored.
    pub fn set_width(&mut self, width: f64) {
        if width.is_nan() || width <= 0.0 {
            return;
        }
        self.width = width;
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    pub fn is_drawing(&self) -> bool {
        self.last.is_some()
    }

    /// Diameter of the brush preview in viewport px.
    pub fn brush_diameter(&self, state: &ViewportState) -> f64 {
        self.width * state.scale()
    }

    /// Start a stroke with a dot under the pointer.
    pub fn pointer_down(&mut self, pos: Point, state: &ViewportState, image: &mut RasterImage) {
        let p = to_image_space(pos, state);
        image.stroke_segment(p, p, self.width, self.color);
        self.last = Some(p);
    }

    /// Extend the stroke to the pointer. Returns `true` if a segment was painted.
    pub fn pointer_move(
        &mut self,
        pos: Point,
        state: &ViewportState,
        image: &mut RasterImage,
    ) -> bool {
        let Some(last) = self.last else {
            return false;
        };
        let p = to_image_space(pos, state);
        image.stroke_segment(last, p, self.width, self.color);
        self.last = Some(p);
        true
    }

    pub fn pointer_up(&mut self) {
        self.last = None;
    }
}
