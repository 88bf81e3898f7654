//! Color picker.

use crate::color::Rgb;
use crate::geometry::{Point, Rect};
use crate::raster::RasterImage;
use crate::viewport::{to_image_space, ViewportState};

/// Color shown where the viewport is not covered by the image.
pub const BACKDROP: Rgb = Rgb::WHITE;

/// Pipette tool: samples the pixel under the pointer.
#[derive(Debug, Clone)]
pub struct Pipette {
    active: bool,
    sampled: Rgb,
}

impl Default for Pipette {
    fn default() -> Self {
        Self {
            active: false,
            sampled: BACKDROP,
        }
    }
}

impl Pipette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Color displayed at viewport position `pos`.
    ///
    /// Uses the nearest image pixel; outside the image this is the backdrop.
    pub fn sample(pos: Point, state: &ViewportState, image: &RasterImage) -> Rgb {
        let p = to_image_space(pos, state);
        if !Rect::from_size(image.size()).contains(p) {
            return BACKDROP;
        }
        image
            .pixel(p.x.floor() as u32, p.y.floor() as u32)
            .unwrap_or(BACKDROP)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Crosshair color: the inverse of what is under the pointer, so the
    /// crosshair stays visible on any background.
    pub fn crosshair_color(&self) -> Rgb {
        self.sampled.inverted()
    }

    /// Activate and pick the color under the pointer.
    pub fn pointer_down(&mut self, pos: Point, state: &ViewportState, image: &RasterImage) -> Rgb {
        self.active = true;
        self.sampled = Self::sample(pos, state, image);
        self.sampled
    }

    /// Track the pointer. Returns the picked color while active.
    pub fn pointer_move(
        &mut self,
        pos: Point,
        state: &ViewportState,
        image: &RasterImage,
    ) -> Option<Rgb> {
        self.sampled = Self::sample(pos, state, image);
        self.active.then_some(self.sampled)
    }

    pub fn pointer_up(&mut self) {
        self.active = false;
    }
}
