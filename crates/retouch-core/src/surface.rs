//! The drawing capability the editor renders through.
//!
//! Implemented over a canvas 2D context by the wasm crate; tests use a
//! recording fake. All coordinates are viewport px.

use crate::color::Rgb;
use crate::geometry::{Point, Rect, Size};
use crate::raster::RasterImage;

/// A 2D drawing target.
pub trait Surface {
    /// Current size of the drawable area.
    fn size(&self) -> Size;

    /// Make `rect` fully transparent.
    fn clear(&mut self, rect: Rect);

    fn fill_rect(&mut self, rect: Rect, color: Rgb);

    /// Blit the whole image into `dst`, scaling without smoothing.
    fn draw_image(&mut self, image: &RasterImage, dst: Rect);

    fn begin_path(&mut self);

    fn move_to(&mut self, p: Point);

    fn line_to(&mut self, p: Point);

    /// Stroke the current path.
    fn stroke(&mut self, width: f64, color: Rgb);
}
