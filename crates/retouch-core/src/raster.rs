//! The in-memory image being edited.
//!
//! Pixels are kept as RGBA8 in row-major order (4 bytes per pixel) so a
//! canvas surface can upload them as `ImageData` without conversion.

use std::sync::atomic::{AtomicU64, Ordering};

use image::{Rgba, RgbaImage};

use crate::color::Rgb;
use crate::geometry::{Point, Rect, Size};

/// Source of revision numbers, shared by every image so that no two
/// pixel states ever carry the same revision.
static NEXT_REVISION: AtomicU64 = AtomicU64::new(1);

fn next_revision() -> u64 {
    NEXT_REVISION.fetch_add(1, Ordering::Relaxed)
}

/// An editable RGBA image.
#[derive(Debug, Clone)]
pub struct RasterImage {
    buffer: RgbaImage,
    revision: u64,
}

impl RasterImage {
    /// Create an opaque image filled with `color`.
    pub fn filled(width: u32, height: u32, color: Rgb) -> Self {
        let buffer = RgbaImage::from_pixel(width, height, Rgba([color.r, color.g, color.b, 255]));
        Self::from_rgba_image(buffer)
    }

    /// Wrap raw RGBA8 pixels. Returns `None` when the buffer length does not
    /// match `width * height * 4`.
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        RgbaImage::from_raw(width, height, pixels).map(Self::from_rgba_image)
    }

    pub fn from_rgba_image(buffer: RgbaImage) -> Self {
        Self {
            buffer,
            revision: next_revision(),
        }
    }

    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    /// Dimensions as floating-point image-space size.
    pub fn size(&self) -> Size {
        Size::new(self.width() as f64, self.height() as f64)
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Raw RGBA8 bytes, row-major.
    pub fn pixels(&self) -> &[u8] {
        self.buffer.as_raw()
    }

    pub fn as_rgba_image(&self) -> &RgbaImage {
        &self.buffer
    }

    /// Identifies the current pixel contents.
    ///
    /// Changes on every mutation and is unique across images, so surfaces
    /// can compare it against the value they last uploaded to decide
    /// whether cached pixels are stale.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Color of the pixel at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let Rgba([r, g, b, _]) = *self.buffer.get_pixel(x, y);
        Some(Rgb::new(r, g, b))
    }

    /// Copy out the pixels under an image-space rectangle.
    ///
    /// The rectangle is rounded to whole pixels and clamped to the image.
    /// Returns `None` if either dimension is below one pixel, before or
    /// after rounding.
    pub fn crop_region(&self, rect: Rect) -> Option<RasterImage> {
        if !(rect.size.width >= 1.0 && rect.size.height >= 1.0) {
            return None;
        }

        let w = self.width() as f64;
        let h = self.height() as f64;
        let left = rect.origin.x.round().clamp(0.0, w);
        let top = rect.origin.y.round().clamp(0.0, h);
        let right = rect.max_x().round().clamp(0.0, w);
        let bottom = rect.max_y().round().clamp(0.0, h);

        if right - left < 1.0 || bottom - top < 1.0 {
            return None;
        }

        let buffer = image::imageops::crop_imm(
            &self.buffer,
            left as u32,
            top as u32,
            (right - left) as u32,
            (bottom - top) as u32,
        )
        .to_image();

        Some(Self::from_rgba_image(buffer))
    }

    /// Paint a round-capped line of `width` image px from `from` to `to`.
    ///
    /// Every pixel whose center lies within `width / 2` of the segment is
    /// set to `color` (opaque), which is the union of discs swept along it.
    /// A zero-length segment paints a single dot. The pixel containing
    /// `from` is always painted, so hairline widths still leave a mark.
    /// Returns `true` if any pixel was inside the image.
    pub fn stroke_segment(&mut self, from: Point, to: Point, width: f64, color: Rgb) -> bool {
        let radius = (width / 2.0).max(0.0);
        let (img_w, img_h) = (self.width() as f64, self.height() as f64);

        let min_x = (from.x.min(to.x) - radius).floor().max(0.0);
        let min_y = (from.y.min(to.y) - radius).floor().max(0.0);
        let max_x = (from.x.max(to.x) + radius).ceil().min(img_w);
        let max_y = (from.y.max(to.y) + radius).ceil().min(img_h);

        let seg = to - from;
        let len_sq = seg.x * seg.x + seg.y * seg.y;
        let radius_sq = radius * radius;
        let pixel = Rgba([color.r, color.g, color.b, 255]);
        let mut painted = false;

        let (x0, y0, x1, y1) = (min_x as u32, min_y as u32, max_x as u32, max_y as u32);
        for y in y0..y1 {
            for x in x0..x1 {
                let center = Point::new(x as f64 + 0.5, y as f64 + 0.5);
                if distance_sq_to_segment(center, from, seg, len_sq) <= radius_sq {
                    self.buffer.put_pixel(x, y, pixel);
                    painted = true;
                }
            }
        }

        let (fx, fy) = (from.x.floor(), from.y.floor());
        if fx >= 0.0 && fy >= 0.0 && fx < img_w && fy < img_h {
            self.buffer.put_pixel(fx as u32, fy as u32, pixel);
            painted = true;
        }

        if painted {
            self.revision = next_revision();
        }
        painted
    }
}

/// Squared distance from `p` to the segment starting at `from` with direction `seg`.
fn distance_sq_to_segment(p: Point, from: Point, seg: Point, len_sq: f64) -> f64 {
    let rel = p - from;
    let t = if len_sq > 0.0 {
        ((rel.x * seg.x + rel.y * seg.y) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let d = rel - seg * t;
    d.x * d.x + d.y * d.y
}
