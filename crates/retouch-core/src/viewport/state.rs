//! The shared scale + offset transform for one loaded image.

use crate::config::EditorConfig;
use crate::geometry::{Point, Rect, Size};

/// Current view of the image inside the viewport.
///
/// Created once per loaded image. Only the pan and zoom controllers (and
/// the owning editor on resize/crop) mutate it, and every mutation updates
/// scale and offset together before returning, so a reader never observes
/// a half-applied change.
///
/// # Invariants
///
/// - `min_scale <= scale <= max_scale`, hence `scale > 0`
/// - on an axis where the scaled image is smaller than the viewport, the
///   image is centered
/// - otherwise at most `grab_space` px of empty margin is visible after any
///   scale change or pan
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportState {
    scale: f64,
    offset: Point,
    viewport_size: Size,
    image_size: Size,
    min_scale: f64,
    max_scale: f64,
    grab_space: f64,
}

/// Scale at which an image fits the viewport with a `grab_space` margin on
/// every side, never enlarged past 1:1.
///
/// `min(vw / (iw + 2g), vh / (ih + 2g), 1)`, then clamped into
/// `[min_scale, max_scale]`.
pub fn fit_scale(
    image_size: Size,
    viewport_size: Size,
    grab_space: f64,
    min_scale: f64,
    max_scale: f64,
) -> f64 {
    let scale_x = viewport_size.width / (image_size.width + grab_space * 2.0);
    let scale_y = viewport_size.height / (image_size.height + grab_space * 2.0);
    let fit = scale_x.min(scale_y).min(1.0);
    if fit.is_nan() {
        return min_scale;
    }
    fit.clamp(min_scale, max_scale)
}

impl ViewportState {
    /// Create the view for a freshly loaded image: fit to the viewport and center.
    pub fn new(image_size: Size, viewport_size: Size, config: &EditorConfig) -> Self {
        let mut state = Self {
            scale: 1.0,
            offset: Point::ZERO,
            viewport_size,
            image_size,
            min_scale: config.min_scale,
            max_scale: config.max_scale,
            grab_space: config.grab_space,
        };
        state.fit_to_viewport();
        state
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Viewport position of the image-space origin.
    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn viewport_size(&self) -> Size {
        self.viewport_size
    }

    pub fn image_size(&self) -> Size {
        self.image_size
    }

    pub fn grab_space(&self) -> f64 {
        self.grab_space
    }

    /// Footprint of the image at the current scale, in viewport px.
    pub fn scaled_size(&self) -> Size {
        self.image_size.scaled(self.scale)
    }

    /// Where the image is drawn, in viewport space.
    ///
    /// The size is floored to whole pixels, as the image is blitted without
    /// smoothing.
    pub fn image_rect(&self) -> Rect {
        let scaled = self.scaled_size();
        Rect::new(
            self.offset.x,
            self.offset.y,
            scaled.width.floor(),
            scaled.height.floor(),
        )
    }

    /// Clamp a candidate scale into the configured range.
    ///
    /// A NaN candidate keeps the current scale.
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        if scale.is_nan() {
            return self.scale;
        }
        scale.clamp(self.min_scale, self.max_scale)
    }

    /// Set a new (clamped) scale and return the previous one.
    ///
    /// The offset is left untouched; callers follow up with
    /// [`recenter_after_scale`](Self::recenter_after_scale) or
    /// [`rescale_about`](Self::rescale_about).
    pub(crate) fn set_scale(&mut self, scale: f64) -> f64 {
        let prev = self.scale;
        self.scale = self.clamp_scale(scale);
        prev
    }

    pub(crate) fn set_offset(&mut self, offset: Point) {
        self.offset = offset;
    }

    /// Re-derive the offset after a scale change, keeping the viewport center fixed.
    pub(crate) fn recenter_after_scale(&mut self, prev_scale: f64) {
        let center = self.viewport_size.center();
        self.rescale_about(prev_scale, center);
    }

    /// Re-derive the offset after a scale change, keeping the image point under
    /// `anchor` (viewport space) fixed.
    ///
    /// Per axis: if the scaled image is smaller than the viewport it is
    /// centered; otherwise the offset is scaled around the anchor and clamped
    /// so at most `grab_space` px of margin shows.
    pub(crate) fn rescale_about(&mut self, prev_scale: f64, anchor: Point) {
        let factor = self.scale / prev_scale;
        let scaled = self.scaled_size();

        self.offset.x = rescale_axis(
            self.offset.x,
            anchor.x,
            factor,
            self.viewport_size.width,
            scaled.width,
            self.grab_space,
        );
        self.offset.y = rescale_axis(
            self.offset.y,
            anchor.y,
            factor,
            self.viewport_size.height,
            scaled.height,
            self.grab_space,
        );
    }

    /// Refit the scale to the viewport and center the image.
    pub(crate) fn fit_to_viewport(&mut self) {
        self.scale = fit_scale(
            self.image_size,
            self.viewport_size,
            self.grab_space,
            self.min_scale,
            self.max_scale,
        );
        self.center();
    }

    /// Center the scaled image on both axes.
    pub(crate) fn center(&mut self) {
        let scaled = self.scaled_size();
        self.offset = Point::new(
            (self.viewport_size.width - scaled.width) / 2.0,
            (self.viewport_size.height - scaled.height) / 2.0,
        );
    }

    /// Track a resized viewport: refit and recenter.
    pub(crate) fn set_viewport_size(&mut self, viewport_size: Size) {
        self.viewport_size = viewport_size;
        self.fit_to_viewport();
    }

    /// Replace the image dimensions (after a crop): refit and recenter.
    pub(crate) fn set_image_size(&mut self, image_size: Size) {
        self.image_size = image_size;
        self.fit_to_viewport();
    }
}

/// One axis of [`ViewportState::rescale_about`].
fn rescale_axis(
    offset: f64,
    anchor: f64,
    factor: f64,
    viewport: f64,
    scaled: f64,
    grab_space: f64,
) -> f64 {
    let diff = viewport - scaled;
    if scaled < viewport {
        return diff / 2.0;
    }
    let candidate = anchor + (offset - anchor) * factor;
    clamp_offset(candidate, diff, grab_space)
}

/// Clamp an offset so the image edge stays within `grab_space` of the
/// viewport edge: `[viewport - scaled - grab, grab]`.
#[inline]
pub(crate) fn clamp_offset(candidate: f64, diff: f64, grab_space: f64) -> f64 {
    candidate.min(grab_space).max(diff - grab_space)
}
