//! Interactive crop: zone detection, handle dragging and the overlay.
//!
//! The crop rectangle lives in image space so it stays attached to the
//! same pixels while the user pans or zooms; pointer input is converted
//! through the current [`ViewportState`] on every event.
//!
//! # Interaction
//!
//! 1. While hovering, every pointer-move re-classifies the pointer into a
//!    [`CropZone`] (the host maps it to a cursor).
//! 2. Pointer-down captures the zone under the pointer; it stays fixed for
//!    the whole drag even if the pointer leaves the handle's hit area.
//! 3. Each drag move resizes or moves the rectangle by the pointer delta
//!    since the previous move, converted to image px.
//! 4. Pointer-up ends the drag unconditionally.

mod overlay;
mod rect;
mod zone;

pub use overlay::{border_path, handle_segments, Segment};
pub use rect::CropRect;
pub use zone::CropZone;

use crate::config::EditorConfig;
use crate::geometry::{Point, Size};
use crate::viewport::{rect_to_viewport_space, ViewportState};

/// Crop overlay in viewport space, ready to be stroked.
#[derive(Debug, Clone, PartialEq)]
pub struct CropOverlay {
    /// Closed thin border around the rectangle.
    pub border: [Point; 4],
    /// Thick handle marks.
    pub handles: Vec<Segment>,
}

/// Crop tool state.
#[derive(Debug, Clone)]
pub struct CropController {
    rect: Option<CropRect>,
    zone: CropZone,
    anchor: Option<Point>,
    min_crop_space: f64,
    handle_segment_length: f64,
}

impl CropController {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            rect: None,
            zone: CropZone::default(),
            anchor: None,
            min_crop_space: config.min_crop_space,
            handle_segment_length: config.handle_segment_length,
        }
    }

    /// Start (or restart) cropping with the rectangle covering the whole image.
    pub fn init(&mut self, image_size: Size) {
        self.rect = Some(CropRect::full(image_size));
        self.zone = CropZone::default();
        self.anchor = None;
    }

    /// Current rectangle, if crop mode has been entered.
    pub fn rect(&self) -> Option<CropRect> {
        self.rect
    }

    /// Zone under the pointer while hovering, or the captured zone while dragging.
    pub fn zone(&self) -> CropZone {
        self.zone
    }

    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }

    /// Minimum rectangle side in image px at the current scale.
    pub fn min_side(&self, state: &ViewportState) -> f64 {
        self.min_crop_space / state.scale()
    }

    /// Capture the zone under `pos` and start dragging.
    pub fn pointer_down(&mut self, pos: Point, state: &ViewportState) {
        if self.rect.is_none() {
            return;
        }
        self.zone = self.detect(pos, state);
        self.anchor = Some(pos);
    }

    /// Handle a pointer-move. Returns `true` when the rectangle was dragged
    /// and the view needs a repaint.
    pub fn pointer_move(&mut self, pos: Point, state: &ViewportState) -> bool {
        let Some(mut rect) = self.rect else {
            return false;
        };

        let Some(anchor) = self.anchor else {
            self.zone = self.detect(pos, state);
            return false;
        };

        let diff = (pos - anchor) / state.scale();
        rect.drag(self.zone, diff, self.min_side(state), state.image_size());
        self.rect = Some(rect);
        self.anchor = Some(pos);
        true
    }

    /// End the drag. Safe to call when no drag is active.
    pub fn pointer_up(&mut self) {
        self.anchor = None;
    }

    /// Overlay geometry for the current rectangle.
    pub fn overlay(&self, state: &ViewportState) -> Option<CropOverlay> {
        let (top_left, bottom_right) = self.viewport_corners(state)?;
        Some(CropOverlay {
            border: border_path(top_left, bottom_right),
            handles: handle_segments(top_left, bottom_right, self.handle_segment_length),
        })
    }

    /// Rectangle corners in viewport space.
    fn viewport_corners(&self, state: &ViewportState) -> Option<(Point, Point)> {
        let r = rect_to_viewport_space(self.rect?.to_rect(), state);
        Some((r.origin, Point::new(r.max_x(), r.max_y())))
    }

    fn detect(&self, pos: Point, state: &ViewportState) -> CropZone {
        match self.viewport_corners(state) {
            Some((top_left, bottom_right)) => CropZone::detect(pos, top_left, bottom_right),
            None => CropZone::Move,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 1000x800 image at scale 1, origin at (0, 0) of a large viewport.
    fn state() -> ViewportState {
        let mut state = ViewportState::new(
            Size::new(1000.0, 800.0),
            Size::new(1020.0, 820.0),
            &EditorConfig::default(),
        );
        assert_eq!(state.scale(), 1.0);
        state.set_offset(Point::ZERO);
        state
    }

    fn controller(state: &ViewportState) -> CropController {
        let mut crop = CropController::new(&EditorConfig::default());
        crop.init(state.image_size());
        crop
    }

    #[test]
    fn test_init_covers_image() {
        let state = state();
        let crop = controller(&state);
        assert_eq!(crop.rect(), Some(CropRect::full(Size::new(1000.0, 800.0))));
        assert!(!crop.is_dragging());
    }

    #[test]
    fn test_hover_updates_zone() {
        let state = state();
        let mut crop = controller(&state);
        assert!(!crop.pointer_move(Point::new(1005.0, 805.0), &state));
        assert_eq!(crop.zone(), CropZone::RightBottom);
        crop.pointer_move(Point::new(500.0, 400.0), &state);
        assert_eq!(crop.zone(), CropZone::Move);
    }

    #[test]
    fn test_right_bottom_drag_beyond_image_is_clamped() {
        let state = state();
        let mut crop = controller(&state);

        crop.pointer_down(Point::new(1000.0, 800.0), &state);
        assert_eq!(crop.zone(), CropZone::RightBottom);
        assert!(crop.pointer_move(Point::new(3000.0, 2800.0), &state));

        assert_eq!(crop.rect(), Some(CropRect::full(Size::new(1000.0, 800.0))));
    }

    #[test]
    fn test_zone_is_frozen_during_drag() {
        let state = state();
        let mut crop = controller(&state);

        // Grab the left edge, then sweep the pointer far into the image.
        crop.pointer_down(Point::new(-5.0, 400.0), &state);
        assert_eq!(crop.zone(), CropZone::LeftMid);
        crop.pointer_move(Point::new(200.0, 400.0), &state);
        crop.pointer_move(Point::new(300.0, 100.0), &state);

        assert_eq!(crop.zone(), CropZone::LeftMid);
        let rect = crop.rect().unwrap();
        assert_eq!(rect.top_left, Point::new(305.0, 0.0));
        assert_eq!(rect.bottom_right, Point::new(1000.0, 800.0));
    }

    #[test]
    fn test_drag_delta_is_divided_by_scale() {
        let mut state = state();
        state.set_scale(2.0);
        state.set_offset(Point::ZERO);
        let mut crop = controller(&state);

        crop.pointer_down(Point::new(2005.0, 400.0), &state);
        assert_eq!(crop.zone(), CropZone::RightMid);
        crop.pointer_move(Point::new(1805.0, 400.0), &state);

        assert_eq!(crop.rect().unwrap().bottom_right.x, 900.0);
    }

    #[test]
    fn test_min_side_uses_scale() {
        let mut state = state();
        let crop = controller(&state);
        assert_eq!(crop.min_side(&state), 50.0);
        state.set_scale(2.0);
        assert_eq!(crop.min_side(&state), 25.0);
    }

    #[test]
    fn test_pointer_up_ends_drag() {
        let state = state();
        let mut crop = controller(&state);
        crop.pointer_down(Point::new(500.0, 400.0), &state);
        assert!(crop.is_dragging());
        crop.pointer_up();
        assert!(!crop.is_dragging());

        // Further moves only hover.
        let before = crop.rect();
        assert!(!crop.pointer_move(Point::new(600.0, 500.0), &state));
        assert_eq!(crop.rect(), before);
    }

    #[test]
    fn test_no_rect_before_init() {
        let state = state();
        let mut crop = CropController::new(&EditorConfig::default());
        crop.pointer_down(Point::new(1.0, 1.0), &state);
        assert!(!crop.is_dragging());
        assert!(!crop.pointer_move(Point::new(2.0, 2.0), &state));
        assert!(crop.overlay(&state).is_none());
    }

    #[test]
    fn test_overlay_in_viewport_space() {
        let mut state = state();
        state.set_scale(0.5);
        state.set_offset(Point::new(10.0, 20.0));
        let crop = controller(&state);

        let overlay = crop.overlay(&state).unwrap();
        assert_eq!(overlay.border[0], Point::new(10.0, 20.0));
        assert_eq!(overlay.border[2], Point::new(510.0, 420.0));
        assert_eq!(overlay.handles.len(), 12);
    }
}
