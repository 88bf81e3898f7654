//! Drag-to-pan with the image kept within `grab_space` of the viewport edges.

use crate::geometry::Point;
use crate::viewport::{clamp_offset, ViewportState};

/// Pan ("grab") tool.
#[derive(Debug, Clone, Default)]
pub struct PanController {
    /// Last observed pointer position while dragging.
    anchor: Option<Point>,
}

impl PanController {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a drag is in progress.
    pub fn is_grabbing(&self) -> bool {
        self.anchor.is_some()
    }

    pub fn pointer_down(&mut self, pos: Point) {
        self.anchor = Some(pos);
    }

    /// Apply one pointer-move. Returns `true` if the offset changed and a
    /// repaint is needed.
    ///
    /// On an axis where the scaled image is smaller than the viewport the
    /// offset is left alone. The anchor always advances to `pos`, so deltas
    /// are measured from the last observed point even when an axis is
    /// pinned against its clamp.
    pub fn pointer_move(&mut self, pos: Point, state: &mut ViewportState) -> bool {
        let Some(anchor) = self.anchor else {
            return false;
        };
        self.anchor = Some(pos);

        let viewport = state.viewport_size();
        let scaled = state.scaled_size();
        let grab = state.grab_space();
        let delta = pos - anchor;
        let prev = state.offset();
        let mut next = prev;

        if scaled.width >= viewport.width {
            next.x = clamp_offset(prev.x + delta.x, viewport.width - scaled.width, grab);
        }
        if scaled.height >= viewport.height {
            next.y = clamp_offset(prev.y + delta.y, viewport.height - scaled.height, grab);
        }

        if next == prev {
            return false;
        }
        state.set_offset(next);
        true
    }

    /// End the drag. Safe to call when no drag is active.
    pub fn pointer_up(&mut self) {
        self.anchor = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditorConfig;
    use crate::geometry::Size;

    /// 1000x1000 image at scale 1 in a 500x500 viewport, centered.
    fn zoomed_state() -> ViewportState {
        let mut state = ViewportState::new(
            Size::new(1000.0, 1000.0),
            Size::new(500.0, 500.0),
            &EditorConfig::default(),
        );
        let prev = state.set_scale(1.0);
        state.recenter_after_scale(prev);
        state
    }

    #[test]
    fn test_move_without_down_is_noop() {
        let mut pan = PanController::new();
        let mut state = zoomed_state();
        let before = state.offset();
        assert!(!pan.pointer_move(Point::new(10.0, 10.0), &mut state));
        assert_eq!(state.offset(), before);
    }

    #[test]
    fn test_drag_moves_offset_by_delta() {
        let mut pan = PanController::new();
        let mut state = zoomed_state();
        let before = state.offset();

        pan.pointer_down(Point::new(100.0, 100.0));
        assert!(pan.pointer_move(Point::new(130.0, 80.0), &mut state));
        assert_eq!(state.offset(), before + Point::new(30.0, -20.0));
    }

    #[test]
    fn test_drag_clamps_to_grab_space() {
        let mut pan = PanController::new();
        let mut state = zoomed_state();

        pan.pointer_down(Point::new(0.0, 0.0));
        pan.pointer_move(Point::new(5000.0, -5000.0), &mut state);
        // x: at most grab_space of margin on the left
        assert_eq!(state.offset().x, 10.0);
        // y: at most grab_space of margin at the bottom: 500 - 1000 - 10
        assert_eq!(state.offset().y, -510.0);
    }

    #[test]
    fn test_anchor_advances_even_when_clamped() {
        let mut pan = PanController::new();
        let mut state = zoomed_state();

        pan.pointer_down(Point::new(0.0, 0.0));
        pan.pointer_move(Point::new(5000.0, 0.0), &mut state);
        assert_eq!(state.offset().x, 10.0);

        // Moving back by 20 px pans back immediately, with no dead zone left
        // over from the clamped overshoot.
        assert!(pan.pointer_move(Point::new(4980.0, 0.0), &mut state));
        assert_eq!(state.offset().x, -10.0);
    }

    #[test]
    fn test_clamped_move_reports_no_change() {
        let mut pan = PanController::new();
        let mut state = zoomed_state();

        pan.pointer_down(Point::new(0.0, 0.0));
        pan.pointer_move(Point::new(5000.0, 5000.0), &mut state);
        assert!(!pan.pointer_move(Point::new(5100.0, 5100.0), &mut state));
    }

    #[test]
    fn test_small_image_does_not_pan() {
        let mut pan = PanController::new();
        let mut state = ViewportState::new(
            Size::new(100.0, 100.0),
            Size::new(500.0, 500.0),
            &EditorConfig::default(),
        );
        let before = state.offset();

        pan.pointer_down(Point::new(0.0, 0.0));
        assert!(!pan.pointer_move(Point::new(50.0, 50.0), &mut state));
        assert_eq!(state.offset(), before);
    }

    #[test]
    fn test_pan_single_axis_when_only_one_axis_overflows() {
        let mut pan = PanController::new();
        let mut state = ViewportState::new(
            Size::new(2000.0, 100.0),
            Size::new(500.0, 500.0),
            &EditorConfig::default(),
        );
        let prev = state.set_scale(1.0);
        state.recenter_after_scale(prev);
        let before = state.offset();

        pan.pointer_down(Point::new(0.0, 0.0));
        assert!(pan.pointer_move(Point::new(-40.0, 70.0), &mut state));
        assert_eq!(state.offset(), Point::new(before.x - 40.0, before.y));
    }

    #[test]
    fn test_pointer_up_clears_drag() {
        let mut pan = PanController::new();
        pan.pointer_down(Point::new(1.0, 1.0));
        assert!(pan.is_grabbing());
        pan.pointer_up();
        assert!(!pan.is_grabbing());
        pan.pointer_up();
        assert!(!pan.is_grabbing());
    }
}
