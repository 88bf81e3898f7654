//! Click-to-zoom and wheel zoom.

use serde::{Deserialize, Serialize};

use crate::config::EditorConfig;
use crate::geometry::Point;
use crate::viewport::ViewportState;

/// Direction of a discrete zoom click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoomDirection {
    #[default]
    In,
    Out,
}

/// Zoom tool and wheel handler.
#[derive(Debug, Clone)]
pub struct ZoomController {
    direction: ZoomDirection,
    step: f64,
    coarse_step: f64,
    coarse_threshold: f64,
    wheel_rate: f64,
    fast_wheel_multiplier: f64,
    fast_wheel_threshold: f64,
}

impl ZoomController {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            direction: ZoomDirection::default(),
            step: config.zoom_step,
            coarse_step: config.coarse_zoom_step,
            coarse_threshold: config.coarse_zoom_threshold,
            wheel_rate: config.wheel_rate,
            fast_wheel_multiplier: config.fast_wheel_multiplier,
            fast_wheel_threshold: config.fast_wheel_threshold,
        }
    }

    pub fn direction(&self) -> ZoomDirection {
        self.direction
    }

    pub fn set_direction(&mut self, direction: ZoomDirection) {
        self.direction = direction;
    }

    /// Scale reached by one zoom click from `scale`, before clamping.
    ///
    /// Rounded to two decimals so repeated clicks do not accumulate
    /// floating-point drift.
    pub fn next_click_scale(&self, scale: f64) -> f64 {
        let mut step = if scale > self.coarse_threshold {
            self.coarse_step
        } else {
            self.step
        };
        if self.direction == ZoomDirection::Out {
            step = -step;
        }
        ((scale + step) * 100.0).round() / 100.0
    }

    /// Zoom one step at `pointer`.
    ///
    /// The clicked point is brought to the viewport center, then the offset
    /// is re-derived around the center for the new scale. Returns `true` if
    /// scale or offset changed.
    pub fn click(&self, pointer: Point, state: &mut ViewportState) -> bool {
        let before = (state.scale(), state.offset());
        let prev = state.set_scale(self.next_click_scale(state.scale()));

        let shift = state.viewport_size().center() - pointer;
        state.set_offset(state.offset() + shift);
        state.recenter_after_scale(prev);

        log::trace!("zoom click: {} -> {}", prev, state.scale());
        before != (state.scale(), state.offset())
    }

    /// Continuous zoom from a wheel event, keeping the image point under
    /// `anchor` fixed. Returns `true` if scale or offset changed.
    pub fn wheel(&self, delta_y: f64, anchor: Point, state: &mut ViewportState) -> bool {
        let before = (state.scale(), state.offset());
        let mut rate = self.wheel_rate;
        if state.scale() > self.fast_wheel_threshold {
            rate *= self.fast_wheel_multiplier;
        }

        let prev = state.set_scale(state.scale() + delta_y * rate);
        state.rescale_about(prev, anchor);

        log::trace!("zoom wheel: {} -> {}", prev, state.scale());
        before != (state.scale(), state.offset())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;
    use crate::viewport::to_image_space;

    fn state_at_scale(scale: f64) -> ViewportState {
        let mut state = ViewportState::new(
            Size::new(1000.0, 1000.0),
            Size::new(500.0, 500.0),
            &EditorConfig::default(),
        );
        let prev = state.set_scale(scale);
        state.recenter_after_scale(prev);
        state
    }

    #[test]
    fn test_click_at_center_keeps_center_point() {
        let zoom = ZoomController::new(&EditorConfig::default());
        let mut state = state_at_scale(1.0);
        let center = state.viewport_size().center();
        let before = to_image_space(center, &state);

        assert!(zoom.click(center, &mut state));

        assert!((state.scale() - 1.2).abs() < 1e-12);
        let after = to_image_space(center, &state);
        assert!((before.x - after.x).abs() < 1e-9);
        assert!((before.y - after.y).abs() < 1e-9);
    }

    #[test]
    fn test_click_brings_pointer_to_center() {
        let zoom = ZoomController::new(&EditorConfig::default());
        let mut state = state_at_scale(1.0);
        let pointer = Point::new(200.0, 300.0);
        let target = to_image_space(pointer, &state);

        zoom.click(pointer, &mut state);

        let center = to_image_space(state.viewport_size().center(), &state);
        assert!((center.x - target.x).abs() < 1e-9);
        assert!((center.y - target.y).abs() < 1e-9);
    }

    #[test]
    fn test_zoom_out_step() {
        let mut zoom = ZoomController::new(&EditorConfig::default());
        zoom.set_direction(ZoomDirection::Out);
        assert_eq!(zoom.next_click_scale(1.0), 0.8);
    }

    #[test]
    fn test_coarse_step_above_threshold() {
        let mut zoom = ZoomController::new(&EditorConfig::default());
        assert_eq!(zoom.next_click_scale(5.0), 5.2);
        assert_eq!(zoom.next_click_scale(5.2), 7.2);
        zoom.set_direction(ZoomDirection::Out);
        assert_eq!(zoom.next_click_scale(7.2), 5.2);
    }

    #[test]
    fn test_click_step_is_rounded() {
        let zoom = ZoomController::new(&EditorConfig::default());
        let mut scale = 0.1;
        for _ in 0..10 {
            scale = zoom.next_click_scale(scale);
        }
        assert_eq!(scale, 2.1);
    }

    #[test]
    fn test_click_clamps_to_max_scale() {
        let zoom = ZoomController::new(&EditorConfig::default());
        let mut state = state_at_scale(20.0);
        let center = state.viewport_size().center();
        zoom.click(center, &mut state);
        assert_eq!(state.scale(), 20.0);
    }

    #[test]
    fn test_click_out_clamps_to_min_scale() {
        let mut zoom = ZoomController::new(&EditorConfig::default());
        zoom.set_direction(ZoomDirection::Out);
        let mut state = state_at_scale(0.05);
        zoom.click(Point::new(10.0, 10.0), &mut state);
        assert_eq!(state.scale(), 0.05);
    }

    #[test]
    fn test_wheel_down_zooms_out() {
        let zoom = ZoomController::new(&EditorConfig::default());
        let mut state = state_at_scale(1.0);
        zoom.wheel(100.0, state.viewport_size().center(), &mut state);
        assert!((state.scale() - 0.95).abs() < 1e-12);
    }

    #[test]
    fn test_wheel_is_faster_at_high_scale() {
        let zoom = ZoomController::new(&EditorConfig::default());
        let mut state = state_at_scale(4.0);
        zoom.wheel(-100.0, state.viewport_size().center(), &mut state);
        assert!((state.scale() - 4.5).abs() < 1e-12);
    }

    #[test]
    fn test_wheel_keeps_point_under_cursor() {
        let zoom = ZoomController::new(&EditorConfig::default());
        let mut state = state_at_scale(2.0);
        let cursor = Point::new(180.0, 320.0);
        let before = to_image_space(cursor, &state);

        zoom.wheel(-200.0, cursor, &mut state);

        let after = to_image_space(cursor, &state);
        assert!((before.x - after.x).abs() < 1e-9);
        assert!((before.y - after.y).abs() < 1e-9);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::geometry::Size;
    use proptest::prelude::*;

    proptest! {
        /// Property: no sequence of clicks or wheel events leaves the scale range.
        #[test]
        fn prop_scale_stays_in_range(
            ops in proptest::collection::vec((any::<bool>(), any::<bool>(), -2000.0f64..2000.0), 1..40),
            (px, py) in (0.0f64..500.0, 0.0f64..500.0),
        ) {
            let config = EditorConfig::default();
            let mut zoom = ZoomController::new(&config);
            let mut state = ViewportState::new(Size::new(800.0, 600.0), Size::new(500.0, 500.0), &config);

            for (is_click, zoom_in, delta) in ops {
                if is_click {
                    zoom.set_direction(if zoom_in { ZoomDirection::In } else { ZoomDirection::Out });
                    zoom.click(Point::new(px, py), &mut state);
                } else {
                    zoom.wheel(delta, Point::new(px, py), &mut state);
                }
                prop_assert!(state.scale() >= config.min_scale);
                prop_assert!(state.scale() <= config.max_scale);
            }
        }
    }
}
