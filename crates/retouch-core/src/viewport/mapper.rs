//! Conversions between viewport (pointer) coordinates and image coordinates.

use super::ViewportState;
use crate::geometry::{Point, Rect};

/// Map a viewport-space point to image space.
///
/// `(pointer - offset) / scale`. The scale is never zero: [`ViewportState`]
/// keeps it clamped to a positive range.
#[inline]
pub fn to_image_space(pointer: Point, state: &ViewportState) -> Point {
    (pointer - state.offset()) / state.scale()
}

/// Map an image-space point to viewport space.
#[inline]
pub fn to_viewport_space(image_point: Point, state: &ViewportState) -> Point {
    image_point * state.scale() + state.offset()
}

/// Map an image-space rectangle to viewport space.
pub fn rect_to_viewport_space(rect: Rect, state: &ViewportState) -> Rect {
    let top_left = to_viewport_space(rect.origin, state);
    Rect {
        origin: top_left,
        size: rect.size.scaled(state.scale()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditorConfig;
    use crate::geometry::Size;

    fn state() -> ViewportState {
        // 200x100 image in a 500x500 viewport fits at scale 1, centered.
        ViewportState::new(
            Size::new(200.0, 100.0),
            Size::new(500.0, 500.0),
            &EditorConfig::default(),
        )
    }

    #[test]
    fn test_image_origin_maps_to_offset() {
        let s = state();
        assert_eq!(to_viewport_space(Point::ZERO, &s), s.offset());
        assert_eq!(to_image_space(s.offset(), &s), Point::ZERO);
    }

    #[test]
    fn test_known_values() {
        let s = state();
        assert_eq!(s.scale(), 1.0);
        assert_eq!(s.offset(), Point::new(150.0, 200.0));
        assert_eq!(
            to_image_space(Point::new(160.0, 230.0), &s),
            Point::new(10.0, 30.0)
        );
    }

    #[test]
    fn test_rect_to_viewport_space_scales_size() {
        let mut s = state();
        s.set_scale(2.0);
        let r = rect_to_viewport_space(Rect::new(10.0, 10.0, 20.0, 5.0), &s);
        assert_eq!(r.size, Size::new(40.0, 10.0));
        assert_eq!(r.origin, to_viewport_space(Point::new(10.0, 10.0), &s));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::config::EditorConfig;
    use crate::geometry::Size;
    use proptest::prelude::*;

    proptest! {
        /// Property: mapping to image space and back returns the original point.
        #[test]
        fn prop_round_trip(
            (iw, ih) in (1.0f64..4000.0, 1.0f64..4000.0),
            (vw, vh) in (1.0f64..2000.0, 1.0f64..2000.0),
            scale in 0.05f64..20.0,
            (px, py) in (-5000.0f64..5000.0, -5000.0f64..5000.0),
        ) {
            let mut s = ViewportState::new(Size::new(iw, ih), Size::new(vw, vh), &EditorConfig::default());
            s.set_scale(scale);
            let p = Point::new(px, py);
            let back = to_viewport_space(to_image_space(p, &s), &s);

            prop_assert!((back.x - p.x).abs() < 1e-6, "x: {} vs {}", back.x, p.x);
            prop_assert!((back.y - p.y).abs() < 1e-6, "y: {} vs {}", back.y, p.y);
        }
    }
}
