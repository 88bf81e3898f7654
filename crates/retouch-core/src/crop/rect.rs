//! The crop rectangle and its drag rules.

use serde::{Deserialize, Serialize};

use super::CropZone;
use crate::geometry::{Point, Rect, Size};

/// Crop rectangle in image-space pixels.
///
/// # Invariants (after any drag)
///
/// - `bottom_right - top_left >= min_side` on both axes
/// - all four coordinates within `[0, image_size]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropRect {
    pub top_left: Point,
    pub bottom_right: Point,
}

impl CropRect {
    pub fn new(top_left: Point, bottom_right: Point) -> Self {
        Self {
            top_left,
            bottom_right,
        }
    }

    /// The whole image.
    pub fn full(image_size: Size) -> Self {
        Self::new(
            Point::ZERO,
            Point::new(image_size.width, image_size.height),
        )
    }

    pub fn width(&self) -> f64 {
        self.bottom_right.x - self.top_left.x
    }

    pub fn height(&self) -> f64 {
        self.bottom_right.y - self.top_left.y
    }

    pub fn to_rect(&self) -> Rect {
        Rect::from_corners(self.top_left, self.bottom_right)
    }

    /// Apply one drag step of `diff` image px in `zone`.
    ///
    /// Handle zones move only the edges named by the zone. Each edge is
    /// clamped between the image bound and `min_side` away from the
    /// opposite edge, so the rectangle cannot invert or escape the image.
    /// An inward drag never moves an edge backwards, even when a zoom-out
    /// has raised `min_side` past the current size.
    /// The body zone translates the rectangle rigidly, committing an axis
    /// only when both corners stay within the image on that axis.
    pub fn drag(&mut self, zone: CropZone, diff: Point, min_side: f64, image_size: Size) {
        if zone == CropZone::Move {
            self.translate(diff, image_size);
            return;
        }

        let (left, right, top, bottom) = zone.edges();
        if left {
            self.top_left.x = if diff.x < 0.0 {
                (self.top_left.x + diff.x).max(0.0)
            } else {
                (self.top_left.x + diff.x)
                    .min(self.bottom_right.x - min_side)
                    .max(self.top_left.x)
            };
        }
        if right {
            self.bottom_right.x = if diff.x < 0.0 {
                (self.bottom_right.x + diff.x)
                    .max(self.top_left.x + min_side)
                    .min(self.bottom_right.x)
            } else {
                (self.bottom_right.x + diff.x).min(image_size.width)
            };
        }
        if top {
            self.top_left.y = if diff.y < 0.0 {
                (self.top_left.y + diff.y).max(0.0)
            } else {
                (self.top_left.y + diff.y)
                    .min(self.bottom_right.y - min_side)
                    .max(self.top_left.y)
            };
        }
        if bottom {
            self.bottom_right.y = if diff.y < 0.0 {
                (self.bottom_right.y + diff.y)
                    .max(self.top_left.y + min_side)
                    .min(self.bottom_right.y)
            } else {
                (self.bottom_right.y + diff.y).min(image_size.height)
            };
        }
    }

    /// Rigid translation; an axis moves only if both corners remain in bounds.
    fn translate(&mut self, diff: Point, image_size: Size) {
        let new_left = self.top_left.x + diff.x;
        let new_right = self.bottom_right.x + diff.x;
        if new_left >= 0.0 && new_right <= image_size.width {
            self.top_left.x = new_left;
            self.bottom_right.x = new_right;
        }

        let new_top = self.top_left.y + diff.y;
        let new_bottom = self.bottom_right.y + diff.y;
        if new_top >= 0.0 && new_bottom <= image_size.height {
            self.top_left.y = new_top;
            self.bottom_right.y = new_bottom;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IMAGE: Size = Size {
        width: 1000.0,
        height: 800.0,
    };

    #[test]
    fn test_full_rect() {
        let r = CropRect::full(IMAGE);
        assert_eq!(r.width(), 1000.0);
        assert_eq!(r.height(), 800.0);
        assert_eq!(r.to_rect(), Rect::new(0.0, 0.0, 1000.0, 800.0));
    }

    #[test]
    fn test_right_bottom_clamps_to_image_bounds() {
        let mut r = CropRect::full(IMAGE);
        r.drag(CropZone::RightBottom, Point::new(2000.0, 2000.0), 50.0, IMAGE);
        assert_eq!(r, CropRect::full(IMAGE));
    }

    #[test]
    fn test_left_edge_stops_at_min_width() {
        let mut r = CropRect::full(IMAGE);
        r.drag(CropZone::LeftMid, Point::new(5000.0, 0.0), 50.0, IMAGE);
        assert_eq!(r.top_left.x, 950.0);
        assert_eq!(r.width(), 50.0);
        // Vertical edges untouched.
        assert_eq!(r.top_left.y, 0.0);
        assert_eq!(r.bottom_right.y, 800.0);
    }

    #[test]
    fn test_left_edge_clamps_at_zero() {
        let mut r = CropRect::new(Point::new(100.0, 100.0), Point::new(500.0, 500.0));
        r.drag(CropZone::LeftMid, Point::new(-300.0, 0.0), 50.0, IMAGE);
        assert_eq!(r.top_left.x, 0.0);
    }

    #[test]
    fn test_top_and_bottom_edges() {
        let mut r = CropRect::full(IMAGE);
        r.drag(CropZone::TopMid, Point::new(0.0, 100.0), 50.0, IMAGE);
        assert_eq!(r.top_left.y, 100.0);
        r.drag(CropZone::BottomMid, Point::new(0.0, -1000.0), 50.0, IMAGE);
        assert_eq!(r.bottom_right.y, 150.0);
        assert_eq!(r.top_left.x, 0.0);
        assert_eq!(r.bottom_right.x, 1000.0);
    }

    #[test]
    fn test_corner_moves_two_edges() {
        let mut r = CropRect::full(IMAGE);
        r.drag(CropZone::LeftTop, Point::new(10.0, 20.0), 50.0, IMAGE);
        assert_eq!(r.top_left, Point::new(10.0, 20.0));
        assert_eq!(r.bottom_right, Point::new(1000.0, 800.0));

        r.drag(CropZone::RightTop, Point::new(-30.0, -5.0), 50.0, IMAGE);
        assert_eq!(r.top_left, Point::new(10.0, 15.0));
        assert_eq!(r.bottom_right, Point::new(970.0, 800.0));
    }

    #[test]
    fn test_move_translates_rigidly() {
        let mut r = CropRect::new(Point::new(100.0, 100.0), Point::new(300.0, 200.0));
        r.drag(CropZone::Move, Point::new(50.0, -40.0), 50.0, IMAGE);
        assert_eq!(r.top_left, Point::new(150.0, 60.0));
        assert_eq!(r.bottom_right, Point::new(350.0, 160.0));
    }

    #[test]
    fn test_move_stops_at_boundary_per_axis() {
        let mut r = CropRect::new(Point::new(100.0, 100.0), Point::new(300.0, 200.0));
        // x would push the left edge below zero: x is rejected, y is applied.
        r.drag(CropZone::Move, Point::new(-150.0, 30.0), 50.0, IMAGE);
        assert_eq!(r.top_left, Point::new(100.0, 130.0));
        assert_eq!(r.bottom_right, Point::new(300.0, 230.0));
        assert_eq!(r.width(), 200.0);
        assert_eq!(r.height(), 100.0);
    }

    #[test]
    fn test_inward_drag_never_reverses_when_min_side_grew() {
        // 40 px wide, but the minimum side is now 100 (zoomed out).
        let mut r = CropRect::new(Point::new(10.0, 10.0), Point::new(50.0, 50.0));
        r.drag(CropZone::LeftMid, Point::new(5.0, 0.0), 100.0, IMAGE);
        assert_eq!(r.top_left.x, 10.0);
        r.drag(CropZone::RightMid, Point::new(-5.0, 0.0), 100.0, IMAGE);
        assert_eq!(r.bottom_right.x, 50.0);
        assert!(r.top_left.x >= 0.0);
    }

    #[test]
    fn test_full_rect_can_touch_bounds_but_not_move() {
        let mut r = CropRect::full(IMAGE);
        r.drag(CropZone::Move, Point::new(1.0, 1.0), 50.0, IMAGE);
        assert_eq!(r, CropRect::full(IMAGE));
    }
}
