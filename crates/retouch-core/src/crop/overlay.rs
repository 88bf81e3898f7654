//! Geometry of the crop overlay: a thin border plus thick handle marks.

use crate::geometry::Point;

/// A straight line from `from` to `to`, in viewport space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    pub fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }
}

/// Closed border path of the crop rectangle, clockwise from the top-left.
pub fn border_path(top_left: Point, bottom_right: Point) -> [Point; 4] {
    [
        top_left,
        Point::new(bottom_right.x, top_left.y),
        bottom_right,
        Point::new(top_left.x, bottom_right.y),
    ]
}

/// Handle marks for a crop rectangle given in viewport space.
///
/// Each edge gets three marks of `len` px (one from each corner and one
/// centered on the edge) when its half-span exceeds `2 * len`; a shorter
/// edge is drawn as one continuous line instead.
pub fn handle_segments(top_left: Point, bottom_right: Point, len: f64) -> Vec<Segment> {
    let half_w = (bottom_right.x - top_left.x) / 2.0;
    let half_h = (bottom_right.y - top_left.y) / 2.0;
    let mut segments = Vec::with_capacity(12);

    // Top and bottom edges.
    for y in [top_left.y, bottom_right.y] {
        if half_w <= 2.0 * len {
            segments.push(Segment::new(
                Point::new(top_left.x, y),
                Point::new(bottom_right.x, y),
            ));
        } else {
            let mid = top_left.x + half_w;
            segments.push(Segment::new(
                Point::new(top_left.x, y),
                Point::new(top_left.x + len, y),
            ));
            segments.push(Segment::new(
                Point::new(bottom_right.x, y),
                Point::new(bottom_right.x - len, y),
            ));
            segments.push(Segment::new(
                Point::new(mid - len, y),
                Point::new(mid + len, y),
            ));
        }
    }

    // Left and right edges.
    for x in [top_left.x, bottom_right.x] {
        if half_h <= 2.0 * len {
            segments.push(Segment::new(
                Point::new(x, top_left.y),
                Point::new(x, bottom_right.y),
            ));
        } else {
            let mid = top_left.y + half_h;
            segments.push(Segment::new(
                Point::new(x, top_left.y),
                Point::new(x, top_left.y + len),
            ));
            segments.push(Segment::new(
                Point::new(x, bottom_right.y),
                Point::new(x, bottom_right.y - len),
            ));
            segments.push(Segment::new(
                Point::new(x, mid - len),
                Point::new(x, mid + len),
            ));
        }
    }

    segments
}
