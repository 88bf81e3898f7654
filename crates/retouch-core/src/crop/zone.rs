//! Hit zones around the crop rectangle.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Which part of the crop rectangle a pointer-down grabs.
///
/// Eight resize handles plus the body. Evaluated continuously while
/// hovering, frozen for the whole of a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CropZone {
    TopMid,
    BottomMid,
    LeftTop,
    LeftMid,
    LeftBottom,
    RightTop,
    RightMid,
    RightBottom,
    #[default]
    Move,
}

impl CropZone {
    pub const ALL: [CropZone; 9] = [
        CropZone::TopMid,
        CropZone::BottomMid,
        CropZone::LeftTop,
        CropZone::LeftMid,
        CropZone::LeftBottom,
        CropZone::RightTop,
        CropZone::RightMid,
        CropZone::RightBottom,
        CropZone::Move,
    ];

    /// Classify a viewport-space pointer against the rectangle's viewport
    /// corners.
    ///
    /// Corners win when the pointer is outside on both axes, edges when it is
    /// outside on one axis and within the span of the other, and anything
    /// else (inside, or a degenerate rectangle) is the body. Total: every
    /// input maps to exactly one zone.
    pub fn detect(pointer: Point, top_left: Point, bottom_right: Point) -> CropZone {
        let Point { x, y } = pointer;
        let left = x <= top_left.x;
        let right = x >= bottom_right.x;
        let above = y <= top_left.y;
        let below = y >= bottom_right.y;
        let within_x = x >= top_left.x && x <= bottom_right.x;
        let within_y = y >= top_left.y && y <= bottom_right.y;

        if left && above {
            CropZone::LeftTop
        } else if right && above {
            CropZone::RightTop
        } else if left && below {
            CropZone::LeftBottom
        } else if right && below {
            CropZone::RightBottom
        } else if left && within_y {
            CropZone::LeftMid
        } else if right && within_y {
            CropZone::RightMid
        } else if within_x && above {
            CropZone::TopMid
        } else if within_x && below {
            CropZone::BottomMid
        } else {
            CropZone::Move
        }
    }

    /// Edges moved by a drag in this zone, as `(left, right, top, bottom)`.
    pub fn edges(self) -> (bool, bool, bool, bool) {
        match self {
            CropZone::LeftMid => (true, false, false, false),
            CropZone::RightMid => (false, true, false, false),
            CropZone::TopMid => (false, false, true, false),
            CropZone::BottomMid => (false, false, false, true),
            CropZone::LeftTop => (true, false, true, false),
            CropZone::RightTop => (false, true, true, false),
            CropZone::LeftBottom => (true, false, false, true),
            CropZone::RightBottom => (false, true, false, true),
            CropZone::Move => (false, false, false, false),
        }
    }
}
