//! CSS cursor names for the editor canvas.
//!
//! The core reports tools and crop zones symbolically; turning them into
//! cursor strings is a presentation concern and lives here.

use retouch_core::{CropZone, Tool, ZoomDirection};

/// Cursor for a crop zone.
pub fn zone_cursor(zone: CropZone) -> &'static str {
    match zone {
        CropZone::LeftTop | CropZone::RightBottom => "nwse-resize",
        CropZone::RightTop | CropZone::LeftBottom => "nesw-resize",
        CropZone::LeftMid | CropZone::RightMid => "ew-resize",
        CropZone::TopMid | CropZone::BottomMid => "ns-resize",
        CropZone::Move => "move",
    }
}

/// Cursor for the canvas given the active tool and its state.
///
/// The brush and pipette hide the system cursor; the host draws its own
/// preview instead.
pub fn tool_cursor(
    tool: Tool,
    zone: Option<CropZone>,
    grabbing: bool,
    direction: ZoomDirection,
) -> &'static str {
    match tool {
        Tool::None => "default",
        Tool::Grab if grabbing => "grabbing",
        Tool::Grab => "grab",
        Tool::Draw | Tool::Pipette => "none",
        Tool::Zoom => match direction {
            ZoomDirection::In => "zoom-in",
            ZoomDirection::Out => "zoom-out",
        },
        Tool::Crop => zone_cursor(zone.unwrap_or_default()),
    }
}
