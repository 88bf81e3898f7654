//! Pointer tools and the tool selector.
//!
//! Each tool is a small state machine over pointer-down / move / up. The
//! [`Editor`](crate::Editor) routes events to whichever one is active.

mod pan;
mod pipette;
mod stroke;
mod zoom;

pub use pan::PanController;
pub use pipette::{Pipette, BACKDROP};
pub use stroke::FreehandStroke;
pub use zoom::{ZoomController, ZoomDirection};

use serde::{Deserialize, Serialize};

/// The active pointer tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Pointer events are ignored (wheel zoom still works).
    #[default]
    None,
    /// Drag to pan.
    Grab,
    /// Freehand brush.
    Draw,
    /// Click to zoom in or out.
    Zoom,
    /// Pick a stroke color from the image.
    Pipette,
    /// Interactive crop rectangle.
    Crop,
}

impl Tool {
    /// Parse a tool name as sent by the host UI.
    pub fn from_name(name: &str) -> Option<Tool> {
        match name {
            "none" => Some(Tool::None),
            "grab" => Some(Tool::Grab),
            "draw" => Some(Tool::Draw),
            "zoom" => Some(Tool::Zoom),
            "pipette" => Some(Tool::Pipette),
            "crop" => Some(Tool::Crop),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Tool::None => "none",
            Tool::Grab => "grab",
            Tool::Draw => "draw",
            Tool::Zoom => "zoom",
            Tool::Pipette => "pipette",
            Tool::Crop => "crop",
        }
    }
}
