//! Retouch Core - viewport and interaction engine for an in-browser image editor
//!
//! This crate holds everything that does not touch the DOM: the mapping
//! between pointer and image coordinates, the pan/zoom/crop/brush/pipette
//! tools that read and mutate it, the editable raster image, and PNG/JPEG
//! I/O. Rendering goes through the [`Surface`] trait so the same session
//! logic runs against a browser canvas or a test double.
//!
//! # Example
//!
//! ```ignore
//! use retouch_core::{decode_image, Editor, EditorConfig, Point, Tool};
//!
//! let image = decode_image(&bytes)?;
//! let mut editor = Editor::new(image, surface, EditorConfig::default())?;
//! editor.set_tool(Tool::Grab);
//! editor.on_pointer_down(Point::new(100.0, 100.0));
//! editor.on_pointer_move(Point::new(140.0, 90.0));
//! editor.on_pointer_up();
//! editor.render();
//! ```

pub mod codec;
pub mod color;
pub mod config;
pub mod crop;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod raster;
pub mod surface;
pub mod tools;
pub mod viewport;

pub use codec::{decode_image, encode_image, DecodeError, EncodeError};
pub use color::Rgb;
pub use config::EditorConfig;
pub use crop::{CropController, CropRect, CropZone};
pub use editor::Editor;
pub use error::EditorError;
pub use geometry::{Point, Rect, Size};
pub use raster::RasterImage;
pub use surface::Surface;
pub use tools::{Tool, ZoomDirection};
pub use viewport::{to_image_space, to_viewport_space, ViewportState};
