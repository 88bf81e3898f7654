//! Image file I/O: decoding uploads into a [`RasterImage`](crate::RasterImage)
//! and encoding the edited image for download.
//!
//! Only PNG and JPEG are supported, matching the `image` crate features
//! enabled for the workspace.

mod decode;
mod encode;

pub use decode::{decode_image, sniff_mime, DecodeError, Orientation};
pub use encode::{encode_image, EncodeError, JPEG_QUALITY};

/// MIME type for PNG files.
pub const MIME_PNG: &str = "image/png";
/// MIME type for JPEG files.
pub const MIME_JPEG: &str = "image/jpeg";
