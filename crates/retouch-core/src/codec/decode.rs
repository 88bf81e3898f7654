//! Decoding with EXIF orientation correction.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::{DynamicImage, ImageFormat, ImageReader};
use thiserror::Error;

use super::{MIME_JPEG, MIME_PNG};
use crate::raster::RasterImage;

/// Errors that can occur while decoding an uploaded file.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The bytes are not a PNG or JPEG file.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The file was recognized but could not be decoded.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),
}

/// EXIF orientation values (1-8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Normal,
    FlipHorizontal,
    Rotate180,
    FlipVertical,
    /// Flip horizontal + rotate 270 CW.
    Transpose,
    Rotate90CW,
    /// Flip horizontal + rotate 90 CW.
    Transverse,
    Rotate270CW,
}

impl From<u32> for Orientation {
    fn from(value: u32) -> Self {
        match value {
            2 => Orientation::FlipHorizontal,
            3 => Orientation::Rotate180,
            4 => Orientation::FlipVertical,
            5 => Orientation::Transpose,
            6 => Orientation::Rotate90CW,
            7 => Orientation::Transverse,
            8 => Orientation::Rotate270CW,
            _ => Orientation::Normal,
        }
    }
}

impl Orientation {
    /// Read the orientation tag from a file's EXIF block.
    ///
    /// Files without EXIF data, or with an unreadable block, are `Normal`.
    pub fn from_exif(bytes: &[u8]) -> Orientation {
        let mut cursor = Cursor::new(bytes);
        let Ok(exif) = Reader::new().read_from_container(&mut cursor) else {
            return Orientation::Normal;
        };
        exif.get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .map(Orientation::from)
            .unwrap_or_default()
    }

    /// Transform a decoded image so it displays upright.
    pub fn apply(self, img: DynamicImage) -> DynamicImage {
        match self {
            Orientation::Normal => img,
            Orientation::FlipHorizontal => img.fliph(),
            Orientation::Rotate180 => img.rotate180(),
            Orientation::FlipVertical => img.flipv(),
            Orientation::Transpose => img.rotate90().fliph(),
            Orientation::Rotate90CW => img.rotate90(),
            Orientation::Transverse => img.rotate270().fliph(),
            Orientation::Rotate270CW => img.rotate270(),
        }
    }
}

/// MIME type of an encoded file, judged from its magic bytes.
pub fn sniff_mime(bytes: &[u8]) -> Option<&'static str> {
    match image::guess_format(bytes).ok()? {
        ImageFormat::Png => Some(MIME_PNG),
        ImageFormat::Jpeg => Some(MIME_JPEG),
        _ => None,
    }
}

/// Decode a PNG or JPEG file into an upright RGBA image.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the bytes are not PNG or JPEG,
/// `DecodeError::CorruptedFile` if decoding fails.
pub fn decode_image(bytes: &[u8]) -> Result<RasterImage, DecodeError> {
    if sniff_mime(bytes).is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    let orientation = Orientation::from_exif(bytes);
    let img = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let upright = orientation.apply(img);
    log::debug!(
        "decoded {}x{} image ({:?})",
        upright.width(),
        upright.height(),
        orientation
    );
    Ok(RasterImage::from_rgba_image(upright.into_rgba8()))
}
