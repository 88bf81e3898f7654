//! Encoding the edited image for export.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use thiserror::Error;

use super::{MIME_JPEG, MIME_PNG};
use crate::raster::RasterImage;

/// JPEG quality used for export, matching the browser's canvas default.
pub const JPEG_QUALITY: u8 = 92;

/// Errors that can occur during export.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Width or height is zero.
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// No encoder for the requested MIME type.
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    /// The encoder itself failed.
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),
}

/// Encode `image` as `mime` (`image/png` or `image/jpeg`).
///
/// JPEG has no alpha channel, so it is dropped before encoding.
pub fn encode_image(image: &RasterImage, mime: &str) -> Result<Vec<u8>, EncodeError> {
    let (width, height) = (image.width(), image.height());
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let pixels = image.pixels();

    let mut buffer = Cursor::new(Vec::new());
    match mime {
        MIME_PNG => PngEncoder::new(&mut buffer)
            .write_image(pixels, width, height, ExtendedColorType::Rgba8)
            .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?,
        MIME_JPEG => {
            let rgb: Vec<u8> = pixels
                .chunks_exact(4)
                .flat_map(|px| [px[0], px[1], px[2]])
                .collect();
            JpegEncoder::new_with_quality(&mut buffer, JPEG_QUALITY)
                .write_image(&rgb, width, height, ExtendedColorType::Rgb8)
                .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?
        }
        other => return Err(EncodeError::UnsupportedFormat(other.to_string())),
    }

    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    #[test]
    fn test_encode_png_magic_bytes() {
        let img = RasterImage::filled(10, 10, Rgb::new(1, 2, 3));
        let png = encode_image(&img, MIME_PNG).unwrap();
        assert_eq!(&png[0..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[test]
    fn test_encode_jpeg_markers() {
        let img = RasterImage::filled(100, 50, Rgb::new(128, 128, 128));
        let jpeg = encode_image(&img, MIME_JPEG).unwrap();
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
        let len = jpeg.len();
        assert_eq!(&jpeg[len - 2..], &[0xFF, 0xD9]);
    }

    #[test]
    fn test_encode_unsupported_mime() {
        let img = RasterImage::filled(4, 4, Rgb::WHITE);
        let err = encode_image(&img, "image/webp").unwrap_err();
        assert!(matches!(err, EncodeError::UnsupportedFormat(ref m) if m == "image/webp"));
        assert_eq!(err.to_string(), "Unsupported export format: image/webp");
    }

    #[test]
    fn test_encode_empty_image() {
        let img = RasterImage::filled(0, 4, Rgb::WHITE);
        assert!(matches!(
            encode_image(&img, MIME_PNG),
            Err(EncodeError::InvalidDimensions {
                width: 0,
                height: 4
            })
        ));
    }
}
