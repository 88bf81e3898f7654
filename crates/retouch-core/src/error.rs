//! Error types for editor construction.
//!
//! Geometry itself never fails: out-of-range coordinates are clamped and
//! degenerate crops are ignored. Only building an editor session can be
//! rejected.

use thiserror::Error;

/// Errors that can occur when creating or reconfiguring an editor session.
#[derive(Debug, Error, PartialEq)]
pub enum EditorError {
    /// A configuration value is out of its valid range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The image has no pixels, so no scale can be derived from it.
    #[error("Image has no pixels: {width}x{height}")]
    EmptyImage { width: u32, height: u32 },
}
