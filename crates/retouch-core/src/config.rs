//! Tunable constants for an editor session.
//!
//! Every value has a default matching the stock editor; hosts may override
//! any subset by passing a partial object (missing fields fall back to the
//! defaults through `#[serde(default)]`).

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::EditorError;

/// Editor configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Empty margin (viewport px) allowed between a panned image and the viewport edge.
    pub grab_space: f64,
    /// Lower bound for the scale factor.
    pub min_scale: f64,
    /// Upper bound for the scale factor.
    pub max_scale: f64,
    /// Scale increment for a single zoom click.
    pub zoom_step: f64,
    /// Scale increment for a zoom click once the scale exceeds `coarse_zoom_threshold`.
    pub coarse_zoom_step: f64,
    pub coarse_zoom_threshold: f64,
    /// Scale change per wheel `deltaY` unit (negative: wheel down zooms out).
    pub wheel_rate: f64,
    /// Multiplier applied to `wheel_rate` once the scale exceeds `fast_wheel_threshold`.
    pub fast_wheel_multiplier: f64,
    pub fast_wheel_threshold: f64,
    /// Minimum crop rectangle side, in viewport px.
    pub min_crop_space: f64,
    /// Length of each crop handle segment, in viewport px.
    pub handle_segment_length: f64,
    /// Initial freehand stroke width, in image px.
    pub stroke_width: f64,
    /// Initial freehand stroke color.
    pub stroke_color: Rgb,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            grab_space: 10.0,
            min_scale: 0.05,
            max_scale: 20.0,
            zoom_step: 0.2,
            coarse_zoom_step: 2.0,
            coarse_zoom_threshold: 5.0,
            wheel_rate: -0.0005,
            fast_wheel_multiplier: 10.0,
            fast_wheel_threshold: 3.0,
            min_crop_space: 50.0,
            handle_segment_length: 15.0,
            stroke_width: 10.0,
            stroke_color: Rgb::BLACK,
        }
    }
}

impl EditorConfig {
    /// Check that every value is usable.
    ///
    /// The scale bounds guard the non-zero-scale invariant every coordinate
    /// conversion relies on.
    pub fn validate(&self) -> Result<(), EditorError> {
        for (name, value) in [
            ("grab_space", self.grab_space),
            ("min_scale", self.min_scale),
            ("max_scale", self.max_scale),
            ("zoom_step", self.zoom_step),
            ("coarse_zoom_step", self.coarse_zoom_step),
            ("coarse_zoom_threshold", self.coarse_zoom_threshold),
            ("wheel_rate", self.wheel_rate),
            ("fast_wheel_multiplier", self.fast_wheel_multiplier),
            ("fast_wheel_threshold", self.fast_wheel_threshold),
            ("min_crop_space", self.min_crop_space),
            ("handle_segment_length", self.handle_segment_length),
            ("stroke_width", self.stroke_width),
        ] {
            if !value.is_finite() {
                return Err(invalid(format!("{name} must be finite, got {value}")));
            }
        }
        if self.min_scale <= 0.0 {
            return Err(invalid(format!(
                "min_scale must be positive, got {}",
                self.min_scale
            )));
        }
        if self.max_scale < self.min_scale {
            return Err(invalid(format!(
                "max_scale ({}) must not be below min_scale ({})",
                self.max_scale, self.min_scale
            )));
        }
        for (name, value) in [
            ("grab_space", self.grab_space),
            ("min_crop_space", self.min_crop_space),
            ("handle_segment_length", self.handle_segment_length),
        ] {
            if value < 0.0 {
                return Err(invalid(format!("{name} must not be negative, got {value}")));
            }
        }
        for (name, value) in [
            ("zoom_step", self.zoom_step),
            ("coarse_zoom_step", self.coarse_zoom_step),
            ("fast_wheel_multiplier", self.fast_wheel_multiplier),
            ("stroke_width", self.stroke_width),
        ] {
            if value <= 0.0 {
                return Err(invalid(format!("{name} must be positive, got {value}")));
            }
        }
        Ok(())
    }
}

fn invalid(message: String) -> EditorError {
    EditorError::InvalidConfig(message)
}
