//! Viewport transform: the mapping between pointer coordinates and image pixels.
//!
//! # Coordinate Systems
//!
//! - **Viewport space**: pixels of the on-screen drawing surface, origin at
//!   its top-left corner. Pointer events arrive in this space.
//! - **Image space**: pixels of the (possibly cropped) source image, origin
//!   at the image's top-left corner, independent of scale and offset.
//!
//! A [`ViewportState`] holds the uniform scale and the viewport position of
//! the image origin; [`to_image_space`] and [`to_viewport_space`] convert
//! between the two.

mod mapper;
mod state;

pub use mapper::{rect_to_viewport_space, to_image_space, to_viewport_space};
pub use state::{fit_scale, ViewportState};
pub(crate) use state::clamp_offset;
