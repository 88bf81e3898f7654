//! An editing session: one image, one viewport, the active tool.
//!
//! The host forwards raw pointer, wheel and resize events; the editor
//! routes them to the active tool, which mutates the shared
//! [`ViewportState`] or the image. Any visible change raises a repaint
//! flag instead of drawing immediately. The host calls [`Editor::render`]
//! once per animation frame, so any number of mutations between frames
//! collapse into a single redraw.

use crate::color::Rgb;
use crate::config::EditorConfig;
use crate::crop::{CropController, CropZone};
use crate::error::EditorError;
use crate::geometry::{Point, Rect, Size};
use crate::raster::RasterImage;
use crate::surface::Surface;
use crate::tools::{
    FreehandStroke, PanController, Pipette, Tool, ZoomController, ZoomDirection, BACKDROP,
};
use crate::viewport::ViewportState;

/// Stroke color of the crop border and handles.
pub const OVERLAY_COLOR: Rgb = Rgb::new(0xD0, 0xD5, 0xDD);
/// Line width of the crop border, in viewport px.
pub const OVERLAY_BORDER_WIDTH: f64 = 1.0;
/// Line width of the crop handles, in viewport px.
pub const OVERLAY_HANDLE_WIDTH: f64 = 3.0;

/// An editor session rendering into `S`.
pub struct Editor<S: Surface> {
    surface: S,
    image: RasterImage,
    viewport: ViewportState,
    config: EditorConfig,
    tool: Tool,
    pan: PanController,
    zoom: ZoomController,
    crop: CropController,
    stroke: FreehandStroke,
    pipette: Pipette,
    /// Last observed pointer position, used as the wheel-zoom anchor.
    pointer: Option<Point>,
    repaint: bool,
}

impl<S: Surface> Editor<S> {
    /// Start a session on `image`, fitted and centered in `surface`.
    ///
    /// # Errors
    ///
    /// Returns `EditorError::InvalidConfig` if `config` fails validation and
    /// `EditorError::EmptyImage` if the image has no pixels.
    pub fn new(image: RasterImage, surface: S, config: EditorConfig) -> Result<Self, EditorError> {
        config.validate()?;
        check_not_empty(&image)?;

        let viewport = ViewportState::new(image.size(), surface.size(), &config);
        log::debug!(
            "editor session: {}x{} image, scale {:.4}",
            image.width(),
            image.height(),
            viewport.scale()
        );

        Ok(Self {
            pan: PanController::new(),
            zoom: ZoomController::new(&config),
            crop: CropController::new(&config),
            stroke: FreehandStroke::new(&config),
            pipette: Pipette::new(),
            tool: Tool::default(),
            pointer: None,
            repaint: true,
            surface,
            image,
            viewport,
            config,
        })
    }

    /// Replace the image. The previous viewport and crop state are discarded.
    pub fn load_image(&mut self, image: RasterImage) -> Result<(), EditorError> {
        check_not_empty(&image)?;
        self.end_drags();
        self.viewport = ViewportState::new(image.size(), self.surface.size(), &self.config);
        self.image = image;
        if self.tool == Tool::Crop {
            self.crop.init(self.image.size());
        }
        log::debug!(
            "image loaded: {}x{}",
            self.image.width(),
            self.image.height()
        );
        self.repaint = true;
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn image(&self) -> &RasterImage {
        &self.image
    }

    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// True while any drag (pan, stroke, pick, crop) is in progress, so
    /// the host can disable the rest of its UI.
    pub fn is_interacting(&self) -> bool {
        self.pan.is_grabbing()
            || self.stroke.is_drawing()
            || self.pipette.is_active()
            || self.crop.is_dragging()
    }

    /// True while the pan tool is dragging.
    pub fn is_grabbing(&self) -> bool {
        self.pan.is_grabbing()
    }

    /// Crop zone under the pointer (or being dragged), in crop mode only.
    pub fn crop_zone(&self) -> Option<CropZone> {
        (self.tool == Tool::Crop).then(|| self.crop.zone())
    }

    /// Crop rectangle in image px, in crop mode only.
    pub fn crop_rect(&self) -> Option<Rect> {
        if self.tool != Tool::Crop {
            return None;
        }
        self.crop.rect().map(|r| r.to_rect())
    }

    /// Brush preview diameter in viewport px.
    pub fn brush_diameter(&self) -> f64 {
        self.stroke.brush_diameter(&self.viewport)
    }

    /// Color for the pipette crosshair.
    pub fn crosshair_color(&self) -> Rgb {
        self.pipette.crosshair_color()
    }

    // =========================================================================
    // Tool parameters
    // =========================================================================

    /// Switch tools. Any drag in progress ends; entering crop mode starts
    /// with the rectangle covering the whole image.
    pub fn set_tool(&mut self, tool: Tool) {
        self.end_drags();
        self.tool = tool;
        if tool == Tool::Crop {
            self.init_crop();
        }
        log::debug!("tool: {:?}", tool);
        self.repaint = true;
    }

    pub fn zoom_direction(&self) -> ZoomDirection {
        self.zoom.direction()
    }

    pub fn set_zoom_direction(&mut self, direction: ZoomDirection) {
        self.zoom.set_direction(direction);
    }

    pub fn stroke_width(&self) -> f64 {
        self.stroke.width()
    }

    /// Set the brush diameter in image px. Non-positive values are ignored.
    pub fn set_stroke_width(&mut self, width: f64) {
        self.stroke.set_width(width);
    }

    pub fn stroke_color(&self) -> Rgb {
        self.stroke.color()
    }

    pub fn set_stroke_color(&mut self, color: Rgb) {
        self.stroke.set_color(color);
    }

    // =========================================================================
    // Crop
    // =========================================================================

    /// Reset the crop rectangle to the whole image.
    pub fn init_crop(&mut self) {
        self.crop.init(self.image.size());
        self.repaint = true;
    }

    pub fn reset_crop(&mut self) {
        self.init_crop();
    }

    /// Crop the image to the current rectangle.
    ///
    /// On success the cropped pixels become the whole image, the view is
    /// refitted and the rectangle resets to the new bounds. A rectangle that
    /// rounds to less than one pixel on either axis is ignored and nothing
    /// changes, as does calling this outside crop mode. Returns whether the
    /// crop was applied.
    pub fn apply_crop(&mut self) -> bool {
        if self.tool != Tool::Crop {
            return false;
        }
        let Some(rect) = self.crop.rect() else {
            return false;
        };
        let Some(cropped) = self.image.crop_region(rect.to_rect()) else {
            log::debug!(
                "crop ignored: {}x{} rectangle is degenerate",
                rect.width(),
                rect.height()
            );
            return false;
        };

        self.crop.pointer_up();
        self.image = cropped;
        self.viewport.set_image_size(self.image.size());
        self.crop.init(self.image.size());
        log::debug!(
            "crop applied: {}x{}",
            self.image.width(),
            self.image.height()
        );
        self.repaint = true;
        true
    }

    // =========================================================================
    // Input events
    // =========================================================================

    pub fn on_pointer_down(&mut self, pos: Point) {
        self.pointer = Some(pos);
        match self.tool {
            Tool::None => {}
            Tool::Grab => self.pan.pointer_down(pos),
            Tool::Draw => {
                self.stroke
                    .pointer_down(pos, &self.viewport, &mut self.image);
                self.repaint = true;
            }
            Tool::Zoom => {
                if self.zoom.click(pos, &mut self.viewport) {
                    self.repaint = true;
                }
            }
            Tool::Pipette => {
                let color = self.pipette.pointer_down(pos, &self.viewport, &self.image);
                self.stroke.set_color(color);
            }
            Tool::Crop => self.crop.pointer_down(pos, &self.viewport),
        }
    }

    pub fn on_pointer_move(&mut self, pos: Point) {
        self.pointer = Some(pos);
        let changed = match self.tool {
            Tool::None | Tool::Zoom => false,
            Tool::Grab => self.pan.pointer_move(pos, &mut self.viewport),
            Tool::Draw => self
                .stroke
                .pointer_move(pos, &self.viewport, &mut self.image),
            Tool::Pipette => {
                if let Some(color) = self.pipette.pointer_move(pos, &self.viewport, &self.image) {
                    self.stroke.set_color(color);
                }
                false
            }
            Tool::Crop => self.crop.pointer_move(pos, &self.viewport),
        };
        if changed {
            self.repaint = true;
        }
    }

    /// End every drag, whatever the active tool and wherever the pointer is.
    pub fn on_pointer_up(&mut self) {
        self.end_drags();
    }

    /// Zoom about the last observed pointer position (the viewport center
    /// if the pointer has not been seen yet).
    pub fn on_wheel(&mut self, delta_y: f64) {
        let anchor = self
            .pointer
            .unwrap_or_else(|| self.viewport.viewport_size().center());
        if self.zoom.wheel(delta_y, anchor, &mut self.viewport) {
            self.repaint = true;
        }
    }

    /// Track a resized viewport: refit the image and, in crop mode, restart
    /// the crop rectangle.
    pub fn on_viewport_resize(&mut self, size: Size) {
        self.viewport.set_viewport_size(size);
        if self.tool == Tool::Crop {
            self.crop.init(self.image.size());
        }
        log::debug!(
            "viewport resized to {}x{}, scale {:.4}",
            size.width,
            size.height,
            self.viewport.scale()
        );
        self.repaint = true;
    }

    fn end_drags(&mut self) {
        self.pan.pointer_up();
        self.stroke.pointer_up();
        self.pipette.pointer_up();
        self.crop.pointer_up();
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    pub fn needs_repaint(&self) -> bool {
        self.repaint
    }

    pub fn request_repaint(&mut self) {
        self.repaint = true;
    }

    /// Draw a frame if one is pending. Returns whether anything was drawn.
    pub fn render(&mut self) -> bool {
        if !self.repaint {
            return false;
        }
        self.draw();
        self.repaint = false;
        true
    }

    fn draw(&mut self) {
        let full = Rect::from_size(self.surface.size());
        self.surface.clear(full);
        self.surface.fill_rect(full, BACKDROP);
        self.surface
            .draw_image(&self.image, self.viewport.image_rect());

        if self.tool != Tool::Crop {
            return;
        }
        let Some(overlay) = self.crop.overlay(&self.viewport) else {
            return;
        };

        let [first, rest @ ..] = overlay.border;
        self.surface.begin_path();
        self.surface.move_to(first);
        for p in rest {
            self.surface.line_to(p);
        }
        self.surface.line_to(first);
        self.surface.stroke(OVERLAY_BORDER_WIDTH, OVERLAY_COLOR);

        self.surface.begin_path();
        for segment in &overlay.handles {
            self.surface.move_to(segment.from);
            self.surface.line_to(segment.to);
        }
        self.surface.stroke(OVERLAY_HANDLE_WIDTH, OVERLAY_COLOR);
    }
}

fn check_not_empty(image: &RasterImage) -> Result<(), EditorError> {
    if image.is_empty() {
        return Err(EditorError::EmptyImage {
            width: image.width(),
            height: image.height(),
        });
    }
    Ok(())
}
