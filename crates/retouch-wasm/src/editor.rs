//! The editor session exposed to JavaScript.
//!
//! # Example
//!
//! ```typescript
//! import init, { JsEditor } from '@retouch/wasm';
//!
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const editor = new JsEditor(bytes, file.name, file.type, canvas, { grab_space: 10 });
//!
//! editor.set_tool('grab');
//! canvas.addEventListener('pointerdown', (e) => editor.pointer_down(e.offsetX, e.offsetY));
//! canvas.addEventListener('pointermove', (e) => {
//!     editor.pointer_move(e.offsetX, e.offsetY);
//!     canvas.style.cursor = editor.cursor();
//! });
//! window.addEventListener('pointerup', () => editor.pointer_up());
//! canvas.addEventListener('wheel', (e) => editor.wheel(e.deltaY));
//!
//! const frame = () => {
//!     editor.render();
//!     requestAnimationFrame(frame);
//! };
//! requestAnimationFrame(frame);
//! ```

use retouch_core::codec::{self, MIME_JPEG, MIME_PNG};
use retouch_core::{Editor, EditorConfig, Point, Rgb, Size, Tool, ZoomDirection};
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::cursor::tool_cursor;
use crate::surface::CanvasSurface;

fn to_js(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// MIME type to export with: the declared type when we can encode it,
/// otherwise whatever the bytes say, falling back to PNG.
fn resolve_mime(declared: &str, bytes: &[u8]) -> &'static str {
    match declared {
        MIME_PNG => MIME_PNG,
        MIME_JPEG => MIME_JPEG,
        _ => codec::sniff_mime(bytes).unwrap_or(MIME_PNG),
    }
}

fn parse_zoom_direction(value: &str) -> Option<ZoomDirection> {
    match value {
        "in" => Some(ZoomDirection::In),
        "out" => Some(ZoomDirection::Out),
        _ => None,
    }
}

/// An image editing session bound to a canvas.
#[wasm_bindgen]
pub struct JsEditor {
    inner: Editor<CanvasSurface>,
    name: String,
    mime_type: String,
}

#[wasm_bindgen]
impl JsEditor {
    /// Decode `bytes` and start editing it on `canvas`.
    ///
    /// # Arguments
    /// * `bytes` - PNG or JPEG file contents
    /// * `name` - File name, kept for the download link
    /// * `mime_type` - Declared file type (e.g. `File.type`)
    /// * `canvas` - Canvas to render into; its current size is the viewport
    /// * `config` - Optional partial `EditorConfig` object
    ///
    /// # Errors
    /// Returns an error if the file cannot be decoded, the config is invalid,
    /// or the canvas has no 2D context.
    #[wasm_bindgen(constructor)]
    pub fn new(
        bytes: &[u8],
        name: String,
        mime_type: String,
        canvas: HtmlCanvasElement,
        config: JsValue,
    ) -> Result<JsEditor, JsValue> {
        let config: EditorConfig = if config.is_undefined() || config.is_null() {
            EditorConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| JsValue::from_str(&format!("Invalid editor config: {}", e)))?
        };

        let image = codec::decode_image(bytes).map_err(to_js)?;
        let surface = CanvasSurface::new(canvas)?;
        let inner = Editor::new(image, surface, config).map_err(to_js)?;

        Ok(JsEditor {
            inner,
            mime_type: resolve_mime(&mime_type, bytes).to_string(),
            name,
        })
    }

    /// Replace the image with a new file, keeping the tool and settings.
    pub fn load(&mut self, bytes: &[u8], name: String, mime_type: String) -> Result<(), JsValue> {
        let image = codec::decode_image(bytes).map_err(to_js)?;
        self.inner.load_image(image).map_err(to_js)?;
        self.mime_type = resolve_mime(&mime_type, bytes).to_string();
        self.name = name;
        Ok(())
    }

    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        self.name.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn mime_type(&self) -> String {
        self.mime_type.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.image().width()
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.image().height()
    }

    #[wasm_bindgen(getter)]
    pub fn scale(&self) -> f64 {
        self.inner.viewport().scale()
    }

    // =========================================================================
    // Input
    // =========================================================================

    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.inner.on_pointer_down(Point::new(x, y));
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.inner.on_pointer_move(Point::new(x, y));
    }

    /// End any drag. Call from a window-level listener so releases outside
    /// the canvas are seen too.
    pub fn pointer_up(&mut self) {
        self.inner.on_pointer_up();
    }

    pub fn wheel(&mut self, delta_y: f64) {
        self.inner.on_wheel(delta_y);
    }

    /// Resize the canvas backing store and refit the image.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.inner.surface_mut().set_size(width, height);
        self.inner
            .on_viewport_resize(Size::new(width as f64, height as f64));
    }

    /// True while a drag is in progress; the host should disable its other
    /// controls meanwhile.
    pub fn is_interacting(&self) -> bool {
        self.inner.is_interacting()
    }

    // =========================================================================
    // Tools
    // =========================================================================

    /// Select a tool: `none`, `grab`, `draw`, `zoom`, `pipette` or `crop`.
    pub fn set_tool(&mut self, name: &str) -> Result<(), JsValue> {
        let tool =
            Tool::from_name(name).ok_or_else(|| JsValue::from_str(&format!("Unknown tool: {}", name)))?;
        self.inner.set_tool(tool);
        Ok(())
    }

    pub fn tool(&self) -> String {
        self.inner.tool().name().to_string()
    }

    /// Set the zoom tool direction: `in` or `out`.
    pub fn set_zoom_direction(&mut self, direction: &str) -> Result<(), JsValue> {
        let direction = parse_zoom_direction(direction).ok_or_else(|| {
            JsValue::from_str(&format!("Unknown zoom direction: {}", direction))
        })?;
        self.inner.set_zoom_direction(direction);
        Ok(())
    }

    pub fn set_stroke_width(&mut self, width: f64) {
        self.inner.set_stroke_width(width);
    }

    pub fn stroke_width(&self) -> f64 {
        self.inner.stroke_width()
    }

    /// Set the brush color from a `#rgb` or `#rrggbb` string.
    pub fn set_stroke_color(&mut self, color: &str) -> Result<(), JsValue> {
        let color =
            Rgb::from_hex(color).ok_or_else(|| JsValue::from_str(&format!("Invalid color: {}", color)))?;
        self.inner.set_stroke_color(color);
        Ok(())
    }

    /// Brush color as `#rrggbb`; changes when the pipette picks.
    pub fn stroke_color(&self) -> String {
        self.inner.stroke_color().to_hex()
    }

    /// Brush preview diameter in canvas px.
    pub fn brush_diameter(&self) -> f64 {
        self.inner.brush_diameter()
    }

    /// Pipette crosshair color as `#rrggbb`.
    pub fn crosshair_color(&self) -> String {
        self.inner.crosshair_color().to_hex()
    }

    /// CSS cursor for the canvas in the current state.
    pub fn cursor(&self) -> String {
        tool_cursor(
            self.inner.tool(),
            self.inner.crop_zone(),
            self.inner.is_grabbing(),
            self.inner.zoom_direction(),
        )
        .to_string()
    }

    // =========================================================================
    // Crop
    // =========================================================================

    pub fn init_crop(&mut self) {
        self.inner.init_crop();
    }

    /// Crop to the current rectangle. Returns `false` if nothing changed.
    pub fn apply_crop(&mut self) -> bool {
        self.inner.apply_crop()
    }

    pub fn reset_crop(&mut self) {
        self.inner.reset_crop();
    }

    // =========================================================================
    // Rendering and export
    // =========================================================================

    pub fn needs_repaint(&self) -> bool {
        self.inner.needs_repaint()
    }

    /// Force the next `render` to draw.
    pub fn request_repaint(&mut self) {
        self.inner.request_repaint();
    }

    /// Draw a frame if anything changed. Call once per animation frame.
    pub fn render(&mut self) -> bool {
        self.inner.render()
    }

    /// Encode the edited image with the file's MIME type.
    pub fn export(&self) -> Result<Vec<u8>, JsValue> {
        codec::encode_image(self.inner.image(), &self.mime_type).map_err(to_js)
    }
}
