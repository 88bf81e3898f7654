//! [`Surface`] over a browser canvas.

use retouch_core::{Point, RasterImage, Rect, Rgb, Size, Surface};
use wasm_bindgen::prelude::*;
use wasm_bindgen::{Clamped, JsCast};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ImageData};

/// Draws into an `HtmlCanvasElement` through its 2D context.
///
/// Image pixels are uploaded to an off-screen canvas and blitted from
/// there, so the upload happens only when the image revision changes
/// rather than on every frame.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    scratch: HtmlCanvasElement,
    scratch_ctx: CanvasRenderingContext2d,
    /// Revision of the image currently held by `scratch`.
    uploaded: Option<u64>,
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("missing 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| JsValue::from_str("2d context has an unexpected type"))
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = context_2d(&canvas)?;
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let scratch = document
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str("created element is not a canvas"))?;
        let scratch_ctx = context_2d(&scratch)?;

        Ok(Self {
            canvas,
            ctx,
            scratch,
            scratch_ctx,
            uploaded: None,
        })
    }

    /// Resize the backing store. Canvas state resets, so the next frame
    /// must be drawn from scratch.
    pub fn set_size(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn upload(&mut self, image: &RasterImage) -> Result<(), JsValue> {
        if self.uploaded == Some(image.revision()) {
            return Ok(());
        }
        let data = ImageData::new_with_u8_clamped_array_and_sh(
            Clamped(image.pixels()),
            image.width(),
            image.height(),
        )?;
        self.scratch.set_width(image.width());
        self.scratch.set_height(image.height());
        self.scratch_ctx.put_image_data(&data, 0.0, 0.0)?;
        self.uploaded = Some(image.revision());
        Ok(())
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> Size {
        Size::new(self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn clear(&mut self, rect: Rect) {
        self.ctx
            .clear_rect(rect.origin.x, rect.origin.y, rect.size.width, rect.size.height);
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        self.ctx.set_fill_style_str(&color.to_hex());
        self.ctx
            .fill_rect(rect.origin.x, rect.origin.y, rect.size.width, rect.size.height);
    }

    fn draw_image(&mut self, image: &RasterImage, dst: Rect) {
        if let Err(e) = self.upload(image) {
            log::warn!("image upload failed: {:?}", e);
            return;
        }
        self.ctx.set_image_smoothing_enabled(false);
        let _ = self.ctx.draw_image_with_html_canvas_element_and_dw_and_dh(
            &self.scratch,
            dst.origin.x,
            dst.origin.y,
            dst.size.width,
            dst.size.height,
        );
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, p: Point) {
        self.ctx.move_to(p.x, p.y);
    }

    fn line_to(&mut self, p: Point) {
        self.ctx.line_to(p.x, p.y);
    }

    fn stroke(&mut self, width: f64, color: Rgb) {
        self.ctx.set_line_width(width);
        self.ctx.set_stroke_style_str(&color.to_hex());
        self.ctx.stroke();
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn canvas(width: u32, height: u32) -> HtmlCanvasElement {
        let document = web_sys::window().unwrap().document().unwrap();
        let canvas = document
            .create_element("canvas")
            .unwrap()
            .dyn_into::<HtmlCanvasElement>()
            .unwrap();
        canvas.set_width(width);
        canvas.set_height(height);
        canvas
    }

    #[wasm_bindgen_test]
    fn test_size_reports_backing_store() {
        let mut surface = CanvasSurface::new(canvas(300, 200)).unwrap();
        assert_eq!(surface.size(), Size::new(300.0, 200.0));
        surface.set_size(640, 480);
        assert_eq!(surface.size(), Size::new(640.0, 480.0));
    }

    #[wasm_bindgen_test]
    fn test_draw_image_blits_pixels() {
        let mut surface = CanvasSurface::new(canvas(20, 20)).unwrap();
        let image = RasterImage::filled(4, 4, Rgb::new(255, 0, 0));
        surface.draw_image(&image, Rect::new(0.0, 0.0, 8.0, 8.0));

        let data = surface.ctx.get_image_data(1.0, 1.0, 1.0, 1.0).unwrap();
        assert_eq!(&data.data().0[..4], &[255, 0, 0, 255]);
        assert_eq!(surface.uploaded, Some(image.revision()));
    }
}
