//! Retouch WASM - WebAssembly bindings for the Retouch image editor
//!
//! This crate wires retouch-core to the browser: a canvas-backed
//! [`Surface`](retouch_core::Surface) and a single `JsEditor` class that
//! forwards pointer, wheel and resize events and draws on demand.
//!
//! # Module Structure
//!
//! - `editor` - The `JsEditor` session class
//! - `surface` - 2D canvas rendering backend
//! - `cursor` - CSS cursor names per tool and crop zone
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsEditor } from '@retouch/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const editor = new JsEditor(bytes, file.name, file.type, canvas, undefined);
//! editor.set_tool('crop');
//! editor.render();
//! ```

use wasm_bindgen::prelude::*;

mod cursor;
mod editor;
mod surface;

pub use cursor::{tool_cursor, zone_cursor};
pub use editor::JsEditor;
pub use surface::CanvasSurface;

/// Initialize the WASM module (called automatically on load).
///
/// Routes panics and `log` records to the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    // A second init (e.g. hot reload) finds the logger already set.
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
