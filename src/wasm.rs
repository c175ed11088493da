//! WebAssembly bindings for picascii

use crate::pipeline::{self, Options};
use crate::render::RenderMode;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmConverter {
    options: Options,
}

#[wasm_bindgen]
impl WasmConverter {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmConverter {
        WasmConverter { options: Options::default() }
    }

    #[wasm_bindgen]
    pub fn set_width(&mut self, width: u32) {
        self.options.width = width;
    }

    /// Unknown names fall back to `simple`, as on the command line.
    #[wasm_bindgen]
    pub fn set_mode(&mut self, name: &str) {
        self.options.mode = RenderMode::from_name_lossy(name);
    }

    #[wasm_bindgen]
    pub fn set_invert(&mut self, enabled: bool) {
        self.options.invert = enabled;
    }

    /// Convert raw RGBA pixels (as from a canvas `ImageData`) to glyph text.
    #[wasm_bindgen]
    pub fn convert(&self, image_data: &[u8], width: u32, height: u32) -> Result<String, JsValue> {
        let img = image::RgbaImage::from_raw(width, height, image_data.to_vec())
            .ok_or_else(|| JsValue::from_str("Invalid image dimensions"))?;
        let rgb = image::DynamicImage::ImageRgba8(img).to_rgb8();
        pipeline::run(&rgb, &self.options).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl Default for WasmConverter {
    fn default() -> Self {
        Self::new()
    }
}
