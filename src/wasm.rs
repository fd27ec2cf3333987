//! WebAssembly bindings for monodither

use image::DynamicImage;
use wasm_bindgen::prelude::*;

use crate::{Ditherer, Mode, MonoditherError, DEFAULT_WIDTH};

#[wasm_bindgen]
pub struct WasmDitherer {
    width: Option<u32>,
    mode: Mode,
}

#[wasm_bindgen]
impl WasmDitherer {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmDitherer {
        WasmDitherer {
            width: Some(DEFAULT_WIDTH),
            mode: Mode::Atkinson,
        }
    }

    /// Target width; 0 keeps the source resolution.
    #[wasm_bindgen]
    pub fn set_width(&mut self, width: u32) {
        self.width = (width > 0).then_some(width);
    }

    /// One of `atkinson`, `average-mono`, `average-threshold`.
    #[wasm_bindgen]
    pub fn set_mode(&mut self, mode: &str) -> Result<(), JsValue> {
        self.mode = mode.parse().map_err(to_js)?;
        Ok(())
    }

    /// Width of the image `dither_rgba` returns for a source of `width × height`.
    #[wasm_bindgen]
    pub fn output_width(&self, width: u32) -> u32 {
        self.width.unwrap_or(width)
    }

    #[wasm_bindgen]
    pub fn output_height(&self, width: u32, height: u32) -> u32 {
        match self.width {
            Some(target) if width > 0 && height > 0 => crate::io::scaled_height(width, height, target),
            _ => height,
        }
    }

    /// Dither raw RGBA8 pixels. Returns one gray byte per output pixel, row-major.
    #[wasm_bindgen]
    pub fn dither_rgba(&self, image_data: &[u8], width: u32, height: u32) -> Result<Vec<u8>, JsValue> {
        let len = image_data.len();
        let img = image::RgbaImage::from_raw(width, height, image_data.to_vec())
            .ok_or(MonoditherError::InvalidDimensions { width, height, len })
            .map_err(to_js)?;

        let buffer = Ditherer::new()
            .with_width(self.width)
            .with_mode(self.mode)
            .process(&DynamicImage::ImageRgba8(img));
        Ok(buffer.into_vec())
    }
}

impl Default for WasmDitherer {
    fn default() -> Self {
        Self::new()
    }
}

fn to_js(err: MonoditherError) -> JsValue {
    JsValue::from_str(&err.to_string())
}
