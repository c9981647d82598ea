//! WASM-compatible wrapper types for image data.
//!
//! This module provides JavaScript-friendly types that wrap the core
//! Sheetsplit types, handling the conversion between Rust and JavaScript
//! data representations.

use sheetsplit_core::decode::SheetImage;
use wasm_bindgen::prelude::*;

/// A decoded sprite sheet wrapper for JavaScript.
///
/// This type wraps the core `SheetImage` type and provides a
/// JavaScript-friendly interface for accessing sheet dimensions and pixel
/// data.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a copy
/// is made to JavaScript memory as a `Uint8Array`. For performance-critical
/// code, keep the sheet in WASM memory and only extract pixels when needed.
///
/// The `free()` method can be called to explicitly release WASM memory, but
/// this is optional as wasm-bindgen's finalizer will handle cleanup
/// automatically.
#[wasm_bindgen]
pub struct JsSheetImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsSheetImage {
    /// Create a new JsSheetImage from dimensions and pixel data.
    ///
    /// # Arguments
    /// * `width` - Sheet width in pixels
    /// * `height` - Sheet height in pixels
    /// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsSheetImage {
        JsSheetImage {
            width,
            height,
            pixels,
        }
    }

    /// Get the sheet width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the sheet height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes in the pixel buffer (width * height * 4 for RGBA)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGBA pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup
    /// automatically. Call this if you want to immediately release memory
    /// for a large sheet.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsSheetImage {
    /// Create a JsSheetImage from a core SheetImage.
    pub(crate) fn from_sheet(img: SheetImage) -> Self {
        Self {
            width: img.width,
            height: img.height,
            pixels: img.pixels,
        }
    }

    /// Convert back to a core SheetImage.
    ///
    /// This is used when passing a sheet to core functions like slice.
    /// Note: This clones the pixel data.
    pub(crate) fn to_sheet(&self) -> SheetImage {
        SheetImage {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_sheet_image_creation() {
        let img = JsSheetImage {
            width: 100,
            height: 50,
            pixels: vec![0u8; 100 * 50 * 4],
        };
        assert_eq!(img.width(), 100);
        assert_eq!(img.height(), 50);
        assert_eq!(img.byte_length(), 20000);
    }

    #[test]
    fn test_js_sheet_image_pixels() {
        let pixels = vec![255u8, 128, 64, 255, 32, 16, 8, 0]; // 2 RGBA pixels
        let img = JsSheetImage {
            width: 2,
            height: 1,
            pixels: pixels.clone(),
        };
        assert_eq!(img.pixels(), pixels);
    }

    #[test]
    fn test_from_sheet() {
        let sheet = SheetImage {
            width: 200,
            height: 100,
            pixels: vec![0u8; 200 * 100 * 4],
        };
        let js_img = JsSheetImage::from_sheet(sheet);
        assert_eq!(js_img.width(), 200);
        assert_eq!(js_img.height(), 100);
        assert_eq!(js_img.byte_length(), 80000);
    }

    #[test]
    fn test_to_sheet() {
        let js_img = JsSheetImage {
            width: 50,
            height: 25,
            pixels: vec![128u8; 50 * 25 * 4],
        };
        let sheet = js_img.to_sheet();
        assert_eq!(sheet.width, 50);
        assert_eq!(sheet.height, 25);
        assert_eq!(sheet.pixels.len(), 5000);
    }
}
