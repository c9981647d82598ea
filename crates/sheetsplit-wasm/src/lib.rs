//! Sheetsplit WASM - WebAssembly bindings for Sheetsplit
//!
//! This crate provides WASM bindings to expose the sheetsplit-core
//! functionality to JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for sheet data
//! - `decode` - Sheet decoding bindings (PNG/JPEG)
//! - `geometry` - Crop model bindings (lock-center protocol, reset/settle)
//! - `slice` - Grid slicing bindings (PNG cells with sequential names)
//!
//! # Usage
//!
//! ```typescript
//! import init, { CropModel, decode_sheet, slice_sheet } from '@sheetsplit/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! // Decode the uploaded sheet and fit the crop model to it
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const sheet = decode_sheet(bytes);
//! const model = new CropModel();
//! model.reset_for(sheet.width, sheet.height);
//! model.settle();
//!
//! // Slice into PNG cells
//! const cells = slice_sheet(bytes, model.to_json());
//! console.log(`Sliced ${cells.length} cells`);
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod geometry;
mod slice;
mod types;

// Re-export public types
pub use decode::decode_sheet;
pub use geometry::CropModel;
pub use slice::{slice_image, slice_sheet, JsCellSlice};
pub use types::JsSheetImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
