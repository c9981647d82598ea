//! Sheet decoding WASM bindings.
//!
//! This module exposes the sheetsplit-core image decoding function to
//! JavaScript, turning an uploaded file's bytes into a `JsSheetImage` the
//! preview and slicing paths can share.
//!
//! # Example
//!
//! ```typescript
//! import { decode_sheet } from '@sheetsplit/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const sheet = decode_sheet(bytes);
//! console.log(`Decoded ${sheet.width}x${sheet.height} sheet`);
//! ```

use crate::types::JsSheetImage;
use sheetsplit_core::decode;
use wasm_bindgen::prelude::*;

/// Decode a sprite-sheet image (PNG or JPEG) from bytes.
///
/// The format is guessed from the file's magic bytes. The decoded result is
/// always RGBA so transparency survives into the slicing pipeline.
///
/// # Arguments
///
/// * `bytes` - The raw image file bytes as a `Uint8Array`
///
/// # Returns
///
/// A `JsSheetImage` containing the decoded RGBA pixel data, or an error if
/// decoding fails.
///
/// # Errors
///
/// Returns an error if the bytes are not a recognized image format or the
/// file is corrupted. Callers that want the pipeline's soft-failure
/// semantics should use `slice_sheet`, which maps decode failure to an
/// empty result set instead.
///
/// # Example
///
/// ```typescript
/// const bytes = new Uint8Array(await file.arrayBuffer());
/// const sheet = decode_sheet(bytes);
/// console.log(`Decoded ${sheet.width}x${sheet.height}`);
/// ```
#[wasm_bindgen]
pub fn decode_sheet(bytes: &[u8]) -> Result<JsSheetImage, JsValue> {
    decode::decode_image(bytes)
        .map(JsSheetImage::from_sheet)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
