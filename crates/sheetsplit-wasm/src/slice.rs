//! Grid slicing WASM bindings.
//!
//! This module exposes the slicing pipeline to JavaScript: sheet bytes plus
//! a configuration object in, an ordered array of encoded cells out. Cells
//! come back PNG-encoded and pre-named so the packaging collaborator can
//! stream them straight into a ZIP or a single-file download.
//!
//! # Example
//!
//! ```typescript
//! import { slice_sheet } from '@sheetsplit/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const cells = slice_sheet(bytes, {
//!   rows: 2, cols: 3,
//!   startX: 0, startY: 0,
//!   totalWidth: 120, totalHeight: 60,
//!   removeBackground: true, backgroundColor: '#FFFFFF',
//! });
//!
//! for (const cell of cells) {
//!   zip.file(cell.file_name, cell.png());
//! }
//! ```

use crate::types::JsSheetImage;
use sheetsplit_core::{cell_file_name, slice, slice_sheet as core_slice_sheet};
use sheetsplit_core::{CellResult, CropGeometry, SliceConfig};
use wasm_bindgen::prelude::*;

/// One encoded output cell: grid position, raster dimensions, PNG bytes,
/// and the sequential file name packaging uses.
#[wasm_bindgen]
pub struct JsCellSlice {
    row: u32,
    col: u32,
    width: u32,
    height: u32,
    file_name: String,
    png: Vec<u8>,
}

#[wasm_bindgen]
impl JsCellSlice {
    /// Get the zero-based grid row
    #[wasm_bindgen(getter)]
    pub fn row(&self) -> u32 {
        self.row
    }

    /// Get the zero-based grid column
    #[wasm_bindgen(getter)]
    pub fn col(&self) -> u32 {
        self.col
    }

    /// Get the cell raster width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the cell raster height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the sequential output file name (`emoji_001.png`, ...)
    #[wasm_bindgen(getter)]
    pub fn file_name(&self) -> String {
        self.file_name.clone()
    }

    /// Returns the PNG-encoded cell as a Uint8Array.
    ///
    /// Note: This creates a copy of the encoded bytes.
    pub fn png(&self) -> Vec<u8> {
        self.png.clone()
    }
}

/// Slice an encoded sprite sheet into PNG cells.
///
/// This is the soft-failure pipeline: a sheet that fails to decode resolves
/// to an empty array, never an error. Cells are returned in row-major order,
/// which is the order the sequential file names are assigned in.
///
/// # Arguments
///
/// * `bytes` - The raw image file bytes as a `Uint8Array`
/// * `config` - Configuration object (camelCase keys, missing fields fall
///   back to defaults)
///
/// # Errors
///
/// Returns an error only if the configuration object cannot be
/// deserialized or a rendered cell fails to encode.
#[wasm_bindgen]
pub fn slice_sheet(bytes: &[u8], config: JsValue) -> Result<js_sys::Array, JsValue> {
    let config: SliceConfig =
        serde_wasm_bindgen::from_value(config).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let cells = core_slice_sheet(bytes, &config);
    encode_cells(cells)
}

/// Slice an already decoded sheet into PNG cells.
///
/// Use this when the sheet was decoded once for preview and is being
/// re-sliced as the configuration changes; it skips the decode step of
/// `slice_sheet`.
#[wasm_bindgen]
pub fn slice_image(image: &JsSheetImage, config: JsValue) -> Result<js_sys::Array, JsValue> {
    let config: SliceConfig =
        serde_wasm_bindgen::from_value(config).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let sheet = image.to_sheet();
    let geometry = CropGeometry::from_config(&config);
    let cells = slice(&sheet, &geometry, config.strip_reference());
    encode_cells(cells)
}

/// Encode cell rasters to PNG and collect them into a JS array.
fn encode_cells(cells: Vec<CellResult>) -> Result<js_sys::Array, JsValue> {
    let out = js_sys::Array::new();

    for (index, cell) in cells.into_iter().enumerate() {
        let png = cell
            .image
            .to_png()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let encoded = JsCellSlice {
            row: cell.row,
            col: cell.col,
            width: cell.image.width,
            height: cell.image.height,
            file_name: cell_file_name(index),
            png,
        };
        out.push(&JsValue::from(encoded));
    }

    Ok(out)
}

/// Tests for slice bindings.
///
/// Note: The binding entry points return `Result<T, JsValue>` and take
/// `JsValue` configs, which only work on wasm32 targets. The slicing and
/// encoding logic is covered by the tests in `sheetsplit_core`.
#[cfg(test)]
mod tests {
    use sheetsplit_core::{cell_file_name, slice_sheet, SliceConfig};

    #[test]
    fn test_core_pipeline_and_naming_agree() {
        // Garbage bytes: soft failure, nothing to name.
        let cells = slice_sheet(&[1, 2, 3], &SliceConfig::default());
        assert!(cells.is_empty());

        // The names the bindings would assign are purely positional.
        assert_eq!(cell_file_name(0), "emoji_001.png");
        assert_eq!(cell_file_name(5), "emoji_006.png");
    }
}
