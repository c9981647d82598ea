//! Cell output types for the grid slicer.

use crate::encode::{encode_png, EncodeError};

/// One rendered cell raster with RGBA pixel data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellImage {
    /// Cell width in pixels.
    pub width: u32,
    /// Cell height in pixels.
    pub height: u32,
    /// RGBA pixel data in row-major order (4 bytes per pixel).
    pub pixels: Vec<u8>,
}

impl CellImage {
    /// Create a new CellImage with the given dimensions and pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            (width as usize) * (height as usize) * 4,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// The fixed sentinel emitted for degenerate cells: a single fully
    /// transparent pixel.
    pub fn placeholder() -> Self {
        Self {
            width: 1,
            height: 1,
            pixels: vec![0, 0, 0, 0],
        }
    }

    /// Whether this cell is the degenerate-cell placeholder sentinel.
    pub fn is_placeholder(&self) -> bool {
        self.width == 1 && self.height == 1 && self.pixels == [0, 0, 0, 0]
    }

    /// Encode this cell as lossless RGBA PNG.
    pub fn to_png(&self) -> Result<Vec<u8>, EncodeError> {
        encode_png(&self.pixels, self.width, self.height)
    }
}

/// One slicer output: a cell raster and its grid position.
///
/// The slicer emits these in row-major order; that order is the contract the
/// packaging collaborator's sequential naming relies on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellResult {
    /// Zero-based grid row.
    pub row: u32,
    /// Zero-based grid column.
    pub col: u32,
    /// The rendered raster, or the placeholder sentinel for degenerate cells.
    pub image: CellImage,
}
