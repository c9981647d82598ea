//! Sheetsplit Core - Sprite-sheet slicing library
//!
//! This crate provides the core functionality for Sheetsplit: slicing one
//! uploaded sprite-sheet image into a grid of individual sub-images,
//! optionally stripping a uniform background color from each cell, and
//! preparing the results for packaging.
//!
//! The three algorithmic pieces are the crop geometry model (`geometry`),
//! the grid slicer (`grid`), and the background stripper (`strip`). The
//! `decode`/`encode` modules are the raster I/O boundary, and `naming`
//! carries the filename contract the packaging collaborator uses.

pub mod decode;
pub mod encode;
pub mod geometry;
pub mod grid;
pub mod naming;
pub mod strip;

pub use geometry::CropGeometry;
pub use grid::{slice, slice_sheet, CellImage, CellResult};
pub use naming::cell_file_name;
pub use strip::{strip_background, ColorRef};

/// The externally supplied configuration surface for one slicing run.
///
/// Field values are validated only by the slicing policies: out-of-range
/// numbers flow through and produce placeholder cells rather than errors,
/// and a malformed `background_color` falls back to white.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SliceConfig {
    /// Number of grid rows (>= 1).
    pub rows: u32,
    /// Number of grid columns (>= 1).
    pub cols: u32,
    /// Crop rectangle origin, in source-image pixel space.
    pub start_x: f64,
    pub start_y: f64,
    /// Crop rectangle extent.
    pub total_width: f64,
    pub total_height: f64,
    /// Inward per-cell inset.
    pub padding_x: f64,
    pub padding_y: f64,
    /// Keep the crop rectangle's center fixed under origin/size edits.
    pub lock_center: bool,
    /// Reclassify near-background pixels as transparent.
    pub remove_background: bool,
    /// Background reference color as a `#RRGGBB` hex string.
    pub background_color: String,
}

impl Default for SliceConfig {
    fn default() -> Self {
        Self {
            rows: 4,
            cols: 6,
            start_x: 0.0,
            start_y: 0.0,
            total_width: 0.0,
            total_height: 0.0,
            padding_x: 0.0,
            padding_y: 0.0,
            lock_center: true,
            remove_background: true,
            background_color: "#FFFFFF".to_string(),
        }
    }
}

impl SliceConfig {
    /// Create a new SliceConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// The background reference color for this run, or `None` when stripping
    /// is disabled or the color field is blank.
    pub fn strip_reference(&self) -> Option<ColorRef> {
        if !self.remove_background || self.background_color.trim().is_empty() {
            return None;
        }
        Some(ColorRef::parse(&self.background_color))
    }
}
