//! Grid slicing: crop rectangle + grid dimensions -> per-cell rasters.
//!
//! The slicer walks the grid in row-major order and renders each cell's
//! padding-adjusted source rectangle onto a fresh output surface. Cells are
//! fully independent; a degenerate cell yields the placeholder sentinel and
//! never fails the run.

use crate::decode::{decode_image, SheetImage};
use crate::geometry::CropGeometry;
use crate::strip::{strip_background, ColorRef};
use crate::SliceConfig;

use super::{CellImage, CellResult};

/// Slice a decoded sprite sheet into `rows * cols` cells.
///
/// For each `(row, col)` in row-major order, the cell's source rectangle is
/// derived from the unrounded ideal cell span:
///
/// ```text
/// src_x = origin_x + col * cell_width + padding_x
/// src_y = origin_y + row * cell_height + padding_y
/// src_w = cell_width - 2 * padding_x
/// src_h = cell_height - 2 * padding_y
/// ```
///
/// Non-positive `src_w`/`src_h` emits the placeholder sentinel for that cell
/// and continues. Otherwise the cell is rendered onto a surface of exactly
/// `round(src_w) x round(src_h)` pixels and, when a reference color is
/// supplied, handed to the background stripper.
///
/// The output order is the contract downstream naming relies on: index `i`
/// corresponds to `row = i / cols`, `col = i % cols`.
///
/// Neither `image` nor `geometry` is mutated.
pub fn slice(
    image: &SheetImage,
    geometry: &CropGeometry,
    strip: Option<ColorRef>,
) -> Vec<CellResult> {
    let rows = geometry.rows();
    let cols = geometry.cols();
    let cell_width = geometry.cell_width();
    let cell_height = geometry.cell_height();
    let padding_x = geometry.padding_x();
    let padding_y = geometry.padding_y();

    let mut results = Vec::with_capacity((rows as usize) * (cols as usize));

    for row in 0..rows {
        for col in 0..cols {
            let src_x = geometry.origin_x() + col as f64 * cell_width + padding_x;
            let src_y = geometry.origin_y() + row as f64 * cell_height + padding_y;
            let src_w = cell_width - 2.0 * padding_x;
            let src_h = cell_height - 2.0 * padding_y;

            let cell = if src_w <= 0.0 || src_h <= 0.0 {
                CellImage::placeholder()
            } else {
                match render_cell(image, src_x, src_y, src_w, src_h) {
                    Some(mut cell) => {
                        if let Some(reference) = strip {
                            strip_background(&mut cell.pixels, reference, true);
                        }
                        cell
                    }
                    None => CellImage::placeholder(),
                }
            };

            results.push(CellResult {
                row,
                col,
                image: cell,
            });
        }
    }

    results
}

/// The full soft-failure pipeline: decode, then slice with the config's grid
/// and stripping settings.
///
/// A sheet that fails to decode resolves to an empty sequence; no error
/// propagates and no partial results are produced. Geometry is built from
/// the config's raw fields (the reactive model governs editing, not this
/// one-shot path).
pub fn slice_sheet(bytes: &[u8], config: &SliceConfig) -> Vec<CellResult> {
    let image = match decode_image(bytes) {
        Ok(image) => image,
        Err(_) => return Vec::new(),
    };

    let geometry = CropGeometry::from_config(config);
    slice(&image, &geometry, config.strip_reference())
}

/// Render one cell's fractional source rectangle onto a fresh surface of the
/// rounded extent.
///
/// Sampling is deterministic nearest-neighbor at output pixel centers, so
/// the surface matches the rounded source extent with no additional scaling.
/// Samples falling outside the source image are fully transparent. Returns
/// `None` when the rounded extent collapses to zero in either dimension.
fn render_cell(
    image: &SheetImage,
    src_x: f64,
    src_y: f64,
    src_w: f64,
    src_h: f64,
) -> Option<CellImage> {
    let out_w = src_w.round() as u32;
    let out_h = src_h.round() as u32;
    if out_w == 0 || out_h == 0 {
        return None;
    }

    let mut pixels = vec![0u8; (out_w as usize) * (out_h as usize) * 4];

    for dy in 0..out_h {
        let sample_y = (src_y + (dy as f64 + 0.5) * src_h / out_h as f64).floor() as i64;
        let row_start = (dy as usize) * (out_w as usize) * 4;

        for dx in 0..out_w {
            let sample_x = (src_x + (dx as f64 + 0.5) * src_w / out_w as f64).floor() as i64;
            let rgba = image.sample(sample_x, sample_y);

            let idx = row_start + (dx as usize) * 4;
            pixels[idx..idx + 4].copy_from_slice(&rgba);
        }
    }

    Some(CellImage::new(out_w, out_h, pixels))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a sheet where each pixel encodes its position: R = x, G = y.
    fn position_sheet(width: u32, height: u32) -> SheetImage {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push((x % 256) as u8);
                pixels.push((y % 256) as u8);
                pixels.push(0);
                pixels.push(255);
            }
        }
        SheetImage::new(width, height, pixels)
    }

    /// Geometry covering the full sheet with the given grid.
    fn full_geometry(width: f64, height: f64, rows: u32, cols: u32) -> CropGeometry {
        let mut geo = CropGeometry::new();
        geo.reset_for(width, height);
        geo.settle();
        geo.set_grid(rows, cols);
        geo
    }

    #[test]
    fn test_full_sheet_two_by_three() {
        let sheet = position_sheet(120, 60);
        let geo = full_geometry(120.0, 60.0, 2, 3);

        let cells = slice(&sheet, &geo, None);

        assert_eq!(cells.len(), 6);
        for cell in &cells {
            assert_eq!(cell.image.width, 40);
            assert_eq!(cell.image.height, 30);
        }

        let positions: Vec<(u32, u32)> = cells.iter().map(|c| (c.row, c.col)).collect();
        assert_eq!(
            positions,
            vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]
        );
    }

    #[test]
    fn test_index_position_contract() {
        let sheet = position_sheet(60, 60);
        let geo = full_geometry(60.0, 60.0, 3, 4);

        let cells = slice(&sheet, &geo, None);

        for (i, cell) in cells.iter().enumerate() {
            assert_eq!(cell.row, i as u32 / 4);
            assert_eq!(cell.col, i as u32 % 4);
        }
    }

    #[test]
    fn test_cell_pixels_come_from_cell_region() {
        let sheet = position_sheet(120, 60);
        let geo = full_geometry(120.0, 60.0, 2, 3);

        let cells = slice(&sheet, &geo, None);

        // Cell (1, 2) spans x in [80, 120), y in [30, 60).
        let cell = &cells[5];
        assert_eq!((cell.row, cell.col), (1, 2));
        assert_eq!(cell.image.pixels[0..2], [80, 30]);

        // Last pixel of the cell is the sheet's bottom-right corner pixel.
        let last = cell.image.pixels.len() - 4;
        assert_eq!(cell.image.pixels[last..last + 2], [119, 59]);
    }

    #[test]
    fn test_padding_insets_cells() {
        let sheet = position_sheet(120, 60);
        let mut geo = full_geometry(120.0, 60.0, 2, 3);
        geo.set_padding(5.0, 5.0);

        let cells = slice(&sheet, &geo, None);

        assert_eq!(cells.len(), 6);
        for cell in &cells {
            assert_eq!(cell.image.width, 30); // 40 - 2 * 5
            assert_eq!(cell.image.height, 20); // 30 - 2 * 5
        }

        // First cell starts at (5, 5).
        assert_eq!(cells[0].image.pixels[0..2], [5, 5]);
    }

    #[test]
    fn test_excessive_padding_yields_all_placeholders() {
        // Cell width 40, padding 25 -> src_w = 40 - 50 = -10 for every cell.
        let sheet = position_sheet(120, 60);
        let mut geo = full_geometry(120.0, 60.0, 2, 3);
        geo.set_padding(25.0, 0.0);

        let cells = slice(&sheet, &geo, None);

        assert_eq!(cells.len(), 6);
        for cell in &cells {
            assert!(cell.image.is_placeholder());
        }
    }

    #[test]
    fn test_half_cell_padding_is_degenerate() {
        // padding_x == cell_width / 2 makes src_w exactly zero.
        let sheet = position_sheet(120, 60);
        let mut geo = full_geometry(120.0, 60.0, 2, 3);
        geo.set_padding(20.0, 0.0);

        let cells = slice(&sheet, &geo, None);

        for cell in &cells {
            assert!(cell.image.is_placeholder());
        }
    }

    #[test]
    fn test_crop_region_beyond_image_is_transparent() {
        // Crop rectangle extends 20px past the right edge of a 100px sheet.
        let sheet = position_sheet(100, 60);
        let mut geo = full_geometry(100.0, 60.0, 2, 3);
        geo.set_lock_center(false);
        geo.set_size(Some(120.0), None);

        let cells = slice(&sheet, &geo, None);

        // Rightmost column samples x in [80, 120); its right half is outside.
        let cell = &cells[2];
        assert_eq!(cell.image.width, 40);
        assert_eq!(cell.image.pixels[0..4], [80, 0, 0, 255]);

        let last = cell.image.pixels.len() - 4;
        assert_eq!(cell.image.pixels[last..last + 4], [0, 0, 0, 0]);
    }

    #[test]
    fn test_fractional_cells_round_per_cell() {
        // 100 / 3 = 33.33... -> every cell surface rounds to 33 wide.
        let sheet = position_sheet(100, 30);
        let geo = full_geometry(100.0, 30.0, 1, 3);

        let cells = slice(&sheet, &geo, None);

        for cell in &cells {
            assert_eq!(cell.image.width, 33);
        }

        // Cell origins keep the unrounded spacing: col 2 starts at 66.67.
        assert_eq!(cells[2].image.pixels[0], 67);
    }

    #[test]
    fn test_source_not_mutated() {
        let sheet = position_sheet(40, 40);
        let before = sheet.pixels.clone();
        let geo = full_geometry(40.0, 40.0, 2, 2);

        let _ = slice(&sheet, &geo, Some(ColorRef::WHITE));

        assert_eq!(sheet.pixels, before);
    }

    #[test]
    fn test_stripping_applied_per_cell() {
        // Uniform white sheet: stripping empties every cell.
        let sheet = SheetImage::new(40, 40, vec![255u8; 40 * 40 * 4]);
        let geo = full_geometry(40.0, 40.0, 2, 2);

        let cells = slice(&sheet, &geo, Some(ColorRef::WHITE));

        for cell in &cells {
            assert!(cell.image.pixels.chunks_exact(4).all(|px| px[3] == 0));
        }
    }

    #[test]
    fn test_no_stripping_without_reference() {
        let sheet = SheetImage::new(40, 40, vec![255u8; 40 * 40 * 4]);
        let geo = full_geometry(40.0, 40.0, 2, 2);

        let cells = slice(&sheet, &geo, None);

        for cell in &cells {
            assert!(cell.image.pixels.chunks_exact(4).all(|px| px[3] == 255));
        }
    }

    #[test]
    fn test_slice_sheet_decode_failure_is_empty() {
        let config = SliceConfig::default();
        let cells = slice_sheet(&[0xDE, 0xAD, 0xBE, 0xEF], &config);
        assert!(cells.is_empty());
    }

    #[test]
    fn test_slice_sheet_end_to_end() {
        let sheet = position_sheet(120, 60);
        let mut png = Vec::new();
        sheet
            .to_rgba_image()
            .unwrap()
            .write_to(
                &mut std::io::Cursor::new(&mut png),
                image::ImageFormat::Png,
            )
            .unwrap();

        let config = SliceConfig {
            rows: 2,
            cols: 3,
            total_width: 120.0,
            total_height: 60.0,
            remove_background: false,
            ..SliceConfig::default()
        };

        let cells = slice_sheet(&png, &config);

        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0].image.width, 40);
        assert_eq!(cells[0].image.height, 30);
    }

    #[test]
    fn test_slice_sheet_blank_color_disables_stripping() {
        let sheet = SheetImage::new(12, 12, vec![255u8; 12 * 12 * 4]);
        let mut png = Vec::new();
        sheet
            .to_rgba_image()
            .unwrap()
            .write_to(
                &mut std::io::Cursor::new(&mut png),
                image::ImageFormat::Png,
            )
            .unwrap();

        let config = SliceConfig {
            rows: 1,
            cols: 1,
            total_width: 12.0,
            total_height: 12.0,
            remove_background: true,
            background_color: "   ".to_string(),
            ..SliceConfig::default()
        };

        let cells = slice_sheet(&png, &config);

        assert_eq!(cells.len(), 1);
        assert!(cells[0].image.pixels.chunks_exact(4).all(|px| px[3] == 255));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
