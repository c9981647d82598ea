//! Crop rectangle geometry with the "lock center" policy.
//!
//! The crop rectangle's four scalar fields form two independent 1-D
//! constraint pairs, `(origin_x, width)` and `(origin_y, height)`. While
//! `lock_center` is enabled, an external edit to one member of a pair
//! triggers exactly one compensating write to the other member so the
//! rectangle's center point stays fixed:
//!
//! - editing `origin_x` by `d` writes `width -= 2 * d`
//! - editing `width` by `d` writes `origin_x -= d / 2`
//!
//! The compensating write is programmatic and must not re-trigger the
//! opposite-direction rule, otherwise a single edit would cascade forever.
//! An explicit "update in progress" guard suppresses propagation for the
//! duration of one logical edit; the guard is only released after the
//! dependent observer has run.
//!
//! # Reset and deferred restoration
//!
//! Loading a new source image resets the rectangle to cover the full image.
//! During the reset, `lock_center` is suspended so the four fields can be
//! written independently without compensation kicking in between writes. The
//! prior `lock_center` value is restored on the *next* scheduling turn, not
//! synchronously; [`CropGeometry::settle`] is that turn boundary, and every
//! public mutating operation settles at entry so the restoration has landed
//! before any later edit is processed.
//!
//! # Failure semantics
//!
//! No operation here returns an error. Out-of-range numeric input flows
//! through unchanged; the slicer treats the resulting degenerate cells
//! specially instead of failing.

use crate::SliceConfig;

/// The crop rectangle, grid dimensions, and per-cell padding that together
/// describe how a sprite sheet is sliced.
#[derive(Debug, Clone)]
pub struct CropGeometry {
    origin_x: f64,
    origin_y: f64,
    width: f64,
    height: f64,
    rows: u32,
    cols: u32,
    padding_x: f64,
    padding_y: f64,
    lock_center: bool,
    /// Suppresses observer propagation while a compensating write is applied.
    updating: bool,
    /// `lock_center` value staged by `reset_for`, applied by `settle`.
    pending_lock: Option<bool>,
}

impl Default for CropGeometry {
    fn default() -> Self {
        Self {
            origin_x: 0.0,
            origin_y: 0.0,
            width: 0.0,
            height: 0.0,
            rows: 4,
            cols: 6,
            padding_x: 0.0,
            padding_y: 0.0,
            lock_center: true,
            updating: false,
            pending_lock: None,
        }
    }
}

impl CropGeometry {
    /// Create a geometry with the default rectangle (4x6 grid, zero-sized
    /// rectangle at the origin, lock center enabled).
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a geometry directly from a configuration snapshot.
    ///
    /// Fields are taken as-is with no constraint propagation; this is the
    /// one-shot path the slicing pipeline uses, not an edit.
    pub fn from_config(config: &SliceConfig) -> Self {
        Self {
            origin_x: config.start_x,
            origin_y: config.start_y,
            width: config.total_width,
            height: config.total_height,
            rows: config.rows.max(1),
            cols: config.cols.max(1),
            padding_x: config.padding_x,
            padding_y: config.padding_y,
            lock_center: config.lock_center,
            updating: false,
            pending_lock: None,
        }
    }

    pub fn origin_x(&self) -> f64 {
        self.origin_x
    }

    pub fn origin_y(&self) -> f64 {
        self.origin_y
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn padding_x(&self) -> f64 {
        self.padding_x
    }

    pub fn padding_y(&self) -> f64 {
        self.padding_y
    }

    pub fn lock_center(&self) -> bool {
        self.lock_center
    }

    /// Horizontal center of the crop rectangle.
    pub fn center_x(&self) -> f64 {
        self.origin_x + self.width / 2.0
    }

    /// Vertical center of the crop rectangle.
    pub fn center_y(&self) -> f64 {
        self.origin_y + self.height / 2.0
    }

    /// Effective horizontal span of one grid cell.
    pub fn cell_width(&self) -> f64 {
        self.width / self.cols as f64
    }

    /// Effective vertical span of one grid cell.
    pub fn cell_height(&self) -> f64 {
        self.height / self.rows as f64
    }

    /// Edit the crop origin. Each supplied coordinate is one logical edit on
    /// its own constraint pair: while `lock_center` is enabled, moving the
    /// origin by `d` shrinks the size by `2 * d` so the center stays fixed.
    pub fn set_origin(&mut self, x: Option<f64>, y: Option<f64>) {
        self.settle();
        if let Some(x) = x {
            self.write_origin_x(x);
        }
        if let Some(y) = y {
            self.write_origin_y(y);
        }
    }

    /// Edit the crop size. While `lock_center` is enabled, growing a
    /// dimension by `d` moves the matching origin by `-d / 2`.
    pub fn set_size(&mut self, width: Option<f64>, height: Option<f64>) {
        self.settle();
        if let Some(width) = width {
            self.write_width(width);
        }
        if let Some(height) = height {
            self.write_height(height);
        }
    }

    /// Set the grid dimensions. Rows and columns are clamped to at least 1;
    /// everything else about an unusual grid is the slicer's concern.
    pub fn set_grid(&mut self, rows: u32, cols: u32) {
        self.settle();
        self.rows = rows.max(1);
        self.cols = cols.max(1);
    }

    /// Set the per-cell inward padding. Values are stored as given; padding
    /// large enough to empty a cell produces placeholder cells downstream.
    pub fn set_padding(&mut self, padding_x: f64, padding_y: f64) {
        self.settle();
        self.padding_x = padding_x;
        self.padding_y = padding_y;
    }

    /// Enable or disable the lock-center policy.
    ///
    /// Toggling false -> true performs no retroactive compensation: the
    /// rectangle is accepted as-is and future edits enforce the invariant
    /// from this point on.
    pub fn set_lock_center(&mut self, enabled: bool) {
        self.settle();
        self.lock_center = enabled;
    }

    /// Reset the rectangle for a newly loaded source image: origin (0, 0),
    /// size equal to the image, zero padding.
    ///
    /// `lock_center` is disabled for the duration of the reset so the four
    /// rectangle fields can be written independently, then staged for
    /// restoration at the next turn boundary (see [`CropGeometry::settle`]).
    pub fn reset_for(&mut self, image_width: f64, image_height: f64) {
        self.settle();
        let was_locked = self.lock_center;
        self.lock_center = false;

        self.write_origin_x(0.0);
        self.write_origin_y(0.0);
        self.write_width(image_width);
        self.write_height(image_height);
        self.padding_x = 0.0;
        self.padding_y = 0.0;

        self.pending_lock = Some(was_locked);
    }

    /// Apply any restoration staged by [`CropGeometry::reset_for`].
    ///
    /// This is the explicit scheduling-turn boundary: callers driving the
    /// model directly call it once the reset's writes have settled. Public
    /// mutating operations also settle at entry, so a staged restoration can
    /// never leak past the next edit.
    pub fn settle(&mut self) {
        if let Some(lock) = self.pending_lock.take() {
            self.lock_center = lock;
        }
    }

    fn write_origin_x(&mut self, value: f64) {
        let old = self.origin_x;
        if value == old {
            return;
        }
        self.origin_x = value;
        self.origin_x_changed(old, value);
    }

    fn write_origin_y(&mut self, value: f64) {
        let old = self.origin_y;
        if value == old {
            return;
        }
        self.origin_y = value;
        self.origin_y_changed(old, value);
    }

    fn write_width(&mut self, value: f64) {
        let old = self.width;
        if value == old {
            return;
        }
        self.width = value;
        self.width_changed(old, value);
    }

    fn write_height(&mut self, value: f64) {
        let old = self.height;
        if value == old {
            return;
        }
        self.height = value;
        self.height_changed(old, value);
    }

    fn origin_x_changed(&mut self, old: f64, new: f64) {
        if self.updating || !self.lock_center {
            return;
        }
        let diff = new - old;
        self.updating = true;
        self.write_width(self.width - diff * 2.0);
        self.updating = false;
    }

    fn origin_y_changed(&mut self, old: f64, new: f64) {
        if self.updating || !self.lock_center {
            return;
        }
        let diff = new - old;
        self.updating = true;
        self.write_height(self.height - diff * 2.0);
        self.updating = false;
    }

    fn width_changed(&mut self, old: f64, new: f64) {
        if self.updating || !self.lock_center {
            return;
        }
        let diff = new - old;
        self.updating = true;
        self.write_origin_x(self.origin_x - diff / 2.0);
        self.updating = false;
    }

    fn height_changed(&mut self, old: f64, new: f64) {
        if self.updating || !self.lock_center {
            return;
        }
        let diff = new - old;
        self.updating = true;
        self.write_origin_y(self.origin_y - diff / 2.0);
        self.updating = false;
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
