//! Crop model WASM bindings.
//!
//! This module provides JavaScript bindings for the crop geometry model, so
//! the UI's number inputs can drive the lock-center protocol from
//! TypeScript. The model also carries the background-removal settings,
//! giving the front end one object holding the whole configuration surface.

use sheetsplit_core::{CropGeometry, SliceConfig};
use wasm_bindgen::prelude::*;

/// Crop configuration model for JavaScript.
///
/// Wraps the core `CropGeometry` together with the background-removal
/// settings. Geometry setters run the lock-center protocol: while
/// `lock_center` is enabled, editing the origin compensates the size and
/// vice versa, keeping the rectangle's center fixed.
#[wasm_bindgen]
pub struct CropModel {
    geometry: CropGeometry,
    remove_background: bool,
    background_color: String,
}

#[wasm_bindgen]
impl CropModel {
    /// Create a new crop model with default values (4x6 grid, lock center
    /// and background removal enabled, white background).
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        let defaults = SliceConfig::default();
        Self {
            geometry: CropGeometry::new(),
            remove_background: defaults.remove_background,
            background_color: defaults.background_color,
        }
    }

    /// Get the number of grid rows
    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> u32 {
        self.geometry.rows()
    }

    /// Get the number of grid columns
    #[wasm_bindgen(getter)]
    pub fn cols(&self) -> u32 {
        self.geometry.cols()
    }

    /// Set the grid dimensions (each clamped to at least 1)
    pub fn set_grid(&mut self, rows: u32, cols: u32) {
        self.geometry.set_grid(rows, cols);
    }

    /// Get the crop origin x
    #[wasm_bindgen(getter)]
    pub fn start_x(&self) -> f64 {
        self.geometry.origin_x()
    }

    /// Set the crop origin x, compensating the width while center is locked
    #[wasm_bindgen(setter)]
    pub fn set_start_x(&mut self, value: f64) {
        self.geometry.set_origin(Some(value), None);
    }

    /// Get the crop origin y
    #[wasm_bindgen(getter)]
    pub fn start_y(&self) -> f64 {
        self.geometry.origin_y()
    }

    /// Set the crop origin y, compensating the height while center is locked
    #[wasm_bindgen(setter)]
    pub fn set_start_y(&mut self, value: f64) {
        self.geometry.set_origin(None, Some(value));
    }

    /// Get the crop rectangle width
    #[wasm_bindgen(getter)]
    pub fn total_width(&self) -> f64 {
        self.geometry.width()
    }

    /// Set the crop rectangle width, compensating the origin while center is
    /// locked
    #[wasm_bindgen(setter)]
    pub fn set_total_width(&mut self, value: f64) {
        self.geometry.set_size(Some(value), None);
    }

    /// Get the crop rectangle height
    #[wasm_bindgen(getter)]
    pub fn total_height(&self) -> f64 {
        self.geometry.height()
    }

    /// Set the crop rectangle height, compensating the origin while center
    /// is locked
    #[wasm_bindgen(setter)]
    pub fn set_total_height(&mut self, value: f64) {
        self.geometry.set_size(None, Some(value));
    }

    /// Get the horizontal per-cell padding
    #[wasm_bindgen(getter)]
    pub fn padding_x(&self) -> f64 {
        self.geometry.padding_x()
    }

    /// Get the vertical per-cell padding
    #[wasm_bindgen(getter)]
    pub fn padding_y(&self) -> f64 {
        self.geometry.padding_y()
    }

    /// Set the per-cell padding
    pub fn set_padding(&mut self, padding_x: f64, padding_y: f64) {
        self.geometry.set_padding(padding_x, padding_y);
    }

    /// Get the lock-center flag
    #[wasm_bindgen(getter)]
    pub fn lock_center(&self) -> bool {
        self.geometry.lock_center()
    }

    /// Enable or disable the lock-center policy (no retroactive
    /// compensation when enabling)
    #[wasm_bindgen(setter)]
    pub fn set_lock_center(&mut self, enabled: bool) {
        self.geometry.set_lock_center(enabled);
    }

    /// Get the background-removal flag
    #[wasm_bindgen(getter)]
    pub fn remove_background(&self) -> bool {
        self.remove_background
    }

    /// Enable or disable background removal
    #[wasm_bindgen(setter)]
    pub fn set_remove_background(&mut self, enabled: bool) {
        self.remove_background = enabled;
    }

    /// Get the background reference color hex string
    #[wasm_bindgen(getter)]
    pub fn background_color(&self) -> String {
        self.background_color.clone()
    }

    /// Set the background reference color (`#RRGGBB`; malformed values fall
    /// back to white at slice time)
    #[wasm_bindgen(setter)]
    pub fn set_background_color(&mut self, color: String) {
        self.background_color = color;
    }

    /// Reset the crop rectangle for a newly loaded sheet: full-image
    /// rectangle, zero padding, lock center suspended until `settle`.
    pub fn reset_for(&mut self, image_width: f64, image_height: f64) {
        self.geometry.reset_for(image_width, image_height);
    }

    /// Apply the lock-center restoration staged by `reset_for`. Call once
    /// the reset's writes have settled (the next scheduling turn).
    pub fn settle(&mut self) {
        self.geometry.settle();
    }

    /// Serialize the full configuration surface to a plain JS object
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.to_config())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Build a crop model from a configuration object (camelCase keys,
    /// missing fields fall back to defaults)
    pub fn from_json(value: JsValue) -> Result<CropModel, JsValue> {
        let config: SliceConfig =
            serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self::from_config(config))
    }
}

impl Default for CropModel {
    fn default() -> Self {
        Self::new()
    }
}

impl CropModel {
    /// Snapshot the model as the core configuration struct.
    pub(crate) fn to_config(&self) -> SliceConfig {
        SliceConfig {
            rows: self.geometry.rows(),
            cols: self.geometry.cols(),
            start_x: self.geometry.origin_x(),
            start_y: self.geometry.origin_y(),
            total_width: self.geometry.width(),
            total_height: self.geometry.height(),
            padding_x: self.geometry.padding_x(),
            padding_y: self.geometry.padding_y(),
            lock_center: self.geometry.lock_center(),
            remove_background: self.remove_background,
            background_color: self.background_color.clone(),
        }
    }

    fn from_config(config: SliceConfig) -> Self {
        Self {
            remove_background: config.remove_background,
            background_color: config.background_color.clone(),
            geometry: CropGeometry::from_config(&config),
        }
    }
}
