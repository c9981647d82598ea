//! Sprite-sheet decoding for Sheetsplit.
//!
//! This module provides functionality for:
//! - Decoding PNG and JPEG sprite sheets to RGBA rasters
//! - The `SheetImage` source type the slicer reads from
//!
//! # Architecture
//!
//! The decoding pipeline is designed to be used from Web Workers via WASM
//! bindings. All operations are synchronous and single-threaded within WASM.
//! Decoding is the first of the pipeline's two suspension points: the slicer
//! only runs once a sheet has fully decoded, and a decode failure surfaces to
//! the pipeline as an empty result set rather than an error.

mod loader;
mod types;

pub use loader::decode_image;
pub use types::{DecodeError, SheetImage};
