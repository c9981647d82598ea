//! Cell encoding pipeline for Sheetsplit.
//!
//! This module provides functionality for:
//! - Encoding cell rasters to lossless RGBA PNG for packaging and download
//!
//! # Architecture
//!
//! The encoding pipeline is designed to be used from Web Workers via WASM
//! bindings. All operations are synchronous and single-threaded within WASM.
//!
//! # Examples
//!
//! ```ignore
//! use sheetsplit_core::encode::encode_png;
//!
//! let pixels = vec![0u8; 40 * 30 * 4]; // Transparent cell
//! let png_bytes = encode_png(&pixels, 40, 30).unwrap();
//! println!("Encoded {} bytes", png_bytes.len());
//! ```

mod png;

pub use png::{encode_png, EncodeError};
