//! PNG encoding for cell export.
//!
//! This module provides lossless PNG encoding using the `image` crate's PNG
//! encoder. Cells must keep their alpha channel intact through export, so the
//! encoder always writes RGBA.

use image::codecs::png::PngEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use std::io::Cursor;
use thiserror::Error;

/// Errors that can occur during PNG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Encode RGBA pixel data to PNG bytes.
///
/// # Arguments
///
/// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
///
/// # Returns
///
/// PNG-encoded bytes on success, or an error if encoding fails.
///
/// # Example
///
/// ```
/// use sheetsplit_core::encode::encode_png;
///
/// let pixels = vec![128u8; 10 * 10 * 4]; // Translucent gray image
/// let png = encode_png(&pixels, 10, 10).unwrap();
///
/// // Verify PNG magic bytes
/// assert_eq!(&png[0..4], &[0x89, b'P', b'N', b'G']);
/// ```
pub fn encode_png(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, EncodeError> {
    // Validate dimensions
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    // Validate pixel data length
    let expected_len = (width as usize) * (height as usize) * 4;
    if pixels.len() != expected_len {
        return Err(EncodeError::InvalidPixelData {
            expected: expected_len,
            actual: pixels.len(),
        });
    }

    // Create output buffer
    let mut buffer = Cursor::new(Vec::new());

    let encoder = PngEncoder::new(&mut buffer);

    // Encode the image
    encoder
        .write_image(pixels, width, height, ExtendedColorType::Rgba8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating image dimensions (keep small for speed).
    fn dimensions_strategy() -> impl Strategy<Value = (u32, u32)> {
        (1u32..=50, 1u32..=50)
    }

    proptest! {
        /// Property: Encoding always produces a valid PNG for valid input.
        #[test]
        fn prop_valid_input_produces_valid_png(
            (width, height) in dimensions_strategy(),
        ) {
            let size = (width as usize) * (height as usize) * 4;
            let pixels = vec![128u8; size];

            let result = encode_png(&pixels, width, height);
            prop_assert!(result.is_ok(), "Valid input should produce valid output");

            let png_bytes = result.unwrap();
            prop_assert_eq!(&png_bytes[0..4], &[0x89, b'P', b'N', b'G'], "Should have PNG magic");
        }

        /// Property: Encoding is lossless, decode returns the exact buffer.
        #[test]
        fn prop_encode_is_lossless(
            (width, height) in (1u32..=16, 1u32..=16),
            seed in any::<u8>(),
        ) {
            let size = (width as usize) * (height as usize) * 4;
            let pixels: Vec<u8> = (0..size).map(|i| (i as u8).wrapping_mul(seed)).collect();

            let png = encode_png(&pixels, width, height).unwrap();
            let decoded = image::load_from_memory(&png).unwrap().into_rgba8();

            prop_assert_eq!(decoded.dimensions(), (width, height));
            prop_assert_eq!(decoded.into_raw(), pixels);
        }

        /// Property: Same input always produces same output (deterministic).
        #[test]
        fn prop_deterministic_output(
            (width, height) in (1u32..=20, 1u32..=20),
        ) {
            let size = (width as usize) * (height as usize) * 4;
            let pixels = vec![100u8; size];

            let result1 = encode_png(&pixels, width, height);
            let result2 = encode_png(&pixels, width, height);

            prop_assert!(result1.is_ok() && result2.is_ok());
            prop_assert_eq!(result1.unwrap(), result2.unwrap(), "Same input should produce same output");
        }

        /// Property: Invalid pixel data length always returns error.
        #[test]
        fn prop_invalid_pixel_length_returns_error(
            (width, height) in dimensions_strategy(),
            extra_or_missing in -10i32..=10,
        ) {
            prop_assume!(extra_or_missing != 0); // Skip zero, as that's valid

            let expected_size = (width as usize) * (height as usize) * 4;
            let actual_size = if extra_or_missing > 0 {
                expected_size + extra_or_missing as usize
            } else {
                expected_size.saturating_sub((-extra_or_missing) as usize)
            };

            // Skip if we would get the correct size
            prop_assume!(actual_size != expected_size);

            let pixels = vec![128u8; actual_size];
            let result = encode_png(&pixels, width, height);

            prop_assert!(
                matches!(result, Err(EncodeError::InvalidPixelData { .. })),
                "Mismatched pixel data should return InvalidPixelData error"
            );
        }

        /// Property: Zero dimensions always return error.
        #[test]
        fn prop_zero_dimensions_return_error(
            width in 0u32..=1,
            height in 0u32..=1,
        ) {
            prop_assume!(width == 0 || height == 0);

            let pixels = vec![];
            let result = encode_png(&pixels, width, height);

            prop_assert!(
                matches!(result, Err(EncodeError::InvalidDimensions { .. })),
                "Zero dimensions should return InvalidDimensions error"
            );
        }
    }
}
