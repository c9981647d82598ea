//! Sprite-sheet decoding from encoded bytes.

use std::io::Cursor;

use image::ImageReader;

use super::{DecodeError, SheetImage};

/// Pixel buffers beyond this size cannot be indexed on 32-bit targets
/// (the bindings run on wasm32).
const MAX_PIXEL_BYTES: u64 = i32::MAX as u64;

/// Decode a sprite-sheet image (PNG or JPEG) from bytes.
///
/// The format is guessed from the file's magic bytes, so callers do not need
/// to know ahead of time which format the upload used. The decoded result is
/// always RGBA so transparency survives into the slicing pipeline.
///
/// # Arguments
///
/// * `bytes` - Raw image file bytes
///
/// # Returns
///
/// A `SheetImage` with RGBA pixel data.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the bytes are not a recognized
/// image format, `DecodeError::CorruptedFile` if decoding fails partway, and
/// `DecodeError::TooLarge` if the decoded buffer would not be addressable.
pub fn decode_image(bytes: &[u8]) -> Result<SheetImage, DecodeError> {
    let cursor = Cursor::new(bytes);
    let reader = ImageReader::new(cursor)
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let (width, height) = (img.width(), img.height());
    if (width as u64) * (height as u64) * 4 > MAX_PIXEL_BYTES {
        return Err(DecodeError::TooLarge { width, height });
    }

    let rgba_img = img.into_rgba8();
    Ok(SheetImage::from_rgba_image(rgba_img))
}
