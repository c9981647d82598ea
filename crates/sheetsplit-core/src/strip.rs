//! Background stripping for rendered cells.
//!
//! Reclassifies pixels near a reference color as fully transparent. The
//! heuristic is deliberately conservative: a pixel must be close to the
//! reference color, near its brightness, low-saturation, and light, all at
//! once. That combination removes a uniform sheet background without eating
//! light-colored foreground content.
//!
//! This is the main performance-sensitive path; it runs once per pixel of
//! every rendered cell, directly over the flat RGBA buffer.

use serde::{Deserialize, Serialize};

/// Maximum euclidean RGB distance to the reference color (strict `<`).
const MAX_COLOR_DISTANCE: f64 = 20.0;
/// Maximum difference in mean brightness to the reference (strict `<`).
const MAX_BRIGHTNESS_DELTA: f64 = 30.0;
/// Maximum saturation, `(max - min) / max` (strict `<`).
const MAX_SATURATION: f64 = 0.15;
/// Minimum mean brightness (strict `>`).
const MIN_BRIGHTNESS: f64 = 200.0;

/// An RGB reference color parsed from a `#RRGGBB` hex string.
///
/// Used only by the background stripper; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRef {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorRef {
    /// White, the fallback for malformed input.
    pub const WHITE: ColorRef = ColorRef {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Parse a hex color string.
    ///
    /// Accepts `RRGGBB` with an optional leading `#`, case-insensitive.
    /// Anything else falls back to white; malformed color input is never an
    /// error.
    pub fn parse(hex: &str) -> ColorRef {
        Self::try_parse(hex).unwrap_or(Self::WHITE)
    }

    fn try_parse(hex: &str) -> Option<ColorRef> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
        let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
        let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
        Some(ColorRef { r, g, b })
    }

    /// Mean of the three channels.
    fn brightness(&self) -> f64 {
        (self.r as f64 + self.g as f64 + self.b as f64) / 3.0
    }
}

/// Strip near-reference background pixels from a flat RGBA buffer in place.
///
/// Each pixel is classified independently; pixels that are already fully
/// transparent are skipped, which also makes the pass idempotent. A pixel is
/// forced to alpha 0 iff all four threshold conditions hold simultaneously.
///
/// No-op when `enabled` is false. Only the alpha channel is ever modified;
/// dimensions and buffer layout are untouched.
pub fn strip_background(pixels: &mut [u8], reference: ColorRef, enabled: bool) {
    if !enabled {
        return;
    }

    let ref_brightness = reference.brightness();

    for chunk in pixels.chunks_exact_mut(4) {
        let a = chunk[3];
        if a == 0 {
            continue;
        }

        let r = chunk[0] as f64;
        let g = chunk[1] as f64;
        let b = chunk[2] as f64;

        let color_distance = ((r - reference.r as f64).powi(2)
            + (g - reference.g as f64).powi(2)
            + (b - reference.b as f64).powi(2))
        .sqrt();

        let brightness = (r + g + b) / 3.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let saturation = if max == 0.0 { 0.0 } else { (max - min) / max };

        let is_very_similar_color = color_distance < MAX_COLOR_DISTANCE;
        let is_similar_brightness = (brightness - ref_brightness).abs() < MAX_BRIGHTNESS_DELTA;
        let is_low_saturation = saturation < MAX_SATURATION;
        let is_light_color = brightness > MIN_BRIGHTNESS;

        if is_very_similar_color && is_similar_brightness && is_low_saturation && is_light_color {
            chunk[3] = 0;
        }
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
