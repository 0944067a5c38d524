//! Hex color code decoding.
//!
//! Accepts exactly six hex digits, optionally prefixed with `#`, and returns
//! the three channels normalized to 0.0–1.0.

use thiserror::Error;

/// Why a hex color code was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HexParseError {
    #[error("a hex color needs exactly 6 digits")]
    InvalidLength,
    #[error("a hex color may only contain 0-9 and A-F")]
    InvalidDigits,
}

/// Parse `RRGGBB` or `#RRGGBB` into normalized `(r, g, b)`.
///
/// Surrounding whitespace is ignored and digits are case-insensitive.
pub fn parse_hex(input: &str) -> Result<(f64, f64, f64), HexParseError> {
    // ASCII-only case folding keeps the character count intact.
    let upper = input.trim().to_ascii_uppercase();
    let digits = upper.strip_prefix('#').unwrap_or(&upper);

    if digits.chars().count() != 6 {
        return Err(HexParseError::InvalidLength);
    }
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(HexParseError::InvalidDigits);
    }

    let rgb = u32::from_str_radix(digits, 16).map_err(|_| HexParseError::InvalidDigits)?;
    Ok((channel_at(rgb, 16), channel_at(rgb, 8), channel_at(rgb, 0)))
}

fn channel_at(rgb: u32, shift: u32) -> f64 {
    ((rgb >> shift) & 0xFF) as f64 / 255.0
}
