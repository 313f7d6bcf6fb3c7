//! Packing RGB channel values into 32-bit RGBA words.
//!
//! Byte layout from least to most significant: red, green, blue, alpha.
//! Alpha is always fully opaque.

/// Alpha byte of every packed color
pub const OPAQUE_ALPHA: u8 = 255;

/// Pack three channels and an opaque alpha into one word.
pub fn pack_rgba(red: u8, green: u8, blue: u8) -> u32 {
    u32::from_le_bytes([red, green, blue, OPAQUE_ALPHA])
}

/// Split a packed word back into `[red, green, blue, alpha]`
pub fn unpack_rgba(packed: u32) -> [u8; 4] {
    packed.to_le_bytes()
}

/// Truncate an interpolated channel value toward zero.
///
/// Returns the byte and whether the value had to be clamped into
/// `[0, 255]`. Truncation rather than rounding keeps the table identical to
/// the published palette.
pub fn truncate_channel(value: f64) -> (u8, bool) {
    let truncated = value.trunc();
    if (0.0..=255.0).contains(&truncated) {
        (truncated as u8, false)
    } else {
        // NaN saturates to 0 in the cast
        (truncated.clamp(0.0, 255.0) as u8, true)
    }
}
