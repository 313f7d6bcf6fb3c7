//! Assertion utilities for testing.
//!
//! This module provides helper functions for making assertions about
//! packed colors and channel values.

/// Assert that a channel byte is within `tolerance` of `expected`.
///
/// # Panics
///
/// Panics with the channel name and both values when the difference is
/// larger than `tolerance`.
pub fn assert_channel_near(channel: &str, actual: u8, expected: u8, tolerance: u8) {
    let diff = actual.abs_diff(expected);
    assert!(
        diff <= tolerance,
        "Channel {} not within tolerance: actual = {}, expected = {}, diff = {}, tolerance = {}",
        channel,
        actual,
        expected,
        diff,
        tolerance
    );
}

/// Assert that every packed color has an alpha byte of 255.
///
/// # Panics
///
/// Panics with the index and value of the first translucent color.
pub fn assert_all_opaque(colors: &[u32]) {
    if let Some((i, c)) = colors.iter().enumerate().find(|&(_, &c)| c >> 24 != 0xff) {
        panic!("Color at index {} is not opaque: 0x{:08x}", i, c);
    }
}

/// Assert that a byte sequence never decreases.
///
/// # Panics
///
/// Panics at the first position where the sequence drops.
pub fn assert_non_decreasing(values: &[u8]) {
    for (i, w) in values.windows(2).enumerate() {
        assert!(
            w[1] >= w[0],
            "Sequence decreases at index {}: {} -> {}",
            i + 1,
            w[0],
            w[1]
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_channel_near() {
        assert_channel_near("red", 32, 32, 0);
        assert_channel_near("red", 31, 32, 1);
        assert_channel_near("blue", 255, 254, 1);
    }

    #[test]
    fn test_assert_all_opaque() {
        assert_all_opaque(&[0xff000000, 0xffffffff]);
        assert_all_opaque(&[]);
    }

    #[test]
    #[should_panic(expected = "not opaque")]
    fn test_assert_all_opaque_fails() {
        assert_all_opaque(&[0xff000000, 0x00ffffff]);
    }

    #[test]
    fn test_assert_non_decreasing() {
        assert_non_decreasing(&[0, 0, 1, 5, 5, 32]);
    }
}
