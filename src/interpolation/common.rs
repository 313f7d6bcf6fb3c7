//! Common utilities for interpolation algorithms.
//!
//! This module provides shared functionality used by the interpolants:
//! knot validation, segment lookup and a zero-aware sign function.

use crate::error::{PaletteError, Result};

/// Sign of `v` as -1, 0 or 1.
///
/// Unlike `f64::signum`, zero maps to zero. The PCHIP derivative rules
/// depend on that distinction.
pub fn sign(v: f64) -> i8 {
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}

/// Check that `xs` and `ys` describe a valid set of interpolation knots.
///
/// Requires at least two knots, equal lengths, finite values and strictly
/// increasing positions.
pub fn validate_knots(xs: &[f64], ys: &[f64]) -> Result<()> {
    if xs.len() != ys.len() {
        return Err(PaletteError::Interpolation {
            message: format!(
                "Length mismatch: {} positions but {} values",
                xs.len(),
                ys.len()
            ),
        });
    }

    if xs.len() < 2 {
        return Err(PaletteError::Interpolation {
            message: format!("At least 2 knots are required, got {}", xs.len()),
        });
    }

    if let Some(i) = xs.iter().chain(ys).position(|v| !v.is_finite()) {
        return Err(PaletteError::Interpolation {
            message: format!("Non-finite knot data at offset {}", i),
        });
    }

    if let Some(i) = xs.windows(2).position(|w| w[1] <= w[0]) {
        return Err(PaletteError::Interpolation {
            message: format!(
                "Positions must be strictly increasing: x[{}] = {} but x[{}] = {}",
                i,
                xs[i],
                i + 1,
                xs[i + 1]
            ),
        });
    }

    Ok(())
}

/// Find the segment that owns position `x`.
///
/// Returns the index of the last knot not greater than `x`, clamped to
/// `[0, knots.len() - 2]` so that queries outside the knot range use the
/// nearest end segment. `knots` must hold at least two sorted values.
pub fn find_segment(knots: &[f64], x: f64) -> usize {
    let last = knots.len() - 2;
    match knots.partition_point(|&k| k <= x) {
        0 => 0,
        n => (n - 1).min(last),
    }
}
