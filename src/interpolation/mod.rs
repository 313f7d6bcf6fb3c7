//! Interpolation algorithms for color channels.
//!
//! This module provides the one-dimensional interpolants used to turn a
//! handful of color stops into a dense gradient.

pub mod common;
pub mod pchip;

pub use pchip::PchipInterpolator;

/// Trait for one-dimensional interpolation methods
pub trait Interpolator {
    /// Evaluate the interpolant at position `x`
    fn evaluate(&self, x: f64) -> f64;

    /// Get the name of this interpolation method
    fn name(&self) -> &str;
}
