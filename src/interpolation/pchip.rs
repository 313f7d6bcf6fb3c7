//! Monotone piecewise cubic Hermite interpolation (PCHIP).
//!
//! The interpolant passes through every knot, has a continuous first
//! derivative and never overshoots the data between two adjacent knots.
//! Derivatives follow the Fritsch-Butland weighted harmonic mean rule with
//! the usual three-point end conditions, and evaluation sums the local
//! power basis in increasing order. Tables built from it truncate values
//! to bytes, so the operation order is part of the output.

use super::common;
use super::Interpolator;
use crate::error::Result;

/// PCHIP interpolator over a fixed set of knots
#[derive(Debug, Clone)]
pub struct PchipInterpolator {
    knots: Vec<f64>,
    /// Per segment `[s^3, s^2, s, 1]` coefficients in `s = x - knots[k]`
    coefficients: Vec<[f64; 4]>,
}

impl PchipInterpolator {
    /// Build the interpolant through `(xs[i], ys[i])`.
    pub fn new(xs: &[f64], ys: &[f64]) -> Result<Self> {
        common::validate_knots(xs, ys)?;

        let h: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();
        let slopes: Vec<f64> = ys
            .windows(2)
            .zip(&h)
            .map(|(w, &hk)| (w[1] - w[0]) / hk)
            .collect();
        let d = derivatives(&h, &slopes);

        let coefficients = (0..h.len())
            .map(|k| {
                let dx = h[k];
                let slope = (ys[k + 1] - ys[k]) / dx;
                let t = (d[k] + d[k + 1] - 2.0 * slope) / dx;
                [t / dx, (slope - d[k]) / dx - t, d[k], ys[k]]
            })
            .collect();

        Ok(Self {
            knots: xs.to_vec(),
            coefficients,
        })
    }

    /// Knot positions this interpolant was built from
    pub fn knots(&self) -> &[f64] {
        &self.knots
    }
}

impl Interpolator for PchipInterpolator {
    fn evaluate(&self, x: f64) -> f64 {
        let k = common::find_segment(&self.knots, x);
        let s = x - self.knots[k];
        let [c0, c1, c2, c3] = self.coefficients[k];

        let mut result = 0.0;
        let mut z = 1.0;
        for c in [c3, c2, c1, c0] {
            result += c * z;
            z *= s;
        }
        result
    }

    fn name(&self) -> &str {
        "pchip"
    }
}

/// Knot derivatives from segment widths `h` and secant slopes `m`.
fn derivatives(h: &[f64], m: &[f64]) -> Vec<f64> {
    let n = h.len() + 1;

    // Two knots: plain linear interpolation
    if n == 2 {
        return vec![m[0], m[0]];
    }

    let mut d = vec![0.0; n];
    for k in 1..n - 1 {
        let (before, after) = (m[k - 1], m[k]);
        if common::sign(before) != common::sign(after) || before == 0.0 || after == 0.0 {
            continue;
        }
        let w1 = 2.0 * h[k] + h[k - 1];
        let w2 = h[k] + 2.0 * h[k - 1];
        let harmonic_mean = (w1 / before + w2 / after) / (w1 + w2);
        d[k] = 1.0 / harmonic_mean;
    }

    d[0] = end_derivative(h[0], h[1], m[0], m[1]);
    d[n - 1] = end_derivative(h[n - 2], h[n - 3], m[n - 2], m[n - 3]);
    d
}

/// One-sided three-point derivative at an end knot, limited to keep shape.
fn end_derivative(h0: f64, h1: f64, m0: f64, m1: f64) -> f64 {
    let d = ((2.0 * h0 + h1) * m0 - h0 * m1) / (h0 + h1);

    if common::sign(d) != common::sign(m0) {
        0.0
    } else if common::sign(m0) != common::sign(m1) && d.abs() > 3.0 * m0.abs() {
        3.0 * m0
    } else {
        d
    }
}
