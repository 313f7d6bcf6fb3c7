//! Continuous RGB gradients built from color stops.

use super::stops::{self, ColorStop};
use crate::error::Result;
use crate::interpolation::{Interpolator, PchipInterpolator};

/// Three independent channel interpolants sharing one position axis
#[derive(Debug, Clone)]
pub struct Gradient<I = PchipInterpolator> {
    red: I,
    green: I,
    blue: I,
}

impl Gradient<PchipInterpolator> {
    /// Build a monotone cubic gradient through `stops`.
    pub fn new(stops: &[ColorStop]) -> Result<Self> {
        stops::validate_stops(stops)?;
        let (positions, [red, green, blue]) = stops::channel_columns(stops);

        Ok(Self {
            red: PchipInterpolator::new(&positions, &red)?,
            green: PchipInterpolator::new(&positions, &green)?,
            blue: PchipInterpolator::new(&positions, &blue)?,
        })
    }
}

impl<I: Interpolator> Gradient<I> {
    /// Assemble a gradient from already built channel interpolants
    pub fn from_channels(red: I, green: I, blue: I) -> Self {
        Self { red, green, blue }
    }

    /// Raw `[red, green, blue]` channel values at `position`.
    ///
    /// Values are not rounded or clamped.
    pub fn sample(&self, position: f64) -> [f64; 3] {
        [
            self.red.evaluate(position),
            self.green.evaluate(position),
            self.blue.evaluate(position),
        ]
    }

    /// Name of the interpolation method used for the channels
    pub fn method(&self) -> &str {
        self.red.name()
    }
}
