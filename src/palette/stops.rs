//! Color stops that anchor a gradient.

use crate::error::{PaletteError, Result};

/// An 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

/// A fixed `(position, color)` anchor of a gradient
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    /// Position in `[0, 1]`
    pub position: f64,
    pub color: Rgb,
}

impl ColorStop {
    pub const fn new(position: f64, color: Rgb) -> Self {
        Self { position, color }
    }
}

/// The classic smooth coloring palette for escape-time fractal renderers.
///
/// Dark blue through white and orange to black, then back to the starting
/// blue so that a table built from it can be indexed cyclically.
pub const SMOOTH_STOPS: [ColorStop; 6] = [
    ColorStop::new(0.0, Rgb::new(0, 7, 100)),
    ColorStop::new(0.16, Rgb::new(32, 107, 203)),
    ColorStop::new(0.42, Rgb::new(237, 255, 255)),
    ColorStop::new(0.6425, Rgb::new(255, 170, 0)),
    ColorStop::new(0.8575, Rgb::new(0, 2, 0)),
    ColorStop::new(1.0, Rgb::new(0, 7, 100)),
];

/// Check that `stops` cover `[0, 1]` with strictly increasing positions.
pub fn validate_stops(stops: &[ColorStop]) -> Result<()> {
    if stops.len() < 2 {
        return Err(PaletteError::InvalidStops {
            message: format!("At least 2 stops are required, got {}", stops.len()),
        });
    }

    if let Some(stop) = stops
        .iter()
        .find(|s| !(0.0..=1.0).contains(&s.position))
    {
        return Err(PaletteError::InvalidStops {
            message: format!("Stop position {} is outside [0, 1]", stop.position),
        });
    }

    if let Some(i) = stops
        .windows(2)
        .position(|w| w[1].position <= w[0].position)
    {
        return Err(PaletteError::InvalidStops {
            message: format!(
                "Stop positions must be strictly increasing: {} is followed by {}",
                stops[i].position,
                stops[i + 1].position
            ),
        });
    }

    let (first, last) = (stops[0].position, stops[stops.len() - 1].position);
    if first != 0.0 || last != 1.0 {
        return Err(PaletteError::InvalidStops {
            message: format!("Stops must span [0, 1], got [{}, {}]", first, last),
        });
    }

    Ok(())
}

/// Split stops into the position list and one value list per channel.
pub(crate) fn channel_columns(stops: &[ColorStop]) -> (Vec<f64>, [Vec<f64>; 3]) {
    let positions = stops.iter().map(|s| s.position).collect();
    let red = stops.iter().map(|s| f64::from(s.color.red)).collect();
    let green = stops.iter().map(|s| f64::from(s.color.green)).collect();
    let blue = stops.iter().map(|s| f64::from(s.color.blue)).collect();
    (positions, [red, green, blue])
}
