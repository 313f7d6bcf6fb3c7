//! Sampling a gradient into a packed lookup table.

use std::collections::HashSet;
use tracing::{debug, warn};

use super::gradient::Gradient;
use super::packing::{pack_rgba, truncate_channel};
use super::stops::{ColorStop, SMOOTH_STOPS};
use crate::error::{PaletteError, Result};
use crate::interpolation::Interpolator;

/// Number of entries in the smooth palette table
pub const PALETTE_SIZE: usize = 1024;

const CHANNEL_NAMES: [&str; 3] = ["red", "green", "blue"];

/// A sampled, packed color table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteTable {
    colors: Vec<u32>,
    distinct: usize,
    clamped_samples: usize,
}

impl PaletteTable {
    /// Packed colors in sample order
    pub fn colors(&self) -> &[u32] {
        &self.colors
    }

    pub fn into_colors(self) -> Vec<u32> {
        self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Number of distinct packed values in the table
    pub fn distinct_colors(&self) -> usize {
        self.distinct
    }

    /// Number of channel values that fell outside `[0, 255]` and were clamped
    pub fn clamped_samples(&self) -> usize {
        self.clamped_samples
    }
}

/// Build a PCHIP gradient through `stops` and sample it `size` times.
pub fn generate_table(stops: &[ColorStop], size: usize) -> Result<PaletteTable> {
    let gradient = Gradient::new(stops)?;
    sample_gradient(&gradient, size)
}

/// The smooth fractal palette: [`SMOOTH_STOPS`] sampled [`PALETTE_SIZE`] times
pub fn generate_smooth_palette() -> Result<PaletteTable> {
    generate_table(&SMOOTH_STOPS, PALETTE_SIZE)
}

/// Sample `gradient` at `j / size` for every `j` in `0..size`.
pub fn sample_gradient<I: Interpolator>(
    gradient: &Gradient<I>,
    size: usize,
) -> Result<PaletteTable> {
    if size == 0 {
        return Err(PaletteError::InvalidParameter {
            param: "size".to_string(),
            message: "Table size must be greater than zero".to_string(),
        });
    }

    let mut colors = Vec::with_capacity(size);
    let mut seen = HashSet::with_capacity(size);
    let mut clamped_samples = 0;

    for j in 0..size {
        let position = j as f64 / size as f64;
        let values = gradient.sample(position);

        let mut channels = [0u8; 3];
        for (c, &value) in values.iter().enumerate() {
            let (byte, clamped) = truncate_channel(value);
            if clamped {
                warn!(
                    index = j,
                    channel = CHANNEL_NAMES[c],
                    value = value,
                    "Channel value outside [0, 255], clamped"
                );
                clamped_samples += 1;
            }
            channels[c] = byte;
        }

        let packed = pack_rgba(channels[0], channels[1], channels[2]);
        seen.insert(packed);
        colors.push(packed);
    }

    debug!(
        size = size,
        distinct = seen.len(),
        method = gradient.method(),
        "Sampled gradient"
    );

    Ok(PaletteTable {
        colors,
        distinct: seen.len(),
        clamped_samples,
    })
}
