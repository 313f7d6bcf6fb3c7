//! # palettegen
//!
//! Generates the classic smooth coloring palette used by escape-time
//! fractal renderers as a packed RGBA lookup table.
//!
//! Six color stops are joined by monotone cubic (PCHIP) interpolation,
//! one curve per channel, and sampled at 1024 evenly spaced positions.
//! Each sample is truncated to bytes and packed into a `u32` with red in
//! the lowest byte and an opaque alpha in the highest. The table is then
//! rendered as a Rust `const` array literal.
//!
//! ## Architecture
//!
//! - **Interpolation**: shape-preserving 1-D interpolants
//! - **Palette**: stops, gradients, packing and table sampling
//! - **Emit**: rendering and writing the array literal

pub mod config;
pub mod emit;
pub mod error;
pub mod interpolation;
pub mod logging;
pub mod palette;

pub use config::Config;
pub use emit::{render_table, write_table, PALETTE_NAME, VALUES_PER_LINE};
pub use error::{PaletteError, Result};
pub use logging::{
    init_tracing, log_error, log_generation_stats, log_operation_end, log_operation_start,
    log_timed_operation,
};
pub use palette::{generate_smooth_palette, generate_table, PaletteTable, PALETTE_SIZE};
