//! Palette construction: color stops, gradients and packed lookup tables.
//!
//! The pipeline is stops -> per-channel interpolants -> sampled, truncated
//! and packed `u32` colors.

pub mod gradient;
pub mod packing;
pub mod stops;
pub mod table;

pub use gradient::Gradient;
pub use packing::{pack_rgba, unpack_rgba, OPAQUE_ALPHA};
pub use stops::{ColorStop, Rgb, SMOOTH_STOPS};
pub use table::{generate_smooth_palette, generate_table, PaletteTable, PALETTE_SIZE};
