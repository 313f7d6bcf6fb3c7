//! Error types for palettegen.
//!
//! This module defines a single error enum covering every failure the
//! generator can report, from bad stop data to I/O on the output file.

use thiserror::Error;

/// The main error type for palettegen operations.
#[derive(Error, Debug)]
pub enum PaletteError {
    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Invalid parameter errors
    #[error("Invalid parameter: {param} - {message}")]
    InvalidParameter { param: String, message: String },

    /// Malformed color stop tables
    #[error("Invalid color stops: {message}")]
    InvalidStops { message: String },

    /// Interpolation errors
    #[error("Interpolation error: {message}")]
    Interpolation { message: String },
}

/// Convenience type alias for Results with PaletteError
pub type Result<T> = std::result::Result<T, PaletteError>;
