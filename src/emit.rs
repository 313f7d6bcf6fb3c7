//! Rendering a packed palette as a Rust array literal.
//!
//! The output is meant to be pasted into, or `include!`d by, the renderer
//! that consumes the table.

use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{PaletteError, Result};

/// Name of the emitted constant
pub const PALETTE_NAME: &str = "PALETTE";

/// Hex literals per output line
pub const VALUES_PER_LINE: usize = 8;

/// Render `colors` as a `const NAME: [u32; N] = [...];` declaration.
///
/// The first row follows the opening bracket on the same line. Every value
/// is written as lowercase, unpadded hex followed by `", "`, each row ends
/// with a newline and the text ends with `];` without a trailing newline.
pub fn render_table(name: &str, colors: &[u32], per_line: usize) -> Result<String> {
    if per_line == 0 {
        return Err(PaletteError::InvalidParameter {
            param: "per_line".to_string(),
            message: "Values per line must be greater than zero".to_string(),
        });
    }

    // "0xffrrggbb, " is at most 12 bytes
    let mut out = String::with_capacity(64 + colors.len() * 12 + colors.len() / per_line);
    // Writing into a String cannot fail
    let _ = write!(out, "const {}: [u32; {}] = [", name, colors.len());
    for row in colors.chunks(per_line) {
        for color in row {
            let _ = write!(out, "0x{:x}, ", color);
        }
        out.push('\n');
    }
    out.push_str("];");

    Ok(out)
}

/// Create or truncate `path` and write `contents` to it.
///
/// Returns the number of bytes written.
pub fn write_table(path: &Path, contents: &str) -> Result<u64> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(contents.as_bytes())?;
    writer.flush()?;

    debug!(path = %path.display(), bytes = contents.len(), "Wrote palette table");
    Ok(contents.len() as u64)
}
