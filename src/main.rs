//! palettegen - writes the smooth fractal palette as a Rust array literal
//!
//! Prints the number of distinct colors in the table on stdout.

use std::time::Instant;
use tracing::info;

use palettegen::{
    generate_smooth_palette, init_tracing, log_error, log_generation_stats, log_operation_end,
    log_operation_start, log_timed_operation, render_table, write_table, Config, Result,
    PALETTE_NAME, VALUES_PER_LINE,
};

fn main() -> Result<()> {
    // Load configuration
    let config = Config::load().map_err(|e| {
        init_tracing("info");
        log_error(&e, "Failed to load configuration");
        e
    })?;

    // Validate configuration
    config.validate().map_err(|e| {
        init_tracing("info");
        log_error(&e, "Invalid configuration");
        e
    })?;

    init_tracing(&config.log_level);
    info!("Starting palettegen v{}", env!("CARGO_PKG_VERSION"));

    let table = log_timed_operation("generate_table", generate_smooth_palette).map_err(|e| {
        log_error(&e, "Failed to generate palette");
        e
    })?;

    let text = render_table(PALETTE_NAME, table.colors(), VALUES_PER_LINE)?;

    let output = &config.output.path;
    let start = Instant::now();
    log_operation_start("write_table", Some(output.display().to_string().as_str()));
    let bytes = write_table(output, &text).map_err(|e| {
        log_error(&e, "Failed to write palette table");
        e
    })?;
    log_operation_end("write_table", start, true);

    log_generation_stats(
        output,
        table.len(),
        table.distinct_colors(),
        table.clamped_samples(),
        bytes,
    );

    println!("{}", table.distinct_colors());
    Ok(())
}
