//! Integration tests for palettegen
//!
//! These tests run the whole pipeline, library and binary, against the
//! published smooth palette table.

mod common;

use common::{assertions, fixtures};
use pretty_assertions::assert_eq;
use std::process::Command;

use palettegen::palette::{unpack_rgba, SMOOTH_STOPS};
use palettegen::{
    generate_smooth_palette, render_table, write_table, PALETTE_NAME, PALETTE_SIZE,
    VALUES_PER_LINE,
};

fn render_smooth_palette() -> String {
    let table = generate_smooth_palette().expect("Failed to generate palette");
    render_table(PALETTE_NAME, table.colors(), VALUES_PER_LINE).expect("Failed to render table")
}

#[test]
fn test_rendered_table_matches_reference() {
    assert_eq!(render_smooth_palette(), fixtures::SMOOTH_PALETTE);
}

#[test]
fn test_table_shape() {
    let text = render_smooth_palette();

    assert!(text.starts_with("const PALETTE: [u32; 1024] = [0xff640700, "));
    assert!(text.ends_with(", \n];"));

    // 128 rows of 8, each ending in a newline
    assert_eq!(text.matches('\n').count(), 128);
    for line in text.lines().take(128) {
        assert_eq!(line.matches("0x").count(), 8, "bad row: {:?}", line);
    }

    let values = fixtures::parse_table(&text);
    assert_eq!(values.len(), PALETTE_SIZE);
    assert_eq!(values[0], 0xff640700);
    assertions::assert_all_opaque(&values);
}

#[test]
fn test_hex_is_lowercase() {
    let text = render_smooth_palette();
    let body = &text[text.find("= [").unwrap()..];
    assert!(!body.chars().any(|c| c.is_ascii_uppercase()));
    assert!(!body.contains("0x0"), "literals must not be zero padded");
}

#[test]
fn test_distinct_count() {
    let table = generate_smooth_palette().unwrap();
    assert_eq!(table.distinct_colors(), fixtures::SMOOTH_PALETTE_DISTINCT);
    assert!(table.distinct_colors() >= 1 && table.distinct_colors() <= PALETTE_SIZE);
}

#[test]
fn test_stops_are_reproduced() {
    let table = generate_smooth_palette().unwrap();
    for stop in &SMOOTH_STOPS {
        let j = (stop.position * PALETTE_SIZE as f64).round() as usize;
        let j = j.min(PALETTE_SIZE - 1);
        let [r, g, b, a] = unpack_rgba(table.colors()[j]);
        assertions::assert_channel_near("red", r, stop.color.red, 1);
        assertions::assert_channel_near("green", g, stop.color.green, 1);
        assertions::assert_channel_near("blue", b, stop.color.blue, 1);
        assert_eq!(a, 255);
    }
}

#[test]
fn test_red_rises_monotonically_to_second_stop() {
    let table = generate_smooth_palette().unwrap();

    // Sample positions strictly inside [0.0, 0.16]
    let reds: Vec<u8> = table.colors()[..=163]
        .iter()
        .map(|&c| unpack_rgba(c)[0])
        .collect();

    assertions::assert_non_decreasing(&reds);
    assert!(reds.iter().all(|&r| r <= 32));
}

#[test]
fn test_write_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("palette.txt");

    let first_bytes = write_table(&path, &render_smooth_palette()).unwrap();
    let first = std::fs::read(&path).unwrap();

    let second_bytes = write_table(&path, &render_smooth_palette()).unwrap();
    let second = std::fs::read(&path).unwrap();

    assert_eq!(first_bytes, second_bytes);
    assert_eq!(first, second);
    assert_eq!(first.len() as u64, first_bytes);
}

#[test]
fn test_binary_writes_table_and_prints_count() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("palette.txt");

    let output = Command::new(env!("CARGO_BIN_EXE_palettegen"))
        .arg("--output")
        .arg(&path)
        .env_remove("PALETTEGEN_CONFIG")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run palettegen");

    assert!(output.status.success(), "palettegen failed: {:?}", output);
    assert_eq!(String::from_utf8_lossy(&output.stdout), "881\n");
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        fixtures::SMOOTH_PALETTE
    );
}

#[test]
fn test_binary_defaults_to_palette_txt() {
    let dir = tempfile::tempdir().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_palettegen"))
        .current_dir(dir.path())
        .env_remove("PALETTEGEN_OUTPUT")
        .env_remove("PALETTEGEN_CONFIG")
        .env_remove("PALETTEGEN_LOG_LEVEL")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run palettegen");

    assert!(output.status.success());
    let written = std::fs::read_to_string(dir.path().join("palette.txt")).unwrap();
    assert_eq!(written, fixtures::SMOOTH_PALETTE);
}

#[test]
fn test_binary_reports_unwritable_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_such_dir").join("palette.txt");

    let output = Command::new(env!("CARGO_BIN_EXE_palettegen"))
        .arg("-o")
        .arg(&path)
        .env_remove("PALETTEGEN_CONFIG")
        .output()
        .expect("Failed to run palettegen");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_binary_rejects_bad_log_level() {
    let dir = tempfile::tempdir().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_palettegen"))
        .current_dir(dir.path())
        .arg("--log-level")
        .arg("loud")
        .env_remove("PALETTEGEN_CONFIG")
        .output()
        .expect("Failed to run palettegen");

    assert!(!output.status.success());
    assert!(!dir.path().join("palette.txt").exists());
}
