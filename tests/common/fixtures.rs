//! Reference output and helpers for reading rendered tables back.

/// The published smooth palette table, byte for byte
pub const SMOOTH_PALETTE: &str = include_str!("../fixtures/smooth_palette.txt");

/// Distinct colors in the published table
pub const SMOOTH_PALETTE_DISTINCT: usize = 881;

/// Extract every `0x...` literal between the opening and closing brackets.
///
/// # Panics
///
/// Panics if the text has no `= [` ... `];` array body or a literal does
/// not parse as a `u32`.
pub fn parse_table(text: &str) -> Vec<u32> {
    let start = text.find("= [").expect("missing array opening") + 3;
    let end = text.rfind("];").expect("missing array closing");

    text[start..end]
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            let hex = s.strip_prefix("0x").expect("literal without 0x prefix");
            u32::from_str_radix(hex, 16).expect("invalid hex literal")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_table() {
        let values = parse_table("const T: [u32; 2] = [0x1, 0xff640700, \n];");
        assert_eq!(values, vec![1, 0xff640700]);
    }
}
