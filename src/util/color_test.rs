use super::*;

#[test]
fn parse_hex_rgb_supports_short_and_long_forms() {
    assert_eq!(parse_hex_rgb("#ABC"), Some(Rgb::new(170, 187, 204)));
    assert_eq!(parse_hex_rgb("  #a1B2c3 "), Some(Rgb::new(161, 178, 195)));
}

#[test]
fn parse_hex_rgb_accepts_missing_hash() {
    assert_eq!(parse_hex_rgb("fff"), Some(Rgb::new(255, 255, 255)));
    assert_eq!(parse_hex_rgb("00FF7f"), Some(Rgb::new(0, 255, 127)));
}

#[test]
fn parse_hex_rgb_rejects_invalid_inputs() {
    assert_eq!(parse_hex_rgb(""), None);
    assert_eq!(parse_hex_rgb("#"), None);
    assert_eq!(parse_hex_rgb("#12"), None);
    assert_eq!(parse_hex_rgb("#abcd"), None);
    assert_eq!(parse_hex_rgb("#12GG34"), None);
    assert_eq!(parse_hex_rgb("zzzzzz"), None);
    assert_eq!(parse_hex_rgb("##abc"), None);
    assert_eq!(parse_hex_rgb("+1+2+3"), None);
}

#[test]
fn parse_hex_rgb_rejects_multibyte_input_without_panicking() {
    assert_eq!(parse_hex_rgb("éé"), None);
    assert_eq!(parse_hex_rgb("#ab€"), None);
}

#[test]
fn to_hex_uses_canonical_lowercase() {
    assert_eq!(Rgb::new(170, 187, 204).to_hex(), "#aabbcc");
    assert_eq!(Rgb::new(0, 1, 2).to_hex(), "#000102");
}

#[test]
fn parse_hex_rgb_ignores_surrounding_whitespace_only() {
    assert_eq!(parse_hex_rgb(" #fff "), Some(Rgb::new(255, 255, 255)));
    assert_eq!(parse_hex_rgb("\t0a0b0c\n"), Some(Rgb::new(10, 11, 12)));
    assert_eq!(parse_hex_rgb("# fff"), None);
    assert_eq!(parse_hex_rgb("#f f f"), None);
}
