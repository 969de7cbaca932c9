use super::*;

#[test]
fn composer_height_tracks_content_below_cap() {
    assert_eq!(composer_height(42, 160), 42);
    assert_eq!(composer_height(160, 160), 160);
}

#[test]
fn composer_height_caps_at_max() {
    assert_eq!(composer_height(400, 160), 160);
}

#[test]
fn composer_height_treats_negative_as_zero() {
    assert_eq!(composer_height(-5, 160), 0);
}
