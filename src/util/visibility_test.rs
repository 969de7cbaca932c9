use super::*;

#[test]
fn from_open_maps_flags() {
    assert_eq!(Visibility::from_open(true), Visibility::Shown);
    assert_eq!(Visibility::from_open(false), Visibility::Hidden);
}

#[test]
fn hidden_state_sets_class_and_aria() {
    assert!(Visibility::Hidden.hidden_class_present());
    assert_eq!(Visibility::Hidden.aria_hidden(), "true");
    assert!(!Visibility::Shown.hidden_class_present());
    assert_eq!(Visibility::Shown.aria_hidden(), "false");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn apply_is_noop_but_callable() {
    apply("menu-modal", Visibility::Shown);
    apply("menu-modal", Visibility::Hidden);
}
