#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn apply_is_noop_but_callable() {
    apply(Mode::Dark);
    apply(Mode::Light);
}

#[test]
fn theme_attribute_is_data_theme() {
    assert_eq!(THEME_ATTRIBUTE, "data-theme");
}
