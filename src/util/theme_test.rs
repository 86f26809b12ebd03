#![cfg(not(feature = "web"))]

use super::*;

#[test]
fn toggle_flips_theme_value() {
    assert_eq!(toggle(Theme::Dark), Theme::Light);
    assert_eq!(toggle(Theme::Light), Theme::Dark);
}

#[test]
fn toggle_twice_restores_original_value() {
    assert_eq!(toggle(toggle(Theme::Dark)), Theme::Dark);
}

#[test]
fn apply_is_noop_but_callable() {
    apply(Theme::Dark);
    apply(Theme::Light);
}
