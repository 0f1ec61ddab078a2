#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_preference_is_light_outside_the_browser() {
    assert!(!read_preference());
}

#[test]
fn toggle_flips_boolean_value() {
    assert!(toggle(false));
    assert!(!toggle(true));
}

#[test]
fn stored_values_parse_back() {
    assert_eq!(parse_stored(stored_value(true)), Some(true));
    assert_eq!(parse_stored(stored_value(false)), Some(false));
    assert_eq!(parse_stored("sepia"), None);
}

#[test]
fn apply_is_noop_but_callable() {
    apply(false);
    apply(true);
}
