// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn client_to_local_subtracts_element_origin() {
    let local = client_to_local(Vec2::new(130.0, 95.0), 80.0, 80.0);
    assert_eq!(local, Vec2::new(50.0, 15.0));
    // pointer above/left of the element gives negative coordinates
    let outside = client_to_local(Vec2::new(70.0, 20.0), 80.0, 80.0);
    assert_eq!(outside, Vec2::new(-10.0, -60.0));
}

#[test]
fn only_primary_main_button_tracks() {
    assert!(is_tracking_pointer(true, 0));
    assert!(!is_tracking_pointer(true, 2));
    assert!(!is_tracking_pointer(false, 0));
}

#[test]
fn parse_number_or_falls_back() {
    assert_eq!(parse_number_or("12.5", 0.0), 12.5);
    assert_eq!(parse_number_or(" -3 ", 0.0), -3.0);
    assert_eq!(parse_number_or("", 100.0), 100.0);
    assert_eq!(parse_number_or("abc", 7.0), 7.0);
    assert_eq!(parse_number_or("inf", 7.0), 7.0);
    assert_eq!(parse_number_or("NaN", 7.0), 7.0);
}

#[test]
fn held_value_survives_step_snapping_until_changed_elsewhere() {
    let held = HeldValue {
        precise: 50.25,
        shown: 50.0,
    };
    // the input still shows the snapped write
    assert_eq!(held.resolve(50.0), Some(50.25));
    // keyboard or script moved it on
    assert_eq!(held.resolve(51.0), None);
}
