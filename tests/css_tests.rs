// Host-side tests for CSS string helpers.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod css {
    include!("../src/css.rs");
}

use css::*;
use std::time::Duration;

#[test]
fn px_formats_whole_and_fractional_values() {
    assert_eq!(px(2.0), "2px");
    assert_eq!(px(0.5), "0.5px");
    assert_eq!(px(-3.0), "-3px");
}

#[test]
fn rgba_scales_channels() {
    assert_eq!(rgba([1.0, 1.0, 1.0, 0.75]), "rgba(255, 255, 255, 0.75)");
    assert_eq!(rgba([0.0, 0.5, 2.0, 1.0]), "rgba(0, 128, 255, 1)");
}

#[test]
fn parse_rgb_reads_computed_colours() {
    assert_eq!(parse_rgb("rgb(255, 0, 0)"), Some([1.0, 0.0, 0.0, 1.0]));
    assert_eq!(parse_rgb(" rgba(0, 0, 255, 0.5) "), Some([0.0, 0.0, 1.0, 0.5]));
    assert_eq!(parse_rgb("rgb(255 255 255 / 0.25)"), Some([1.0, 1.0, 1.0, 0.25]));
}

#[test]
fn parse_rgb_rejects_transparent_and_unknown() {
    assert_eq!(parse_rgb("rgba(0, 0, 0, 0)"), None);
    assert_eq!(parse_rgb("transparent"), None);
    assert_eq!(parse_rgb(""), None);
    assert_eq!(parse_rgb("rgb(1, 2)"), None);
    assert_eq!(parse_rgb("rgb(a, b, c)"), None);
}

#[test]
fn box_shadow_scales_alpha() {
    assert_eq!(
        box_shadow([0.0, 0.5], 1.0, [0.0, 0.0, 0.0, 1.0], 0.5),
        "0px 0.5px 1px rgba(0, 0, 0, 0.5)"
    );
}

#[test]
fn transition_lists_only_animated_properties() {
    assert_eq!(transition(Duration::ZERO, Duration::ZERO), "none");
    assert_eq!(
        transition(Duration::ZERO, Duration::from_millis(200)),
        "opacity 0.2s ease-in-out"
    );
    let both = transition(Duration::from_millis(400), Duration::from_millis(400));
    assert!(both.starts_with("left 0.4s ease-in-out, top 0.4s"));
    assert!(both.ends_with("opacity 0.4s ease-in-out"));
    assert_eq!(both.matches("ease-in-out").count(), 5);
}
