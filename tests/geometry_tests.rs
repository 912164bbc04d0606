// Host-side tests for the precision remapping arithmetic and overlay layout.

use glam::Vec2;
use slider_core::*;

const BOUNDS: Rect = Rect::new(0.0, 0.0, 100.0, 30.0);
const RANGE: ValueRange = ValueRange::new(0.0, 100.0);

fn track() -> Rect {
    Rect::new(0.0, 14.0, 100.0, 2.0)
}

#[test]
fn snap_truncates_instead_of_rounding() {
    assert_eq!(snap(23.9), 23);
    assert_eq!(snap(23.0), 23);
    assert_eq!(snap(0.999), 0);
    // toward zero, as platform integer conversion does
    assert_eq!(snap(-1.5), -1);
}

#[test]
fn caliper_position_is_truncated() {
    // value at minimum puts the left caliper at origin + 2 = 23.9
    let bounds = Rect::new(21.9, 0.0, 100.0, 30.0);
    let g = OverlayGeometry::precision(bounds, track(), RANGE, 0.0, 3.0).unwrap();
    assert_eq!(g.left_caliper_x, 23);
}

#[test]
fn vertical_delta_is_measured_from_centre_line() {
    assert_eq!(vertical_touch_delta(Vec2::new(0.0, 15.0), BOUNDS), 0.0);
    assert_eq!(vertical_touch_delta(Vec2::new(0.0, 75.0), BOUNDS), 60.0);
    assert_eq!(vertical_touch_delta(Vec2::new(0.0, -45.0), BOUNDS), 60.0);
}

#[test]
fn precision_only_past_two_heights() {
    for tenth in 0..600 {
        let v = tenth as f32 / 10.0;
        assert!(!is_precision_distance(v, BOUNDS, 2.0), "v={}", v);
    }
    for v in [60.0, 60.5, 90.0, 1000.0] {
        assert!(is_precision_distance(v, BOUNDS, 2.0), "v={}", v);
    }
}

#[test]
fn divisor_is_vertical_distance_in_heights() {
    assert_eq!(value_divisor(60.0, BOUNDS).unwrap(), 2.0);
    assert_eq!(value_divisor(90.0, BOUNDS).unwrap(), 3.0);
    assert_eq!(value_divisor(3000.0, BOUNDS).unwrap(), 100.0);
}

#[test]
fn increment_matches_worked_example() {
    let inc = value_increment(10.0, RANGE, BOUNDS, 2.0).unwrap();
    assert!((inc - 5.0).abs() < 1e-6);
    let back = value_increment(-10.0, RANGE, BOUNDS, 2.0).unwrap();
    assert!((back + 5.0).abs() < 1e-6);
}

#[test]
fn dampening_is_monotonic_past_threshold() {
    let horizontal = 7.0;
    let normal = horizontal * RANGE.span() / BOUNDS.width();
    let mut previous = f32::MAX;
    for step in 0..200 {
        let v = 60.0 + step as f32 * 5.0;
        let divisor = value_divisor(v, BOUNDS).unwrap();
        let inc = value_increment(horizontal, RANGE, BOUNDS, divisor).unwrap();
        assert!(inc.abs() < normal, "v={} inc={} normal={}", v, inc, normal);
        assert!(inc <= previous, "dampening must not weaken as v grows");
        previous = inc;
    }
}

#[test]
fn degenerate_inputs_are_errors_not_nan() {
    let flat = Rect::new(0.0, 0.0, 100.0, 0.0);
    assert_eq!(value_divisor(10.0, flat), Err(GeometryError::ZeroHeight));

    let thin = Rect::new(0.0, 0.0, 0.0, 30.0);
    assert_eq!(
        value_increment(5.0, RANGE, thin, 2.0),
        Err(GeometryError::ZeroWidth)
    );

    let empty = ValueRange::new(3.0, 3.0);
    assert!(matches!(
        value_increment(5.0, empty, BOUNDS, 2.0),
        Err(GeometryError::EmptyRange { .. })
    ));
    assert!(OverlayGeometry::precision(BOUNDS, track(), empty, 3.0, 2.0).is_err());

    let inverted = ValueRange::new(10.0, 0.0);
    assert!(inverted.checked_span().is_err());
}

#[test]
fn fractions_sum_to_one() {
    for i in 0..=100 {
        let value = i as f32;
        let (left, right) = RANGE.fractions(value).unwrap();
        assert!((left + right - 1.0).abs() < 1e-6, "value={}", value);
    }
    let offset = ValueRange::new(-20.0, 5.0);
    let (left, right) = offset.fractions(-7.5).unwrap();
    assert!((left - 0.5).abs() < 1e-6);
    assert!((right - 0.5).abs() < 1e-6);
}

#[test]
fn calipers_reach_the_edges_at_range_ends() {
    let bounds = Rect::new(12.0, 40.0, 200.0, 30.0);
    let neutral = OverlayGeometry::neutral(bounds, track());
    for divisor in [2.0, 3.5, 10.0, 250.0] {
        let at_min = OverlayGeometry::precision(bounds, track(), RANGE, 0.0, divisor).unwrap();
        assert_eq!(at_min.left_caliper_x, neutral.left_caliper_x);
        let at_max = OverlayGeometry::precision(bounds, track(), RANGE, 100.0, divisor).unwrap();
        assert_eq!(at_max.right_caliper_x, neutral.right_caliper_x);
    }
}

#[test]
fn neutral_layout_hugs_the_control_edges() {
    let bounds = Rect::new(10.0, 20.0, 200.0, 30.0);
    let track = Rect::new(3.0, 13.0, 194.0, 4.0);
    let g = OverlayGeometry::neutral(bounds, track);
    assert_eq!(g.left_caliper_x, 12);
    assert_eq!(g.right_caliper_x, 206);
    assert_eq!(g.caliper_y, 21.0);
    assert_eq!(g.left_track_x, 13);
    assert_eq!(g.left_track_width, 2);
    assert_eq!(g.right_track_x, 205);
    assert_eq!(g.right_track_width, 2);
    assert_eq!(g.track_y, 33.0);
    assert_eq!(g.track_height, 4.0);
}

#[test]
fn large_divisor_moves_calipers_toward_value() {
    let g = OverlayGeometry::precision(BOUNDS, track(), RANGE, 50.0, 100.0).unwrap();
    assert_eq!(g.left_caliper_x, 51);
    assert_eq!(g.right_caliper_x, 47);
    assert_eq!(g.left_track_width, 50);
    assert_eq!(g.right_track_width, 50);
    assert_eq!(g.right_track_x, 49);
    // vertical placement and the left bar origin stay neutral
    let neutral = OverlayGeometry::neutral(BOUNDS, track());
    assert_eq!(g.left_track_x, neutral.left_track_x);
    assert_eq!(g.caliper_y, neutral.caliper_y);
    assert_eq!(g.track_y, neutral.track_y);
    assert_eq!(g.track_height, neutral.track_height);
}

#[test]
fn off_centre_value_lays_out_asymmetric_overlays() {
    let g = OverlayGeometry::precision(BOUNDS, track(), RANGE, 25.0, 4.0).unwrap();
    assert_eq!(g.left_caliper_x, 14);
    assert_eq!(g.right_caliper_x, 58);
    assert_eq!(g.left_track_width, 13);
    assert_eq!(g.right_track_width, 38);
    assert_eq!(g.right_track_x, 60);
}

#[test]
fn native_mapping_follows_pointer_and_clamps() {
    assert_eq!(native_value_at(25.0, 100.0, RANGE), Some(25.0));
    assert_eq!(native_value_at(-10.0, 100.0, RANGE), Some(0.0));
    assert_eq!(native_value_at(500.0, 100.0, RANGE), Some(100.0));
    assert_eq!(native_value_at(5.0, 0.0, RANGE), None);
}

#[test]
fn range_clamp_honours_bounds() {
    assert_eq!(RANGE.clamp(-3.0), 0.0);
    assert_eq!(RANGE.clamp(103.0), 100.0);
    assert_eq!(RANGE.clamp(42.0), 42.0);
    assert_eq!(ValueRange::new(1.0, 1.0).clamp(9.0), 1.0);
}

#[test]
fn rect_contains_is_half_open() {
    let r = Rect::new(10.0, 10.0, 20.0, 5.0);
    assert!(r.contains(Vec2::new(10.0, 10.0)));
    assert!(r.contains(Vec2::new(29.9, 14.9)));
    assert!(!r.contains(Vec2::new(30.0, 12.0)));
    assert!(!r.contains(Vec2::new(15.0, 9.0)));
}
