// Host-side tests for the overlay slot helpers and style configuration.

use slider_core::*;
use std::time::Duration;

#[test]
fn slots_visit_tracks_before_calipers() {
    let slots = OverlaySlots::from_fn(|kind| kind.name().to_string());
    let mut order = Vec::new();
    slots.for_each(|kind, name| {
        assert_eq!(kind.name(), name.as_str());
        order.push(kind);
    });
    assert_eq!(
        order,
        vec![
            SlotKind::LeftTrack,
            SlotKind::RightTrack,
            SlotKind::LeftCaliper,
            SlotKind::RightCaliper,
        ]
    );
}

#[test]
fn slots_apply_to_all_mutably() {
    let mut slots = OverlaySlots::from_fn(|_| 0.0_f32);
    slots.for_each_mut(|_, opacity| *opacity = 1.0);
    assert_eq!(slots, OverlaySlots::from_fn(|_| 1.0_f32));
}

#[test]
fn caliper_and_track_groups() {
    let slots = OverlaySlots::from_fn(|kind| kind);
    assert!(slots.calipers().iter().all(|k| k.is_caliper()));
    assert!(slots.tracks().iter().all(|k| !k.is_caliper()));
    assert_eq!(*slots.get(SlotKind::RightTrack), SlotKind::RightTrack);
}

#[test]
fn try_from_fn_stops_at_first_error() {
    let mut built = 0;
    let result: Result<OverlaySlots<u8>, String> = OverlaySlots::try_from_fn(|kind| {
        if kind == SlotKind::LeftTrack {
            Err(format!("{} failed", kind.name()))
        } else {
            built += 1;
            Ok(1)
        }
    });
    assert_eq!(result.unwrap_err(), "left-track failed");
    assert_eq!(built, 2);
}

#[test]
fn slot_frames_use_style_for_calipers() {
    let bounds = Rect::new(10.0, 20.0, 200.0, 30.0);
    let track = Rect::new(0.0, 13.0, 200.0, 4.0);
    let geometry = OverlayGeometry::neutral(bounds, track);
    let style = OverlayStyle::default();
    let frames = geometry.slot_frames(&style);

    assert_eq!(frames.left_caliper.origin.x, 12.0);
    assert_eq!(frames.left_caliper.origin.y, 21.0);
    assert_eq!(frames.left_caliper.size.x, style.caliper_size[0]);
    assert_eq!(frames.left_caliper.size.y, style.caliper_size[1]);
    assert_eq!(frames.right_track.origin.x, geometry.right_track_x as f32);
    assert_eq!(frames.right_track.size.x, 2.0);
    assert_eq!(frames.right_track.size.y, 4.0);
}

#[test]
fn track_colour_falls_back_to_white() {
    let style = OverlayStyle::default();
    assert_eq!(style.resolved_track_color(None), [1.0, 1.0, 1.0, 0.75]);
    assert_eq!(
        style.resolved_track_color(Some([0.2, 0.4, 0.6, 1.0])),
        [0.2, 0.4, 0.6, 0.75]
    );

    let fixed = OverlayStyle {
        track_color: Some([0.0, 0.0, 1.0, 1.0]),
        ..OverlayStyle::default()
    };
    assert_eq!(
        fixed.resolved_track_color(Some([0.2, 0.4, 0.6, 1.0])),
        [0.0, 0.0, 1.0, 0.75]
    );
}

#[test]
fn transition_durations() {
    assert_eq!(Transition::Instant.duration(), Duration::ZERO);
    assert!(!Transition::Instant.is_animated());
    let fade = Transition::Animated(Duration::from_millis(200));
    assert!(fade.is_animated());
    assert_eq!(fade.duration(), Duration::from_millis(200));
    assert!(!Transition::Animated(Duration::ZERO).is_animated());
}

#[test]
fn recording_presenter_tracks_state() {
    let mut p = RecordingPresenter::new();
    p.attach_overlays(&OverlayStyle::default()).unwrap();
    let g = OverlayGeometry::default();
    p.apply_geometry(&g, Transition::Instant);
    p.set_visibility(true, Transition::Animated(Duration::from_millis(200)));
    assert!(p.attached);
    assert!(p.visible);
    assert_eq!(p.geometry, Some(g));
    assert_eq!(p.requests.len(), 3);
    p.clear();
    assert!(p.requests.is_empty());
}
