//! Tracking-session state shared with the frontends.
//!
//! A session lives from pointer-down to pointer-up (or cancel) and is never
//! reused. Frontends read it to report what the gesture is doing.

use crate::geometry::{OverlayGeometry, Rect};
use glam::Vec2;
use instant::Instant;

/// Where the tracker is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TrackingState {
    #[default]
    Idle,
    NormalTracking,
    PrecisionTracking,
}

impl TrackingState {
    pub fn is_tracking(&self) -> bool {
        !matches!(self, TrackingState::Idle)
    }

    pub fn label(&self) -> &'static str {
        match self {
            TrackingState::Idle => "idle",
            TrackingState::NormalTracking => "normal",
            TrackingState::PrecisionTracking => "precision",
        }
    }
}

/// Data captured for one gesture.
#[derive(Clone, Debug)]
pub struct TrackingSession {
    pub last_pointer: Vec2,
    pub control_bounds: Rect,
    pub track_rect: Rect,
    pub precision_active: bool,
    /// Layout most recently handed to the presenter.
    pub geometry: OverlayGeometry,
    pub started_at: Instant,
    pub moves: u32,
}

impl TrackingSession {
    pub fn new(point: Vec2, control_bounds: Rect, track_rect: Rect) -> Self {
        Self {
            last_pointer: point,
            control_bounds,
            track_rect,
            precision_active: false,
            geometry: OverlayGeometry::neutral(control_bounds, track_rect),
            started_at: Instant::now(),
            moves: 0,
        }
    }

    pub fn state(&self) -> TrackingState {
        if self.precision_active {
            TrackingState::PrecisionTracking
        } else {
            TrackingState::NormalTracking
        }
    }
}

/// Result of feeding one pointer-move to the tracker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoveOutcome {
    /// Host value after the move.
    pub value: f32,
    /// Overlay layout after the move (neutral in normal tracking).
    pub geometry: OverlayGeometry,
    /// True when precision tracking handled the move instead of the host.
    pub consumed: bool,
    pub state: TrackingState,
    /// Dampening factor, present in precision tracking.
    pub divisor: Option<f32>,
}
