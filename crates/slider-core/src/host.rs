use crate::geometry::{native_value_at, Rect, ValueRange};
use glam::Vec2;

/// Capability interface a range control exposes to the precision tracker.
///
/// The host stays the owner of the value. The tracker only reads it, writes
/// it back through [`RangeHost::set_value`] and asks the host to notify its
/// listeners.
pub trait RangeHost {
    fn value(&self) -> f32;

    /// Store a new value. Implementations must clamp to [`RangeHost::range`];
    /// the tracker never clamps on its own.
    fn set_value(&mut self, value: f32);

    fn range(&self) -> ValueRange;

    /// Control frame in the overlay container's coordinate space.
    fn bounds(&self) -> Rect;

    /// Visual track sub-region, relative to the control's own origin.
    fn track_rect(&self) -> Rect;

    /// Broadcast a value-changed notification to the host's listeners.
    fn notify_value_changed(&mut self);

    /// Host's own drag handling, started on pointer-down.
    fn begin_native_tracking(&mut self, _point: Vec2) {}

    /// Host's own full-sensitivity drag step. Receives the unmodified local
    /// pointer position for every move made outside precision distance.
    fn continue_native_tracking(&mut self, point: Vec2);

    /// Host's own drag handling, finished on pointer-up or cancel.
    fn end_native_tracking(&mut self, _cancelled: bool) {}
}

/// In-memory range control with the usual thumb-follows-pointer drag.
///
/// Used by the native front-end and as a test double.
#[derive(Clone, Debug)]
pub struct SimpleRangeHost {
    pub value: f32,
    pub range: ValueRange,
    pub bounds: Rect,
    pub track: Rect,
    pub notifications: usize,
}

impl SimpleRangeHost {
    pub fn new(range: ValueRange, bounds: Rect, value: f32) -> Self {
        let track = Rect::new(0.0, (bounds.height() - 2.0) / 2.0, bounds.width(), 2.0);
        Self {
            value: range.clamp(value),
            range,
            bounds,
            track,
            notifications: 0,
        }
    }

    pub fn with_track(mut self, track: Rect) -> Self {
        self.track = track;
        self
    }

    /// Value a native slider shows with its thumb under local `x`.
    pub fn value_at(&self, x: f32) -> f32 {
        native_value_at(x, self.bounds.width(), self.range).unwrap_or(self.value)
    }
}

impl RangeHost for SimpleRangeHost {
    fn value(&self) -> f32 {
        self.value
    }

    fn set_value(&mut self, value: f32) {
        self.value = self.range.clamp(value);
    }

    fn range(&self) -> ValueRange {
        self.range
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn track_rect(&self) -> Rect {
        self.track
    }

    fn notify_value_changed(&mut self) {
        self.notifications += 1;
    }

    fn continue_native_tracking(&mut self, point: Vec2) {
        let next = self.value_at(point.x);
        if next != self.value {
            self.set_value(next);
            self.notify_value_changed();
        }
    }
}
