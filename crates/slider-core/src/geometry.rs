//! Precision remapping arithmetic and overlay layout.
//!
//! Everything here is pure: inputs are the control frame, the track sub-rect,
//! the host's value range and the pointer position; outputs are value deltas
//! and snapped overlay coordinates. Degenerate inputs surface as
//! [`GeometryError`] instead of NaN or infinity.

use crate::constants::{
    CALIPER_TOP_INSET, LEFT_CALIPER_INSET, NEUTRAL_TRACK_WIDTH, RIGHT_CALIPER_INSET,
    RIGHT_TRACK_END_INSET, TRACK_WIDTH_PAD,
};
use crate::error::{finite, GeometryError, GeometryResult};
use glam::Vec2;

/// Axis-aligned rectangle in points.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.origin.x
    }
    #[inline]
    pub fn y(&self) -> f32 {
        self.origin.y
    }
    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }
    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.origin + self.size;
        point.x >= self.origin.x && point.y >= self.origin.y && point.x < max.x && point.y < max.y
    }
}

/// The host's `[minimum, maximum]` value interval.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueRange {
    pub minimum: f32,
    pub maximum: f32,
}

impl ValueRange {
    pub const fn new(minimum: f32, maximum: f32) -> Self {
        Self { minimum, maximum }
    }

    #[inline]
    pub fn span(&self) -> f32 {
        self.maximum - self.minimum
    }

    /// Clamp `value` into the range. Hosts use this to honour the clamp-on-set
    /// contract of [`crate::RangeHost::set_value`].
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        if self.span() > 0.0 {
            value.clamp(self.minimum, self.maximum)
        } else {
            self.minimum
        }
    }

    /// Returns the span, or an error when `maximum <= minimum`.
    pub fn checked_span(&self) -> GeometryResult<f32> {
        let span = finite(self.span(), "value range")?;
        if span > 0.0 {
            Ok(span)
        } else {
            Err(GeometryError::EmptyRange {
                minimum: self.minimum,
                maximum: self.maximum,
            })
        }
    }

    /// Fractions of the range lying left and right of `value`.
    ///
    /// For any value inside the range the two fractions sum to 1.
    pub fn fractions(&self, value: f32) -> GeometryResult<(f32, f32)> {
        let span = self.checked_span()?;
        let left = (value - self.minimum) / span;
        let right = (self.maximum - value) / span;
        Ok((finite(left, "left fraction")?, finite(right, "right fraction")?))
    }
}

/// Value a plain slider shows with its thumb under local `x`: the position
/// across the control width, clamped to the track ends.
pub fn native_value_at(x: f32, width: f32, range: ValueRange) -> Option<f32> {
    if width.is_nan() || width <= 0.0 {
        return None;
    }
    let t = (x / width).clamp(0.0, 1.0);
    Some(range.minimum + t * range.span())
}

/// Snap a coordinate to whole points by truncating toward zero, the same way
/// platform UI geometry is snapped (`23.9 -> 23`, never `24`).
#[inline]
pub fn snap(coordinate: f32) -> i32 {
    coordinate.trunc() as i32
}

/// Distance of the pointer from the control's horizontal centre line.
///
/// `pointer` is local to the control.
#[inline]
pub fn vertical_touch_delta(pointer: Vec2, bounds: Rect) -> f32 {
    (pointer.y - bounds.height() / 2.0).abs()
}

/// True when the vertical distance is far enough from the track for
/// precision tracking. `threshold` is measured in control heights.
#[inline]
pub fn is_precision_distance(vertical_delta: f32, bounds: Rect, threshold: f32) -> bool {
    vertical_delta >= bounds.height() * threshold
}

/// Dampening factor: how many control heights the pointer is away from the
/// centre line. Grows without bound.
pub fn value_divisor(vertical_delta: f32, bounds: Rect) -> GeometryResult<f32> {
    if bounds.height() == 0.0 {
        return Err(GeometryError::ZeroHeight);
    }
    let divisor = finite((vertical_delta / bounds.height()).abs(), "value divisor")?;
    if divisor == 0.0 {
        return Err(GeometryError::NonFinite("value divisor"));
    }
    Ok(divisor)
}

/// Value change produced by `horizontal_delta` points of movement at the
/// given dampening.
pub fn value_increment(
    horizontal_delta: f32,
    range: ValueRange,
    bounds: Rect,
    divisor: f32,
) -> GeometryResult<f32> {
    if bounds.width() == 0.0 {
        return Err(GeometryError::ZeroWidth);
    }
    if divisor == 0.0 {
        return Err(GeometryError::NonFinite("value divisor"));
    }
    let value_per_point = range.checked_span()? / bounds.width();
    finite(
        (horizontal_delta * value_per_point) / divisor,
        "value increment",
    )
}

/// Overlay placement handed to a presenter.
///
/// Horizontal coordinates are snapped whole points in the overlay container's
/// coordinate space. Vertical placement does not change while tracking.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OverlayGeometry {
    pub left_caliper_x: i32,
    pub right_caliper_x: i32,
    pub caliper_y: f32,
    pub left_track_x: i32,
    pub left_track_width: i32,
    pub right_track_x: i32,
    pub right_track_width: i32,
    pub track_y: f32,
    pub track_height: f32,
}

impl OverlayGeometry {
    /// Resting layout: calipers against the control edges, short track stubs
    /// at either end of the track.
    pub fn neutral(bounds: Rect, track: Rect) -> Self {
        let right_edge = bounds.x() + bounds.width();
        Self {
            left_caliper_x: snap(bounds.x() + LEFT_CALIPER_INSET),
            right_caliper_x: snap(right_edge - RIGHT_CALIPER_INSET),
            caliper_y: bounds.y() + CALIPER_TOP_INSET,
            left_track_x: snap(bounds.x() + track.x()),
            left_track_width: snap(NEUTRAL_TRACK_WIDTH),
            right_track_x: snap(right_edge - NEUTRAL_TRACK_WIDTH - track.x()),
            right_track_width: snap(NEUTRAL_TRACK_WIDTH),
            track_y: bounds.y() + track.y(),
            track_height: track.height(),
        }
    }

    /// Precision layout for `value` at dampening `divisor`.
    ///
    /// The calipers mark where the value sits on the unscaled track, pulled
    /// toward the edges as the divisor shrinks; the extension bars fill the
    /// gap between each caliper and its edge.
    pub fn precision(
        bounds: Rect,
        track: Rect,
        range: ValueRange,
        value: f32,
        divisor: f32,
    ) -> GeometryResult<Self> {
        if bounds.width() == 0.0 {
            return Err(GeometryError::ZeroWidth);
        }
        if divisor == 0.0 {
            return Err(GeometryError::NonFinite("value divisor"));
        }
        let (left_pct, right_pct) = range.fractions(value)?;
        let width = bounds.width();
        let half_divisor = divisor / 2.0;

        let left_span = width * left_pct;
        let right_span = width * right_pct;
        let left_offset = left_span / half_divisor;
        let right_offset = right_span / half_divisor;

        let left_caliper_x = bounds.x() + left_span - left_offset + LEFT_CALIPER_INSET;
        let right_caliper_x =
            bounds.x() + width - right_span + right_offset - RIGHT_CALIPER_INSET;
        let left_track_width = left_span - left_offset + TRACK_WIDTH_PAD;
        let right_track_width = right_span - right_offset + TRACK_WIDTH_PAD;
        let right_track_x = bounds.x() + width - RIGHT_TRACK_END_INSET - right_track_width;

        let neutral = Self::neutral(bounds, track);
        Ok(Self {
            left_caliper_x: snap(finite(left_caliper_x, "left caliper")?),
            right_caliper_x: snap(finite(right_caliper_x, "right caliper")?),
            left_track_width: snap(finite(left_track_width, "left track width")?),
            right_track_width: snap(finite(right_track_width, "right track width")?),
            right_track_x: snap(finite(right_track_x, "right track origin")?),
            ..neutral
        })
    }
}
