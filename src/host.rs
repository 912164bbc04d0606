use crate::constants::{DEFAULT_MAX, DEFAULT_MIN, TRACK_HEIGHT_PX, TRACK_INSET_PX};
use crate::dom;
use crate::input::{parse_number_or, HeldValue};
use glam::Vec2;
use slider_core::{native_value_at, RangeHost, Rect, ValueRange};
use web_sys as web;

/// `<input type="range">` seen through the tracker's host capability.
///
/// The element's own drag handling is suppressed while a gesture is active
/// (the pointer-down default is prevented), so the normal full-sensitivity
/// drag is reproduced here from the pointer position.
///
/// With an explicit `step` the element snaps every write to its grid, so
/// the unsnapped value is held for the gesture and read back instead.
pub struct RangeInputHost {
    input: web::HtmlInputElement,
    value_at_begin: Option<f64>,
    held: Option<HeldValue>,
}

impl RangeInputHost {
    pub fn new(input: web::HtmlInputElement) -> Self {
        Self {
            input,
            value_at_begin: None,
            held: None,
        }
    }

    /// Let the input hold fractional values and keep the browser from
    /// scrolling while the pointer is dragged away vertically.
    pub fn prepare(&self) {
        if self.input.get_attribute("step").is_none() {
            self.input.set_step("any");
            log::info!("[host] no step attribute; using step=any for fine values");
        }
        dom::set_style(&self.input.style(), "touch-action", "none");
    }

    fn write(&mut self, value: f32) {
        if value.is_finite() {
            self.input.set_value_as_number(value as f64);
            self.held = Some(HeldValue {
                precise: value,
                shown: self.input.value_as_number(),
            });
        }
    }
}

impl RangeHost for RangeInputHost {
    fn value(&self) -> f32 {
        let v = self.input.value_as_number();
        if let Some(precise) = self.held.and_then(|h| h.resolve(v)) {
            return precise;
        }
        if v.is_finite() {
            v as f32
        } else {
            parse_number_or(&self.input.value(), self.range().minimum)
        }
    }

    fn set_value(&mut self, value: f32) {
        self.write(self.range().clamp(value));
    }

    fn range(&self) -> ValueRange {
        ValueRange::new(
            parse_number_or(&self.input.min(), DEFAULT_MIN),
            parse_number_or(&self.input.max(), DEFAULT_MAX),
        )
    }

    fn bounds(&self) -> Rect {
        let rect = self.input.get_bounding_client_rect();
        let (left, top) = match self.input.parent_element() {
            Some(parent) => {
                let pr = parent.get_bounding_client_rect();
                (
                    pr.left() + parent.client_left() as f64 - parent.scroll_left() as f64,
                    pr.top() + parent.client_top() as f64 - parent.scroll_top() as f64,
                )
            }
            None => (0.0, 0.0),
        };
        Rect::new(
            (rect.left() - left) as f32,
            (rect.top() - top) as f32,
            rect.width() as f32,
            rect.height() as f32,
        )
    }

    fn track_rect(&self) -> Rect {
        let size = self.bounds().size;
        Rect::new(
            TRACK_INSET_PX,
            (size.y - TRACK_HEIGHT_PX) / 2.0,
            (size.x - 2.0 * TRACK_INSET_PX).max(0.0),
            TRACK_HEIGHT_PX,
        )
    }

    fn notify_value_changed(&mut self) {
        dom::dispatch_bubbling(&self.input, "input");
    }

    fn begin_native_tracking(&mut self, point: Vec2) {
        self.held = None;
        self.value_at_begin = Some(self.input.value_as_number());
        self.continue_native_tracking(point);
    }

    fn continue_native_tracking(&mut self, point: Vec2) {
        let width = self.bounds().width();
        let Some(next) = native_value_at(point.x, width, self.range()) else {
            return;
        };
        let current = self.value();
        self.set_value(next);
        if self.value() != current {
            self.notify_value_changed();
        }
    }

    fn end_native_tracking(&mut self, cancelled: bool) {
        self.held = None;
        let Some(start) = self.value_at_begin.take() else {
            return;
        };
        if self.input.value_as_number() != start {
            dom::dispatch_bubbling(&self.input, "change");
        }
        if cancelled {
            log::debug!("[host] gesture cancelled at value {:.3}", self.value());
        }
    }
}
