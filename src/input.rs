use glam::Vec2;
use web_sys as web;

// ---------------- Pointer helpers ----------------
#[inline]
pub fn client_to_local(client: Vec2, rect_left: f32, rect_top: f32) -> Vec2 {
    client - Vec2::new(rect_left, rect_top)
}

/// Pointer position relative to the element's top-left corner, in CSS px.
#[inline]
pub fn pointer_local_px(ev: &web::PointerEvent, el: &web::Element) -> Vec2 {
    let rect = el.get_bounding_client_rect();
    client_to_local(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        rect.left() as f32,
        rect.top() as f32,
    )
}

/// Only the primary pointer's main button starts a gesture.
#[inline]
pub fn is_tracking_pointer(is_primary: bool, button: i16) -> bool {
    is_primary && button == 0
}

// ---------------- Attribute helpers ----------------
/// Numeric attribute value, falling back the way HTML does for empty or
/// invalid input.
#[inline]
pub fn parse_number_or(text: &str, fallback: f32) -> f32 {
    text.trim()
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(fallback)
}

/// Value written to an input whose `step` snaps it, kept at full precision
/// for as long as the element still shows what was written.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeldValue {
    pub precise: f32,
    pub shown: f64,
}

impl HeldValue {
    /// `None` once something else has changed the element's value.
    #[inline]
    pub fn resolve(self, current: f64) -> Option<f32> {
        (current == self.shown).then_some(self.precise)
    }
}
