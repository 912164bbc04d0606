use crate::constants::{OVERLAY_CLASS, OVERLAY_Z_INDEX};
use crate::css;
use crate::dom::{self, set_style};
use anyhow::anyhow;
use slider_core::{
    OverlayGeometry, OverlayPresenter, OverlaySlots, OverlayStyle, SlotKind, Transition,
};
use std::time::Duration;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Calipers and track extensions as absolutely positioned `<div>`s inside
/// the slider's parent element. Motion and fades use CSS transitions, so a
/// new request simply retargets whatever is still animating.
pub struct DomOverlayPresenter {
    document: web::Document,
    container: web::Element,
    style: OverlayStyle,
    slots: Option<OverlaySlots<web::HtmlElement>>,
    geometry_duration: Duration,
    opacity_duration: Duration,
}

impl DomOverlayPresenter {
    pub fn new(document: web::Document, container: web::Element) -> Self {
        Self {
            document,
            container,
            style: OverlayStyle::default(),
            slots: None,
            geometry_duration: Duration::ZERO,
            opacity_duration: Duration::ZERO,
        }
    }

    fn create_slot(
        &self,
        kind: SlotKind,
        style: &OverlayStyle,
        background: Option<[f32; 4]>,
    ) -> anyhow::Result<web::HtmlElement> {
        let el = self
            .document
            .create_element("div")
            .map_err(|e| anyhow!("create {}: {:?}", kind.name(), e))?
            .dyn_into::<web::HtmlElement>()
            .map_err(|_| anyhow!("{} is not an HtmlElement", kind.name()))?;
        el.set_class_name(&format!("{} {}", OVERLAY_CLASS, kind.name()));

        let s = el.style();
        set_style(&s, "position", "absolute");
        set_style(&s, "pointer-events", "none");
        set_style(&s, "opacity", "0");
        set_style(&s, "z-index", &OVERLAY_Z_INDEX.to_string());
        set_style(&s, "border-radius", &css::px(style.corner_radius));
        if kind.is_caliper() {
            set_style(&s, "background-color", &css::rgba(style.caliper_color));
            set_style(
                &s,
                "box-shadow",
                &css::box_shadow(
                    style.caliper_shadow_offset,
                    style.caliper_shadow_radius,
                    style.caliper_shadow_color,
                    style.caliper_shadow_opacity,
                ),
            );
        } else {
            set_style(
                &s,
                "background-color",
                &css::rgba(style.resolved_track_color(background)),
            );
        }
        Ok(el)
    }

    fn write_transitions(&self) {
        let value = css::transition(self.geometry_duration, self.opacity_duration);
        if let Some(slots) = &self.slots {
            slots.for_each(|_, el| set_style(&el.style(), "transition", &value));
        }
    }
}

/// Absolutely positioned children need a positioned container.
fn ensure_positioned(container: &web::Element) {
    if dom::computed_style(container, "position") == "static" {
        if let Some(el) = container.dyn_ref::<web::HtmlElement>() {
            set_style(&el.style(), "position", "relative");
        }
    }
}

impl OverlayPresenter for DomOverlayPresenter {
    fn attach_overlays(&mut self, style: &OverlayStyle) -> anyhow::Result<()> {
        if self.slots.is_some() {
            return Ok(());
        }
        ensure_positioned(&self.container);
        let background = css::parse_rgb(&dom::computed_style(&self.container, "background-color"));
        let slots = OverlaySlots::try_from_fn(|kind| self.create_slot(kind, style, background))?;
        let mut appended = Ok(());
        slots.for_each(|kind, el| {
            if appended.is_ok() {
                appended = self
                    .container
                    .append_child(el)
                    .map(|_| ())
                    .map_err(|e| anyhow!("append {}: {:?}", kind.name(), e));
            }
        });
        appended?;
        self.style = style.clone();
        self.slots = Some(slots);
        log::info!(
            "[overlay] attached to <{}>",
            self.container.tag_name().to_lowercase()
        );
        Ok(())
    }

    fn apply_geometry(&mut self, geometry: &OverlayGeometry, transition: Transition) {
        self.geometry_duration = transition.duration();
        self.write_transitions();
        let Some(slots) = &self.slots else {
            return;
        };
        let frames = geometry.slot_frames(&self.style);
        slots.for_each(|kind, el| {
            let frame = frames.get(kind);
            let s = el.style();
            set_style(&s, "left", &css::px(frame.origin.x));
            set_style(&s, "top", &css::px(frame.origin.y));
            set_style(&s, "width", &css::px(frame.size.x));
            set_style(&s, "height", &css::px(frame.size.y));
        });
    }

    fn set_visibility(&mut self, visible: bool, transition: Transition) {
        self.opacity_duration = transition.duration();
        self.write_transitions();
        if let Some(slots) = &self.slots {
            let opacity = if visible { "1" } else { "0" };
            slots.for_each(|_, el| set_style(&el.style(), "opacity", opacity));
        }
    }
}
