use crate::dom::add_pointer_listener;
use crate::host::RangeInputHost;
use crate::input;
use crate::overlay::DomOverlayPresenter;
use slider_core::PrecisionTracker;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub type SharedTracker = Rc<RefCell<PrecisionTracker<RangeInputHost, DomOverlayPresenter>>>;

#[derive(Clone)]
pub struct SliderWiring {
    pub input: web::HtmlInputElement,
    pub tracker: SharedTracker,
    /// Pointer that owns the current gesture; others are ignored.
    pub active_pointer: Rc<RefCell<Option<i32>>>,
}

impl SliderWiring {
    fn owns(&self, ev: &web::PointerEvent) -> bool {
        *self.active_pointer.borrow() == Some(ev.pointer_id())
    }

    fn release(&self, ev: &web::PointerEvent) {
        self.active_pointer.borrow_mut().take();
        _ = self.input.release_pointer_capture(ev.pointer_id());
    }
}

pub fn wire_pointer_handlers(w: SliderWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_pointercancel(&w);
}

fn wire_pointerdown(w: &SliderWiring) {
    let w = w.clone();
    let target = w.input.clone();
    add_pointer_listener(&target, "pointerdown", move |ev: web::PointerEvent| {
        if w.active_pointer.borrow().is_some() {
            return;
        }
        if !input::is_tracking_pointer(ev.is_primary(), ev.button()) {
            return;
        }
        *w.active_pointer.borrow_mut() = Some(ev.pointer_id());
        _ = w.input.set_pointer_capture(ev.pointer_id());
        // The prevented default would also have focused the input.
        _ = w.input.focus();
        let pos = input::pointer_local_px(&ev, &w.input);
        w.tracker.borrow_mut().pointer_down(pos);
        ev.prevent_default();
    });
}

fn wire_pointermove(w: &SliderWiring) {
    let w = w.clone();
    let target = w.input.clone();
    add_pointer_listener(&target, "pointermove", move |ev: web::PointerEvent| {
        if !w.owns(&ev) {
            return;
        }
        let pos = input::pointer_local_px(&ev, &w.input);
        if let Some(outcome) = w.tracker.borrow_mut().pointer_move(pos) {
            log::trace!(
                "[pointer] {} value={:.4} divisor={:?}",
                outcome.state.label(),
                outcome.value,
                outcome.divisor
            );
        }
        ev.prevent_default();
    });
}

fn wire_pointerup(w: &SliderWiring) {
    let w = w.clone();
    let target = w.input.clone();
    add_pointer_listener(&target, "pointerup", move |ev: web::PointerEvent| {
        if !w.owns(&ev) {
            return;
        }
        w.release(&ev);
        w.tracker.borrow_mut().pointer_up();
        ev.prevent_default();
    });
}

fn wire_pointercancel(w: &SliderWiring) {
    // Losing capture without a pointerup (element removed, capture stolen)
    // ends the gesture the same way a platform cancel does.
    for kind in ["pointercancel", "lostpointercapture"] {
        let w = w.clone();
        let target = w.input.clone();
        add_pointer_listener(&target, kind, move |ev: web::PointerEvent| {
            if !w.owns(&ev) {
                return;
            }
            w.release(&ev);
            w.tracker.borrow_mut().pointer_cancel();
        });
    }
}
