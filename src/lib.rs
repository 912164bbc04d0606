#![cfg(target_arch = "wasm32")]
pub mod constants;
pub mod css;
pub mod dom;
pub mod events;
pub mod host;
pub mod input;
pub mod overlay;

use anyhow::{anyhow, bail};
use constants::{PRECISION_ATTRIBUTE, PRECISION_SELECTOR};
use events::{wire_pointer_handlers, SliderWiring};
use host::RangeInputHost;
use overlay::DomOverlayPresenter;
use slider_core::PrecisionTracker;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

const ATTACHED_ATTRIBUTE: &str = "data-precision-attached";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("slider-web starting");

    match attach_all() {
        Ok(count) => log::info!("[attach] {} precision slider(s) found", count),
        Err(e) => log::error!("init error: {:?}", e),
    }
    Ok(())
}

/// Attach precision tracking to the range input with the given id. Inputs
/// carrying the `data-precision` attribute are attached automatically on
/// start; this covers inputs created later.
#[wasm_bindgen]
pub fn attach_precision_slider(element_id: &str) -> Result<(), JsValue> {
    let attach = || -> anyhow::Result<()> {
        let document = dom::window_document().ok_or_else(|| anyhow!("no document"))?;
        let el = document
            .get_element_by_id(element_id)
            .ok_or_else(|| anyhow!("missing #{}", element_id))?;
        attach_element(&document, el)
    };
    attach().map_err(|e| JsValue::from_str(&format!("{:#}", e)))
}

fn attach_all() -> anyhow::Result<usize> {
    let document = dom::window_document().ok_or_else(|| anyhow!("no document"))?;
    let mut count = 0;
    for el in dom::query_elements(&document, PRECISION_SELECTOR) {
        let id = el.id();
        match attach_element(&document, el) {
            Ok(()) => count += 1,
            Err(e) => log::warn!("[attach] skipping #{}: {:#}", id, e),
        }
    }
    Ok(count)
}

fn attach_element(document: &web::Document, el: web::Element) -> anyhow::Result<()> {
    if el.has_attribute(ATTACHED_ATTRIBUTE) {
        return Ok(());
    }
    let input = el
        .dyn_into::<web::HtmlInputElement>()
        .map_err(|_| anyhow!("element is not an <input>"))?;
    if input.type_() != "range" {
        bail!("input type is `{}`, expected `range`", input.type_());
    }
    let container = input
        .parent_element()
        .ok_or_else(|| anyhow!("range input has no parent element"))?;

    let host = RangeInputHost::new(input.clone());
    host.prepare();
    let presenter = DomOverlayPresenter::new(document.clone(), container);
    let mut tracker = PrecisionTracker::new(host, presenter);
    tracker.attach()?;

    _ = input.set_attribute(ATTACHED_ATTRIBUTE, "");
    if !input.has_attribute(PRECISION_ATTRIBUTE) {
        _ = input.set_attribute(PRECISION_ATTRIBUTE, "");
    }
    wire_pointer_handlers(SliderWiring {
        input,
        tracker: Rc::new(RefCell::new(tracker)),
        active_pointer: Rc::new(RefCell::new(None)),
    });
    Ok(())
}
