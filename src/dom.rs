use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// All elements matching `selector`, in document order.
pub fn query_elements(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

/// Dispatch a bubbling DOM event of type `kind` on `target`.
pub fn dispatch_bubbling(target: &web::EventTarget, kind: &str) {
    let init = web::EventInit::new();
    init.set_bubbles(true);
    if let Ok(ev) = web::Event::new_with_event_init_dict(kind, &init) {
        _ = target.dispatch_event(&ev);
    }
}

#[inline]
pub fn set_style(style: &web::CssStyleDeclaration, property: &str, value: &str) {
    _ = style.set_property(property, value);
}

/// Computed value of a CSS property, empty when unavailable.
pub fn computed_style(element: &web::Element, property: &str) -> String {
    web::window()
        .and_then(|w| w.get_computed_style(element).ok().flatten())
        .and_then(|s| s.get_property_value(property).ok())
        .unwrap_or_default()
}

pub fn add_pointer_listener(
    target: &web::EventTarget,
    kind: &str,
    mut handler: impl FnMut(web::PointerEvent) + 'static,
) {
    let closure = wasm_bindgen::closure::Closure::wrap(
        Box::new(move |ev: web::PointerEvent| handler(ev)) as Box<dyn FnMut(_)>,
    );
    _ = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
    closure.forget();
}
