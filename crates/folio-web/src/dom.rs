use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::style::Declarations;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Install a click handler on the element with `element_id`; returns `false`
/// when the element is absent.
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    handler: impl FnMut(web::Event) + 'static,
) -> bool {
    match document.get_element_by_id(element_id) {
        Some(el) => {
            listen(&el, "click", handler);
            true
        }
        None => false,
    }
}

/// Page-lifetime listener; the closure is leaked on purpose.
pub fn listen(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(_)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::warn!("[dom] add {} listener failed: {:?}", event, e);
    }
    closure.forget();
}

pub fn query(document: &web::Document, selector: &str) -> Option<web::Element> {
    match document.query_selector(selector) {
        Ok(found) => found,
        Err(e) => {
            log::warn!("[dom] bad selector {:?}: {:?}", selector, e);
            None
        }
    }
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(e) => {
            log::warn!("[dom] bad selector {:?}: {:?}", selector, e);
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

pub fn set_styles(el: &web::HtmlElement, declarations: &Declarations) {
    let style = el.style();
    for (property, value) in declarations {
        if let Err(e) = style.set_property(property, value) {
            log::debug!("[dom] set {}={} failed: {:?}", property, value, e);
        }
    }
}

#[inline]
pub fn viewport_width(window: &web::Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}
