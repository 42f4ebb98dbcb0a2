use folio_core::{RevealAction, RevealConfig, RevealTracker};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

/// Observe every reveal element; returns how many are being watched.
pub fn install(document: &web::Document, cfg: &RevealConfig) -> anyhow::Result<usize> {
    let elements = dom::query_all(document, &cfg.selector);
    if elements.is_empty() {
        log::debug!("[reveal] no {} elements", cfg.selector);
        return Ok(0);
    }

    let tracker = Rc::new(RefCell::new(RevealTracker::new()));
    let tracker_cb = tracker.clone();
    let active_class = cfg.active_class.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let action = tracker_cb
                    .borrow_mut()
                    .record(&target, entry.is_intersecting());
                if action == RevealAction::Activate {
                    let _ = target.class_list().add_1(&active_class);
                    observer.unobserve(&target);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(cfg.threshold));
    init.set_root_margin(&cfg.root_margin);
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
    callback.forget();

    let count = elements.len();
    for el in elements {
        observer.observe(&el);
        tracker.borrow_mut().watch(el);
    }
    Ok(count)
}
