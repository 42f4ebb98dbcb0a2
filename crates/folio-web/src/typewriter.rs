use folio_core::{TaglineConfig, Typewriter};
use gloo_timers::future::sleep;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

use crate::dom;

pub fn install(document: &web::Document, cfg: &TaglineConfig) -> bool {
    let Some(el) = dom::query(document, &cfg.selector) else {
        log::debug!("[tagline] {} missing", cfg.selector);
        return false;
    };
    let writer = Typewriter::new(&el.text_content().unwrap_or_default(), cfg.timing());
    el.set_text_content(Some(""));

    spawn_local(async move {
        for step in writer.steps() {
            sleep(step.delay).await;
            // Detached mid-run: stop quietly
            if !el.is_connected() {
                return;
            }
            el.set_text_content(Some(step.text));
        }
    });
    true
}
