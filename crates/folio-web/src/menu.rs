use folio_core::MenuConfig;
use web_sys as web;

use crate::{dom, style};

// The open class on the nav container drives visibility through CSS.
pub fn install(document: &web::Document, cfg: &MenuConfig) -> bool {
    let Some(container) = dom::query(document, &cfg.container_selector) else {
        log::debug!("[menu] {} missing; menu disabled", cfg.container_selector);
        return false;
    };

    let nav = container.clone();
    let open_class = cfg.open_class.clone();
    let installed = dom::add_click_listener(document, &cfg.button_id, move |_ev| {
        let _ = nav.class_list().toggle(&open_class);
    });
    if !installed {
        log::debug!("[menu] #{} missing", cfg.button_id);
    }

    for link in dom::query_all(document, &cfg.link_selector) {
        let nav = container.clone();
        let open_class = cfg.open_class.clone();
        let doc = document.clone();
        dom::listen(&link, "click", move |_ev| {
            if nav.class_list().contains(&open_class) {
                let _ = nav.class_list().remove_1(&open_class);
                if let Some(body) = doc.body() {
                    dom::set_styles(&body, &style::scroll_restored());
                }
            }
        });
    }
    installed
}
