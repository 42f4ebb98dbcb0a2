use folio_core::{Theme, ThemeConfig, ThemeStore, ThemeSwitch};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

use crate::dom;

/// `localStorage` slot; reads return `None` and writes are dropped when storage
/// is unavailable (private mode, sandboxed iframes).
pub struct LocalStore {
    storage: Option<web::Storage>,
    key: String,
}

impl LocalStore {
    pub fn open(key: &str) -> Self {
        let storage = web::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::debug!("[theme] localStorage unavailable; preference will not persist");
        }
        Self {
            storage,
            key: key.to_owned(),
        }
    }
}

impl ThemeStore for LocalStore {
    fn load(&self) -> Option<String> {
        self.storage
            .as_ref()
            .and_then(|s| s.get_item(&self.key).ok().flatten())
    }

    fn save(&mut self, value: &str) {
        if let Some(storage) = &self.storage {
            if let Err(e) = storage.set_item(&self.key, value) {
                log::debug!("[theme] persist failed: {:?}", e);
            }
        }
    }
}

fn apply(document: &web::Document, cfg: &ThemeConfig, theme: Theme) {
    if let Some(root) = document.document_element() {
        let _ = root.set_attribute(&cfg.attribute, theme.as_str());
    }
    if let Some(toggle) = document.get_element_by_id(&cfg.toggle_id) {
        toggle.set_text_content(Some(theme.glyph()));
    }
}

/// Stored theme applied to the document, plus the switch its toggle drives.
///
/// Restoring only touches the document element, which exists even while the
/// page is still loading. The toggle control is wired separately once the
/// body has been parsed.
#[derive(Clone)]
pub struct ThemeControl {
    switch: Rc<RefCell<ThemeSwitch<LocalStore>>>,
    cfg: ThemeConfig,
}

impl ThemeControl {
    pub fn restore(document: &web::Document, cfg: &ThemeConfig) -> Self {
        let switch = ThemeSwitch::restore(LocalStore::open(&cfg.storage_key));
        apply(document, cfg, switch.current());
        log::info!("[theme] restored {}", switch.current());
        Self {
            switch: Rc::new(RefCell::new(switch)),
            cfg: cfg.clone(),
        }
    }

    pub fn current(&self) -> Theme {
        self.switch.borrow().current()
    }

    /// Sync the glyph and wire the toggle; `false` if the control is absent.
    pub fn wire_toggle(&self, document: &web::Document) -> bool {
        apply(document, &self.cfg, self.current());
        let switch = self.switch.clone();
        let doc = document.clone();
        let cfg = self.cfg.clone();
        let installed = dom::add_click_listener(document, &self.cfg.toggle_id, move |_ev| {
            let next = switch.borrow_mut().toggle();
            apply(&doc, &cfg, next);
        });
        if !installed {
            log::debug!("[theme] #{} missing; toggle disabled", self.cfg.toggle_id);
        }
        installed
    }
}
