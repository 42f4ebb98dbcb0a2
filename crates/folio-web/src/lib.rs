#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

pub use folio_core::PageConfig;
pub use theme::ThemeControl;

mod contact;
mod dom;
mod hover;
mod menu;
mod page_config;
mod reveal;
mod style;
mod theme;
mod typewriter;

/// What `install` found on the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Installed {
    pub theme_toggle: bool,
    pub menu: bool,
    pub contact_form: bool,
    pub reveal_elements: usize,
    pub tagline: bool,
    pub gallery_images: usize,
}

/// Apply the stored theme to the document element. Safe while the document is
/// still loading, so the page never paints in the wrong theme.
pub fn restore_theme(document: &web::Document, config: &PageConfig) -> ThemeControl {
    ThemeControl::restore(document, &config.theme)
}

/// Read the inline `#folio-config` block, falling back to defaults.
pub fn load_config(document: &web::Document) -> PageConfig {
    page_config::load(document)
}

/// Wire every handler that needs the parsed document.
pub fn install_page(document: &web::Document, config: &PageConfig) -> Installed {
    let reveal_elements = match reveal::install(document, &config.reveal) {
        Ok(n) => n,
        Err(e) => {
            log::error!("[reveal] {:?}", e);
            0
        }
    };
    Installed {
        theme_toggle: false,
        menu: menu::install(document, &config.menu),
        contact_form: contact::install(document, &config.contact),
        reveal_elements,
        tagline: typewriter::install(document, &config.tagline),
        gallery_images: hover::install(document, &config.gallery),
    }
}

/// Theme first, then everything else. Expects a parsed document.
pub fn install(document: &web::Document, config: &PageConfig) -> Installed {
    let theme_toggle = restore_theme(document, config).wire_toggle(document);
    Installed {
        theme_toggle,
        ..install_page(document, config)
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let config = load_config(&document);
    let theme = restore_theme(&document, &config);

    if document.ready_state() == "loading" {
        let doc = document.clone();
        let once = web::AddEventListenerOptions::new();
        once.set_once(true);
        let closure = Closure::once(move || {
            let installed = Installed {
                theme_toggle: theme.wire_toggle(&doc),
                ..install_page(&doc, &config)
            };
            log::info!("portfolio enhancements ready: {:?}", installed);
        });
        document
            .add_event_listener_with_callback_and_add_event_listener_options(
                "DOMContentLoaded",
                closure.as_ref().unchecked_ref(),
                &once,
            )
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        closure.forget();
    } else {
        let installed = Installed {
            theme_toggle: theme.wire_toggle(&document),
            ..install_page(&document, &config)
        };
        log::info!("portfolio enhancements ready: {:?}", installed);
    }
    Ok(())
}
