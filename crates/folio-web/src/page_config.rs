use folio_core::constants::CONFIG_ELEMENT_ID;
use folio_core::PageConfig;
use web_sys as web;

/// Read `<script type="application/json" id="folio-config">` if the page has
/// one. Bad JSON or invalid values are logged and the defaults used instead.
///
/// Place the block before the loader script: the theme is applied as soon as
/// the module starts, possibly before the rest of the document is parsed.
pub fn load(document: &web::Document) -> PageConfig {
    let Some(raw) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return PageConfig::default();
    };
    match PageConfig::from_json(&raw) {
        Ok(config) => {
            log::info!("[config] loaded overrides from #{}", CONFIG_ELEMENT_ID);
            config
        }
        Err(e) => {
            log::error!("[config] #{}: {}; using defaults", CONFIG_ELEMENT_ID, e);
            PageConfig::default()
        }
    }
}
