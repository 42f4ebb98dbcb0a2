// Host-side tests for page configuration defaults and JSON overrides.

use folio_core::constants::*;
use folio_core::{ConfigError, PageConfig};
use std::time::Duration;

#[test]
fn defaults_match_page_markup() {
    let cfg = PageConfig::default();
    assert_eq!(cfg.theme.storage_key, THEME_STORAGE_KEY);
    assert_eq!(cfg.theme.attribute, "data-theme");
    assert_eq!(cfg.menu.open_class, "active");
    assert_eq!(cfg.contact.placeholder_token, "YOUR_FORM_ID");
    assert_eq!(cfg.reveal.threshold, 0.15);
    assert_eq!(cfg.tagline.selector, "#hero h2:nth-of-type(2)");
    assert_eq!(cfg.gallery.teardown_ms, 300);
    assert!(cfg.validate().is_ok());
}

#[test]
fn partial_json_overrides_only_named_fields() {
    let cfg = PageConfig::from_json(
        r#"{"theme":{"storage_key":"portfolio-theme"},"tagline":{"step_ms":80}}"#,
    )
    .unwrap();
    assert_eq!(cfg.theme.storage_key, "portfolio-theme");
    assert_eq!(cfg.theme.toggle_id, THEME_TOGGLE_ID);
    assert_eq!(cfg.tagline.timing().step, Duration::from_millis(80));
    assert_eq!(
        cfg.tagline.timing().start_delay,
        Duration::from_millis(u64::from(TYPE_START_DELAY_MS))
    );
    assert_eq!(cfg.gallery, PageConfig::default().gallery);
}

#[test]
fn empty_object_is_the_default_config() {
    assert_eq!(PageConfig::from_json("{}").unwrap(), PageConfig::default());
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = PageConfig::from_json("{theme:").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn out_of_range_values_are_rejected() {
    let cases = [
        (r#"{"reveal":{"threshold":1.5}}"#, "reveal.threshold"),
        (r#"{"contact":{"placeholder_token":""}}"#, "contact.placeholder_token"),
        (r#"{"gallery":{"max_width_px":0}}"#, "gallery.max_width_px"),
        (r#"{"gallery":{"viewport_fraction":-0.5}}"#, "gallery.viewport_fraction"),
    ];
    for (raw, expected) in cases {
        match PageConfig::from_json(raw) {
            Err(ConfigError::Invalid { field, .. }) => assert_eq!(field, expected),
            other => panic!("{raw}: expected invalid {expected}, got {other:?}"),
        }
    }
}
