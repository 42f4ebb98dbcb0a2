// Host-side tests for the theme flag and its persistence.

use folio_core::constants::{MOON_GLYPH, SUN_GLYPH};
use folio_core::{MemoryStore, Theme, ThemeSwitch};

#[test]
fn no_stored_preference_defaults_to_dark_with_sun_glyph() {
    let switch = ThemeSwitch::restore(MemoryStore::default());
    assert_eq!(switch.current(), Theme::Dark);
    assert_eq!(switch.current().as_str(), "dark");
    assert_eq!(switch.current().glyph(), SUN_GLYPH);
    // Restoring never writes
    assert_eq!(switch.store().writes(), 0);
}

#[test]
fn stored_light_is_restored_with_moon_glyph() {
    let switch = ThemeSwitch::restore(MemoryStore::with_value("light"));
    assert_eq!(switch.current(), Theme::Light);
    assert_eq!(switch.current().glyph(), MOON_GLYPH);
}

#[test]
fn unknown_stored_value_falls_back_to_dark() {
    for raw in ["", "Dark", "solarized", " light"] {
        let switch = ThemeSwitch::restore(MemoryStore::with_value(raw));
        assert_eq!(switch.current(), Theme::Dark, "stored {raw:?}");
    }
}

#[test]
fn toggle_persists_each_flip() {
    let mut switch = ThemeSwitch::restore(MemoryStore::default());
    assert_eq!(switch.toggle(), Theme::Light);
    assert_eq!(switch.store().value(), Some("light"));
    assert_eq!(switch.store().writes(), 1);
}

#[test]
fn toggling_twice_round_trips_theme_and_store() {
    let mut switch = ThemeSwitch::restore(MemoryStore::with_value("dark"));
    let before = switch.current();
    switch.toggle();
    switch.toggle();
    assert_eq!(switch.current(), before);
    assert_eq!(switch.store().value(), Some("dark"));
    assert_eq!(switch.store().writes(), 2);
}

#[test]
fn parse_and_display_agree() {
    for theme in [Theme::Dark, Theme::Light] {
        assert_eq!(Theme::parse(&theme.to_string()), Some(theme));
        assert_eq!(theme.toggled().toggled(), theme);
    }
}
