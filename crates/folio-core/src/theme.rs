//! Light/dark theme flag and its persistence contract.
//!
//! The stored value is one of `"dark"` or `"light"`. Anything else, including
//! no value at all, reads as dark. The toggle glyph names the action on
//! offer: a sun while dark, a moon while light.

use crate::constants::{MOON_GLYPH, SUN_GLYPH};
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Theme::Dark => SUN_GLYPH,
            Theme::Light => MOON_GLYPH,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key-value slot holding the persisted theme string.
pub trait ThemeStore {
    fn load(&self) -> Option<String>;
    fn save(&mut self, value: &str);
}

/// In-memory store for hosts without browser storage.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    value: Option<String>,
    writes: usize,
}

impl MemoryStore {
    pub fn with_value(value: &str) -> Self {
        Self {
            value: Some(value.to_owned()),
            writes: 0,
        }
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl ThemeStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.value.clone()
    }

    fn save(&mut self, value: &str) {
        self.value = Some(value.to_owned());
        self.writes += 1;
    }
}

/// Current theme plus the store it is persisted to.
///
/// The store is read once in [`ThemeSwitch::restore`] and written once per
/// [`ThemeSwitch::toggle`].
#[derive(Debug)]
pub struct ThemeSwitch<S: ThemeStore> {
    store: S,
    current: Theme,
}

impl<S: ThemeStore> ThemeSwitch<S> {
    pub fn restore(store: S) -> Self {
        let stored = store.load();
        let current = stored.as_deref().and_then(Theme::parse).unwrap_or_default();
        if let Some(raw) = stored.as_deref().filter(|raw| Theme::parse(raw).is_none()) {
            log::debug!("ignoring unknown stored theme {:?}", raw);
        }
        Self { store, current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        self.store.save(self.current.as_str());
        self.current
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
