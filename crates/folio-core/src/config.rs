//! Page configuration shared by every handler.
//!
//! Defaults match the markup the portfolio ships with. A page can override
//! individual fields through an inline JSON block; anything it omits keeps the
//! default. The web front-end builds one `PageConfig` at start-up and hands the
//! relevant section to each installer, so no handler reaches for globals.

use crate::constants::*;
use crate::typewriter::TypeTiming;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct PageConfig {
    pub theme: ThemeConfig,
    pub menu: MenuConfig,
    pub contact: ContactConfig,
    pub reveal: RevealConfig,
    pub tagline: TaglineConfig,
    pub gallery: GalleryConfig,
}

impl PageConfig {
    /// Parse a (possibly partial) JSON override and validate the result.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: PageConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(ConfigError::Invalid {
                field: "reveal.threshold",
                reason: "must be within 0..=1",
            });
        }
        if self.contact.placeholder_token.is_empty() {
            return Err(ConfigError::Invalid {
                field: "contact.placeholder_token",
                reason: "must not be empty",
            });
        }
        if !(self.gallery.max_width_px > 0.0) {
            return Err(ConfigError::Invalid {
                field: "gallery.max_width_px",
                reason: "must be positive",
            });
        }
        if !(self.gallery.viewport_fraction > 0.0) {
            return Err(ConfigError::Invalid {
                field: "gallery.viewport_fraction",
                reason: "must be positive",
            });
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    pub toggle_id: String,
    pub attribute: String,
    pub storage_key: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            toggle_id: THEME_TOGGLE_ID.to_owned(),
            attribute: THEME_ATTRIBUTE.to_owned(),
            storage_key: THEME_STORAGE_KEY.to_owned(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct MenuConfig {
    pub button_id: String,
    pub container_selector: String,
    pub link_selector: String,
    pub open_class: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            button_id: MENU_BUTTON_ID.to_owned(),
            container_selector: NAV_CONTAINER_SELECTOR.to_owned(),
            link_selector: NAV_LINK_SELECTOR.to_owned(),
            open_class: ACTIVE_CLASS.to_owned(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ContactConfig {
    pub form_id: String,
    pub status_id: String,
    pub placeholder_token: String,
    pub messages: Messages,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            form_id: CONTACT_FORM_ID.to_owned(),
            status_id: FORM_STATUS_ID.to_owned(),
            placeholder_token: PLACEHOLDER_TOKEN.to_owned(),
            messages: Messages::default(),
        }
    }
}

/// User-facing status texts for the contact form.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Messages {
    pub misconfigured: String,
    pub sending: String,
    pub success: String,
    pub failure: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            misconfigured: MSG_MISCONFIGURED.to_owned(),
            sending: MSG_SENDING.to_owned(),
            success: MSG_SUCCESS.to_owned(),
            failure: MSG_FAILURE.to_owned(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct RevealConfig {
    pub selector: String,
    pub active_class: String,
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selector: REVEAL_SELECTOR.to_owned(),
            active_class: ACTIVE_CLASS.to_owned(),
            threshold: REVEAL_THRESHOLD,
            root_margin: REVEAL_ROOT_MARGIN.to_owned(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct TaglineConfig {
    pub selector: String,
    pub start_delay_ms: u32,
    pub step_ms: u32,
}

impl TaglineConfig {
    pub fn timing(&self) -> TypeTiming {
        TypeTiming {
            start_delay: Duration::from_millis(u64::from(self.start_delay_ms)),
            step: Duration::from_millis(u64::from(self.step_ms)),
        }
    }
}

impl Default for TaglineConfig {
    fn default() -> Self {
        Self {
            selector: TAGLINE_SELECTOR.to_owned(),
            start_delay_ms: TYPE_START_DELAY_MS,
            step_ms: TYPE_STEP_MS,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct GalleryConfig {
    pub image_selector: String,
    pub clone_class: String,
    pub max_width_px: f64,
    pub viewport_fraction: f64,
    pub teardown_ms: u32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            image_selector: GALLERY_IMAGE_SELECTOR.to_owned(),
            clone_class: CLONE_CLASS.to_owned(),
            max_width_px: CLONE_MAX_WIDTH_PX,
            viewport_fraction: CLONE_VIEWPORT_FRACTION,
            teardown_ms: CLONE_TEARDOWN_MS,
        }
    }
}
