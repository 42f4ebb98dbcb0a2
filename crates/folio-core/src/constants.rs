// Page markup contract and effect tuning defaults

// Theme
pub const THEME_STORAGE_KEY: &str = "theme";
pub const THEME_ATTRIBUTE: &str = "data-theme";
pub const THEME_TOGGLE_ID: &str = "theme-toggle";
pub const SUN_GLYPH: &str = "\u{2600}\u{fe0f}";
pub const MOON_GLYPH: &str = "\u{1f319}";

// Mobile menu
pub const MENU_BUTTON_ID: &str = "mobile-menu";
pub const NAV_CONTAINER_SELECTOR: &str = ".nav-links";
pub const NAV_LINK_SELECTOR: &str = ".nav-links a";
pub const ACTIVE_CLASS: &str = "active";

// Contact form
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const FORM_STATUS_ID: &str = "form-status";
pub const PLACEHOLDER_TOKEN: &str = "YOUR_FORM_ID";
pub const MSG_MISCONFIGURED: &str =
    "\u{26a0}\u{fe0f} Please setup your Formspree ID in index.html first!";
pub const MSG_SENDING: &str = "Sending...";
pub const MSG_SUCCESS: &str = "\u{2705} Message sent successfully!";
pub const MSG_FAILURE: &str = "\u{274c} Oops! There was a problem submitting your form";

// Scroll reveal
pub const REVEAL_SELECTOR: &str = ".reveal";
pub const REVEAL_THRESHOLD: f64 = 0.15;
pub const REVEAL_ROOT_MARGIN: &str = "0px";

// Typewriter
pub const TAGLINE_SELECTOR: &str = "#hero h2:nth-of-type(2)";
pub const TYPE_START_DELAY_MS: u32 = 500;
pub const TYPE_STEP_MS: u32 = 50;

// Hover expansion
pub const GALLERY_IMAGE_SELECTOR: &str = ".project-gallery img";
pub const CLONE_CLASS: &str = "img-expand-clone";
pub const CLONE_MAX_WIDTH_PX: f64 = 400.0;
pub const CLONE_VIEWPORT_FRACTION: f64 = 0.9;
// Must match the CSS transition duration on the clone class
pub const CLONE_TEARDOWN_MS: u32 = 300;

// Inline JSON block that may override any of the above
pub const CONFIG_ELEMENT_ID: &str = "folio-config";
