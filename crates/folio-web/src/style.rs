// Inline style declarations applied by the handlers. Kept free of web-sys so
// the host tests can include this file directly.

use folio_core::{ClonePlacement, StatusTone, RESTING_TRANSFORM};

pub type Declarations = Vec<(&'static str, String)>;

pub fn clone_anchor(placement: &ClonePlacement) -> Declarations {
    vec![
        ("top", placement.top.clone()),
        ("left", placement.left.clone()),
        ("width", placement.width.clone()),
        ("height", placement.height.clone()),
    ]
}

pub fn clone_expanded(placement: &ClonePlacement) -> Declarations {
    vec![("transform", placement.expanded_transform.clone())]
}

pub fn clone_retracting() -> Declarations {
    vec![
        ("transform", RESTING_TRANSFORM.to_owned()),
        ("opacity", "0".to_owned()),
    ]
}

pub fn original_restored() -> Declarations {
    vec![("opacity", "1".to_owned())]
}

pub fn status(tone: StatusTone) -> Declarations {
    vec![
        ("display", "block".to_owned()),
        ("color", tone.css_color().to_owned()),
    ]
}

pub fn scroll_restored() -> Declarations {
    vec![("overflow", "auto".to_owned())]
}
