//! Geometry and lifecycle of the hover-zoom clone.
//!
//! A clone is anchored on the hovered image's viewport rectangle and scaled in
//! place, so it grows from the anchored corner without moving. Each hover owns
//! one `CloneLifecycle`; overlapping hovers get independent lifecycles.

use crate::config::GalleryConfig;
use glam::DVec2;

pub const RESTING_TRANSFORM: &str = "scale(1)";

/// Viewport-relative bounding rectangle, as reported by the browser.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClientRect {
    /// (left, top)
    pub origin: DVec2,
    /// (width, height)
    pub size: DVec2,
}

impl ClientRect {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            origin: DVec2::new(left, top),
            size: DVec2::new(width, height),
        }
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.origin.y
    }
    #[inline]
    pub fn left(&self) -> f64 {
        self.origin.x
    }
    #[inline]
    pub fn width(&self) -> f64 {
        self.size.x
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.size.y
    }
}

/// `min(max_width, fraction * viewport) / width`; 1.0 for degenerate widths.
pub fn expansion_scale(width: f64, viewport_width: f64, gallery: &GalleryConfig) -> f64 {
    let target = gallery
        .max_width_px
        .min(viewport_width * gallery.viewport_fraction);
    if !(width > 0.0) || !width.is_finite() || !target.is_finite() {
        return 1.0;
    }
    target / width
}

pub fn scale_transform(scale: f64) -> String {
    format!("scale({scale})")
}

#[inline]
fn px(value: f64) -> String {
    format!("{value}px")
}

/// CSS values that put a clone over its source and then enlarge it.
#[derive(Clone, Debug, PartialEq)]
pub struct ClonePlacement {
    pub top: String,
    pub left: String,
    pub width: String,
    pub height: String,
    pub scale: f64,
    pub expanded_transform: String,
}

impl ClonePlacement {
    pub fn new(rect: ClientRect, scale: f64) -> Self {
        Self {
            top: px(rect.top()),
            left: px(rect.left()),
            width: px(rect.width()),
            height: px(rect.height()),
            scale,
            expanded_transform: scale_transform(scale),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitTrigger {
    PointerLeave,
    Scroll,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClonePhase {
    Created,
    Expanded,
    Retracting,
    Removed,
}

/// `Created -> Expanded -> Retracting -> Removed`.
///
/// The first exit trigger starts the retraction; any later trigger is a no-op.
#[derive(Clone, Debug)]
pub struct CloneLifecycle {
    phase: ClonePhase,
    exit: Option<ExitTrigger>,
}

impl Default for CloneLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl CloneLifecycle {
    pub fn new() -> Self {
        Self {
            phase: ClonePhase::Created,
            exit: None,
        }
    }

    pub fn phase(&self) -> ClonePhase {
        self.phase
    }

    pub fn exit_trigger(&self) -> Option<ExitTrigger> {
        self.exit
    }

    pub fn is_live(&self) -> bool {
        matches!(self.phase, ClonePhase::Created | ClonePhase::Expanded)
    }

    pub fn expand(&mut self) -> bool {
        if self.phase != ClonePhase::Created {
            return false;
        }
        self.phase = ClonePhase::Expanded;
        true
    }

    /// Returns `true` only for the trigger that actually starts teardown.
    pub fn begin_teardown(&mut self, trigger: ExitTrigger) -> bool {
        if !self.is_live() {
            return false;
        }
        self.phase = ClonePhase::Retracting;
        self.exit = Some(trigger);
        true
    }

    pub fn finish(&mut self) -> bool {
        if self.phase != ClonePhase::Retracting {
            return false;
        }
        self.phase = ClonePhase::Removed;
        true
    }

    /// Skip straight to `Removed` from a live phase, for a clone that could
    /// not be fully set up. No exit trigger is recorded.
    pub fn abort(&mut self) -> bool {
        if !self.is_live() {
            return false;
        }
        self.phase = ClonePhase::Removed;
        true
    }
}
