// Host-side tests for animate-once reveal bookkeeping.

use folio_core::{RevealAction, RevealTracker};

#[test]
fn element_activates_once_and_is_not_reobserved() {
    let mut tracker = RevealTracker::new();
    tracker.watch("about");

    // Initial report while off-screen
    assert_eq!(tracker.record(&"about", false), RevealAction::Ignore);
    assert_eq!(tracker.record(&"about", true), RevealAction::Activate);
    assert_eq!(tracker.activated(), 1);

    // Leaving and re-entering the viewport does nothing
    assert_eq!(tracker.record(&"about", false), RevealAction::Ignore);
    assert_eq!(tracker.record(&"about", true), RevealAction::Ignore);
    assert_eq!(tracker.activated(), 1);
    assert!(tracker.is_done());
}

#[test]
fn tall_element_with_small_visible_share_still_reveals() {
    // An element many viewports tall never shows more than a few percent of
    // itself; the observer still reports it as intersecting.
    let mut tracker = RevealTracker::new();
    tracker.watch("tall");
    assert_eq!(tracker.record(&"tall", true), RevealAction::Activate);
    assert_eq!(tracker.pending(), 0);
}

#[test]
fn unwatched_keys_are_ignored() {
    let mut tracker: RevealTracker<u32> = RevealTracker::new();
    assert_eq!(tracker.record(&7, true), RevealAction::Ignore);
    assert_eq!(tracker.activated(), 0);
}

#[test]
fn watching_twice_does_not_duplicate() {
    let mut tracker = RevealTracker::new();
    tracker.watch("a");
    tracker.watch("a");
    tracker.watch("b");
    assert_eq!(tracker.pending(), 2);
    assert_eq!(tracker.record(&"a", true), RevealAction::Activate);
    assert_eq!(tracker.record(&"a", true), RevealAction::Ignore);
    assert_eq!(tracker.pending(), 1);
}

#[test]
fn non_intersecting_reports_never_activate() {
    let mut tracker = RevealTracker::new();
    tracker.watch("x");
    for _ in 0..3 {
        assert_eq!(tracker.record(&"x", false), RevealAction::Ignore);
    }
    assert_eq!(tracker.pending(), 1);
}
