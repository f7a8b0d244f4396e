use super::*;

fn bounds(top: f64, bottom: f64) -> Bounds {
    Bounds { top, bottom }
}

// =============================================================
// is_visible
// =============================================================

#[test]
fn element_inside_band_is_visible() {
    assert!(is_visible(bounds(50.0, 150.0), 800.0, 100.0));
}

#[test]
fn element_below_band_is_not_visible() {
    assert!(!is_visible(bounds(900.0, 1000.0), 800.0, 100.0));
}

#[test]
fn element_in_bottom_margin_is_not_visible() {
    assert!(!is_visible(bounds(700.0, 760.0), 800.0, 100.0));
    assert!(is_visible(bounds(699.0, 760.0), 800.0, 100.0));
}

#[test]
fn element_scrolled_past_top_is_not_visible() {
    assert!(!is_visible(bounds(-300.0, 0.0), 800.0, 100.0));
    assert!(is_visible(bounds(-300.0, 1.0), 800.0, 100.0));
}

#[test]
fn element_taller_than_viewport_is_visible() {
    assert!(is_visible(bounds(-500.0, 2000.0), 800.0, 100.0));
}

// =============================================================
// action_for
// =============================================================

#[test]
fn fade_role_marks_visible() {
    assert_eq!(action_for(&Role::Fade), Some(RevealAction::MarkVisible));
}

#[test]
fn progress_bar_sets_its_width() {
    let role = Role::ProgressBar { width: Some("85%".to_owned()) };
    assert_eq!(action_for(&role), Some(RevealAction::SetWidth("85%".to_owned())));
}

#[test]
fn progress_bar_without_width_does_nothing() {
    assert_eq!(action_for(&Role::ProgressBar { width: None }), None);
}

// =============================================================
// RevealTracker
// =============================================================

#[test]
fn tracker_reveals_once() {
    let mut tracker = RevealTracker::new(1, 100.0);
    let first = tracker.check(0, bounds(50.0, 150.0), 800.0, &Role::Fade);
    let second = tracker.check(0, bounds(50.0, 150.0), 800.0, &Role::Fade);
    assert_eq!(first, Some(RevealAction::MarkVisible));
    assert_eq!(second, None);
    assert!(tracker.is_revealed(0));
}

#[test]
fn tracker_waits_until_element_enters_band() {
    let mut tracker = RevealTracker::new(1, 100.0);
    assert_eq!(tracker.check(0, bounds(900.0, 1000.0), 800.0, &Role::Fade), None);
    assert!(!tracker.is_revealed(0));
    assert_eq!(tracker.check(0, bounds(400.0, 500.0), 800.0, &Role::Fade), Some(RevealAction::MarkVisible));
}

#[test]
fn tracker_never_resets_after_leaving_band() {
    let mut tracker = RevealTracker::new(1, 100.0);
    tracker.check(0, bounds(400.0, 500.0), 800.0, &Role::Fade);
    tracker.check(0, bounds(-900.0, -800.0), 800.0, &Role::Fade);
    assert!(tracker.is_revealed(0));
}

#[test]
fn tracker_keeps_widthless_bar_pending() {
    let mut tracker = RevealTracker::new(1, 100.0);
    let role = Role::ProgressBar { width: None };
    assert_eq!(tracker.check(0, bounds(50.0, 60.0), 800.0, &role), None);
    assert!(!tracker.is_revealed(0));
}

#[test]
fn tracker_counts_independent_elements() {
    let mut tracker = RevealTracker::new(3, 100.0);
    tracker.check(0, bounds(50.0, 150.0), 800.0, &Role::Fade);
    tracker.check(2, bounds(50.0, 150.0), 800.0, &Role::ProgressBar { width: Some("40%".to_owned()) });
    assert_eq!(tracker.revealed_count(), 2);
    assert!(!tracker.is_revealed(1));
}

#[test]
fn tracker_ignores_out_of_range_index() {
    let mut tracker = RevealTracker::new(1, 100.0);
    assert_eq!(tracker.check(5, bounds(50.0, 150.0), 800.0, &Role::Fade), None);
    assert!(!tracker.is_revealed(5));
}
