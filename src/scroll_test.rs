use super::*;

#[test]
fn fragment_id_strips_hash() {
    assert_eq!(fragment_id("#about"), Some("about"));
}

#[test]
fn bare_hash_is_ignored() {
    assert_eq!(fragment_id("#"), None);
}

#[test]
fn non_fragment_href_is_ignored() {
    assert_eq!(fragment_id("/blog#top"), None);
    assert_eq!(fragment_id(""), None);
}

#[test]
fn scroll_target_subtracts_header_offset() {
    assert_eq!(scroll_target(1200.0, 80.0), 1120.0);
}

#[test]
fn scroll_target_near_top_may_go_negative() {
    assert_eq!(scroll_target(40.0, 80.0), -40.0);
}

#[test]
fn back_to_top_needs_strictly_more_than_threshold() {
    assert!(!back_to_top_visible(0.0, 300.0));
    assert!(!back_to_top_visible(300.0, 300.0));
    assert!(back_to_top_visible(300.5, 300.0));
}
