//! Swipe detector behavior: begin/update/end lifecycle, threshold
//! comparison, and reset after each gesture.

use sandbook_tui::swipe::{SwipeDetector, SwipeDirection};

#[test]
fn test_left_swipe_past_threshold() {
    let mut swipe = SwipeDetector::new(75.0);
    swipe.begin(300.0);
    swipe.update(200.0);

    assert_eq!(swipe.end(), Some(SwipeDirection::Left));
}

#[test]
fn test_right_swipe_past_threshold() {
    let mut swipe = SwipeDetector::new(75.0);
    swipe.begin(100.0);
    swipe.update(220.0);

    assert_eq!(swipe.end(), Some(SwipeDirection::Right));
}

#[test]
fn test_short_drag_is_not_a_swipe() {
    let mut swipe = SwipeDetector::new(75.0);
    swipe.begin(300.0);
    swipe.update(260.0);

    assert_eq!(swipe.end(), None);
}

#[test]
fn test_exact_threshold_is_not_a_swipe() {
    // Strictly greater than the threshold counts
    let mut swipe = SwipeDetector::new(75.0);
    swipe.begin(300.0);
    swipe.update(225.0);

    assert_eq!(swipe.end(), None);
}

#[test]
fn test_end_without_begin_is_noop() {
    let mut swipe = SwipeDetector::new(75.0);

    assert_eq!(swipe.end(), None);
}

#[test]
fn test_begin_without_movement_is_not_a_swipe() {
    let mut swipe = SwipeDetector::new(75.0);
    swipe.begin(300.0);

    assert_eq!(swipe.end(), None);
}

#[test]
fn test_update_without_begin_is_ignored() {
    let mut swipe = SwipeDetector::new(75.0);
    swipe.update(10.0);
    swipe.update(500.0);

    assert_eq!(swipe.end(), None);
}

#[test]
fn test_detector_resets_after_end() {
    let mut swipe = SwipeDetector::new(75.0);
    swipe.begin(300.0);
    swipe.update(100.0);
    assert_eq!(swipe.end(), Some(SwipeDirection::Left));

    // Previous gesture leaves no residue
    assert_eq!(swipe.end(), None);
    swipe.begin(100.0);
    swipe.update(120.0);
    assert_eq!(swipe.end(), None);
}

#[test]
fn test_new_begin_discards_stale_position() {
    let mut swipe = SwipeDetector::new(75.0);
    swipe.begin(300.0);
    swipe.update(100.0);

    // A fresh press forgets the earlier drag position
    swipe.begin(50.0);
    assert_eq!(swipe.end(), None);
}

#[test]
fn test_only_last_position_counts() {
    let mut swipe = SwipeDetector::new(75.0);
    swipe.begin(300.0);
    swipe.update(100.0);
    swipe.update(290.0);

    assert_eq!(swipe.end(), None);
}
