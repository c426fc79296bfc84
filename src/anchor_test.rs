#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn bare_hash_is_suppressed() {
    assert_eq!(classify("#"), AnchorAction::Suppress);
}

#[test]
fn zero_placeholder_passes_through() {
    assert_eq!(classify("#0"), AnchorAction::PassThrough);
}

#[test]
fn named_anchor_scrolls_to_selector() {
    assert_eq!(classify("#contact"), AnchorAction::ScrollTo("#contact".to_owned()));
}

#[test]
fn scroll_top_leaves_room_for_header() {
    assert_eq!(scroll_top(1200.0, 80.0), 1120.0);
    assert_eq!(scroll_top(40.0, 80.0), -40.0);
}
