use super::*;
use crate::state::test_helpers::page_list;

#[test]
fn default_is_loading_first_window() {
    let listing = PageListing::default();
    assert!(listing.loading);
    assert_eq!(listing.offset, 0);
    assert_eq!(listing.limit, 50);
    assert!(!listing.is_empty());
}

#[test]
fn apply_zero_items_renders_empty_state() {
    let mut listing = PageListing::default();
    listing.apply(page_list(0, 0));
    assert!(!listing.loading);
    assert!(listing.is_empty());
    assert!(!listing.has_next());
    assert!(!listing.has_previous());
    assert_eq!(listing.range_label(), "0 of 0");
}

#[test]
fn apply_stores_items_and_total() {
    let mut listing = PageListing::default();
    listing.apply(page_list(3, 3));
    assert_eq!(listing.items.len(), 3);
    assert_eq!(listing.total, 3);
    assert!(!listing.is_empty());
    assert_eq!(listing.range_label(), "1-3 of 3");
}

#[test]
fn fail_clears_loading_and_items() {
    let mut listing = PageListing::default();
    listing.apply(page_list(2, 2));
    listing.begin(0);
    listing.fail();
    assert!(!listing.loading);
    assert!(listing.is_empty());
    assert_eq!(listing.total, 0);
}

#[test]
fn next_offset_advances_by_limit_until_total() {
    let mut listing = PageListing { limit: 10, ..PageListing::default() };
    listing.apply(page_list(10, 25));
    assert_eq!(listing.next_offset(), Some(10));

    listing.begin(20);
    listing.apply(page_list(5, 25));
    assert!(!listing.has_next());
    assert_eq!(listing.next_offset(), None);
    assert_eq!(listing.range_label(), "21-25 of 25");
}

#[test]
fn previous_offset_never_goes_below_zero() {
    let mut listing = PageListing { limit: 10, ..PageListing::default() };
    listing.begin(5);
    assert!(listing.has_previous());
    assert_eq!(listing.previous_offset(), 0);
    listing.begin(0);
    assert!(!listing.has_previous());
    assert_eq!(listing.previous_offset(), 0);
}

#[test]
fn apply_result_settles_both_outcomes() {
    let mut listing = PageListing::default();
    listing.apply_result::<()>(Ok(page_list(4, 9)));
    assert_eq!(listing.total, 9);
    listing.begin(4);
    listing.apply_result(Err("timeout"));
    assert!(listing.is_empty());
}
