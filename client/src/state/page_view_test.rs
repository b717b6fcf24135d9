use super::*;
use crate::net::error::ApiError;
use crate::state::test_helpers::{page, page_list};

fn loaded_state() -> PageViewState {
    let mut state = PageViewState::default();
    state.apply_fetch::<ApiError>(Ok(page("home", "Home")));
    state
}

// =============================================================
// Fetch
// =============================================================

#[test]
fn default_is_loading_and_idle() {
    let state = PageViewState::default();
    assert!(state.page.is_loading());
    assert_eq!(state.delete, DeleteStep::Idle);
}

#[test]
fn not_found_status_renders_missing() {
    let mut state = PageViewState::default();
    state.apply_fetch(Err(ApiError::Status { status: 404, url: "/api/pages/nope".to_owned() }));
    assert!(state.page.is_missing());
    assert!(!state.backlinks.loading);
}

#[test]
fn network_error_renders_missing() {
    let mut state = PageViewState::default();
    state.apply_fetch(Err(ApiError::Transport("connection refused".to_owned())));
    assert!(state.page.is_missing());
}

#[test]
fn backlinks_apply_and_fail() {
    let mut state = loaded_state();
    state.apply_backlinks::<ApiError>(Ok(page_list(2, 2)));
    assert_eq!(state.backlinks.items.len(), 2);

    state.apply_backlinks(Err(ApiError::Unavailable));
    assert!(state.backlinks.is_empty());
}

// =============================================================
// Delete confirmation
// =============================================================

#[test]
fn confirm_without_request_sends_nothing() {
    let mut state = loaded_state();
    assert_eq!(state.confirm_delete(), None);
    assert_eq!(state.delete, DeleteStep::Idle);
}

#[test]
fn cancelled_confirmation_sends_nothing() {
    let mut state = loaded_state();
    state.request_delete();
    assert_eq!(state.delete, DeleteStep::Confirming);
    state.cancel_delete();
    assert_eq!(state.delete, DeleteStep::Idle);
    assert_eq!(state.confirm_delete(), None);
}

#[test]
fn confirmed_delete_yields_slug_once() {
    let mut state = loaded_state();
    state.request_delete();
    assert_eq!(state.confirm_delete().as_deref(), Some("home"));
    assert_eq!(state.delete, DeleteStep::Deleting);
    assert_eq!(state.confirm_delete(), None);
}

#[test]
fn delete_cannot_be_requested_before_page_loads() {
    let mut state = PageViewState::default();
    state.request_delete();
    assert_eq!(state.delete, DeleteStep::Idle);
}

#[test]
fn failed_delete_returns_to_idle() {
    let mut state = loaded_state();
    state.request_delete();
    let _ = state.confirm_delete();
    state.delete_failed();
    assert_eq!(state.delete, DeleteStep::Idle);
}
