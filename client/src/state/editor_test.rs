use super::*;
use crate::net::error::ApiError;
use crate::state::test_helpers::page;

// =============================================================
// ViewMode
// =============================================================

#[test]
fn view_mode_default_is_edit() {
    assert_eq!(ViewMode::default(), ViewMode::Edit);
}

#[test]
fn view_mode_regions_are_mutually_exclusive_except_split() {
    assert!(ViewMode::Edit.shows_editor());
    assert!(!ViewMode::Edit.shows_preview());
    assert!(!ViewMode::Preview.shows_editor());
    assert!(ViewMode::Preview.shows_preview());
    assert!(ViewMode::Split.shows_editor());
    assert!(ViewMode::Split.shows_preview());
}

#[test]
fn view_mode_labels_match_buttons() {
    let labels: Vec<_> = ViewMode::ALL.iter().map(|m| m.label()).collect();
    assert_eq!(labels, vec!["Edit", "Preview", "Split View"]);
}

#[test]
fn toggling_view_mode_never_mutates_fields() {
    let mut form = EditorState {
        title: "Draft".to_owned(),
        content: "some *markdown*".to_owned(),
        ..EditorState::default()
    };
    let before = (form.title.clone(), form.content.clone(), form.slug.clone());
    for mode in [ViewMode::Preview, ViewMode::Split, ViewMode::Edit, ViewMode::Split] {
        form.set_view_mode(mode);
        assert_eq!(form.view_mode, mode);
        assert_eq!((form.title.clone(), form.content.clone(), form.slug.clone()), before);
    }
}

#[test]
fn apply_routes_each_edit_to_its_field() {
    let mut form = EditorState::default();
    form.apply(FormEdit::Title("T".to_owned()));
    form.apply(FormEdit::Content("C".to_owned()));
    form.apply(FormEdit::Slug("s".to_owned()));
    form.apply(FormEdit::ViewMode(ViewMode::Preview));
    assert_eq!(form.title, "T");
    assert_eq!(form.content, "C");
    assert_eq!(form.slug, "s");
    assert_eq!(form.view_mode, ViewMode::Preview);
}

#[test]
fn view_mode_edit_leaves_text_untouched() {
    let mut form = EditorState { title: "T".to_owned(), content: "C".to_owned(), ..EditorState::default() };
    form.apply(FormEdit::ViewMode(ViewMode::Split));
    assert_eq!((form.title.as_str(), form.content.as_str()), ("T", "C"));
}

// =============================================================
// Submission
// =============================================================

#[test]
fn empty_title_or_content_blocks_submit() {
    let mut form = EditorState { title: "  ".to_owned(), content: "body".to_owned(), ..EditorState::default() };
    assert!(!form.begin_submit());
    assert!(!form.saving);

    form.title = "Title".to_owned();
    form.content = String::new();
    assert!(!form.begin_submit());
}

#[test]
fn begin_submit_blocks_double_submit() {
    let mut form = EditorState { title: "T".to_owned(), content: "C".to_owned(), ..EditorState::default() };
    assert!(form.begin_submit());
    assert!(form.saving);
    assert!(!form.begin_submit());
    form.submit_failed();
    assert!(form.can_submit());
}

#[test]
fn submit_create_yields_body_once() {
    let mut form = EditorState { title: "T".to_owned(), content: "C".to_owned(), ..EditorState::default() };
    let body = form.submit_create().unwrap();
    assert_eq!(body.title, "T");
    assert!(form.saving);
    assert_eq!(form.submit_create(), None);
}

#[test]
fn submit_update_on_invalid_form_sends_nothing() {
    let mut form = EditorState::default();
    assert_eq!(form.submit_update(), None);
    assert!(!form.saving);
}

#[test]
fn created_target_uses_server_slug_not_title() {
    let mut form = EditorState { title: "Hello World".to_owned(), content: "Body".to_owned(), ..EditorState::default() };
    let body = form.submit_create().unwrap();
    assert_eq!(body.slug, None);

    let created = page("hello-world-2", "Hello World");
    assert_eq!(EditorState::created_target(&created), "/page/hello-world-2");
}

#[test]
fn created_target_ignores_requested_slug() {
    let mut form = EditorState {
        title: "Hello".to_owned(),
        content: "Body".to_owned(),
        slug: "hello".to_owned(),
        ..EditorState::default()
    };
    assert_eq!(form.submit_create().unwrap().slug.as_deref(), Some("hello"));
    let created = page("hello-1", "Hello");
    assert_eq!(EditorState::created_target(&created), "/page/hello-1");
}

#[test]
fn create_request_omits_blank_slug() {
    let form = EditorState {
        title: "Hello World".to_owned(),
        content: "Body".to_owned(),
        slug: "   ".to_owned(),
        ..EditorState::default()
    };
    let body = form.create_request();
    assert_eq!(body.title, "Hello World");
    assert_eq!(body.content, "Body");
    assert_eq!(body.slug, None);
}

#[test]
fn create_request_trims_explicit_slug() {
    let form = EditorState {
        title: "Hello".to_owned(),
        content: "Body".to_owned(),
        slug: " hello-page ".to_owned(),
        ..EditorState::default()
    };
    assert_eq!(form.create_request().slug.as_deref(), Some("hello-page"));
}

#[test]
fn update_request_sends_title_and_content_only() {
    let form = EditorState { title: "T".to_owned(), content: "C".to_owned(), ..EditorState::default() };
    let body = form.update_request();
    assert_eq!(body.title.as_deref(), Some("T"));
    assert_eq!(body.content.as_deref(), Some("C"));
    assert_eq!(body.metadata, None);
}

// =============================================================
// EditPageState
// =============================================================

#[test]
fn edit_state_starts_loading() {
    let state = EditPageState::default();
    assert!(state.source.is_loading());
}

#[test]
fn successful_fetch_seeds_form_with_fetched_values() {
    let fetched = page("rust-notes", "Rust Notes");
    let mut state = EditPageState::default();
    state.apply_fetch::<ApiError>(Ok(fetched.clone()));
    assert_eq!(state.form.title, fetched.title);
    assert_eq!(state.form.content, fetched.content);
    assert_eq!(state.form.view_mode, ViewMode::Edit);
    assert_eq!(state.source.loaded(), Some(&fetched));
}

#[test]
fn failed_fetch_is_not_found() {
    let mut state = EditPageState::default();
    state.apply_fetch(Err(ApiError::Status { status: 404, url: "/api/pages/x".to_owned() }));
    assert!(state.source.is_missing());

    let mut state = EditPageState::default();
    state.apply_fetch(Err(ApiError::Transport("offline".to_owned())));
    assert!(state.source.is_missing());
    assert_eq!(state.form, EditorState::default());
}
