use super::*;

fn tag(name: &str, count: u64) -> Tag {
    Tag { name: name.to_owned(), count }
}

#[test]
fn default_is_loading() {
    let state = TagListState::default();
    assert!(state.loading);
    assert!(!state.is_empty());
}

#[test]
fn zero_tags_render_empty_state() {
    let mut state = TagListState::default();
    state.apply::<()>(Ok(Vec::new()));
    assert!(state.is_empty());
}

#[test]
fn apply_keeps_server_order() {
    let mut state = TagListState::default();
    state.apply::<()>(Ok(vec![tag("rust", 4), tag("go", 1)]));
    assert_eq!(state.tags, vec![tag("rust", 4), tag("go", 1)]);
    assert!(!state.is_empty());
}

#[test]
fn failed_fetch_ends_loading_empty() {
    let mut state = TagListState::default();
    state.apply(Err("offline"));
    assert!(!state.loading);
    assert!(state.is_empty());
}

#[test]
fn count_label_uses_fixed_caption() {
    assert_eq!(count_label(0), "0 pages");
    assert_eq!(count_label(1), "1 pages");
    assert_eq!(count_label(12), "12 pages");
}
