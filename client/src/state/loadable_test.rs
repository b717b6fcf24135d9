use super::*;

#[test]
fn default_is_loading() {
    let state: Loadable<u8> = Loadable::default();
    assert!(state.is_loading());
    assert_eq!(state.loaded(), None);
}

#[test]
fn ok_result_becomes_loaded() {
    let state = Loadable::from_result::<()>(Ok(5));
    assert_eq!(state, Loadable::Loaded(5));
    assert_eq!(state.loaded(), Some(&5));
}

#[test]
fn any_error_becomes_missing() {
    let state = Loadable::<u8>::from_result(Err("404"));
    assert!(state.is_missing());
    let state = Loadable::<u8>::from_result(Err(std::io::Error::other("offline")));
    assert!(state.is_missing());
}
