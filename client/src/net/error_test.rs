use super::*;

#[test]
fn status_404_is_not_found() {
    let err = ApiError::Status { status: 404, url: "/api/pages/x".to_owned() };
    assert!(err.is_not_found());
}

#[test]
fn other_errors_are_not_not_found() {
    assert!(!ApiError::Status { status: 500, url: "/api/pages".to_owned() }.is_not_found());
    assert!(!ApiError::Transport("offline".to_owned()).is_not_found());
    assert!(!ApiError::Decode("eof".to_owned()).is_not_found());
    assert!(!ApiError::Unavailable.is_not_found());
}

#[test]
fn status_error_message_includes_url_and_status() {
    let err = ApiError::Status { status: 409, url: "/api/pages".to_owned() };
    assert_eq!(err.to_string(), "/api/pages returned status 409");
}

#[test]
fn transport_error_message_wraps_cause() {
    assert_eq!(ApiError::Transport("dns".to_owned()).to_string(), "request failed: dns");
}
