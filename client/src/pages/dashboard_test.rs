use super::*;

#[test]
fn backend_badge_reflects_health() {
    assert_eq!(backend_badge(None).0, "checking");
    assert_eq!(backend_badge(Some(true)), ("online", "badge badge--ok"));
    assert_eq!(backend_badge(Some(false)), ("offline", "badge badge--down"));
}

#[test]
fn placeholder_text_explains_redirect() {
    assert_eq!(placeholder_text(Access::Denied), "Redirecting to login...");
    assert_eq!(placeholder_text(Access::Pending), "Checking session...");
}
