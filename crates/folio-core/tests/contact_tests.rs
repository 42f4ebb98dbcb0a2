// Host-side tests for contact form guard, response classification and status text.

use folio_core::{
    check_endpoint, classify_response, FormMethod, Messages, StatusMessage, StatusTone,
    SubmitError,
};

const PLACEHOLDER: &str = "YOUR_FORM_ID";

#[test]
fn placeholder_action_is_a_configuration_error() {
    let err = check_endpoint("https://formspree.io/f/YOUR_FORM_ID", PLACEHOLDER).unwrap_err();
    assert!(matches!(err, SubmitError::Misconfigured { .. }));

    let status = StatusMessage::for_outcome(&Err(err), &Messages::default());
    assert_eq!(status.tone, StatusTone::Warning);
    assert_eq!(status.text, Messages::default().misconfigured);
    assert_eq!(status.tone.css_color(), "orange");
}

#[test]
fn configured_action_passes_guard() {
    assert!(check_endpoint("https://formspree.io/f/xyzabcd", PLACEHOLDER).is_ok());
}

#[test]
fn any_2xx_is_success() {
    for status in [200, 201, 204, 299] {
        assert_eq!(classify_response(status, ""), Ok(()));
    }
    let status = StatusMessage::for_outcome(&Ok(()), &Messages::default());
    assert_eq!(status.tone, StatusTone::Success);
    assert_eq!(status.text, Messages::default().success);
}

#[test]
fn single_error_message_is_shown_verbatim() {
    let outcome = classify_response(422, r#"{"errors":[{"message":"Email invalid"}]}"#);
    let status = StatusMessage::for_outcome(&outcome, &Messages::default());
    assert_eq!(status.tone, StatusTone::Error);
    assert_eq!(status.text, "Email invalid");
}

#[test]
fn multiple_error_messages_are_joined() {
    let body = r#"{"errors":[{"message":"Email invalid","code":"TYPE_EMAIL"},{"message":"Message required"}]}"#;
    let outcome = classify_response(400, body);
    assert_eq!(
        outcome,
        Err(SubmitError::Rejected(vec![
            "Email invalid".to_owned(),
            "Message required".to_owned()
        ]))
    );
    let status = StatusMessage::for_outcome(&outcome, &Messages::default());
    assert_eq!(status.text, "Email invalid, Message required");
}

#[test]
fn unexpected_failure_bodies_fall_back_to_generic_message() {
    let generic = Messages::default().failure;
    for body in [
        "",
        "<html>Bad Gateway</html>",
        r#"{"error":"nope"}"#,
        r#"{"errors":[]}"#,
        r#"{"errors":[{"code":"X"}]}"#,
        r#"{"errors":"oops"}"#,
    ] {
        let outcome = classify_response(500, body);
        assert_eq!(outcome, Err(SubmitError::Failed(500)), "body {body:?}");
        let status = StatusMessage::for_outcome(&outcome, &Messages::default());
        assert_eq!(status.text, generic);
        assert_eq!(status.tone, StatusTone::Error);
    }
}

#[test]
fn transport_failure_uses_generic_message() {
    let outcome = Err(SubmitError::Transport("TypeError: Failed to fetch".into()));
    let status = StatusMessage::for_outcome(&outcome, &Messages::default());
    assert_eq!(status.tone, StatusTone::Error);
    assert_eq!(status.text, Messages::default().failure);
}

#[test]
fn pending_status_uses_theme_colour() {
    let status = StatusMessage::pending(&Messages::default());
    assert_eq!(status.text, "Sending...");
    assert_eq!(status.tone.css_color(), "var(--text-secondary)");
}

#[test]
fn form_method_defaults_to_post() {
    assert_eq!(FormMethod::parse("post"), FormMethod::Post);
    assert_eq!(FormMethod::parse("GET"), FormMethod::Get);
    assert_eq!(FormMethod::parse(""), FormMethod::Post);
    assert_eq!(FormMethod::parse("dialog"), FormMethod::Post);
}
