use super::*;

// =============================================================
// Request bodies
// =============================================================

#[test]
fn ask_request_omits_missing_conversation_id() {
    let req = AskRequest { prompt: "hello".to_owned(), conversation_id: None };
    assert_eq!(serde_json::to_value(&req).unwrap(), serde_json::json!({ "prompt": "hello" }));
}

#[test]
fn ask_request_uses_camel_case_conversation_id() {
    let req = AskRequest { prompt: "hello".to_owned(), conversation_id: Some("abc123".to_owned()) };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({ "prompt": "hello", "conversationId": "abc123" })
    );
}

#[test]
fn init_request_serializes_name_and_email() {
    let req = InitRequest { name: "Ada".to_owned(), email: "ada@example.test".to_owned() };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({ "name": "Ada", "email": "ada@example.test" })
    );
}

// =============================================================
// classify_ask_body
// =============================================================

#[test]
fn ask_body_with_answer_and_id() {
    let outcome = classify_ask_body(r#"{"answer":"hi there","conversationId":"abc123"}"#);
    assert_eq!(
        outcome,
        AskOutcome::Answered { answer: "hi there".to_owned(), conversation_id: Some("abc123".to_owned()) }
    );
}

#[test]
fn ask_body_with_answer_only() {
    let outcome = classify_ask_body(r#"{"answer":"hi"}"#);
    assert_eq!(outcome, AskOutcome::Answered { answer: "hi".to_owned(), conversation_id: None });
}

#[test]
fn ask_body_empty_object_is_malformed() {
    assert_eq!(classify_ask_body("{}"), AskOutcome::Malformed);
}

#[test]
fn ask_body_falsy_answer_is_malformed() {
    assert_eq!(classify_ask_body(r#"{"answer":""}"#), AskOutcome::Malformed);
    assert_eq!(classify_ask_body(r#"{"answer":null}"#), AskOutcome::Malformed);
    assert_eq!(classify_ask_body(r#"{"answer":0}"#), AskOutcome::Malformed);
    assert_eq!(classify_ask_body(r#"{"answer":false}"#), AskOutcome::Malformed);
    assert_eq!(classify_ask_body("null"), AskOutcome::Malformed);
}

#[test]
fn ask_body_present_non_empty_answer_is_shown() {
    assert_eq!(
        classify_ask_body(r#"{"answer":"   "}"#),
        AskOutcome::Answered { answer: "   ".to_owned(), conversation_id: None }
    );
    assert_eq!(
        classify_ask_body(r#"{"answer":42}"#),
        AskOutcome::Answered { answer: "42".to_owned(), conversation_id: None }
    );
}

#[test]
fn ask_body_not_json_is_failure() {
    assert!(matches!(classify_ask_body("<html>502</html>"), AskOutcome::Failed(_)));
}

// =============================================================
// classify_init_body
// =============================================================

#[test]
fn init_body_success() {
    assert_eq!(
        classify_init_body(true, 200, r#"{"conversationId":"c-1"}"#),
        InitOutcome::Started { conversation_id: "c-1".to_owned() }
    );
}

#[test]
fn init_body_error_status_is_rejected() {
    let outcome = classify_init_body(false, 500, r#"{"conversationId":"c-1"}"#);
    assert_eq!(outcome, InitOutcome::Rejected("init request failed: 500".to_owned()));
}

#[test]
fn init_body_missing_id_is_rejected() {
    assert_eq!(
        classify_init_body(true, 200, "{}"),
        InitOutcome::Rejected("missing conversationId".to_owned())
    );
}

#[test]
fn init_body_garbage_is_rejected() {
    assert!(matches!(classify_init_body(true, 200, "nope"), InitOutcome::Rejected(_)));
}
