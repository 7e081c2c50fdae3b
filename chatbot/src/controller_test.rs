use super::*;
use crate::panel::PanelState;
use crate::transcript::Sender;

fn gated() -> ChatController {
    ChatController::new(WidgetConfig { require_identification: true, ..WidgetConfig::default() })
}

fn answered(answer: &str, id: Option<&str>) -> AskOutcome {
    AskOutcome::Answered { answer: answer.to_owned(), conversation_id: id.map(str::to_owned) }
}

fn tail(ctl: &ChatController) -> Vec<(Sender, String)> {
    ctl.transcript()
        .messages()
        .iter()
        .map(|m| (m.sender, m.text.clone()))
        .collect()
}

// =============================================================
// begin_prompt / finish_prompt
// =============================================================

#[test]
fn blank_prompts_are_noops() {
    let mut ctl = ChatController::default();
    for text in ["", "   ", "\n\t "] {
        assert_eq!(ctl.begin_prompt(text), Err(PromptRejected::Empty));
    }
    assert!(ctl.transcript().is_empty());
}

#[test]
fn prompt_appends_user_and_placeholder() {
    let mut ctl = ChatController::default();
    let pending = ctl.begin_prompt("  hello ").unwrap();

    assert_eq!(pending.request, AskRequest { prompt: "hello".to_owned(), conversation_id: None });
    assert_eq!(ctl.transcript().len(), 2);
    assert_eq!(ctl.transcript().pending_id(), Some(pending.placeholder_id));
    assert!(ctl.is_waiting());
}

#[test]
fn answer_adopts_conversation_and_is_reused() {
    let mut ctl = ChatController::default();
    let first = ctl.begin_prompt("hello").unwrap();
    assert!(ctl.finish_prompt(first.placeholder_id, answered("hi there", Some("abc123"))));

    assert_eq!(
        tail(&ctl),
        vec![(Sender::User, "hello".to_owned()), (Sender::Assistant, "hi there".to_owned())]
    );
    assert_eq!(ctl.conversation_id(), Some("abc123"));
    assert_eq!(ctl.transcript().pending_id(), None);

    let second = ctl.begin_prompt("again").unwrap();
    assert_eq!(second.request.conversation_id.as_deref(), Some("abc123"));
}

#[test]
fn conversation_id_is_never_replaced() {
    let mut ctl = ChatController::default();
    let p = ctl.begin_prompt("one").unwrap();
    ctl.finish_prompt(p.placeholder_id, answered("a", Some("first")));
    let p = ctl.begin_prompt("two").unwrap();
    ctl.finish_prompt(p.placeholder_id, answered("b", Some("second")));

    assert_eq!(ctl.conversation_id(), Some("first"));
    let p = ctl.begin_prompt("three").unwrap();
    assert_eq!(p.request.conversation_id.as_deref(), Some("first"));
}

#[test]
fn malformed_reply_uses_fallback_text() {
    let mut ctl = ChatController::default();
    let p = ctl.begin_prompt("hello").unwrap();
    ctl.finish_prompt(p.placeholder_id, AskOutcome::Malformed);

    let last = ctl.transcript().last().unwrap();
    assert_eq!(last.text, "Sorry, I didn't get a valid response.");
    assert_eq!(last.sender, Sender::Assistant);
    assert_eq!(ctl.conversation_id(), None);
}

#[test]
fn transport_failure_uses_fallback_text() {
    let mut ctl = ChatController::default();
    let p = ctl.begin_prompt("hello").unwrap();
    ctl.finish_prompt(p.placeholder_id, AskOutcome::failed("connection refused"));

    assert_eq!(ctl.transcript().last().unwrap().text, "Error connecting to chatbot API.");
    assert!(!ctl.is_waiting());
}

#[test]
fn every_outcome_leaves_one_user_and_one_reply() {
    let outcomes = [answered("ok", None), AskOutcome::Malformed, AskOutcome::failed("down")];
    for outcome in outcomes {
        let mut ctl = ChatController::default();
        let p = ctl.begin_prompt("question").unwrap();
        ctl.finish_prompt(p.placeholder_id, outcome);

        let msgs = ctl.transcript().messages();
        assert_eq!(msgs.len(), 2);
        assert_eq!(msgs.iter().filter(|m| m.sender == Sender::User).count(), 1);
        assert_eq!(msgs.iter().filter(|m| m.sender == Sender::Assistant).count(), 1);
        assert!(msgs.iter().all(|m| !m.pending));
    }
}

#[test]
fn second_prompt_while_pending_is_busy() {
    let mut ctl = ChatController::default();
    let p = ctl.begin_prompt("one").unwrap();
    assert_eq!(ctl.begin_prompt("two"), Err(PromptRejected::Busy));
    assert_eq!(ctl.transcript().len(), 2);

    ctl.finish_prompt(p.placeholder_id, answered("done", None));
    assert!(ctl.begin_prompt("two").is_ok());
}

#[test]
fn finishing_twice_is_ignored() {
    let mut ctl = ChatController::default();
    let p = ctl.begin_prompt("one").unwrap();
    assert!(ctl.finish_prompt(p.placeholder_id, answered("a", None)));
    assert!(!ctl.finish_prompt(p.placeholder_id, answered("b", Some("late"))));
    assert_eq!(ctl.transcript().len(), 2);
    assert_eq!(ctl.conversation_id(), None);
}

// =============================================================
// Panel + Escape
// =============================================================

#[test]
fn trigger_opens_panel_without_gate() {
    let mut ctl = ChatController::default();
    let TriggerOutcome::Opened(effects) = ctl.trigger() else {
        panic!("expected panel to open");
    };
    assert!(!effects.is_empty());
    assert_eq!(ctl.panel().state(), PanelState::OpenMinimized);
}

#[test]
fn escape_closes_open_panel() {
    let mut ctl = ChatController::default();
    ctl.trigger();
    let EscapeOutcome::PanelClosing(effects) = ctl.escape() else {
        panic!("expected panel to close");
    };
    let PanelEffect::Settle { epoch, .. } = effects[0] else {
        panic!("expected settle effect");
    };
    ctl.settle(epoch);
    assert_eq!(ctl.panel().state(), PanelState::Closed);
    assert_eq!(ctl.escape(), EscapeOutcome::Ignored);
}

#[test]
fn escape_prefers_identification_modal() {
    let mut ctl = gated();
    assert_eq!(ctl.trigger(), TriggerOutcome::IdentificationShown);
    let panel_before = ctl.panel().view();

    assert_eq!(ctl.escape(), EscapeOutcome::ModalClosed);
    assert!(!ctl.identity().is_open());
    assert_eq!(ctl.panel().view(), panel_before);
}

#[test]
fn escape_with_modal_over_open_panel_keeps_panel() {
    let mut ctl = ChatController::default();
    ctl.trigger();
    ctl.identity.show();

    assert_eq!(ctl.escape(), EscapeOutcome::ModalClosed);
    assert_eq!(ctl.panel().state(), PanelState::OpenMinimized);
    assert!(!ctl.panel().is_closing());
}

// =============================================================
// Identification gate
// =============================================================

#[test]
fn gated_prompt_requires_identification() {
    let mut ctl = gated();
    assert_eq!(ctl.begin_prompt("hello"), Err(PromptRejected::IdentificationRequired));
    assert!(ctl.transcript().is_empty());
}

#[test]
fn identification_success_opens_panel_and_unlocks_prompt() {
    let mut ctl = gated();
    ctl.trigger();
    let req = ctl.begin_identification("Ada", "ada@example.test").unwrap();
    assert_eq!(req.name, "Ada");

    let effects = ctl.finish_identification(InitOutcome::Started { conversation_id: "c-1".to_owned() });
    assert!(effects.is_some());
    assert_eq!(ctl.panel().state(), PanelState::OpenMinimized);
    assert!(!ctl.identity().is_open());

    let p = ctl.begin_prompt("hello").unwrap();
    assert_eq!(p.request.conversation_id.as_deref(), Some("c-1"));
    assert_eq!(ctl.trigger(), TriggerOutcome::Opened(Vec::new()));
}

#[test]
fn identification_failure_keeps_modal_open() {
    let mut ctl = gated();
    ctl.trigger();
    ctl.begin_identification("Ada", "ada@example.test").unwrap();

    assert_eq!(ctl.finish_identification(InitOutcome::rejected("HTTP 500")), None);
    assert!(ctl.identity().is_open());
    assert!(ctl.identity().notice().is_some());
    assert_eq!(ctl.panel().state(), PanelState::Closed);
    assert_eq!(ctl.conversation_id(), None);
}

#[test]
fn identification_validation_never_builds_request() {
    let mut ctl = gated();
    ctl.trigger();
    assert_eq!(ctl.begin_identification("", "x@y.test"), Err(IdentityError::MissingName));
    assert!(!ctl.identity().is_submitting());
}

#[test]
fn dismissed_identification_success_adopts_without_opening() {
    let mut ctl = gated();
    ctl.trigger();
    ctl.begin_identification("Ada", "ada@example.test").unwrap();
    assert_eq!(ctl.escape(), EscapeOutcome::ModalClosed);

    let effects = ctl.finish_identification(InitOutcome::Started { conversation_id: "c1".to_owned() });
    assert_eq!(effects, None);
    assert_eq!(ctl.panel().state(), PanelState::Closed);
    assert!(!ctl.identity().is_open());
    assert_eq!(ctl.conversation_id(), Some("c1"));

    // The next trigger opens straight away.
    assert!(matches!(ctl.trigger(), TriggerOutcome::Opened(_)));
}

#[test]
fn dismissed_identification_failure_is_silent() {
    let mut ctl = gated();
    ctl.trigger();
    ctl.begin_identification("Ada", "ada@example.test").unwrap();
    ctl.cancel_identification();

    assert_eq!(ctl.finish_identification(InitOutcome::rejected("HTTP 500")), None);
    assert_eq!(ctl.identity().notice(), None);
    assert!(!ctl.identity().is_open());
    assert_eq!(ctl.panel().state(), PanelState::Closed);
    assert_eq!(ctl.conversation_id(), None);
}
