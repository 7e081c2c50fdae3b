use chatbot::{AskOutcome, ChatController};

use super::*;
use crate::session::last_reply;

// =============================================================================
// Argument parsing
// =============================================================================

#[test]
fn chat_is_the_default_command() {
    let cli = Cli::try_parse_from(["portfolio-chat", "--api-base", "https://api.example.test/"]).unwrap();
    assert!(cli.command.is_none());
    let config = cli.widget_config();
    assert_eq!(config.api_base, "https://api.example.test");
    assert_eq!(config.ask_url(), "https://api.example.test/chatbot/ask");
}

#[test]
fn name_and_email_turn_on_identification() {
    let cli = Cli::try_parse_from(["portfolio-chat", "--name", "Ada", "--email", "ada@example.test"]).unwrap();
    assert!(cli.widget_config().require_identification);

    let cli = Cli::try_parse_from(["portfolio-chat", "--name", "Ada"]).unwrap();
    assert!(!cli.widget_config().require_identification);
}

#[test]
fn ping_takes_site_url() {
    let cli = Cli::try_parse_from(["portfolio-chat", "ping", "--site-url", "http://127.0.0.1:9000"]).unwrap();
    match cli.command {
        Some(Command::Ping { site_url }) => assert_eq!(site_url, "http://127.0.0.1:9000"),
        None => panic!("expected ping"),
    }
}

// =============================================================================
// Session helpers
// =============================================================================

#[test]
fn last_reply_skips_user_and_pending_messages() {
    let mut controller = ChatController::default();
    assert_eq!(last_reply(&controller), None);

    let pending = controller.begin_prompt("hello").unwrap();
    assert_eq!(last_reply(&controller), None);

    controller.finish_prompt(
        pending.placeholder_id,
        AskOutcome::Answered { answer: "hi there".to_owned(), conversation_id: None },
    );
    assert_eq!(last_reply(&controller).as_deref(), Some("hi there"));
}

#[test]
fn identification_gate_follows_config() {
    let session = ChatSession::new(WidgetConfig { require_identification: true, ..WidgetConfig::default() });
    assert!(session.needs_identification());
    assert!(!ChatSession::new(WidgetConfig::default()).needs_identification());
}
