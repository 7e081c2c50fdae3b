//! Wire schema for the external chatbot backend.
//!
//! DESIGN
//! ======
//! Response bodies are classified into outcome values instead of being
//! deserialized into strict structs: the backend is outside this repo and a
//! body missing `answer` must still produce a transcript entry. Transports
//! (`gloo-net` in the browser, `reqwest` in the CLI) only move bytes and
//! hand the raw body to [`classify_ask_body`] / [`classify_init_body`].

#[cfg(test)]
#[path = "protocol_test.rs"]
mod protocol_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Shown when the backend answered but without a usable `answer` field.
pub const INVALID_RESPONSE_TEXT: &str = "Sorry, I didn't get a valid response.";
/// Shown when the request never produced a decodable response.
pub const CONNECTION_ERROR_TEXT: &str = "Error connecting to chatbot API.";
/// Blocking notice when the identification step fails.
pub const INIT_FAILED_TEXT: &str = "Unable to start the conversation. Please try again.";

/// Body of `POST /chatbot/init`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitRequest {
    pub name: String,
    pub email: String,
}

/// Body of `POST /chatbot/ask`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AskRequest {
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
}

/// Result of one ask exchange, exactly one per request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AskOutcome {
    /// Backend produced an answer, optionally naming the conversation.
    Answered { answer: String, conversation_id: Option<String> },
    /// Decodable body without a usable `answer`.
    Malformed,
    /// Transport error or undecodable body.
    Failed(String),
}

impl AskOutcome {
    /// Wrap a transport error.
    pub fn failed(err: impl std::fmt::Display) -> Self {
        Self::Failed(err.to_string())
    }
}

/// Result of one init exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InitOutcome {
    Started { conversation_id: String },
    Rejected(String),
}

impl InitOutcome {
    pub fn rejected(err: impl std::fmt::Display) -> Self {
        Self::Rejected(err.to_string())
    }
}

/// Classify a raw `/chatbot/ask` response body.
///
/// The HTTP status is not consulted: a JSON body with an answer is shown even
/// on an error status, and a JSON body without one is reported as malformed.
#[must_use]
pub fn classify_ask_body(body: &str) -> AskOutcome {
    let value = match serde_json::from_str::<Value>(body) {
        Ok(value) => value,
        Err(e) => return AskOutcome::failed(format!("invalid JSON body: {e}")),
    };

    let Some(answer) = value.get("answer").and_then(answer_text) else {
        return AskOutcome::Malformed;
    };

    AskOutcome::Answered {
        answer,
        conversation_id: non_empty_str(&value, "conversationId").map(str::to_owned),
    }
}

/// Classify a raw `/chatbot/init` response.
#[must_use]
pub fn classify_init_body(status_ok: bool, status: u16, body: &str) -> InitOutcome {
    if !status_ok {
        return InitOutcome::Rejected(format!("init request failed: {status}"));
    }
    let value = match serde_json::from_str::<Value>(body) {
        Ok(value) => value,
        Err(e) => return InitOutcome::rejected(format!("invalid JSON body: {e}")),
    };
    match non_empty_str(&value, "conversationId") {
        Some(id) => InitOutcome::Started { conversation_id: id.to_owned() },
        None => InitOutcome::Rejected("missing conversationId".to_owned()),
    }
}

/// Display text for a present answer. Empty strings, `0`, `false` and
/// `null` count as absent; other non-string values are shown as JSON.
fn answer_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64().is_some_and(|f| f.abs() < f64::EPSILON) => None,
        other => Some(other.to_string()),
    }
}

fn non_empty_str<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
}
