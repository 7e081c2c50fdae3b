//! HTTP helpers for the external chatbot backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs reporting a transport failure since these
//! endpoints are only called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to an outcome value instead of a `Result`, so the
//! widget always has exactly one branch to render and never panics during
//! hydration. Raw bodies are classified by `chatbot::protocol`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use chatbot::{AskOutcome, AskRequest, InitOutcome, InitRequest};

#[cfg(any(test, not(feature = "hydrate")))]
const UNAVAILABLE: &str = "chatbot API is only reachable from the browser";

#[cfg(any(test, feature = "hydrate"))]
fn transport_error_message(endpoint: &str, err: &impl std::fmt::Display) -> String {
    format!("{endpoint} request failed: {err}")
}

/// Send a prompt via `POST {base}/chatbot/ask`.
pub async fn ask(url: &str, request: &AskRequest) -> AskOutcome {
    #[cfg(feature = "hydrate")]
    {
        let resp = match gloo_net::http::Request::post(url).json(request) {
            Ok(req) => req.send().await,
            Err(e) => Err(e),
        };
        let resp = match resp {
            Ok(resp) => resp,
            Err(e) => {
                let message = transport_error_message("ask", &e);
                leptos::logging::warn!("{message}");
                return AskOutcome::Failed(message);
            }
        };
        match resp.text().await {
            Ok(body) => chatbot::classify_ask_body(&body),
            Err(e) => AskOutcome::Failed(transport_error_message("ask", &e)),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, request);
        AskOutcome::failed(UNAVAILABLE)
    }
}

/// Start a conversation via `POST {base}/chatbot/init`.
pub async fn init_conversation(url: &str, request: &InitRequest) -> InitOutcome {
    #[cfg(feature = "hydrate")]
    {
        let resp = match gloo_net::http::Request::post(url).json(request) {
            Ok(req) => req.send().await,
            Err(e) => Err(e),
        };
        let resp = match resp {
            Ok(resp) => resp,
            Err(e) => {
                let message = transport_error_message("init", &e);
                leptos::logging::warn!("{message}");
                return InitOutcome::Rejected(message);
            }
        };
        let (ok, status) = (resp.ok(), resp.status());
        match resp.text().await {
            Ok(body) => chatbot::classify_init_body(ok, status, &body),
            Err(e) => InitOutcome::Rejected(transport_error_message("init", &e)),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, request);
        InitOutcome::rejected(UNAVAILABLE)
    }
}
