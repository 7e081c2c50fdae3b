//! Chat controller driven over HTTP from the terminal.
//!
//! Same begin/finish split as the browser widget: the controller validates
//! and records, this module performs the request in between. Panel effects
//! have no meaning here and are dropped.

use chatbot::{
    AskOutcome, ChatController, InitOutcome, PromptRejected, Sender, TriggerOutcome, WidgetConfig,
    classify_ask_body, classify_init_body,
};
use serde::Serialize;

use crate::CliError;

pub struct ChatSession {
    controller: ChatController,
    http: reqwest::Client,
}

impl ChatSession {
    pub fn new(config: WidgetConfig) -> Self {
        Self { controller: ChatController::new(config), http: reqwest::Client::new() }
    }

    /// Open the panel; returns `true` if the identification gate showed instead.
    pub fn open(&mut self) -> bool {
        matches!(self.controller.trigger(), TriggerOutcome::IdentificationShown)
    }

    pub fn needs_identification(&self) -> bool {
        self.controller.config().require_identification && self.controller.conversation_id().is_none()
    }

    /// Run the init exchange and adopt the returned conversation id.
    pub async fn identify(&mut self, name: &str, email: &str) -> Result<(), CliError> {
        self.open();
        let request = self
            .controller
            .begin_identification(name, email)
            .map_err(|e| CliError::Identification(e.to_string()))?;

        let url = self.controller.config().init_url();
        let outcome = match self.post_json(&url, &request).await {
            Ok((status, body)) => classify_init_body(status.is_success(), status.as_u16(), &body),
            Err(e) => InitOutcome::rejected(e),
        };
        if let InitOutcome::Rejected(reason) = &outcome {
            tracing::warn!(%reason, "conversation init failed");
        }

        match self.controller.finish_identification(outcome) {
            Some(_) => {
                tracing::info!(conversation_id = ?self.controller.conversation_id(), "conversation started");
                Ok(())
            }
            None => Err(CliError::Identification(
                self.controller.identity().notice().unwrap_or_default().to_owned(),
            )),
        }
    }

    /// Send one prompt and return the assistant's reply text.
    ///
    /// Returns `None` for blank lines.
    pub async fn ask(&mut self, text: &str) -> Option<String> {
        let pending = match self.controller.begin_prompt(text) {
            Ok(pending) => pending,
            Err(PromptRejected::Empty) => return None,
            Err(reason) => return Some(format!("({reason})")),
        };

        let url = self.controller.config().ask_url();
        let outcome = match self.post_json(&url, &pending.request).await {
            Ok((_, body)) => classify_ask_body(&body),
            Err(e) => AskOutcome::failed(e),
        };
        if let AskOutcome::Failed(reason) = &outcome {
            tracing::warn!(%reason, "ask request failed");
        }

        self.controller.finish_prompt(pending.placeholder_id, outcome);
        last_reply(&self.controller)
    }

    async fn post_json<T: Serialize>(&self, url: &str, body: &T) -> Result<(reqwest::StatusCode, String), reqwest::Error> {
        tracing::debug!(%url, "POST");
        let response = self.http.post(url).json(body).send().await?;
        let status = response.status();
        Ok((status, response.text().await?))
    }
}

pub(crate) fn last_reply(controller: &ChatController) -> Option<String> {
    controller
        .transcript()
        .last()
        .filter(|msg| msg.sender == Sender::Assistant && !msg.pending)
        .map(|msg| msg.text.clone())
}
