//! Chat widget controller: one instance per page load.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller owns the panel machine, the transcript, the identification
//! gate and the conversation identifier. It never performs I/O. Network
//! calls are split into a `begin_*` step that validates input and returns the
//! request body, and a `finish_*` step that consumes exactly one outcome, so
//! the UI can await the transport in between.
//!
//! Concurrent prompts are rejected with [`PromptRejected::Busy`] while a
//! placeholder is pending.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::config::WidgetConfig;
use crate::identity::{IdentityError, IdentityGate};
use crate::panel::{PanelEffect, PanelMachine};
use crate::protocol::{
    AskOutcome, AskRequest, CONNECTION_ERROR_TEXT, INVALID_RESPONSE_TEXT, InitOutcome, InitRequest,
};
use crate::transcript::Transcript;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PromptRejected {
    #[error("prompt is empty")]
    Empty,
    #[error("a reply is still pending")]
    Busy,
    #[error("identify yourself before chatting")]
    IdentificationRequired,
}

/// Result of the chat trigger button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerOutcome {
    Opened(Vec<PanelEffect>),
    /// The identification modal was shown instead of the panel.
    IdentificationShown,
}

/// Result of an Escape key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EscapeOutcome {
    ModalClosed,
    PanelClosing(Vec<PanelEffect>),
    Ignored,
}

/// An ask request waiting for its outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAsk {
    /// Placeholder to replace in [`ChatController::finish_prompt`].
    pub placeholder_id: u64,
    pub request: AskRequest,
}

#[derive(Clone, Debug)]
pub struct ChatController {
    config: WidgetConfig,
    panel: PanelMachine,
    transcript: Transcript,
    identity: IdentityGate,
    conversation_id: Option<String>,
}

impl ChatController {
    #[must_use]
    pub fn new(config: WidgetConfig) -> Self {
        Self {
            panel: PanelMachine::new(&config),
            config,
            transcript: Transcript::default(),
            identity: IdentityGate::default(),
            conversation_id: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    #[must_use]
    pub fn panel(&self) -> &PanelMachine {
        &self.panel
    }

    #[must_use]
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    #[must_use]
    pub fn identity(&self) -> &IdentityGate {
        &self.identity
    }

    #[must_use]
    pub fn conversation_id(&self) -> Option<&str> {
        self.conversation_id.as_deref()
    }

    #[must_use]
    pub fn is_waiting(&self) -> bool {
        self.transcript.pending_id().is_some()
    }

    fn needs_identification(&self) -> bool {
        self.config.require_identification && self.conversation_id.is_none()
    }

    // =========================================================================
    // PANEL
    // =========================================================================

    /// Chat trigger: open the panel, or the identification modal first.
    pub fn trigger(&mut self) -> TriggerOutcome {
        if self.needs_identification() {
            self.identity.show();
            return TriggerOutcome::IdentificationShown;
        }
        TriggerOutcome::Opened(self.panel.open())
    }

    pub fn close(&mut self) -> Vec<PanelEffect> {
        self.panel.close()
    }

    pub fn maximize(&mut self) -> Vec<PanelEffect> {
        self.panel.maximize()
    }

    pub fn minimize(&mut self) -> Vec<PanelEffect> {
        self.panel.minimize()
    }

    pub fn settle(&mut self, epoch: u64) -> bool {
        self.panel.settle(epoch)
    }

    /// Escape closes the identification modal first, then the panel.
    pub fn escape(&mut self) -> EscapeOutcome {
        if self.identity.is_open() {
            self.identity.hide();
            return EscapeOutcome::ModalClosed;
        }
        if self.panel.is_open() && !self.panel.is_closing() {
            return EscapeOutcome::PanelClosing(self.panel.close());
        }
        EscapeOutcome::Ignored
    }

    pub fn cancel_identification(&mut self) {
        self.identity.hide();
    }

    pub fn dismiss_notice(&mut self) {
        self.identity.dismiss_notice();
    }

    // =========================================================================
    // CONVERSATION
    // =========================================================================

    /// Adopt `id` unless a conversation is already established.
    pub fn adopt_conversation(&mut self, id: String) -> bool {
        if self.conversation_id.is_some() {
            return false;
        }
        self.conversation_id = Some(id);
        true
    }

    /// Validate a prompt, append it with a pending placeholder, and build the
    /// ask request.
    ///
    /// # Errors
    ///
    /// Blank input, a pending reply, or a missing identification leave the
    /// transcript untouched.
    pub fn begin_prompt(&mut self, text: &str) -> Result<PendingAsk, PromptRejected> {
        let prompt = text.trim();
        if prompt.is_empty() {
            return Err(PromptRejected::Empty);
        }
        if self.needs_identification() {
            return Err(PromptRejected::IdentificationRequired);
        }
        if self.is_waiting() {
            return Err(PromptRejected::Busy);
        }

        self.transcript.push_user(prompt);
        let placeholder_id = self.transcript.push_pending().ok_or(PromptRejected::Busy)?;
        Ok(PendingAsk {
            placeholder_id,
            request: AskRequest { prompt: prompt.to_owned(), conversation_id: self.conversation_id.clone() },
        })
    }

    /// Replace the placeholder with the reply for `outcome`.
    ///
    /// Returns `false` if the placeholder is no longer pending.
    pub fn finish_prompt(&mut self, placeholder_id: u64, outcome: AskOutcome) -> bool {
        let (text, conversation_id) = match outcome {
            AskOutcome::Answered { answer, conversation_id } => (answer, conversation_id),
            AskOutcome::Malformed => (INVALID_RESPONSE_TEXT.to_owned(), None),
            AskOutcome::Failed(_) => (CONNECTION_ERROR_TEXT.to_owned(), None),
        };
        if !self.transcript.resolve_pending(placeholder_id, text) {
            return false;
        }
        if let Some(id) = conversation_id {
            self.adopt_conversation(id);
        }
        true
    }

    /// Validate the identification form and build the init request.
    ///
    /// # Errors
    ///
    /// See [`IdentityGate::begin`].
    pub fn begin_identification(&mut self, name: &str, email: &str) -> Result<InitRequest, IdentityError> {
        self.identity.begin(name, email)
    }

    /// Apply the init outcome; on success the panel opens.
    ///
    /// If the visitor dismissed the modal while the request was in flight, a
    /// success only adopts the conversation and the panel stays as it was.
    pub fn finish_identification(&mut self, outcome: InitOutcome) -> Option<Vec<PanelEffect>> {
        let abandoned = self.identity.is_abandoned();
        let id = self.identity.finish(outcome)?;
        self.adopt_conversation(id);
        if abandoned {
            return None;
        }
        Some(self.panel.open())
    }
}

impl Default for ChatController {
    fn default() -> Self {
        Self::new(WidgetConfig::default())
    }
}
