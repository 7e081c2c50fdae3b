//! Pre-chat identification modal state.
//!
//! When the widget is configured with `require_identification`, the chat
//! trigger shows this modal first. A successful `/chatbot/init` call yields
//! the conversation identifier that unlocks prompting.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use crate::protocol::{INIT_FAILED_TEXT, InitOutcome, InitRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    #[error("Please enter your name.")]
    MissingName,
    #[error("Please enter your email.")]
    MissingEmail,
    #[error("Already starting a conversation.")]
    Busy,
}

#[derive(Clone, Debug, Default)]
pub struct IdentityGate {
    open: bool,
    submitting: bool,
    /// The modal was dismissed while a submission was in flight.
    abandoned: bool,
    notice: Option<String>,
}

impl IdentityGate {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Blocking notice to show the visitor, if any.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// The in-flight submission no longer has a visible modal behind it.
    #[must_use]
    pub fn is_abandoned(&self) -> bool {
        self.abandoned
    }

    pub fn show(&mut self) {
        self.open = true;
        self.abandoned = false;
    }

    pub fn hide(&mut self) {
        self.open = false;
        self.notice = None;
        self.abandoned = self.submitting;
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Validate the form and produce the init request.
    ///
    /// # Errors
    ///
    /// Rejects blank fields or a submission while one is in flight. The
    /// error text is also stored as the visible notice.
    pub fn begin(&mut self, name: &str, email: &str) -> Result<InitRequest, IdentityError> {
        let result = self.validate(name, email);
        match &result {
            Ok(_) => {
                self.submitting = true;
                self.notice = None;
            }
            Err(e) => self.notice = Some(e.to_string()),
        }
        result
    }

    /// Apply the init outcome. Returns the conversation id on success.
    ///
    /// A failure after the modal was dismissed leaves no notice behind.
    pub fn finish(&mut self, outcome: InitOutcome) -> Option<String> {
        self.submitting = false;
        let abandoned = std::mem::replace(&mut self.abandoned, false);
        match outcome {
            InitOutcome::Started { conversation_id } => {
                self.hide();
                Some(conversation_id)
            }
            InitOutcome::Rejected(_) if abandoned => None,
            InitOutcome::Rejected(_) => {
                self.notice = Some(INIT_FAILED_TEXT.to_owned());
                None
            }
        }
    }

    fn validate(&self, name: &str, email: &str) -> Result<InitRequest, IdentityError> {
        if self.submitting {
            return Err(IdentityError::Busy);
        }
        let name = name.trim();
        let email = email.trim();
        if name.is_empty() {
            return Err(IdentityError::MissingName);
        }
        if email.is_empty() {
            return Err(IdentityError::MissingEmail);
        }
        Ok(InitRequest { name: name.to_owned(), email: email.to_owned() })
    }
}
