//! Append-only chat transcript with a single pending placeholder.

#[cfg(test)]
#[path = "transcript_test.rs"]
mod transcript_test;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

/// One transcript entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Local sequence number, unique within the transcript.
    pub id: u64,
    pub text: String,
    pub sender: Sender,
    /// Loading placeholder awaiting a backend response.
    pub pending: bool,
}

#[derive(Clone, Debug, Default)]
pub struct Transcript {
    messages: Vec<Message>,
    next_id: u64,
}

impl Transcript {
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// ID of the pending placeholder, if one is shown.
    #[must_use]
    pub fn pending_id(&self) -> Option<u64> {
        self.messages.iter().find(|m| m.pending).map(|m| m.id)
    }

    pub fn push_user(&mut self, text: impl Into<String>) -> u64 {
        self.push(text.into(), Sender::User, false)
    }

    pub fn push_assistant(&mut self, text: impl Into<String>) -> u64 {
        self.push(text.into(), Sender::Assistant, false)
    }

    /// Append the loading placeholder. Returns `None` if one already exists.
    pub fn push_pending(&mut self) -> Option<u64> {
        if self.pending_id().is_some() {
            return None;
        }
        Some(self.push(String::new(), Sender::Assistant, true))
    }

    /// Remove placeholder `id` and append `text` as the assistant reply.
    ///
    /// Returns `false` (and appends nothing) if `id` is not a pending entry.
    pub fn resolve_pending(&mut self, id: u64, text: impl Into<String>) -> bool {
        let Some(index) = self.messages.iter().position(|m| m.id == id && m.pending) else {
            return false;
        };
        self.messages.remove(index);
        self.push_assistant(text);
        true
    }

    fn push(&mut self, text: String, sender: Sender, pending: bool) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(Message { id, text, sender, pending });
        id
    }
}
