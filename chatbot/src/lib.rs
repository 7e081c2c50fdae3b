//! Chat widget core shared by the Leptos client and the terminal driver.
//!
//! This crate owns everything about the portfolio chat popup that does not
//! touch the DOM: widget configuration, the chatbot wire schema, the panel
//! state machine, the transcript, and the controller tying them together.
//! Browser and CLI layers perform the HTTP calls and feed outcomes back in.

pub mod config;
pub mod controller;
pub mod identity;
pub mod panel;
pub mod protocol;
pub mod transcript;

pub use config::{ConfigError, WidgetConfig};
pub use controller::{ChatController, EscapeOutcome, PendingAsk, PromptRejected, TriggerOutcome};
pub use identity::{IdentityError, IdentityGate};
pub use panel::{PanelEffect, PanelMachine, PanelState, PanelView};
pub use protocol::{AskOutcome, AskRequest, InitOutcome, InitRequest, classify_ask_body, classify_init_body};
pub use transcript::{Message, Sender, Transcript};
