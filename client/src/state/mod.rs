//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Chat state is the `chatbot::ChatController` itself, held in a signal by
//! the app root. Modules here cover the remaining page chrome (`ui`) and the
//! cookie-consent record (`consent`).

pub mod consent;
pub mod ui;
