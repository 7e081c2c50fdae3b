//! Networking modules for the chatbot backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls; the request/response schema and outcome
//! classification are shared with the CLI through the `chatbot` crate.

pub mod api;
