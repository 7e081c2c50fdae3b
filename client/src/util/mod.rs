//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod consent;
pub mod dark_mode;
pub mod lazy_images;
pub mod markdown;
pub mod storage;
pub mod widget_config;
