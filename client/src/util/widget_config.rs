//! Chat widget configuration baked in at compile time.
//!
//! The SSR server and the WASM bundle are built from the same environment, so
//! reading `CHATBOT_*` with `option_env!` gives both sides an identical
//! config and hydration never disagrees about, say, the identification gate.

#[cfg(test)]
#[path = "widget_config_test.rs"]
mod widget_config_test;

use chatbot::WidgetConfig;

/// Compile-time lookup for the keys understood by [`WidgetConfig::from_lookup`].
fn baked(key: &str) -> Option<String> {
    let value = match key {
        "CHATBOT_API_BASE" => option_env!("CHATBOT_API_BASE"),
        "CHATBOT_REQUIRE_IDENTIFICATION" => option_env!("CHATBOT_REQUIRE_IDENTIFICATION"),
        "CHATBOT_PANEL_WIDTH_PX" => option_env!("CHATBOT_PANEL_WIDTH_PX"),
        "CHATBOT_OPEN_MS" => option_env!("CHATBOT_OPEN_MS"),
        "CHATBOT_CLOSE_MS" => option_env!("CHATBOT_CLOSE_MS"),
        "CHATBOT_FOCUS_DELAY_MS" => option_env!("CHATBOT_FOCUS_DELAY_MS"),
        "CHATBOT_SCROLL_DELAY_MS" => option_env!("CHATBOT_SCROLL_DELAY_MS"),
        _ => None,
    };
    value.map(str::to_owned)
}

/// Widget config for this build, falling back to defaults on bad values.
pub fn load() -> WidgetConfig {
    WidgetConfig::from_lookup(baked).unwrap_or_else(|e| {
        leptos::logging::warn!("chat widget config: {e}; using defaults");
        WidgetConfig::default()
    })
}
