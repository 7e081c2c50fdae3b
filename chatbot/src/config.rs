//! Widget configuration parsed from key/value lookups.
//!
//! The same keys are read from the process environment by the CLI and baked
//! in at compile time by the browser build, so parsing takes a lookup
//! function instead of reading `std::env` directly.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "http://localhost:3000";
pub const DEFAULT_PANEL_WIDTH_PX: u32 = 450;
pub const DEFAULT_OPEN_DURATION_MS: u32 = 500;
pub const DEFAULT_CLOSE_DURATION_MS: u32 = 500;
pub const DEFAULT_FOCUS_DELAY_MS: u32 = 500;
pub const DEFAULT_SCROLL_DELAY_MS: u32 = 400;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {key}: expected an unsigned integer, got '{value}'")]
    InvalidNumber { key: &'static str, value: String },
    #[error("invalid {key}: expected true/false, got '{value}'")]
    InvalidBool { key: &'static str, value: String },
    #[error("{key} must not be empty")]
    Empty { key: &'static str },
}

/// Settings for one chat widget instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Sidebar width while minimized.
    pub panel_width_px: u32,
    pub open_duration_ms: u32,
    /// Delay between the slide-out and hiding the panel.
    pub close_duration_ms: u32,
    pub focus_delay_ms: u32,
    pub scroll_delay_ms: u32,
    /// Chatbot backend base URL without a trailing slash.
    pub api_base: String,
    /// Require name/email before the first prompt.
    pub require_identification: bool,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            panel_width_px: DEFAULT_PANEL_WIDTH_PX,
            open_duration_ms: DEFAULT_OPEN_DURATION_MS,
            close_duration_ms: DEFAULT_CLOSE_DURATION_MS,
            focus_delay_ms: DEFAULT_FOCUS_DELAY_MS,
            scroll_delay_ms: DEFAULT_SCROLL_DELAY_MS,
            api_base: DEFAULT_API_BASE.to_owned(),
            require_identification: false,
        }
    }
}

impl WidgetConfig {
    /// Build a config from a key lookup.
    ///
    /// Keys (all optional):
    /// - `CHATBOT_API_BASE`
    /// - `CHATBOT_REQUIRE_IDENTIFICATION`: `true`/`false`/`1`/`0`
    /// - `CHATBOT_PANEL_WIDTH_PX`
    /// - `CHATBOT_OPEN_MS`, `CHATBOT_CLOSE_MS`
    /// - `CHATBOT_FOCUS_DELAY_MS`, `CHATBOT_SCROLL_DELAY_MS`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a present value cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let api_base = match lookup("CHATBOT_API_BASE") {
            Some(raw) => normalize_base(&raw).ok_or(ConfigError::Empty { key: "CHATBOT_API_BASE" })?,
            None => defaults.api_base,
        };

        Ok(Self {
            panel_width_px: parse_u32(&lookup, "CHATBOT_PANEL_WIDTH_PX", defaults.panel_width_px)?,
            open_duration_ms: parse_u32(&lookup, "CHATBOT_OPEN_MS", defaults.open_duration_ms)?,
            close_duration_ms: parse_u32(&lookup, "CHATBOT_CLOSE_MS", defaults.close_duration_ms)?,
            focus_delay_ms: parse_u32(&lookup, "CHATBOT_FOCUS_DELAY_MS", defaults.focus_delay_ms)?,
            scroll_delay_ms: parse_u32(&lookup, "CHATBOT_SCROLL_DELAY_MS", defaults.scroll_delay_ms)?,
            api_base,
            require_identification: parse_bool(
                &lookup,
                "CHATBOT_REQUIRE_IDENTIFICATION",
                defaults.require_identification,
            )?,
        })
    }

    /// Full URL of the conversation bootstrap endpoint.
    #[must_use]
    pub fn init_url(&self) -> String {
        format!("{}/chatbot/init", self.api_base)
    }

    /// Full URL of the prompt endpoint.
    #[must_use]
    pub fn ask_url(&self) -> String {
        format!("{}/chatbot/ask", self.api_base)
    }
}

fn normalize_base(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

fn parse_u32<F>(lookup: &F, key: &'static str, default: u32) -> Result<u32, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<u32>()
            .map_err(|_| ConfigError::InvalidNumber { key, value: raw }),
    }
}

fn parse_bool<F>(lookup: &F, key: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            _ => Err(ConfigError::InvalidBool { key, value: raw }),
        },
    }
}
