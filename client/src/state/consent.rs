//! Cookie-consent record and category gating.
//!
//! SYSTEM CONTEXT
//! ==============
//! The record is persisted as JSON in `localStorage` under
//! [`CONSENT_STORAGE_KEY`]. A record written under a different
//! [`CONSENT_VERSION`] is treated as absent so visitors are asked again
//! after the policy changes. Resource activation lives in
//! `util::consent`; this module is pure data.

#[cfg(test)]
#[path = "consent_test.rs"]
mod consent_test;

use serde::{Deserialize, Serialize};

pub const CONSENT_STORAGE_KEY: &str = "cookie-consent";
pub const CONSENT_VERSION: &str = "1.0";

/// Category a third-party resource is tagged with via
/// `data-cookie-consent="..."`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsentCategory {
    Functional,
    Analytics,
    Marketing,
}

impl ConsentCategory {
    /// Parse a `data-cookie-consent` attribute value.
    ///
    /// `required` is the legacy spelling of `functional`.
    #[must_use]
    pub fn from_attr(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "functional" | "required" => Some(Self::Functional),
            "analytics" => Some(Self::Analytics),
            "marketing" => Some(Self::Marketing),
            _ => None,
        }
    }
}

/// Stored consent decision.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConsentPreferences {
    pub functional: bool,
    pub analytics: bool,
    pub marketing: bool,
    pub version: String,
    /// Milliseconds since the Unix epoch when the decision was made.
    pub timestamp: f64,
}

impl ConsentPreferences {
    #[must_use]
    pub fn accept_all(timestamp: f64) -> Self {
        Self::custom(true, true, timestamp)
    }

    #[must_use]
    pub fn essential_only(timestamp: f64) -> Self {
        Self::custom(false, false, timestamp)
    }

    /// Functional resources are always granted.
    #[must_use]
    pub fn custom(analytics: bool, marketing: bool, timestamp: f64) -> Self {
        Self {
            functional: true,
            analytics,
            marketing,
            version: CONSENT_VERSION.to_owned(),
            timestamp,
        }
    }

    /// Decode a stored record, discarding unreadable or outdated ones.
    #[must_use]
    pub fn from_stored(raw: &str) -> Option<Self> {
        let prefs: Self = serde_json::from_str(raw).ok()?;
        (prefs.version == CONSENT_VERSION).then_some(prefs)
    }

    #[must_use]
    pub fn allows(&self, category: ConsentCategory) -> bool {
        match category {
            ConsentCategory::Functional => self.functional,
            ConsentCategory::Analytics => self.analytics,
            ConsentCategory::Marketing => self.marketing,
        }
    }
}
