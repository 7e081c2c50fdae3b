//! Dark mode initialization and toggle.
//!
//! Reads the visitor's preference from `localStorage["theme"]` (`"dark"` or
//! `"light"`) and applies both the `dark` class and `data-theme="dark"` to
//! the `<html>` element. Toggle writes back to `localStorage`. Requires a
//! browser environment.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "theme";

/// Resolve the effective theme from a stored value and the system setting.
///
/// A stored value wins; anything other than `"dark"` means light.
#[must_use]
pub fn resolve_preference(stored: Option<&str>, system_prefers_dark: bool) -> bool {
    match stored {
        Some(value) => value == "dark",
        None => system_prefers_dark,
    }
}

/// Storage value for a theme choice.
#[must_use]
pub fn storage_value(enabled: bool) -> &'static str {
    if enabled { "dark" } else { "light" }
}

/// Read the dark mode preference from localStorage.
///
/// Returns `true` if the visitor previously chose dark mode, or if the system
/// prefers dark mode and no preference is stored.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };

        let stored = window
            .local_storage()
            .ok()
            .flatten()
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());

        let system_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches());

        resolve_preference(stored.as_deref(), system_dark)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply or remove the dark theme on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let class_list = el.class_list();
                if enabled {
                    let _ = class_list.add_1("dark");
                    let _ = el.set_attribute("data-theme", "dark");
                } else {
                    let _ = class_list.remove_1("dark");
                    let _ = el.remove_attribute("data-theme");
                }
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Toggle dark mode and persist the new preference to localStorage.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, storage_value(next));
            }
        }
    }
    next
}
