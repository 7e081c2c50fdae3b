//! Cookie-consent gating of third-party resources.
//!
//! Third-party tags in the page carry `data-cookie-consent="<category>"`.
//! Stylesheets (`<link disabled>`) are enabled in place; scripts are inert
//! placeholders with a `data-src` attribute and are injected into `<head>`
//! once their category is granted. Nothing loads until a decision exists.

#[cfg(test)]
#[path = "consent_test.rs"]
mod consent_test;

use crate::state::consent::{CONSENT_STORAGE_KEY, ConsentPreferences};
use crate::util::storage;

/// Load the stored decision, if it is current.
pub fn load() -> Option<ConsentPreferences> {
    storage::load_raw(CONSENT_STORAGE_KEY).and_then(|raw| ConsentPreferences::from_stored(&raw))
}

/// Activate resources for the stored decision. Called once after mount.
pub fn init() {
    match load() {
        Some(prefs) => activate_resources(&prefs),
        None => leptos::logging::log!("cookie consent: no decision stored, third-party resources held"),
    }
}

/// Persist a new decision and activate whatever it grants.
pub fn grant(prefs: &ConsentPreferences) {
    storage::save_json(CONSENT_STORAGE_KEY, prefs);
    activate_resources(prefs);
}

/// Forget the decision and reload so injected resources are dropped.
pub fn revoke() {
    storage::remove(CONSENT_STORAGE_KEY);
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }
}

/// Current time in milliseconds since the Unix epoch.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

fn activate_resources(prefs: &ConsentPreferences) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        use crate::state::consent::ConsentCategory;

        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(nodes) = doc.query_selector_all("[data-cookie-consent]") else {
            return;
        };

        let mut activated = 0_u32;
        for i in 0..nodes.length() {
            let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) else {
                continue;
            };
            let Some(category) = el
                .get_attribute("data-cookie-consent")
                .as_deref()
                .and_then(ConsentCategory::from_attr)
            else {
                continue;
            };
            if !prefs.allows(category) {
                continue;
            }

            if let Some(link) = el.dyn_ref::<web_sys::HtmlLinkElement>() {
                link.set_disabled(false);
                activated += 1;
                continue;
            }

            if el.has_attribute("data-consent-loaded") {
                continue;
            }
            let Some(src) = el.get_attribute("data-src") else {
                continue;
            };
            let already_loaded = has_script_src(existing_script_srcs(&doc), &src);
            if !already_loaded {
                let Some(script) = doc
                    .create_element("script")
                    .ok()
                    .and_then(|s| s.dyn_into::<web_sys::HtmlScriptElement>().ok())
                else {
                    continue;
                };
                script.set_src(&src);
                script.set_async(true);
                if let Some(head) = doc.head() {
                    let _ = head.append_child(&script);
                }
            }
            let _ = el.set_attribute("data-consent-loaded", "true");
            activated += 1;
        }
        leptos::logging::log!("cookie consent: activated {activated} resource(s)");
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = prefs;
    }
}

/// Whether a script with exactly `src` is already in the document.
#[cfg(any(test, feature = "hydrate"))]
fn has_script_src<I>(existing: I, src: &str) -> bool
where
    I: IntoIterator<Item = String>,
{
    existing.into_iter().any(|existing| existing == src)
}

#[cfg(feature = "hydrate")]
fn existing_script_srcs(doc: &web_sys::Document) -> Vec<String> {
    use wasm_bindgen::JsCast;

    let Ok(scripts) = doc.query_selector_all("script[src]") else {
        return Vec::new();
    };
    (0..scripts.length())
        .filter_map(|i| scripts.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .filter_map(|el| el.get_attribute("src"))
        .collect()
}
