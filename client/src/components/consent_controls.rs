//! Footer cookie preference controls.
//!
//! There is no banner: visitors make or change a choice here, and nothing
//! third-party loads until they do.

use leptos::prelude::*;

use crate::state::consent::ConsentPreferences;
use crate::util::consent;

#[component]
pub fn ConsentControls() -> impl IntoView {
    let decision = RwSignal::new(None::<ConsentPreferences>);

    Effect::new(move || decision.set(consent::load()));

    let choose = move |prefs: ConsentPreferences| {
        consent::grant(&prefs);
        decision.set(Some(prefs));
    };

    let summary = move || match decision.get() {
        None => "No cookie choice made yet.",
        Some(prefs) if prefs.analytics && prefs.marketing => "All cookies allowed.",
        Some(prefs) if prefs.analytics || prefs.marketing => "Some optional cookies allowed.",
        Some(_) => "Essential cookies only.",
    };

    view! {
        <div class="consent-controls">
            <span class="consent-controls__summary">{summary}</span>
            <button
                type="button"
                class="btn btn--small"
                on:click=move |_| choose(ConsentPreferences::essential_only(consent::now_ms()))
            >
                "Essential only"
            </button>
            <button
                type="button"
                class="btn btn--small btn--primary"
                on:click=move |_| choose(ConsentPreferences::accept_all(consent::now_ms()))
            >
                "Accept all"
            </button>
            <Show when=move || decision.get().is_some()>
                <button
                    type="button"
                    class="btn btn--small"
                    on:click=move |_| {
                        decision.set(None);
                        consent::revoke();
                    }
                >
                    "Reset choice"
                </button>
            </Show>
        </div>
    }
}
