//! Light/dark theme switch.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::dark_mode;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_click = move |_| {
        let next = dark_mode::toggle(ui.get_untracked().dark_mode);
        ui.update(|u| u.dark_mode = next);
    };

    view! {
        <button
            type="button"
            class="btn theme-toggle"
            on:click=on_click
            title="Toggle dark mode"
            aria-pressed=move || ui.get().dark_mode.to_string()
        >
            {move || if ui.get().dark_mode { "☀" } else { "☾" }}
        </button>
    }
}
