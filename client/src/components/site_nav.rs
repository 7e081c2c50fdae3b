//! Site header navigation with a collapsible mobile menu.
//!
//! The menu closes when a link is followed, and on Escape once the chat
//! modal and panel have declined the key (see `chat_widget`).

use leptos::prelude::*;

use crate::state::ui::UiState;

use super::theme_toggle::ThemeToggle;

const LINKS: &[(&str, &str)] = &[("#about", "About"), ("#experience", "Experience"), ("#projects", "Projects"), ("#contact", "Contact")];

#[component]
pub fn SiteNav() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let menu_open = move || ui.get().mobile_menu_open;

    view! {
        <header class="site-header">
            <a href="/" class="site-header__brand">"Portfolio"</a>
            <button
                type="button"
                class="site-header__menu-toggle"
                aria-controls="site-nav"
                aria-expanded=move || menu_open().to_string()
                aria-label="Toggle navigation"
                on:click=move |_| ui.update(UiState::toggle_mobile_menu)
            >
                "☰"
            </button>
            <nav id="site-nav" class="site-nav" class:site-nav--open=menu_open>
                {LINKS
                    .iter()
                    .map(|(href, label)| {
                        view! {
                            <a
                                class="site-nav__link"
                                href=*href
                                on:click=move |_| {
                                    ui.update(|u| {
                                        u.close_mobile_menu();
                                    });
                                }
                            >
                                {*label}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
            <ThemeToggle/>
        </header>
    }
}
