//! Button that opens the chat popup (or the identification modal first).

use leptos::prelude::*;

use chatbot::{ChatController, TriggerOutcome};

use super::chat_widget::{ChatDom, run_panel_effects};

/// Chat call-to-action. Any number may appear on a page.
#[component]
pub fn ChatTrigger(#[prop(into)] label: String, #[prop(optional, into)] class: String) -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatController>>();
    let dom = expect_context::<ChatDom>();

    let on_click = move |_| match chat.try_update(ChatController::trigger) {
        Some(TriggerOutcome::Opened(effects)) => run_panel_effects(chat, dom, effects),
        Some(TriggerOutcome::IdentificationShown) | None => {}
    };

    let class = if class.is_empty() { "btn btn--primary chat-trigger".to_owned() } else { format!("chat-trigger {class}") };

    view! {
        <button type="button" class=class on:click=on_click aria-controls="chat-popup">
            {label}
        </button>
    }
}
