//! Name/email modal shown before the first conversation starts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only reachable when identification is required. Submitting calls the
//! init endpoint; on success the conversation id is adopted and the chat
//! panel opens. Validation failures and init errors show a notice inside the
//! modal and a blocking browser alert.

use leptos::prelude::*;

use chatbot::ChatController;

use super::chat_widget::ChatDom;

/// Identification modal. Visibility follows the controller's gate.
#[component]
pub fn IdentifyModal() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatController>>();
    let dom = expect_context::<ChatDom>();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());

    let is_open = move || chat.with(|c| c.identity().is_open());
    let submitting = move || chat.with(|c| c.identity().is_submitting());
    let notice = move || chat.with(|c| c.identity().notice().map(str::to_owned));

    let on_cancel = move |_| chat.update(ChatController::cancel_identification);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (name_value, email_value) = (name.get_untracked(), email.get_untracked());
        match chat.try_update(|c| c.begin_identification(&name_value, &email_value)) {
            Some(Ok(request)) => start_conversation(chat, dom, request),
            Some(Err(err)) => show_alert(&err.to_string()),
            None => {}
        }
    };

    view! {
        <Show when=is_open>
            <div class="dialog-backdrop" on:click=on_cancel>
                <div
                    class="dialog identify-modal"
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby="identify-modal-title"
                    on:click=move |ev| ev.stop_propagation()
                >
                    <h2 id="identify-modal-title">"Before we chat"</h2>
                    <p class="identify-modal__lead">"Tell me who you are so I can follow up on our conversation."</p>
                    <form class="identify-modal__form" on:submit=on_submit>
                        <label class="dialog__label">
                            "Name"
                            <input
                                class="dialog__input"
                                type="text"
                                autocomplete="name"
                                autofocus=true
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="dialog__label">
                            "Email"
                            <input
                                class="dialog__input"
                                type="email"
                                autocomplete="email"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </label>
                        {move || notice().map(|text| view! { <div class="dialog__notice" role="alert">{text}</div> })}
                        <div class="dialog__actions">
                            <button class="btn" type="button" on:click=on_cancel>
                                "Cancel"
                            </button>
                            <button class="btn btn--primary" type="submit" disabled=submitting>
                                {move || if submitting() { "Starting..." } else { "Start chat" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}

fn start_conversation(chat: RwSignal<ChatController>, dom: ChatDom, request: chatbot::InitRequest) {
    #[cfg(feature = "hydrate")]
    {
        let url = chat.with_untracked(|c| c.config().init_url());
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::init_conversation(&url, &request).await;
            match chat.try_update(|c| c.finish_identification(outcome)).flatten() {
                Some(effects) => super::chat_widget::run_panel_effects(chat, dom, effects),
                None => {
                    if let Some(text) = chat.with_untracked(|c| c.identity().notice().map(str::to_owned)) {
                        show_alert(&text);
                    }
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (chat, dom, request);
    }
}

fn show_alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}
