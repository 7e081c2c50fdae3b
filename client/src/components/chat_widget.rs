//! Chat popup: sidebar panel with transcript, prompt form and size controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! All state lives in the shared `ChatController` signal. This component
//! projects the panel view onto classes and width, renders the transcript,
//! and turns controller `PanelEffect`s into delayed DOM work (focus, scroll,
//! settle). Escape handling for the whole page is registered here because
//! the chat modal and panel get first claim on the key.

use leptos::prelude::*;

use chatbot::{ChatController, EscapeOutcome, Message, PanelEffect, PendingAsk, Sender};

use crate::state::ui::UiState;
use crate::util::markdown::render_markdown_html;

/// DOM handles the panel effects act on.
#[derive(Clone, Copy)]
pub struct ChatDom {
    pub input: NodeRef<leptos::html::Input>,
    pub messages: NodeRef<leptos::html::Div>,
}

impl ChatDom {
    pub fn new() -> Self {
        Self { input: NodeRef::new(), messages: NodeRef::new() }
    }
}

impl Default for ChatDom {
    fn default() -> Self {
        Self::new()
    }
}

/// Schedule the deferred DOM work requested by a panel transition.
pub fn run_panel_effects(chat: RwSignal<ChatController>, dom: ChatDom, effects: Vec<PanelEffect>) {
    #[cfg(feature = "hydrate")]
    {
        for effect in effects {
            leptos::task::spawn_local(async move {
                let after_ms = match effect {
                    PanelEffect::FocusInput { after_ms }
                    | PanelEffect::ScrollToBottom { after_ms }
                    | PanelEffect::Settle { after_ms, .. } => after_ms,
                };
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(after_ms))).await;
                match effect {
                    PanelEffect::FocusInput { .. } => {
                        if let Some(input_el) = dom.input.get() {
                            let _ = input_el.focus();
                        }
                    }
                    PanelEffect::ScrollToBottom { .. } => scroll_to_bottom(dom),
                    PanelEffect::Settle { epoch, .. } => chat.update(|c| {
                        c.settle(epoch);
                    }),
                }
            });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (chat, dom, effects);
    }
}

fn scroll_to_bottom(dom: ChatDom) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = dom.messages.get() {
            el.set_scroll_top(el.scroll_height());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = dom;
    }
}

fn dispatch_ask(chat: RwSignal<ChatController>, pending: PendingAsk) {
    #[cfg(feature = "hydrate")]
    {
        let url = chat.with_untracked(|c| c.config().ask_url());
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::ask(&url, &pending.request).await;
            chat.update(|c| {
                c.finish_prompt(pending.placeholder_id, outcome);
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (chat, pending);
    }
}

/// Chat sidebar. Rendered once per page; hidden until a trigger opens it.
#[component]
pub fn ChatWidget() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatController>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let dom = expect_context::<ChatDom>();

    let input = RwSignal::new(String::new());
    let panel_view = move || chat.with(|c| c.panel().view());

    Effect::new(move || {
        let _ = chat.with(|c| c.transcript().len());
        scroll_to_bottom(dom);
    });

    // Escape: identification modal first, then the panel, then the nav menu.
    let handle = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() != "Escape" {
            return;
        }
        match chat.try_update(ChatController::escape) {
            Some(EscapeOutcome::PanelClosing(effects)) => run_panel_effects(chat, dom, effects),
            Some(EscapeOutcome::ModalClosed) => {}
            Some(EscapeOutcome::Ignored) | None => {
                ui.update(|u| {
                    u.close_mobile_menu();
                });
            }
        }
    });
    on_cleanup(move || handle.remove());

    let do_send = move || {
        let text = input.get_untracked();
        match chat.try_update(|c| c.begin_prompt(&text)) {
            Some(Ok(pending)) => {
                input.set(String::new());
                dispatch_ask(chat, pending);
            }
            Some(Err(reason)) => leptos::logging::log!("prompt not sent: {reason}"),
            None => {}
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        do_send();
    };

    let on_close = move |_| {
        let effects = chat.try_update(ChatController::close).unwrap_or_default();
        run_panel_effects(chat, dom, effects);
    };
    let on_maximize = move |_| {
        let effects = chat.try_update(ChatController::maximize).unwrap_or_default();
        run_panel_effects(chat, dom, effects);
    };
    let on_minimize = move |_| {
        let effects = chat.try_update(ChatController::minimize).unwrap_or_default();
        run_panel_effects(chat, dom, effects);
    };

    let can_send = move || !input.get().trim().is_empty() && !chat.with(ChatController::is_waiting);

    view! {
        <aside
            id="chat-popup"
            class=move || panel_view().classes().join(" ")
            style:width=move || panel_view().width.css()
            aria-hidden=move || (!panel_view().visible).to_string()
            aria-label="Chat"
        >
            <div class="chat-popup__header">
                <span class="chat-popup__title">"Chat with me"</span>
                <span class="chat-popup__spacer"></span>
                <Show
                    when=move || panel_view().maximized
                    fallback=move || {
                        view! {
                            <button class="chat-popup__control" on:click=on_maximize title="Maximize chat">
                                "⤢"
                            </button>
                        }
                    }
                >
                    <button class="chat-popup__control" on:click=on_minimize title="Minimize chat">
                        "⤡"
                    </button>
                </Show>
                <button class="chat-popup__control" on:click=on_close title="Close chat">
                    "✕"
                </button>
            </div>

            <div class="chat-popup__content" class:chat-popup__content--centered=move || panel_view().maximized>
                <div class="chat-popup__messages" node_ref=dom.messages>
                    {move || {
                        chat.with(|c| {
                            let messages = c.transcript().messages();
                            if messages.is_empty() {
                                return view! {
                                    <div class="chat-popup__empty">"Ask me about my work, projects or experience."</div>
                                }
                                    .into_any();
                            }
                            messages.iter().map(render_message).collect::<Vec<_>>().into_any()
                        })
                    }}
                </div>

                <form class="chat-popup__form" on:submit=on_submit>
                    <input
                        class="chat-popup__input"
                        type="text"
                        placeholder="Type your question..."
                        autocomplete="off"
                        node_ref=dom.input
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary chat-popup__send" type="submit" disabled=move || !can_send()>
                        "Send"
                    </button>
                </form>
            </div>
        </aside>
    }
}

fn render_message(msg: &Message) -> AnyView {
    if msg.pending {
        return view! {
            <div class="chat-message chat-message--assistant">
                <div class="chat-message__bubble chat-message__bubble--loading">
                    <span class="chat-loader" aria-hidden="true"></span>
                    <span>"Thinking..."</span>
                </div>
            </div>
        }
            .into_any();
    }

    match msg.sender {
        Sender::User => {
            let text = msg.text.clone();
            view! {
                <div class="chat-message chat-message--user">
                    <div class="chat-message__bubble">{text}</div>
                </div>
            }
                .into_any()
        }
        Sender::Assistant => {
            let rendered = render_markdown_html(&msg.text);
            view! {
                <div class="chat-message chat-message--assistant">
                    <div class="chat-message__bubble chat-message__markdown" inner_html=rendered></div>
                </div>
            }
                .into_any()
        }
    }
}
