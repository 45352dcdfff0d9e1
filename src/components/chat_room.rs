//! Community chat side panel.
//!
//! DESIGN
//! ======
//! Messages live in the `ChatState` context so the panel can be closed and
//! reopened without losing history. Sending appends a local message only;
//! there is no relay behind this panel.

use leptos::prelude::*;

use crate::state::chat::{ChatState, INPUT_PLACEHOLDER, ONLINE_LABEL};
use crate::util::clock::now_label;

#[component]
pub fn ChatRoom(#[prop(into)] is_open: Signal<bool>, on_close: Callback<()>) -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest message in view when history grows or the panel reopens.
    Effect::new(move || {
        let _ = chat.with(|c| c.messages.len());
        let _ = is_open.get();
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    let send = move || {
        let text = input.get_untracked();
        let sent = chat.try_update(|c| c.send(&text, now_label())).unwrap_or(false);
        if sent {
            input.set(String::new());
        }
    };

    view! {
        <Show when=move || is_open.get()>
            <aside class="chat-room">
                <div class="chat-room__header">
                    <div class="chat-room__title">
                        <span class="chat-room__pulse"></span>
                        <span>"Shadow Chat"</span>
                    </div>
                    <div class="chat-room__meta">
                        <span class="chat-room__online">{ONLINE_LABEL}</span>
                        <button
                            class="chat-room__close"
                            title="Close"
                            on:click=move |_| on_close.run(())
                        >
                            "×"
                        </button>
                    </div>
                </div>

                <div class="chat-room__messages" node_ref=messages_ref>
                    {move || {
                        chat.get()
                            .messages
                            .into_iter()
                            .map(|msg| {
                                let mut class = String::from("chat-room__message");
                                if msg.is_local() {
                                    class.push_str(" chat-room__message--local");
                                }
                                if msg.is_ai {
                                    class.push_str(" chat-room__message--ai");
                                }
                                view! {
                                    <div class=class>
                                        <div class="chat-room__message-meta">
                                            <span class="chat-room__user">{msg.user}</span>
                                            <span class="chat-room__time">{msg.time}</span>
                                        </div>
                                        <div class="chat-room__bubble">{msg.text}</div>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>

                <div class="chat-room__input-row">
                    <input
                        class="chat-room__input"
                        type="text"
                        placeholder=INPUT_PLACEHOLDER
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                send();
                            }
                        }
                    />
                    <button class="chat-room__send" on:click=move |_| send()>
                        "Send"
                    </button>
                </div>
            </aside>
        </Show>
    }
}
