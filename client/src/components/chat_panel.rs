//! Co-pilot chat panel: transcript plus prompt input.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submissions go through `state::chat::submit`, which owns the single
//! in-flight guard. The prompt text is a local signal so keystrokes do not
//! re-render the transcript. Assistant answers render as Markdown with raw HTML
//! stripped; any attached data is shown in a collapsible JSON block.

use leptos::prelude::*;

use crate::net::api::HttpBackend;
use crate::state::chat::{ChatMessage, ChatSession, Sender, submit};
use crate::util::clock;
use crate::util::markdown::{pretty_data, render_markdown_html};

#[component]
pub fn ChatPanel() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatSession>>();
    let backend = StoredValue::new(expect_context::<HttpBackend>());
    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    let transcript_shape = Memo::new(move |_| chat.with(|c| (c.messages().len(), c.is_loading())));

    Effect::new(move || {
        transcript_shape.track();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    let do_send = move || {
        let backend = backend.get_value();
        leptos::task::spawn_local(async move {
            submit(&backend, &chat, &input, clock::now_ms).await;
        });
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let is_loading = move || chat.with(ChatSession::is_loading);
    let can_send = move || !is_loading() && input.with(|text| !text.trim().is_empty());

    view! {
        <section class="panel chat-panel">
            <h3 class="panel__title">"Operations Co-Pilot"</h3>
            <div class="chat-panel__messages" node_ref=messages_ref>
                <For
                    each=move || chat.with(|c| c.messages().to_vec())
                    key=|msg| msg.id.clone()
                    children=|msg| view! { <ChatEntry message=msg/> }
                />
                <Show when=is_loading>
                    <div class="chat-panel__loading">"Analyzing..."</div>
                </Show>
            </div>

            <div class="chat-panel__input-row">
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder="Ask about fuel, maintenance, production, or emissions..."
                    disabled=is_loading
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button class="btn btn--primary chat-panel__send" on:click=on_click disabled=move || !can_send()>
                    "Send"
                </button>
            </div>
        </section>
    }
}

/// One transcript entry.
#[component]
fn ChatEntry(message: ChatMessage) -> impl IntoView {
    let is_assistant = message.sender == Sender::Assistant;
    let time = clock::format_time(message.timestamp_ms, clock::local_offset_minutes());
    let body = if is_assistant {
        let rendered = render_markdown_html(&message.text);
        view! { <div class="chat-entry__markdown" inner_html=rendered></div> }.into_any()
    } else {
        view! { <span>{message.text}</span> }.into_any()
    };
    let data = message.data.as_ref().map(|data| {
        let pretty = pretty_data(data);
        view! {
            <details class="chat-entry__data">
                <summary>"View data"</summary>
                <pre>{pretty}</pre>
            </details>
        }
    });

    view! {
        <div
            class="chat-entry"
            class:chat-entry--user=!is_assistant
            class:chat-entry--assistant=is_assistant
            data-id=message.id
        >
            <div class="chat-entry__content">{body}</div>
            {data}
            <div class="chat-entry__time">{time}</div>
        </div>
    }
}
