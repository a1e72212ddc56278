//! Chat Demo Page

use leptos::prelude::*;

use crate::api;
use crate::components::MessageBubble;
use crate::head::{apply_meta, static_meta};

const SUGGESTIONS: &[&str] = &[
    "Hi, are you open on Saturday?",
    "I'd like to book an appointment",
    "How much is a consultation?",
    "Can I speak to a person?",
];

#[component]
pub fn ChatPage() -> impl IntoView {
    apply_meta(&static_meta(
        "Live Demo",
        "Chat with the Hostline demo receptionist.",
        "/chat",
    ));

    let (messages, set_messages) = signal(vec![api::ChatMessage::new(
        "assistant",
        "Hi! I'm the Hostline demo receptionist. Ask me about hours, bookings or pricing.",
    )]);
    let (input, set_input) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let (conversation_id, set_conversation_id) = signal(None::<String>);

    let send_text = move |msg: String| {
        if msg.trim().is_empty() || loading.get() {
            return;
        }

        set_messages.update(|msgs| msgs.push(api::ChatMessage::new("user", msg.clone())));
        set_input.set(String::new());
        set_loading.set(true);

        let conversation = conversation_id.get();
        leptos::task::spawn_local(async move {
            let bubble = match api::send_chat(&msg, conversation).await {
                Ok(reply) => {
                    set_conversation_id.set(Some(reply.conversation_id));
                    api::ChatMessage::new("assistant", reply.message)
                }
                Err(e) => api::ChatMessage::new("error", e.user_message()),
            };
            set_messages.update(|msgs| msgs.push(bubble));
            set_loading.set(false);
        });
    };

    let send = move |()| send_text(input.get());

    view! {
        <div class="chat">
            <aside class="sidebar">
                <h2>"Try asking"</h2>
                <ul class="suggestions">
                    {SUGGESTIONS
                        .iter()
                        .map(|s| {
                            view! {
                                <li>
                                    <button class="suggestion" on:click=move |_| send_text((*s).to_string())>
                                        {*s}
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </aside>

            <main class="chat-main">
                <div class="messages">
                    <For
                        each=move || messages.get().into_iter().enumerate()
                        key=|(idx, _)| *idx
                        children=move |(_, msg)| view! { <MessageBubble message=msg /> }
                    />
                    <Show when=move || loading.get()>
                        <div class="message loading">"..."</div>
                    </Show>
                </div>

                <div class="input-area">
                    <textarea
                        placeholder="Say something to the receptionist..."
                        prop:value=move || input.get()
                        on:input=move |ev| set_input.set(event_target_value(&ev))
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" && !ev.shift_key() {
                                ev.prevent_default();
                                send(());
                            }
                        }
                    />
                    <button on:click=move |_| send(()) disabled=move || loading.get()>
                        {move || if loading.get() { "..." } else { "Send" }}
                    </button>
                </div>
            </main>
        </div>
    }
}
