//! Chat transcript, lead form slot, and message input.

use leptos::prelude::*;

use launchpad::chat::{ChatSession, Sender};
use launchpad::labels::clock_label;

use crate::components::lead_form::LeadForm;
use crate::pages::launch::ChatControls;
use crate::util::timers::local_utc_offset_minutes;

/// Chat panel showing the transcript and an input for new messages.
///
/// The input is bound to the session draft; Enter or the send button posts
/// it. The lead form appears under the transcript while the bot is
/// collecting contact details.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let session = expect_context::<RwSignal<ChatSession>>();
    let controls = expect_context::<ChatControls>();

    let offset = local_utc_offset_minutes();
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = session.with(|s| s.messages().len());

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let on_click = move |_| {
        let _ = controls.send_draft();
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            let _ = controls.send_draft();
        }
    };

    let collecting = move || session.with(ChatSession::is_collecting);
    let can_send = move || session.with(|s| !s.draft().trim().is_empty());

    view! {
        <div class="chat-panel">
            <div class="chat-panel__messages" node_ref=messages_ref>
                {move || {
                    session
                        .with(|s| s.messages().to_vec())
                        .into_iter()
                        .map(|msg| {
                            let class = match msg.sender {
                                Sender::User => "chat-panel__message chat-panel__message--user",
                                Sender::Bot => "chat-panel__message chat-panel__message--bot",
                            };
                            view! {
                                <div class=class>
                                    <p class="chat-panel__text">{msg.text}</p>
                                    <span class="chat-panel__time">{clock_label(msg.sent_at, offset)}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                <Show when=collecting>
                    <LeadForm/>
                </Show>
            </div>

            <div class="chat-panel__input-row">
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder="Напиши сообщение..."
                    prop:value=move || session.with(|s| s.draft().to_owned())
                    on:input=move |ev| controls.set_draft(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button class="btn btn--primary chat-panel__send" on:click=on_click disabled=move || !can_send()>
                    "➤"
                </button>
            </div>
        </div>
    }
}
