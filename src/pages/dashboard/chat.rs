//! Chat with the twin.
//!
//! The conversation lives only as long as this page. Replies arrive after
//! the configured delay and are dropped if the page unmounts first.

use std::rc::Rc;

use dioxus::prelude::*;
use doppel_core::chat::{ChatSession, RandomPicker};
use doppel_core::{run_after, ViewScope};
use doppel_ui::{Button, GlassPanel, ProgressBar, TextInput};

use crate::components::{ChatBubble, TypingBubble};
use crate::context::{use_config, use_dataset};
use crate::theme::colors::accent;

#[component]
pub fn Chat() -> Element {
    let data = use_dataset();
    let config = use_config();
    let seed = data.chat.clone();
    let mut session = use_signal(move || ChatSession::seeded(&seed));
    let mut draft = use_signal(String::new);
    let scope = use_hook(|| Rc::new(ViewScope::new()));

    let reply_delay = config.chat_reply_delay();
    let send = use_callback(move |input: String| {
        let Some(id) = session.write().submit(&input) else {
            return;
        };
        draft.set(String::new());
        tracing::debug!(id, "Message sent to twin");

        let token = scope.token();
        spawn(async move {
            run_after(reply_delay, &token, move || {
                if let Some(reply) = session.write().deliver_reply(&mut RandomPicker) {
                    tracing::debug!(id = reply.id, "Twin replied");
                }
            })
            .await;
        });
    });

    let traits: Vec<(String, u8, String)> = data
        .personality
        .strongest_traits()
        .iter()
        .take(4)
        .map(|t| (t.name.clone(), t.score, t.color.clone()))
        .collect();
    let markers = data.chat.style_markers.clone();
    let blank = draft.read().trim().is_empty();

    rsx! {
        div { class: "chat-layout",
            GlassPanel { class: "chat-panel".to_string(),
                header { class: "chat-header",
                    div { class: "bubble-avatar", "✦" }
                    div {
                        h3 { class: "panel-title", "Your Digital Twin" }
                        p { class: "muted", "Online • Thinking like you" }
                    }
                }
                div { class: "chat-messages",
                    for message in session.read().messages().iter().cloned() {
                        ChatBubble { key: "{message.id}", message }
                    }
                    if session.read().is_typing() {
                        TypingBubble {}
                    }
                }
                div { class: "chat-input",
                    TextInput {
                        value: draft(),
                        oninput: move |value: String| draft.set(value),
                        onsubmit: move |value: String| send.call(value),
                        placeholder: "Ask your digital twin anything...".to_string(),
                    }
                    Button {
                        disabled: blank,
                        onclick: move |_| send.call(draft()),
                        "Send"
                    }
                }
            }

            aside { class: "chat-sidebar",
                GlassPanel { title: "Personality".to_string(), subtitle: "What shapes the replies".to_string(),
                    for (name, score, color) in traits {
                        div { key: "{name}", style: "margin-bottom: 0.8rem;",
                            ProgressBar {
                                value: f64::from(score),
                                label: name.clone(),
                                color: accent(&color).to_string(),
                            }
                        }
                    }
                }
                GlassPanel { title: "Communication Style".to_string(),
                    div {
                        for marker in markers {
                            span { key: "{marker}", class: "chip", "{marker}" }
                        }
                    }
                    p { class: "muted", style: "margin-top: 1rem; font-size: 0.85rem;",
                        "Your twin answers the way you write: same tone, same interests, same quirks."
                    }
                }
            }
        }
    }
}
