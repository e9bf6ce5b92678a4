//! Chat bubbles for the twin conversation

use dioxus::prelude::*;
use doppel_core::chat::ChatMessage;
use doppel_ui::TypingIndicator;

#[component]
pub fn ChatBubble(message: ChatMessage) -> Element {
    let side = if message.is_from_ai() { "ai" } else { "user" };
    let time = message.clock_time();

    rsx! {
        div { class: "bubble-row {side}",
            if message.is_from_ai() {
                div { class: "bubble-avatar", "✦" }
            }
            div { class: "bubble {side}",
                "{message.body}"
                span { class: "bubble-time", "{time}" }
            }
        }
    }
}

/// Placeholder bubble shown while a reply is owed
#[component]
pub fn TypingBubble() -> Element {
    rsx! {
        div { class: "bubble-row ai",
            div { class: "bubble-avatar", "✦" }
            div { class: "bubble ai", TypingIndicator {} }
        }
    }
}
