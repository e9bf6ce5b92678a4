//! Loading indicators

use dioxus::prelude::*;

/// Rotating ring, shown on buttons while a sync runs
#[component]
pub fn LoadingSpinner(label: Option<String>) -> Element {
    rsx! {
        span { class: "spinner-wrap",
            span { class: "spinner", "aria-hidden": "true" }
            if let Some(label) = label {
                span { class: "spinner-label", "{label}" }
            }
        }
    }
}

/// Three bouncing dots while the twin "types"
#[component]
pub fn TypingIndicator() -> Element {
    rsx! {
        div { class: "typing-indicator", role: "status", "aria-label": "Doppelgänger is typing",
            span { class: "typing-dot" }
            span { class: "typing-dot" }
            span { class: "typing-dot" }
        }
    }
}
