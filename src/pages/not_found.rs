//! Fallback for unknown paths.

use dioxus::prelude::*;
use doppel_ui::{Button, ButtonVariant};

use crate::app::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let navigator = use_navigator();
    let path = format!("/{}", segments.join("/"));

    use_hook(|| tracing::warn!(path = %path, "No route matched"));

    rsx! {
        main { class: "not-found",
            h1 { class: "gradient-text", "404" }
            p { class: "muted", "Oops! Page not found" }
            code { class: "muted", "{path}" }
            Button {
                variant: ButtonVariant::Outline,
                onclick: move |_| { navigator.push(Route::Landing {}); },
                "Return to Home"
            }
        }
    }
}
