//! Single-line text input
//!
//! Enter submits; the parent owns the value and clears it.

use dioxus::prelude::*;

use super::button::join_class;

#[derive(Clone, PartialEq, Props)]
pub struct TextInputProps {
    pub value: String,
    pub oninput: EventHandler<String>,
    /// Called with the current value when Enter is pressed
    #[props(default)]
    pub onsubmit: Option<EventHandler<String>>,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default)]
    pub label: Option<String>,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default)]
    pub id: Option<String>,
    #[props(default)]
    pub class: Option<String>,
}

/// ```rust,ignore
/// let mut draft = use_signal(String::new);
///
/// rsx! {
///     TextInput {
///         value: draft(),
///         oninput: move |s| draft.set(s),
///         onsubmit: move |s| send(s),
///         placeholder: "Ask your Doppelgänger anything...".to_string(),
///     }
/// }
/// ```
#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    let class = join_class("input-field", props.class.as_deref());
    let id = props.id.clone().unwrap_or_default();
    let value = props.value.clone();
    let onsubmit = props.onsubmit;

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label { class: "input-label", r#for: "{id}", "{label}" }
            }
            input {
                id: "{id}",
                class: "{class}",
                r#type: "text",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                oninput: move |e| props.oninput.call(e.value()),
                onkeydown: move |e: KeyboardEvent| {
                    if e.key() == Key::Enter {
                        if let Some(handler) = &onsubmit {
                            tracing::trace!(len = value.len(), "Input submitted");
                            handler.call(value.clone());
                        }
                    }
                },
            }
        }
    }
}
