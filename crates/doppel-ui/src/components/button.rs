//! Button Components
//!
//! - Primary: filled violet, the default action
//! - Hero: oversized gradient call to action on the landing page
//! - Ghost: borderless, used in the navbar and sidebar
//! - Outline: secondary actions
//! - Destructive: irreversible actions such as deleting data

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Hero,
    Ghost,
    Outline,
    Destructive,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Hero => "btn-hero",
            ButtonVariant::Ghost => "btn-ghost",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Destructive => "btn-destructive",
        }
    }
}

/// Join a base class with optional extras.
pub(crate) fn join_class(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    pub children: Element,
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    #[props(default = false)]
    pub disabled: bool,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Hero,
///         onclick: move |_| { navigator.push(Route::Connect {}); },
///         "Create Your Doppelgänger"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let class = join_class(props.variant.class(), props.class.as_deref());

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            disabled: props.disabled,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    pub children: Element,
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    #[props(default)]
    pub class: Option<String>,
}

/// Square ghost button holding a single glyph
#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let class = join_class("icon-btn", props.class.as_deref());

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            onclick: move |_| props.onclick.call(()),
            {props.children}
        }
    }
}
