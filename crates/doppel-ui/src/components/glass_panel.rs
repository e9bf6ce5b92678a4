//! Frosted panel every dashboard card sits in.

use dioxus::prelude::*;

use super::button::join_class;

#[derive(Clone, PartialEq, Props)]
pub struct GlassPanelProps {
    /// Heading shown above the content
    #[props(default)]
    pub title: Option<String>,
    #[props(default)]
    pub subtitle: Option<String>,
    pub children: Element,
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn GlassPanel(props: GlassPanelProps) -> Element {
    let class = join_class("glass-panel", props.class.as_deref());

    rsx! {
        section { class: "{class}",
            if props.title.is_some() || props.subtitle.is_some() {
                header { class: "panel-header",
                    if let Some(title) = &props.title {
                        h3 { class: "panel-title", "{title}" }
                    }
                    if let Some(subtitle) = &props.subtitle {
                        p { class: "panel-subtitle", "{subtitle}" }
                    }
                }
            }
            {props.children}
        }
    }
}
