//! Interest tag pills
//!
//! Tags in the interest cloud scale with their weight; the size tier comes
//! from [`TagSize`] and opacity from the tag itself.

use dioxus::prelude::*;
use doppel_core::dataset::{Tag, TagSize};

#[derive(Clone, PartialEq, Props)]
pub struct TagPillProps {
    pub text: String,
    #[props(default = TagSize::Small)]
    pub size: TagSize,
    /// 0.0..=1.0
    #[props(default = 1.0)]
    pub opacity: f64,
    #[props(default)]
    pub onclick: Option<EventHandler<String>>,
}

#[component]
pub fn TagPill(props: TagPillProps) -> Element {
    let text = props.text.clone();
    let style = format!("opacity: {:.2};", props.opacity.clamp(0.0, 1.0));

    rsx! {
        button {
            class: "tag-pill {props.size.class()}",
            r#type: "button",
            style: "{style}",
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(text.clone());
                }
            },
            "{props.text}"
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct TagCloudProps {
    pub tags: Vec<Tag>,
    /// Tag text currently highlighted
    #[props(default)]
    pub selected: Option<String>,
    pub on_select: EventHandler<String>,
}

/// Flowing cloud of weighted tags
#[component]
pub fn TagCloud(props: TagCloudProps) -> Element {
    rsx! {
        div { class: "tag-cloud",
            for tag in props.tags.iter() {
                {
                    let is_selected = props.selected.as_deref() == Some(tag.text.as_str());
                    let on_select = props.on_select;
                    rsx! {
                        span {
                            key: "{tag.text}",
                            class: if is_selected { "tag-slot selected" } else { "tag-slot" },
                            TagPill {
                                text: tag.text.clone(),
                                size: tag.size(),
                                opacity: tag.opacity(),
                                onclick: move |text: String| on_select.call(text),
                            }
                        }
                    }
                }
            }
        }
    }
}
