//! Interests: ranked themes, the weighted tag cloud and topic clusters.

use dioxus::prelude::*;
use doppel_ui::{GlassPanel, ProgressBar, TagCloud};

use super::PageHeader;
use crate::components::glyph;
use crate::context::use_dataset;

#[component]
pub fn Interests() -> Element {
    let data = use_dataset();
    let interests = &data.interests;
    let mut selected: Signal<Option<String>> = use_signal(|| None);

    let tags = interests.tag_cloud.clone();
    let top = interests.top_theme().map(|t| t.name.clone()).unwrap_or_default();
    let cluster = selected
        .read()
        .as_deref()
        .and_then(|tag| interests.cluster_for(tag))
        .cloned();
    let caption = selected().map(|tag| match &cluster {
        Some(cluster) => format!("{} belongs to {}", tag, cluster.name),
        None => format!("{} stands on its own", tag),
    });

    rsx! {
        PageHeader {
            title: "Interests".to_string(),
            subtitle: "What catches your attention, grouped by theme.".to_string(),
        }

        div { class: "grid-2",
            GlassPanel { title: "Top Themes".to_string(), subtitle: format!("Leading: {}", top),
                for theme in interests.top_themes.iter() {
                    div { key: "{theme.name}", style: "display: flex; gap: 0.75rem; align-items: center; margin-bottom: 0.9rem;",
                        span { class: "timeline-icon", {glyph(&theme.icon)} }
                        div { style: "flex: 1;",
                            ProgressBar { value: f64::from(theme.score), label: theme.name.clone() }
                        }
                    }
                }
            }
            GlassPanel { title: "Tag Cloud".to_string(), subtitle: "Sized by how often each topic appears".to_string(),
                TagCloud {
                    tags,
                    selected: selected(),
                    on_select: move |tag: String| {
                        let next = if selected.read().as_deref() == Some(tag.as_str()) { None } else { Some(tag) };
                        selected.set(next);
                    },
                }
                if let Some(caption) = caption {
                    p { class: "muted", style: "margin-top: 1rem; text-align: center;", "{caption}" }
                }
            }
        }

        GlassPanel { title: "Interest Clusters".to_string(),
            div { class: "grid-4",
                for group in interests.clusters.iter() {
                    {
                        let highlighted = cluster.as_ref().is_some_and(|c| c.name == group.name);
                        rsx! {
                            div {
                                key: "{group.name}",
                                class: if highlighted { "glass-panel glow" } else { "glass-panel" },
                                h4 { "{group.name}" }
                                div { style: "margin-top: 0.5rem;",
                                    for item in group.items.iter() {
                                        span { key: "{item}", class: "chip", "{item}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        GlassPanel { title: "What This Says About You".to_string(), class: "glow".to_string(),
            p { class: "muted", "{interests.summary}" }
        }
    }
}
