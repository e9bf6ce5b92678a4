//! Dashboard home: highlights, weekly mood, AI summary and recent activity.

use dioxus::prelude::*;
use doppel_ui::{GlassPanel, MetricCard};

use super::PageHeader;
use crate::components::{glyph, ChartSeries, LineChart};
use crate::context::{use_dataset, use_store};
use crate::theme::colors::{CYAN, VIOLET};

#[component]
pub fn DashboardHome() -> Element {
    let data = use_dataset();
    let store = use_store();
    let highlights = &data.highlights;
    let mood_now = store.read().current_mood().round();

    let days: Vec<String> = data.mood.weekly.iter().map(|d| d.day.clone()).collect();
    let series = vec![
        ChartSeries {
            name: "Mood",
            color: CYAN,
            values: data.mood.weekly.iter().map(|d| f64::from(d.mood)).collect(),
        },
        ChartSeries {
            name: "Energy",
            color: VIOLET,
            values: data.mood.weekly.iter().map(|d| f64::from(d.energy)).collect(),
        },
    ];

    rsx! {
        PageHeader {
            title: "Welcome back, Digital Twin".to_string(),
            subtitle: "Here's what your Doppelgänger learned about you today.".to_string(),
        }

        div { class: "grid-4",
            MetricCard {
                title: "Your Mood Today".to_string(),
                value: format!("{}", mood_now),
                caption: highlights.mood_today.label.clone(),
                trend: highlights.mood_today.trend.clone(),
                icon: "☺".to_string(),
            }
            MetricCard {
                title: "Most Watched".to_string(),
                value: highlights.top_category.value.clone(),
                caption: format!("{} videos", highlights.top_category.count),
                icon: glyph("video").to_string(),
            }
            MetricCard {
                title: "Top Artist".to_string(),
                value: highlights.top_artist.value.clone(),
                caption: format!("{} plays", highlights.top_artist.count),
                icon: glyph("music").to_string(),
            }
            MetricCard {
                title: "Energy Level".to_string(),
                value: format!("{}%", highlights.energy_level.value),
                caption: highlights.energy_level.label.clone(),
                trend: highlights.energy_level.trend.clone(),
                icon: "⚡".to_string(),
            }
        }

        div { class: "grid-main-side",
            GlassPanel {
                title: "Weekly Mood & Energy".to_string(),
                subtitle: "Your emotional patterns this week".to_string(),
                LineChart { series, labels: days, filled: true }
            }
            GlassPanel { title: "AI Summary".to_string(), class: "glow".to_string(),
                p { class: "muted", "{highlights.summary}" }
            }
        }

        GlassPanel {
            title: "Recent Activity".to_string(),
            subtitle: "What your digital self has been up to".to_string(),
            div { class: "timeline",
                for (index, item) in data.mood.timeline.iter().enumerate() {
                    div { key: "{index}", class: "timeline-item",
                        div { class: "timeline-icon", {glyph(&item.icon)} }
                        div { style: "flex: 1;",
                            div { "{item.event}" }
                            span { class: "chip", "{item.mood}" }
                        }
                        span { class: "timeline-time", "{item.time}" }
                    }
                }
            }
        }
    }
}
