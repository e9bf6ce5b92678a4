//! Mood & Trends: weekly and monthly series, the sentiment heatmap, a
//! self-reported mood slider and the activity timeline.

use dioxus::prelude::*;
use doppel_core::clamp_mood;
use doppel_core::dataset::{sentiment_percent, TimeOfDay};
use doppel_ui::{GlassPanel, MetricCard};

use super::PageHeader;
use crate::components::{glyph, ChartSeries, LineChart};
use crate::context::{use_dataset, use_store};
use crate::theme::colors::{sentiment_fill, AMBER, CYAN, VIOLET};

#[component]
pub fn Mood() -> Element {
    let data = use_dataset();
    let mut store = use_store();
    let mood = &data.mood;
    let current = store.read().current_mood();
    let current_label = format!("{:.0}", current);

    let days: Vec<String> = mood.weekly.iter().map(|d| d.day.clone()).collect();
    let weekly = vec![
        ChartSeries {
            name: "Mood",
            color: CYAN,
            values: mood.weekly.iter().map(|d| f64::from(d.mood)).collect(),
        },
        ChartSeries {
            name: "Energy",
            color: VIOLET,
            values: mood.weekly.iter().map(|d| f64::from(d.energy)).collect(),
        },
        ChartSeries {
            name: "Stress",
            color: AMBER,
            values: mood.weekly.iter().map(|d| f64::from(d.stress)).collect(),
        },
    ];

    let weeks: Vec<String> = mood.monthly.iter().map(|w| w.week.clone()).collect();
    let monthly = vec![
        ChartSeries {
            name: "Mood",
            color: CYAN,
            values: mood.monthly.iter().map(|w| f64::from(w.mood)).collect(),
        },
        ChartSeries {
            name: "Energy",
            color: VIOLET,
            values: mood.monthly.iter().map(|w| f64::from(w.energy)).collect(),
        },
    ];

    let peak = mood
        .peak_day()
        .map(|d| (d.day.clone(), d.mood.to_string()))
        .unwrap_or_else(|| ("-".to_string(), "-".to_string()));

    rsx! {
        PageHeader {
            title: "Mood & Trends".to_string(),
            subtitle: "Emotional patterns across your online activity.".to_string(),
        }

        div { class: "grid-4",
            MetricCard {
                title: "Average Mood".to_string(),
                value: format!("{:.0}", mood.average_mood()),
                caption: "this week".to_string(),
                icon: "☺".to_string(),
            }
            MetricCard {
                title: "Average Energy".to_string(),
                value: format!("{:.0}", mood.average_energy()),
                caption: "this week".to_string(),
                icon: "⚡".to_string(),
            }
            MetricCard {
                title: "Average Stress".to_string(),
                value: format!("{:.0}", mood.average_stress()),
                caption: "this week".to_string(),
                icon: "≈".to_string(),
            }
            MetricCard {
                title: "Best Day".to_string(),
                value: peak.0,
                caption: format!("mood {}", peak.1),
                icon: "★".to_string(),
            }
        }

        GlassPanel { title: "How do you feel right now?".to_string(),
            div { style: "display: flex; align-items: center; gap: 1rem;",
                input {
                    r#type: "range",
                    min: "0",
                    max: "100",
                    value: "{current}",
                    style: "flex: 1;",
                    oninput: move |e| {
                        if let Ok(value) = e.value().parse::<f64>() {
                            store.write().set_current_mood(clamp_mood(value));
                        }
                    },
                }
                strong { "{current_label}" }
            }
        }

        div { class: "grid-2",
            GlassPanel { title: "This Week".to_string(), subtitle: "Mood, energy and stress".to_string(),
                LineChart { series: weekly, labels: days }
            }
            GlassPanel { title: "This Month".to_string(), subtitle: "Weekly averages".to_string(),
                LineChart { series: monthly, labels: weeks, filled: true }
            }
        }

        div { class: "grid-2",
            GlassPanel { title: "Sentiment Heatmap".to_string(), subtitle: "Positive sentiment by time of day".to_string(),
                div { class: "heatmap",
                    span {}
                    for tod in TimeOfDay::ALL {
                        span { key: "{tod.label()}", class: "heatmap-head", "{tod.label()}" }
                    }
                    for row in mood.sentiment.iter() {
                        span { key: "{row.day}", class: "muted", "{row.day}" }
                        for tod in TimeOfDay::ALL {
                            {
                                let value = row.get(tod);
                                let fill = sentiment_fill(value);
                                let percent = sentiment_percent(value);
                                rsx! {
                                    span {
                                        class: "heatmap-cell",
                                        style: "background: {fill};",
                                        "{percent}%"
                                    }
                                }
                            }
                        }
                    }
                }
            }
            GlassPanel { title: "Timeline".to_string(), subtitle: "Today's activity and how it felt".to_string(),
                div { class: "timeline",
                    for (index, item) in mood.timeline.iter().enumerate() {
                        div { key: "{index}", class: "timeline-item",
                            span { class: "timeline-time", "{item.time}" }
                            div { class: "timeline-icon", {glyph(&item.icon)} }
                            div { style: "flex: 1;", "{item.event}" }
                            span { class: "chip", "{item.mood}" }
                        }
                    }
                }
            }
        }
    }
}
