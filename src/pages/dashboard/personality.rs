//! Personality view: Big Five scores, trait bars and the written summary.

use dioxus::prelude::*;
use doppel_ui::{GlassPanel, ProgressBar};

use super::PageHeader;
use crate::context::use_dataset;
use crate::theme::colors::accent;

#[component]
pub fn Personality() -> Element {
    let data = use_dataset();
    let profile = &data.personality;
    let strongest: Vec<String> = profile
        .strongest_traits()
        .iter()
        .take(3)
        .map(|t| t.name.clone())
        .collect();

    rsx! {
        PageHeader {
            title: "Personality Profile".to_string(),
            subtitle: "How your digital footprint maps onto the Big Five.".to_string(),
        }

        div { class: "grid-2",
            GlassPanel { title: "Big Five".to_string(), subtitle: "OCEAN model scores".to_string(),
                for (name, score) in profile.big_five.entries() {
                    div { key: "{name}", style: "margin-bottom: 0.9rem;",
                        ProgressBar { value: f64::from(score), label: name.to_string() }
                    }
                }
            }
            GlassPanel { title: "Defining Traits".to_string(),
                for personality_trait in profile.traits.iter() {
                    div { key: "{personality_trait.name}", style: "margin-bottom: 0.9rem;",
                        ProgressBar {
                            value: f64::from(personality_trait.score),
                            label: personality_trait.name.clone(),
                            color: accent(&personality_trait.color).to_string(),
                        }
                    }
                }
            }
        }

        GlassPanel { title: "Summary".to_string(), class: "glow".to_string(),
            p { class: "muted", "{profile.summary}" }
            div { style: "margin-top: 1rem;",
                for name in strongest {
                    span { key: "{name}", class: "chip", "{name}" }
                }
            }
        }
    }
}
