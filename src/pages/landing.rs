//! Landing page - what Doppel is, and the way in.

use dioxus::prelude::*;
use doppel_ui::{Button, ButtonVariant, GlassPanel};

use crate::app::Route;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        icon: "◎",
        title: "Personality Mapping",
        description: "Advanced AI analyzes your digital footprint to build a comprehensive personality model.",
    },
    Feature {
        icon: "↗",
        title: "Mood Trends",
        description: "Track emotional patterns across your online activity with beautiful visualizations.",
    },
    Feature {
        icon: "⚇",
        title: "Interest Graph",
        description: "Discover connections between your interests, friends, and digital interactions.",
    },
    Feature {
        icon: "✉",
        title: "AI Doppelgänger Chat",
        description: "Chat with an AI version of yourself that thinks and speaks like you.",
    },
];

#[component]
pub fn Landing() -> Element {
    let navigator = use_navigator();

    rsx! {
        main { class: "landing",
            nav { class: "top-nav",
                div { class: "brand",
                    span { class: "brand-mark", "✦" }
                    span { "Doppel" }
                }
                div { class: "nav-actions",
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| { navigator.push(Route::Connect {}); },
                        "Connect Accounts"
                    }
                    Button {
                        variant: ButtonVariant::Hero,
                        onclick: move |_| { navigator.push(Route::DashboardHome {}); },
                        "Enter Dashboard"
                    }
                }
            }

            section { class: "hero",
                h1 {
                    "Meet Your "
                    br {}
                    span { class: "gradient-text", "Digital Doppelgänger" }
                }
                p {
                    "Your online life, transformed into a conscious AI version of you. "
                    "Connect your accounts and discover who you really are in the digital realm."
                }
                Button {
                    variant: ButtonVariant::Hero,
                    onclick: move |_| { navigator.push(Route::Connect {}); },
                    "Get Started →"
                }
            }

            section { class: "feature-grid",
                for feature in FEATURES.iter() {
                    GlassPanel { key: "{feature.title}",
                        div { class: "feature-icon", "{feature.icon}" }
                        h3 { class: "panel-title", "{feature.title}" }
                        p { class: "muted", "{feature.description}" }
                    }
                }
            }

            footer { class: "footer", "Doppel · Your data, reflected back at you." }
        }
    }
}
