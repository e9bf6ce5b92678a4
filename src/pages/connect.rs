//! Connect page - link accounts before entering the dashboard.
//!
//! Connecting is simulated: the store flips the account's flag and stamps a
//! sync label. Continue stays disabled until at least one account is linked.

use dioxus::prelude::*;
use doppel_ui::{Button, ButtonVariant, GlassPanel, ProgressBar};

use crate::app::Route;
use crate::components::OAuthCard;
use crate::context::use_store;

#[component]
pub fn Connect() -> Element {
    let navigator = use_navigator();
    let mut store = use_store();

    let (accounts, connected, total, progress, can_continue) = {
        let store = store.read();
        let registry = store.registry();
        (
            registry.as_slice().to_vec(),
            registry.connected_count(),
            registry.len(),
            registry.connection_progress(),
            registry.can_continue(),
        )
    };

    rsx! {
        main { class: "connect",
            nav { class: "top-nav",
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| { navigator.push(Route::Landing {}); },
                    "← Back"
                }
                div { class: "brand",
                    span { class: "brand-mark", "✦" }
                    span { "Doppel" }
                }
                Button {
                    variant: ButtonVariant::Hero,
                    disabled: !can_continue,
                    onclick: move |_| { navigator.push(Route::DashboardHome {}); },
                    "Continue →"
                }
            }

            div { class: "connect-main",
                header {
                    h1 { class: "page-title",
                        "Connect Your "
                        span { class: "gradient-text", "Digital Life" }
                    }
                    p { class: "page-subtitle",
                        "Link your digital platforms to help our AI understand your online identity. "
                        "The more you connect, the better your Doppelgänger."
                    }
                }

                GlassPanel {
                    ProgressBar {
                        value: progress,
                        label: format!("{} of {} accounts connected", connected, total),
                    }
                    div { class: "assurances",
                        span { "🛡 End-to-end encrypted" }
                        span { "⚡ Real-time analysis" }
                    }
                }

                div { class: "connect-grid",
                    for account in accounts {
                        OAuthCard {
                            key: "{account.id}",
                            account: account.clone(),
                            on_connect: move |id: String| { store.write().connect_account(&id); },
                            on_disconnect: move |id: String| { store.write().disconnect_account(&id); },
                        }
                    }
                }

                p { class: "muted", style: "text-align: center; font-size: 0.875rem;",
                    "We only analyze public data and content you've interacted with. "
                    "Your credentials are never stored and you can disconnect anytime."
                }
            }
        }
    }
}
