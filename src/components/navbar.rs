//! Dashboard top bar
//!
//! Shows the current view, how many accounts are connected and the sync
//! button. The button is disabled while a sync is in flight and syncs
//! without toasts.

use dioxus::prelude::*;

use crate::app::Route;
use crate::context::{use_notices, use_start_sync, use_store};

#[component]
pub fn Navbar() -> Element {
    let store = use_store();
    let notices = use_notices();
    let start_sync = use_start_sync(false);
    let title = use_route::<Route>()
        .dashboard_view()
        .map(|view| view.label())
        .unwrap_or("Dashboard");

    let (connected, total, syncing) = {
        let store = store.read();
        (
            store.registry().connected_count(),
            store.registry().len(),
            store.is_syncing(),
        )
    };
    let unread = notices.read().len();

    rsx! {
        nav { class: "navbar",
            div { class: "navbar-left",
                h2 { "{title}" }
                div { class: "connected-pill",
                    span { class: if connected > 0 { "status-dot live" } else { "status-dot idle" } }
                    span { "{connected}/{total} connected" }
                }
            }
            div { class: "navbar-right",
                button {
                    class: "icon-btn",
                    r#type: "button",
                    "aria-label": "Sync now",
                    disabled: syncing,
                    onclick: move |_| start_sync.call(()),
                    span { class: if syncing { "spin" } else { "" }, "⟳" }
                }
                span { class: "icon-btn", "aria-label": "Notifications",
                    "🔔"
                    if unread > 0 {
                        span { class: "badge", "{unread}" }
                    }
                }
                div { class: "twin-identity",
                    strong { "Digital Twin" }
                    small { if syncing { "Syncing..." } else { "All synced" } }
                }
            }
        }
    }
}
