//! Collapsible dashboard sidebar
//!
//! Collapse state lives in the store so it survives navigation between
//! dashboard views.

use dioxus::prelude::*;
use doppel_core::DashboardView;
use doppel_ui::{IconButton, StatusPill, TwinStatus};

use crate::app::Route;
use crate::context::use_store;

#[component]
pub fn Sidebar() -> Element {
    let mut store = use_store();
    let active = use_route::<Route>().dashboard_view();
    let (collapsed, syncing) = {
        let store = store.read();
        (store.sidebar_collapsed(), store.is_syncing())
    };

    rsx! {
        aside { class: if collapsed { "sidebar collapsed" } else { "sidebar" },
            div { class: "sidebar-head",
                Link { to: Route::DashboardHome {}, class: "brand",
                    span { class: "brand-mark", "✦" }
                    if !collapsed {
                        span { "Doppel" }
                    }
                }
                IconButton {
                    onclick: move |_| store.write().toggle_sidebar(),
                    aria_label: if collapsed { "Expand sidebar".to_string() } else { "Collapse sidebar".to_string() },
                    if collapsed { "›" } else { "‹" }
                }
            }

            nav { class: "sidebar-nav",
                for view in DashboardView::ALL {
                    Link {
                        key: "{view.label()}",
                        to: Route::from(view),
                        class: if active == Some(view) { "sidebar-link active" } else { "sidebar-link" },
                        span { class: "sidebar-icon", "{view.icon()}" }
                        if !collapsed {
                            span { "{view.label()}" }
                        }
                    }
                }
            }

            if !collapsed {
                div { class: "sidebar-foot",
                    StatusPill { status: TwinStatus::from_syncing(syncing) }
                    p { class: "muted", style: "font-size: 0.75rem; margin-top: 0.5rem;",
                        "Your twin is learning from your digital footprint."
                    }
                }
            }
        }
    }
}
