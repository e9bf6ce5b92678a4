//! Sidebar, navbar and the routed dashboard view.

use dioxus::prelude::*;

use super::{Navbar, Sidebar};
use crate::app::Route;

#[component]
pub fn DashboardLayout() -> Element {
    rsx! {
        div { class: "dashboard",
            Sidebar {}
            div { class: "dashboard-main",
                Navbar {}
                main { class: "dashboard-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
