//! Dashboard views, rendered inside `DashboardLayout`.

mod chat;
mod home;
mod interests;
mod mood;
mod personality;
mod settings;
mod social;

pub use chat::Chat;
pub use home::DashboardHome;
pub use interests::Interests;
pub use mood::Mood;
pub use personality::Personality;
pub use settings::Settings;
pub use social::Social;

use dioxus::prelude::*;

/// Gradient page heading with a muted subtitle.
#[component]
fn PageHeader(title: String, subtitle: String) -> Element {
    rsx! {
        header {
            h1 { class: "page-title gradient-text", "{title}" }
            p { class: "page-subtitle", "{subtitle}" }
        }
    }
}
