//! Settings: profile, data management, preferences and the danger zone.
//!
//! Preferences are local to the page and reset on navigation.

use dioxus::prelude::*;
use doppel_core::Notice;
use doppel_ui::{Button, ButtonVariant, GlassPanel};

use super::PageHeader;
use crate::context::{push_notice, use_notices, use_start_sync, use_store};

#[component]
fn Toggle(label: String, description: String, on: Signal<bool>) -> Element {
    let mut on = on;
    let class = if on() { "switch on" } else { "switch" };

    rsx! {
        div { class: "setting-row",
            div {
                h4 { "{label}" }
                p { "{description}" }
            }
            button {
                class: "{class}",
                role: "switch",
                aria_checked: "{on}",
                aria_label: "{label}",
                onclick: move |_| on.toggle(),
            }
        }
    }
}

#[component]
pub fn Settings() -> Element {
    let store = use_store();
    let notices = use_notices();
    let start_sync = use_start_sync(true);

    let push_enabled = use_signal(|| false);
    let dark_mode = use_signal(|| true);
    let enhanced_privacy = use_signal(|| false);

    let syncing = store.read().is_syncing();
    let connected = store.read().registry().connected_count();
    let sync_label = if syncing { "Syncing..." } else { "Sync Now" };

    let request_deletion = move |_: ()| {
        tracing::warn!("Data deletion requested");
        push_notice(notices, Notice::deletion_requested());
    };

    rsx! {
        div { class: "settings",
            PageHeader {
                title: "Settings".to_string(),
                subtitle: "Manage your digital twin and your data.".to_string(),
            }

            GlassPanel {
                div { class: "profile-card",
                    div { class: "profile-avatar", "✦" }
                    div { style: "flex: 1;",
                        h3 { class: "panel-title", "Digital Twin" }
                        p { class: "muted", "your-email@example.com" }
                        p { class: "muted", style: "font-size: 0.85rem;",
                            "{connected} accounts connected "
                            span { style: "color: var(--emerald);", "• Active since Jan 2024" }
                        }
                    }
                    Button { variant: ButtonVariant::Outline, "Edit Profile" }
                }
            }

            GlassPanel { title: "Data Management".to_string(),
                div { class: "setting-row",
                    div {
                        h4 { "Re-sync Data" }
                        p { "Pull the latest activity from every connected account" }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: syncing,
                        onclick: move |_| start_sync.call(()),
                        "{sync_label}"
                    }
                }
                div { class: "setting-row",
                    div {
                        h4 { "Delete All Data" }
                        p { "Permanently remove everything your twin has learned" }
                    }
                    Button { variant: ButtonVariant::Destructive, onclick: request_deletion, "Delete" }
                }
            }

            GlassPanel { title: "Preferences".to_string(),
                Toggle {
                    label: "Push Notifications".to_string(),
                    description: "Get notified when your twin learns something new".to_string(),
                    on: push_enabled,
                }
                Toggle {
                    label: "Dark Mode".to_string(),
                    description: "Use the dark interface".to_string(),
                    on: dark_mode,
                }
                Toggle {
                    label: "Enhanced Privacy".to_string(),
                    description: "Process data locally where possible".to_string(),
                    on: enhanced_privacy,
                }
            }

            GlassPanel { title: "Danger Zone".to_string(), class: "danger".to_string(),
                div { class: "setting-row danger",
                    div {
                        h4 { "Delete Account" }
                        p { "Close your account and erase your digital twin" }
                    }
                    Button { variant: ButtonVariant::Destructive, onclick: request_deletion, "Delete Account" }
                }
            }
        }
    }
}
