//! Account card on the connect page

use dioxus::prelude::*;
use doppel_core::Account;
use doppel_ui::{Button, ButtonVariant};

use super::glyph;

#[derive(Clone, PartialEq, Props)]
pub struct OAuthCardProps {
    pub account: Account,
    pub on_connect: EventHandler<String>,
    pub on_disconnect: EventHandler<String>,
}

/// Shows one account with its sync state and a Connect/Disconnect toggle.
#[component]
pub fn OAuthCard(props: OAuthCardProps) -> Element {
    let account = props.account.clone();
    let connected = account.connected;
    let id = account.id.clone();
    let icon = glyph(&account.icon);
    let (variant, label) = if connected {
        (ButtonVariant::Outline, "Disconnect")
    } else {
        (ButtonVariant::Primary, "Connect")
    };

    rsx! {
        div { class: "oauth-card brand-{account.id}",
            div { class: "oauth-identity",
                div { class: "oauth-icon", "{icon}" }
                div {
                    h3 { "{account.name}" }
                    if connected {
                        p { class: "oauth-status connected",
                            "✓ Connected"
                            if let Some(last_sync) = &account.last_sync {
                                span { class: "muted", " · Last sync: {last_sync}" }
                            }
                        }
                    } else {
                        p { class: "oauth-status", "Not connected" }
                    }
                }
            }
            Button {
                variant,
                onclick: move |_| {
                    if connected {
                        props.on_disconnect.call(id.clone());
                    } else {
                        props.on_connect.call(id.clone());
                    }
                },
                "{label}"
            }
            span { class: if connected { "status-dot live" } else { "status-dot idle" } }
        }
    }
}
