//! Toast stack in the bottom-right corner.
//!
//! Each notice dismisses itself after a few seconds or on click.

use std::time::Duration;

use dioxus::prelude::*;
use doppel_core::{Notice, NoticeId};

use crate::context::use_notices;

const NOTICE_LIFETIME: Duration = Duration::from_secs(5);

#[component]
pub fn NoticeHost() -> Element {
    let notices = use_notices();
    let entries: Vec<(NoticeId, Notice)> = notices.read().iter().cloned().collect();

    rsx! {
        div { class: "notice-host", role: "status",
            for (id, notice) in entries {
                NoticeToast { key: "{id}", id, notice }
            }
        }
    }
}

#[component]
fn NoticeToast(id: NoticeId, notice: Notice) -> Element {
    let mut notices = use_notices();

    use_hook(move || {
        spawn(async move {
            tokio::time::sleep(NOTICE_LIFETIME).await;
            notices.write().dismiss(id);
        });
    });

    rsx! {
        div {
            class: "notice {notice.kind.class()}",
            onclick: move |_| {
                notices.write().dismiss(id);
            },
            div {
                div { class: "notice-title", "{notice.title}" }
                div { class: "notice-description", "{notice.description}" }
            }
            span { class: "muted", "×" }
        }
    }
}
