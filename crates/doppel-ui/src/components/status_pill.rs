//! Twin Status Indicator
//!
//! The pill in the navbar telling the user what their twin is doing:
//! - "Active & Learning": idle, accounts feeding it
//! - "Syncing...": a sync is in flight

use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TwinStatus {
    #[default]
    Learning,
    Syncing,
}

impl TwinStatus {
    pub fn from_syncing(is_syncing: bool) -> Self {
        if is_syncing {
            TwinStatus::Syncing
        } else {
            TwinStatus::Learning
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TwinStatus::Learning => "Active & Learning",
            TwinStatus::Syncing => "Syncing...",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            TwinStatus::Learning => "status-pill learning",
            TwinStatus::Syncing => "status-pill syncing",
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct StatusPillProps {
    pub status: TwinStatus,
}

#[component]
pub fn StatusPill(props: StatusPillProps) -> Element {
    rsx! {
        div { class: "{props.status.class()}",
            span {
                class: "status-dot",
                role: "img",
                "aria-label": "{props.status.label()}",
            }
            span { class: "status-label", "{props.status.label()}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twin_status_labels() {
        assert_eq!(TwinStatus::Learning.label(), "Active & Learning");
        assert_eq!(TwinStatus::Syncing.label(), "Syncing...");
    }

    #[test]
    fn twin_status_from_flag() {
        assert_eq!(TwinStatus::from_syncing(true), TwinStatus::Syncing);
        assert_eq!(TwinStatus::from_syncing(false), TwinStatus::Learning);
        assert_eq!(TwinStatus::default(), TwinStatus::Learning);
    }
}
