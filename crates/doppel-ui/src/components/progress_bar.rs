//! Horizontal percentage bar, used for trait scores and connection progress.

use dioxus::prelude::*;

/// CSS width for a percentage, kept inside `0%..=100%`.
pub fn bar_width(percent: f64) -> String {
    let percent = if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 100.0)
    };
    format!("{:.0}%", percent)
}

#[derive(Clone, PartialEq, Props)]
pub struct ProgressBarProps {
    /// Fill, in percent
    pub value: f64,
    #[props(default)]
    pub label: Option<String>,
    /// Fill colour; defaults to the theme gradient
    #[props(default)]
    pub color: Option<String>,
}

#[component]
pub fn ProgressBar(props: ProgressBarProps) -> Element {
    let width = bar_width(props.value);
    let fill_style = match &props.color {
        Some(color) => format!("width: {}; background: {};", width, color),
        None => format!("width: {};", width),
    };

    rsx! {
        div { class: "progress",
            if let Some(label) = &props.label {
                div { class: "progress-label",
                    span { "{label}" }
                    span { class: "progress-value", "{width}" }
                }
            }
            div {
                class: "progress-track",
                role: "progressbar",
                "aria-valuemin": "0",
                "aria-valuemax": "100",
                "aria-valuenow": "{props.value}",
                div { class: "progress-fill", style: "{fill_style}" }
            }
        }
    }
}
