//! Metric Card Component
//!
//! A highlight tile: icon, headline value, caption and an optional trend
//! such as `+8%`.

use dioxus::prelude::*;

/// Direction a trend string points in
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Trend {
    Up,
    Down,
    #[default]
    Flat,
}

impl Trend {
    /// Read the sign of a trend label like `+12%` or `-3%`.
    pub fn parse(label: &str) -> Self {
        match label.trim_start().chars().next() {
            Some('+') => Trend::Up,
            Some('-') | Some('\u{2212}') => Trend::Down,
            _ => Trend::Flat,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Trend::Up => "trend-up",
            Trend::Down => "trend-down",
            Trend::Flat => "trend-flat",
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct MetricCardProps {
    pub title: String,
    pub value: String,
    /// Caption under the value
    pub caption: String,
    #[props(default)]
    pub trend: Option<String>,
    /// Icon glyph
    pub icon: String,
}

/// ```rust,ignore
/// rsx! {
///     MetricCard {
///         title: "Mood Today".to_string(),
///         value: "82".to_string(),
///         caption: "Energetic".to_string(),
///         trend: Some("+8%".to_string()),
///         icon: "☺".to_string(),
///     }
/// }
/// ```
#[component]
pub fn MetricCard(props: MetricCardProps) -> Element {
    rsx! {
        div { class: "metric-card glass-panel",
            div { class: "metric-head",
                span { class: "metric-title", "{props.title}" }
                span { class: "metric-icon", "{props.icon}" }
            }
            div { class: "metric-value", "{props.value}" }
            div { class: "metric-foot",
                span { class: "metric-caption", "{props.caption}" }
                if let Some(trend) = &props.trend {
                    span { class: "metric-trend {Trend::parse(trend).class()}", "{trend}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_parse() {
        assert_eq!(Trend::parse("+8%"), Trend::Up);
        assert_eq!(Trend::parse(" -3%"), Trend::Down);
        assert_eq!(Trend::parse("0%"), Trend::Flat);
        assert_eq!(Trend::parse(""), Trend::Flat);
    }

    #[test]
    fn trend_classes() {
        assert_eq!(Trend::Up.class(), "trend-up");
        assert_eq!(Trend::default().class(), "trend-flat");
    }
}
