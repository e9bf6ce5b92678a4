//! Inline SVG line charts
//!
//! Values are percentages drawn into a fixed viewBox; the SVG scales with
//! its container.

use dioxus::prelude::*;

use crate::theme::colors::{GRID_LINE, TEXT_MUTED};

const VIEW_WIDTH: f64 = 600.0;
const VIEW_HEIGHT: f64 = 220.0;
/// Room for axis labels
const PAD: f64 = 28.0;

#[derive(Clone, Debug, PartialEq)]
pub struct ChartSeries {
    pub name: &'static str,
    pub color: &'static str,
    pub values: Vec<f64>,
}

/// Map values onto the plot area, left to right, with `max` at the top.
pub(crate) fn plot_points(values: &[f64], max: f64) -> Vec<(f64, f64)> {
    let width = VIEW_WIDTH - 2.0 * PAD;
    let height = VIEW_HEIGHT - 2.0 * PAD;
    let max = if max > 0.0 { max } else { 1.0 };
    let step = if values.len() > 1 {
        width / (values.len() - 1) as f64
    } else {
        0.0
    };

    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let ratio = (value / max).clamp(0.0, 1.0);
            (PAD + i as f64 * step, PAD + height * (1.0 - ratio))
        })
        .collect()
}

/// SVG `points` attribute for a polyline.
pub(crate) fn points_attr(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{:.1},{:.1}", x, y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Closed path filling the area under a line down to the x axis.
pub(crate) fn area_path(points: &[(f64, f64)]) -> String {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return String::new();
    };
    let baseline = VIEW_HEIGHT - PAD;
    let mut path = format!("M{:.1},{:.1}", first.0, baseline);
    for (x, y) in points {
        path.push_str(&format!(" L{:.1},{:.1}", x, y));
    }
    path.push_str(&format!(" L{:.1},{:.1} Z", last.0, baseline));
    path
}

#[derive(Clone, PartialEq, Props)]
pub struct LineChartProps {
    pub series: Vec<ChartSeries>,
    /// X axis labels, one per value
    pub labels: Vec<String>,
    #[props(default = 100.0)]
    pub max: f64,
    /// Shade the area under each line
    #[props(default = false)]
    pub filled: bool,
}

#[component]
pub fn LineChart(props: LineChartProps) -> Element {
    let view_box = format!("0 0 {} {}", VIEW_WIDTH, VIEW_HEIGHT);
    let count = props.labels.len();
    let label_points = plot_points(&vec![0.0; count], props.max);
    let gridlines: Vec<f64> = [0.25, 0.5, 0.75, 1.0]
        .iter()
        .map(|f| PAD + (VIEW_HEIGHT - 2.0 * PAD) * (1.0 - f))
        .collect();
    let right = VIEW_WIDTH - PAD;
    let label_y = VIEW_HEIGHT - 8.0;

    rsx! {
        svg { class: "chart", view_box: "{view_box}", preserve_aspect_ratio: "none",
            for y in gridlines {
                line {
                    x1: "{PAD}", x2: "{right}",
                    y1: "{y}", y2: "{y}",
                    stroke: GRID_LINE,
                }
            }
            for series in props.series.iter() {
                {
                    let points = plot_points(&series.values, props.max);
                    let line_points = points_attr(&points);
                    let area = area_path(&points);
                    rsx! {
                        if props.filled {
                            path { d: "{area}", fill: series.color, fill_opacity: "0.12" }
                        }
                        polyline {
                            points: "{line_points}",
                            fill: "none",
                            stroke: series.color,
                            stroke_width: "2.5",
                            stroke_linejoin: "round",
                        }
                    }
                }
            }
            for (label, (x, _)) in props.labels.iter().zip(label_points) {
                text {
                    x: "{x}",
                    y: "{label_y}",
                    text_anchor: "middle",
                    fill: TEXT_MUTED,
                    "{label}"
                }
            }
        }
        div { class: "chart-legend",
            for series in props.series.iter() {
                span {
                    span { class: "legend-swatch", style: "background: {series.color};" }
                    "{series.name}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_points_span_the_width() {
        let points = plot_points(&[0.0, 50.0, 100.0], 100.0);
        assert_eq!(points.len(), 3);
        assert_eq!(points[0], (PAD, VIEW_HEIGHT - PAD));
        assert_eq!(points[2], (VIEW_WIDTH - PAD, PAD));
        assert!((points[1].1 - VIEW_HEIGHT / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_plot_points_clamp_out_of_range() {
        let points = plot_points(&[150.0, -10.0], 100.0);
        assert_eq!(points[0].1, PAD);
        assert_eq!(points[1].1, VIEW_HEIGHT - PAD);
    }

    #[test]
    fn test_single_point_and_zero_max() {
        let points = plot_points(&[5.0], 0.0);
        assert_eq!(points, vec![(PAD, PAD)]);
    }

    #[test]
    fn test_area_path_closes_on_baseline() {
        let points = plot_points(&[10.0, 20.0], 100.0);
        let path = area_path(&points);
        assert!(path.starts_with("M28.0,192.0"));
        assert!(path.ends_with("L572.0,192.0 Z"));
        assert_eq!(area_path(&[]), "");
    }

    #[test]
    fn test_points_attr_format() {
        assert_eq!(points_attr(&[(1.0, 2.5), (3.0, 4.0)]), "1.0,2.5 3.0,4.0");
    }
}
