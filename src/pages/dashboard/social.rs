//! Social graph: the user at the centre, everyone else on three orbits.
//!
//! Clicking a node opens its detail panel. The dataset carries a full
//! record for one highlighted node; other nodes show their connections.

use std::collections::HashMap;

use dioxus::prelude::*;
use doppel_core::dataset::NodeKind;
use doppel_ui::{GlassPanel, ProgressBar};

use super::PageHeader;
use crate::context::use_dataset;

/// Half-width of the SVG viewBox; outermost orbit plus label room
const CANVAS_HALF: f64 = 320.0;

/// Circle radius for a node's relative size.
fn node_radius(size: u32) -> f64 {
    (f64::from(size) * 9.0 / 10.0).max(8.0)
}

#[component]
pub fn Social() -> Element {
    let data = use_dataset();
    let graph = &data.social;
    let mut selected = use_signal(|| graph.selected.id.clone());

    let positions: HashMap<String, (f64, f64)> = graph
        .radial_layout()
        .into_iter()
        .map(|p| (p.id, (p.x, p.y)))
        .collect();

    // (x1, y1, x2, y2, stroke width, stroke opacity)
    let edges: Vec<(f64, f64, f64, f64, f64, f64)> = graph
        .edges
        .iter()
        .filter_map(|edge| {
            let (x1, y1) = positions.get(&edge.from)?;
            let (x2, y2) = positions.get(&edge.to)?;
            Some((
                *x1,
                *y1,
                *x2,
                *y2,
                1.0 + edge.strength * 3.0,
                0.2 + edge.strength * 0.6,
            ))
        })
        .collect();

    let selected_id = selected();
    let focus = graph.node(&selected_id).cloned();
    let detail = (graph.selected.id == selected_id).then(|| graph.selected.clone());
    let neighbours: Vec<(String, f64)> = graph
        .neighbors(&selected_id)
        .into_iter()
        .map(|(node, strength)| (node.label.clone(), strength))
        .collect();
    let view_box = format!(
        "{} {} {} {}",
        -CANVAS_HALF,
        -CANVAS_HALF,
        CANVAS_HALF * 2.0,
        CANVAS_HALF * 2.0
    );
    let legend: Vec<(NodeKind, usize)> = NodeKind::ALL
        .into_iter()
        .map(|kind| (kind, graph.nodes_of_kind(kind).count()))
        .collect();

    rsx! {
        PageHeader {
            title: "Social Graph".to_string(),
            subtitle: "The people, platforms and channels orbiting your digital life.".to_string(),
        }

        div { class: "grid-main-side",
            GlassPanel {
                svg { class: "social-canvas", view_box: "{view_box}",
                    for (index, (x1, y1, x2, y2, width, opacity)) in edges.into_iter().enumerate() {
                        line {
                            key: "{index}",
                            x1: "{x1}", y1: "{y1}", x2: "{x2}", y2: "{y2}",
                            class: "social-edge",
                            stroke_width: "{width}",
                            stroke_opacity: "{opacity}",
                        }
                    }
                    for node in graph.nodes.iter() {
                        {
                            let (x, y) = positions.get(&node.id).copied().unwrap_or((0.0, 0.0));
                            let radius = node_radius(node.size);
                            let label_y = y + radius + 14.0;
                            let id = node.id.clone();
                            let class = if node.id == selected_id {
                                format!("social-node {} selected", node.kind.class())
                            } else {
                                format!("social-node {}", node.kind.class())
                            };
                            rsx! {
                                g {
                                    key: "{node.id}",
                                    class: "{class}",
                                    onclick: move |_| selected.set(id.clone()),
                                    circle { cx: "{x}", cy: "{y}", r: "{radius}" }
                                    text { x: "{x}", y: "{label_y}", text_anchor: "middle", "{node.label}" }
                                }
                            }
                        }
                    }
                }
                div { class: "chart-legend",
                    for (kind, count) in legend {
                        span { key: "{kind.label()}",
                            svg { width: "12", height: "12", class: "{kind.class()}",
                                circle { cx: "6", cy: "6", r: "5" }
                            }
                            " {kind.label()} ({count})"
                        }
                    }
                }
            }

            GlassPanel { title: "Connection Details".to_string(),
                if let Some(node) = focus {
                    h3 { "{node.label}" }
                    p { class: "muted", "{node.kind.label()}" }
                    if let Some(count) = node.interactions {
                        p { "{count} interactions" }
                    }
                    if let Some(detail) = detail {
                        div { style: "margin: 1rem 0;",
                            ProgressBar { value: detail.mood_impact * 100.0, label: "Mood impact".to_string() }
                        }
                        p { class: "muted", "Last interaction: {detail.last_interaction}" }
                        div { style: "margin-top: 0.75rem;",
                            for interest in detail.shared_interests.iter() {
                                span { key: "{interest}", class: "chip", "{interest}" }
                            }
                        }
                    }
                    h4 { style: "margin-top: 1rem;", "Connections" }
                    for (label, strength) in neighbours {
                        div { key: "{label}", style: "margin-top: 0.5rem;",
                            ProgressBar { value: strength * 100.0, label: label.clone() }
                        }
                    }
                } else {
                    p { class: "muted", "Select a node to see details." }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doppel_core::MockDataset;

    #[test]
    fn test_node_radius_floor() {
        assert_eq!(node_radius(0), 8.0);
        assert_eq!(node_radius(30), 27.0);
    }

    #[test]
    fn test_layout_fits_canvas() {
        let data = MockDataset::seed().unwrap();
        let graph = &data.social;
        for position in graph.radial_layout() {
            let node = graph.node(&position.id).unwrap();
            let reach = position.x.abs().max(position.y.abs()) + node_radius(node.size);
            assert!(reach < CANVAS_HALF, "{} overflows the canvas", node.id);
        }
    }
}
