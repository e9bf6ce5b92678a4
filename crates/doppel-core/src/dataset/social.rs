//! Social graph: people, platforms and channels around the user.

use std::collections::HashSet;
use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use super::invalid;
use crate::error::DoppelResult;

/// Innermost orbit radius of the radial layout, in layout units
const BASE_RADIUS: f64 = 100.0;
/// Gap between successive orbits
const ORBIT_STEP: f64 = 80.0;
const ORBITS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// The user at the centre of the graph
    #[serde(rename = "self")]
    You,
    Friend,
    Platform,
    Channel,
    Artist,
}

impl NodeKind {
    /// Legend order.
    pub const ALL: [NodeKind; 5] = [
        NodeKind::You,
        NodeKind::Friend,
        NodeKind::Platform,
        NodeKind::Channel,
        NodeKind::Artist,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NodeKind::You => "self",
            NodeKind::Friend => "friend",
            NodeKind::Platform => "platform",
            NodeKind::Channel => "channel",
            NodeKind::Artist => "artist",
        }
    }

    /// CSS class carrying the node colour.
    pub fn class(&self) -> &'static str {
        match self {
            NodeKind::You => "node-self",
            NodeKind::Friend => "node-friend",
            NodeKind::Platform => "node-platform",
            NodeKind::Channel => "node-channel",
            NodeKind::Artist => "node-artist",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialNode {
    pub id: String,
    pub label: String,
    pub kind: NodeKind,
    pub size: u32,
    /// Interaction count; platforms and the user carry none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interactions: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialEdge {
    pub from: String,
    pub to: String,
    /// Tie strength in `[0, 1]`
    pub strength: f64,
}

/// Detail record for the node highlighted in the side panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedNode {
    pub id: String,
    /// Share of mood swings attributed to this node, in `[0, 1]`
    pub mood_impact: f64,
    pub shared_interests: Vec<String>,
    pub last_interaction: String,
}

/// Position of a node relative to the graph centre.
#[derive(Debug, Clone, PartialEq)]
pub struct NodePosition {
    pub id: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialGraph {
    pub nodes: Vec<SocialNode>,
    pub edges: Vec<SocialEdge>,
    pub selected: SelectedNode,
}

impl SocialGraph {
    pub fn node(&self, id: &str) -> Option<&SocialNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Nodes adjacent to `id` with the strength of the connecting edge,
    /// strongest first. Edges are undirected.
    pub fn neighbors(&self, id: &str) -> Vec<(&SocialNode, f64)> {
        let mut out: Vec<(&SocialNode, f64)> = self
            .edges
            .iter()
            .filter_map(|edge| {
                let other = if edge.from == id {
                    &edge.to
                } else if edge.to == id {
                    &edge.from
                } else {
                    return None;
                };
                self.node(other).map(|n| (n, edge.strength))
            })
            .collect();
        out.sort_by(|a, b| b.1.total_cmp(&a.1));
        out
    }

    pub fn nodes_of_kind(&self, kind: NodeKind) -> impl Iterator<Item = &SocialNode> {
        self.nodes.iter().filter(move |n| n.kind == kind)
    }

    /// Place the user at the origin and everyone else on three orbits,
    /// spread evenly by angle in fixture order.
    pub fn radial_layout(&self) -> Vec<NodePosition> {
        let outer: Vec<&SocialNode> = self
            .nodes
            .iter()
            .filter(|n| n.kind != NodeKind::You)
            .collect();
        let count = outer.len().max(1) as f64;

        let mut positions: Vec<NodePosition> = self
            .nodes
            .iter()
            .filter(|n| n.kind == NodeKind::You)
            .map(|n| NodePosition {
                id: n.id.clone(),
                x: 0.0,
                y: 0.0,
            })
            .collect();

        for (index, node) in outer.into_iter().enumerate() {
            let angle = index as f64 / count * TAU;
            let radius = BASE_RADIUS + (index % ORBITS) as f64 * ORBIT_STEP;
            positions.push(NodePosition {
                id: node.id.clone(),
                x: angle.cos() * radius,
                y: angle.sin() * radius,
            });
        }
        positions
    }

    pub(crate) fn validate(&self) -> DoppelResult<()> {
        let mut seen = HashSet::new();
        for node in &self.nodes {
            if !seen.insert(node.id.as_str()) {
                return Err(invalid(format!("duplicate social node id {}", node.id)));
            }
        }
        if self.nodes_of_kind(NodeKind::You).count() != 1 {
            return Err(invalid("social graph needs exactly one self node"));
        }
        for edge in &self.edges {
            for end in [&edge.from, &edge.to] {
                if !seen.contains(end.as_str()) {
                    return Err(invalid(format!(
                        "edge {} -> {} references unknown node {}",
                        edge.from, edge.to, end
                    )));
                }
            }
            if !(0.0..=1.0).contains(&edge.strength) {
                return Err(invalid(format!(
                    "edge {} -> {} has strength {}, expected 0..=1",
                    edge.from, edge.to, edge.strength
                )));
            }
        }
        if !seen.contains(self.selected.id.as_str()) {
            return Err(invalid(format!("selected node {} is not in the graph", self.selected.id)));
        }
        if !(0.0..=1.0).contains(&self.selected.mood_impact) {
            return Err(invalid("selected node mood impact must be within 0..=1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MockDataset;

    fn graph() -> SocialGraph {
        MockDataset::seed().unwrap().social
    }

    #[test]
    fn test_center_and_selected() {
        let graph = graph();
        let you = graph.nodes_of_kind(NodeKind::You).next().unwrap();
        assert_eq!(you.id, "you");
        assert_eq!(graph.node(&graph.selected.id).unwrap().label, "Alice Chen");
        assert_eq!(graph.node("spotify").unwrap().interactions, None);
    }

    #[test]
    fn test_neighbors_strongest_first() {
        let graph = graph();
        let ids: Vec<&str> = graph
            .neighbors("you")
            .iter()
            .map(|(n, _)| n.id.as_str())
            .collect();
        assert_eq!(ids, vec!["spotify", "alice", "youtube", "bob", "carol"]);

        let alice: Vec<(&str, f64)> = graph
            .neighbors("alice")
            .iter()
            .map(|(n, s)| (n.id.as_str(), *s))
            .collect();
        assert_eq!(alice, vec![("you", 0.9), ("bob", 0.4)]);
    }

    #[test]
    fn test_radial_layout() {
        let graph = graph();
        let layout = graph.radial_layout();
        assert_eq!(layout.len(), graph.nodes.len());

        let you = layout.iter().find(|p| p.id == "you").unwrap();
        assert_eq!((you.x, you.y), (0.0, 0.0));

        // first outer node sits on the inner orbit at angle 0
        let alice = layout.iter().find(|p| p.id == "alice").unwrap();
        assert!((alice.x - 100.0).abs() < 1e-9);
        assert!(alice.y.abs() < 1e-9);

        // third outer node sits on the outermost orbit
        let carol = layout.iter().find(|p| p.id == "carol").unwrap();
        assert!((carol.x.hypot(carol.y) - 260.0).abs() < 1e-9);
    }

    #[test]
    fn test_kind_serde() {
        let kind: NodeKind = serde_json::from_str("\"self\"").unwrap();
        assert_eq!(kind, NodeKind::You);
        assert_eq!(serde_json::to_string(&NodeKind::Artist).unwrap(), "\"artist\"");
    }

    #[test]
    fn test_dangling_edge_rejected() {
        let mut graph = graph();
        graph.edges.push(SocialEdge {
            from: "you".to_string(),
            to: "dave".to_string(),
            strength: 0.3,
        });
        let err = graph.validate().unwrap_err();
        assert!(err.to_string().contains("dave"));
    }

    #[test]
    fn test_strength_out_of_range_rejected() {
        let mut graph = graph();
        graph.edges[0].strength = 1.2;
        assert!(graph.validate().is_err());
    }

    #[test]
    fn test_duplicate_node_rejected() {
        let mut graph = graph();
        let dup = graph.nodes[1].clone();
        graph.nodes.push(dup);
        assert!(graph.validate().is_err());
    }
}
