// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::ids::NodeId;

/// A point in canvas coordinates (pixels, y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Node {
    id: NodeId,
    text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    y: Option<f64>,
}

impl Node {
    pub fn new(id: impl Into<NodeId>, text: impl Into<String>) -> Self {
        Self { id: id.into(), text: text.into(), x: None, y: None }
    }

    pub fn with_position(mut self, position: Point) -> Self {
        self.set_position(position);
        self
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn x(&self) -> Option<f64> {
        self.x
    }

    pub fn y(&self) -> Option<f64> {
        self.y
    }

    /// Returns the position only when both coordinates are set.
    pub fn position(&self) -> Option<Point> {
        Some(Point::new(self.x?, self.y?))
    }

    pub fn set_position(&mut self, position: Point) {
        self.x = Some(position.x);
        self.y = Some(position.y);
    }
}

/// Directed parent → child connection between two node ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Edge {
    from: NodeId,
    to: NodeId,
}

impl Edge {
    pub fn new(from: impl Into<NodeId>, to: impl Into<NodeId>) -> Self {
        Self { from: from.into(), to: to.into() }
    }

    pub fn from(&self) -> &NodeId {
        &self.from
    }

    pub fn to(&self) -> &NodeId {
        &self.to
    }
}

/// A node/edge diagram as produced by the generator and consumed by the renderer.
///
/// Node order is significant for layout tie-breaking (siblings and ranks keep
/// it), edge order decides child order under a parent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Graph {
    #[serde(default)]
    nodes: Vec<Node>,
    #[serde(default)]
    edges: Vec<Edge>,
}

impl Graph {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn push_node(&mut self, node: Node) {
        self.nodes.push(node);
    }

    pub fn push_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Clones the graph and assigns `positions[i]` to the i-th node.
    ///
    /// `positions` must have one entry per node.
    pub(crate) fn with_positions(&self, positions: &[Point]) -> Self {
        debug_assert_eq!(positions.len(), self.nodes.len());
        let nodes = self
            .nodes
            .iter()
            .zip(positions)
            .map(|(node, position)| node.clone().with_position(*position))
            .collect();
        Self { nodes, edges: self.edges.clone() }
    }
}

#[cfg(test)]
mod tests {
    use super::{Edge, Graph, Node, Point};

    #[test]
    fn deserializes_generator_json_without_positions() {
        let json = r#"{
  "nodes": [{"id": "1", "text": "Start"}, {"id": "2", "text": "End", "x": 10, "y": 20.5}],
  "edges": [{"from": "1", "to": "2"}]
}"#;
        let graph: Graph = serde_json::from_str(json).unwrap();

        assert_eq!(graph.nodes().len(), 2);
        assert_eq!(graph.nodes()[0].position(), None);
        assert_eq!(graph.nodes()[1].position(), Some(Point::new(10.0, 20.5)));
        assert_eq!(graph.edges(), &[Edge::new("1", "2")]);
    }

    #[test]
    fn omits_absent_coordinates_when_serializing() {
        let graph = Graph::new(vec![Node::new("a", "A")], Vec::new());
        let json = serde_json::to_value(&graph).unwrap();
        assert_eq!(json, serde_json::json!({"nodes": [{"id": "a", "text": "A"}], "edges": []}));
    }

    #[test]
    fn missing_lists_default_to_empty() {
        let graph: Graph = serde_json::from_str("{}").unwrap();
        assert!(graph.is_empty());
        assert!(graph.edges().is_empty());
    }

    #[test]
    fn with_positions_keeps_ids_text_and_edges() {
        let graph = Graph::new(
            vec![Node::new("a", "A"), Node::new("b", "B")],
            vec![Edge::new("a", "b")],
        );
        let placed = graph.with_positions(&[Point::new(1.0, 2.0), Point::new(3.0, 4.0)]);

        assert_eq!(placed.nodes()[0].id().as_str(), "a");
        assert_eq!(placed.nodes()[1].text(), "B");
        assert_eq!(placed.nodes()[1].position(), Some(Point::new(3.0, 4.0)));
        assert_eq!(placed.edges(), graph.edges());
        assert_eq!(graph.nodes()[0].position(), None);
    }
}
