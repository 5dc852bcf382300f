// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::f64::consts::TAU;

use tracing::{debug, warn};

use super::config::MindmapConfig;
use super::levels::{GraphIndex, SpanningTree};
use crate::model::graph::{Graph, Point};

/// Angular range owned by a subtree, in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wedge {
    center: f64,
    width: f64,
}

impl Wedge {
    pub fn center(&self) -> f64 {
        self.center
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn start(&self) -> f64 {
        self.center - self.width / 2.0
    }

    pub fn end(&self) -> f64 {
        self.center + self.width / 2.0
    }
}

/// Assigns a wedge to every node reachable from the tree root.
///
/// The root owns the full circle and hands all of it to its children. Below
/// that, a node hands `spread` of its own wedge (centered on its angle) to its
/// children, split evenly in edge order. A single child therefore keeps the
/// whole scaled wedge instead of collapsing to a ray.
pub fn assign_wedges(
    tree: &SpanningTree,
    len: usize,
    config: &MindmapConfig,
) -> Vec<Option<Wedge>> {
    let mut wedges = vec![None; len];
    let root = tree.root();
    wedges[root] = Some(Wedge { center: config.start_angle, width: TAU });

    for &idx in tree.order() {
        let children = tree.children(idx);
        if children.is_empty() {
            continue;
        }
        let Some(parent) = wedges[idx] else {
            continue;
        };

        let span = if idx == root { parent.width } else { parent.width * config.spread };
        let step = span / children.len() as f64;
        let start = parent.center - span / 2.0;
        for (slot, &child) in children.iter().enumerate() {
            wedges[child] = Some(Wedge { center: start + step * (slot as f64 + 0.5), width: step });
        }
    }

    wedges
}

/// Radial layout around `(center_x, center_y)`.
///
/// The root sits at the center and every level lies on its own ring,
/// `radius(level) = level * ring_spacing`. Each node is placed at the middle of
/// the wedge inherited from its parent, so sibling subtrees never interleave.
/// Without a root every node is placed at the center; nodes the root cannot
/// reach stay there as well.
pub fn layout_mindmap(graph: &Graph, config: &MindmapConfig) -> Graph {
    if graph.is_empty() {
        return graph.clone();
    }

    let index = GraphIndex::new(graph);
    let center = Point::new(config.center_x, config.center_y);
    let mut positions = vec![center; index.len()];

    let Some(root) = index.root() else {
        warn!(nodes = index.len(), "mindmap has no root; placing every node at the center");
        return graph.with_positions(&positions);
    };

    let tree = index.spanning_tree(root);
    let unreached = index.len() - tree.reached();
    if unreached > 0 {
        debug!(unreached, "mindmap nodes unreachable from root stay at the center");
    }

    let wedges = assign_wedges(&tree, index.len(), config);
    for &idx in tree.order() {
        let (Some(level), Some(wedge)) = (tree.level(idx), wedges[idx]) else {
            continue;
        };
        if level == 0 {
            continue;
        }
        let radius = config.radius(level);
        let angle = wedge.center();
        positions[idx] = Point::new(
            config.center_x + radius * angle.cos(),
            config.center_y + radius * angle.sin(),
        );
    }

    graph.with_positions(&positions)
}
