// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use triton::{Edge, Graph, Node};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeParams {
    pub nodes: usize,
    pub fanout: usize,
    /// Every n-th node also gets an edge back to the root, exercising the
    /// visited-set guard. Zero disables it.
    pub back_edge_every: usize,
    pub label_len: usize,
}

impl TreeParams {
    pub const fn new(nodes: usize, fanout: usize, back_edge_every: usize, label_len: usize) -> Self {
        Self { nodes, fanout, back_edge_every, label_len }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Small,
    Interactive,
    LargeCyclic,
}

impl Case {
    pub const ALL: [Case; 3] = [Self::Small, Self::Interactive, Self::LargeCyclic];

    pub const fn id(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Interactive => "interactive",
            Self::LargeCyclic => "large_cyclic",
        }
    }

    pub const fn params(self) -> TreeParams {
        match self {
            Self::Small => TreeParams::new(24, 3, 0, 12),
            Self::Interactive => TreeParams::new(300, 4, 0, 24),
            Self::LargeCyclic => TreeParams::new(2_000, 5, 7, 24),
        }
    }
}

fn label(idx: usize, target_len: usize) -> String {
    let mut out = format!("Step {idx}");
    while out.len() < target_len {
        out.push('_');
    }
    out
}

/// Node `n<i>` hangs under `n<(i - 1) / fanout>`, listed in id order.
pub fn tree(params: TreeParams) -> Graph {
    assert!(params.nodes >= 1, "nodes must be >= 1");
    assert!(params.fanout >= 1, "fanout must be >= 1");

    let mut graph = Graph::default();
    for idx in 0..params.nodes {
        graph.push_node(Node::new(format!("n{idx}"), label(idx, params.label_len)));
    }
    for idx in 1..params.nodes {
        let parent = (idx - 1) / params.fanout;
        graph.push_edge(Edge::new(format!("n{parent}"), format!("n{idx}")));
        if params.back_edge_every > 0 && idx % params.back_edge_every == 0 {
            graph.push_edge(Edge::new(format!("n{idx}"), "n0"));
        }
    }
    graph
}

pub fn fixture(case: Case) -> Graph {
    tree(case.params())
}

pub fn checksum(graph: &Graph) -> u64 {
    let mut acc = 0u64;
    for node in graph.nodes() {
        if let Some(point) = node.position() {
            acc = acc.wrapping_mul(131).wrapping_add(point.x().to_bits());
            acc = acc.wrapping_mul(131).wrapping_add(point.y().to_bits());
        }
    }
    acc
}
