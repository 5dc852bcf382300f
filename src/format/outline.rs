// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::OnceLock;

use regex::Regex;

use crate::layout::variants::DiagramVariants;
use crate::model::graph::{Edge, Graph, Node};

const INDENT_WIDTH: usize = 2;

fn list_marker() -> &'static Regex {
    static LIST_MARKER: OnceLock<Regex> = OnceLock::new();
    LIST_MARKER
        .get_or_init(|| Regex::new(r"^(?:[-*+]|\d+[.)])\s+").expect("list marker pattern is valid"))
}

/// Trimmed line text with any leading bullet or number marker removed.
fn node_text(line: &str) -> String {
    let trimmed = line.trim();
    list_marker().replace(trimmed, "").into_owned()
}

fn non_blank_lines(input: &str) -> impl Iterator<Item = &str> {
    input.lines().filter(|line| !line.trim().is_empty())
}

/// Two spaces make one level; a tab counts as a full level.
fn indent_level(line: &str) -> usize {
    let mut spaces = 0usize;
    let mut tabs = 0usize;
    for ch in line.chars() {
        match ch {
            ' ' => spaces += 1,
            '\t' => tabs += 1,
            _ => break,
        }
    }
    spaces / INDENT_WIDTH + tabs
}

/// One node per line (`node-1`, `node-2`, ...), chained in line order.
pub fn flowchart_from_text(input: &str) -> Graph {
    let mut graph = Graph::default();
    for (idx, line) in non_blank_lines(input).enumerate() {
        let id = format!("node-{}", idx + 1);
        if idx > 0 {
            graph.push_edge(Edge::new(format!("node-{idx}"), id.clone()));
        }
        graph.push_node(Node::new(id, node_text(line)));
    }
    graph
}

/// First line becomes `center`; every further line a `branch-<n>` off it.
pub fn mindmap_from_text(input: &str) -> Graph {
    let mut graph = Graph::default();
    for (idx, line) in non_blank_lines(input).enumerate() {
        if idx == 0 {
            graph.push_node(Node::new("center", node_text(line)));
            continue;
        }
        let id = format!("branch-{idx}");
        graph.push_edge(Edge::new("center", id.clone()));
        graph.push_node(Node::new(id, node_text(line)));
    }
    graph
}

/// Builds a hierarchy from indentation (`node-0`, `node-1`, ...).
///
/// A line's parent is the closest preceding line with a smaller indent level.
/// Lines on level 0 start a new tree.
pub fn tree_from_text(input: &str) -> Graph {
    let mut graph = Graph::default();
    let mut stack = Vec::<usize>::new();

    for (idx, line) in non_blank_lines(input).enumerate() {
        let level = indent_level(line);
        stack.truncate(level);
        if let Some(parent) = stack.last() {
            graph.push_edge(Edge::new(format!("node-{parent}"), format!("node-{idx}")));
        }
        stack.push(idx);
        graph.push_node(Node::new(format!("node-{idx}"), node_text(line)));
    }

    graph
}

/// All three generated graphs, without positions.
pub fn variants_from_text(input: &str) -> DiagramVariants {
    DiagramVariants {
        flowchart: flowchart_from_text(input),
        mindmap: mindmap_from_text(input),
        tree: tree_from_text(input),
    }
}
