// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![cfg(test)]

use super::graph::{Edge, Graph, Node};

fn graph(nodes: &[(&str, &str)], edges: &[(&str, &str)]) -> Graph {
    Graph::new(
        nodes.iter().map(|(id, text)| Node::new(*id, *text)).collect(),
        edges.iter().map(|(from, to)| Edge::new(*from, *to)).collect(),
    )
}

/// `1 -> 2 -> 3`
pub(crate) fn chain_three() -> Graph {
    graph(&[("1", "Start"), ("2", "Mid"), ("3", "End")], &[("1", "2"), ("2", "3")])
}

/// ```text
///        r
///     /  |  \
///    a   b   c
///   / \      |
///  a1 a2     c1
/// ```
pub(crate) fn branching_tree() -> Graph {
    graph(
        &[
            ("r", "Root"),
            ("a", "A"),
            ("b", "B"),
            ("c", "C"),
            ("a1", "A1"),
            ("a2", "A2"),
            ("c1", "C1"),
        ],
        &[("r", "a"), ("r", "b"), ("r", "c"), ("a", "a1"), ("a", "a2"), ("c", "c1")],
    )
}

/// Same shape as [`branching_tree`], nodes listed leaves-first.
pub(crate) fn branching_tree_shuffled() -> Graph {
    graph(
        &[
            ("c1", "C1"),
            ("a2", "A2"),
            ("b", "B"),
            ("r", "Root"),
            ("a1", "A1"),
            ("c", "C"),
            ("a", "A"),
        ],
        &[("r", "a"), ("r", "b"), ("r", "c"), ("a", "a1"), ("a", "a2"), ("c", "c1")],
    )
}

/// `a -> b -> c -> a`: every node has an incoming edge.
pub(crate) fn cycle_without_root() -> Graph {
    graph(&[("a", "A"), ("b", "B"), ("c", "C")], &[("a", "b"), ("b", "c"), ("c", "a")])
}

/// `r -> a -> b -> c -> a`: a rooted graph whose tail loops back.
pub(crate) fn rooted_cycle() -> Graph {
    graph(
        &[("r", "Root"), ("a", "A"), ("b", "B"), ("c", "C")],
        &[("r", "a"), ("a", "b"), ("b", "c"), ("c", "a")],
    )
}

/// Root `r` plus an isolated node `z` that is a second in-degree-zero node.
pub(crate) fn two_roots() -> Graph {
    graph(&[("r", "Root"), ("a", "A"), ("z", "Loose")], &[("r", "a")])
}

/// Edges pointing at ids that do not exist.
pub(crate) fn dangling_edges() -> Graph {
    graph(
        &[("r", "Root"), ("a", "A")],
        &[("r", "ghost"), ("r", "a"), ("phantom", "a"), ("a", "void")],
    )
}

/// `r` with five direct children and a single grandchild under the first.
pub(crate) fn wide_star() -> Graph {
    graph(
        &[
            ("r", "Root"),
            ("s1", "S1"),
            ("s2", "S2"),
            ("s3", "S3"),
            ("s4", "S4"),
            ("s5", "S5"),
            ("s1a", "S1a"),
        ],
        &[("r", "s1"), ("r", "s2"), ("r", "s3"), ("r", "s4"), ("r", "s5"), ("s1", "s1a")],
    )
}

/// Two separate trees plus a cycle no root reaches.
///
/// ```text
///    r1      r2    x <-> y
///   /  \     |
///  a    b    c
/// ```
pub(crate) fn forest() -> Graph {
    graph(
        &[("r1", "R1"), ("a", "A"), ("b", "B"), ("r2", "R2"), ("c", "C"), ("x", "X"), ("y", "Y")],
        &[("r1", "a"), ("r1", "b"), ("r2", "c"), ("x", "y"), ("y", "x")],
    )
}
