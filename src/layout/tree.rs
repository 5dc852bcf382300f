// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use tracing::{debug, warn};

use super::config::TreeConfig;
use super::levels::GraphIndex;
use crate::model::graph::{Graph, Point};

/// Horizontal slot (in units of `sibling_spacing`) and level per node index.
#[derive(Debug, Clone, PartialEq)]
struct TreeSlots {
    slots: Vec<f64>,
    levels: Vec<usize>,
    slot_count: usize,
}

fn tree_slots(index: &GraphIndex<'_>) -> TreeSlots {
    let len = index.len();
    let mut slots = vec![0.0f64; len];
    let mut levels = vec![0usize; len];
    let mut placed = vec![false; len];
    let mut next_slot = 0usize;

    let forest = index.spanning_forest();
    if forest.is_empty() {
        warn!(nodes = len, "tree has no root; placing every node on level 0");
    }

    // Each root's subtree follows the previous one, left to right.
    for tree in &forest {
        // Leaves take consecutive slots in depth-first order.
        let mut stack = vec![tree.root()];
        while let Some(idx) = stack.pop() {
            let children = tree.children(idx);
            if children.is_empty() {
                slots[idx] = next_slot as f64;
                next_slot += 1;
            }
            stack.extend(children.iter().rev());
        }

        // Reverse BFS order visits every child before its parent.
        for &idx in tree.order().iter().rev() {
            let children = tree.children(idx);
            if let (Some(&first), Some(&last)) = (children.first(), children.last()) {
                slots[idx] = (slots[first] + slots[last]) / 2.0;
            }
            levels[idx] = tree.level(idx).unwrap_or(0);
            placed[idx] = true;
        }
    }

    let unreached = placed.iter().filter(|placed| !**placed).count();
    if unreached > 0 && !forest.is_empty() {
        debug!(unreached, "tree nodes no root reaches are appended to level 0");
    }

    for idx in 0..len {
        if !placed[idx] {
            slots[idx] = next_slot as f64;
            next_slot += 1;
        }
    }

    TreeSlots { slots, levels, slot_count: next_slot }
}

/// Top-down hierarchical layout.
///
/// Leaves are spaced evenly from left to right and every parent sits at the
/// midpoint of its first and last child, so it always lies within its
/// children's horizontal span. All nodes of a level share one `y`. The whole
/// tree is centered on `center_x`.
pub fn layout_tree(graph: &Graph, config: &TreeConfig) -> Graph {
    if graph.is_empty() {
        return graph.clone();
    }

    let index = GraphIndex::new(graph);
    let TreeSlots { slots, levels, slot_count } = tree_slots(&index);
    let middle = slot_count.saturating_sub(1) as f64 / 2.0;

    let positions = slots
        .iter()
        .zip(&levels)
        .map(|(slot, level)| {
            Point::new(
                config.center_x + (slot - middle) * config.sibling_spacing,
                config.base_y + *level as f64 * config.level_spacing,
            )
        })
        .collect::<Vec<_>>();

    graph.with_positions(&positions)
}
