// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use tracing::{debug, warn};

use super::config::FlowchartConfig;
use super::levels::GraphIndex;
use crate::model::graph::{Graph, Point};

/// Level of every node (by node index), measured from the root whose tree
/// claims it. Nodes no root reaches sit in rank 0.
fn node_levels(index: &GraphIndex<'_>) -> Vec<usize> {
    let forest = index.spanning_forest();
    if forest.is_empty() {
        warn!(nodes = index.len(), "flowchart has no root; placing every node in rank 0");
        return vec![0; index.len()];
    }

    let mut levels = vec![None; index.len()];
    for tree in &forest {
        for &idx in tree.order() {
            levels[idx] = tree.level(idx);
        }
    }

    let unreached = levels.iter().filter(|level| level.is_none()).count();
    if unreached > 0 {
        debug!(unreached, "flowchart nodes no root reaches default to rank 0");
    }
    levels.into_iter().map(|level| level.unwrap_or(0)).collect()
}

/// Groups node indices by level, keeping node order inside each rank.
fn ranks(levels: &[usize]) -> Vec<Vec<usize>> {
    let max_level = levels.iter().copied().max().unwrap_or(0);
    let mut ranks = vec![Vec::<usize>::new(); max_level + 1];
    for (idx, level) in levels.iter().enumerate() {
        ranks[*level].push(idx);
    }
    ranks
}

/// Sequential left-to-right layout.
///
/// - Rank `x = base_x + level * rank_spacing`; every node of a rank shares it.
/// - Inside a rank nodes keep their input order, one `row_spacing` apart.
/// - Each rank is centered vertically against the tallest rank.
pub fn layout_flowchart(graph: &Graph, config: &FlowchartConfig) -> Graph {
    if graph.is_empty() {
        return graph.clone();
    }

    let index = GraphIndex::new(graph);
    let ranks = ranks(&node_levels(&index));
    let tallest = ranks.iter().map(Vec::len).max().unwrap_or(0);

    let mut positions = vec![Point::default(); index.len()];
    for (level, members) in ranks.iter().enumerate() {
        let x = config.base_x + level as f64 * config.rank_spacing;
        let offset = (tallest - members.len()) as f64 * config.row_spacing / 2.0;
        for (row, &idx) in members.iter().enumerate() {
            let y = config.base_y + offset + row as f64 * config.row_spacing;
            positions[idx] = Point::new(x, y);
        }
    }

    graph.with_positions(&positions)
}
