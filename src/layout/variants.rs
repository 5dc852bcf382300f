// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::config::LayoutConfig;
use super::flowchart::layout_flowchart;
use super::mindmap::layout_mindmap;
use super::tree::layout_tree;
use super::Discipline;
use crate::model::graph::Graph;

/// The same diagram in all three disciplines.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DiagramVariants {
    pub flowchart: Graph,
    pub mindmap: Graph,
    pub tree: Graph,
}

impl DiagramVariants {
    pub fn get(&self, discipline: Discipline) -> &Graph {
        match discipline {
            Discipline::Flowchart => &self.flowchart,
            Discipline::Mindmap => &self.mindmap,
            Discipline::Tree => &self.tree,
        }
    }
}

/// Lays `graph` out under every discipline.
///
/// The three layouts are independent and run on the rayon pool.
pub fn layout_variants(graph: &Graph, config: &LayoutConfig) -> DiagramVariants {
    debug_assert!(config.validate().is_ok(), "invalid layout config: {config:?}");
    let (flowchart, (mindmap, tree)) = rayon::join(
        || layout_flowchart(graph, &config.flowchart),
        || {
            rayon::join(
                || layout_mindmap(graph, &config.mindmap),
                || layout_tree(graph, &config.tree),
            )
        },
    );
    DiagramVariants { flowchart, mindmap, tree }
}

/// Lays out each variant with its own discipline.
///
/// Used when the three graphs differ, e.g. the per-discipline outputs of the
/// outline generator.
pub fn layout_each_variant(variants: &DiagramVariants, config: &LayoutConfig) -> DiagramVariants {
    debug_assert!(config.validate().is_ok(), "invalid layout config: {config:?}");
    let (flowchart, (mindmap, tree)) = rayon::join(
        || layout_flowchart(&variants.flowchart, &config.flowchart),
        || {
            rayon::join(
                || layout_mindmap(&variants.mindmap, &config.mindmap),
                || layout_tree(&variants.tree, &config.tree),
            )
        },
    );
    DiagramVariants { flowchart, mindmap, tree }
}
