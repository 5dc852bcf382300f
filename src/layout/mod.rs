// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Layout algorithms for diagrams.
//!
//! Every layout takes a [`Graph`] by reference and returns a copy with `x`/`y`
//! set on each node. Layouts never fail: missing roots, cycles and dangling
//! edges degrade to a deterministic fallback placement.

pub mod config;
pub mod flowchart;
pub mod levels;
pub mod mindmap;
pub mod tree;
pub mod variants;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::graph::Graph;

pub use config::{ConfigError, FlowchartConfig, LayoutConfig, MindmapConfig, TreeConfig};
pub use flowchart::layout_flowchart;
pub use levels::{compute_levels, find_root, GraphIndex, SpanningTree};
pub use mindmap::{assign_wedges, layout_mindmap, Wedge};
pub use tree::layout_tree;
pub use variants::{layout_each_variant, layout_variants, DiagramVariants};

/// One of the supported layout algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Discipline {
    Flowchart,
    Mindmap,
    Tree,
}

impl Discipline {
    pub const ALL: [Discipline; 3] = [Self::Flowchart, Self::Mindmap, Self::Tree];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Flowchart => "flowchart",
            Self::Mindmap => "mindmap",
            Self::Tree => "tree",
        }
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown layout discipline {0:?} (expected flowchart, mindmap or tree)")]
pub struct DisciplineParseError(String);

impl FromStr for Discipline {
    type Err = DisciplineParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flowchart" => Ok(Self::Flowchart),
            "mindmap" => Ok(Self::Mindmap),
            "tree" => Ok(Self::Tree),
            other => Err(DisciplineParseError(other.to_owned())),
        }
    }
}

/// Lays `graph` out with the given discipline.
///
/// `config` must pass [`LayoutConfig::validate`]; configs built by hand are not
/// re-checked in release builds.
pub fn calculate_layout(graph: &Graph, discipline: Discipline, config: &LayoutConfig) -> Graph {
    debug_assert!(config.validate().is_ok(), "invalid layout config: {config:?}");
    tracing::debug!(
        %discipline,
        nodes = graph.nodes().len(),
        edges = graph.edges().len(),
        "calculating layout"
    );
    match discipline {
        Discipline::Flowchart => layout_flowchart(graph, &config.flowchart),
        Discipline::Mindmap => layout_mindmap(graph, &config.mindmap),
        Discipline::Tree => layout_tree(graph, &config.tree),
    }
}

/// String-tagged variant of [`calculate_layout`].
///
/// An unrecognised tag is not an error: the graph comes back unchanged.
pub fn calculate_layout_named(graph: &Graph, discipline: &str, config: &LayoutConfig) -> Graph {
    match discipline.parse::<Discipline>() {
        Ok(discipline) => calculate_layout(graph, discipline, config),
        Err(err) => {
            tracing::debug!(%err, "returning graph without layout");
            graph.clone()
        }
    }
}
