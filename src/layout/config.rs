// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::f64::consts::FRAC_PI_2;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Spacing and origin settings for every layout discipline.
///
/// Each section is `#[serde(default)]`, so a JSON file only needs the keys it
/// wants to change.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    pub flowchart: FlowchartConfig,
    pub tree: TreeConfig,
    pub mindmap: MindmapConfig,
}

/// Level advances along X, sibling order along Y.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FlowchartConfig {
    pub base_x: f64,
    pub base_y: f64,
    /// Horizontal distance between consecutive ranks.
    pub rank_spacing: f64,
    /// Vertical distance between nodes of the same rank.
    pub row_spacing: f64,
}

impl Default for FlowchartConfig {
    fn default() -> Self {
        Self { base_x: 50.0, base_y: 50.0, rank_spacing: 200.0, row_spacing: 150.0 }
    }
}

/// Level advances along Y, sibling order along X; the tree is centered on `center_x`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TreeConfig {
    pub center_x: f64,
    pub base_y: f64,
    /// Horizontal distance between adjacent leaf slots.
    pub sibling_spacing: f64,
    /// Vertical distance between levels.
    pub level_spacing: f64,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self { center_x: 400.0, base_y: 100.0, sibling_spacing: 200.0, level_spacing: 150.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MindmapConfig {
    pub center_x: f64,
    pub center_y: f64,
    /// Radius added per level: `radius(level) = level * ring_spacing`.
    pub ring_spacing: f64,
    /// Angle (radians) of the middle of the root's full circle partition.
    pub start_angle: f64,
    /// Fraction of a node's wedge handed down to its children, in `(0, 1)`.
    pub spread: f64,
}

impl Default for MindmapConfig {
    fn default() -> Self {
        Self {
            center_x: 400.0,
            center_y: 300.0,
            ring_spacing: 200.0,
            start_angle: FRAC_PI_2,
            spread: 0.9,
        }
    }
}

impl MindmapConfig {
    pub fn radius(&self, level: usize) -> f64 {
        level as f64 * self.ring_spacing
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read layout config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid layout config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("layout config value {key} must be finite, got {value}")]
    NotFinite { key: &'static str, value: f64 },
    #[error("layout config value {key} must be positive, got {value}")]
    NotPositive { key: &'static str, value: f64 },
    #[error("mindmap.spread must lie strictly between 0 and 1, got {0}")]
    SpreadOutOfRange(f64),
}

fn finite(key: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { key, value })
    }
}

fn positive(key: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(key, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { key, value })
    }
}

impl LayoutConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        let config = Self::from_json_str(&raw)?;
        tracing::debug!(path = %path.display(), "loaded layout config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let flow = &self.flowchart;
        finite("flowchart.base_x", flow.base_x)?;
        finite("flowchart.base_y", flow.base_y)?;
        positive("flowchart.rank_spacing", flow.rank_spacing)?;
        positive("flowchart.row_spacing", flow.row_spacing)?;

        let tree = &self.tree;
        finite("tree.center_x", tree.center_x)?;
        finite("tree.base_y", tree.base_y)?;
        positive("tree.sibling_spacing", tree.sibling_spacing)?;
        positive("tree.level_spacing", tree.level_spacing)?;

        let mind = &self.mindmap;
        finite("mindmap.center_x", mind.center_x)?;
        finite("mindmap.center_y", mind.center_y)?;
        positive("mindmap.ring_spacing", mind.ring_spacing)?;
        finite("mindmap.start_angle", mind.start_angle)?;
        finite("mindmap.spread", mind.spread)?;
        if mind.spread <= 0.0 || mind.spread >= 1.0 {
            return Err(ConfigError::SpreadOutOfRange(mind.spread));
        }

        Ok(())
    }
}
