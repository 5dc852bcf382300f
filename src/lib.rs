// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Triton: deterministic layout for generated diagrams.
//!
//! A [`model::Graph`] (nodes + parent → child edges) is laid out as a
//! flowchart, a radial mindmap or a top-down tree. Layouts are pure functions;
//! rendering happens elsewhere.

pub mod format;
pub mod layout;
pub mod model;

pub use layout::{calculate_layout, calculate_layout_named, Discipline, LayoutConfig};
pub use model::{Edge, Graph, Node, NodeId, Point};
