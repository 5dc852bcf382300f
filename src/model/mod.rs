// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A [`Graph`] is a plain node/edge list. Layouts read it and hand back a copy
//! with coordinates filled in.

pub(crate) mod fixtures;
pub mod graph;
pub mod ids;

pub use graph::{Edge, Graph, Node, Point};
pub use ids::NodeId;
