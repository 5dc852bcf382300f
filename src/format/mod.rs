// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Input formats that produce graphs.
//!
//! Currently this is the plain-text outline generator used when no model
//! backend is available.

pub mod outline;

pub use outline::{flowchart_from_text, mindmap_from_text, tree_from_text, variants_from_text};
