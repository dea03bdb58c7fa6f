// SPDX-FileCopyrightText: 2025-2026 Blueprint Contributors
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

// Re-export the attribute and companion macro
// Re-export all core types
pub use blueprint_core::*;
pub use blueprint_model_impl::{model, stringify_expr};
