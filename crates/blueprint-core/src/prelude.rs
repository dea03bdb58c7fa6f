// SPDX-FileCopyrightText: 2025-2026 Blueprint Contributors
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use blueprint_core::prelude::*;
//! ```

pub use crate::{FieldKey, Model, ModelError, Uuid};
