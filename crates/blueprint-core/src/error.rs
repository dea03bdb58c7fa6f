// SPDX-FileCopyrightText: 2025-2026 Blueprint Contributors
// SPDX-License-Identifier: MIT

//! Errors raised by key-based access on generated models.

use thiserror::Error;

/// Error returned by [`Model::set_value`](crate::Model::set_value).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// No generated field is backed by the requested key.
    #[error("model `{schema}` has no field with key `{key}`")]
    UnknownKey {
        /// Schema of the model that was accessed.
        schema: &'static str,
        /// Key that was requested.
        key:    String
    }
}
