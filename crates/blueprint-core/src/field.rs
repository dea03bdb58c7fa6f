// SPDX-FileCopyrightText: 2025-2026 Blueprint Contributors
// SPDX-License-Identifier: MIT

//! Field descriptors for generated models.

/// A generated field and the key it is stored under.
///
/// `name` is the Rust identifier of the field, `key` the string given in
/// the attribute. They differ for labeled arguments:
///
/// ```rust
/// use blueprint_core::FieldKey;
///
/// // #[model(title = "Title")]
/// let labeled = FieldKey::new("title", "Title");
/// // #[model("title")]
/// let positional = FieldKey::new("title", "title");
///
/// assert_ne!(labeled, positional);
/// assert!(positional.is_verbatim());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FieldKey {
    name: &'static str,
    key:  &'static str
}

impl FieldKey {
    /// Create a descriptor.
    #[must_use]
    pub const fn new(name: &'static str, key: &'static str) -> Self {
        Self {
            name,
            key
        }
    }

    /// Rust identifier of the field.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Backing key of the field.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        self.key
    }

    /// `true` when the key equals the identifier.
    #[must_use]
    pub fn is_verbatim(&self) -> bool {
        self.name == self.key
    }
}

impl std::fmt::Display for FieldKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_verbatim() {
            f.write_str(self.name)
        } else {
            write!(f, "{} ({})", self.name, self.key)
        }
    }
}
