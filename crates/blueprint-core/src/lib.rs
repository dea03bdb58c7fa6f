// SPDX-FileCopyrightText: 2025-2026 Blueprint Contributors
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod field;
pub mod prelude;

pub use error::ModelError;
pub use field::FieldKey;
/// Re-export of the identity type used by generated models.
pub use uuid::Uuid;

/// Common interface of types expanded by `#[model]`.
///
/// The attribute generates the implementation; writing one by hand is
/// possible but rarely useful.
///
/// # Example
///
/// ```rust,ignore
/// #[model(title = "Title")]
/// pub struct Post {}
///
/// let mut post = Post::new();
/// post.set_value("Title", "Hello")?;
/// assert_eq!(Post::SCHEMA, "Post");
/// assert_eq!(post.value("Title"), Some("Hello"));
/// ```
pub trait Model {
    /// Schema name, equal to the type name as written.
    const SCHEMA: &'static str;

    /// Generated string fields in declaration order.
    const FIELDS: &'static [FieldKey];

    /// Identity of this instance, `None` until assigned.
    fn id(&self) -> Option<Uuid>;

    /// Replace the identity.
    fn set_id(&mut self, id: Option<Uuid>);

    /// Borrow a generated field by its backing key.
    fn value(&self, key: &str) -> Option<&str>;

    /// Mutably borrow a generated field by its backing key.
    fn value_mut(&mut self, key: &str) -> Option<&mut String>;

    /// Overwrite a generated field by its backing key.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownKey`] when no generated field is backed
    /// by `key`.
    fn set_value(&mut self, key: &str, value: impl Into<String>) -> Result<(), ModelError> {
        match self.value_mut(key) {
            Some(slot) => {
                *slot = value.into();
                Ok(())
            }
            None => Err(ModelError::UnknownKey {
                schema: Self::SCHEMA,
                key:    key.to_string()
            })
        }
    }

    /// Iterate over backing keys in declaration order.
    fn keys() -> impl Iterator<Item = &'static str> {
        Self::FIELDS.iter().map(FieldKey::key)
    }

    /// Find the descriptor of the field backed by `key`.
    fn field_key(key: &str) -> Option<&'static FieldKey> {
        Self::FIELDS.iter().find(|f| f.key() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Note {
        id:    Option<Uuid>,
        title: String,
        body:  String
    }

    impl Model for Note {
        const SCHEMA: &'static str = "Note";
        const FIELDS: &'static [FieldKey] =
            &[FieldKey::new("title", "Title"), FieldKey::new("body", "body")];

        fn id(&self) -> Option<Uuid> {
            self.id
        }

        fn set_id(&mut self, id: Option<Uuid>) {
            self.id = id;
        }

        fn value(&self, key: &str) -> Option<&str> {
            match key {
                "Title" => Some(&self.title),
                "body" => Some(&self.body),
                _ => None
            }
        }

        fn value_mut(&mut self, key: &str) -> Option<&mut String> {
            match key {
                "Title" => Some(&mut self.title),
                "body" => Some(&mut self.body),
                _ => None
            }
        }
    }

    #[test]
    fn set_value_by_key() {
        let mut note = Note::default();
        note.set_value("Title", "Groceries").unwrap();
        note.set_value("body", String::from("milk")).unwrap();
        assert_eq!(note.value("Title"), Some("Groceries"));
        assert_eq!(note.value("body"), Some("milk"));
    }

    #[test]
    fn set_value_unknown_key() {
        let mut note = Note::default();
        let err = note.set_value("title", "x").unwrap_err();
        assert_eq!(
            err,
            ModelError::UnknownKey {
                schema: "Note",
                key:    "title".to_string()
            }
        );
        assert_eq!(note.value("Title"), Some(""));
    }

    #[test]
    fn keys_in_declaration_order() {
        let keys: Vec<_> = Note::keys().collect();
        assert_eq!(keys, ["Title", "body"]);
    }

    #[test]
    fn field_key_lookup() {
        assert_eq!(Note::field_key("Title").map(FieldKey::name), Some("title"));
        assert!(Note::field_key("missing").is_none());
    }

    #[test]
    fn identity_round_trip() {
        let mut note = Note::default();
        assert!(note.id().is_none());
        let id = Uuid::new_v4();
        note.set_id(Some(id));
        assert_eq!(note.id(), Some(id));
    }
}
