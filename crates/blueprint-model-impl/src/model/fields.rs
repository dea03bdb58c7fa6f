// SPDX-FileCopyrightText: 2025-2026 Blueprint Contributors
// SPDX-License-Identifier: MIT

//! Field specification built from attribute arguments.
//!
//! # Naming
//!
//! | Argument | Field ident | Backing key |
//! |----------|-------------|-------------|
//! | `title = "Title"` | `title` | `"Title"` |
//! | `"title"` | `title` | `"title"` |
//!
//! # Validation
//!
//! The synthesizer accepts any [`FieldSpec`]. Rules that keep the expanded
//! struct well-formed are checked here, while the spans of the original
//! arguments are still available:
//!
//! - positional literals must be valid Rust identifiers
//! - backing keys must not be empty
//! - field identifiers must be unique, `r#name` and `name` being the same
//! - backing keys must be unique
//! - no field may be named like the identity field or a hand-written field

use std::collections::HashSet;

use syn::{Ident, ext::IdentExt};

use super::{args::ArgumentNode, decl::IDENTITY_FIELD};

/// A single generated field: Rust identifier plus backing key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldName {
    ident: String,
    key:   String
}

impl FieldName {
    /// Field whose backing key differs from its identifier.
    pub fn keyed(ident: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            ident: ident.into(),
            key:   key.into()
        }
    }

    /// Field whose backing key equals its identifier.
    pub fn verbatim(ident: impl Into<String>) -> Self {
        let ident = ident.into();
        Self {
            key: ident.clone(),
            ident
        }
    }

    /// Rust identifier of the field.
    pub fn ident(&self) -> &str {
        &self.ident
    }

    /// Backing key of the field.
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Ordered list of fields requested by one `#[model]` invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSpec(Vec<FieldName>);

impl FieldSpec {
    /// Wrap an already validated list.
    pub fn new(fields: Vec<FieldName>) -> Self {
        Self(fields)
    }

    /// Build and validate the field list from parsed argument nodes.
    ///
    /// `own` lists the fields already declared on the struct; generated
    /// fields may not reuse their names.
    ///
    /// # Errors
    ///
    /// All violations are accumulated; see the module docs for the rules.
    pub fn from_arguments(nodes: &[ArgumentNode], own: &[Ident]) -> darling::Result<Self> {
        let mut errors = darling::Error::accumulator();
        let declared: HashSet<String> = own.iter().map(|i| i.unraw().to_string()).collect();
        let mut seen_idents = HashSet::new();
        let mut seen_keys = HashSet::new();
        let mut fields = Vec::with_capacity(nodes.len());

        for node in nodes {
            let Some((field, name)) = errors.handle(field_from_node(node)) else {
                continue;
            };

            if name == IDENTITY_FIELD {
                errors.push(
                    darling::Error::custom(format!(
                        "`{IDENTITY_FIELD}` is reserved for the identity field"
                    ))
                    .with_span(node.literal())
                );
                continue;
            }

            if declared.contains(&name) {
                errors.push(
                    darling::Error::custom(format!(
                        "field `{name}` is already declared on the struct"
                    ))
                    .with_span(node.literal())
                );
                continue;
            }

            if !seen_idents.insert(name.clone()) {
                errors.push(darling::Error::duplicate_field(&name).with_span(node.literal()));
                continue;
            }

            if !seen_keys.insert(field.key().to_string()) {
                errors.push(
                    darling::Error::custom(format!(
                        "backing key `{}` is used by more than one field",
                        field.key()
                    ))
                    .with_span(node.literal())
                );
                continue;
            }

            fields.push(field);
        }

        errors.finish_with(Self::new(fields))
    }

    /// Iterate in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldName> {
        self.0.iter()
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` for `#[model]` without arguments.
    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<FieldName> for FieldSpec {
    fn from_iter<I: IntoIterator<Item = FieldName>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a FieldSpec {
    type Item = &'a FieldName;
    type IntoIter = std::slice::Iter<'a, FieldName>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Field plus its identifier with any `r#` prefix removed.
fn field_from_node(node: &ArgumentNode) -> darling::Result<(FieldName, String)> {
    match node {
        ArgumentNode::Labeled(label, lit) => {
            let key = lit.value();
            if key.is_empty() {
                return Err(darling::Error::custom(format!(
                    "backing key for `{label}` must not be empty"
                ))
                .with_span(lit));
            }
            Ok((FieldName::keyed(label.to_string(), key), label.unraw().to_string()))
        }
        ArgumentNode::Positional(lit) => {
            let value = lit.value();
            match syn::parse_str::<Ident>(&value) {
                Ok(ident) => Ok((FieldName::verbatim(ident.to_string()), ident.unraw().to_string())),
                Err(_) => Err(darling::Error::custom(format!(
                    "`{value}` is not a valid field identifier; use `name = \"{value}\"`"
                ))
                .with_span(lit))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use quote::quote;

    use super::*;

    fn spec(tokens: proc_macro2::TokenStream) -> darling::Result<FieldSpec> {
        FieldSpec::from_arguments(&ArgumentNode::parse_list(tokens)?, &[])
    }

    #[test]
    fn labeled_fields_keep_keys() {
        let spec = spec(quote! { field1 = "Hello", field2 = "Test" }).unwrap();
        assert_eq!(
            spec,
            FieldSpec::new(vec![
                FieldName::keyed("field1", "Hello"),
                FieldName::keyed("field2", "Test")
            ])
        );
    }

    #[test]
    fn positional_field_is_verbatim() {
        let spec = spec(quote! { "title" }).unwrap();
        let field = spec.iter().next().unwrap();
        assert_eq!(field.ident(), "title");
        assert_eq!(field.key(), "title");
    }

    #[test]
    fn empty_arguments_give_empty_spec() {
        let spec = spec(quote! {}).unwrap();
        assert!(spec.is_empty());
        assert_eq!(spec.len(), 0);
    }

    #[test]
    fn positional_must_be_identifier() {
        assert!(spec(quote! { "first name" }).is_err());
        assert!(spec(quote! { "1st" }).is_err());
        assert!(spec(quote! { "" }).is_err());
    }

    #[test]
    fn positional_keyword_rejected() {
        assert!(spec(quote! { "type" }).is_err());
    }

    #[test]
    fn labeled_key_may_be_anything_non_empty() {
        let spec = spec(quote! { first_name = "first name" }).unwrap();
        assert_eq!(spec.iter().next().unwrap().key(), "first name");
    }

    #[test]
    fn empty_key_rejected() {
        assert!(spec(quote! { title = "" }).is_err());
    }

    #[test]
    fn duplicate_ident_rejected() {
        assert!(spec(quote! { title = "A", title = "B" }).is_err());
        assert!(spec(quote! { "title", title = "Title" }).is_err());
    }

    #[test]
    fn identity_name_rejected() {
        assert!(spec(quote! { id = "identifier" }).is_err());
        assert!(spec(quote! { "id" }).is_err());
    }

    #[test]
    fn errors_reported_together() {
        let err = spec(quote! { id = "x", "bad name", a = "", a = "A", a = "B" }).unwrap_err();
        assert_eq!(err.len(), 4);
    }

    #[test]
    fn raw_identity_name_rejected() {
        assert!(spec(quote! { r#id = "x" }).is_err());
        assert!(spec(quote! { "r#id" }).is_err());
    }

    #[test]
    fn raw_and_plain_duplicates_rejected() {
        let err = spec(quote! { r#title = "A", title = "B" }).unwrap_err();
        assert_eq!(err.len(), 1);
        assert!(spec(quote! { r#type = "Type", "r#type" }).is_err());
    }

    #[test]
    fn raw_identifier_alone_accepted() {
        let spec = spec(quote! { r#type = "type" }).unwrap();
        assert_eq!(spec.iter().next().unwrap().ident(), "r#type");
    }

    #[test]
    fn duplicate_key_rejected() {
        let err = spec(quote! { a = "K", b = "K" }).unwrap_err();
        assert_eq!(err.len(), 1);
        assert!(spec(quote! { "title", heading = "title" }).is_err());
    }

    #[test]
    fn clash_with_own_field_rejected() {
        let nodes = ArgumentNode::parse_list(quote! { title = "T", body = "B" }).unwrap();
        let own: Vec<Ident> = vec![syn::parse_quote!(title), syn::parse_quote!(r#views)];
        let err = FieldSpec::from_arguments(&nodes, &own).unwrap_err();
        assert_eq!(err.len(), 1);

        let nodes = ArgumentNode::parse_list(quote! { views = "Views" }).unwrap();
        assert!(FieldSpec::from_arguments(&nodes, &own).is_err());

        let nodes = ArgumentNode::parse_list(quote! { body = "B" }).unwrap();
        assert!(FieldSpec::from_arguments(&nodes, &own).is_ok());
    }
}
