// SPDX-FileCopyrightText: 2025-2026 Blueprint Contributors
// SPDX-License-Identifier: MIT

//! Attribute argument nodes.
//!
//! The argument list of `#[model(...)]` is read into a flat sequence of
//! [`ArgumentNode`]s before any field is built. Only two shapes are
//! accepted:
//!
//! ```text
//! #[model(title = "Title", "body")]
//!         ^^^^^^^^^^^^^^^  ^^^^^^
//!         Labeled          Positional
//! ```
//!
//! Everything else (bare paths, nested lists, non-string literals) is
//! reported with a span pointing at the offending argument.

use darling::ast::NestedMeta;
use proc_macro2::TokenStream;
use syn::{Expr, ExprLit, Ident, Lit, LitStr, Meta};

/// One argument of the `#[model]` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentNode {
    /// `ident = "literal"`.
    Labeled(Ident, LitStr),

    /// `"literal"`.
    Positional(LitStr)
}

impl ArgumentNode {
    /// Parse the full argument list of the attribute.
    ///
    /// An empty token stream yields an empty list. Errors from individual
    /// arguments are accumulated so every bad argument is reported at once.
    ///
    /// # Errors
    ///
    /// - The tokens are not a comma-separated meta list
    /// - Any argument has an unsupported shape
    pub fn parse_list(tokens: TokenStream) -> darling::Result<Vec<Self>> {
        let metas = NestedMeta::parse_meta_list(tokens)?;
        let mut errors = darling::Error::accumulator();

        let nodes: Vec<Self> = metas
            .iter()
            .filter_map(|meta| errors.handle(Self::from_nested_meta(meta)))
            .collect();

        errors.finish_with(nodes)
    }

    /// Convert a single darling meta item.
    ///
    /// # Errors
    ///
    /// Returns a spanned error for anything other than `ident = "str"` or
    /// `"str"`.
    pub fn from_nested_meta(meta: &NestedMeta) -> darling::Result<Self> {
        match meta {
            NestedMeta::Lit(Lit::Str(lit)) => Ok(Self::Positional(lit.clone())),
            NestedMeta::Lit(other) => Err(darling::Error::unexpected_lit_type(other)),
            NestedMeta::Meta(Meta::NameValue(nv)) => {
                let label = nv.path.get_ident().ok_or_else(|| {
                    darling::Error::custom("field label must be a single identifier")
                        .with_span(&nv.path)
                })?;
                match &nv.value {
                    Expr::Lit(ExprLit {
                        lit: Lit::Str(lit),
                        ..
                    }) => Ok(Self::Labeled(label.clone(), lit.clone())),
                    Expr::Lit(ExprLit {
                        lit, ..
                    }) => Err(darling::Error::unexpected_lit_type(lit)),
                    other => Err(darling::Error::custom(format!(
                        "expected a string literal for `{label}`"
                    ))
                    .with_span(other))
                }
            }
            NestedMeta::Meta(Meta::Path(path)) => Err(darling::Error::custom(
                "expected `name = \"key\"` or a string literal"
            )
            .with_span(path)),
            NestedMeta::Meta(Meta::List(list)) => {
                Err(darling::Error::unsupported_format("list").with_span(list))
            }
        }
    }

    /// Backing-key literal of the argument.
    pub fn literal(&self) -> &LitStr {
        match self {
            Self::Labeled(_, lit) | Self::Positional(lit) => lit
        }
    }
}
