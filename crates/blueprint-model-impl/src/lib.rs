// SPDX-FileCopyrightText: 2025-2026 Blueprint Contributors
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! # Attribute Quick Reference
//!
//! ```rust,ignore
//! #[model(
//!     title = "Title",   // field `title`, backing key "Title"
//!     "body"             // field `body`, backing key "body"
//! )]
//! pub struct Post {
//!     pub views: u32,    // hand-written fields are kept
//! }
//! ```
//!
//! # Generated Code Overview
//!
//! | Member | Purpose |
//! |--------|---------|
//! | `Post::SCHEMA` | Schema name, the struct name as written |
//! | `id: Option<Uuid>` | Identity, `None` until assigned |
//! | one `String` per argument | Generated fields, in argument order |
//! | `Post::new()` | Every field at its default |
//! | `Post::with_fields(id, title, body)` | Identity then every generated field |
//! | `impl Model for Post` | Key-based access through `blueprint_core::Model` |

mod model;
mod stringify;

use proc_macro::TokenStream;

/// Attribute turning a struct into a model.
///
/// # Overview
///
/// Each argument adds a `String` field. A labeled argument `name = "Key"`
/// names the field `name` and stores it under `"Key"`; a bare string
/// literal is used for both. The struct additionally receives an optional
/// `id` identity, a `SCHEMA` constant, two constructors and an
/// implementation of `blueprint_core::Model`.
///
/// # Example
///
/// ```rust,ignore
/// use blueprint_model::model;
///
/// #[model(field1 = "Hello", field2 = "Test", field3 = "Again")]
/// pub struct Test {}
///
/// let test = Test::with_fields(None, "a".into(), "b".into(), "c".into());
/// assert_eq!(Test::SCHEMA, "Test");
/// assert_eq!(test.field3, "c");
/// ```
///
/// # Errors
///
/// Compilation fails with a diagnostic when:
///
/// - the attribute is placed on anything but a struct with named fields
/// - an argument is not `name = "key"` or `"name"`
/// - a bare literal is not a valid identifier
/// - a backing key is empty
/// - a field name repeats or is `id`
#[proc_macro_attribute]
pub fn model(attr: TokenStream, item: TokenStream) -> TokenStream {
    model::expand(attr, item)
}

/// Pair an expression with its source text.
///
/// # Example
///
/// ```rust,ignore
/// use blueprint_model::stringify_expr;
///
/// let (a, b) = (17, 25);
/// let (value, source) = stringify_expr!(a + b);
/// assert_eq!(value, 42);
/// assert_eq!(source, "a + b");
/// ```
#[proc_macro]
pub fn stringify_expr(input: TokenStream) -> TokenStream {
    stringify::expand(input)
}
