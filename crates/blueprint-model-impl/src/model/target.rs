// SPDX-FileCopyrightText: 2025-2026 Blueprint Contributors
// SPDX-License-Identifier: MIT

//! Classification of the item `#[model]` is attached to.
//!
//! Only structs whose fields can be extended by name count as class-like:
//!
//! | Item | Kind |
//! |------|------|
//! | `struct A { .. }` | Class |
//! | `struct A;` | Class (rewritten to `struct A {}`) |
//! | `struct A(..);` | Other |
//! | `enum`, `union`, `trait`, `fn`, ... | Other |

use proc_macro2::TokenStream;
use quote::ToTokens;
use syn::{Fields, Ident, Item, ItemStruct};

/// Syntactic kind of the annotated item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    /// Struct with named or no fields.
    Class,

    /// Anything else; `found` names the item kind for diagnostics.
    Other {
        found: &'static str
    }
}

impl TargetKind {
    /// Classify a parsed item.
    pub fn of(item: &Item) -> Self {
        let found = match item {
            Item::Struct(item) => match item.fields {
                Fields::Named(_) | Fields::Unit => return Self::Class,
                Fields::Unnamed(_) => "tuple struct"
            },
            Item::Enum(_) => "enum",
            Item::Union(_) => "union",
            Item::Trait(_) => "trait",
            Item::TraitAlias(_) => "trait alias",
            Item::Fn(_) => "function",
            Item::Impl(_) => "impl block",
            Item::Mod(_) => "module",
            Item::Type(_) => "type alias",
            Item::Const(_) => "constant",
            Item::Static(_) => "static",
            Item::Use(_) => "use declaration",
            Item::Macro(_) => "macro invocation",
            Item::ExternCrate(_) => "extern crate",
            Item::ForeignMod(_) => "extern block",
            _ => "item"
        };
        Self::Other {
            found
        }
    }
}

/// The annotated item, split by whether it can become a model.
#[derive(Debug, Clone)]
pub enum ModelTarget {
    Class(ItemStruct),
    Other(Item)
}

impl ModelTarget {
    pub fn from_item(item: Item) -> Self {
        match (TargetKind::of(&item), item) {
            (TargetKind::Class, Item::Struct(item)) => Self::Class(item),
            (_, item) => Self::Other(item)
        }
    }

    pub fn kind(&self) -> TargetKind {
        match self {
            Self::Class(_) => TargetKind::Class,
            Self::Other(item) => TargetKind::of(item)
        }
    }

    /// Names of the fields written by hand on a class target.
    pub fn own_fields(&self) -> Vec<Ident> {
        match self {
            Self::Class(item) => item.fields.iter().filter_map(|f| f.ident.clone()).collect(),
            Self::Other(_) => Vec::new()
        }
    }

    /// Name of the item as written, without normalization.
    pub fn name(&self) -> String {
        match self {
            Self::Class(item) => item.ident.to_string(),
            Self::Other(item) => item_name(item)
        }
    }
}

impl ToTokens for ModelTarget {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        match self {
            Self::Class(item) => item.to_tokens(tokens),
            Self::Other(item) => item.to_tokens(tokens)
        }
    }
}

/// Name of the item as written, empty for items without one.
fn item_name(item: &Item) -> String {
    let ident = match item {
        Item::Struct(item) => Some(&item.ident),
        Item::Enum(item) => Some(&item.ident),
        Item::Union(item) => Some(&item.ident),
        Item::Trait(item) => Some(&item.ident),
        Item::TraitAlias(item) => Some(&item.ident),
        Item::Fn(item) => Some(&item.sig.ident),
        Item::Mod(item) => Some(&item.ident),
        Item::Type(item) => Some(&item.ident),
        Item::Const(item) => Some(&item.ident),
        Item::Static(item) => Some(&item.ident),
        Item::Macro(item) => item.ident.as_ref(),
        _ => None
    };
    ident.map(ToString::to_string).unwrap_or_default()
}
