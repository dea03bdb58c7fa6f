// SPDX-FileCopyrightText: 2025-2026 Blueprint Contributors
// SPDX-License-Identifier: MIT

//! Token generation for a successful expansion.
//!
//! # Generated Code
//!
//! For `#[model(title = "Title")] pub struct Post { pub views: u32 }`:
//!
//! ```rust,ignore
//! pub struct Post {
//!     /// Identity of this model, `None` until assigned.
//!     pub id: Option<Uuid>,
//!     /// Backing key: `Title`.
//!     pub title: String,
//!     pub views: u32,
//! }
//!
//! impl Post {
//!     pub const SCHEMA: &'static str = "Post";
//!     pub fn new() -> Self { /* every field defaulted */ }
//!     pub fn with_fields(id: Option<Uuid>, title: String) -> Self { /* ... */ }
//! }
//!
//! impl blueprint_core::Model for Post { /* ... */ }
//! ```
//!
//! Fields declared by hand keep their position after the generated ones
//! and are filled with `Default::default()` by both constructors.

use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote};
use syn::{
    Field, Fields, FieldsNamed, Ident, ItemStruct, Visibility, ext::IdentExt, punctuated::Punctuated,
    token::Comma
};

use super::{
    decl::{ConstructorDecl, ConstructorKind, Declaration, FieldDecl, IDENTITY_FIELD, Param},
    synth::Expansion
};

/// Rewrite `item` with the generated fields and append its impls.
pub fn generate(mut item: ItemStruct, expansion: &Expansion) -> TokenStream {
    let own_fields = take_named_fields(&mut item);
    let own_idents: Vec<Ident> = own_fields.iter().filter_map(|f| f.ident.clone()).collect();

    let mut named: Punctuated<Field, Comma> = expansion
        .declarations()
        .iter()
        .filter_map(|decl| field_tokens(decl, &item.vis))
        .collect();
    named.extend(own_fields);

    item.fields = Fields::Named(FieldsNamed {
        brace_token: Default::default(),
        named
    });
    item.semi_token = None;

    let inherent = inherent_impl(&item, expansion, &own_idents);
    let model = model_impl(&item, expansion);

    quote! {
        #item
        #inherent
        #model
    }
}

/// Remove and return the hand-written fields, leaving the struct empty.
fn take_named_fields(item: &mut ItemStruct) -> Punctuated<Field, Comma> {
    match std::mem::replace(&mut item.fields, Fields::Unit) {
        Fields::Named(named) => named.named,
        _ => Punctuated::new()
    }
}

fn identity_ident() -> Ident {
    Ident::new(IDENTITY_FIELD, Span::call_site())
}

fn field_ident(decl: &FieldDecl) -> Ident {
    format_ident!("{}", decl.field().ident())
}

fn field_tokens(decl: &Declaration, vis: &Visibility) -> Option<Field> {
    match decl {
        Declaration::Identity(_) => {
            let id = identity_ident();
            Some(syn::parse_quote! {
                /// Identity of this model, `None` until assigned.
                #vis #id: ::core::option::Option<::blueprint_core::Uuid>
            })
        }
        Declaration::Field(field) => {
            let ident = field_ident(field);
            let doc = format!("Backing key: `{}`.", field.field().key());
            Some(syn::parse_quote! {
                #[doc = #doc]
                #vis #ident: ::std::string::String
            })
        }
        Declaration::Schema(_) | Declaration::Constructor(_) => None
    }
}

fn inherent_impl(item: &ItemStruct, expansion: &Expansion, own: &[Ident]) -> TokenStream {
    let name = &item.ident;
    let (impl_generics, ty_generics, where_clause) = item.generics.split_for_impl();
    let schema = expansion.schema();
    let schema_doc = format!("Schema name of `{name}`.");

    let constructors = expansion
        .constructors()
        .map(|ctor| constructor_tokens(ctor, expansion, own));

    quote! {
        #[allow(clippy::new_without_default)]
        impl #impl_generics #name #ty_generics #where_clause {
            #[doc = #schema_doc]
            pub const SCHEMA: &'static str = #schema;

            #(#constructors)*
        }
    }
}

/// Struct literal for one constructor.
///
/// Generated members assigned by the constructor take their parameter;
/// all others start from their default.
fn constructor_tokens(ctor: &ConstructorDecl, expansion: &Expansion, own: &[Ident]) -> TokenStream {
    let fn_name = format_ident!("{}", ctor.name());
    let assigned: Vec<&str> = ctor.assignments().map(|a| a.target).collect();

    let params = ctor.params().iter().map(|param| {
        let ident = format_ident!("{}", param.name());
        match param {
            Param::Identity => quote! { #ident: ::core::option::Option<::blueprint_core::Uuid> },
            Param::Field(_) => quote! { #ident: ::std::string::String }
        }
    });

    let identity = identity_ident();
    let identity_init = if assigned.contains(&IDENTITY_FIELD) {
        quote! { #identity }
    } else {
        quote! { #identity: ::core::option::Option::None }
    };

    let field_inits = expansion.fields().map(|field| {
        let ident = field_ident(field);
        if assigned.contains(&field.field().ident()) {
            quote! { #ident }
        } else {
            quote! { #ident: ::std::string::String::new() }
        }
    });

    let doc = match ctor.kind() {
        ConstructorKind::Empty => "Create an instance with every field at its default.",
        ConstructorKind::Full => "Create an instance from an identity and every generated field."
    };

    quote! {
        #[doc = #doc]
        #[must_use]
        #[allow(clippy::too_many_arguments)]
        pub fn #fn_name(#(#params),*) -> Self {
            Self {
                #identity_init,
                #(#field_inits,)*
                #(#own: ::core::default::Default::default(),)*
            }
        }
    }
}

fn model_impl(item: &ItemStruct, expansion: &Expansion) -> TokenStream {
    let name = &item.ident;
    let (impl_generics, ty_generics, where_clause) = item.generics.split_for_impl();
    let identity = identity_ident();

    let idents: Vec<Ident> = expansion.fields().map(field_ident).collect();
    let names: Vec<String> = idents.iter().map(|i| i.unraw().to_string()).collect();
    let keys: Vec<&str> = expansion.fields().map(|f| f.field().key()).collect();

    quote! {
        impl #impl_generics ::blueprint_core::Model for #name #ty_generics #where_clause {
            const SCHEMA: &'static str = Self::SCHEMA;
            const FIELDS: &'static [::blueprint_core::FieldKey] = &[
                #(::blueprint_core::FieldKey::new(#names, #keys)),*
            ];

            fn id(&self) -> ::core::option::Option<::blueprint_core::Uuid> {
                self.#identity
            }

            fn set_id(&mut self, id: ::core::option::Option<::blueprint_core::Uuid>) {
                self.#identity = id;
            }

            fn value(&self, key: &str) -> ::core::option::Option<&str> {
                match key {
                    #(#keys => ::core::option::Option::Some(self.#idents.as_str()),)*
                    _ => ::core::option::Option::None
                }
            }

            fn value_mut(&mut self, key: &str) -> ::core::option::Option<&mut ::std::string::String> {
                match key {
                    #(#keys => ::core::option::Option::Some(&mut self.#idents),)*
                    _ => ::core::option::Option::None
                }
            }
        }
    }
}
