// SPDX-FileCopyrightText: 2025-2026 Blueprint Contributors
// SPDX-License-Identifier: MIT

//! `#[model]` attribute implementation.
//!
//! # Architecture
//!
//! ```text
//! model.rs (orchestrator)
//! │
//! ├── target.rs  → Class / Other classification of the annotated item
//! ├── args.rs    → ArgumentNode parsing of the attribute arguments
//! ├── fields.rs  → FieldSpec construction and validation
//! ├── synth.rs   → synthesize(): ExpansionRequest → declarations
//! ├── decl.rs    → Declaration value types and their text rendering
//! └── emit.rs    → Declarations → struct fields, inherent impl, Model impl
//! ```
//!
//! # Flow
//!
//! 1. The item is classified. A non-class item is rejected before the
//!    attribute arguments are read, so it yields exactly one diagnostic.
//! 2. Arguments are parsed into a [`FieldSpec`](fields::FieldSpec).
//! 3. [`synthesize`](synth::synthesize) builds the declarations.
//! 4. The emitter rewrites the struct and appends its impls.
//!
//! On failure the item is emitted unchanged next to the diagnostics.

mod args;
mod decl;
mod emit;
mod fields;
mod synth;
mod target;

use proc_macro2::{Span, TokenStream};
use quote::{ToTokens, quote};
use syn::Item;

use self::{
    args::ArgumentNode,
    fields::FieldSpec,
    synth::{ExpansionError, ExpansionRequest, synthesize},
    target::{ModelTarget, TargetKind}
};

/// Main entry point for the `#[model]` attribute.
pub fn expand(attr: proc_macro::TokenStream, item: proc_macro::TokenStream) -> proc_macro::TokenStream {
    generate(attr.into(), item.into()).into()
}

fn generate(attr: TokenStream, item: TokenStream) -> TokenStream {
    let item: Item = match syn::parse2(item) {
        Ok(item) => item,
        Err(err) => return err.to_compile_error()
    };
    let target = ModelTarget::from_item(item);

    let request = match build_request(attr, &target) {
        Ok(request) => request,
        Err(err) => return reject(err.write_errors(), &target)
    };

    match target {
        ModelTarget::Class(item) => match synthesize(&request) {
            Ok(expansion) => emit::generate(item, &expansion),
            Err(err) => reject(invalid_target(err), &item)
        },
        ModelTarget::Other(item) => {
            // Nothing can be expanded into a non-struct item; only the
            // diagnostic from the synthesizer is added.
            let diagnostic = synthesize(&request).err().map(invalid_target);
            reject(diagnostic, &item)
        }
    }
}

/// Assemble the synthesizer input.
///
/// Arguments of a non-class item are not parsed: the target error is the
/// only one reported for it.
fn build_request(attr: TokenStream, target: &ModelTarget) -> darling::Result<ExpansionRequest> {
    let kind = target.kind();
    let fields = match kind {
        TargetKind::Class => {
            FieldSpec::from_arguments(&ArgumentNode::parse_list(attr)?, &target.own_fields())?
        }
        TargetKind::Other {
            ..
        } => FieldSpec::default()
    };

    Ok(ExpansionRequest {
        kind,
        name: target.name(),
        fields
    })
}

fn invalid_target(err: ExpansionError) -> TokenStream {
    syn::Error::new(Span::call_site(), err).to_compile_error()
}

/// Diagnostics followed by the unchanged item.
fn reject(diagnostics: impl ToTokens, item: &impl ToTokens) -> TokenStream {
    quote! {
        #diagnostics
        #item
    }
}
