// SPDX-FileCopyrightText: 2025-2026 Blueprint Contributors
// SPDX-License-Identifier: MIT

//! Declaration synthesizer.
//!
//! [`synthesize`] is a pure function from an [`ExpansionRequest`] to the
//! ordered member declarations of the model:
//!
//! ```text
//! Schema      pub const SCHEMA: &'static str = "<name>";
//! Identity    pub id: Option<Uuid>
//! Field × N   pub <field>: String          (argument order)
//! Constructor pub fn new() -> Self
//! Constructor pub fn with_fields(id, <field>...) -> Self
//! ```
//!
//! A request for anything but a class-like item fails before the fields
//! are looked at.

use thiserror::Error;

use super::{
    decl::{ConstructorDecl, Declaration, FieldDecl, IdentityField, SchemaConst},
    fields::FieldSpec,
    target::TargetKind
};

/// Everything the synthesizer needs for one `#[model]` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpansionRequest {
    pub kind:   TargetKind,
    pub name:   String,
    pub fields: FieldSpec
}

/// The single way an expansion can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExpansionError {
    #[error("#[model] can only be applied to structs with named fields, found {found}")]
    InvalidTarget { found: &'static str }
}

/// Ordered declarations of a successful expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    declarations: Vec<Declaration>
}

impl Expansion {
    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Source text of every declaration, in order.
    #[cfg(test)]
    pub fn render(&self) -> Vec<String> {
        self.declarations.iter().map(ToString::to_string).collect()
    }

    /// Schema constant value.
    pub fn schema(&self) -> &str {
        self.declarations
            .iter()
            .find_map(|decl| match decl {
                Declaration::Schema(schema) => Some(schema.value()),
                _ => None
            })
            .unwrap_or_default()
    }

    /// Generated string fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldDecl> {
        self.declarations.iter().filter_map(Declaration::as_field)
    }

    /// Both constructors, empty one first.
    pub fn constructors(&self) -> impl Iterator<Item = &ConstructorDecl> {
        self.declarations
            .iter()
            .filter_map(Declaration::as_constructor)
    }
}

pub type ExpansionResult = Result<Expansion, ExpansionError>;

/// Synthesize the member declarations for `request`.
///
/// # Errors
///
/// [`ExpansionError::InvalidTarget`] when the request is not for a
/// class-like item. No declarations are produced in that case.
pub fn synthesize(request: &ExpansionRequest) -> ExpansionResult {
    if let TargetKind::Other {
        found
    } = request.kind
    {
        return Err(ExpansionError::InvalidTarget {
            found
        });
    }

    let mut declarations = Vec::with_capacity(request.fields.len() + 4);
    declarations.push(Declaration::Schema(SchemaConst::new(&request.name)));
    declarations.push(Declaration::Identity(IdentityField));
    declarations.extend(
        request
            .fields
            .iter()
            .cloned()
            .map(|field| Declaration::Field(FieldDecl::new(field)))
    );
    declarations.push(Declaration::Constructor(ConstructorDecl::empty()));
    declarations.push(Declaration::Constructor(ConstructorDecl::full(
        &request.fields
    )));

    Ok(Expansion {
        declarations
    })
}
