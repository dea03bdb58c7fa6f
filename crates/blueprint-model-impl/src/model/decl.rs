// SPDX-FileCopyrightText: 2025-2026 Blueprint Contributors
// SPDX-License-Identifier: MIT

//! Structured member declarations.
//!
//! Every member produced by the synthesizer is one of the value types in
//! this module. They are rendered to Rust tokens by the emitter and to
//! source text by their [`Display`](std::fmt::Display) impls.
//!
//! Constructor bodies are never stored. [`ConstructorDecl::assignments`]
//! derives them from the parameter list, so a parameter can only ever be
//! assigned to the field of the same name, in parameter order.

use std::fmt;

use super::fields::{FieldName, FieldSpec};

/// Name of the identity field and of the identity constructor parameter.
pub const IDENTITY_FIELD: &str = "id";

/// Name of the associated schema constant.
pub const SCHEMA_CONST: &str = "SCHEMA";

/// Name of the constructor without parameters.
pub const EMPTY_CONSTRUCTOR: &str = "new";

/// Name of the constructor taking every field.
pub const FULL_CONSTRUCTOR: &str = "with_fields";

/// `pub const SCHEMA: &'static str = "<name>";`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaConst {
    value: String
}

impl SchemaConst {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into()
        }
    }

    /// Literal value of the constant.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// `pub id: Option<Uuid>`, absent until assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentityField;

/// A generated `String` field with its backing key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    field: FieldName
}

impl FieldDecl {
    pub fn new(field: FieldName) -> Self {
        Self {
            field
        }
    }

    pub fn field(&self) -> &FieldName {
        &self.field
    }
}

/// Constructor parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param {
    /// `id: Option<Uuid>`.
    Identity,

    /// `<ident>: String`.
    Field(FieldName)
}

impl Param {
    /// Parameter name, which is also the name of the assigned field.
    pub fn name(&self) -> &str {
        match self {
            Self::Identity => IDENTITY_FIELD,
            Self::Field(field) => field.ident()
        }
    }
}

/// `self.<target> = <source>` inside a constructor body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment<'a> {
    pub target: &'a str,
    pub source: &'a str
}

/// Which of the two constructors a [`ConstructorDecl`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructorKind {
    /// `new()`: no parameters, nothing assigned.
    Empty,

    /// `with_fields(id, ...)`: identity plus every field.
    Full
}

/// A generated constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorDecl {
    kind:   ConstructorKind,
    params: Vec<Param>
}

impl ConstructorDecl {
    /// Constructor without parameters.
    pub fn empty() -> Self {
        Self {
            kind:   ConstructorKind::Empty,
            params: Vec::new()
        }
    }

    /// Constructor taking the identity followed by every field in order.
    pub fn full(fields: &FieldSpec) -> Self {
        let params = std::iter::once(Param::Identity)
            .chain(fields.iter().cloned().map(Param::Field))
            .collect();

        Self {
            kind: ConstructorKind::Full,
            params
        }
    }

    pub fn kind(&self) -> ConstructorKind {
        self.kind
    }

    /// Method name of the constructor.
    pub fn name(&self) -> &'static str {
        match self.kind {
            ConstructorKind::Empty => EMPTY_CONSTRUCTOR,
            ConstructorKind::Full => FULL_CONSTRUCTOR
        }
    }

    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Body of the constructor, one assignment per parameter.
    pub fn assignments(&self) -> impl Iterator<Item = Assignment<'_>> {
        self.params.iter().map(|param| Assignment {
            target: param.name(),
            source: param.name()
        })
    }
}

/// One synthesized member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    Schema(SchemaConst),
    Identity(IdentityField),
    Field(FieldDecl),
    Constructor(ConstructorDecl)
}

impl Declaration {
    pub fn as_field(&self) -> Option<&FieldDecl> {
        match self {
            Self::Field(decl) => Some(decl),
            _ => None
        }
    }

    pub fn as_constructor(&self) -> Option<&ConstructorDecl> {
        match self {
            Self::Constructor(decl) => Some(decl),
            _ => None
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identity => write!(f, "{IDENTITY_FIELD}: Option<Uuid>"),
            Self::Field(field) => write!(f, "{}: String", field.ident())
        }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Schema(decl) => {
                write!(f, "pub const {SCHEMA_CONST}: &'static str = {:?};", decl.value())
            }
            Self::Identity(IdentityField) => write!(f, "pub {IDENTITY_FIELD}: Option<Uuid>"),
            Self::Field(decl) => write!(
                f,
                "#[key = {:?}] pub {}: String",
                decl.field().key(),
                decl.field().ident()
            ),
            Self::Constructor(decl) => {
                write!(f, "pub fn {}(", decl.name())?;
                for (i, param) in decl.params().iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{param}")?;
                }
                f.write_str(") -> Self {")?;
                for assignment in decl.assignments() {
                    write!(f, " self.{} = {};", assignment.target, assignment.source)?;
                }
                f.write_str(" }")
            }
        }
    }
}
