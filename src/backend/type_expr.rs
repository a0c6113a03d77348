//! Target type expressions
//!
//! These are the resolved Rust types produced by the converter. They map directly to emitted tokens and render
//! as Rust source text through `Display` (used in logs and tests).

use std::fmt;

use typegen_model::NumberKind;

/// Rust primitives a model primitive can map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    String,
    Bool,
    Number(NumberKind),
}

impl Primitive {
    /// Get the Rust type name
    pub fn rust_name(self) -> &'static str {
        match self {
            Primitive::String => "String",
            Primitive::Bool => "bool",
            Primitive::Number(kind) => kind.rust_name(),
        }
    }
}

/// Rust type expression for one converted node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    Primitive(Primitive),
    /// Locally generated struct (an Object artifact).
    Struct(String),
    /// Locally generated type alias (a Constant block).
    Alias(String),
    /// Type supplied by an override hook, optionally behind an import alias.
    External { alias: Option<String>, name: String },
    Vec(Box<TypeExpr>),
    Map(Box<TypeExpr>, Box<TypeExpr>),
    Option(Box<TypeExpr>),
    Boxed(Box<TypeExpr>),
    /// `chrono::DateTime<Utc>`
    DateTime,
    /// `serde_json::Value`
    Any,
}

impl TypeExpr {
    /// Wrap in `Option`, boxing locally generated structs so self-references stay sized.
    pub fn optional(inner: TypeExpr) -> Self {
        match inner {
            TypeExpr::Struct(_) => TypeExpr::Option(Box::new(TypeExpr::Boxed(Box::new(inner)))),
            other => TypeExpr::Option(Box::new(other)),
        }
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Primitive(p) => write!(f, "{}", p.rust_name()),
            TypeExpr::Struct(name) | TypeExpr::Alias(name) => write!(f, "{}", name),
            TypeExpr::External { alias: Some(alias), name } => write!(f, "{}::{}", alias, name),
            TypeExpr::External { alias: None, name } => write!(f, "{}", name),
            TypeExpr::Vec(inner) => write!(f, "Vec<{}>", inner),
            TypeExpr::Map(k, v) => write!(f, "std::collections::HashMap<{}, {}>", k, v),
            TypeExpr::Option(inner) => write!(f, "Option<{}>", inner),
            TypeExpr::Boxed(inner) => write!(f, "Box<{}>", inner),
            TypeExpr::DateTime => write!(f, "DateTime<Utc>"),
            TypeExpr::Any => write!(f, "serde_json::Value"),
        }
    }
}
