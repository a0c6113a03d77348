//! Type emission for artifact to Rust code generation
//!
//! This module turns converted [`TypeExpr`]s into Rust type tokens.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use super::super::type_expr::TypeExpr;
use super::{RenderError, ident, lex};

/// Emit a type as Rust tokens.
pub(super) fn emit_type(ty: &TypeExpr) -> Result<TokenStream, RenderError> {
    Ok(match ty {
        TypeExpr::Primitive(p) => {
            let n = format_ident!("{}", p.rust_name());
            quote! { #n }
        }
        TypeExpr::Struct(name) | TypeExpr::Alias(name) => {
            let n = ident(name, "type reference")?;
            quote! { #n }
        }
        TypeExpr::External { alias, name } => {
            let n = lex(name)?;
            match alias {
                Some(alias) => {
                    let a = ident(alias, "import alias")?;
                    quote! { #a::#n }
                }
                None => n,
            }
        }
        TypeExpr::Vec(elem) => {
            let e = emit_type(elem)?;
            quote! { Vec<#e> }
        }
        TypeExpr::Map(k, v) => {
            let kk = emit_type(k)?;
            let vv = emit_type(v)?;
            quote! { std::collections::HashMap<#kk, #vv> }
        }
        TypeExpr::Option(inner) => {
            let i = emit_type(inner)?;
            quote! { Option<#i> }
        }
        TypeExpr::Boxed(inner) => {
            let i = emit_type(inner)?;
            quote! { Box<#i> }
        }
        TypeExpr::DateTime => quote! { DateTime<Utc> },
        TypeExpr::Any => quote! { serde_json::Value },
    })
}
