//! Item emission: imports, constant blocks and structs.

use std::collections::HashSet;

use convert_case::{Case, Casing};
use proc_macro2::{Literal, TokenStream};
use quote::{format_ident, quote};
use typegen_model::NumberKind;

use super::super::artifacts::{ConstantArtifact, ConstantValue, ImportRecord, ObjectArtifact, ObjectField};
use super::super::type_expr::{Primitive, TypeExpr};
use super::tags::parse_json_tag;
use super::types::emit_type;
use super::{OutputAssembler, RenderError, ident, lex};

impl<'a> OutputAssembler<'a> {
    /// Emit `use <path> as <alias>;`.
    pub(super) fn emit_import(&self, import: &ImportRecord) -> Result<TokenStream, RenderError> {
        let path = lex(&import.path)?;
        let alias = ident(&import.alias, "import alias")?;
        Ok(quote! { use #path as #alias; })
    }

    /// Emit the type alias and member constants of a constant block.
    pub(super) fn emit_constant(&self, constant: &ConstantArtifact) -> Result<TokenStream, RenderError> {
        let name = ident(&constant.name, "constant block")?;
        let base = format_ident!("{}", constant.base.rust_name());
        // `String` cannot be built in a const context, so string members are `&str`.
        let member_ty = match constant.base {
            Primitive::String => quote! { &str },
            _ => quote! { #name },
        };

        let mut members = Vec::with_capacity(constant.entries.len());
        for entry in &constant.entries {
            let member = ident(&entry.name, "constant")?;
            let value = match (&entry.value, constant.base) {
                (ConstantValue::Str(s), Primitive::String) => quote! { #s },
                (ConstantValue::Number(n), Primitive::Number(kind)) => number_literal(n, kind, &entry.name)?,
                (value, base) => {
                    return Err(RenderError::NumericLiteral {
                        constant: entry.name.clone(),
                        value: value.to_string(),
                        base: base.rust_name(),
                    });
                }
            };
            members.push(quote! {
                #[allow(non_upper_case_globals)]
                pub const #member: #member_ty = #value;
            });
        }

        Ok(quote! {
            pub type #name = #base;
            #(#members)*
        })
    }

    /// Emit a struct with one public field per artifact field.
    pub(super) fn emit_object(
        &self,
        object: &ObjectArtifact,
        derive_attr: &TokenStream,
    ) -> Result<TokenStream, RenderError> {
        let name = ident(&object.name, "struct")?;
        let mut used = HashSet::new();

        let mut fields = Vec::with_capacity(object.fields.len());
        for field in &object.fields {
            let field_name = unique_field_name(&field.name, &mut used);
            let fname = ident(&field_name, &format!("field {:?} of {}", field.name, object.name))?;
            let fty = emit_type(&field.ty)?;
            let attrs = if self.uses_serde() {
                serde_attrs(field, &field_name)
            } else {
                quote! {}
            };
            fields.push(quote! { #attrs pub #fname: #fty });
        }

        Ok(quote! {
            #derive_attr
            pub struct #name {
                #(#fields),*
            }
        })
    }

    /// Emit the shared `#[derive(...)]` attribute.
    pub(super) fn emit_derives(&self) -> Result<TokenStream, RenderError> {
        if self.config.derives.is_empty() {
            return Ok(quote! {});
        }
        let derives = self
            .config
            .derives
            .iter()
            .map(|d| {
                syn::parse_str::<syn::Path>(d).map_err(|e| RenderError::InvalidDerive {
                    derive: d.clone(),
                    message: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(quote! { #[derive(#(#derives),*)] })
    }

    fn uses_serde(&self) -> bool {
        self.config
            .derives
            .iter()
            .any(|d| d.ends_with("Serialize") || d.ends_with("Deserialize"))
    }
}

/// Snake-case field identifier, made unique within one struct with a numeric suffix.
fn unique_field_name(raw: &str, used: &mut HashSet<String>) -> String {
    let mut base = raw.to_case(Case::Snake);
    if base.is_empty() {
        base = raw.to_string();
    }
    let mut candidate = base.clone();
    let mut n = 2;
    while used.contains(&candidate) {
        candidate = format!("{}_{}", base, n);
        n += 1;
    }
    used.insert(candidate.clone());
    candidate
}

/// `#[serde(...)]` attribute for a field, derived from its raw tag.
fn serde_attrs(field: &ObjectField, field_name: &str) -> TokenStream {
    let tag = parse_json_tag(&field.tag);
    if tag.skip {
        return quote! { #[serde(skip)] };
    }

    let mut args = Vec::new();
    let wire = tag.name.unwrap_or(&field.name);
    if wire != field_name {
        args.push(quote! { rename = #wire });
    }
    if tag.omit_empty {
        args.push(quote! { default });
        if let Some(predicate) = empty_predicate(&field.ty) {
            args.push(quote! { skip_serializing_if = #predicate });
        }
    }

    if args.is_empty() {
        quote! {}
    } else {
        quote! { #[serde(#(#args),*)] }
    }
}

fn empty_predicate(ty: &TypeExpr) -> Option<&'static str> {
    match ty {
        TypeExpr::Option(_) => Some("Option::is_none"),
        TypeExpr::Vec(_) => Some("Vec::is_empty"),
        TypeExpr::Map(..) => Some("std::collections::HashMap::is_empty"),
        _ => None,
    }
}

/// Numeric literal for a constant of base `kind`, rejecting values the base cannot hold.
fn number_literal(value: &serde_json::Number, kind: NumberKind, constant: &str) -> Result<TokenStream, RenderError> {
    let invalid = || RenderError::NumericLiteral {
        constant: constant.to_string(),
        value: value.to_string(),
        base: kind.rust_name(),
    };

    if kind.is_float() {
        let v = value.as_f64().ok_or_else(invalid)?;
        // An `f32` literal that rounds to infinity is rejected by rustc (`overflowing_literals`).
        if kind == NumberKind::Float32 && v.abs() > f64::from(f32::MAX) {
            return Err(invalid());
        }
        let lit = Literal::f64_unsuffixed(v.abs());
        return Ok(if v.is_sign_negative() {
            quote! { -#lit }
        } else {
            quote! { #lit }
        });
    }

    let v: i128 = if let Some(u) = value.as_u64() {
        i128::from(u)
    } else if let Some(i) = value.as_i64() {
        i128::from(i)
    } else {
        return Err(invalid());
    };
    let (min, max) = int_bounds(kind).ok_or_else(invalid)?;
    if v < min || v > max {
        return Err(invalid());
    }

    let lit = Literal::u128_unsuffixed(v.unsigned_abs());
    Ok(if v < 0 {
        quote! { -#lit }
    } else {
        quote! { #lit }
    })
}

/// Inclusive range of an integer kind; `None` for float kinds.
fn int_bounds(kind: NumberKind) -> Option<(i128, i128)> {
    let bounds = match kind {
        NumberKind::Int8 => (i8::MIN.into(), i8::MAX.into()),
        NumberKind::Int16 => (i16::MIN.into(), i16::MAX.into()),
        NumberKind::Int32 => (i32::MIN.into(), i32::MAX.into()),
        NumberKind::Int | NumberKind::Int64 => (i64::MIN.into(), i64::MAX.into()),
        NumberKind::Uint8 => (0, u8::MAX.into()),
        NumberKind::Uint16 => (0, u16::MAX.into()),
        NumberKind::Uint32 => (0, u32::MAX.into()),
        NumberKind::Uint | NumberKind::Uint64 | NumberKind::Uintptr => (0, u64::MAX.into()),
        NumberKind::Float32 | NumberKind::Float64 => return None,
    };
    Some(bounds)
}
