//! Render sorted artifacts into formatted Rust source.
//!
//! This module defines [`OutputAssembler`] and wires together the focused submodules that turn artifacts into
//! tokens. Rendering order is fixed: the date/time import, external imports, constant blocks, then structs. Each
//! group arrives already sorted from [`Artifacts`], so the output is a pure function of the allocated names.
//!
//! ## Notes
//! - Emission produces a Rust syntax tree (`syn`) and formats it via `prettyplease`.
//! - Names coming from the model are validated before they become [`Ident`]s; `proc_macro2` panics on invalid
//!   identifiers, so every conversion goes through [`ident`].
//! - Text supplied by override hooks is lexed, not parsed. Anything that lexes but is not a valid type surfaces as
//!   a format error when the file is parsed.
//!
//! ## See also
//! - [`items`]: import, constant and struct emission
//! - [`types`]: type expression emission
//! - [`tags`]: serialization tag parsing

mod errors;
mod items;
mod tags;
mod types;

pub use errors::RenderError;
pub use tags::{JsonTag, lookup_tag, parse_json_tag};

use proc_macro2::{Ident, Span, TokenStream};
use quote::quote;
use typegen_core::lang::rust_keywords;

use super::artifacts::Artifacts;
use super::config::EmitConfig;
use super::errors::GenerationError;
use crate::version::TYPEGEN_VERSION;

/// Turns the sorted artifacts of a pass into one formatted Rust file.
pub struct OutputAssembler<'a> {
    config: &'a EmitConfig,
}

impl<'a> OutputAssembler<'a> {
    pub fn new(config: &'a EmitConfig) -> Self {
        Self { config }
    }

    /// Render, parse and format the artifacts.
    #[tracing::instrument(skip_all, fields(
        objects = artifacts.objects.len(),
        constants = artifacts.constants.len(),
        imports = artifacts.imports.len(),
    ))]
    pub fn assemble(&self, artifacts: &Artifacts) -> Result<String, GenerationError> {
        let tokens = self.emit_file_tokens(artifacts)?;
        let syntax_tree: syn::File = syn::parse2(tokens).map_err(GenerationError::Format)?;
        let formatted = prettyplease::unparse(&syntax_tree);

        if self.config.header {
            Ok(format!("{}{}", header(), formatted))
        } else {
            Ok(formatted)
        }
    }

    /// Render the artifacts to a token stream (without formatting).
    pub fn emit_file_tokens(&self, artifacts: &Artifacts) -> Result<TokenStream, RenderError> {
        let mut items = Vec::new();

        if artifacts.uses_date_time {
            items.push(quote! { use chrono::{DateTime, Utc}; });
        }
        for import in &artifacts.imports {
            items.push(self.emit_import(import)?);
        }
        for constant in &artifacts.constants {
            items.push(self.emit_constant(constant)?);
        }

        let derive_attr = self.emit_derives()?;
        for object in &artifacts.objects {
            items.push(self.emit_object(object, &derive_attr)?);
        }

        Ok(quote! { #(#items)* })
    }
}

/// Header comment prepended to generated files.
pub fn header() -> String {
    format!("// Code generated by typegen v{}. DO NOT EDIT.\n\n", TYPEGEN_VERSION)
}

/// Build an identifier, escaping keywords as raw identifiers.
///
/// `context` names what the identifier is for and ends up in the error message.
pub(crate) fn ident(name: &str, context: &str) -> Result<Ident, RenderError> {
    let invalid = || RenderError::InvalidIdentifier {
        ident: name.to_string(),
        context: context.to_string(),
    };

    let mut chars = name.chars();
    let valid_start = chars.next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    if !valid_start || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(invalid());
    }

    if !rust_keywords::can_be_raw(name) {
        return Err(invalid());
    }
    if rust_keywords::is_keyword(name) {
        return Ok(Ident::new_raw(name, Span::call_site()));
    }
    Ok(Ident::new(name, Span::call_site()))
}

/// Tokenize externally supplied text such as a hook's type name or import path.
pub(crate) fn lex(text: &str) -> Result<TokenStream, RenderError> {
    text.parse::<TokenStream>().map_err(|e| RenderError::Lex {
        text: text.to_string(),
        message: e.to_string(),
    })
}
