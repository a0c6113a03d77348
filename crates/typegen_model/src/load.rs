//! Load a [`TypeMap`] from its JSON interchange form.
//!
//! The interchange form is an object keyed by root declaration name whose values are type nodes tagged by
//! `"kind"`:
//!
//! ```json
//! {
//!   "pkg.Status": { "kind": "string", "name": "pkg.Status", "enum": [{ "key": "StatusOK", "value": "OK" }] },
//!   "pkg.Req": { "kind": "object", "name": "pkg.Req", "entries": [
//!     { "name": "S", "type": { "kind": "string" }, "tag": "json:\"s\"" }
//!   ] }
//! }
//! ```

use std::collections::HashSet;

use thiserror::Error;
use typegen_core::bare_name;

use crate::types::{Type, TypeMap};

/// Errors produced while loading a type model.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid type model JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("root declaration name {0:?} has no identifier")]
    EmptyRootName(String),

    #[error("object {object:?} declares field {field:?} more than once")]
    DuplicateField { object: String, field: String },
}

/// Parse and validate a type map from JSON.
pub fn load_type_map(json: &str) -> Result<TypeMap, ModelError> {
    let types: TypeMap = serde_json::from_str(json)?;
    validate(&types)?;
    tracing::debug!(root_count = types.len(), "loaded type model");
    Ok(types)
}

/// Check structural constraints the generator relies on.
fn validate(types: &TypeMap) -> Result<(), ModelError> {
    for (root, ty) in types {
        if bare_name(root).is_empty() {
            return Err(ModelError::EmptyRootName(root.clone()));
        }
        validate_node(root, ty)?;
    }
    Ok(())
}

fn validate_node(path: &str, ty: &Type) -> Result<(), ModelError> {
    match ty {
        Type::Array { inner } | Type::Nullable { inner } => validate_node(path, inner),
        Type::Map { key, value } => {
            validate_node(path, key)?;
            validate_node(path, value)
        }
        Type::Object(obj) => {
            let owner = if obj.name.is_empty() { path } else { obj.name.as_str() };
            let mut seen = HashSet::new();
            for entry in &obj.entries {
                if !seen.insert(entry.name.as_str()) {
                    return Err(ModelError::DuplicateField {
                        object: owner.to_string(),
                        field: entry.name.clone(),
                    });
                }
                validate_node(owner, &entry.ty)?;
            }
            Ok(())
        }
        Type::String(_) | Type::Number(_) | Type::Boolean | Type::Date | Type::Any => Ok(()),
    }
}
