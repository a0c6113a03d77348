//! Override hooks: redirect model nodes to externally supplied types.
//!
//! The converter offers every node to the configured [`OverrideHook`] before applying its default rules. A hook
//! answers with an [`ExternalType`]; a non-empty `path` makes the converter register an import aliased as
//! `external_<7 hex chars of SHA-256(path)>`, so every reference to the same path shares one alias.
//!
//! ## Implementations
//!
//! - [`NoOverride`]: the default, declines every node.
//! - Any `Fn(&Type) -> Option<ExternalType>` closure.
//! - [`OverrideRules`]: JSON-configurable rules by fully-qualified name, then by node kind (used by the CLI).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use typegen_core::short_digest;
use typegen_model::Type;

/// Literal prefix of every import alias.
pub const IMPORT_ALIAS_PREFIX: &str = "external_";

/// Hex characters of the path digest in an import alias.
pub const IMPORT_ALIAS_DIGEST_LEN: usize = 7;

/// Substitute reference returned by an override hook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalType {
    /// Module path to import from; empty when `name` is already in scope.
    #[serde(default)]
    pub path: String,
    /// Type name (or path suffix) to reference.
    pub name: String,
}

impl ExternalType {
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
        }
    }

    /// A type already visible in the generated module.
    pub fn local(name: impl Into<String>) -> Self {
        Self::new("", name)
    }
}

/// Strategy consulted before the default conversion rules.
pub trait OverrideHook {
    /// Return a substitute for `ty`, or `None` to let the default rules apply.
    fn resolve(&self, ty: &Type) -> Option<ExternalType>;
}

/// Hook that never overrides anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOverride;

impl OverrideHook for NoOverride {
    fn resolve(&self, _ty: &Type) -> Option<ExternalType> {
        None
    }
}

impl<F> OverrideHook for F
where
    F: Fn(&Type) -> Option<ExternalType>,
{
    fn resolve(&self, ty: &Type) -> Option<ExternalType> {
        self(ty)
    }
}

/// Import alias for a module path.
pub fn import_alias(path: &str) -> String {
    format!("{}{}", IMPORT_ALIAS_PREFIX, short_digest(path, IMPORT_ALIAS_DIGEST_LEN))
}

/// Declarative override rules.
///
/// ```json
/// {
///   "types": { "pkg.Money": { "path": "crate::money", "name": "Money" } },
///   "kinds": { "date": { "name": "Timestamp" } }
/// }
/// ```
///
/// A rule for the node's fully-qualified name wins over a rule for its kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OverrideRules {
    /// Fully-qualified name -> substitute
    #[serde(default)]
    pub types: HashMap<String, ExternalType>,
    /// Node kind (`string`, `date`, `object`, ...) -> substitute
    #[serde(default)]
    pub kinds: HashMap<String, ExternalType>,
}

impl OverrideRules {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty() && self.kinds.is_empty()
    }
}

impl OverrideHook for OverrideRules {
    fn resolve(&self, ty: &Type) -> Option<ExternalType> {
        ty.qualified_name()
            .and_then(|name| self.types.get(name))
            .or_else(|| self.kinds.get(ty.kind_name()))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use typegen_model::{ObjectType, StringType};

    #[test]
    fn test_import_alias_shape() {
        let alias = import_alias("crate::external");
        assert!(alias.starts_with(IMPORT_ALIAS_PREFIX));
        let digest = &alias[IMPORT_ALIAS_PREFIX.len()..];
        assert_eq!(digest.len(), IMPORT_ALIAS_DIGEST_LEN);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(alias, import_alias("crate::external"));
    }

    #[test]
    fn test_no_override_declines() {
        assert_eq!(NoOverride.resolve(&Type::string()), None);
    }

    #[test]
    fn test_closure_hook() {
        let hook = |ty: &Type| matches!(ty, Type::Date).then(|| ExternalType::local("Timestamp"));
        assert_eq!(hook.resolve(&Type::Date), Some(ExternalType::local("Timestamp")));
        assert_eq!(hook.resolve(&Type::Any), None);
    }

    #[test]
    fn test_rules_prefer_qualified_name_over_kind() {
        let rules = OverrideRules::from_json(
            r#"{
                "types": { "pkg.Money": { "path": "crate::money", "name": "Money" } },
                "kinds": { "object": { "name": "Opaque" } }
            }"#,
        )
        .unwrap();

        let money = Type::from(ObjectType::new("pkg.Money"));
        assert_eq!(rules.resolve(&money), Some(ExternalType::new("crate::money", "Money")));

        let other = Type::from(ObjectType::new("pkg.Other"));
        assert_eq!(rules.resolve(&other), Some(ExternalType::local("Opaque")));

        assert_eq!(rules.resolve(&Type::from(StringType::default())), None);
    }

    #[test]
    fn test_rules_reject_unknown_sections() {
        assert!(OverrideRules::from_json(r#"{ "typez": {} }"#).is_err());
        assert!(OverrideRules::default().is_empty());
    }
}
