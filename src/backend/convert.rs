//! Type conversion: model nodes to Rust type expressions.
//!
//! Conversion is recursive and side-effecting: converting a named object or enum allocates its display name,
//! registers the matching artifact and memoizes the name, so every later reference resolves to the same
//! declaration. Rules are applied in this order:
//!
//! 1. the override hook,
//! 2. containers (`Vec`, `HashMap`),
//! 3. objects and enum-bearing primitives (artifacts),
//! 4. plain primitives, dates, `Any`,
//! 5. nullable wrappers (a no-op around containers).

use typegen_core::bare_name;
use typegen_model::{EnumEntry, NumberType, ObjectType, StringType, Type};

use super::Generator;
use super::artifacts::{ConstantArtifact, ConstantEntry, ConstantValue, ObjectArtifact, ObjectField};
use super::overrides::{ExternalType, import_alias};
use super::type_expr::{Primitive, TypeExpr};

/// Position of a node inside the container chain of its context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Slot {
    /// The node itself, an element, or a map value.
    #[default]
    Value,
    /// A map key.
    MapKey,
}

impl Slot {
    pub fn as_str(self) -> &'static str {
        match self {
            Slot::Value => "value",
            Slot::MapKey => "key",
        }
    }
}

/// Where a node is being converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertContext<'c> {
    /// A root declaration of the input map.
    Root { key: &'c str, slot: Slot },
    /// A field of the artifact named `parent`, at `index` in raw-name order.
    Field { parent: &'c str, index: usize, slot: Slot },
}

impl<'c> ConvertContext<'c> {
    pub fn root(key: &'c str) -> Self {
        ConvertContext::Root { key, slot: Slot::Value }
    }

    pub fn field(parent: &'c str, index: usize) -> Self {
        ConvertContext::Field {
            parent,
            index,
            slot: Slot::Value,
        }
    }

    /// The same context, seen from a map key.
    pub fn map_key(self) -> Self {
        match self {
            ConvertContext::Root { key, .. } => ConvertContext::Root { key, slot: Slot::MapKey },
            ConvertContext::Field { parent, index, .. } => ConvertContext::Field {
                parent,
                index,
                slot: Slot::MapKey,
            },
        }
    }
}

impl<'a> Generator<'a> {
    /// Convert one node, registering any artifacts and imports it needs.
    pub(super) fn convert(&mut self, ty: &Type, ctx: ConvertContext<'_>) -> TypeExpr {
        if let Some(external) = self.hook.resolve(ty) {
            return self.convert_external(external);
        }

        match ty {
            Type::Array { inner } => TypeExpr::Vec(Box::new(self.convert(inner, ctx))),
            Type::Map { key, value } => {
                // Keys get their own slot so anonymous key and value objects are named apart.
                let k = self.convert(key, ctx.map_key());
                let v = self.convert(value, ctx);
                TypeExpr::Map(Box::new(k), Box::new(v))
            }
            Type::Object(obj) => self.convert_object(obj, ctx),
            Type::String(s) => self.convert_string(s, ctx),
            Type::Number(n) => self.convert_number(n, ctx),
            Type::Boolean => TypeExpr::Primitive(Primitive::Bool),
            Type::Date => {
                self.artifacts.require_date_time();
                TypeExpr::DateTime
            }
            Type::Nullable { inner } => match inner.as_ref() {
                // Containers already have an empty representation.
                Type::Array { .. } | Type::Map { .. } => self.convert(inner, ctx),
                _ => TypeExpr::optional(self.convert(inner, ctx)),
            },
            Type::Any => TypeExpr::Any,
        }
    }

    fn convert_external(&mut self, external: ExternalType) -> TypeExpr {
        let ExternalType { path, name } = external;
        if path.is_empty() {
            return TypeExpr::External { alias: None, name };
        }
        let alias = import_alias(&path);
        self.artifacts.add_import(alias.clone(), path);
        TypeExpr::External {
            alias: Some(alias),
            name,
        }
    }

    fn convert_object(&mut self, obj: &ObjectType, ctx: ConvertContext<'_>) -> TypeExpr {
        if let Some(name) = self.memoized(&obj.name) {
            return TypeExpr::Struct(name);
        }

        // Allocation memoizes the name before fields are visited, so self references terminate.
        let name = self.names.allocate(&obj.name, ctx);

        let mut entries: Vec<_> = obj.entries.iter().collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        let mut fields = Vec::with_capacity(entries.len());
        for (index, entry) in entries.into_iter().enumerate() {
            let ty = self.convert(&entry.ty, ConvertContext::field(&name, index));
            fields.push(ObjectField {
                name: entry.name.clone(),
                ty,
                tag: entry.tag.clone(),
            });
        }

        self.artifacts.push_object(ObjectArtifact {
            name: name.clone(),
            fields,
        });
        TypeExpr::Struct(name)
    }

    fn convert_string(&mut self, s: &StringType, ctx: ConvertContext<'_>) -> TypeExpr {
        if s.enum_values.is_empty() {
            return TypeExpr::Primitive(Primitive::String);
        }
        self.convert_enum(&s.name, &s.enum_values, Primitive::String, ctx, |v| {
            ConstantValue::Str(v.clone())
        })
    }

    fn convert_number(&mut self, n: &NumberType, ctx: ConvertContext<'_>) -> TypeExpr {
        let base = Primitive::Number(n.kind);
        if n.enum_values.is_empty() {
            return TypeExpr::Primitive(base);
        }
        self.convert_enum(&n.name, &n.enum_values, base, ctx, |v| ConstantValue::Number(v.clone()))
    }

    /// Register a constant block for an enum-bearing primitive named `fqn`.
    fn convert_enum<V>(
        &mut self,
        fqn: &str,
        members: &[EnumEntry<V>],
        base: Primitive,
        ctx: ConvertContext<'_>,
        value: impl Fn(&V) -> ConstantValue,
    ) -> TypeExpr {
        if let Some(name) = self.memoized(fqn) {
            return TypeExpr::Alias(name);
        }

        let name = self.names.allocate(fqn, ctx);
        let bare = bare_name(fqn);
        let entries = members
            .iter()
            .map(|member| ConstantEntry {
                name: constant_name(&name, bare, &member.key),
                value: value(&member.value),
            })
            .collect();

        self.artifacts.push_constant(ConstantArtifact {
            name: name.clone(),
            base,
            entries,
        });
        TypeExpr::Alias(name)
    }

    fn memoized(&self, fqn: &str) -> Option<String> {
        if fqn.is_empty() {
            return None;
        }
        self.names.lookup(fqn).map(str::to_string)
    }
}

/// Constant name for an enum member: the allocated type name followed by the raw key, with a leading
/// occurrence of the type's bare identifier stripped from the key (`Status` + `StatusOK` -> `StatusOK`).
pub fn constant_name(allocated: &str, bare: &str, key: &str) -> String {
    let suffix = key.strip_prefix(bare).unwrap_or(key);
    format!("{}{}", allocated, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::overrides::ExternalType;
    use typegen_model::{NumberKind, TypeMap};

    fn convert_root(generator: &mut Generator<'_>, key: &str, ty: &Type) -> TypeExpr {
        generator.convert(ty, ConvertContext::root(key))
    }

    #[test]
    fn test_constant_name_strips_bare_prefix() {
        assert_eq!(constant_name("Status", "Status", "StatusOK"), "StatusOK");
        assert_eq!(constant_name("Status_1a2b", "Status", "StatusOK"), "Status_1a2bOK");
    }

    #[test]
    fn test_constant_name_without_shared_prefix_concatenates() {
        assert_eq!(constant_name("Status", "Status", "Done"), "StatusDone");
    }

    #[test]
    fn test_nullable_container_collapses() {
        let types = TypeMap::new();
        let mut generator = Generator::new(&types, &[]);
        let plain = convert_root(&mut generator, "k", &Type::array(Type::string()));
        let nullable = convert_root(&mut generator, "k", &Type::nullable(Type::array(Type::string())));
        assert_eq!(plain, nullable);

        let map = convert_root(
            &mut generator,
            "k",
            &Type::nullable(Type::map(Type::string(), Type::number(NumberKind::Int64))),
        );
        assert_eq!(map.to_string(), "std::collections::HashMap<String, i64>");
    }

    #[test]
    fn test_nullable_scalar_is_optional() {
        let types = TypeMap::new();
        let mut generator = Generator::new(&types, &[]);
        let ty = convert_root(&mut generator, "k", &Type::nullable(Type::Boolean));
        assert_eq!(ty.to_string(), "Option<bool>");
    }

    #[test]
    fn test_self_reference_terminates() {
        let node = ObjectType::new("pkg.Node").field("Value", Type::string(), "");
        // `Next` refers back to the same fully-qualified name.
        let node = node.clone().field("Next", Type::nullable(Type::from(node)), "");

        let types = TypeMap::new();
        let mut generator = Generator::new(&types, &[]);
        let ty = convert_root(&mut generator, "pkg.Node", &Type::from(node));
        assert_eq!(ty, TypeExpr::Struct("Node".into()));

        let artifacts = generator.artifacts.into_sorted();
        assert_eq!(artifacts.objects.len(), 1);
        let next = &artifacts.objects[0].fields[0];
        assert_eq!(next.name, "Next");
        assert_eq!(next.ty.to_string(), "Option<Box<Node>>");
    }

    #[test]
    fn test_hook_runs_before_default_rules() {
        let types = TypeMap::new();
        let mut generator = Generator::new(&types, &[])
            .with_override(|ty: &Type| matches!(ty, Type::Date).then(|| ExternalType::local("Timestamp")));
        let ty = convert_root(&mut generator, "k", &Type::Date);
        assert_eq!(ty.to_string(), "Timestamp");
        assert!(!generator.artifacts.into_sorted().uses_date_time);
    }

    #[test]
    fn test_plain_number_maps_to_kind() {
        let types = TypeMap::new();
        let mut generator = Generator::new(&types, &[]);
        let ty = convert_root(&mut generator, "k", &Type::number(NumberKind::Uint16));
        assert_eq!(ty, TypeExpr::Primitive(Primitive::Number(NumberKind::Uint16)));
    }
}
