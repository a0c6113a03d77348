//! Type node definitions.
//!
//! The variant set is closed: every consumer matches [`Type`] exhaustively, so adding a variant is a
//! compile-time-checked change.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Root declarations keyed by their declaration name.
///
/// Iteration order is unspecified; consumers that need determinism must sort.
pub type TypeMap = HashMap<String, Type>;

/// A node of the type model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Type {
    /// Homogeneous sequence.
    Array { inner: Box<Type> },
    /// Key/value mapping.
    Map { key: Box<Type>, value: Box<Type> },
    /// Record with named fields.
    Object(ObjectType),
    /// String, optionally restricted to an enumeration.
    String(StringType),
    /// Number of a specific kind, optionally restricted to an enumeration.
    Number(NumberType),
    Boolean,
    /// Point in time.
    Date,
    /// Unconstrained value.
    Any,
    /// Value that may be absent.
    Nullable { inner: Box<Type> },
}

impl Type {
    pub fn array(inner: Type) -> Self {
        Type::Array { inner: Box::new(inner) }
    }

    pub fn map(key: Type, value: Type) -> Self {
        Type::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn nullable(inner: Type) -> Self {
        Type::Nullable { inner: Box::new(inner) }
    }

    /// Plain (non-enum) string.
    pub fn string() -> Self {
        Type::String(StringType::default())
    }

    /// Plain (non-enum) number of the given kind.
    pub fn number(kind: NumberKind) -> Self {
        Type::Number(NumberType::new("", kind))
    }

    /// Lowercase variant name, matching the serialized `kind` tag.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Type::Array { .. } => "array",
            Type::Map { .. } => "map",
            Type::Object(_) => "object",
            Type::String(_) => "string",
            Type::Number(_) => "number",
            Type::Boolean => "boolean",
            Type::Date => "date",
            Type::Any => "any",
            Type::Nullable { .. } => "nullable",
        }
    }

    /// Fully-qualified name of a named node, or `None` for anonymous and unnamed variants.
    pub fn qualified_name(&self) -> Option<&str> {
        let name = match self {
            Type::Object(o) => &o.name,
            Type::String(s) => &s.name,
            Type::Number(n) => &n.name,
            _ => return None,
        };
        if name.is_empty() { None } else { Some(name) }
    }
}

impl From<ObjectType> for Type {
    fn from(obj: ObjectType) -> Self {
        Type::Object(obj)
    }
}

impl From<StringType> for Type {
    fn from(s: StringType) -> Self {
        Type::String(s)
    }
}

impl From<NumberType> for Type {
    fn from(n: NumberType) -> Self {
        Type::Number(n)
    }
}

/// Record type. Entries are kept in declaration order; consumers sort by raw name.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ObjectType {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub entries: Vec<ObjectEntry>,
}

impl ObjectType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Anonymous (inline) object.
    pub fn inline() -> Self {
        Self::default()
    }

    /// Append a field.
    pub fn field(mut self, name: impl Into<String>, ty: impl Into<Type>, tag: impl Into<String>) -> Self {
        self.entries.push(ObjectEntry {
            name: name.into(),
            ty: ty.into(),
            tag: tag.into(),
        });
        self
    }
}

/// One field of an [`ObjectType`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectEntry {
    /// Raw field name as declared.
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Type,
    /// Raw serialization tag (`json:"name,omitempty"`), empty when absent.
    #[serde(default)]
    pub tag: String,
}

/// One member of an enumeration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumEntry<V> {
    /// Raw constant key as declared (`StatusOK`).
    pub key: String,
    pub value: V,
}

impl<V> EnumEntry<V> {
    pub fn new(key: impl Into<String>, value: V) -> Self {
        Self { key: key.into(), value }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StringType {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "enum", skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<EnumEntry<String>>,
}

impl StringType {
    /// String enumeration named `name` with `(key, value)` members in declared order.
    pub fn enumeration<K, V>(name: impl Into<String>, members: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            name: name.into(),
            enum_values: members
                .into_iter()
                .map(|(k, v)| EnumEntry::new(k, v.into()))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberType {
    #[serde(default)]
    pub name: String,
    /// Concrete numeric representation.
    #[serde(rename = "repr")]
    pub kind: NumberKind,
    #[serde(default, rename = "enum", skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<EnumEntry<serde_json::Number>>,
}

impl NumberType {
    pub fn new(name: impl Into<String>, kind: NumberKind) -> Self {
        Self {
            name: name.into(),
            kind,
            enum_values: Vec::new(),
        }
    }

    /// Add an enumeration member.
    pub fn member(mut self, key: impl Into<String>, value: impl Into<serde_json::Number>) -> Self {
        self.enum_values.push(EnumEntry::new(key, value.into()));
        self
    }
}

/// Numeric representations carried by [`NumberType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberKind {
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Uintptr,
    Float32,
    Float64,
}

impl NumberKind {
    /// Rust primitive spelling for this kind.
    ///
    /// Platform-sized integers map to 64-bit types; only pointer-sized values map to `usize`.
    pub fn rust_name(self) -> &'static str {
        match self {
            NumberKind::Int | NumberKind::Int64 => "i64",
            NumberKind::Int8 => "i8",
            NumberKind::Int16 => "i16",
            NumberKind::Int32 => "i32",
            NumberKind::Uint | NumberKind::Uint64 => "u64",
            NumberKind::Uint8 => "u8",
            NumberKind::Uint16 => "u16",
            NumberKind::Uint32 => "u32",
            NumberKind::Uintptr => "usize",
            NumberKind::Float32 => "f32",
            NumberKind::Float64 => "f64",
        }
    }

    pub fn is_float(self) -> bool {
        matches!(self, NumberKind::Float32 | NumberKind::Float64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualified_name_of_anonymous_object() {
        let ty = Type::from(ObjectType::inline());
        assert_eq!(ty.qualified_name(), None);
    }

    #[test]
    fn test_qualified_name_of_named_enum() {
        let ty = Type::from(StringType::enumeration("pkg.Status", [("StatusOK", "OK")]));
        assert_eq!(ty.qualified_name(), Some("pkg.Status"));
    }

    #[test]
    fn test_plain_string_has_no_name() {
        assert_eq!(Type::string().qualified_name(), None);
        assert_eq!(Type::Date.qualified_name(), None);
    }

    #[test]
    fn test_number_kind_rust_names() {
        assert_eq!(NumberKind::Int.rust_name(), "i64");
        assert_eq!(NumberKind::Uintptr.rust_name(), "usize");
        assert_eq!(NumberKind::Float32.rust_name(), "f32");
    }

    #[test]
    fn test_object_builder_keeps_declared_order() {
        let obj = ObjectType::new("pkg.Req")
            .field("T", Type::Date, "")
            .field("S", Type::string(), r#"json:"s""#);
        let names: Vec<_> = obj.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["T", "S"]);
    }

    #[test]
    fn test_kind_name_matches_serialized_tag() {
        let json = serde_json::to_value(Type::nullable(Type::Any)).unwrap();
        assert_eq!(json["kind"], "nullable");
        assert_eq!(Type::nullable(Type::Any).kind_name(), "nullable");
    }
}
