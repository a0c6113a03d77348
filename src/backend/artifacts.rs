//! Artifacts produced by a generation pass.
//!
//! The collector is a passive accumulator: memoization in the converter already guarantees that each
//! fully-qualified name yields at most one artifact, so nothing here deduplicates except imports (keyed by
//! alias). [`ArtifactCollector::into_sorted`] produces the deterministic view handed to emission.

use std::collections::HashMap;
use std::fmt;

use super::type_expr::{Primitive, TypeExpr};

/// A generated struct.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectArtifact {
    pub name: String,
    /// Fields ordered by raw field name
    pub fields: Vec<ObjectField>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectField {
    /// Raw field name as declared in the model
    pub name: String,
    pub ty: TypeExpr,
    /// Raw serialization tag
    pub tag: String,
}

/// A generated constant block: one type alias plus one constant per enum member.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantArtifact {
    pub name: String,
    pub base: Primitive,
    /// Members in declared order
    pub entries: Vec<ConstantEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConstantEntry {
    pub name: String,
    pub value: ConstantValue,
}

/// Literal value of a constant, preserved verbatim from the model.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstantValue {
    Str(String),
    Number(serde_json::Number),
}

impl fmt::Display for ConstantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstantValue::Str(s) => write!(f, "{:?}", s),
            ConstantValue::Number(n) => write!(f, "{}", n),
        }
    }
}

/// A `use <path> as <alias>;` line required by an override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRecord {
    pub alias: String,
    pub path: String,
}

/// Accumulates artifacts while the converter walks the model.
#[derive(Debug, Default)]
pub struct ArtifactCollector {
    objects: Vec<ObjectArtifact>,
    constants: Vec<ConstantArtifact>,
    /// alias -> module path
    imports: HashMap<String, String>,
    uses_date_time: bool,
}

impl ArtifactCollector {
    pub fn push_object(&mut self, object: ObjectArtifact) {
        tracing::trace!(name = %object.name, fields = object.fields.len(), "object artifact");
        self.objects.push(object);
    }

    pub fn push_constant(&mut self, constant: ConstantArtifact) {
        tracing::trace!(name = %constant.name, entries = constant.entries.len(), "constant artifact");
        self.constants.push(constant);
    }

    /// Record an import; repeated aliases share one record.
    pub fn add_import(&mut self, alias: String, path: String) {
        if !self.imports.contains_key(&alias) {
            tracing::debug!(%alias, %path, "external import");
            self.imports.insert(alias, path);
        }
    }

    /// Mark that the output needs the date/time import.
    pub fn require_date_time(&mut self) {
        self.uses_date_time = true;
    }

    /// Sort everything by name (imports by path) so output is independent of traversal order.
    pub fn into_sorted(self) -> Artifacts {
        let mut objects = self.objects;
        objects.sort_by(|a, b| a.name.cmp(&b.name));

        let mut constants = self.constants;
        constants.sort_by(|a, b| a.name.cmp(&b.name));

        let mut imports: Vec<ImportRecord> = self
            .imports
            .into_iter()
            .map(|(alias, path)| ImportRecord { alias, path })
            .collect();
        imports.sort_by(|a, b| a.path.cmp(&b.path));

        Artifacts {
            objects,
            constants,
            imports,
            uses_date_time: self.uses_date_time,
        }
    }
}

/// Sorted artifacts of a finished pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Artifacts {
    pub objects: Vec<ObjectArtifact>,
    pub constants: Vec<ConstantArtifact>,
    pub imports: Vec<ImportRecord>,
    pub uses_date_time: bool,
}

impl Artifacts {
    /// Find an object artifact by allocated name.
    pub fn object(&self, name: &str) -> Option<&ObjectArtifact> {
        self.objects.iter().find(|o| o.name == name)
    }

    /// Find a constant block by allocated name.
    pub fn constant(&self, name: &str) -> Option<&ConstantArtifact> {
        self.constants.iter().find(|c| c.name == name)
    }
}
