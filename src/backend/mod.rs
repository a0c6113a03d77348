//! Typegen backend: type model → Rust declarations.
//!
//! The pipeline is:
//! 1. Root declarations are visited in sorted key order.
//! 2. [`convert`] maps each node to a [`TypeExpr`], allocating names through [`naming`] and registering
//!    artifacts with [`artifacts`]. Override hooks ([`overrides`]) get the first say on every node.
//! 3. [`emit`] sorts the artifacts, renders tokens and formats them with `prettyplease`.
//!
//! ## Module Organization
//!
//! - `convert.rs` - Recursive conversion rules
//! - `naming.rs` - Display-name allocation and collision suffixes
//! - `artifacts.rs` - Object/constant artifacts and the collector
//! - `overrides.rs` - Override hook trait, closures and JSON rules
//! - `type_expr.rs` - Resolved Rust type expressions
//! - `config.rs` - Emission configuration
//! - `emit/` - Token rendering and formatting
//! - `errors.rs` - Generation errors

pub mod artifacts;
pub mod config;
pub mod convert;
pub mod emit;
pub mod errors;
pub mod naming;
pub mod overrides;
pub mod type_expr;

pub use artifacts::{
    Artifacts, ConstantArtifact, ConstantEntry, ConstantValue, ImportRecord, ObjectArtifact, ObjectField,
};
pub use config::{DEFAULT_DERIVES, EmitConfig};
pub use convert::{ConvertContext, Slot};
pub use emit::{OutputAssembler, RenderError};
pub use errors::GenerationError;
pub use overrides::{ExternalType, NoOverride, OverrideHook, OverrideRules, import_alias};
pub use type_expr::{Primitive, TypeExpr};

use typegen_model::TypeMap;

use artifacts::ArtifactCollector;
use naming::NameAllocator;

/// State of one generation pass.
///
/// A generator borrows the input map, owns every piece of per-pass state and is consumed by
/// [`generate`](Generator::generate), so it cannot be reused.
///
/// ## Examples
///
/// ```rust,ignore
/// use typegen::backend::Generator;
///
/// let generated = Generator::new(&types, &["other.Status".to_string()])
///     .with_override(|ty: &Type| matches!(ty, Type::Date).then(|| ExternalType::local("Timestamp")))
///     .generate()?;
/// std::fs::write("types.rs", generated.source())?;
/// ```
pub struct Generator<'a> {
    types: &'a TypeMap,
    hook: Box<dyn OverrideHook + 'a>,
    config: EmitConfig,
    names: NameAllocator,
    artifacts: ArtifactCollector,
}

impl<'a> Generator<'a> {
    /// Create a generator for `types`; `prereserved` lists fully-qualified names whose bare identifiers are taken.
    pub fn new(types: &'a TypeMap, prereserved: &[String]) -> Self {
        Self {
            types,
            hook: Box::new(NoOverride),
            config: EmitConfig::default(),
            names: NameAllocator::new(prereserved),
            artifacts: ArtifactCollector::default(),
        }
    }

    /// Install an override hook consulted before the default conversion rules.
    pub fn with_override(mut self, hook: impl OverrideHook + 'a) -> Self {
        self.hook = Box::new(hook);
        self
    }

    /// Replace the emission configuration.
    pub fn with_config(mut self, config: EmitConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the pass: convert every root, then assemble the output file.
    #[tracing::instrument(skip_all, fields(roots = self.types.len()))]
    pub fn generate(mut self) -> Result<Generated, GenerationError> {
        let types = self.types;
        let mut keys: Vec<&String> = types.keys().collect();
        keys.sort();

        for key in keys {
            let ty = &types[key];
            let expr = self.convert(ty, ConvertContext::root(key));
            tracing::trace!(%key, ty = %expr, "converted root");
        }

        let artifacts = self.artifacts.into_sorted();
        let source = OutputAssembler::new(&self.config).assemble(&artifacts)?;
        tracing::debug!(
            objects = artifacts.objects.len(),
            constants = artifacts.constants.len(),
            "generation finished"
        );
        Ok(Generated { source, artifacts })
    }
}

/// Output of a successful pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Generated {
    source: String,
    artifacts: Artifacts,
}

impl Generated {
    /// Formatted Rust source.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn objects(&self) -> &[ObjectArtifact] {
        &self.artifacts.objects
    }

    pub fn constants(&self) -> &[ConstantArtifact] {
        &self.artifacts.constants
    }

    pub fn imports(&self) -> &[ImportRecord] {
        &self.artifacts.imports
    }

    /// Whether the output imports `chrono`.
    pub fn uses_date_time(&self) -> bool {
        self.artifacts.uses_date_time
    }

    pub fn artifacts(&self) -> &Artifacts {
        &self.artifacts
    }

    pub fn into_source(self) -> String {
        self.source
    }
}
