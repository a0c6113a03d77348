//! Type model consumed by the typegen generator.
//!
//! The model is the output of an external parser: every root declaration maps to a [`Type`] tree made of
//! objects, enum-bearing primitives, containers and nullable wrappers. This crate only defines the shapes and a
//! JSON loader for them.
//!
//! ## Notes
//! - This crate is intentionally "model-only": it does not allocate names or emit code.
//! - Named nodes carry a fully-qualified `module.Identifier` name; anonymous nodes carry an empty name.
//!
//! ## Examples
//! ```rust
//! use typegen_model::{load_type_map, Type};
//!
//! let types = load_type_map(r#"{ "pkg.Flag": { "kind": "boolean" } }"#).unwrap();
//! assert_eq!(types["pkg.Flag"], Type::Boolean);
//! ```

pub mod load;
pub mod types;

pub use load::{ModelError, load_type_map};
pub use types::{EnumEntry, NumberKind, NumberType, ObjectEntry, ObjectType, StringType, Type, TypeMap};
