#![forbid(unsafe_code)]
//! typegen: deterministic Rust declaration generator
//!
//! typegen translates an already-parsed type model (objects, enum-bearing primitives, arrays, maps, nullable
//! wrappers) into Rust source: one `pub struct` per object and one type alias plus constants per enum. Output is a
//! pure function of the model, the pre-reserved names and the override hook.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! ## Examples
//!
//! ```rust
//! use typegen::backend::{EmitConfig, Generator};
//! use typegen_model::load_type_map;
//!
//! let types = load_type_map(r#"{ "pkg.Flag": { "kind": "object", "name": "pkg.Flag", "entries": [
//!     { "name": "On", "type": { "kind": "boolean" }, "tag": "" }
//! ] } }"#).unwrap();
//! let generated = Generator::new(&types, &[])
//!     .with_config(EmitConfig::new().with_header(false))
//!     .generate()
//!     .unwrap();
//! assert!(generated.source().contains("pub struct Flag"));
//! ```

pub mod backend;
pub mod cli;
pub mod version;

pub use backend::{EmitConfig, ExternalType, Generated, GenerationError, Generator, OverrideHook};
