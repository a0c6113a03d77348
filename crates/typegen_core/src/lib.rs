//! Provide shared, pure naming helpers and canonical vocabulary for the typegen generator.
//!
//! This crate is intentionally small and dependency-light. It contains deterministic helpers that both the
//! type model and the backend rely on:
//! - splitting fully-qualified declaration names into module and bare identifier,
//! - short hexadecimal digests used for collision suffixes and import aliases,
//! - the Rust keyword list used when escaping emitted identifiers.
//!
//! ## Notes
//!
//! - No IO, no global state, no generator-specific types.

pub mod digest;
pub mod lang;
pub mod names;

pub use digest::short_digest;
pub use names::{bare_name, split_qualified};
