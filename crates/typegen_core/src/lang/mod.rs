//! Canonical vocabulary of the emitted language.

pub mod rust_keywords;
