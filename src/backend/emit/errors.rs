//! Define error types for artifact → token rendering.
//!
//! ## Notes
//!
//! - Prefer actionable messages: name the artifact or field whose text could not be rendered.

use thiserror::Error;

/// Error while rendering artifacts into Rust tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("invalid identifier {ident:?} for {context}")]
    InvalidIdentifier { ident: String, context: String },

    #[error("invalid derive {derive:?}: {message}")]
    InvalidDerive { derive: String, message: String },

    #[error("cannot tokenize {text:?}: {message}")]
    Lex { text: String, message: String },

    #[error("value {value} of constant {constant} is not a valid {base} literal")]
    NumericLiteral {
        constant: String,
        value: String,
        base: &'static str,
    },
}
