//! Error types for a generation pass.

use thiserror::Error;

pub use super::emit::RenderError;

/// Error during generation.
///
/// Both variants abort the pass; no partial output is returned.
///
/// ## Examples
///
/// ```rust,ignore
/// use typegen::backend::{Generator, GenerationError};
///
/// match Generator::new(&types, &[]).generate() {
///     Ok(generated) => println!("{}", generated.source),
///     Err(GenerationError::Render(e)) => eprintln!("render failed: {}", e),
///     Err(GenerationError::Format(e)) => eprintln!("generated code is not valid Rust: {}", e),
/// }
/// ```
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Rendering artifacts into tokens failed
    #[error("failed to render generated code: {0}")]
    Render(#[from] RenderError),
    /// The rendered tokens are not a valid Rust file
    #[error("failed to format generated code: {0}")]
    Format(#[source] syn::Error),
}
