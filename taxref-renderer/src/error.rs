//! Error types for taxref-renderer.

use thiserror::Error;

/// All errors that can arise from template rendering operations.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Tera template engine error (parse, context serialization, render).
    #[error("template engine error: {0}")]
    Tera(#[from] tera::Error),
}
