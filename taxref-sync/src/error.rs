//! Error types for taxref-sync.

use std::path::PathBuf;

use thiserror::Error;

use taxref_core::CoreError;
use taxref_renderer::RenderError;

/// All errors that can arise from generating and syncing the reference.
#[derive(Debug, Error)]
pub enum SyncError {
    /// An error from locating or extracting section sources.
    #[error("extraction error: {0}")]
    Core(#[from] CoreError),

    /// An error from the rendering engine.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The timestamp-normalization regex failed to compile.
    #[error("invalid timestamp pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Convenience constructor for [`SyncError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> SyncError {
    SyncError::Io {
        path: path.into(),
        source,
    }
}
