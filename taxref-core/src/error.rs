//! Error types for taxref-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from locating and extracting section sources.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// One of the extraction regexes failed to compile.
    #[error("invalid extraction pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Convenience constructor for [`CoreError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> CoreError {
    CoreError::Io {
        path: path.into(),
        source,
    }
}
