//! # taxref-sync
//!
//! Generation pipeline and run modes for the aggregated taxonomy
//! reference.
//!
//! Call [`pipeline::run_at`] with a [`RunMode`] to preview, check, or
//! write the document rooted at a project directory.

pub mod check;
pub mod error;
pub mod pipeline;
pub mod writer;

pub use check::CheckStatus;
pub use error::SyncError;
pub use pipeline::{run_at, Outcome, Reference, RunMode, PREVIEW_CHAR_LIMIT};
