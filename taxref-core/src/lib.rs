//! Taxref core library — section catalog, README location, structural
//! extraction, errors.
//!
//! Public API surface:
//! - [`catalog`] — the fixed section list and path/README location helpers
//! - [`extract`] — [`Extractor`] and the extracted value types
//! - [`error`] — [`CoreError`]

pub mod catalog;
pub mod error;
pub mod extract;

pub use catalog::{BodyKind, SectionSource};
pub use error::CoreError;
pub use extract::{ExtractedDocument, Extractor, Subsection};
