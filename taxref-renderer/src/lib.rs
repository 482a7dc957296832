//! # taxref-renderer
//!
//! Tera-based engine that renders the aggregated taxonomy reference from
//! located section content.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taxref_renderer::{ReferenceContext, Renderer};
//!
//! fn render_empty() -> Result<String, taxref_renderer::RenderError> {
//!     let ctx = ReferenceContext::from_sections("2026-01-01 00:00:00 UTC".to_string(), &[]);
//!     Renderer::new()?.render(&ctx)
//! }
//! ```

pub mod anchor;
pub mod context;
pub mod engine;
pub mod error;

pub use anchor::anchor_for;
pub use context::{ReferenceContext, SectionCtx, SubsectionCtx};
pub use engine::Renderer;
pub use error::RenderError;
