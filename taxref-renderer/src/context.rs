//! Reference context — serializable rendering payload built from located
//! sections and their extracted content.

use serde::Serialize;

use taxref_core::catalog::{BodyKind, SectionSource};
use taxref_core::extract::ExtractedDocument;

use crate::anchor::anchor_for;
use crate::error::RenderError;

/// Rendering payload for the aggregated reference document.
///
/// Only sections whose README was located contribute a [`SectionCtx`];
/// absent sources are simply not present, so they appear in neither the
/// table of contents nor the body.
#[derive(Debug, Clone, Serialize)]
pub struct ReferenceContext {
    /// Preformatted timestamp substituted into the header. Supplying it
    /// from the caller keeps rendering deterministic under test.
    pub timestamp: String,
    pub sections: Vec<SectionCtx>,
}

/// One located section.
#[derive(Debug, Clone, Serialize)]
pub struct SectionCtx {
    pub title: String,
    pub anchor: String,
    /// Whether the body block for this section is generated from its
    /// README. Curated sections appear only in the table of contents.
    pub generated: bool,
    pub subsections: Vec<SubsectionCtx>,
}

/// One H3 group within a section.
#[derive(Debug, Clone, Serialize)]
pub struct SubsectionCtx {
    pub title: String,
    pub anchor: String,
    pub items: Vec<String>,
}

impl ReferenceContext {
    /// Build a context from located sections, in catalog order.
    pub fn from_sections(
        timestamp: String,
        located: &[(&SectionSource, ExtractedDocument)],
    ) -> Self {
        let sections = located
            .iter()
            .map(|(source, doc)| SectionCtx {
                title: source.title.to_string(),
                anchor: anchor_for(source.title),
                generated: source.body == BodyKind::Generated,
                subsections: doc
                    .subsections
                    .iter()
                    .map(|sub| SubsectionCtx {
                        title: sub.title.clone(),
                        anchor: anchor_for(&sub.title),
                        items: sub.items.clone(),
                    })
                    .collect(),
            })
            .collect();

        ReferenceContext {
            timestamp,
            sections,
        }
    }

    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::from)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
