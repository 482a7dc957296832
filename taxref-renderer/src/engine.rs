//! Tera rendering engine for the aggregated reference document.
//!
//! The master template produces, in order: header (with timestamp), table
//! of contents, separator, one body block per generated section, then the
//! three curated blocks (practicality taxonomy, qualities, naming
//! convention). Curated blocks never derive from README content.

use tera::Tera;

use crate::context::ReferenceContext;
use crate::error::RenderError;

// ---------------------------------------------------------------------------
// Embedded templates — baked into the binary at compile time via include_str!
// ---------------------------------------------------------------------------

const MASTER: &str = "reference.md";

const TPLS: &[(&str, &str)] = &[
    (MASTER, include_str!("templates/reference.md.tera")),
    (
        "partials/practicality_taxonomy.md",
        include_str!("templates/_partials/practicality_taxonomy.md.tera"),
    ),
    (
        "partials/qualities.md",
        include_str!("templates/_partials/qualities.md.tera"),
    ),
    (
        "partials/naming_convention.md",
        include_str!("templates/_partials/naming_convention.md.tera"),
    ),
];

fn build_tera() -> Result<Tera, RenderError> {
    let mut tera = Tera::default();
    // Output is markdown; HTML-escaping would mangle titles like
    // "Enterprise & Strategic Architecture".
    tera.autoescape_on(vec![]);
    tera.add_raw_templates(TPLS.to_vec())?;
    Ok(tera)
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Tera-based renderer over embedded templates only.
///
/// Create once with [`Renderer::new`] and reuse.
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    pub fn new() -> Result<Self, RenderError> {
        Ok(Renderer { tera: build_tera()? })
    }

    /// Render the full reference document for `ctx`.
    pub fn render(&self, ctx: &ReferenceContext) -> Result<String, RenderError> {
        let tera_ctx = ctx.to_tera_context()?;
        Ok(self.tera.render(MASTER, &tera_ctx)?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
