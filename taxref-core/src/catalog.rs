//! Section catalog — the fixed, ordered mapping from taxonomy directories
//! to display titles, plus README location.
//!
//! # Layout
//!
//! ```text
//! <root>/architecture-general/
//!   01-enterprise-strategic-architecture/README.md
//!   02-application-software-architecture/README.md
//!   ...
//!   10-practicality-taxonomy/architecture_taxonomy_reference.md  (target)
//! ```
//!
//! Catalog order is load-bearing: it fixes the order of the table of
//! contents and of the rendered section bodies.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{io_err, CoreError};

/// Directory holding all taxonomy section directories, relative to the
/// project root.
pub const CONTENT_DIR: &str = "architecture-general";

/// Directory of the aggregated reference, relative to [`CONTENT_DIR`].
pub const REFERENCE_DIR: &str = "10-practicality-taxonomy";

/// File name of the aggregated reference document.
pub const REFERENCE_FILE: &str = "architecture_taxonomy_reference.md";

/// How a section's body block is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    /// Body is generated from the section's README.
    Generated,
    /// Body is a hand-curated block carried in the renderer's templates;
    /// the README still feeds the table of contents.
    Curated,
}

/// One taxonomy section: a directory under [`CONTENT_DIR`] and the display
/// title it is rendered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSource {
    pub dir_name: &'static str,
    pub title: &'static str,
    pub body: BodyKind,
}

const SECTIONS: &[SectionSource] = &[
    SectionSource {
        dir_name: "01-enterprise-strategic-architecture",
        title: "1. Enterprise & Strategic Architecture",
        body: BodyKind::Generated,
    },
    SectionSource {
        dir_name: "02-application-software-architecture",
        title: "2. Application & Software Architecture",
        body: BodyKind::Generated,
    },
    SectionSource {
        dir_name: "03-integration-communication-architecture",
        title: "3. Integration & Communication Architecture",
        body: BodyKind::Generated,
    },
    SectionSource {
        dir_name: "04-data-analytics-ai-architecture",
        title: "4. Data, Analytics & AI Architecture",
        body: BodyKind::Generated,
    },
    SectionSource {
        dir_name: "05-cloud-infrastructure-platform-architecture",
        title: "5. Cloud, Infrastructure & Platform Architecture",
        body: BodyKind::Generated,
    },
    SectionSource {
        dir_name: "06-security-architecture",
        title: "6. Security Architecture (Cross-Cutting)",
        body: BodyKind::Generated,
    },
    SectionSource {
        dir_name: "07-reliability-performance-operations",
        title: "7. Reliability, Performance & Operations",
        body: BodyKind::Generated,
    },
    SectionSource {
        dir_name: "08-devops-delivery-runtime-architecture",
        title: "8. DevOps, Delivery & Runtime Architecture",
        body: BodyKind::Generated,
    },
    SectionSource {
        dir_name: "09-industry-specialized-architectures",
        title: "9. Industry & Specialized Architectures",
        body: BodyKind::Generated,
    },
    SectionSource {
        dir_name: "10-practicality-taxonomy",
        title: "10. Practicality Taxonomy (Abstraction Levels)",
        body: BodyKind::Curated,
    },
    SectionSource {
        dir_name: "11-architectural-qualities",
        title: "11. Architectural Qualities (Non-Functional)",
        body: BodyKind::Curated,
    },
];

/// All catalog sections in rendering order.
pub fn sections() -> &'static [SectionSource] {
    SECTIONS
}

/// `<root>/architecture-general/` — pure, no I/O.
pub fn content_dir_at(root: &Path) -> PathBuf {
    root.join(CONTENT_DIR)
}

/// `<root>/architecture-general/<dir_name>/` — pure, no I/O.
pub fn section_dir_at(root: &Path, source: &SectionSource) -> PathBuf {
    content_dir_at(root).join(source.dir_name)
}

/// Path of the aggregated reference document — pure, no I/O.
pub fn reference_path_at(root: &Path) -> PathBuf {
    content_dir_at(root).join(REFERENCE_DIR).join(REFERENCE_FILE)
}

/// Read the README of one section, rooted at `root`.
///
/// Returns `Ok(None)` when the README (or its directory) does not exist;
/// downstream stages skip such sections silently. Any other I/O failure
/// propagates as [`CoreError::Io`].
pub fn read_section_readme_at(
    root: &Path,
    source: &SectionSource,
) -> Result<Option<String>, CoreError> {
    let path = section_dir_at(root, source).join("README.md");
    match std::fs::read_to_string(&path) {
        Ok(content) => Ok(Some(content)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(io_err(path, err)),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
