//! Shared generation pipeline and the three run modes.
//!
//! One generation pass feeds every mode: locate each catalog section's
//! README, extract its structure, render the full document, then preview,
//! check, or write it.

use std::path::{Path, PathBuf};

use chrono::Utc;

use taxref_core::{catalog, Extractor};
use taxref_renderer::{ReferenceContext, Renderer};

use crate::check::{self, CheckStatus};
use crate::error::SyncError;
use crate::writer;

/// How many characters of the document a preview shows.
pub const PREVIEW_CHAR_LIMIT: usize = 2000;

/// Run mode for one invocation. Exactly one is active; `Write` is the
/// default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Persist the generated document to the reference path.
    Write,
    /// Print a truncated preview; never touch disk.
    DryRun,
    /// Compare generated content against the reference on disk.
    Check,
}

/// A freshly generated reference document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub content: String,
    /// Number of configured catalog sections (not just located ones);
    /// reported in the write summary.
    pub section_count: usize,
}

/// Outcome of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Written {
        path: PathBuf,
        section_count: usize,
        total_chars: usize,
    },
    Preview {
        head: String,
        total_chars: usize,
        truncated: bool,
    },
    Check(CheckStatus),
}

/// Generate the full reference document from the READMEs under `root`.
///
/// Sections whose README is absent are skipped silently.
pub fn generate_at(root: &Path) -> Result<Reference, SyncError> {
    let extractor = Extractor::new()?;
    let mut located = Vec::new();
    for source in catalog::sections() {
        match catalog::read_section_readme_at(root, source)? {
            Some(raw) => located.push((source, extractor.extract(&raw))),
            None => tracing::debug!("no README.md in {}", source.dir_name),
        }
    }
    tracing::debug!(
        "located {} of {} section READMEs",
        located.len(),
        catalog::sections().len()
    );

    let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string();
    let ctx = ReferenceContext::from_sections(timestamp, &located);
    let content = Renderer::new()?.render(&ctx)?;

    Ok(Reference {
        content,
        section_count: catalog::sections().len(),
    })
}

/// Generate once and dispatch on `mode`.
pub fn run_at(root: &Path, mode: RunMode) -> Result<Outcome, SyncError> {
    let reference = generate_at(root)?;
    match mode {
        RunMode::DryRun => Ok(preview(&reference)),
        RunMode::Check => Ok(Outcome::Check(check::check_at(root, &reference.content)?)),
        RunMode::Write => {
            let path = catalog::reference_path_at(root);
            writer::write_reference(&path, &reference.content)?;
            Ok(Outcome::Written {
                path,
                section_count: reference.section_count,
                total_chars: reference.content.chars().count(),
            })
        }
    }
}

fn preview(reference: &Reference) -> Outcome {
    let total_chars = reference.content.chars().count();
    Outcome::Preview {
        head: reference.content.chars().take(PREVIEW_CHAR_LIMIT).collect(),
        total_chars,
        truncated: total_chars > PREVIEW_CHAR_LIMIT,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn seed_section(root: &Path, index: usize, readme: &str) {
        let dir = catalog::section_dir_at(root, &catalog::sections()[index]);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("README.md"), readme).unwrap();
    }

    fn strip_timestamp(content: &str) -> String {
        content
            .lines()
            .filter(|line| !line.contains("**Last updated**:"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn generation_is_idempotent_modulo_the_timestamp() {
        let root = TempDir::new().unwrap();
        seed_section(
            root.path(),
            0,
            "# Enterprise\n\nIntro.\n\n### Styles\n- One\n- Two\n",
        );

        let first = generate_at(root.path()).unwrap();
        let second = generate_at(root.path()).unwrap();
        assert_eq!(
            strip_timestamp(&first.content),
            strip_timestamp(&second.content)
        );
        assert_eq!(first.section_count, 11);
    }

    #[test]
    fn absent_directories_are_omitted_without_disturbing_neighbors() {
        let root = TempDir::new().unwrap();
        seed_section(root.path(), 0, "# One\n\n### A\n- a\n");
        seed_section(root.path(), 2, "# Three\n\n### C\n- c\n");

        let reference = generate_at(root.path()).unwrap();
        assert!(reference
            .content
            .contains("## 1. Enterprise & Strategic Architecture"));
        assert!(reference
            .content
            .contains("## 3. Integration & Communication Architecture"));
        assert!(!reference
            .content
            .contains("2. Application & Software Architecture"));
    }

    #[test]
    fn empty_root_still_renders_curated_blocks() {
        let root = TempDir::new().unwrap();
        let reference = generate_at(root.path()).unwrap();
        assert!(reference
            .content
            .contains("## 11. Architectural Qualities (Non-Functional)"));
        assert!(reference.content.contains("## Recommended Naming Convention"));
    }

    #[test]
    fn dry_run_previews_without_touching_disk() {
        let root = TempDir::new().unwrap();
        let target = catalog::reference_path_at(root.path());

        let outcome = run_at(root.path(), RunMode::DryRun).unwrap();
        match outcome {
            Outcome::Preview {
                head,
                total_chars,
                truncated,
            } => {
                assert!(head.chars().count() <= PREVIEW_CHAR_LIMIT);
                assert!(total_chars > PREVIEW_CHAR_LIMIT, "curated blocks alone exceed the preview limit");
                assert!(truncated);
            }
            other => panic!("expected preview outcome, got {other:?}"),
        }
        assert!(!target.exists(), "dry run must not create the reference");
    }

    #[test]
    fn dry_run_leaves_an_existing_reference_untouched() {
        let root = TempDir::new().unwrap();
        run_at(root.path(), RunMode::Write).unwrap();
        let target = catalog::reference_path_at(root.path());
        let before = fs::read_to_string(&target).unwrap();

        run_at(root.path(), RunMode::DryRun).unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), before);
    }

    #[test]
    fn write_then_check_reports_in_sync() {
        let root = TempDir::new().unwrap();
        seed_section(root.path(), 4, "# Cloud\n\n### Compute\n- Serverless\n");

        let written = run_at(root.path(), RunMode::Write).unwrap();
        match written {
            Outcome::Written {
                path,
                section_count,
                total_chars,
            } => {
                assert!(path.ends_with(
                    "architecture-general/10-practicality-taxonomy/architecture_taxonomy_reference.md"
                ));
                assert_eq!(section_count, 11);
                assert!(total_chars > 0);
            }
            other => panic!("expected written outcome, got {other:?}"),
        }

        let checked = run_at(root.path(), RunMode::Check).unwrap();
        assert_eq!(checked, Outcome::Check(CheckStatus::InSync));
    }

    #[test]
    fn readme_edits_after_write_are_drift() {
        let root = TempDir::new().unwrap();
        seed_section(root.path(), 4, "# Cloud\n\n### Compute\n- Serverless\n");
        run_at(root.path(), RunMode::Write).unwrap();

        seed_section(root.path(), 4, "# Cloud\n\n### Compute\n- Containers\n");
        let checked = run_at(root.path(), RunMode::Check).unwrap();
        assert_eq!(checked, Outcome::Check(CheckStatus::Drifted));
    }

    #[test]
    fn check_against_missing_reference_reports_missing() {
        let root = TempDir::new().unwrap();
        let checked = run_at(root.path(), RunMode::Check).unwrap();
        assert_eq!(checked, Outcome::Check(CheckStatus::Missing));
    }
}
