//! Structural extractor — parses one README into title, description and
//! bulleted subsections.
//!
//! The extractor understands a narrow structural subset of markdown, which
//! is all the taxonomy READMEs use: one H1 title, a leading paragraph, and
//! H3 subsections whose content is dash-bulleted lines. It is not a
//! markdown parser.

use regex::Regex;

use crate::error::CoreError;

/// Structured content of one README.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtractedDocument {
    /// Content of the first H1 line; empty when the file has none.
    pub title: String,
    /// First paragraph after the title, joined with single spaces.
    pub description: String,
    /// H3 groups in file order, each with its bullet items in file order.
    pub subsections: Vec<Subsection>,
}

/// One H3 group and its bullet items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subsection {
    pub title: String,
    pub items: Vec<String>,
}

/// README extractor with precompiled item-cleanup patterns.
///
/// Create once with [`Extractor::new`] and reuse.
pub struct Extractor {
    /// `→ explanation` suffix on a bullet item.
    arrow: Regex,
    /// Markdown link, collapsed to its label.
    link: Regex,
}

impl Extractor {
    pub fn new() -> Result<Self, CoreError> {
        Ok(Extractor {
            arrow: Regex::new(r"\s*→.*$")?,
            link: Regex::new(r"\[([^\]]+)\]\([^)]+\)")?,
        })
    }

    /// Extract the structured content of one README. Pure.
    pub fn extract(&self, content: &str) -> ExtractedDocument {
        let lines: Vec<&str> = content.trim().lines().collect();
        ExtractedDocument {
            title: extract_title(&lines),
            description: extract_description(&lines),
            subsections: self.extract_subsections(&lines),
        }
    }

    fn extract_subsections(&self, lines: &[&str]) -> Vec<Subsection> {
        let mut subsections = Vec::new();
        let mut current: Option<Subsection> = None;

        for line in lines {
            if let Some(title) = line.strip_prefix("### ") {
                if let Some(done) = current.take() {
                    subsections.push(done);
                }
                current = Some(Subsection {
                    title: title.trim().to_string(),
                    items: Vec::new(),
                });
            } else if let Some(open) = current.as_mut() {
                if let Some(raw) = line.trim().strip_prefix("- ") {
                    let item = self.clean_item(raw);
                    if !item.is_empty() {
                        open.items.push(item);
                    }
                }
            }
        }

        if let Some(done) = current.take() {
            subsections.push(done);
        }
        subsections
    }

    /// Strip the arrow suffix, collapse `[label](url)` to `label`, trim.
    fn clean_item(&self, raw: &str) -> String {
        let without_arrow = self.arrow.replace(raw, "");
        let without_links = self.link.replace_all(&without_arrow, "$1");
        without_links.trim().to_string()
    }
}

fn extract_title(lines: &[&str]) -> String {
    lines
        .iter()
        .find_map(|line| line.strip_prefix("# "))
        .map(|title| title.trim().to_string())
        .unwrap_or_default()
}

fn extract_description(lines: &[&str]) -> String {
    let mut in_description = false;
    let mut collected: Vec<&str> = Vec::new();

    for line in lines {
        if line.starts_with("# ") {
            in_description = true;
            continue;
        }
        if !in_description {
            continue;
        }
        if line.trim().is_empty() {
            // Blank lines between the title and the first paragraph are
            // tolerated; the first blank after collected text ends it.
            if collected.is_empty() {
                continue;
            }
            break;
        }
        if line.starts_with('#') {
            break;
        }
        collected.push(line.trim());
    }

    collected.join(" ")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
