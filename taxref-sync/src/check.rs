//! Sync check — compares freshly generated content against the reference
//! on disk, ignoring the timestamp line.

use std::io::ErrorKind;
use std::path::Path;

use regex::Regex;

use taxref_core::catalog;

use crate::error::{io_err, SyncError};
use crate::writer::normalize_line_endings;

/// The one line excluded from comparison.
const TIMESTAMP_LINE: &str = r"\*\*Last updated\*\*:.*\n";

/// Outcome of a sync check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    /// On-disk content matches freshly generated content.
    InSync,
    /// The reference exists but its content differs.
    Drifted,
    /// The reference file does not exist.
    Missing,
}

/// Compare `fresh` against the reference under `root`.
///
/// Contents are compared after stripping the timestamp line from both
/// sides and trimming surrounding whitespace; differing contents are only
/// flagged, never diffed.
pub fn check_at(root: &Path, fresh: &str) -> Result<CheckStatus, SyncError> {
    let path = catalog::reference_path_at(root);
    let existing = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(CheckStatus::Missing),
        Err(err) => return Err(io_err(path, err)),
    };

    let pattern = Regex::new(TIMESTAMP_LINE)?;
    let existing_clean = strip_timestamp_line(&pattern, &normalize_line_endings(&existing));
    let fresh_clean = strip_timestamp_line(&pattern, &normalize_line_endings(fresh));

    if existing_clean.trim() == fresh_clean.trim() {
        Ok(CheckStatus::InSync)
    } else {
        tracing::debug!("reference drift detected at {}", path.display());
        Ok(CheckStatus::Drifted)
    }
}

fn strip_timestamp_line(pattern: &Regex, content: &str) -> String {
    pattern.replace_all(content, "").into_owned()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
