//! Anchor derivation — URL-safe identifiers for intra-document links.

/// Derive the URL anchor for a heading's display text.
///
/// Lowercases, drops every character outside ASCII alphanumerics, spaces
/// and hyphens, then collapses each internal run of whitespace and hyphens
/// to a single hyphen. The derivation is idempotent.
pub fn anchor_for(title: &str) -> String {
    let mut anchor = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for ch in title.to_lowercase().chars() {
        if ch.is_whitespace() || ch == '-' {
            pending_hyphen = !anchor.is_empty();
            continue;
        }
        if !ch.is_ascii_alphanumeric() {
            continue;
        }
        if pending_hyphen {
            anchor.push('-');
            pending_hyphen = false;
        }
        anchor.push(ch);
    }

    anchor
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
