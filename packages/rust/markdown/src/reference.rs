//! Fixed line-offset parser for reference-style (CLI) documents.
//!
//! These documents carry a uniform generated layout: four metadata lines,
//! a one-line summary on line 5, and the command reference body from line 6
//! onward. No section splitting applies.

use std::path::Path;

use tracing::warn;

/// A parsed reference document: at most one record candidate per file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceDoc {
    /// The summary line (exact 5th line, trimmed).
    pub about: String,
    /// Everything from line 6 onward, newline-joined and trimmed.
    pub text: String,
}

/// Parse a reference document's lines.
///
/// Returns `None` when the file has fewer than 5 lines (logged, non-fatal)
/// or when either field is empty after trimming.
pub fn parse_reference(source: &Path, lines: &[String]) -> Option<ReferenceDoc> {
    if lines.len() < 5 {
        warn!(
            path = %source.display(),
            line_count = lines.len(),
            "reference document has too few lines to parse, skipping"
        );
        return None;
    }

    let about = lines[4].trim().to_string();
    let text = lines[5..].join("\n").trim().to_string();

    if about.is_empty() || text.is_empty() {
        return None;
    }

    Some(ReferenceDoc { about, text })
}
