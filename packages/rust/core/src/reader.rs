//! Document reading with front-matter preamble stripping.

use std::path::Path;

use docbase_shared::{DocbaseError, Result};

/// Read a document as raw lines, with no preamble handling.
///
/// An unreadable file is the one fatal error class of an extraction run;
/// it propagates with the offending path attached.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| DocbaseError::io(path, e))?;
    Ok(content.lines().map(String::from).collect())
}

/// Read a document and discard its fixed leading preamble.
///
/// Source documents carry a uniform front-matter block (title/slug metadata)
/// across the first `preamble_lines` lines; it is not semantic content and
/// is dropped regardless of what it holds. Shorter files yield no lines.
pub fn read_section_document(path: &Path, preamble_lines: usize) -> Result<Vec<String>> {
    let mut lines = read_lines(path)?;
    if lines.len() <= preamble_lines {
        return Ok(Vec::new());
    }
    Ok(lines.split_off(preamble_lines))
}
