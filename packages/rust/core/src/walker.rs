//! Recursive enumeration of Markdown documents under a root.

use std::path::{Path, PathBuf};

use docbase_shared::{DocbaseError, Result};
use tracing::debug;
use walkdir::WalkDir;

/// How a discovered document should be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Header-splitting path: preamble strip + section splitter.
    Section,
    /// Fixed line-offset path for command-reference documents.
    Reference,
}

/// A Markdown file discovered during the walk.
#[derive(Debug, Clone)]
pub struct MarkdownFile {
    pub path: PathBuf,
    pub kind: DocumentKind,
}

/// Enumerate all `.md` files (case-insensitive) under `root`.
///
/// Entries are visited sorted by file name within each directory, so the
/// resulting order — and therefore id assignment — is deterministic across
/// runs and platforms. A file is routed to the reference parser when its
/// path relative to `root` contains `reference_keyword` (case-insensitive).
pub fn walk_markdown_files(root: &Path, reference_keyword: &str) -> Result<Vec<MarkdownFile>> {
    let keyword = reference_keyword.to_lowercase();
    let mut files = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf());
            match e.into_io_error() {
                Some(io) => DocbaseError::io(path, io),
                None => {
                    DocbaseError::validation(format!("filesystem loop at {}", path.display()))
                }
            }
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let is_markdown = path
            .file_name()
            .map(|n| n.to_string_lossy().to_lowercase().ends_with(".md"))
            .unwrap_or(false);
        if !is_markdown {
            continue;
        }

        let relative = path.strip_prefix(root).unwrap_or(path);
        let kind = if !keyword.is_empty()
            && relative.to_string_lossy().to_lowercase().contains(&keyword)
        {
            DocumentKind::Reference
        } else {
            DocumentKind::Section
        };

        files.push(MarkdownFile {
            path: path.to_path_buf(),
            kind,
        });
    }

    debug!(
        root = %root.display(),
        count = files.len(),
        "markdown walk complete"
    );
    Ok(files)
}
