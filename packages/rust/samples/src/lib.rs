//! Sample-project catalog scanner.
//!
//! Walks the immediate subdirectories of a samples root, extracts each
//! project's compose file and Dockerfile, detects the technologies in use,
//! and emits a JSON catalog of [`SampleEntry`] records.

mod detect;

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use docbase_shared::{DocbaseError, Result, SampleEntry};

pub use detect::{detect_technologies, generate_description};

/// Compose file names checked in priority order.
const COMPOSE_NAMES: [&str; 4] = [
    "compose.yaml",
    "compose.yml",
    "docker-compose.yaml",
    "docker-compose.yml",
];

/// Scan all sample projects under `root` (one project per subdirectory).
///
/// Projects with neither a compose file nor a Dockerfile are skipped with a
/// log line. Subdirectories are visited in sorted order so the catalog is
/// deterministic.
pub fn scan_samples(root: &Path) -> Result<Vec<SampleEntry>> {
    if !root.is_dir() {
        return Err(DocbaseError::validation(format!(
            "samples root '{}' is not a directory",
            root.display()
        )));
    }

    let mut project_dirs: Vec<PathBuf> = std::fs::read_dir(root)
        .map_err(|e| DocbaseError::io(root, e))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_dir())
        .collect();
    project_dirs.sort();

    let mut entries = Vec::new();
    for dir in &project_dirs {
        match scan_project(dir)? {
            Some(entry) => entries.push(entry),
            None => {
                info!(
                    project = %dir.display(),
                    "no compose file or Dockerfile, skipping sample"
                );
            }
        }
    }

    info!(root = %root.display(), count = entries.len(), "samples scan complete");
    Ok(entries)
}

/// Write the catalog as a pretty-printed JSON array.
pub fn write_catalog(path: &Path, entries: &[SampleEntry]) -> Result<()> {
    let json = serde_json::to_string_pretty(entries)
        .map_err(|e| DocbaseError::Store(format!("serialize samples catalog: {e}")))?;
    std::fs::write(path, json).map_err(|e| DocbaseError::io(path, e))
}

/// Extract one project's catalog entry, or `None` when the directory has
/// neither a compose file nor a Dockerfile.
fn scan_project(dir: &Path) -> Result<Option<SampleEntry>> {
    let project_name = dir
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    debug!(project = %project_name, "scanning sample project");

    let compose_path = find_compose_file(dir);
    let dockerfile_path = find_dockerfile(dir);

    if compose_path.is_none() && dockerfile_path.is_none() {
        return Ok(None);
    }

    let compose = compose_path.map(|p| read_or_warn(&p)).unwrap_or_default();
    let dockerfile = dockerfile_path.map(|p| read_or_warn(&p)).unwrap_or_default();

    let technologies = detect_technologies(&dockerfile, &compose);
    let description = generate_description(&project_name, &technologies);

    Ok(Some(SampleEntry {
        project_name,
        compose,
        dockerfile,
        technologies,
        description,
    }))
}

/// Locate the project's compose file, trying the well-known names in order.
fn find_compose_file(dir: &Path) -> Option<PathBuf> {
    COMPOSE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|p| p.is_file())
}

/// Locate the first `Dockerfile` anywhere under the project directory.
fn find_dockerfile(dir: &Path) -> Option<PathBuf> {
    WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .find(|e| e.file_type().is_file() && e.file_name() == "Dockerfile")
        .map(|e| e.into_path())
}

/// Read a file's contents, degrading to empty with a warning on failure.
fn read_or_warn(path: &Path) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read sample file");
            String::new()
        }
    }
}
