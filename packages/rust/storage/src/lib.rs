//! JSON knowledge-base store.
//!
//! The [`KnowledgeBase`] struct wraps the single JSON file holding the full
//! ordered array of records. The whole array lives in memory during a run
//! and is overwritten on every [`KnowledgeBase::persist`].
//!
//! **Load rules:** a missing or corrupt store is treated as an empty store,
//! never a fatal error — a fresh extraction run starts from whatever state
//! can be recovered, which may be none.

use std::path::{Path, PathBuf};

use docbase_shared::{DocbaseError, KnowledgeRecord, Result};
use tracing::{debug, warn};

/// In-memory handle over the knowledge-base JSON file.
#[derive(Debug)]
pub struct KnowledgeBase {
    path: PathBuf,
    records: Vec<KnowledgeRecord>,
}

impl KnowledgeBase {
    /// Load the store at `path`, or start empty when the file is missing
    /// or cannot be parsed.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        let records = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<Vec<KnowledgeRecord>>(&content) {
                Ok(records) => {
                    debug!(path = %path.display(), count = records.len(), "loaded knowledge base");
                    records
                }
                Err(e) => {
                    warn!(
                        path = %path.display(),
                        error = %e,
                        "knowledge base is corrupt, starting from an empty store"
                    );
                    Vec::new()
                }
            },
            Err(e) => {
                debug!(path = %path.display(), error = %e, "no existing knowledge base");
                Vec::new()
            }
        };

        Self { path, records }
    }

    /// Location of the backing JSON file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The full ordered record set.
    pub fn records(&self) -> &[KnowledgeRecord] {
        &self.records
    }

    /// Append a record. Ids are the caller's responsibility; the emitter
    /// keeps one running counter per extraction run.
    pub fn push(&mut self, record: KnowledgeRecord) {
        self.records.push(record);
    }

    /// Drop all records and truncate the file to an empty array.
    pub fn reset(&mut self) -> Result<()> {
        self.records.clear();
        self.persist()
    }

    /// Overwrite the backing file with the current record set.
    ///
    /// Output is UTF-8, pretty-printed with 2-space indentation, and keeps
    /// non-ASCII characters literal (not escaped).
    pub fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| DocbaseError::io(parent, e))?;
            }
        }

        let json = serde_json::to_string_pretty(&self.records)
            .map_err(|e| DocbaseError::Store(format!("serialize knowledge base: {e}")))?;

        std::fs::write(&self.path, json).map_err(|e| DocbaseError::io(&self.path, e))?;

        debug!(path = %self.path.display(), count = self.records.len(), "knowledge base persisted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u64, about: &str, text: &str) -> KnowledgeRecord {
        KnowledgeRecord {
            id,
            about: about.into(),
            text: text.into(),
        }
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let kb = KnowledgeBase::load(dir.path().join("kb.json"));
        assert!(kb.is_empty());
    }

    #[test]
    fn corrupt_file_loads_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("kb.json");
        std::fs::write(&path, "{not json at all").expect("write");

        let kb = KnowledgeBase::load(&path);
        assert!(kb.is_empty());
    }

    #[test]
    fn persist_and_reload_roundtrip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("kb.json");

        let mut kb = KnowledgeBase::load(&path);
        kb.push(record(1, "Getting Started", "Install the tool."));
        kb.push(record(2, "Getting Started, Requirements", "Needs network access."));
        kb.persist().expect("persist");

        let reloaded = KnowledgeBase::load(&path);
        assert_eq!(reloaded.records(), kb.records());
    }

    #[test]
    fn persist_is_pretty_and_keeps_non_ascii() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("kb.json");

        let mut kb = KnowledgeBase::load(&path);
        kb.push(record(1, "Déploiement", "Prêt à l'emploi."));
        kb.persist().expect("persist");

        let content = std::fs::read_to_string(&path).expect("read");
        assert!(content.contains("\n  {"), "expected 2-space indentation");
        assert!(content.contains("Déploiement"), "non-ASCII must stay literal");
        assert!(!content.contains("\\u"), "non-ASCII must not be escaped");
    }

    #[test]
    fn reset_truncates_to_empty_array() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("kb.json");

        let mut kb = KnowledgeBase::load(&path);
        kb.push(record(1, "a", "b"));
        kb.persist().expect("persist");

        kb.reset().expect("reset");
        assert_eq!(std::fs::read_to_string(&path).expect("read"), "[]");

        let reloaded = KnowledgeBase::load(&path);
        assert!(reloaded.is_empty());
    }

    #[test]
    fn persist_creates_parent_directories() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested/out/kb.json");

        let mut kb = KnowledgeBase::load(&path);
        kb.push(record(1, "a", "b"));
        kb.persist().expect("persist");
        assert!(path.exists());
    }
}
