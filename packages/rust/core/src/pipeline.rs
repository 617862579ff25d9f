//! End-to-end `extract` pipeline: walk → read → split → emit → store.
//!
//! Fully sequential and synchronous. Every file's records are appended to
//! the in-memory store and the store is persisted before moving on, so a
//! crash mid-run leaves the JSON file at the last fully processed document.

use std::path::PathBuf;
use std::time::Instant;

use tracing::{debug, info};

use docbase_markdown::{MixedDialectClassifier, parse_reference, split_sections};
use docbase_shared::{DocbaseError, ExtractConfig, KnowledgeRecord, Result};
use docbase_storage::KnowledgeBase;

use crate::emit::emit_records;
use crate::reader;
use crate::walker::{self, DocumentKind};

/// Result of an `extract` run.
#[derive(Debug)]
pub struct ExtractResult {
    /// Records appended by this run.
    pub records_emitted: usize,
    /// Files that contributed at least one record.
    pub files_processed: usize,
    /// Files that yielded no records (header-less, empty, or short
    /// reference documents).
    pub files_skipped: usize,
    /// Total records in the store after the run.
    pub store_len: usize,
    /// Path of the knowledge-base JSON file.
    pub store_path: PathBuf,
    /// Total elapsed time.
    pub elapsed: std::time::Duration,
}

/// Progress callback for reporting pipeline status.
pub trait ProgressReporter: Send + Sync {
    /// Called when entering a new phase.
    fn phase(&self, name: &str);
    /// Called before each file is parsed.
    fn file_started(&self, path: &str, current: usize, total: usize);
    /// Called when the pipeline completes.
    fn done(&self, result: &ExtractResult);
}

/// No-op progress reporter for headless/test usage.
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn phase(&self, _name: &str) {}
    fn file_started(&self, _path: &str, _current: usize, _total: usize) {}
    fn done(&self, _result: &ExtractResult) {}
}

/// Run the full extraction pipeline over a documentation tree.
///
/// The id counter is seeded once from the store's length at the start of the
/// run and advanced in memory per emitted record, so ids stay unique and
/// monotonic across files without re-reading the store per document.
pub fn extract(config: &ExtractConfig, progress: &dyn ProgressReporter) -> Result<ExtractResult> {
    let start = Instant::now();

    if !config.root.is_dir() {
        return Err(DocbaseError::validation(format!(
            "extraction root '{}' is not a directory",
            config.root.display()
        )));
    }

    info!(
        root = %config.root.display(),
        output = %config.output.display(),
        "starting extraction"
    );

    progress.phase("Scanning documentation tree");
    let files = walker::walk_markdown_files(&config.root, &config.reference_keyword)?;

    progress.phase("Loading knowledge base");
    let mut kb = KnowledgeBase::load(&config.output);
    if config.reset {
        kb.reset()?;
    }
    let initial_len = kb.len();
    let mut next_id = initial_len as u64 + 1;

    progress.phase("Extracting sections");
    let classifier = MixedDialectClassifier;
    let total = files.len();
    let mut files_processed = 0usize;
    let mut files_skipped = 0usize;

    for (i, file) in files.iter().enumerate() {
        progress.file_started(&file.path.display().to_string(), i + 1, total);

        let emitted = match file.kind {
            DocumentKind::Section => {
                let lines = reader::read_section_document(&file.path, config.preamble_lines)?;
                let sections = split_sections(&lines, &classifier);
                let records = emit_records(&sections, &mut next_id);
                let count = records.len();
                for record in records {
                    kb.push(record);
                }
                count
            }
            DocumentKind::Reference => {
                let lines = reader::read_lines(&file.path)?;
                match parse_reference(&file.path, &lines) {
                    Some(doc) => {
                        kb.push(KnowledgeRecord {
                            id: next_id,
                            about: doc.about,
                            text: doc.text,
                        });
                        next_id += 1;
                        1
                    }
                    None => 0,
                }
            }
        };

        if emitted > 0 {
            files_processed += 1;
        } else {
            files_skipped += 1;
        }

        debug!(path = %file.path.display(), emitted, "file done");

        // Flush after every file so a crash loses at most the current one.
        kb.persist()?;
    }

    let result = ExtractResult {
        records_emitted: kb.len() - initial_len,
        files_processed,
        files_skipped,
        store_len: kb.len(),
        store_path: kb.path().to_path_buf(),
        elapsed: start.elapsed(),
    };

    progress.done(&result);

    info!(
        records_emitted = result.records_emitted,
        files_processed = result.files_processed,
        files_skipped = result.files_skipped,
        store_len = result.store_len,
        elapsed_ms = result.elapsed.as_millis(),
        "extraction complete"
    );

    Ok(result)
}
