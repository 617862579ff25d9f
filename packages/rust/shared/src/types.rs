//! Core domain types for docbase knowledge bases.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// KnowledgeRecord
// ---------------------------------------------------------------------------

/// A single entry in the knowledge base JSON array.
///
/// Ids are positive, unique, and assigned monotonically in emission order
/// across a whole extraction run; they are never reused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeRecord {
    /// Monotonic identifier, starting at 1.
    pub id: u64,
    /// Comma-joined header trail describing the section's topic.
    pub about: String,
    /// Concatenated body lines of the section, headers excluded.
    pub text: String,
}

// ---------------------------------------------------------------------------
// Section
// ---------------------------------------------------------------------------

/// A transient header-delimited slice of a document, produced by the
/// section splitter and consumed by the record emitter.
///
/// A section is opened when a main (or first-seen) header is encountered,
/// accumulates body lines until the next boundary, and is flushed when
/// closed or at end-of-document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    /// Ordered header texts accumulated for this section.
    pub trail: Vec<String>,
    /// Trimmed body lines (blank lines included; filtered at emission).
    pub body: Vec<String>,
}

impl Section {
    /// A section with a single header and no body yet.
    pub fn with_header(text: impl Into<String>) -> Self {
        Self {
            trail: vec![text.into()],
            body: Vec::new(),
        }
    }

    /// True when the section has neither headers nor body content.
    pub fn is_empty(&self) -> bool {
        self.trail.is_empty() && self.body.is_empty()
    }
}

// ---------------------------------------------------------------------------
// SampleEntry
// ---------------------------------------------------------------------------

/// One project in the samples catalog JSON array.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleEntry {
    /// Directory name of the sample project.
    pub project_name: String,
    /// Raw contents of the compose file, or empty if absent.
    pub compose: String,
    /// Raw contents of the Dockerfile, or empty if absent.
    pub dockerfile: String,
    /// Detected technologies, deduplicated.
    pub technologies: Vec<String>,
    /// Generated one-line description.
    pub description: String,
}

// ---------------------------------------------------------------------------
// ExtractConfig
// ---------------------------------------------------------------------------

/// Runtime extraction configuration — merged from config file + CLI flags.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Root of the Markdown documentation tree.
    pub root: PathBuf,
    /// Path of the knowledge-base JSON file.
    pub output: PathBuf,
    /// Leading lines discarded from every section-style document.
    pub preamble_lines: usize,
    /// Path/name keyword routing files to the reference-document parser.
    pub reference_keyword: String,
    /// Truncate the store before extracting.
    pub reset: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serialization_shape() {
        let record = KnowledgeRecord {
            id: 1,
            about: "Getting Started".into(),
            text: "Install the tool.".into(),
        };

        let json = serde_json::to_string(&record).expect("serialize");
        assert_eq!(
            json,
            r#"{"id":1,"about":"Getting Started","text":"Install the tool."}"#
        );
    }

    #[test]
    fn record_roundtrip() {
        let record = KnowledgeRecord {
            id: 7,
            about: "Déploiement, Réseau".into(),
            text: "Le réseau est configuré.".into(),
        };

        let json = serde_json::to_string_pretty(&record).expect("serialize");
        // Non-ASCII is preserved literally, not escaped.
        assert!(json.contains("Déploiement"));

        let parsed: KnowledgeRecord = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, record);
    }

    #[test]
    fn sample_entry_uses_camel_case() {
        let entry = SampleEntry {
            project_name: "flask-postgres".into(),
            compose: String::new(),
            dockerfile: "FROM python:3.12".into(),
            technologies: vec!["Python".into()],
            description: "demo".into(),
        };

        let json = serde_json::to_string(&entry).expect("serialize");
        assert!(json.contains("\"projectName\""));
        assert!(!json.contains("project_name"));
    }

    #[test]
    fn empty_section_detection() {
        assert!(Section::default().is_empty());
        assert!(!Section::with_header("Overview").is_empty());

        let body_only = Section {
            trail: vec![],
            body: vec!["text".into()],
        };
        assert!(!body_only.is_empty());
    }
}
