//! Header-delimited section splitting.
//!
//! Single pass over a document's lines, partitioning them into [`Section`]s
//! at header boundaries. The splitter never fails: malformed or header-less
//! input degrades to fewer (or zero) emitted sections, never an error.

use docbase_shared::Section;
use tracing::trace;

use crate::classifier::{Header, HeaderClassifier};

/// Split a document's lines (preamble already stripped) into ordered sections.
///
/// Boundary rules:
/// - A main header (depth-1 `#` or bold-emphasis form) closes the current
///   section and opens a new one with that header as its sole trail entry.
/// - Once a main header has been seen, a sub-header extends the current
///   trail: body lines gathered so far are closed off under the old trail,
///   and a new section continues with the extended trail.
/// - Before any main header, a depth-2 header starts a fresh section of its
///   own; deeper headers extend the current trail as above.
/// - Non-header lines are trimmed and appended to the current body.
pub fn split_sections(lines: &[String], classifier: &dyn HeaderClassifier) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();
    let mut current = Section::default();
    let mut seen_main = false;

    for line in lines {
        match classifier.classify(line) {
            Some(Header::Main { text }) => {
                if !current.is_empty() {
                    sections.push(std::mem::take(&mut current));
                }
                current = Section::with_header(text);
                seen_main = true;
            }
            Some(Header::Sub { depth, text }) => {
                if !seen_main && depth == 2 {
                    if !current.is_empty() {
                        sections.push(std::mem::take(&mut current));
                    }
                    current = Section::with_header(text);
                } else {
                    extend_trail(&mut sections, &mut current, text);
                }
            }
            None => {
                current.body.push(line.trim().to_string());
            }
        }
    }

    if !current.is_empty() {
        sections.push(current);
    }

    trace!(count = sections.len(), "document split into sections");
    sections
}

/// Extend the current trail with a sub-header.
///
/// Body lines already gathered belong to the shorter trail, so a section
/// holding any body content is closed off first; the successor section
/// carries the full previous trail plus the new header text.
fn extend_trail(sections: &mut Vec<Section>, current: &mut Section, text: String) {
    let has_body = current.body.iter().any(|l| !l.is_empty());
    if has_body {
        let mut trail = current.trail.clone();
        trail.push(text);
        sections.push(std::mem::take(current));
        *current = Section {
            trail,
            body: Vec::new(),
        };
    } else {
        current.body.clear();
        current.trail.push(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::MixedDialectClassifier;

    fn split(doc: &str) -> Vec<Section> {
        let lines: Vec<String> = doc.lines().map(String::from).collect();
        split_sections(&lines, &MixedDialectClassifier)
    }

    #[test]
    fn single_header_with_body() {
        let sections = split("# Getting Started\nInstall the tool.");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].trail, vec!["Getting Started"]);
        assert_eq!(sections[0].body, vec!["Install the tool."]);
    }

    #[test]
    fn sub_header_closes_body_and_extends_trail() {
        let sections =
            split("# Getting Started\nInstall the tool.\n## Requirements\nNeeds network access.");
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].trail, vec!["Getting Started"]);
        assert_eq!(sections[0].body, vec!["Install the tool."]);
        assert_eq!(sections[1].trail, vec!["Getting Started", "Requirements"]);
        assert_eq!(sections[1].body, vec!["Needs network access."]);
    }

    #[test]
    fn bodyless_sub_header_folds_into_trail() {
        let sections = split("# Top\n## Mid\n### Deep\ncontent");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].trail, vec!["Top", "Mid", "Deep"]);
        assert_eq!(sections[0].body, vec!["content"]);
    }

    #[test]
    fn second_main_header_starts_new_section() {
        let sections = split("# One\nfirst\n# Two\nsecond");
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].trail, vec!["One"]);
        assert_eq!(sections[1].trail, vec!["Two"]);
        assert_eq!(sections[1].body, vec!["second"]);
    }

    #[test]
    fn bold_header_acts_as_main() {
        let sections = split("**Overview**\nSystem summary.");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].trail, vec!["Overview"]);
        assert_eq!(sections[0].body, vec!["System summary."]);
    }

    #[test]
    fn depth_two_before_main_starts_sections() {
        let sections = split("## First\nalpha\n## Second\nbeta");
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].trail, vec!["First"]);
        assert_eq!(sections[0].body, vec!["alpha"]);
        assert_eq!(sections[1].trail, vec!["Second"]);
    }

    #[test]
    fn deep_header_before_main_folds_into_trail() {
        let sections = split("### Deep\ncontent");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].trail, vec!["Deep"]);
        assert_eq!(sections[0].body, vec!["content"]);
    }

    #[test]
    fn blank_lines_between_headers_do_not_split() {
        let sections = split("# Top\n\n## Mid\ncontent");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].trail, vec!["Top", "Mid"]);
        assert_eq!(sections[0].body, vec!["content"]);
    }

    #[test]
    fn headerless_document_yields_one_trailless_section() {
        let sections = split("just some prose\nacross two lines");
        assert_eq!(sections.len(), 1);
        assert!(sections[0].trail.is_empty());
        assert_eq!(sections[0].body.len(), 2);
    }

    #[test]
    fn empty_document_yields_nothing() {
        assert!(split("").is_empty());
    }

    #[test]
    fn body_lines_are_trimmed() {
        let sections = split("# H\n   indented text   ");
        assert_eq!(sections[0].body, vec!["indented text"]);
    }

    #[test]
    fn trail_keeps_accumulating_after_main() {
        // Depth ordering is not interpreted once a main header is active.
        let sections = split("# Top\nintro\n### A\nalpha\n## B\nbeta");
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].trail, vec!["Top"]);
        assert_eq!(sections[1].trail, vec!["Top", "A"]);
        assert_eq!(sections[2].trail, vec!["Top", "A", "B"]);
        assert_eq!(sections[2].body, vec!["beta"]);
    }
}
