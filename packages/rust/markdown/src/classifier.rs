//! Heuristic header classification.
//!
//! The splitter's only knowledge of Markdown dialects lives behind
//! [`HeaderClassifier`], so alternate dialects can be supported without
//! touching the splitter's control flow.

use std::sync::LazyLock;

use regex::Regex;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A classified header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Header {
    /// Starts a brand-new section: a depth-1 `#` header or a
    /// bold-emphasis-wrapped line.
    Main { text: String },
    /// A `##`–`######` header; folded into the active section's trail
    /// or, in some pre-main-header cases, starting a new section.
    Sub { depth: u8, text: String },
}

impl Header {
    /// The header's display text.
    pub fn text(&self) -> &str {
        match self {
            Header::Main { text } | Header::Sub { text, .. } => text,
        }
    }
}

/// Decides whether a raw line is a header, and of what kind.
pub trait HeaderClassifier: Send + Sync {
    /// Classify a single line. `None` means body content.
    fn classify(&self, line: &str) -> Option<Header>;
}

// ---------------------------------------------------------------------------
// Fixed mixed-dialect implementation
// ---------------------------------------------------------------------------

/// Matches `#` through `######` followed by whitespace and text.
static HASH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.+)$").expect("hash header regex"));

/// Matches a line opening with a bold-emphasis marker (two or more `*`).
/// The closing marker, when present, is stripped from the captured text.
static BOLD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*{2,}\s*(.+)$").expect("bold header regex"));

/// The default classifier for documentation trees mixing ATX headers with
/// bold-emphasis pseudo-headers (`**Overview**` acting as a title line).
#[derive(Debug, Clone, Copy, Default)]
pub struct MixedDialectClassifier;

impl HeaderClassifier for MixedDialectClassifier {
    fn classify(&self, line: &str) -> Option<Header> {
        if let Some(caps) = HASH_RE.captures(line) {
            let depth = caps[1].len() as u8;
            let text = caps[2].trim().to_string();

            return Some(if depth == 1 {
                Header::Main { text }
            } else {
                Header::Sub { depth, text }
            });
        }

        if let Some(caps) = BOLD_RE.captures(line) {
            // `**Overview**` → `Overview`: drop the closing marker.
            let text = caps[1].trim_end_matches('*').trim().to_string();
            if !text.is_empty() {
                return Some(Header::Main { text });
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(line: &str) -> Option<Header> {
        MixedDialectClassifier.classify(line)
    }

    #[test]
    fn depth_one_is_main() {
        assert_eq!(
            classify("# Getting Started"),
            Some(Header::Main {
                text: "Getting Started".into()
            })
        );
    }

    #[test]
    fn deeper_hashes_are_sub() {
        assert_eq!(
            classify("## Requirements"),
            Some(Header::Sub {
                depth: 2,
                text: "Requirements".into()
            })
        );
        assert_eq!(
            classify("###### Fine Print"),
            Some(Header::Sub {
                depth: 6,
                text: "Fine Print".into()
            })
        );
    }

    #[test]
    fn seven_hashes_is_body() {
        assert_eq!(classify("####### too deep"), None);
    }

    #[test]
    fn hash_without_whitespace_is_body() {
        assert_eq!(classify("#hashtag"), None);
    }

    #[test]
    fn bold_wrapped_line_is_main() {
        assert_eq!(
            classify("**Overview**"),
            Some(Header::Main {
                text: "Overview".into()
            })
        );
    }

    #[test]
    fn bold_with_space_form_is_main() {
        // The spaced variant found in older documents.
        assert_eq!(
            classify("** Overview"),
            Some(Header::Main {
                text: "Overview".into()
            })
        );
    }

    #[test]
    fn bare_markers_are_body() {
        assert_eq!(classify("**"), None);
        assert_eq!(classify("****"), None);
    }

    #[test]
    fn plain_text_is_body() {
        assert_eq!(classify("Install the tool."), None);
        assert_eq!(classify(""), None);
        assert_eq!(classify("- a * bullet * list"), None);
    }
}
