//! Markdown section extraction for docbase.
//!
//! Splits heterogeneous Markdown documents into header-delimited sections
//! using a heuristic header classifier, and parses reference-style (CLI)
//! documents with a fixed line-offset scheme.

mod classifier;
mod reference;
mod splitter;

pub use classifier::{Header, HeaderClassifier, MixedDialectClassifier};
pub use reference::{ReferenceDoc, parse_reference};
pub use splitter::split_sections;
