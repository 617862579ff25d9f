//! Core pipeline orchestration for docbase.
//!
//! This crate ties together the directory walk, document reading, section
//! splitting, and record emission into the end-to-end `extract` workflow.

pub mod emit;
pub mod pipeline;
pub mod reader;
pub mod walker;
