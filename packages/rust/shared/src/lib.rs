//! Shared types, error model, and configuration for docbase.
//!
//! This crate is the foundation depended on by all other docbase crates.
//! It provides:
//! - [`DocbaseError`] — the unified error type
//! - Domain types ([`KnowledgeRecord`], [`Section`], [`SampleEntry`])
//! - Configuration ([`AppConfig`], [`ExtractConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, ExtractDefaults, SamplesDefaults, config_dir, config_file_path, init_config,
    load_config, load_config_from,
};
pub use error::{DocbaseError, Result};
pub use types::{ExtractConfig, KnowledgeRecord, SampleEntry, Section};
