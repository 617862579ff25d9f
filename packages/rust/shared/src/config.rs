//! Application configuration for docbase.
//!
//! User config lives at `~/.docbase/docbase.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DocbaseError, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "docbase.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".docbase";

// ---------------------------------------------------------------------------
// Config structs (matching docbase.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Extraction defaults.
    #[serde(default)]
    pub extract: ExtractDefaults,

    /// Samples catalog defaults.
    #[serde(default)]
    pub samples: SamplesDefaults,
}

/// `[extract]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractDefaults {
    /// Default knowledge-base output file.
    #[serde(default = "default_kb_output")]
    pub output: String,

    /// Leading lines discarded from every section-style document.
    #[serde(default = "default_preamble_lines")]
    pub preamble_lines: usize,

    /// Path/name keyword routing files to the reference-document parser.
    #[serde(default = "default_reference_keyword")]
    pub reference_keyword: String,
}

impl Default for ExtractDefaults {
    fn default() -> Self {
        Self {
            output: default_kb_output(),
            preamble_lines: default_preamble_lines(),
            reference_keyword: default_reference_keyword(),
        }
    }
}

fn default_kb_output() -> String {
    "knowledge_base.json".into()
}
fn default_preamble_lines() -> usize {
    5
}
fn default_reference_keyword() -> String {
    "cli".into()
}

/// `[samples]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplesDefaults {
    /// Default samples catalog output file.
    #[serde(default = "default_samples_output")]
    pub output: String,
}

impl Default for SamplesDefaults {
    fn default() -> Self {
        Self {
            output: default_samples_output(),
        }
    }
}

fn default_samples_output() -> String {
    "samples_examples.json".into()
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.docbase/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| DocbaseError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.docbase/docbase.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| DocbaseError::io(path, e))?;

    toml::from_str(&content)
        .map_err(|e| DocbaseError::config(format!("failed to parse {}: {e}", path.display())))
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| DocbaseError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| DocbaseError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| DocbaseError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize default config");
        assert!(toml_str.contains("knowledge_base.json"));
        assert!(toml_str.contains("samples_examples.json"));
    }

    #[test]
    fn config_roundtrip() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize");
        let parsed: AppConfig = toml::from_str(&toml_str).expect("deserialize");
        assert_eq!(parsed.extract.preamble_lines, 5);
        assert_eq!(parsed.extract.reference_keyword, "cli");
    }

    #[test]
    fn partial_config_fills_defaults() {
        let toml_str = r#"
[extract]
output = "/tmp/kb.json"
"#;
        let config: AppConfig = toml::from_str(toml_str).expect("parse");
        assert_eq!(config.extract.output, "/tmp/kb.json");
        assert_eq!(config.extract.preamble_lines, 5);
        assert_eq!(config.samples.output, "samples_examples.json");
    }
}
