//! Configuration file handling.
//!
//! Settings load from `.ontosweep.toml` and are layered under CLI
//! arguments: anything given on the command line wins.

use crate::fetch::client::DEFAULT_BASE_URL;
use crate::report::DEFAULT_SAMPLE_ROWS;
use crate::selector;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Registry settings.
    #[serde(default)]
    pub registry: RegistryConfig,

    /// Obograph fetch settings.
    #[serde(default)]
    pub fetch: FetchConfig,

    /// Prefix selector settings.
    #[serde(default)]
    pub selector: SelectorConfig,

    /// Report output settings.
    #[serde(default)]
    pub report: ReportConfig,
}

/// Where the prefix-metadata registry comes from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// URL or local path of the registry JSON document.
    #[serde(default = "default_registry_source")]
    pub source: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            source: default_registry_source(),
        }
    }
}

fn default_registry_source() -> String {
    "https://raw.githubusercontent.com/biopragmatics/bioregistry/main/exports/registry/registry.json"
        .to_string()
}

/// Obograph document fetching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Base URL for per-prefix obograph documents.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    300
}

/// Prefix selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Prefixes excluded from every run.
    #[serde(default = "default_skip")]
    pub skip: Vec<String>,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            skip: default_skip(),
        }
    }
}

fn default_skip() -> Vec<String> {
    selector::DEFAULT_SKIP_PREFIXES
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Report output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Directory the four artifacts are written into.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Rows mirrored into the uncompressed sample.
    #[serde(default = "default_sample_rows")]
    pub sample_rows: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            sample_rows: default_sample_rows(),
        }
    }
}

fn default_output_dir() -> String {
    ".".to_string()
}

fn default_sample_rows() -> usize {
    DEFAULT_SAMPLE_ROWS
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but
    /// can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        let default_path = Path::new(".ontosweep.toml");
        if default_path.exists() {
            Ok(Some(Self::load(default_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence; only explicitly provided values
    /// override the file.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        if let Some(ref source) = args.registry {
            self.registry.source = source.clone();
        }
        if let Some(ref dir) = args.output_dir {
            self.report.output_dir = dir.display().to_string();
        }
    }

    /// The skip list as a set, for the selector.
    pub fn skip_set(&self) -> BTreeSet<String> {
        self.selector.skip.iter().cloned().collect()
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.fetch.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.report.sample_rows, 10);
        assert!(config.selector.skip.contains(&"gaz".to_string()));
    }

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
[registry]
source = "registry.json"

[fetch]
base_url = "http://mirror.example.org/obo"
timeout_seconds = 60

[selector]
skip = ["gaz"]

[report]
output_dir = "out"
sample_rows = 5
"#;

        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(config.registry.source, "registry.json");
        assert_eq!(config.fetch.base_url, "http://mirror.example.org/obo");
        assert_eq!(config.fetch.timeout_seconds, 60);
        assert_eq!(config.selector.skip, vec!["gaz"]);
        assert_eq!(config.report.output_dir, "out");
        assert_eq!(config.report.sample_rows, 5);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = toml::from_str("[report]\noutput_dir = \"out\"\n").unwrap();
        assert_eq!(config.report.output_dir, "out");
        assert_eq!(config.report.sample_rows, 10);
        assert_eq!(config.fetch.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_default_toml_generation() {
        let toml_str = Config::default_toml();
        assert!(toml_str.contains("[registry]"));
        assert!(toml_str.contains("[fetch]"));
        assert!(toml_str.contains("[selector]"));
        assert!(toml_str.contains("[report]"));
    }
}
