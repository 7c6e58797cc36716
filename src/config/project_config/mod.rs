//! Project-level configuration support
//!
//! Loads configuration from `seo-gate.toml` or `.seo-gaterc.json` in the
//! working directory.
//!
//! # Configuration Format
//!
//! ```toml
//! # seo-gate.toml
//!
//! [workflow]
//! submission_threshold = 66
//!
//! [store]
//! dir = ".seo-gate"
//! first_id = 100
//! ```

use crate::store::{JsonFileStore, DEFAULT_FIRST_ID};
use crate::workflow::{SubmissionGate, DEFAULT_SUBMISSION_THRESHOLD};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const TOML_CONFIG_FILE: &str = "seo-gate.toml";
pub const JSON_CONFIG_FILE: &str = ".seo-gaterc.json";

/// Configuration loaded from seo-gate.toml or similar
#[derive(Debug, Clone, Deserialize, Default)]
pub struct SeoGateConfig {
    /// Workflow policy
    #[serde(default)]
    pub workflow: WorkflowConfig,

    /// Article store location
    #[serde(default)]
    pub store: StoreConfig,
}

/// Workflow policy
#[derive(Debug, Clone, Deserialize)]
pub struct WorkflowConfig {
    /// Minimum score for submission (default: 66)
    #[serde(default = "default_submission_threshold")]
    pub submission_threshold: u8,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            submission_threshold: default_submission_threshold(),
        }
    }
}

fn default_submission_threshold() -> u8 {
    DEFAULT_SUBMISSION_THRESHOLD
}

/// Store location and id seed
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Directory holding articles.json and images.json, relative to the
    /// working directory unless absolute (default: .seo-gate)
    #[serde(default = "default_store_dir")]
    pub dir: PathBuf,

    /// First id handed out by an empty store (default: 100)
    #[serde(default = "default_first_id")]
    pub first_id: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            dir: default_store_dir(),
            first_id: default_first_id(),
        }
    }
}

fn default_store_dir() -> PathBuf {
    PathBuf::from(".seo-gate")
}

fn default_first_id() -> u64 {
    DEFAULT_FIRST_ID
}

impl SeoGateConfig {
    /// Submission gate built from the configured threshold
    pub fn gate(&self) -> SubmissionGate {
        SubmissionGate::new(self.workflow.submission_threshold)
    }

    /// Store directory resolved against `base`
    pub fn store_dir(&self, base: &Path) -> PathBuf {
        if self.store.dir.is_absolute() {
            self.store.dir.clone()
        } else {
            base.join(&self.store.dir)
        }
    }

    /// JSON file store for this configuration
    pub fn json_store(&self, base: &Path) -> JsonFileStore {
        JsonFileStore::new(self.store_dir(base)).with_first_id(self.store.first_id)
    }
}

/// Load configuration from `dir`.
///
/// Searches for configuration files in this order:
/// 1. `seo-gate.toml`
/// 2. `.seo-gaterc.json`
///
/// Returns default configuration if no usable config file is found.
pub fn load_config(dir: &Path) -> SeoGateConfig {
    // Try TOML first (preferred format)
    let toml_path = dir.join(TOML_CONFIG_FILE);
    if toml_path.exists() {
        match load_toml_config(&toml_path) {
            Ok(config) => {
                debug!("Loaded config from {}", toml_path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {}", toml_path.display(), e);
            }
        }
    }

    // Try JSON
    let json_path = dir.join(JSON_CONFIG_FILE);
    if json_path.exists() {
        match load_json_config(&json_path) {
            Ok(config) => {
                debug!("Loaded config from {}", json_path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {}", json_path.display(), e);
            }
        }
    }

    debug!("No config found, using defaults");
    SeoGateConfig::default()
}

/// Load configuration from a TOML file
fn load_toml_config(path: &Path) -> anyhow::Result<SeoGateConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: SeoGateConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Load configuration from a JSON file
fn load_json_config(path: &Path) -> anyhow::Result<SeoGateConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: SeoGateConfig = serde_json::from_str(&content)?;
    Ok(config)
}

/// Commented template written by `seo-gate init`
pub const CONFIG_TEMPLATE: &str = r#"# seo-gate configuration

[workflow]
# Minimum SEO score (0-100) an article needs before it can be submitted
submission_threshold = 66

[store]
# Directory holding articles.json and images.json
dir = ".seo-gate"
# First id handed out by an empty store
first_id = 100
"#;

#[cfg(test)]
mod tests;
