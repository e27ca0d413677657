//! Configuration file handling for docmatter
//!
//! This module contains data structures for `docmatter.yaml`, the optional
//! per-workspace configuration. Every key has a default, so an absent file,
//! an empty file and a partial file are all valid.

mod sections;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, config};

pub use sections::{AnalyzeConfig, QuotesConfig, Thresholds, TitlesConfig};

/// Configuration file looked up in the workspace root
pub const CONFIG_FILE_NAME: &str = "docmatter.yaml";

/// Workspace configuration (docmatter.yaml)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Settings for `add-titles`
    pub titles: TitlesConfig,

    /// Settings for `quote-titles`
    pub quotes: QuotesConfig,

    /// Settings for `analyze`
    pub analyze: AnalyzeConfig,
}

impl Config {
    /// Parse configuration from a YAML string. `origin` names the source in
    /// error messages.
    pub fn from_yaml(yaml: &str, origin: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|e| config::parse_failed(origin, &e))
    }

    /// Serialize configuration to a YAML string
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Load the configuration for a workspace.
    ///
    /// An explicit path must exist; otherwise `docmatter.yaml` in the
    /// workspace is used when present, and defaults when not.
    pub fn load(workspace_root: &Path, explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) if !path.is_file() => {
                return Err(config::not_found(path));
            }
            Some(path) => path.to_path_buf(),
            None => {
                let path = workspace_root.join(CONFIG_FILE_NAME);
                if !path.is_file() {
                    debug!(path = %path.display(), "no configuration file, using defaults");
                    return Ok(Self::default());
                }
                path
            }
        };

        debug!(path = %path.display(), "loading configuration");
        let content = fs::read_to_string(&path).map_err(|e| config::read_failed(&path, &e))?;
        Self::from_yaml(&content, &path.display().to_string())
    }
}
