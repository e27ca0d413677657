//! Per-command configuration sections

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// `add-titles` settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TitlesConfig {
    /// Documentation root, relative to the workspace
    pub root: PathBuf,

    /// Glob matched against paths relative to `root`
    pub pattern: String,

    /// Workspace-relative path prefixes that are never touched
    pub exclude: Vec<String>,
}

impl Default for TitlesConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("docs"),
            pattern: "**/*.md".to_string(),
            exclude: vec!["docs/tags.md".to_string(), "docs/includes/".to_string()],
        }
    }
}

/// `quote-titles` settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QuotesConfig {
    /// Directory scanned (non-recursively), relative to the workspace
    pub dir: PathBuf,

    /// Glob matched against file names in `dir`
    pub pattern: String,
}

impl Default for QuotesConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("docs/blog/posts"),
            pattern: "*.md".to_string(),
        }
    }
}

/// `analyze` settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzeConfig {
    /// File names skipped when analyzing a directory
    pub skip: Vec<String>,

    pub thresholds: Thresholds,
}

impl Default for AnalyzeConfig {
    fn default() -> Self {
        Self {
            skip: vec!["CHANGELOG.md".to_string(), "CONTRIBUTING.md".to_string()],
            thresholds: Thresholds::default(),
        }
    }
}

/// Pass/fail limits for readability checks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Thresholds {
    pub max_flesch_kincaid_grade: f64,
    pub max_ari: f64,
    pub max_gunning_fog: f64,
    pub min_flesch_reading_ease: f64,
    /// 0 disables the line limit
    pub max_lines: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            max_flesch_kincaid_grade: 14.0,
            max_ari: 14.0,
            max_gunning_fog: 18.0,
            min_flesch_reading_ease: 30.0,
            max_lines: 375,
        }
    }
}
