//! Error types and handling for docmatter
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`config`]: Configuration errors
//! - [`fs`]: File system errors

pub mod config;
pub mod fs;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for docmatter operations
#[derive(Error, Diagnostic, Debug)]
pub enum DocmatterError {
    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(
        code(docmatter::config::not_found),
        help("Create the file or omit --config to use docmatter.yaml from the workspace")
    )]
    ConfigNotFound { path: String },

    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(docmatter::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(docmatter::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(docmatter::config::invalid))]
    ConfigInvalid { message: String },

    // File system errors
    #[error("Directory not found: {path}")]
    #[diagnostic(
        code(docmatter::fs::directory_not_found),
        help("Pass the directory explicitly or set it in docmatter.yaml")
    )]
    DirectoryNotFound { path: String },

    #[error("File not found: {path}")]
    #[diagnostic(code(docmatter::fs::not_found))]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(docmatter::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("File is not valid UTF-8 text: {path}")]
    #[diagnostic(code(docmatter::fs::not_utf8))]
    FileNotUtf8 { path: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(docmatter::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(docmatter::fs::io_error))]
    IoError { message: String },

    // Batch errors
    #[error("{failed} file(s) could not be processed")]
    #[diagnostic(
        code(docmatter::batch::failed),
        help("See the per-file errors above; the remaining files were processed")
    )]
    BatchFailed { failed: usize },

    #[error("{count} file(s) would be changed")]
    #[diagnostic(
        code(docmatter::batch::changes_needed),
        help("Run the same command without --check to apply the changes")
    )]
    ChangesNeeded { count: usize },

    // Analyzer errors
    #[error("{failed} file(s) failed readability checks")]
    #[diagnostic(code(docmatter::analyze::check_failed))]
    ReadabilityCheckFailed { failed: usize },

    #[error("Failed to write output: {reason}")]
    #[diagnostic(code(docmatter::output::write_failed))]
    OutputFailed { reason: String },

    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(docmatter::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },
}

impl From<std::io::Error> for DocmatterError {
    fn from(err: std::io::Error) -> Self {
        DocmatterError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for DocmatterError {
    fn from(err: serde_yaml::Error) -> Self {
        config::parse_failed("unknown", &err)
    }
}

impl From<serde_json::Error> for DocmatterError {
    fn from(err: serde_json::Error) -> Self {
        DocmatterError::OutputFailed {
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, DocmatterError>;
