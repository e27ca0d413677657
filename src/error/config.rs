//! Configuration errors

use std::fmt::Display;
use std::io;
use std::path::Path;

use super::DocmatterError;

/// An explicitly requested configuration file does not exist
pub fn not_found(path: &Path) -> DocmatterError {
    DocmatterError::ConfigNotFound {
        path: path.display().to_string(),
    }
}

/// The configuration file exists but could not be read
pub fn read_failed(path: &Path, err: &io::Error) -> DocmatterError {
    DocmatterError::ConfigReadFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// The YAML is malformed or names a key docmatter does not know.
///
/// `origin` is the file path, or a label when parsing a string.
pub fn parse_failed(origin: &str, err: &serde_yaml::Error) -> DocmatterError {
    DocmatterError::ConfigParseFailed {
        path: origin.to_string(),
        reason: err.to_string(),
    }
}

/// A title or quote glob from the config file or the command line does not
/// compile
pub fn invalid_pattern(pattern: &str, err: &impl Display) -> DocmatterError {
    DocmatterError::ConfigInvalid {
        message: format!("invalid glob pattern '{pattern}': {err}"),
    }
}
