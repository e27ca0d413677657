//! File system errors

use std::io;
use std::path::Path;

use super::DocmatterError;

/// Creates a directory not found error
pub fn directory_not_found(path: &Path) -> DocmatterError {
    DocmatterError::DirectoryNotFound {
        path: path.display().to_string(),
    }
}

/// Maps an error from reading a document to the matching variant.
///
/// `read_to_string` reports undecodable content as `InvalidData`.
pub fn read_failed(path: &Path, err: &io::Error) -> DocmatterError {
    let path = path.display().to_string();
    match err.kind() {
        io::ErrorKind::NotFound => DocmatterError::FileNotFound { path },
        io::ErrorKind::InvalidData => DocmatterError::FileNotUtf8 { path },
        _ => DocmatterError::FileReadFailed {
            path,
            reason: err.to_string(),
        },
    }
}

/// Creates a write failed error
pub fn write_failed(path: &Path, reason: impl ToString) -> DocmatterError {
    DocmatterError::FileWriteFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}
