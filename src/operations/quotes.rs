//! Quote frontmatter titles containing a colon

use std::path::Path;

use super::{Change, FileOutcome, WriteMode, read_document};
use crate::error::Result;
use crate::frontmatter;

/// Quote the title of the document at `path` if it needs it.
pub fn process_file(path: &Path, mode: WriteMode) -> FileOutcome {
    FileOutcome::from_result(quote_title(path, mode))
}

fn quote_title(path: &Path, mode: WriteMode) -> Result<FileOutcome> {
    let content = read_document(path)?;
    match frontmatter::quote_title(&content) {
        Some(updated) => {
            mode.commit(path, &updated)?;
            Ok(FileOutcome::Updated(Change::TitleQuoted))
        }
        None => Ok(FileOutcome::Unchanged),
    }
}
