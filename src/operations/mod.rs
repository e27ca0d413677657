//! Per-file operations and the batch runner
//!
//! Each operation reads one document, applies a pure frontmatter transform,
//! and writes the result back only when it changed. Errors never escape a
//! single file: they become [`FileOutcome::Failed`] and the batch continues.

pub mod quotes;
pub mod titles;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info_span};

use crate::error::{DocmatterError, Result, fs as fs_error};
use crate::frontmatter::ResolvedTitle;
use crate::ui::Reporter;

/// Whether changes are written to disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    Apply,
    DryRun,
}

impl WriteMode {
    pub fn from_dry_run(dry_run: bool) -> Self {
        if dry_run { Self::DryRun } else { Self::Apply }
    }

    pub fn is_dry_run(self) -> bool {
        self == Self::DryRun
    }

    /// Write `content` to `path` unless this is a dry run.
    pub fn commit(self, path: &Path, content: &str) -> Result<()> {
        match self {
            Self::Apply => write_document(path, content),
            Self::DryRun => {
                debug!(path = %path.display(), "dry run, not writing");
                Ok(())
            }
        }
    }
}

/// What changed in a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    TitleAdded(ResolvedTitle),
    TitleQuoted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    TitleExists,
}

/// Result of processing one file
#[derive(Debug)]
pub enum FileOutcome {
    Updated(Change),
    Skipped(SkipReason),
    Unchanged,
    Failed(DocmatterError),
}

impl FileOutcome {
    /// Collapse a fallible per-file result into an outcome.
    pub fn from_result(result: Result<FileOutcome>) -> Self {
        result.unwrap_or_else(FileOutcome::Failed)
    }
}

/// Counts for one batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub processed: usize,
    pub updated: usize,
    pub skipped: usize,
    pub unchanged: usize,
    pub failed: usize,
}

impl BatchSummary {
    fn record(&mut self, outcome: &FileOutcome) {
        self.processed += 1;
        match outcome {
            FileOutcome::Updated(_) => self.updated += 1,
            FileOutcome::Skipped(_) => self.skipped += 1,
            FileOutcome::Unchanged => self.unchanged += 1,
            FileOutcome::Failed(_) => self.failed += 1,
        }
    }
}

/// Run `process` over every file in order, reporting each outcome.
///
/// `display` renders a path for status lines.
pub fn run_batch<D, F>(
    files: &[PathBuf],
    display: D,
    reporter: &mut dyn Reporter,
    mut process: F,
) -> BatchSummary
where
    D: Fn(&Path) -> String,
    F: FnMut(&Path) -> FileOutcome,
{
    let mut summary = BatchSummary::default();

    for path in files {
        let _span = info_span!("file", path = %path.display()).entered();
        let outcome = process(path);
        reporter.outcome(&display(path), &outcome);
        summary.record(&outcome);
    }

    reporter.summary(&summary);
    summary
}

/// Read a document as UTF-8 text.
pub fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| fs_error::read_failed(path, &e))
}

/// Replace a document's content atomically.
///
/// The new content goes to a temporary file next to the real document,
/// which then takes over its permissions and is renamed over it. A symlinked
/// document is written through, so the link itself survives.
pub fn write_document(path: &Path, content: &str) -> Result<()> {
    let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let permissions = fs::metadata(&target).map(|m| m.permissions()).ok();

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| fs_error::write_failed(path, e))?;
    tmp.write_all(content.as_bytes())
        .map_err(|e| fs_error::write_failed(path, e))?;
    if let Some(permissions) = permissions {
        fs::set_permissions(tmp.path(), permissions)
            .map_err(|e| fs_error::write_failed(path, e))?;
    }
    tmp.persist(&target)
        .map_err(|e| fs_error::write_failed(path, e.error))?;

    debug!(path = %path.display(), bytes = content.len(), "wrote document");
    Ok(())
}
