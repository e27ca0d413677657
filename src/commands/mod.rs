//! Command implementations for the docmatter CLI

pub mod add_titles;
pub mod analyze;
pub mod completions;
pub mod config;
pub mod quote_titles;
pub mod version;

use std::path::PathBuf;

use crate::error::{DocmatterError, Result};
use crate::operations::BatchSummary;
use crate::workspace::Workspace;

/// Options shared by every command
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub workspace: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub quiet: bool,
}

impl GlobalOptions {
    pub fn open_workspace(&self) -> Result<Workspace> {
        Workspace::open(self.workspace.clone(), self.config.as_deref())
    }
}

/// Turn a finished batch into the command result.
///
/// Failed files take precedence over `--check`.
fn finish(summary: &BatchSummary, check: bool) -> Result<()> {
    if summary.failed > 0 {
        return Err(DocmatterError::BatchFailed {
            failed: summary.failed,
        });
    }
    if check && summary.updated > 0 {
        return Err(DocmatterError::ChangesNeeded {
            count: summary.updated,
        });
    }
    Ok(())
}
