//! Document discovery for batch commands
//!
//! Walks a documentation root, keeps files matching a glob pattern, and drops
//! anything under a configured exclusion prefix.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;
use wax::{CandidatePath, Glob, Pattern};

use crate::error::{Result, config, fs};
use crate::workspace::to_forward_slashes;

/// How to walk a root and which files to keep
#[derive(Debug, Clone)]
pub struct DiscoveryOptions<'a> {
    /// Glob matched against paths relative to the walked root
    pub pattern: &'a str,

    /// Descend into subdirectories
    pub recursive: bool,

    /// Path prefixes (forward slashes, relative to `exclude_base`) to skip
    pub exclude: &'a [String],

    /// Directory the exclusion prefixes are relative to
    pub exclude_base: &'a Path,
}

/// Discover documents under `root`, sorted by path.
pub fn discover_documents(root: &Path, options: &DiscoveryOptions<'_>) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(fs::directory_not_found(root));
    }

    let glob =
        Glob::new(options.pattern).map_err(|e| config::invalid_pattern(options.pattern, &e))?;

    let mut walker = WalkDir::new(root).follow_links(true).sort_by_file_name();
    if !options.recursive {
        walker = walker.max_depth(1);
    }

    let mut documents = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(error = %err, "skipping unreadable directory entry");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = to_forward_slashes(entry.path().strip_prefix(root).unwrap_or(entry.path()));
        if glob.matched(&CandidatePath::from(relative.as_str())).is_none() {
            continue;
        }

        if is_excluded(entry.path(), options.exclude_base, options.exclude) {
            debug!(path = %entry.path().display(), "excluded");
            continue;
        }

        documents.push(entry.into_path());
    }

    debug!(root = %root.display(), count = documents.len(), "discovered documents");
    Ok(documents)
}

/// Whether `path`, relative to `base`, starts with any of the prefixes.
pub fn is_excluded(path: &Path, base: &Path, exclude: &[String]) -> bool {
    let relative = to_forward_slashes(path.strip_prefix(base).unwrap_or(path));
    exclude
        .iter()
        .any(|prefix| relative.starts_with(prefix.as_str()))
}
