//! Workspace resolution
//!
//! The workspace is the directory that configured roots and exclusion
//! prefixes are relative to. It defaults to the current directory.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::Config;
use crate::error::{DocmatterError, Result, fs};

/// A resolved workspace with its configuration loaded
#[derive(Debug, Clone)]
pub struct Workspace {
    /// Root directory of the workspace
    pub root: PathBuf,

    /// Effective configuration (docmatter.yaml or defaults)
    pub config: Config,
}

impl Workspace {
    /// Open the workspace at `root` (or the current directory) and load its
    /// configuration.
    pub fn open(root: Option<PathBuf>, config_path: Option<&Path>) -> Result<Self> {
        let root = get_workspace_path(root)?;
        if !root.is_dir() {
            return Err(fs::directory_not_found(&root));
        }

        let config = Config::load(&root, config_path)?;
        debug!(root = %root.display(), "opened workspace");
        Ok(Self { root, config })
    }

    /// Resolve a workspace-relative path. An absolute path, such as a root
    /// passed on the command line, replaces the workspace root entirely.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }

    /// Path for display: workspace-relative with forward slashes when the
    /// path is inside the workspace.
    pub fn display_path(&self, path: &Path) -> String {
        to_forward_slashes(path.strip_prefix(&self.root).unwrap_or(path))
    }
}

/// Get workspace path from CLI argument or current directory
fn get_workspace_path(workspace: Option<PathBuf>) -> Result<PathBuf> {
    match workspace {
        Some(path) => Ok(path),
        None => std::env::current_dir().map_err(|e| DocmatterError::IoError {
            message: format!("Failed to get current directory: {e}"),
        }),
    }
}

/// Convert a path to a string with forward slashes on every platform
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn open_with_explicit_root() {
        let temp = TempDir::new().unwrap();
        let workspace = Workspace::open(Some(temp.path().to_path_buf()), None).unwrap();
        assert_eq!(workspace.root, temp.path());
        assert_eq!(workspace.config, Config::default());
    }

    #[test]
    fn open_missing_root_fails() {
        let temp = TempDir::new().unwrap();
        let err = Workspace::open(Some(temp.path().join("missing")), None).unwrap_err();
        assert!(matches!(err, DocmatterError::DirectoryNotFound { .. }));
    }

    #[test]
    fn display_path_is_workspace_relative() {
        let temp = TempDir::new().unwrap();
        let workspace = Workspace::open(Some(temp.path().to_path_buf()), None).unwrap();
        let file = workspace.resolve(Path::new("docs/guides/index.md"));
        assert_eq!(workspace.display_path(&file), "docs/guides/index.md");
    }

    #[test]
    fn resolve_relative_and_absolute() {
        let temp = TempDir::new().unwrap();
        let workspace = Workspace::open(Some(temp.path().to_path_buf()), None).unwrap();

        assert_eq!(
            workspace.resolve(Path::new("docs")),
            temp.path().join("docs")
        );

        let elsewhere = TempDir::new().unwrap();
        assert_eq!(workspace.resolve(elsewhere.path()), elsewhere.path());
    }

    #[test]
    fn display_path_outside_workspace_is_unchanged() {
        let temp = TempDir::new().unwrap();
        let workspace = Workspace::open(Some(temp.path().to_path_buf()), None).unwrap();
        assert_eq!(
            workspace.display_path(Path::new("/elsewhere/a.md")),
            "/elsewhere/a.md"
        );
    }

    #[test]
    fn forward_slashes() {
        assert_eq!(to_forward_slashes(Path::new("docs/a.md")), "docs/a.md");
    }
}
