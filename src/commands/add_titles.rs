//! Add titles command
//!
//! Walks the documentation root and gives every document without a
//! frontmatter `title` one taken from its first H1 or its file name.

use tracing::debug;

use super::{GlobalOptions, finish};
use crate::cli::AddTitlesArgs;
use crate::discovery::{DiscoveryOptions, discover_documents};
use crate::error::Result;
use crate::operations::{self, WriteMode, run_batch};
use crate::ui::ConsoleReporter;

/// Run add-titles command
pub fn run(global: &GlobalOptions, args: AddTitlesArgs) -> Result<()> {
    let workspace = global.open_workspace()?;
    let config = &workspace.config.titles;

    let root = workspace.resolve(args.root.as_deref().unwrap_or(&config.root));
    let pattern = args.pattern.as_deref().unwrap_or(&config.pattern);
    let mut exclude = config.exclude.clone();
    exclude.extend(args.exclude);

    let files = discover_documents(
        &root,
        &DiscoveryOptions {
            pattern,
            recursive: true,
            exclude: &exclude,
            exclude_base: &workspace.root,
        },
    )?;
    debug!(root = %root.display(), files = files.len(), "adding titles");

    let mode = WriteMode::from_dry_run(args.dry_run || args.check);
    let mut reporter = ConsoleReporter::new(mode.is_dry_run(), global.quiet);
    let summary = run_batch(
        &files,
        |path| workspace.display_path(path),
        &mut reporter,
        |path| operations::titles::process_file(path, mode),
    );

    finish(&summary, args.check)
}
