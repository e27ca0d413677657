//! Quote titles command

use tracing::debug;

use super::{GlobalOptions, finish};
use crate::cli::QuoteTitlesArgs;
use crate::discovery::{DiscoveryOptions, discover_documents};
use crate::error::Result;
use crate::operations::{self, WriteMode, run_batch};
use crate::ui::ConsoleReporter;

/// Run quote-titles command
pub fn run(global: &GlobalOptions, args: QuoteTitlesArgs) -> Result<()> {
    let workspace = global.open_workspace()?;
    let config = &workspace.config.quotes;

    let dir = workspace.resolve(args.dir.as_deref().unwrap_or(&config.dir));
    let pattern = args.pattern.as_deref().unwrap_or(&config.pattern);

    let files = discover_documents(
        &dir,
        &DiscoveryOptions {
            pattern,
            recursive: false,
            exclude: &[],
            exclude_base: &workspace.root,
        },
    )?;
    debug!(dir = %dir.display(), files = files.len(), "quoting titles");

    let mode = WriteMode::from_dry_run(args.dry_run || args.check);
    let mut reporter = ConsoleReporter::new(mode.is_dry_run(), global.quiet);
    let summary = run_batch(
        &files,
        |path| workspace.display_path(path),
        &mut reporter,
        |path| operations::quotes::process_file(path, mode),
    );

    finish(&summary, args.check)
}
