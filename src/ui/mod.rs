//! Status reporting for batch commands
//!
//! Every per-file outcome and the final summary go through the [`Reporter`]
//! trait, so commands pick console output or nothing at all from their flags.
//! Status lines are user output, not log records: they go to stdout, while
//! failures always go to stderr.

use console::Style;

use crate::operations::{BatchSummary, Change, FileOutcome, SkipReason};

/// Receives batch progress
pub trait Reporter {
    /// Called once per file, in processing order
    fn outcome(&mut self, path: &str, outcome: &FileOutcome);

    /// Called once after the last file
    fn summary(&mut self, summary: &BatchSummary);
}

/// Prints styled status lines to the terminal
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter {
    dry_run: bool,
    quiet: bool,
}

impl ConsoleReporter {
    pub fn new(dry_run: bool, quiet: bool) -> Self {
        Self { dry_run, quiet }
    }
}

impl Reporter for ConsoleReporter {
    fn outcome(&mut self, path: &str, outcome: &FileOutcome) {
        if let FileOutcome::Failed(err) = outcome {
            eprintln!("{}", failure_line(path, err));
            return;
        }
        if self.quiet {
            return;
        }
        if let Some(line) = status_line(path, outcome, self.dry_run) {
            println!("{line}");
        }
    }

    fn summary(&mut self, summary: &BatchSummary) {
        if !self.quiet {
            println!("{}", summary_line(summary, self.dry_run));
        }
    }
}

/// Reports nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn outcome(&mut self, _path: &str, _outcome: &FileOutcome) {}

    fn summary(&mut self, _summary: &BatchSummary) {}
}

/// Render the stdout line for a non-failed outcome.
///
/// Unchanged files produce no line.
pub fn status_line(path: &str, outcome: &FileOutcome, dry_run: bool) -> Option<String> {
    let path_style = Style::new().bold();
    match outcome {
        FileOutcome::Updated(Change::TitleAdded(title)) => Some(format!(
            "✅ {} to {}: {}",
            if dry_run { "Would add title" } else { "Added title" },
            path_style.apply_to(path),
            Style::new().green().apply_to(&title.text)
        )),
        FileOutcome::Updated(Change::TitleQuoted) => Some(format!(
            "✅ {} in {}",
            if dry_run { "Would quote title" } else { "Quoted title" },
            path_style.apply_to(path)
        )),
        FileOutcome::Skipped(SkipReason::TitleExists) => Some(format!(
            "⏭️  Skipping {} {}",
            path,
            Style::new().dim().apply_to("(title already exists)")
        )),
        FileOutcome::Unchanged | FileOutcome::Failed(_) => None,
    }
}

fn failure_line(path: &str, err: &impl std::fmt::Display) -> String {
    format!(
        "❌ {} {}: {}",
        Style::new().red().bold().apply_to("Failed to process"),
        path,
        err
    )
}

/// Render the closing summary line.
pub fn summary_line(summary: &BatchSummary, dry_run: bool) -> String {
    let changed = if dry_run { "would change" } else { "changed" };
    let mut line = format!(
        "✨ Processed {} {}: {} {}, {} skipped, {} unchanged",
        summary.processed,
        if summary.processed == 1 { "file" } else { "files" },
        summary.updated,
        changed,
        summary.skipped,
        summary.unchanged
    );
    if summary.failed > 0 {
        line.push_str(&format!(
            ", {}",
            Style::new().red().apply_to(format!("{} failed", summary.failed))
        ));
    }
    line
}
