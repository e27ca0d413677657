use clap::Parser;
use std::path::PathBuf;

/// Arguments for the add-titles command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Add titles under the configured root:\n    docmatter add-titles\n\n\
                  Add titles under another root:\n    docmatter add-titles site/content\n\n\
                  Skip a directory:\n    docmatter add-titles --exclude docs/snippets/\n\n\
                  Fail in CI when a title is missing:\n    docmatter add-titles --check")]
pub struct AddTitlesArgs {
    /// Documentation root, relative to the workspace (defaults to `titles.root`)
    pub root: Option<PathBuf>,

    /// Workspace-relative path prefix to leave untouched, in addition to the configured ones
    #[arg(long, short = 'e', value_name = "PREFIX")]
    pub exclude: Vec<String>,

    /// Glob pattern for documents, relative to the root
    #[arg(long, short = 'p', value_name = "GLOB")]
    pub pattern: Option<String>,

    /// Show what would change without writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Exit with an error if any file would change (implies --dry-run)
    #[arg(long)]
    pub check: bool,
}

/// Arguments for the quote-titles command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Quote titles in the configured posts directory:\n    docmatter quote-titles\n\n\
                  Quote titles in another directory:\n    docmatter quote-titles docs/news\n\n\
                  Preview changes:\n    docmatter quote-titles --dry-run")]
pub struct QuoteTitlesArgs {
    /// Directory to scan, relative to the workspace (defaults to `quotes.dir`)
    pub dir: Option<PathBuf>,

    /// Glob pattern for file names in the directory
    #[arg(long, short = 'p', value_name = "GLOB")]
    pub pattern: Option<String>,

    /// Show what would change without writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Exit with an error if any file would change (implies --dry-run)
    #[arg(long)]
    pub check: bool,
}
