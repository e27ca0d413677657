//! CLI definitions using clap derive API
//!
//! Argument types for each command live in their own submodule:
//! - titles: add-titles and quote-titles arguments
//! - analyze: analyze arguments and report formats
//! - completions: completions arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod analyze;
pub mod completions;
pub mod titles;

pub use analyze::{AnalyzeArgs, OutputFormat};
pub use completions::CompletionsArgs;
pub use titles::{AddTitlesArgs, QuoteTitlesArgs};

/// Docmatter - documentation frontmatter maintenance
///
/// Keeps Markdown frontmatter titles present and valid, and checks documentation readability.
#[derive(Parser, Debug)]
#[command(
    name = "docmatter",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Maintain frontmatter titles and readability of Markdown documentation",
    long_about = "Docmatter adds missing frontmatter titles to Markdown documents, quotes titles \
                  that would break YAML parsing, and analyzes documentation for readability and \
                  structure.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  docmatter add-titles                   \x1b[90m# Add missing titles under docs/\x1b[0m\n   \
                  docmatter add-titles --check           \x1b[90m# Fail if any title is missing\x1b[0m\n   \
                  docmatter quote-titles                 \x1b[90m# Quote blog post titles with colons\x1b[0m\n   \
                  docmatter analyze docs/ -f markdown    \x1b[90m# Readability report as Markdown\x1b[0m\n   \
                  docmatter config                       \x1b[90m# Show effective configuration\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Workspace directory (defaults to current directory)
    #[arg(long, short = 'w', global = true, env = "DOCMATTER_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Configuration file (defaults to docmatter.yaml in the workspace)
    #[arg(long, short = 'c', global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Only print errors
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add missing frontmatter titles
    AddTitles(AddTitlesArgs),

    /// Quote frontmatter titles that contain a colon
    QuoteTitles(QuoteTitlesArgs),

    /// Analyze documentation readability and structure
    Analyze(AnalyzeArgs),

    /// Print the effective configuration
    Config,

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
