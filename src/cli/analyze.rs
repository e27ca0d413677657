use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Report format for analysis results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Console table
    #[default]
    Table,
    /// Pretty-printed JSON array
    Json,
    /// GitHub-flavoured Markdown report
    Markdown,
    /// Aggregate Markdown summary
    Summary,
}

/// Arguments for the analyze command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Analyze a single file:\n    docmatter analyze docs/quickstart.md\n\n\
                  Analyze a directory as JSON:\n    docmatter analyze docs/ --format json\n\n\
                  Fail when a file is too hard to read:\n    docmatter analyze docs/ --check --max-grade 12")]
pub struct AnalyzeArgs {
    /// Markdown file or directory to analyze
    pub path: PathBuf,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Show all metrics in the table
    #[arg(long)]
    pub detailed: bool,

    /// Exit with an error if any file fails its thresholds
    #[arg(long)]
    pub check: bool,

    /// Maximum Flesch-Kincaid grade level
    #[arg(long, value_name = "GRADE")]
    pub max_grade: Option<f64>,

    /// Maximum Automated Readability Index
    #[arg(long, value_name = "SCORE")]
    pub max_ari: Option<f64>,

    /// Maximum lines per file (0 to disable)
    #[arg(long, value_name = "LINES")]
    pub max_lines: Option<usize>,
}
