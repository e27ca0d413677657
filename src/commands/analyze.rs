//! Analyze command implementation

use std::io::Write;

use tracing::debug;

use super::GlobalOptions;
use crate::analyzer::{AnalysisResult, Analyzer, output};
use crate::cli::{AnalyzeArgs, OutputFormat};
use crate::config::AnalyzeConfig;
use crate::error::{DocmatterError, Result};

/// Run analyze command
pub fn run(global: &GlobalOptions, args: AnalyzeArgs) -> Result<()> {
    let workspace = global.open_workspace()?;
    let config = with_overrides(workspace.config.analyze.clone(), &args);

    let show_progress = !global.quiet && console::Term::stderr().is_term();
    let analyzer = Analyzer::new(&config).with_progress(show_progress);
    let results = analyzer.analyze_path(&args.path)?;
    debug!(path = %args.path.display(), files = results.len(), "analysis complete");

    if results.is_empty() {
        eprintln!("No markdown files found");
        return Ok(());
    }

    let mut stdout = std::io::stdout().lock();
    write_report(&mut stdout, args.format, &results, args.detailed)?;
    stdout.flush()?;

    if args.check {
        let failed = results.iter().filter(|r| r.status.is_fail()).count();
        if failed > 0 {
            return Err(DocmatterError::ReadabilityCheckFailed { failed });
        }
    }

    Ok(())
}

/// Apply command line threshold overrides to the configured ones.
fn with_overrides(mut config: AnalyzeConfig, args: &AnalyzeArgs) -> AnalyzeConfig {
    let thresholds = &mut config.thresholds;
    if let Some(max_grade) = args.max_grade {
        thresholds.max_flesch_kincaid_grade = max_grade;
    }
    if let Some(max_ari) = args.max_ari {
        thresholds.max_ari = max_ari;
    }
    if let Some(max_lines) = args.max_lines {
        thresholds.max_lines = max_lines;
    }
    config
}

fn write_report<W: Write>(
    w: &mut W,
    format: OutputFormat,
    results: &[AnalysisResult],
    detailed: bool,
) -> Result<()> {
    match format {
        OutputFormat::Table => output::table(w, results, detailed),
        OutputFormat::Json => output::json(w, results),
        OutputFormat::Markdown => output::markdown(w, results),
        OutputFormat::Summary => output::summary(w, results),
    }
}
