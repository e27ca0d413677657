//! Report writers for analysis results

use std::io::{self, Write};

use console::Style;

use super::{AnalysisResult, Status};
use crate::error::{DocmatterError, Result};

/// Readability bands for the summary's distribution table, by minimum
/// Flesch reading ease
const EASE_BANDS: [(f64, &str); 7] = [
    (90.0, "Very Easy (90+)"),
    (80.0, "Easy (80-89)"),
    (70.0, "Fairly Easy (70-79)"),
    (60.0, "Standard (60-69)"),
    (50.0, "Fairly Difficult (50-59)"),
    (30.0, "Difficult (30-49)"),
    (f64::NEG_INFINITY, "Very Difficult (<30)"),
];

fn output_error(err: io::Error) -> DocmatterError {
    DocmatterError::OutputFailed {
        reason: err.to_string(),
    }
}

/// Styled console table. `detailed` adds every metric.
pub fn table<W: Write>(w: &mut W, results: &[AnalysisResult], detailed: bool) -> Result<()> {
    write_table(w, results, detailed).map_err(output_error)
}

fn write_table<W: Write>(w: &mut W, results: &[AnalysisResult], detailed: bool) -> io::Result<()> {
    let width = results
        .iter()
        .map(|r| r.file.chars().count())
        .max()
        .unwrap_or(0)
        .max("File".len());
    let header = Style::new().bold();

    let mut columns = format!(
        "{:<width$}  {:>6}  {:>6}  {:>8}  {:>6}  {:>6}",
        "File", "Lines", "Words", "FK Grade", "ARI", "Flesch"
    );
    if detailed {
        columns.push_str(&format!(
            "  {:>6}  {:>6}  {:>6}  {:>8}  {:>6}  {:>5}",
            "CL", "Fog", "SMOG", "Headings", "Code", "Read"
        ));
    }
    writeln!(w, "{}  {}", header.apply_to(columns), header.apply_to("Status"))?;

    for r in results {
        let mut row = format!(
            "{:<width$}  {:>6}  {:>6}  {:>8.1}  {:>6.1}  {:>6.1}",
            r.file,
            r.structural.lines,
            r.structural.words,
            r.readability.flesch_kincaid_grade,
            r.readability.ari,
            r.readability.flesch_reading_ease
        );
        if detailed {
            let h = &r.headings;
            row.push_str(&format!(
                "  {:>6.1}  {:>6.1}  {:>6.1}  {:>8}  {:>5.0}%  {:>4}m",
                r.readability.coleman_liau,
                r.readability.gunning_fog,
                r.readability.smog,
                h.h1 + h.h2 + h.h3 + h.h4 + h.h5 + h.h6,
                r.composition.code_block_ratio * 100.0,
                r.structural.reading_time_minutes
            ));
        }
        writeln!(w, "{row}  {}", status_label(r.status))?;
    }

    let failed = results.iter().filter(|r| r.status.is_fail()).count();
    writeln!(w)?;
    writeln!(
        w,
        "{} analyzed, {} passed, {} failed",
        results.len(),
        results.len() - failed,
        failed
    )?;
    Ok(())
}

fn status_label(status: Status) -> String {
    match status {
        Status::Pass => Style::new().green().apply_to("PASS").to_string(),
        Status::Fail => Style::new().red().bold().apply_to("FAIL").to_string(),
    }
}

/// Pretty-printed JSON array.
pub fn json<W: Write>(w: &mut W, results: &[AnalysisResult]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *w, results)?;
    writeln!(w).map_err(output_error)
}

/// GitHub-flavoured Markdown report, failed files first.
pub fn markdown<W: Write>(w: &mut W, results: &[AnalysisResult]) -> Result<()> {
    write_markdown(w, results).map_err(output_error)
}

fn write_markdown<W: Write>(w: &mut W, results: &[AnalysisResult]) -> io::Result<()> {
    let totals = Totals::of(results);
    writeln!(w, "## Documentation Readability Report")?;
    writeln!(w)?;
    writeln!(
        w,
        "**{} files** analyzed | **{} passed** | **{} failed** | {} words | {} lines",
        results.len(),
        totals.passed,
        totals.failed,
        totals.words,
        totals.lines
    )?;
    writeln!(w)?;
    writeln!(w, "| File | Lines | Words | FK Grade | ARI | Flesch | Status |")?;
    writeln!(w, "|------|------:|------:|---------:|----:|-------:|:------:|")?;

    let mut sorted: Vec<&AnalysisResult> = results.iter().collect();
    sorted.sort_by(|a, b| {
        b.status
            .is_fail()
            .cmp(&a.status.is_fail())
            .then_with(|| a.file.cmp(&b.file))
    });

    for r in sorted {
        writeln!(
            w,
            "| `{}` | {} | {} | {:.1} | {:.1} | {:.1} | {} |",
            r.file,
            r.structural.lines,
            r.structural.words,
            r.readability.flesch_kincaid_grade,
            r.readability.ari,
            r.readability.flesch_reading_ease,
            if r.status.is_fail() { "❌" } else { "✅" }
        )?;
    }
    Ok(())
}

/// Aggregate Markdown summary with a reading-ease distribution.
pub fn summary<W: Write>(w: &mut W, results: &[AnalysisResult]) -> Result<()> {
    write_summary(w, results).map_err(output_error)
}

fn write_summary<W: Write>(w: &mut W, results: &[AnalysisResult]) -> io::Result<()> {
    let totals = Totals::of(results);

    writeln!(w, "## Documentation Quality Summary")?;
    writeln!(w)?;
    if totals.failed == 0 {
        writeln!(w, "✅ **All documentation meets readability standards**")?;
    } else {
        writeln!(w, "❌ **{} file(s) failed readability checks**", totals.failed)?;
    }
    writeln!(w)?;

    writeln!(w, "| Metric | Value |")?;
    writeln!(w, "|--------|------:|")?;
    writeln!(w, "| Files analyzed | {} |", results.len())?;
    writeln!(w, "| Passed | {} |", totals.passed)?;
    writeln!(w, "| Failed | {} |", totals.failed)?;
    writeln!(w, "| Total words | {} |", totals.words)?;
    writeln!(w, "| Total lines | {} |", totals.lines)?;
    writeln!(w, "| Avg reading time | {} min |", totals.words / 200)?;
    writeln!(w)?;

    if totals.failed > 0 {
        writeln!(w, "### Files Requiring Attention")?;
        writeln!(w)?;
        writeln!(w, "| File | FK Grade | Issue |")?;
        writeln!(w, "|------|:--------:|-------|")?;
        for r in results.iter().filter(|r| r.status.is_fail()) {
            let issue = r.issues.first().map_or("Threshold exceeded", String::as_str);
            writeln!(
                w,
                "| `{}` | {:.1} | {} |",
                r.file, r.readability.flesch_kincaid_grade, issue
            )?;
        }
        writeln!(w)?;
    }

    writeln!(w, "### Readability Distribution")?;
    writeln!(w)?;
    writeln!(w, "| Level | Count | Percentage |")?;
    writeln!(w, "|-------|------:|-----------:|")?;
    for (label, count) in distribution(results) {
        let percent = count as f64 / results.len() as f64 * 100.0;
        writeln!(w, "| {label} | {count} | {percent:.0}% |")?;
    }
    Ok(())
}

/// Non-empty reading-ease bands, easiest first.
fn distribution(results: &[AnalysisResult]) -> Vec<(&'static str, usize)> {
    let mut counts = [0usize; EASE_BANDS.len()];
    for r in results {
        let score = r.readability.flesch_reading_ease;
        if let Some(band) = EASE_BANDS.iter().position(|(min, _)| score >= *min) {
            counts[band] += 1;
        }
    }
    EASE_BANDS
        .iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .map(|((_, label), count)| (*label, count))
        .collect()
}

#[derive(Debug, Default)]
struct Totals {
    passed: usize,
    failed: usize,
    words: usize,
    lines: usize,
}

impl Totals {
    fn of(results: &[AnalysisResult]) -> Self {
        results.iter().fold(Self::default(), |mut t, r| {
            if r.status.is_fail() {
                t.failed += 1;
            } else {
                t.passed += 1;
            }
            t.words += r.structural.words;
            t.lines += r.structural.lines;
            t
        })
    }
}
