//! Documentation content analysis
//!
//! Computes structure, heading, readability and composition metrics for
//! Markdown files and checks them against configured thresholds.

mod markdown;
pub mod output;
mod readability;

use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use tracing::debug;
use walkdir::WalkDir;

use crate::config::{AnalyzeConfig, Thresholds};
use crate::error::{DocmatterError, Result, fs as fs_error};
use crate::frontmatter;
use crate::operations::read_document;
use crate::workspace::to_forward_slashes;

pub use readability::Readability;

/// Words read per minute for reading time estimates
const WORDS_PER_MINUTE: usize = 200;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Structural {
    pub lines: usize,
    pub words: usize,
    pub sentences: usize,
    pub characters: usize,
    pub reading_time_minutes: usize,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headings {
    pub h1: usize,
    pub h2: usize,
    pub h3: usize,
    pub h4: usize,
    pub h5: usize,
    pub h6: usize,
}

impl From<[usize; 6]> for Headings {
    fn from(levels: [usize; 6]) -> Self {
        let [h1, h2, h3, h4, h5, h6] = levels;
        Self { h1, h2, h3, h4, h5, h6 }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Composition {
    pub total_lines: usize,
    pub prose_lines: usize,
    pub code_lines: usize,
    pub empty_lines: usize,
    pub code_block_ratio: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pass,
    Fail,
}

impl Status {
    pub fn is_fail(self) -> bool {
        self == Self::Fail
    }
}

/// Metrics for one file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub file: String,
    pub structural: Structural,
    pub headings: Headings,
    pub readability: Readability,
    pub composition: Composition,
    pub status: Status,
    /// Thresholds this file exceeded, in check order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<String>,
}

/// Analyzes Markdown files against a set of thresholds
#[derive(Debug, Clone)]
pub struct Analyzer {
    thresholds: Thresholds,
    skip: Vec<String>,
    show_progress: bool,
}

impl Analyzer {
    pub fn new(config: &AnalyzeConfig) -> Self {
        Self {
            thresholds: config.thresholds,
            skip: config.skip.clone(),
            show_progress: false,
        }
    }

    /// Show a progress bar on stderr while analyzing directories.
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Analyze Markdown `content`, reported under the name `file`.
    pub fn analyze(&self, file: &str, content: &str) -> AnalysisResult {
        let (total_lines, empty_lines) = markdown::line_counts(content);
        let doc = frontmatter::split(content);
        let parsed = markdown::parse(doc.body());

        let counts = readability::TextCounts::from_prose(&parsed.prose);
        let structural = Structural {
            lines: total_lines,
            words: counts.words,
            sentences: counts.sentences,
            characters: parsed.prose.chars().count(),
            reading_time_minutes: reading_time(counts.words),
        };
        let composition = Composition {
            total_lines,
            prose_lines: total_lines.saturating_sub(parsed.code_lines + empty_lines),
            code_lines: parsed.code_lines,
            empty_lines,
            code_block_ratio: ratio(parsed.code_lines, total_lines),
        };
        let readability = Readability::from_counts(&counts);

        let issues = self.issues(&structural, &readability);
        let status = if issues.is_empty() {
            Status::Pass
        } else {
            Status::Fail
        };

        AnalysisResult {
            file: file.to_string(),
            structural,
            headings: parsed.headings.into(),
            readability,
            composition,
            status,
            issues: issues.into_iter().map(str::to_string).collect(),
        }
    }

    pub fn analyze_file(&self, path: &Path) -> Result<AnalysisResult> {
        let content = read_document(path)?;
        Ok(self.analyze(&to_forward_slashes(path), &content))
    }

    /// Analyze every Markdown file under `dir`, in path order.
    pub fn analyze_directory(&self, dir: &Path) -> Result<Vec<AnalysisResult>> {
        let files = self.markdown_files(dir)?;
        debug!(dir = %dir.display(), count = files.len(), "analyzing directory");

        let progress = self.progress_bar(files.len());
        let mut results = Vec::with_capacity(files.len());
        for file in &files {
            progress.set_message(to_forward_slashes(file));
            match self.analyze_file(file) {
                Ok(result) => results.push(result),
                Err(err) => {
                    progress.abandon();
                    return Err(err);
                }
            }
            progress.inc(1);
        }
        progress.finish_and_clear();

        Ok(results)
    }

    /// Analyze a single file, or every Markdown file in a directory.
    pub fn analyze_path(&self, path: &Path) -> Result<Vec<AnalysisResult>> {
        if path.is_dir() {
            self.analyze_directory(path)
        } else if path.is_file() {
            Ok(vec![self.analyze_file(path)?])
        } else {
            Err(DocmatterError::FileNotFound {
                path: path.display().to_string(),
            })
        }
    }

    fn markdown_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        if !dir.is_dir() {
            return Err(fs_error::directory_not_found(dir));
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(dir).sort_by_file_name() {
            let entry = entry.map_err(std::io::Error::from)?;
            if !entry.file_type().is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy();
            if !name.to_lowercase().ends_with(".md") {
                continue;
            }
            if self.skip.iter().any(|skip| skip.as_str() == name) {
                debug!(path = %entry.path().display(), "skipped by name");
                continue;
            }
            files.push(entry.into_path());
        }
        Ok(files)
    }

    fn progress_bar(&self, len: usize) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }
        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {wide_msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        let bar = ProgressBar::new(len as u64);
        bar.set_style(style);
        bar
    }

    fn issues(&self, structural: &Structural, scores: &Readability) -> Vec<&'static str> {
        let t = &self.thresholds;
        let mut issues = Vec::new();
        if scores.flesch_kincaid_grade > t.max_flesch_kincaid_grade {
            issues.push("Grade level too high");
        }
        if scores.ari > t.max_ari {
            issues.push("ARI too high");
        }
        if scores.gunning_fog > t.max_gunning_fog {
            issues.push("Gunning fog too high");
        }
        if scores.flesch_reading_ease < t.min_flesch_reading_ease {
            issues.push("Reading ease too low");
        }
        if t.max_lines > 0 && structural.lines > t.max_lines {
            issues.push("Too many lines");
        }
        issues
    }
}

fn reading_time(words: usize) -> usize {
    let minutes = words / WORDS_PER_MINUTE;
    if minutes == 0 && words > 0 { 1 } else { minutes }
}

fn ratio(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const EASY: &str = "---\ntitle: Easy\n---\n# Start\n\nWe go to the park. It is fun.\n\n## Code\n\n```sh\nls\ncd docs\n```\n";

    fn analyzer() -> Analyzer {
        Analyzer::new(&AnalyzeConfig::default())
    }

    #[test]
    fn analyze_counts_structure() {
        let result = analyzer().analyze("easy.md", EASY);

        assert_eq!(result.file, "easy.md");
        assert_eq!(result.structural.lines, 13);
        assert_eq!(result.structural.words, 10);
        assert_eq!(result.structural.reading_time_minutes, 1);
        assert_eq!(result.headings, Headings { h1: 1, h2: 1, ..Headings::default() });
        assert_eq!(result.composition.code_lines, 2);
        assert_eq!(result.composition.empty_lines, 3);
        assert_eq!(result.composition.prose_lines, 8);
        assert!((result.composition.code_block_ratio - 2.0 / 13.0).abs() < 1e-9);
        assert_eq!(result.status, Status::Pass);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn frontmatter_is_not_prose() {
        let result = analyzer().analyze("a.md", "---\ntitle: Lots of words here\n---\n");
        assert_eq!(result.structural.words, 0);
        assert_eq!(result.readability, Readability::default());
    }

    #[test]
    fn empty_file() {
        let result = analyzer().analyze("empty.md", "");
        assert_eq!(result.structural, Structural::default());
        assert_eq!(result.composition.code_block_ratio, 0.0);
    }

    #[test]
    fn line_threshold_fails() {
        let mut config = AnalyzeConfig::default();
        config.thresholds.max_lines = 5;
        let result = Analyzer::new(&config).analyze("long.md", EASY);

        assert_eq!(result.status, Status::Fail);
        assert_eq!(result.issues, vec!["Too many lines"]);

        config.thresholds.max_lines = 0;
        let result = Analyzer::new(&config).analyze("long.md", EASY);
        assert_eq!(result.status, Status::Pass);
    }

    #[test]
    fn dense_prose_fails_readability() {
        let content = "Comprehensive documentation necessitates organizational considerations regarding terminological standardization.\n";
        let result = analyzer().analyze("dense.md", content);

        assert_eq!(result.status, Status::Fail);
        assert_eq!(result.issues.first().map(String::as_str), Some("Grade level too high"));
    }

    #[test]
    fn json_shape() {
        let result = analyzer().analyze("easy.md", EASY);
        let value = serde_json::to_value(&result).unwrap();

        assert_eq!(value["file"], "easy.md");
        assert_eq!(value["status"], "pass");
        assert_eq!(value["headings"]["h2"], 1);
        assert!(value["readability"]["flesch_kincaid_grade"].is_number());
        assert!(value["composition"]["code_block_ratio"].is_number());
        assert!(value.get("issues").is_none());
    }

    #[test]
    fn directory_walk_skips_configured_names() {
        let temp = TempDir::new().unwrap();
        let docs = temp.path().join("docs");
        fs::create_dir_all(docs.join("nested")).unwrap();
        fs::write(docs.join("b.md"), "Text.\n").unwrap();
        fs::write(docs.join("nested/a.MD"), "Text.\n").unwrap();
        fs::write(docs.join("CHANGELOG.md"), "Text.\n").unwrap();
        fs::write(docs.join("notes.txt"), "Text.\n").unwrap();

        let results = analyzer().analyze_path(&docs).unwrap();
        let files: Vec<_> = results
            .iter()
            .map(|r| r.file.rsplit('/').next().unwrap().to_string())
            .collect();

        assert_eq!(files, vec!["b.md", "a.MD"]);
    }

    #[test]
    fn missing_path_is_an_error() {
        let temp = TempDir::new().unwrap();
        let err = analyzer().analyze_path(&temp.path().join("nope")).unwrap_err();
        assert!(matches!(err, DocmatterError::FileNotFound { .. }));
    }
}
