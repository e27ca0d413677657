//! `docmatter version`: build details plus the defaults a bug report needs

use clap::ValueEnum;

use crate::cli::OutputFormat;
use crate::config::{CONFIG_FILE_NAME, Thresholds};
use crate::error::Result;

pub fn run() -> Result<()> {
    print!("{}", version_report());
    Ok(())
}

fn version_report() -> String {
    let formats: Vec<String> = OutputFormat::value_variants()
        .iter()
        .filter_map(|format| format.to_possible_value())
        .map(|value| value.get_name().to_string())
        .collect();
    let thresholds = Thresholds::default();
    let profile = if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    };

    format!(
        "docmatter {version}\n\
         \n\
         Build info:\n  \
           Minimum Rust version: {rust}\n  \
           Profile: {profile}\n\
         \n\
         Defaults:\n  \
           Config file: {CONFIG_FILE_NAME}\n  \
           Analyze formats: {formats}\n  \
           Max grade / ARI / lines: {grade} / {ari} / {lines}\n",
        version = env!("CARGO_PKG_VERSION"),
        rust = env!("CARGO_PKG_RUST_VERSION"),
        formats = formats.join(", "),
        grade = thresholds.max_flesch_kincaid_grade,
        ari = thresholds.max_ari,
        lines = thresholds.max_lines,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_lists_version_and_defaults() {
        let report = version_report();
        assert!(report.starts_with(&format!("docmatter {}\n", env!("CARGO_PKG_VERSION"))));
        assert!(report.contains("Build info:"));
        assert!(report.contains("Config file: docmatter.yaml"));
        assert!(report.contains("Analyze formats: table, json, markdown, summary"));
        assert!(report.contains("Max grade / ARI / lines: 14 / 14 / 375"));
    }
}
