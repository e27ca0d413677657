//! Add a missing `title` to a document's frontmatter

use std::path::Path;

use tracing::debug;

use super::{Change, FileOutcome, SkipReason, WriteMode, read_document};
use crate::error::Result;
use crate::frontmatter::{self, MergeOutcome};

/// Insert a title into the document at `path` if it has none.
pub fn process_file(path: &Path, mode: WriteMode) -> FileOutcome {
    FileOutcome::from_result(add_title(path, mode))
}

fn add_title(path: &Path, mode: WriteMode) -> Result<FileOutcome> {
    let content = read_document(path)?;
    let doc = frontmatter::split(&content);
    let title = frontmatter::resolve_title(doc.body(), path);

    match frontmatter::insert_title(&doc, &title.text) {
        MergeOutcome::AlreadyTitled => Ok(FileOutcome::Skipped(SkipReason::TitleExists)),
        MergeOutcome::Inserted(updated) => {
            debug!(title = %title.text, source = %title.source, "resolved title");
            mode.commit(path, &updated)?;
            Ok(FileOutcome::Updated(Change::TitleAdded(title)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DocmatterError;
    use crate::frontmatter::TitleSource;
    use std::fs;
    use tempfile::TempDir;

    fn doc(temp: &TempDir, relative: &str, content: &str) -> std::path::PathBuf {
        let path = temp.path().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn adds_title_from_heading() {
        let temp = TempDir::new().unwrap();
        let path = doc(&temp, "docs/page.md", "---\nfoo: bar\n---\n# Hello World\n\ntext");

        let outcome = process_file(&path, WriteMode::Apply);

        match outcome {
            FileOutcome::Updated(Change::TitleAdded(title)) => {
                assert_eq!(title.text, "Hello World");
                assert_eq!(title.source, TitleSource::Heading);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "---\ntitle: Hello World\nfoo: bar\n---\n# Hello World\n\ntext"
        );
    }

    #[test]
    fn adds_title_from_index_parent() {
        let temp = TempDir::new().unwrap();
        let path = doc(&temp, "docs/guides/index.md", "Intro without heading.\n");

        process_file(&path, WriteMode::Apply);

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "---\ntitle: Guides\n---\nIntro without heading.\n"
        );
    }

    #[test]
    fn existing_title_is_skipped_and_untouched() {
        let temp = TempDir::new().unwrap();
        let content = "---\ntitle: Already Set\n---\n# Different\n";
        let path = doc(&temp, "docs/set.md", content);

        let outcome = process_file(&path, WriteMode::Apply);

        assert!(matches!(outcome, FileOutcome::Skipped(SkipReason::TitleExists)));
        assert_eq!(fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn second_run_skips() {
        let temp = TempDir::new().unwrap();
        let path = doc(&temp, "docs/my-cool_page.md", "body\n");

        process_file(&path, WriteMode::Apply);
        let first = fs::read_to_string(&path).unwrap();
        let outcome = process_file(&path, WriteMode::Apply);

        assert!(matches!(outcome, FileOutcome::Skipped(_)));
        assert_eq!(fs::read_to_string(&path).unwrap(), first);
        assert!(first.starts_with("---\ntitle: My Cool Page\n---\n"));
    }

    #[test]
    fn dry_run_reports_without_writing() {
        let temp = TempDir::new().unwrap();
        let path = doc(&temp, "docs/page.md", "# Page\n");

        let outcome = process_file(&path, WriteMode::DryRun);

        assert!(matches!(outcome, FileOutcome::Updated(_)));
        assert_eq!(fs::read_to_string(&path).unwrap(), "# Page\n");
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_document_is_updated_through_the_link() {
        let temp = TempDir::new().unwrap();
        let shared = doc(&temp, "shared.md", "# Shared\n");
        let link = temp.path().join("link.md");
        std::os::unix::fs::symlink(&shared, &link).unwrap();

        let outcome = process_file(&link, WriteMode::Apply);

        assert!(matches!(outcome, FileOutcome::Updated(Change::TitleAdded(_))));
        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(
            fs::read_to_string(&shared).unwrap(),
            "---\ntitle: Shared\n---\n# Shared\n"
        );
    }

    #[test]
    fn unreadable_file_fails() {
        let temp = TempDir::new().unwrap();
        let outcome = process_file(&temp.path().join("missing.md"), WriteMode::Apply);
        assert!(matches!(
            outcome,
            FileOutcome::Failed(DocmatterError::FileNotFound { .. })
        ));
    }
}
