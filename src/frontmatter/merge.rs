//! Insert a `title` line into a document's frontmatter.

use super::TITLE_KEY;
use super::split::{DELIMITER, SplitDocument};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// Frontmatter already carries a `title:` line; nothing to do.
    AlreadyTitled,
    /// Full rewritten document.
    Inserted(String),
}

/// Whether any frontmatter line starts with `title:` (case-sensitive).
pub fn has_title_key(frontmatter: &str) -> bool {
    frontmatter.lines().any(|line| line.starts_with(TITLE_KEY))
}

/// Prepend `title: <title>` to the frontmatter of `doc` and rebuild the
/// document. A document without frontmatter gets a new block. Leading
/// whitespace of the body is dropped.
pub fn insert_title(doc: &SplitDocument<'_>, title: &str) -> MergeOutcome {
    let frontmatter = doc.frontmatter_text();
    if has_title_key(frontmatter) {
        return MergeOutcome::AlreadyTitled;
    }

    let title_line = format!("{TITLE_KEY} {title}");
    let new_frontmatter = if frontmatter.is_empty() {
        title_line
    } else {
        format!("{title_line}\n{frontmatter}")
    };

    MergeOutcome::Inserted(format!(
        "{DELIMITER}\n{new_frontmatter}\n{DELIMITER}\n{}",
        doc.body().trim_start()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontmatter::split;

    fn inserted(content: &str, title: &str) -> String {
        match insert_title(&split(content), title) {
            MergeOutcome::Inserted(out) => out,
            MergeOutcome::AlreadyTitled => panic!("expected an insertion"),
        }
    }

    #[test]
    fn prepends_title_to_existing_frontmatter() {
        let out = inserted("---\nfoo: bar\n---\n# Hello World\n\ntext", "Hello World");
        assert_eq!(out, "---\ntitle: Hello World\nfoo: bar\n---\n# Hello World\n\ntext");
    }

    #[test]
    fn strips_leading_blank_lines_from_body() {
        let out = inserted("---\nfoo: bar\n---\n\n\ntext", "Hello World");
        let doc = split(&out);
        assert_eq!(doc.frontmatter(), Some("title: Hello World\nfoo: bar"));
        assert_eq!(doc.body(), "text");
    }

    #[test]
    fn creates_frontmatter_when_missing() {
        let out = inserted("\n# Guide\n\nbody\n", "Guide");
        assert_eq!(out, "---\ntitle: Guide\n---\n# Guide\n\nbody\n");
    }

    #[test]
    fn empty_frontmatter_block_gets_title_only() {
        let out = inserted("---\n---\nbody", "Page");
        assert_eq!(out, "---\ntitle: Page\n---\nbody");
    }

    #[test]
    fn existing_title_is_skipped() {
        let doc = split("---\ntitle: Already Set\nfoo: bar\n---\n# Other\n");
        assert_eq!(insert_title(&doc, "Other"), MergeOutcome::AlreadyTitled);
    }

    #[test]
    fn title_key_match_is_anchored_and_case_sensitive() {
        assert!(has_title_key("foo: bar\ntitle: x"));
        assert!(!has_title_key("seo_title: x"));
        assert!(!has_title_key("  title: nested"));
        assert!(!has_title_key("Title: x"));
    }

    #[test]
    fn title_with_colon_is_inserted_verbatim() {
        let out = inserted("# Example: Thing\n", "Example: Thing");
        assert!(out.starts_with("---\ntitle: Example: Thing\n---\n"));
    }

    #[test]
    fn unclosed_block_is_kept_in_body() {
        let out = inserted("---\nfoo: bar\nbody", "Page");
        assert_eq!(out, "---\ntitle: Page\n---\n---\nfoo: bar\nbody");
    }

    #[test]
    fn second_pass_is_a_no_op() {
        let out = inserted("---\nfoo: bar\n---\n# Hello\n", "Hello");
        assert_eq!(insert_title(&split(&out), "Hello"), MergeOutcome::AlreadyTitled);
    }
}
