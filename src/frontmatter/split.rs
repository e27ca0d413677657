//! Split a document into its frontmatter block and body.

use std::ops::Range;

/// Line that opens and closes a frontmatter block.
pub const DELIMITER: &str = "---";

/// A document separated into an optional frontmatter block and a body.
///
/// Both parts borrow from the original text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitDocument<'a> {
    source: &'a str,
    frontmatter: Option<Range<usize>>,
    body_start: usize,
}

impl<'a> SplitDocument<'a> {
    /// Lines between the delimiters, without the trailing newline.
    /// `None` when the document has no (closed) frontmatter block.
    pub fn frontmatter(&self) -> Option<&'a str> {
        self.frontmatter.clone().map(|range| &self.source[range])
    }

    /// Frontmatter text, empty when there is none.
    pub fn frontmatter_text(&self) -> &'a str {
        self.frontmatter().unwrap_or("")
    }

    /// Byte range of the frontmatter block within the original text.
    pub fn frontmatter_range(&self) -> Option<Range<usize>> {
        self.frontmatter.clone()
    }

    pub fn body(&self) -> &'a str {
        &self.source[self.body_start..]
    }
}

/// Strip the opening delimiter line, returning the text after it.
fn strip_opening(content: &str) -> Option<&str> {
    let rest = content.strip_prefix(DELIMITER)?;
    rest.strip_prefix('\n').or_else(|| rest.strip_prefix("\r\n"))
}

/// Split `content` into frontmatter and body.
///
/// A block that is opened but never closed is not frontmatter: the whole
/// text is returned as body.
pub fn split(content: &str) -> SplitDocument<'_> {
    let no_frontmatter = SplitDocument {
        source: content,
        frontmatter: None,
        body_start: 0,
    };

    let Some(rest) = strip_opening(content) else {
        return no_frontmatter;
    };
    let start = content.len() - rest.len();

    let mut offset = start;
    for line in rest.split_inclusive('\n') {
        if line.trim() == DELIMITER {
            // The newline ending the last frontmatter line belongs to neither part.
            let end = if offset > start { offset - 1 } else { start };
            return SplitDocument {
                source: content,
                frontmatter: Some(start..end),
                body_start: offset + line.len(),
            };
        }
        offset += line.len();
    }

    no_frontmatter
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_frontmatter_returns_whole_body() {
        let content = "# Title\n\nbody";
        let doc = split(content);
        assert!(doc.frontmatter().is_none());
        assert_eq!(doc.frontmatter_text(), "");
        assert_eq!(doc.body(), content);
    }

    #[test]
    fn splits_frontmatter_and_body() {
        let doc = split("---\nfoo: bar\nbaz: 1\n---\n# Hello\n");
        assert_eq!(doc.frontmatter(), Some("foo: bar\nbaz: 1"));
        assert_eq!(doc.body(), "# Hello\n");
    }

    #[test]
    fn empty_frontmatter_block() {
        let doc = split("---\n---\nbody");
        assert_eq!(doc.frontmatter(), Some(""));
        assert_eq!(doc.body(), "body");
    }

    #[test]
    fn unclosed_frontmatter_is_body() {
        let content = "---\nfoo: bar\nno closing delimiter\n";
        let doc = split(content);
        assert!(doc.frontmatter().is_none());
        assert_eq!(doc.body(), content);
    }

    #[test]
    fn closing_delimiter_at_end_of_file() {
        let doc = split("---\nfoo: bar\n---");
        assert_eq!(doc.frontmatter(), Some("foo: bar"));
        assert_eq!(doc.body(), "");
    }

    #[test]
    fn closing_delimiter_tolerates_surrounding_whitespace() {
        let doc = split("---\nfoo: bar\n---  \nbody");
        assert_eq!(doc.frontmatter(), Some("foo: bar"));
        assert_eq!(doc.body(), "body");
    }

    #[test]
    fn opening_delimiter_must_be_alone_on_first_line() {
        let content = "--- not frontmatter\nfoo: bar\n---\n";
        assert!(split(content).frontmatter().is_none());
        assert!(split("---").frontmatter().is_none());
        assert!(split("\n---\nfoo: bar\n---\n").frontmatter().is_none());
    }

    #[test]
    fn crlf_line_endings() {
        let doc = split("---\r\nfoo: bar\r\n---\r\nbody\r\n");
        assert_eq!(doc.frontmatter(), Some("foo: bar\r"));
        assert_eq!(doc.body(), "body\r\n");
    }

    #[test]
    fn range_points_into_source() {
        let content = "---\na: 1\n---\nbody";
        let doc = split(content);
        let range = doc.frontmatter_range().expect("frontmatter range");
        assert_eq!(&content[range], "a: 1");
        assert_eq!(doc.body(), "body");
    }
}
